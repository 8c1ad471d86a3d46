#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentField {
    Name,
    Body,
    Submit,
}

impl CommentField {
    const ORDER: [CommentField; 3] = [CommentField::Name, CommentField::Body, CommentField::Submit];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// The comment form shown under a single post.
pub struct CommentForm {
    pub name: String,
    pub body: String,
    pub field: CommentField,
    pub disabled: bool,
}

impl Default for CommentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            body: String::new(),
            field: CommentField::Name,
            disabled: false,
        }
    }
}

impl CommentForm {
    pub fn disable(&mut self) {
        self.disabled = true;
    }

    pub fn enable(&mut self) {
        self.disabled = false;
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.body.clear();
        self.field = CommentField::Name;
    }

    pub fn focused_input(&mut self) -> Option<&mut String> {
        match self.field {
            CommentField::Name => Some(&mut self.name),
            CommentField::Body => Some(&mut self.body),
            CommentField::Submit => None,
        }
    }
}
