//! Linear stack of drill-down panels inside the content region.
//!
//! Panels are addressed by position; `current` is the only panel on screen.
//! Page numbers are 1-based and always equal `index + 1`.

use crate::services::templates::PageContent;
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Default)]
pub struct Panel {
    pub pagenum: usize,
    pub content: Option<PageContent>,
    pub selection: ListState,
}

impl Panel {
    fn new(pagenum: usize) -> Self {
        Self {
            pagenum,
            content: None,
            selection: ListState::default(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.content.as_ref().map(|c| c.title.as_str())
    }

    /// Install rendered content and put the cursor on the first link.
    pub fn fill(&mut self, content: PageContent) {
        let has_links = !content.links().is_empty();
        self.content = Some(content);
        self.selection = ListState::default();
        if has_links {
            self.selection.select(Some(0));
        }
    }
}

#[derive(Debug)]
pub struct PageStack {
    panels: Vec<Panel>,
    current: usize,
}

impl Default for PageStack {
    fn default() -> Self {
        Self {
            panels: vec![Panel::new(1)],
            current: 0,
        }
    }
}

impl PageStack {
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Panel {
        &self.panels[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Panel {
        &mut self.panels[self.current]
    }

    pub fn get(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Panel> {
        self.panels.get_mut(index)
    }

    /// Every panel paired with its "is current" flag.
    pub fn panels(&self) -> impl Iterator<Item = (&Panel, bool)> {
        let current = self.current;
        self.panels.iter().enumerate().map(move |(i, p)| (p, i == current))
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.panels.len()
    }

    /// Index of the panel after the current one, fabricating an empty one
    /// when the current panel is the last.
    pub fn ensure_next(&mut self) -> usize {
        if !self.has_next() {
            let pagenum = self.current().pagenum + 1;
            self.panels.push(Panel::new(pagenum));
        }
        self.current + 1
    }

    /// Move one panel in `direction`. Returns false when there is nowhere
    /// to go; the stack is left untouched in that case.
    pub fn change(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Next if self.has_next() => {
                self.current += 1;
                let panel = self.current_mut();
                if panel.selection.selected().is_some() {
                    panel.selection.select(Some(0));
                }
                *panel.selection.offset_mut() = 0;
                true
            }
            Direction::Previous if !self.is_first() => {
                self.current -= 1;
                true
            }
            _ => false,
        }
    }

    /// Drop every panel positioned after `index`.
    pub fn truncate_after(&mut self, index: usize) {
        self.panels.truncate(index + 1);
        if self.current > index {
            self.current = index;
        }
    }

    /// Back to a single, empty first panel.
    pub fn reset(&mut self) {
        self.panels.truncate(1);
        self.current = 0;
        self.panels[0] = Panel::new(1);
    }
}
