//! Content region state machine.
//!
//! `Closed -> Opening -> Open -> Sliding -> Open -> Closing -> Closed`.
//! Opening, Sliding and Closing are timed transitions; while one runs the
//! region is `animating`. `processing` is set while a page load or a
//! comment POST is in flight. Either flag makes the region refuse navigation.

use super::{CommentForm, Direction, PageStack};
use crate::model::MenuItem;
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionPhase {
    Closed,
    Opening,
    Open,
    Sliding,
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardFocus {
    Menu,
    Content,
    CommentForm,
}

pub struct DashboardState {
    pub menu: Vec<MenuItem>,
    pub menu_state: ListState,
    pub active_menu: Option<usize>,
    pub phase: RegionPhase,
    pub processing: bool,
    pub transition_ticks: u64,
    pub transition_remaining: u64,
    /// Which way the running `Sliding` transition moves.
    pub slide_direction: Direction,
    pub focus: DashboardFocus,
    pub stack: PageStack,
    pub comment_form: CommentForm,
}

impl DashboardState {
    pub fn new(menu: Vec<MenuItem>, transition_ticks: u64) -> Self {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));
        Self {
            menu,
            menu_state,
            active_menu: None,
            phase: RegionPhase::Closed,
            processing: false,
            transition_ticks,
            transition_remaining: 0,
            slide_direction: Direction::Next,
            focus: DashboardFocus::Menu,
            stack: PageStack::default(),
            comment_form: CommentForm::default(),
        }
    }

    pub fn animating(&self) -> bool {
        matches!(
            self.phase,
            RegionPhase::Opening | RegionPhase::Sliding | RegionPhase::Closing
        )
    }

    pub fn is_locked(&self) -> bool {
        self.processing || self.animating()
    }

    pub fn is_open(&self) -> bool {
        self.phase != RegionPhase::Closed
    }

    /// Start a timed transition. A zero-length transition settles at once.
    pub fn begin(&mut self, phase: RegionPhase) {
        self.phase = phase;
        self.transition_remaining = self.transition_ticks;
        if self.transition_remaining == 0 {
            self.settle();
        }
    }

    /// Advance the running transition by one tick.
    pub fn tick(&mut self) {
        if !self.animating() {
            return;
        }
        self.transition_remaining = self.transition_remaining.saturating_sub(1);
        if self.transition_remaining == 0 {
            self.settle();
        }
    }

    fn settle(&mut self) {
        self.phase = match self.phase {
            RegionPhase::Opening | RegionPhase::Sliding => RegionPhase::Open,
            RegionPhase::Closing => {
                self.focus = DashboardFocus::Menu;
                RegionPhase::Closed
            }
            other => other,
        };
    }

    /// Fraction of the running transition still to play, 0.0 when idle.
    pub fn transition_progress(&self) -> f32 {
        if !self.animating() || self.transition_ticks == 0 {
            return 0.0;
        }
        self.transition_remaining as f32 / self.transition_ticks as f32
    }

    pub fn selected_menu(&self) -> Option<usize> {
        self.menu_state.selected()
    }

    /// Drop all panels but the first and empty it.
    pub fn reset_page_stack(&mut self) {
        self.stack.reset();
        self.comment_form.clear();
        self.comment_form.enable();
    }

    /// Forget everything about the current session's navigation.
    pub fn reset(&mut self) {
        self.reset_page_stack();
        self.active_menu = None;
        self.phase = RegionPhase::Closed;
        self.processing = false;
        self.transition_remaining = 0;
        self.focus = DashboardFocus::Menu;
        self.menu_state.select(Some(0));
    }
}
