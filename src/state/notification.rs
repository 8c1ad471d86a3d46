use super::TICK_MS;

/// State management for notifications
#[derive(Default)]
pub struct NotificationState {
    pub current_notification: Option<(String, Option<u64>, bool)>, // message, close_tick, minimal
}

impl NotificationState {
    pub fn set_notification(
        &mut self,
        message: impl Into<String>,
        ms: Option<u64>,
        minimal: bool,
        tick_count: u64,
    ) {
        let close_tick = ms.map(|duration| tick_count + duration / TICK_MS);
        self.current_notification = Some((message.into(), close_tick, minimal));
    }

    pub fn clear_notification(&mut self) {
        self.current_notification = None;
    }

    pub fn should_close_notification(&self, tick_count: u64) -> bool {
        if let Some((_, Some(close_tick), _)) = &self.current_notification {
            tick_count >= *close_tick
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_notification_closes_after_its_ticks() {
        let mut n = NotificationState::default();
        n.set_notification("saved", Some(500), true, 10);
        assert!(!n.should_close_notification(19));
        assert!(n.should_close_notification(20));
    }

    #[test]
    fn sticky_notification_never_expires() {
        let mut n = NotificationState::default();
        n.set_notification("Error: offline", None, false, 0);
        assert!(!n.should_close_notification(u64::MAX));
    }
}
