//! Deferred autoplay
//!
//! Starting playback a moment after the page becomes ready is a cancellable
//! scheduled action. It is armed on `BecameReady` and disarmed on
//! `BecameUnready` or on any change of the playing flag, so a manual play or
//! pause before the deadline wins. A second `BecameReady` reschedules from the
//! new transition rather than stacking. The host drives it with its own clock by calling
//! [`AutoplayScheduler::poll`] (e.g. from `requestAnimationFrame`).

use super::events::SessionEvent;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AutoplayScheduler {
    delay_ms: Option<f64>,
    deadline_ms: Option<f64>,
}

impl AutoplayScheduler {
    /// `None` disables autoplay entirely
    pub fn new(delay_ms: Option<f64>) -> Self {
        Self {
            delay_ms,
            deadline_ms: None,
        }
    }

    /// Change the delay; cancels anything pending
    pub fn set_delay(&mut self, delay_ms: Option<f64>) {
        self.delay_ms = delay_ms;
        self.deadline_ms = None;
    }

    /// Feed a session event observed at `now_ms`
    pub fn observe(&mut self, event: &SessionEvent, now_ms: f64) {
        match event {
            SessionEvent::BecameReady => {
                if let Some(delay) = self.delay_ms {
                    self.deadline_ms = Some(now_ms + delay);
                    log::debug!("Autoplay scheduled in {}ms", delay);
                }
            }
            SessionEvent::BecameUnready | SessionEvent::PlayingChanged { .. } => self.cancel(),
            SessionEvent::ActiveLineChanged { .. } => {}
        }
    }

    /// True exactly once when the armed deadline has passed
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                log::debug!("Autoplay fired");
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        if self.deadline_ms.take().is_some() {
            log::debug!("Autoplay cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let mut autoplay = AutoplayScheduler::new(Some(500.0));
        autoplay.observe(&SessionEvent::BecameReady, 1000.0);

        assert!(autoplay.is_pending());
        assert!(!autoplay.poll(1499.0));
        assert!(autoplay.poll(1500.0));
        assert!(!autoplay.poll(1600.0));
        assert!(!autoplay.is_pending());
    }

    #[test]
    fn test_unready_cancels() {
        let mut autoplay = AutoplayScheduler::new(Some(500.0));
        autoplay.observe(&SessionEvent::BecameReady, 0.0);
        autoplay.observe(&SessionEvent::BecameUnready, 100.0);
        assert!(!autoplay.poll(10_000.0));
    }

    #[test]
    fn test_ready_again_reschedules_from_last_transition() {
        let mut autoplay = AutoplayScheduler::new(Some(500.0));
        autoplay.observe(&SessionEvent::BecameReady, 0.0);
        autoplay.observe(&SessionEvent::BecameUnready, 100.0);
        autoplay.observe(&SessionEvent::BecameReady, 200.0);

        assert!(!autoplay.poll(600.0));
        assert!(autoplay.poll(700.0));
    }

    #[test]
    fn test_disabled_never_fires() {
        let mut autoplay = AutoplayScheduler::new(None);
        autoplay.observe(&SessionEvent::BecameReady, 0.0);
        assert!(!autoplay.is_pending());
        assert!(!autoplay.poll(1e9));
    }

    #[test]
    fn test_other_events_ignored() {
        let mut autoplay = AutoplayScheduler::new(Some(10.0));
        autoplay.observe(&SessionEvent::BecameReady, 0.0);
        autoplay.observe(
            &SessionEvent::ActiveLineChanged {
                index: Some(0),
                text: "x".to_string(),
            },
            5.0,
        );
        assert!(autoplay.poll(10.0));
    }

    #[test]
    fn test_manual_playback_change_cancels_pending() {
        let mut autoplay = AutoplayScheduler::new(Some(500.0));
        autoplay.observe(&SessionEvent::BecameReady, 0.0);
        autoplay.observe(&SessionEvent::PlayingChanged { playing: true }, 100.0);
        autoplay.observe(&SessionEvent::PlayingChanged { playing: false }, 200.0);

        assert!(!autoplay.is_pending());
        assert!(!autoplay.poll(1000.0));
    }

    #[test]
    fn test_set_delay_cancels_pending() {
        let mut autoplay = AutoplayScheduler::new(Some(10.0));
        autoplay.observe(&SessionEvent::BecameReady, 0.0);
        autoplay.set_delay(Some(20.0));
        assert!(!autoplay.poll(100.0));
    }
}
