/// Welcome overlay lifecycle. There is no transition back to `Showing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WelcomeState {
    Showing,
    Hidden,
}

/// One-shot delayed dismissal of the welcome overlay.
///
/// The timer is armed with an absolute deadline. It can be fired either by
/// polling a clock against that deadline or directly by a host timer
/// callback; both paths fire at most once and never after `cancel`.
#[derive(Clone, Copy, Debug)]
pub struct WelcomeTimer {
    state: WelcomeState,
    deadline_ms: Option<u64>,
    delay_ms: u32,
}

impl WelcomeTimer {
    pub fn arm(mounted_at_ms: u64, delay_ms: u32) -> Self {
        Self {
            state: WelcomeState::Showing,
            deadline_ms: Some(mounted_at_ms.saturating_add(u64::from(delay_ms))),
            delay_ms,
        }
    }

    pub fn state(&self) -> WelcomeState {
        self.state
    }

    pub fn is_showing(&self) -> bool {
        self.state == WelcomeState::Showing
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => self.fire(),
            _ => false,
        }
    }

    /// Hides the overlay if the timer is still pending. Returns whether the
    /// state changed.
    pub fn fire(&mut self) -> bool {
        if self.deadline_ms.take().is_none() {
            return false;
        }
        self.state = WelcomeState::Hidden;
        true
    }

    /// Drops the pending action. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline_ms.take().is_some()
    }
}
