/// Lifecycle of a one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TimerState {
    #[default]
    Idle,
    Armed {
        fire_at: f64,
    },
    Fired,
    Disarmed,
}

/// Deferred action that fires at most once per arming.
///
/// Times are seconds on the simulation clock. A fired or disarmed timer stays
/// quiet until it is armed again.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OneShotTimer {
    state: TimerState,
}

impl OneShotTimer {
    /// A timer armed to fire `delay` seconds after `now`.
    pub fn armed(now: f64, delay: f64) -> Self {
        let mut timer = Self::default();
        timer.arm(now, delay);
        timer
    }

    /// Arm (or re-arm) to fire `delay` seconds after `now`. Negative delays fire immediately.
    pub fn arm(&mut self, now: f64, delay: f64) {
        self.state = TimerState::Armed {
            fire_at: now + delay.max(0.0),
        };
    }

    pub fn disarm(&mut self) {
        if self.is_armed() {
            self.state = TimerState::Disarmed;
        }
    }

    /// Returns true exactly once, on the first poll at or after the fire time.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.state {
            TimerState::Armed { fire_at } if now >= fire_at => {
                self.state = TimerState::Fired;
                true
            }
            _ => false,
        }
    }

    pub fn fire_at(&self) -> Option<f64> {
        match self.state {
            TimerState::Armed { fire_at } => Some(fire_at),
            _ => None,
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, TimerState::Armed { .. })
    }

    pub fn has_fired(&self) -> bool {
        self.state == TimerState::Fired
    }

    pub fn state(&self) -> TimerState {
        self.state
    }
}
