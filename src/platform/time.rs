//! Run clock
//!
//! Counts run time in milliseconds. Time does not advance while suspended,
//! so a level transition or the game-over screen freezes spawn timers.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunClock {
    elapsed_ms: f64,
    suspended: bool,
}

impl RunClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart the run at zero
    pub fn init(&mut self) {
        self.elapsed_ms = 0.0;
        self.suspended = false;
    }

    pub fn advance(&mut self, dt_ms: f64) {
        if !self.suspended {
            self.elapsed_ms += dt_ms;
        }
    }

    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    pub fn resume(&mut self) {
        self.suspended = false;
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }
}
