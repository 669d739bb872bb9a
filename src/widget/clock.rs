//! Millisecond clock used to time presses

pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Hand-driven clock for tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct ManualClock(std::rc::Rc<std::cell::Cell<f64>>);

#[cfg(test)]
impl ManualClock {
    pub fn advance(&self, ms: f64) {
        self.0.set(self.0.get() + ms);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.0.get()
    }
}
