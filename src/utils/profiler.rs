use std::time::Instant;

/// Logs how long a scope took when dropped. Does nothing unless debug logging is on.
pub struct ScopeTimer {
    name: &'static str,
    start: Option<Instant>,
}

impl ScopeTimer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: log::log_enabled!(log::Level::Debug).then(Instant::now),
        }
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        if let Some(start) = self.start {
            log::debug!("[TIMER] {} took {:?}", self.name, start.elapsed());
        }
    }
}
