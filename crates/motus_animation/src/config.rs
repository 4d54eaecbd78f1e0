//! Scheduler configuration

/// Tuning knobs for a [`Scheduler`](crate::Scheduler)
#[derive(Clone, Debug, PartialEq)]
pub struct SchedulerConfig {
    /// Upper bound applied to each frame delta, in seconds.
    ///
    /// `None` passes deltas through unchanged. A bound keeps a long stall
    /// (debugger break, window drag) from finishing every animation at once.
    pub max_frame_delta: Option<f32>,
    /// Initial capacity of the running registry
    pub running_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_frame_delta: None,
            running_capacity: 32,
        }
    }
}

impl SchedulerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_frame_delta(mut self, seconds: f32) -> Self {
        self.max_frame_delta = Some(seconds);
        self
    }

    pub fn with_running_capacity(mut self, capacity: usize) -> Self {
        self.running_capacity = capacity;
        self
    }

    /// Sanitize a host-supplied delta: negative becomes zero, spikes are capped
    pub fn frame_delta(&self, dt: f32) -> f32 {
        let dt = dt.max(0.0);
        match self.max_frame_delta {
            Some(max) => dt.min(max),
            None => dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_delta() {
        let cfg = SchedulerConfig::default();
        assert_eq!(cfg.frame_delta(-1.0), 0.0);
        assert_eq!(cfg.frame_delta(5.0), 5.0);

        let cfg = cfg.with_max_frame_delta(0.1);
        assert_eq!(cfg.frame_delta(5.0), 0.1);
        assert_eq!(cfg.frame_delta(0.05), 0.05);
    }

    #[test]
    fn test_builder_methods() {
        let cfg = SchedulerConfig::new()
            .with_running_capacity(256)
            .with_max_frame_delta(0.25);
        assert_eq!(cfg.running_capacity, 256);
        assert_eq!(cfg.max_frame_delta, Some(0.25));
        assert_eq!(SchedulerConfig::default().running_capacity, 32);
    }
}
