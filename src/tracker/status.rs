//! Company status tracker.
//!
//! Holds the employee head count and the company status score. The score is
//! clamped to the configured range after every change, and the head count
//! never passes capacity.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{EventBus, GameError, ListenerId};

/// Tracker configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Maximum number of employees.
    pub capacity: u32,

    /// Employees at the start of a game.
    pub initial_employees: u32,

    /// Status score at the start of a game.
    pub initial_status: f32,

    /// Lower bound of the status score.
    pub min_status: f32,

    /// Upper bound of the status score.
    pub max_status: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            initial_employees: 0,
            initial_status: 0.0,
            min_status: -100.0,
            max_status: 100.0,
        }
    }
}

impl TrackerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_initial_employees(mut self, count: u32) -> Self {
        self.initial_employees = count;
        self
    }

    #[must_use]
    pub fn with_initial_status(mut self, status: f32) -> Self {
        self.initial_status = status;
        self
    }

    #[must_use]
    pub fn with_status_range(mut self, min: f32, max: f32) -> Self {
        self.min_status = min;
        self.max_status = max;
        self
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.capacity == 0 {
            return Err(GameError::InvalidConfig("capacity must be at least 1".into()));
        }
        if self.initial_employees > self.capacity {
            return Err(GameError::InvalidConfig(format!(
                "initial employees {} exceed capacity {}",
                self.initial_employees, self.capacity
            )));
        }
        if !(self.min_status <= self.max_status) {
            return Err(GameError::InvalidConfig(format!(
                "status range [{}, {}] is empty",
                self.min_status, self.max_status
            )));
        }
        if !(self.min_status..=self.max_status).contains(&self.initial_status) {
            return Err(GameError::InvalidConfig(format!(
                "initial status {} outside [{}, {}]",
                self.initial_status, self.min_status, self.max_status
            )));
        }
        Ok(())
    }
}

/// Tracker values published after every change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub employees: u32,
    pub status: f32,
    pub capacity: u32,
}

/// Bounded company state.
#[derive(Debug)]
pub struct StatusTracker {
    config: TrackerConfig,
    employees: u32,
    status: f32,
    events: EventBus<StatusSnapshot>,
}

impl StatusTracker {
    /// Create a tracker at its initial values.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidConfig` if `config` fails validation.
    pub fn new(config: TrackerConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            employees: config.initial_employees,
            status: config.initial_status,
            config,
            events: EventBus::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[must_use]
    pub fn employees(&self) -> u32 {
        self.employees
    }

    #[must_use]
    pub fn status(&self) -> f32 {
        self.status
    }

    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.config.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.employees >= self.config.capacity
    }

    /// Whether another employee can be taken on.
    #[must_use]
    pub fn can_apply(&self) -> bool {
        !self.is_full()
    }

    /// Head count times status score.
    #[must_use]
    pub fn final_score(&self) -> f32 {
        self.employees as f32 * self.status
    }

    #[must_use]
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            employees: self.employees,
            status: self.status,
            capacity: self.config.capacity,
        }
    }

    /// Listen for snapshots published after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&StatusSnapshot) + 'static) -> ListenerId {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Take on one employee whose impact shifts the status score by `delta`.
    ///
    /// # Errors
    ///
    /// - `GameError::NonFiniteImpact` if `delta` is NaN or infinite
    /// - `GameError::CapacityExceeded` if the company is full
    ///
    /// Nothing changes on error.
    pub fn apply_effect(&mut self, delta: f32) -> Result<StatusSnapshot, GameError> {
        if !delta.is_finite() {
            warn!(delta, "impact is not finite, cannot recruit");
            return Err(GameError::NonFiniteImpact(delta));
        }
        if !self.can_apply() {
            warn!(capacity = self.config.capacity, "company is full, cannot recruit");
            return Err(GameError::CapacityExceeded {
                capacity: self.config.capacity,
            });
        }

        self.employees += 1;
        self.status = (self.status + delta).clamp(self.config.min_status, self.config.max_status);
        info!(employees = self.employees, status = self.status, "status updated");

        let snapshot = self.snapshot();
        self.events.emit(&snapshot);
        Ok(snapshot)
    }

    /// Restore the configured initial values.
    pub fn reset(&mut self) {
        self.employees = self.config.initial_employees;
        self.status = self.config.initial_status;
        info!(employees = self.employees, status = self.status, "status reset");

        let snapshot = self.snapshot();
        self.events.emit(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EventQueue;

    fn tracker(config: TrackerConfig) -> (StatusTracker, EventQueue<StatusSnapshot>) {
        let mut tracker = StatusTracker::new(config).unwrap();
        let queue = tracker.events.capture();
        (tracker, queue)
    }

    #[test]
    fn test_defaults() {
        let tracker = StatusTracker::new(TrackerConfig::default()).unwrap();
        assert_eq!(tracker.employees(), 0);
        assert_eq!(tracker.status(), 0.0);
        assert_eq!(tracker.capacity(), 10);
        assert!(tracker.can_apply());
    }

    #[test]
    fn test_apply_effect() {
        let (mut tracker, queue) = tracker(TrackerConfig::new().with_capacity(3));

        let snapshot = tracker.apply_effect(4.5).unwrap();
        assert_eq!(snapshot.employees, 1);
        assert_eq!(snapshot.status, 4.5);

        tracker.apply_effect(-2.0).unwrap();
        assert_eq!(tracker.employees(), 2);
        assert_eq!(tracker.status(), 2.5);
        assert_eq!(tracker.final_score(), 5.0);

        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_status_is_clamped() {
        let (mut tracker, _) = tracker(
            TrackerConfig::new()
                .with_capacity(5)
                .with_status_range(-3.0, 3.0),
        );

        tracker.apply_effect(10.0).unwrap();
        assert_eq!(tracker.status(), 3.0);

        tracker.apply_effect(-100.0).unwrap();
        assert_eq!(tracker.status(), -3.0);
    }

    #[test]
    fn test_capacity_guard() {
        let (mut tracker, queue) = tracker(TrackerConfig::new().with_capacity(1));

        tracker.apply_effect(1.0).unwrap();
        assert!(tracker.is_full());
        queue.drain();

        let err = tracker.apply_effect(1.0).unwrap_err();
        assert_eq!(err, GameError::CapacityExceeded { capacity: 1 });
        assert_eq!(tracker.employees(), 1);
        assert_eq!(tracker.status(), 1.0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_non_finite_delta_is_refused() {
        let (mut tracker, queue) = tracker(TrackerConfig::new().with_capacity(5));
        tracker.apply_effect(2.0).unwrap();
        queue.drain();

        for delta in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(matches!(
                tracker.apply_effect(delta),
                Err(GameError::NonFiniteImpact(_))
            ));
            assert_eq!(tracker.employees(), 1);
            assert_eq!(tracker.status(), 2.0);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_reset() {
        let (mut tracker, queue) = tracker(
            TrackerConfig::new()
                .with_initial_employees(2)
                .with_initial_status(7.0),
        );

        tracker.apply_effect(3.0).unwrap();
        tracker.reset();

        assert_eq!(tracker.employees(), 2);
        assert_eq!(tracker.status(), 7.0);

        let events = queue.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].employees, 2);
    }

    #[test]
    fn test_invalid_configs() {
        let bad = [
            TrackerConfig::new().with_capacity(0),
            TrackerConfig::new().with_capacity(2).with_initial_employees(3),
            TrackerConfig::new().with_status_range(5.0, -5.0),
            TrackerConfig::new().with_initial_status(200.0),
        ];

        for config in bad {
            assert!(matches!(
                StatusTracker::new(config),
                Err(GameError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_config_from_json() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{ "capacity": 4, "max_status": 50.0 }"#).unwrap();

        assert_eq!(config.capacity, 4);
        assert_eq!(config.max_status, 50.0);
        assert_eq!(config.min_status, -100.0);
        assert!(config.validate().is_ok());
    }
}
