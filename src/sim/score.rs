//! Throttled score publishing
//!
//! The HUD must not be rewritten on every kill. The bridge hands out a copy of
//! the internal score at most once per interval, and only values the score
//! actually held.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBridge {
    /// Last value handed to the outside
    published: u64,
    /// Session time of the last publish (none yet this session)
    last_publish_ms: Option<f64>,
    interval_ms: f64,
}

impl ScoreBridge {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            published: 0,
            last_publish_ms: None,
            interval_ms,
        }
    }

    /// Last externally visible score
    pub fn published(&self) -> u64 {
        self.published
    }

    /// True when the internal score is ahead of what was published
    pub fn is_pending(&self, score: u64) -> bool {
        score != self.published
    }

    /// Publish `score` if it changed and the throttle interval has passed
    pub fn poll(&mut self, score: u64, now_ms: f64) -> Option<u64> {
        if !self.is_pending(score) {
            return None;
        }
        let ready = self
            .last_publish_ms
            .is_none_or(|last| now_ms - last > self.interval_ms);
        if !ready {
            return None;
        }
        Some(self.publish(score, now_ms))
    }

    /// Publish `score` if it changed, ignoring the throttle
    pub fn flush(&mut self, score: u64, now_ms: f64) -> Option<u64> {
        if !self.is_pending(score) {
            return None;
        }
        Some(self.publish(score, now_ms))
    }

    fn publish(&mut self, score: u64, now_ms: f64) -> u64 {
        self.published = score;
        self.last_publish_ms = Some(now_ms);
        score
    }

}
