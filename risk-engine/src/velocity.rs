//! Velocity tracking for rapid-fire transaction detection

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Velocity thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelocityConfig {
    /// Window for rapid-fire detection (milliseconds)
    pub rapid_window_ms: i64,

    /// Committed-transaction count at which rapid activity is suspicious
    pub suspicious_count: u32,
}

impl Default for VelocityConfig {
    fn default() -> Self {
        Self {
            rapid_window_ms: 5_000,
            suspicious_count: 3,
        }
    }
}

/// Per-account velocity state.
///
/// The counter is monotonic over the account lifetime: it advances only when
/// a transfer commits and is never reset. Once the count reaches the
/// threshold, the gap since the last committed transfer is the only thing
/// that clears the suspicious signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VelocityState {
    /// Committed transfers over the account lifetime
    pub transaction_count: u32,

    /// Time of the most recent committed transfer
    pub last_transaction_at: Option<DateTime<Utc>>,
}

impl VelocityState {
    /// Fresh state with no history
    pub fn new() -> Self {
        Self::default()
    }

    /// Rapid-fire check.
    ///
    /// True when the previous committed transfer happened strictly inside the
    /// window and the lifetime count has reached the threshold. Pure over the
    /// injected `now`; no clock access.
    pub fn is_suspicious(&self, config: &VelocityConfig, now: DateTime<Utc>) -> bool {
        let Some(last) = self.last_transaction_at else {
            return false;
        };

        let within_window = now - last < Duration::milliseconds(config.rapid_window_ms);
        within_window && self.transaction_count >= config.suspicious_count
    }

    /// State after committing one transfer at `now`.
    #[must_use]
    pub fn record_transaction(&self, now: DateTime<Utc>) -> Self {
        Self {
            transaction_count: self.transaction_count + 1,
            last_transaction_at: Some(now),
        }
    }
}
