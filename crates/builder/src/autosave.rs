//! Autosave debounce gate. Pure decision logic over an injected clock:
//! a new change re-arms the gate (cancelling the pending fire), and
//! `poll` fires at most once per armed period, so saves never overlap.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
pub struct DebounceGate {
    interval: Duration,
    armed_at: Option<DateTime<Utc>>,
}

impl DebounceGate {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            interval: Duration::milliseconds(debounce_ms as i64),
            armed_at: None,
        }
    }

    /// Record a configuration change. Re-arms the gate; an earlier
    /// pending fire is superseded rather than overlapped.
    pub fn note_change(&mut self, now: DateTime<Utc>) {
        self.armed_at = Some(now);
    }

    /// True exactly once per armed period, once the debounce interval
    /// has elapsed since the last change. Disarms on fire.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        match self.armed_at {
            Some(armed) if now - armed >= self.interval => {
                self.armed_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_interval() {
        let mut gate = DebounceGate::new(1000);
        let t0 = Utc::now();
        gate.note_change(t0);

        assert!(!gate.poll(t0 + Duration::milliseconds(500)));
        assert!(gate.poll(t0 + Duration::milliseconds(1500)));
        // Single-flight: no second fire without a new change.
        assert!(!gate.poll(t0 + Duration::milliseconds(5000)));
    }

    #[test]
    fn test_new_change_supersedes_pending_fire() {
        let mut gate = DebounceGate::new(1000);
        let t0 = Utc::now();
        gate.note_change(t0);
        gate.note_change(t0 + Duration::milliseconds(800));

        // The original deadline passes without firing.
        assert!(!gate.poll(t0 + Duration::milliseconds(1100)));
        assert!(gate.poll(t0 + Duration::milliseconds(1900)));
    }

    #[test]
    fn test_unarmed_gate_never_fires() {
        let mut gate = DebounceGate::new(1000);
        assert!(!gate.poll(Utc::now()));
        assert!(!gate.is_armed());
    }
}
