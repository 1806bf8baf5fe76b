//! The shared 24-hour claim cooldown.
//!
//! A single rolling window per user: `last_reward_claim` records the last
//! time *any* reward was claimed, and every reward kind is gated by the same
//! timestamp.  The tracker itself is stateless — a successful claim must
//! invalidate and refetch `last_reward_claim` from the backend rather than
//! advance it locally.

use {crate::config::RewardEngineConfig, std::fmt};

/// Shared claim cooldown: 24 hours in milliseconds.
pub const REWARD_CLAIM_COOLDOWN_MS: i64 = 24 * 60 * 60 * 1000;

/// Whether a claim is allowed at `now_ms` given the last claim timestamp
/// (epoch milliseconds).  `None` means the user has never claimed, which
/// trivially satisfies the cooldown.  The boundary is inclusive: exactly
/// `cooldown_ms` elapsed is claimable.
pub fn can_claim(config: &RewardEngineConfig, last_claim: Option<i64>, now_ms: i64) -> bool {
    match last_claim {
        None => true,
        Some(last) => now_ms.saturating_sub(last) >= config.cooldown_ms,
    }
}

/// Milliseconds until the cooldown expires, clamped to zero.
pub fn remaining_ms(config: &RewardEngineConfig, last_claim: Option<i64>, now_ms: i64) -> i64 {
    match last_claim {
        None => 0,
        Some(last) => (config.cooldown_ms - now_ms.saturating_sub(last)).max(0),
    }
}

/// Human-readable countdown until the next claim window.
///
/// The presentation layer recomputes this at least once per second while a
/// countdown is on screen and stops the moment it reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CooldownRemaining {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CooldownRemaining {
    /// Decompose a millisecond count into `{hours, minutes, seconds}`.
    pub fn from_ms(ms: i64) -> Self {
        let total_secs = (ms.max(0) as u64) / 1000;
        Self {
            hours: total_secs / 3600,
            minutes: (total_secs % 3600) / 60,
            seconds: total_secs % 60,
        }
    }

    /// True once the cooldown has fully elapsed.
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl fmt::Display for CooldownRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

/// Countdown to the next claim window at `now_ms`.
pub fn time_remaining(
    config: &RewardEngineConfig,
    last_claim: Option<i64>,
    now_ms: i64,
) -> CooldownRemaining {
    CooldownRemaining::from_ms(remaining_ms(config, last_claim, now_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> RewardEngineConfig {
        RewardEngineConfig::default()
    }

    #[test]
    fn test_never_claimed_is_claimable() {
        assert!(can_claim(&cfg(), None, 0));
        assert_eq!(remaining_ms(&cfg(), None, 0), 0);
        assert!(time_remaining(&cfg(), None, 0).is_zero());
    }

    #[test]
    fn test_exact_boundary_inclusive() {
        let last = 1_000_000;
        assert!(!can_claim(&cfg(), Some(last), last + 86_399_999));
        assert!(can_claim(&cfg(), Some(last), last + 86_400_000));
    }

    #[test]
    fn test_remaining_clamped_to_zero() {
        let last = 1_000_000;
        assert_eq!(remaining_ms(&cfg(), Some(last), last + 90_000_000), 0);
    }

    #[test]
    fn test_decomposition() {
        let r = CooldownRemaining::from_ms(23 * 3600 * 1000);
        assert_eq!(r.hours, 23);
        assert_eq!(r.minutes, 0);
        assert_eq!(r.seconds, 0);

        let r = CooldownRemaining::from_ms(3_723_000); // 1h 2m 3s
        assert_eq!((r.hours, r.minutes, r.seconds), (1, 2, 3));
    }

    #[test]
    fn test_display() {
        let r = CooldownRemaining::from_ms(3_723_000);
        assert_eq!(format!("{r}"), "1h 2m 3s");
    }

    #[test]
    fn test_negative_ms_is_zero() {
        assert!(CooldownRemaining::from_ms(-5_000).is_zero());
    }
}
