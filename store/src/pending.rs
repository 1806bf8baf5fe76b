//! In-flight claim guard.
//!
//! A claim mutation for a given reward kind must not be submitted while a
//! previous one for the same kind is still in flight; double submission
//! would double-spend the cooldown window on the backend's clock.  The
//! guard tracks kinds between `begin` and `finish`; teardown simply drops
//! the set, there is nothing to roll back.

use {
    lazrchain_reward_engine::RewardKind,
    log::debug,
    std::collections::HashSet,
    thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("a {kind} claim is already in flight")]
    ClaimInFlight { kind: RewardKind },
}

/// Reward kinds with a claim currently in flight.
#[derive(Debug, Default)]
pub struct PendingClaims {
    in_flight: HashSet<RewardKind>,
}

impl PendingClaims {
    /// Mark `kind` in flight; rejects if it already is.
    pub fn begin(&mut self, kind: &RewardKind) -> Result<(), StoreError> {
        if !self.in_flight.insert(kind.clone()) {
            return Err(StoreError::ClaimInFlight { kind: kind.clone() });
        }
        debug!("claim in flight: {kind}");
        Ok(())
    }

    /// Clear `kind` once its request settled, success or failure.
    pub fn finish(&mut self, kind: &RewardKind) {
        self.in_flight.remove(kind);
    }

    pub fn is_pending(&self, kind: &RewardKind) -> bool {
        self.in_flight.contains(kind)
    }
}
