//! # LazrChain Reward Engine
//!
//! The single authoritative implementation of the client-side reward model:
//! **investment/referral tier matching**, the **estimated daily-yield
//! formula**, the shared **24-hour claim cooldown**, and the **reward
//! eligibility evaluator** that composes them.
//!
//! Everything in this crate is synchronous and pure with respect to its
//! explicit inputs (balances, earnings, timestamps, "now").  Network truth —
//! actual balances, credited yield, transaction validity — lives on the
//! backend and is fetched through `lazrchain-api-client`; the numbers
//! produced here are either display estimates or client-side gating, never
//! a ledger.
//!
//! ## Quick start
//!
//! ```rust
//! use lazrchain_reward_engine::{
//!     estimator, evaluator, RewardEngineConfig, AccountSnapshot,
//! };
//!
//! let config = RewardEngineConfig::default();
//!
//! // A $50 balance at 50 Mbps sits in the $10–$100 tier (0.5%–2% daily).
//! let estimate = estimator::estimated_daily_yield(&config, 50.0, 50.0);
//! assert_eq!(estimate.yield_pct, 1.25);
//! assert_eq!(estimate.yield_amount, 0.625);
//!
//! // Rewards claimable right now for a never-claimed account.
//! let snapshot = AccountSnapshot::new(50.0, 3.2);
//! let candidates = evaluator::evaluate_rewards(&config, &snapshot, 0);
//! assert!(candidates.iter().all(|c| c.amount > 0.0 && c.can_claim));
//! ```

pub mod config;
pub mod cooldown;
pub mod error;
pub mod estimator;
pub mod evaluator;
pub mod milestones;
pub mod state;
pub mod tiers;

#[cfg(test)]
mod tests;

// Re-exports for convenience.
pub use config::RewardEngineConfig;
pub use cooldown::{CooldownRemaining, REWARD_CLAIM_COOLDOWN_MS};
pub use error::RewardError;
pub use estimator::YieldEstimate;
pub use evaluator::{RewardCandidate, RewardKind};
pub use state::AccountSnapshot;
pub use tiers::{InvestmentCatalog, InvestmentTier, ReferralCatalog, ReferralTier};
