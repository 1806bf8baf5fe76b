//! Reward eligibility evaluation.
//!
//! Composes tier matching, the milestone set, and the shared cooldown into
//! the list of claimable candidates for the current render.  Candidates are
//! ephemeral: derived fresh from an [`AccountSnapshot`] every time, and
//! discarded after display.  Claiming goes through [`authorize_claim`],
//! which re-checks the cooldown at claim time — a candidate that looked
//! claimable when listed can still be rejected on the 24-hour boundary.

use {
    crate::{
        config::RewardEngineConfig,
        cooldown,
        error::RewardError,
        milestones::{self, MilestoneStatus},
        state::AccountSnapshot,
        tiers,
    },
    log::debug,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// The reward kinds the platform offers, as one tagged union so every view
/// shares a single eligibility model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum RewardKind {
    /// Daily percentage of the current balance, bracket-based.
    BalanceReward,
    /// Accumulated unclaimed referral earnings.
    ReferralBonus,
    /// Server-granted daily bonus.
    DailyBonus,
    /// A completed milestone's fixed reward.
    Milestone { id: String },
}

impl fmt::Display for RewardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewardKind::BalanceReward => write!(f, "Balance Reward"),
            RewardKind::ReferralBonus => write!(f, "Referral Bonus"),
            RewardKind::DailyBonus => write!(f, "Daily Bonus"),
            RewardKind::Milestone { id } => write!(f, "Milestone ({id})"),
        }
    }
}

/// One claimable (or cooldown-blocked) reward computed for this render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardCandidate {
    pub kind: RewardKind,
    /// Claimable amount (USDT), fractional to display precision.
    pub amount: f64,
    /// Whether the shared cooldown currently allows claiming.
    pub can_claim: bool,
    /// Milestone progress detail, present for milestone candidates only.
    pub milestone: Option<MilestoneStatus>,
}

/// Evaluate every reward kind against the snapshot at `now_ms`.
///
/// The returned list is ordered (balance reward, referral bonus, daily
/// bonus, then milestones in definition order) and filtered to candidates
/// with a strictly positive amount — a zero-amount reward must never appear
/// in the claimable list.
pub fn evaluate_rewards(
    config: &RewardEngineConfig,
    snapshot: &AccountSnapshot,
    now_ms: i64,
) -> Vec<RewardCandidate> {
    let can_claim = cooldown::can_claim(config, snapshot.last_reward_claim, now_ms);
    let mut candidates = Vec::new();

    let balance_pct = tiers::balance_reward_pct(snapshot.balance);
    candidates.push(RewardCandidate {
        kind: RewardKind::BalanceReward,
        amount: snapshot.balance * balance_pct / 100.0,
        can_claim,
        milestone: None,
    });

    candidates.push(RewardCandidate {
        kind: RewardKind::ReferralBonus,
        amount: snapshot.referral_earnings,
        can_claim,
        milestone: None,
    });

    candidates.push(RewardCandidate {
        kind: RewardKind::DailyBonus,
        amount: snapshot.daily_bonus,
        can_claim,
        milestone: None,
    });

    for status in milestones::all_milestone_statuses(snapshot) {
        if status.unlocked && status.completed {
            candidates.push(RewardCandidate {
                kind: RewardKind::Milestone {
                    id: status.id.clone(),
                },
                amount: status.reward,
                can_claim,
                milestone: Some(status),
            });
        }
    }

    candidates.retain(|c| c.amount > 0.0);
    debug!(
        "evaluated {} claimable candidate(s) (can_claim={})",
        candidates.len(),
        can_claim
    );
    candidates
}

/// Re-check the cooldown at the moment of a claim attempt.
///
/// Must be called with a *fresh* snapshot immediately before submitting the
/// claim mutation; a violation is rejected client-side with the remaining
/// time and no request is sent.
pub fn authorize_claim(
    config: &RewardEngineConfig,
    snapshot: &AccountSnapshot,
    now_ms: i64,
) -> Result<(), RewardError> {
    if cooldown::can_claim(config, snapshot.last_reward_claim, now_ms) {
        Ok(())
    } else {
        Err(RewardError::CooldownActive {
            remaining: cooldown::time_remaining(config, snapshot.last_reward_claim, now_ms),
        })
    }
}

/// Client-side deposit gate: the amount must sit inside the configured
/// deposit range before any wallet or network interaction starts.
pub fn validate_deposit(config: &RewardEngineConfig, amount: f64) -> Result<(), RewardError> {
    if amount.is_nan() || amount < config.deposit_min || amount > config.deposit_max {
        return Err(RewardError::DepositOutOfRange {
            amount,
            min: config.deposit_min,
            max: config.deposit_max,
        });
    }
    Ok(())
}

/// Client-side withdrawal gate: positive amount, covered by the available
/// balance.  The backend re-validates; this only saves a doomed round trip.
pub fn validate_withdrawal(amount: f64, available: f64) -> Result<(), RewardError> {
    if amount.is_nan() || amount <= 0.0 {
        return Err(RewardError::NonPositiveWithdrawal { amount });
    }
    if amount > available {
        return Err(RewardError::InsufficientBalance {
            requested: amount,
            available,
        });
    }
    Ok(())
}
