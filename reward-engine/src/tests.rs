//! Comprehensive tests for the LazrChain reward engine.

use {
    crate::{
        config::RewardEngineConfig,
        cooldown::{can_claim, time_remaining},
        error::RewardError,
        estimator::estimated_daily_yield,
        evaluator::{authorize_claim, evaluate_rewards, validate_deposit, validate_withdrawal, RewardKind},
        state::AccountSnapshot,
        tiers::{InvestmentCatalog, InvestmentTier},
    },
    assert_matches::assert_matches,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn cfg() -> RewardEngineConfig {
    RewardEngineConfig::default()
}

const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// A fixed "now" well past the epoch so subtraction never goes negative.
const NOW: i64 = 1_700_000_000_000;

fn single_tier_catalog() -> InvestmentCatalog {
    InvestmentCatalog {
        tiers: vec![InvestmentTier {
            min: 10.0,
            max: 100.0,
            daily_yield_min: 0.5,
            daily_yield_max: 2.0,
            description: String::new(),
        }],
    }
}

// ===========================================================================
// 1. Tier matching determinism
// ===========================================================================

#[test]
fn tier_matching_is_deterministic() {
    let catalog = InvestmentCatalog::default();
    for balance in [0.0, 10.0, 55.5, 100.0, 499.99, 500.0, 1500.0, 9_999.0] {
        let first = catalog.match_tier(balance).cloned();
        for _ in 0..10 {
            assert_eq!(catalog.match_tier(balance).cloned(), first);
        }
    }
}

#[test]
fn tier_matching_out_of_range_is_none_not_error() {
    let catalog = InvestmentCatalog::default();
    assert!(catalog.match_tier(-1.0).is_none());
    assert!(catalog.match_tier(1_000_000.0).is_none());
}

// ===========================================================================
// 2. Yield monotonicity and zero short-circuits
// ===========================================================================

#[test]
fn yield_non_decreasing_in_speed() {
    let config = cfg();
    let mut last = 0.0;
    for speed in 1..=200 {
        let amount = estimated_daily_yield(&config, 750.0, speed as f64).yield_amount;
        assert!(amount >= last, "speed {speed}: {amount} < {last}");
        last = amount;
    }
}

#[test]
fn yield_zero_when_speed_non_positive_or_balance_below_min() {
    let config = cfg();
    assert_eq!(estimated_daily_yield(&config, 50.0, 0.0).yield_amount, 0.0);
    assert_eq!(estimated_daily_yield(&config, 50.0, -1.0).yield_amount, 0.0);
    assert_eq!(estimated_daily_yield(&config, 9.0, 50.0).yield_amount, 0.0);
}

// ===========================================================================
// 3. Cooldown boundary (inclusive at exactly 24 h)
// ===========================================================================

#[test]
fn cooldown_boundary_exact() {
    let config = cfg();
    let last = NOW;
    assert!(!can_claim(&config, Some(last), last + 86_399_999));
    assert!(can_claim(&config, Some(last), last + 86_400_000));
}

#[test]
fn cooldown_never_claimed() {
    assert!(can_claim(&cfg(), None, NOW));
}

// ===========================================================================
// 4. Claim idempotence under rejection
// ===========================================================================

#[test]
fn rejected_claim_changes_nothing() {
    let config = cfg();
    let snapshot = AccountSnapshot::new(50.0, 3.0).with_last_claim(NOW - HOUR_MS);
    let before = snapshot;

    let result = authorize_claim(&config, &snapshot, NOW);
    assert_matches!(result, Err(RewardError::CooldownActive { .. }));
    // Pure rejection: the snapshot is untouched, nothing was recorded.
    assert_eq!(snapshot, before);
}

#[test]
fn authorized_claim_at_boundary() {
    let config = cfg();
    let snapshot = AccountSnapshot::new(50.0, 3.0).with_last_claim(NOW - DAY_MS);
    assert!(authorize_claim(&config, &snapshot, NOW).is_ok());
}

#[test]
fn rejection_carries_remaining_time() {
    let config = cfg();
    let snapshot = AccountSnapshot::new(50.0, 3.0).with_last_claim(NOW - HOUR_MS);
    match authorize_claim(&config, &snapshot, NOW) {
        Err(RewardError::CooldownActive { remaining }) => {
            assert_eq!(remaining.hours, 23);
            assert_eq!(remaining.minutes, 0);
            assert_eq!(remaining.seconds, 0);
        }
        other => panic!("expected CooldownActive, got {other:?}"),
    }
}

// ===========================================================================
// 5. Reward list filtering (zero amounts never listed)
// ===========================================================================

#[test]
fn zero_amount_rewards_are_filtered() {
    let config = cfg();
    // Balance below every bracket, no referral earnings, no bonus.
    let snapshot = AccountSnapshot::new(5.0, 0.0);
    let candidates = evaluate_rewards(&config, &snapshot, NOW);
    assert!(candidates.iter().all(|c| c.amount > 0.0));
    assert!(!candidates
        .iter()
        .any(|c| matches!(c.kind, RewardKind::BalanceReward | RewardKind::ReferralBonus)));
}

#[test]
fn referral_bonus_listed_only_when_positive() {
    let config = cfg();
    let without = evaluate_rewards(&config, &AccountSnapshot::new(50.0, 0.0), NOW);
    assert!(!without
        .iter()
        .any(|c| c.kind == RewardKind::ReferralBonus));

    let with = evaluate_rewards(&config, &AccountSnapshot::new(50.0, 4.2), NOW);
    let bonus = with
        .iter()
        .find(|c| c.kind == RewardKind::ReferralBonus)
        .expect("referral bonus candidate");
    assert_eq!(bonus.amount, 4.2);
}

// ===========================================================================
// 6. Reference scenario: single tier, balance 50, speed 50 of 100
// ===========================================================================

#[test]
fn reference_yield_scenario() {
    let config = RewardEngineConfig {
        investment_tiers: single_tier_catalog(),
        ..Default::default()
    };
    let est = estimated_daily_yield(&config, 50.0, 50.0);
    assert_eq!(est.yield_pct, 1.25);
    assert_eq!(est.yield_amount, 0.625);
}

// ===========================================================================
// 7. Reference scenario: claimed 25 h ago
// ===========================================================================

#[test]
fn claim_after_25_hours() {
    let config = cfg();
    let last = NOW - 25 * HOUR_MS;
    assert!(can_claim(&config, Some(last), NOW));
    assert!(time_remaining(&config, Some(last), NOW).is_zero());
}

// ===========================================================================
// 8. Reference scenario: claimed 1 h ago
// ===========================================================================

#[test]
fn claim_after_1_hour() {
    let config = cfg();
    let last = NOW - HOUR_MS;
    assert!(!can_claim(&config, Some(last), NOW));
    let remaining = time_remaining(&config, Some(last), NOW);
    assert_eq!((remaining.hours, remaining.minutes, remaining.seconds), (23, 0, 0));
}

// ===========================================================================
// 9. Evaluator composition
// ===========================================================================

#[test]
fn balance_reward_uses_bracket_percentage() {
    let config = cfg();
    // $250 sits in the 2.5% bracket: reward = 250 * 2.5 / 100 = 6.25.
    let candidates = evaluate_rewards(&config, &AccountSnapshot::new(250.0, 0.0), NOW);
    let balance_reward = candidates
        .iter()
        .find(|c| c.kind == RewardKind::BalanceReward)
        .expect("balance reward candidate");
    assert_eq!(balance_reward.amount, 6.25);
}

#[test]
fn candidate_order_is_stable() {
    let config = cfg();
    let snapshot = AccountSnapshot::new(120.0, 5.0).with_daily_bonus(0.5);
    let kinds: Vec<_> = evaluate_rewards(&config, &snapshot, NOW)
        .into_iter()
        .map(|c| c.kind)
        .collect();
    let balance_pos = kinds.iter().position(|k| *k == RewardKind::BalanceReward);
    let referral_pos = kinds.iter().position(|k| *k == RewardKind::ReferralBonus);
    let daily_pos = kinds.iter().position(|k| *k == RewardKind::DailyBonus);
    assert!(balance_pos < referral_pos && referral_pos < daily_pos);
}

#[test]
fn completed_milestones_become_candidates() {
    let config = cfg();
    // $100 completes first-deposit and century-club, and unlocks half-grand.
    let candidates = evaluate_rewards(&config, &AccountSnapshot::new(100.0, 0.0), NOW);
    let milestone_ids: Vec<_> = candidates
        .iter()
        .filter_map(|c| match &c.kind {
            RewardKind::Milestone { id } => Some(id.as_str()),
            _ => None,
        })
        .collect();
    assert!(milestone_ids.contains(&"first-deposit"));
    assert!(milestone_ids.contains(&"century-club"));
    assert!(!milestone_ids.contains(&"half-grand")); // not yet completed
}

#[test]
fn milestone_candidates_carry_progress_detail() {
    let config = cfg();
    let candidates = evaluate_rewards(&config, &AccountSnapshot::new(100.0, 0.0), NOW);
    for candidate in candidates {
        if matches!(candidate.kind, RewardKind::Milestone { .. }) {
            let status = candidate.milestone.expect("milestone detail");
            assert!(status.completed);
            assert_eq!(status.progress, status.max_progress);
        } else {
            assert!(candidate.milestone.is_none());
        }
    }
}

#[test]
fn cooldown_blocks_every_kind_simultaneously() {
    let config = cfg();
    let snapshot = AccountSnapshot::new(100.0, 5.0)
        .with_daily_bonus(1.0)
        .with_last_claim(NOW - HOUR_MS);
    let candidates = evaluate_rewards(&config, &snapshot, NOW);
    assert!(!candidates.is_empty());
    assert!(candidates.iter().all(|c| !c.can_claim));
}

#[test]
fn evaluation_is_pure_and_repeatable() {
    let config = cfg();
    let snapshot = AccountSnapshot::new(250.75, 12.5).with_last_claim(NOW - 2 * DAY_MS);
    let first = evaluate_rewards(&config, &snapshot, NOW);
    for _ in 0..5 {
        assert_eq!(evaluate_rewards(&config, &snapshot, NOW), first);
    }
}

// ===========================================================================
// 10. Deposit / withdrawal validation
// ===========================================================================

#[test]
fn deposit_range_inclusive() {
    let config = cfg();
    assert!(validate_deposit(&config, 10.0).is_ok());
    assert!(validate_deposit(&config, 1500.0).is_ok());
    assert_matches!(
        validate_deposit(&config, 9.99),
        Err(RewardError::DepositOutOfRange { .. })
    );
    assert_matches!(
        validate_deposit(&config, 1500.01),
        Err(RewardError::DepositOutOfRange { .. })
    );
    assert_matches!(
        validate_deposit(&config, f64::NAN),
        Err(RewardError::DepositOutOfRange { .. })
    );
}

#[test]
fn withdrawal_validation() {
    assert!(validate_withdrawal(50.0, 100.0).is_ok());
    assert!(validate_withdrawal(100.0, 100.0).is_ok());
    assert_matches!(
        validate_withdrawal(0.0, 100.0),
        Err(RewardError::NonPositiveWithdrawal { .. })
    );
    assert_matches!(
        validate_withdrawal(-5.0, 100.0),
        Err(RewardError::NonPositiveWithdrawal { .. })
    );
    assert_matches!(
        validate_withdrawal(100.01, 100.0),
        Err(RewardError::InsufficientBalance { .. })
    );
}

// ===========================================================================
// 11. Error display
// ===========================================================================

#[test]
fn error_messages_are_readable() {
    let err = RewardError::InsufficientBalance {
        requested: 120.0,
        available: 80.5,
    };
    let msg = format!("{err}");
    assert!(msg.contains("120"));
    assert!(msg.contains("80.5"));

    let snapshot = AccountSnapshot::new(50.0, 1.0).with_last_claim(NOW - HOUR_MS);
    let err = authorize_claim(&cfg(), &snapshot, NOW).unwrap_err();
    assert!(format!("{err}").contains("23h 0m 0s"));
}
