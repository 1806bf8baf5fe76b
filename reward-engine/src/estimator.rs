//! Client-side daily-yield **estimation**.
//!
//! This is a display estimate only: it maps a balance and a network-speed
//! metric onto a tier's yield range by linear interpolation so the dashboard
//! can show a live number before (or without) a backend round trip.  The
//! authoritative yield is whatever the backend `yield` / `total-yield`
//! endpoints report — values from this module must never overwrite or stand
//! in for those.

use {
    crate::{config::RewardEngineConfig, tiers::InvestmentTier},
    serde::{Deserialize, Serialize},
};

/// Breakdown of an estimated daily yield.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YieldEstimate {
    /// Interpolated daily yield percentage.
    pub yield_pct: f64,
    /// Estimated daily yield amount (USDT).
    pub yield_amount: f64,
}

/// Estimate the daily yield for `balance` at `speed_mbps`, matching the tier
/// from the configured catalog.
///
/// Defined to be exactly zero (not an error) when any of:
/// - no tier contains the balance,
/// - the balance is below the minimum yielding balance,
/// - the speed metric is non-positive.
///
/// Otherwise:
/// ```text
/// fraction      = clamp(speed, 0, max_speed) / max_speed
/// yield_pct     = tier.daily_yield_min + fraction * (daily_yield_max - daily_yield_min)
/// yield_amount  = balance * yield_pct / 100
/// ```
pub fn estimated_daily_yield(
    config: &RewardEngineConfig,
    balance: f64,
    speed_mbps: f64,
) -> YieldEstimate {
    match config.investment_tiers.match_tier(balance) {
        Some(tier) => estimated_yield_for_tier(config, tier, balance, speed_mbps),
        None => YieldEstimate::default(),
    }
}

/// Estimate against an explicitly chosen tier.  The caller is responsible
/// for the tier actually containing `balance`; the zero short-circuits still
/// apply.
pub fn estimated_yield_for_tier(
    config: &RewardEngineConfig,
    tier: &InvestmentTier,
    balance: f64,
    speed_mbps: f64,
) -> YieldEstimate {
    if balance < config.min_yield_balance || speed_mbps <= 0.0 {
        return YieldEstimate::default();
    }

    let fraction = speed_mbps.clamp(0.0, config.max_speed_mbps) / config.max_speed_mbps;
    let yield_pct = tier.daily_yield_min + fraction * (tier.daily_yield_max - tier.daily_yield_min);
    YieldEstimate {
        yield_pct,
        yield_amount: balance * yield_pct / 100.0,
    }
}
