//! Investment and referral tier catalogs.
//!
//! A catalog is an ordered list of contiguous balance brackets fetched
//! read-only from the backend.  The built-in defaults mirror the catalog the
//! backend ships with, so the client can render and estimate before the
//! first fetch completes.

use {
    crate::error::RewardError,
    serde::{Deserialize, Serialize},
};

/// One investment bracket with its daily-yield percentage range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentTier {
    /// Inclusive lower bound (USDT).
    pub min: f64,
    /// Inclusive upper bound (USDT).
    pub max: f64,
    /// Daily yield at zero measured performance (percent).
    pub daily_yield_min: f64,
    /// Daily yield at full measured performance (percent).
    pub daily_yield_max: f64,
    /// Free-text description shown on the tier card.
    pub description: String,
}

/// One referral bracket with its flat commission rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferralTier {
    /// Inclusive lower bound on the referrer's own investment (USDT).
    pub min_investment: f64,
    /// Inclusive upper bound (USDT).
    pub max_investment: f64,
    /// Share of each referral's daily reward (percent).
    pub referral_percentage: f64,
    /// Free-text description shown on the tier card.
    pub description: String,
}

/// Ordered investment tier catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentCatalog {
    pub tiers: Vec<InvestmentTier>,
}

/// Ordered referral bonus tier catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferralCatalog {
    pub tiers: Vec<ReferralTier>,
}

impl InvestmentCatalog {
    /// Find the tier whose `[min, max]` contains `balance`, both ends
    /// inclusive.  Linear scan; when a balance sits on a boundary shared by
    /// two tiers, the first tier in catalog order wins.
    ///
    /// Out-of-range balances (below the smallest `min`, above the largest
    /// `max`, or inside a gap) return `None` — absence means "zero yield /
    /// not eligible", never a fault.
    pub fn match_tier(&self, balance: f64) -> Option<&InvestmentTier> {
        self.tiers
            .iter()
            .find(|tier| balance >= tier.min && balance <= tier.max)
    }

    /// Validate that the catalog is ordered and each bracket is well-formed.
    pub fn validate(&self) -> Result<(), RewardError> {
        let mut prev_max = f64::NEG_INFINITY;
        for tier in &self.tiers {
            if tier.min > tier.max {
                return Err(RewardError::InvalidCatalog {
                    reason: format!("tier min ({}) > max ({})", tier.min, tier.max),
                });
            }
            if tier.daily_yield_min > tier.daily_yield_max {
                return Err(RewardError::InvalidCatalog {
                    reason: format!(
                        "tier yield min ({}) > max ({})",
                        tier.daily_yield_min, tier.daily_yield_max
                    ),
                });
            }
            if tier.min < prev_max {
                return Err(RewardError::InvalidCatalog {
                    reason: format!("tier starting at {} overlaps the previous tier", tier.min),
                });
            }
            prev_max = tier.max;
        }
        Ok(())
    }
}

impl ReferralCatalog {
    /// Find the referral tier containing `investment`, first match wins.
    pub fn match_tier(&self, investment: f64) -> Option<&ReferralTier> {
        self.tiers
            .iter()
            .find(|tier| investment >= tier.min_investment && investment <= tier.max_investment)
    }

    /// Validate ordering and bracket shape.
    pub fn validate(&self) -> Result<(), RewardError> {
        let mut prev_max = f64::NEG_INFINITY;
        for tier in &self.tiers {
            if tier.min_investment > tier.max_investment {
                return Err(RewardError::InvalidCatalog {
                    reason: format!(
                        "referral tier min ({}) > max ({})",
                        tier.min_investment, tier.max_investment
                    ),
                });
            }
            if tier.min_investment < prev_max {
                return Err(RewardError::InvalidCatalog {
                    reason: format!(
                        "referral tier starting at {} overlaps the previous tier",
                        tier.min_investment
                    ),
                });
            }
            prev_max = tier.max_investment;
        }
        Ok(())
    }
}

impl Default for InvestmentCatalog {
    /// The catalog the backend serves at launch.
    fn default() -> Self {
        Self {
            tiers: vec![
                InvestmentTier {
                    min: 10.0,
                    max: 100.0,
                    daily_yield_min: 0.5,
                    daily_yield_max: 2.0,
                    description: "Earn daily yields.".to_string(),
                },
                InvestmentTier {
                    min: 100.0,
                    max: 500.0,
                    daily_yield_min: 2.0,
                    daily_yield_max: 4.0,
                    description: "Higher earning potential.".to_string(),
                },
                InvestmentTier {
                    min: 500.0,
                    max: 1500.0,
                    daily_yield_min: 4.0,
                    daily_yield_max: 6.0,
                    description: "Maximum yields.".to_string(),
                },
            ],
        }
    }
}

impl Default for ReferralCatalog {
    fn default() -> Self {
        Self {
            tiers: vec![
                ReferralTier {
                    min_investment: 10.0,
                    max_investment: 100.0,
                    referral_percentage: 8.0,
                    description: "Earn 8% of referral rewards".to_string(),
                },
                ReferralTier {
                    min_investment: 100.0,
                    max_investment: 500.0,
                    referral_percentage: 15.0,
                    description: "Earn 15% of referral rewards".to_string(),
                },
                ReferralTier {
                    min_investment: 500.0,
                    max_investment: 1500.0,
                    referral_percentage: 18.0,
                    description: "Earn 18% of referral rewards".to_string(),
                },
            ],
        }
    }
}

/// Flat balance-reward percentages over the same brackets as the investment
/// catalog: `(min, max, percent)`, both bounds inclusive, first match wins.
pub const BALANCE_REWARD_BRACKETS: [(f64, f64, f64); 3] = [
    (10.0, 100.0, 1.5),
    (100.0, 500.0, 2.5),
    (500.0, 1500.0, 3.5),
];

/// The flat daily balance-reward percentage for `balance`, or `0.0` when the
/// balance falls outside every bracket.
pub fn balance_reward_pct(balance: f64) -> f64 {
    BALANCE_REWARD_BRACKETS
        .iter()
        .find(|(min, max, _)| balance >= *min && balance <= *max)
        .map(|(_, _, pct)| *pct)
        .unwrap_or(0.0)
}
