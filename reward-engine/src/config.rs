use {
    crate::{
        error::RewardError,
        tiers::{InvestmentCatalog, ReferralCatalog},
    },
    serde::{Deserialize, Serialize},
};

/// Tunables for the reward engine.
///
/// The tier catalogs start from the built-in defaults and are replaced with
/// the backend-served catalogs once a fetch completes; everything else is a
/// design constant of the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardEngineConfig {
    /// Investment tier catalog used for yield estimation.
    pub investment_tiers: InvestmentCatalog,

    /// Referral bonus tier catalog.
    pub referral_tiers: ReferralCatalog,

    /// Shared claim cooldown in milliseconds.  One rolling window per user,
    /// applied identically to every reward kind.
    pub cooldown_ms: i64,

    /// Upper bound on the network-speed metric (Mbps).  Speeds above this
    /// count as 100% of measurable performance.
    pub max_speed_mbps: f64,

    /// Balances below this earn no yield regardless of tier.
    pub min_yield_balance: f64,

    /// Smallest deposit the client will submit (USDT).
    pub deposit_min: f64,

    /// Largest deposit the client will submit (USDT).
    pub deposit_max: f64,
}

impl Default for RewardEngineConfig {
    fn default() -> Self {
        Self {
            investment_tiers: InvestmentCatalog::default(),
            referral_tiers: ReferralCatalog::default(),
            cooldown_ms: crate::cooldown::REWARD_CLAIM_COOLDOWN_MS, // 24 hours
            max_speed_mbps: 100.0,
            min_yield_balance: 10.0,
            deposit_min: 10.0,
            deposit_max: 1500.0,
        }
    }
}

impl RewardEngineConfig {
    /// Swap in the backend-served investment catalog.
    pub fn with_investment_tiers(mut self, catalog: InvestmentCatalog) -> Self {
        self.investment_tiers = catalog;
        self
    }

    /// Swap in the backend-served referral catalog.
    pub fn with_referral_tiers(mut self, catalog: ReferralCatalog) -> Self {
        self.referral_tiers = catalog;
        self
    }

    /// Validate that the configuration is internally consistent.
    pub fn validate(&self) -> Result<(), RewardError> {
        if self.cooldown_ms <= 0 {
            return Err(RewardError::InvalidConfig {
                reason: format!("cooldown_ms must be > 0, got {}", self.cooldown_ms),
            });
        }
        if self.max_speed_mbps <= 0.0 {
            return Err(RewardError::InvalidConfig {
                reason: format!("max_speed_mbps must be > 0, got {}", self.max_speed_mbps),
            });
        }
        if self.deposit_min > self.deposit_max {
            return Err(RewardError::InvalidConfig {
                reason: format!(
                    "deposit_min ({}) > deposit_max ({})",
                    self.deposit_min, self.deposit_max
                ),
            });
        }
        self.investment_tiers.validate()?;
        self.referral_tiers.validate()?;
        Ok(())
    }
}
