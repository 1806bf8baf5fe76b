use serde::{Deserialize, Serialize};

/// The server-reported facts the evaluator works from.
///
/// Rebuilt from fresh backend data on every evaluation; nothing in here is a
/// client-side ledger.  `last_reward_claim` is a single timestamp covering
/// every reward kind (epoch milliseconds), `None` for an account that has
/// never claimed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountSnapshot {
    /// Current USDT balance.
    pub balance: f64,

    /// Running total of referral payouts not yet claimed.
    pub referral_earnings: f64,

    /// Server-granted daily bonus, zero when none is on offer.
    pub daily_bonus: f64,

    /// Last time *any* reward was claimed (epoch ms), shared across kinds.
    pub last_reward_claim: Option<i64>,
}

impl AccountSnapshot {
    /// Snapshot for an account that has never claimed a reward.
    pub fn new(balance: f64, referral_earnings: f64) -> Self {
        Self {
            balance,
            referral_earnings,
            daily_bonus: 0.0,
            last_reward_claim: None,
        }
    }

    /// Same snapshot with the last-claim timestamp filled in.
    pub fn with_last_claim(mut self, last_claim_ms: i64) -> Self {
        self.last_reward_claim = Some(last_claim_ms);
        self
    }

    /// Same snapshot with a daily bonus attached.
    pub fn with_daily_bonus(mut self, bonus: f64) -> Self {
        self.daily_bonus = bonus;
        self
    }
}
