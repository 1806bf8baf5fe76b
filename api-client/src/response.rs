//! Response types for the LazrChain backend endpoints.
//!
//! These structs mirror the backend's JSON contracts field for field.
//! All payload field names are camelCase on the wire.

use {
    lazrchain_reward_engine::{InvestmentTier, ReferralTier},
    serde::{Deserialize, Serialize},
};

// ─── Authentication ─────────────────────────────────────────────────────────

/// `POST /auth/signup` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// Email of the freshly created account.
    pub email: String,
}

/// `POST /auth/signin` payload.  The session itself travels in a cookie,
/// not in the body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SigninResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /auth/verify` payload: whether the session cookie is valid, and for
/// whom.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAuthResponse {
    pub is_authenticated: bool,
    /// Account id, present only when authenticated.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /auth/logout` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub message: String,
    pub is_authenticated: bool,
}

// ─── Tier Catalogs ──────────────────────────────────────────────────────────

/// One investment tier as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentTierRecord {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: String,
    pub tier_name: String,
    /// Inclusive balance range covered by the tier (USDT).
    pub min: f64,
    pub max: f64,
    /// Daily yield range (percent).
    pub daily_yield_min: f64,
    pub daily_yield_max: f64,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&InvestmentTierRecord> for InvestmentTier {
    fn from(record: &InvestmentTierRecord) -> Self {
        Self {
            min: record.min,
            max: record.max,
            daily_yield_min: record.daily_yield_min,
            daily_yield_max: record.daily_yield_max,
            description: record.description.clone(),
        }
    }
}

/// `GET /investmentTier` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentTiersResponse {
    pub success: bool,
    pub tiers: Vec<InvestmentTierRecord>,
}

/// One referral-bonus tier as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralTierRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub tier_name: String,
    /// Inclusive investment range covered by the tier (USDT).
    pub min_investment: f64,
    pub max_investment: f64,
    /// Bonus paid to the referrer (percent).
    pub referral_percentage: f64,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&ReferralTierRecord> for ReferralTier {
    fn from(record: &ReferralTierRecord) -> Self {
        Self {
            min_investment: record.min_investment,
            max_investment: record.max_investment,
            referral_percentage: record.referral_percentage,
            description: record.description.clone(),
        }
    }
}

/// `GET /referralTier` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralTiersResponse {
    pub success: bool,
    pub tiers: Vec<ReferralTierRecord>,
}

// ─── Yield ──────────────────────────────────────────────────────────────────

/// One deposit's contribution to the accrued yield.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YieldDetail {
    pub tx_hash: String,
    /// Deposited amount (USDT).
    pub amount: f64,
    pub deposited_at: String,
    /// Yield accrued on this deposit so far (USDT).
    pub virtual_yield: f64,
}

/// `GET /yield?userId=` payload: the authoritative accrued yield.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserYieldResponse {
    /// Total accrued yield across deposits (USDT).
    #[serde(rename = "yield")]
    pub yield_amount: f64,
    pub details: Vec<YieldDetail>,
}

/// `GET /total-yield?userId=` payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TotalYieldResponse {
    pub success: bool,
    /// Sum of confirmed deposits (USDT).
    pub total_deposited: f64,
    /// Unclaimed referral earnings (USDT).
    pub total_referral_earning: f64,
    /// Deposits plus referral earnings plus accrued yield (USDT).
    pub total_yield: f64,
}

/// One day's profit, as plotted by the earnings view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyEarning {
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    pub profit_amount: f64,
}

// ─── Referrals ──────────────────────────────────────────────────────────────

/// `GET /referralEarningsTotal?userId=` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YesterdayReferralTotal {
    /// Unclaimed earnings accrued yesterday (USDT).
    pub total_earnings: f64,
    /// ISO date of the covered day.
    pub date: String,
    /// Number of referral records behind the total.
    pub count: u64,
}

/// `PATCH /claimeReferralEarnings?userId=` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReferralResponse {
    pub message: String,
    /// Referral records marked claimed by this call.
    pub updated_count: u64,
    pub date: String,
}

/// Referral activity status as reported by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReferralStatus {
    Active,
    Pending,
    Inactive,
}

/// One referred user's row in the referral table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralEntry {
    pub email: String,
    /// Formatted amounts, rendered verbatim.
    pub investment: String,
    pub reward: String,
    pub earnings: String,
    pub status: ReferralStatus,
}

/// `GET /referral?userId=` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralStatsResponse {
    pub total_referrals: u64,
    /// Referral earnings accrued today (USDT).
    pub daily_earnings: f64,
    pub active_referrals: u64,
    pub referrals: Vec<ReferralEntry>,
}

/// `GET /referralLink?email=` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralCodeResponse {
    pub success: bool,
    pub referral_code: String,
}

// ─── Deposits and Withdrawals ───────────────────────────────────────────────

/// `POST /deposits` payload: the on-chain transfer as verified by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepositReceipt {
    pub success: bool,
    pub message: String,
    pub tx_hash: String,
    pub user_wallet: String,
    /// Verified on-chain amount (USDT).
    pub amount: f64,
    /// New deposit total after this one (USDT).
    pub total_deposited: f64,
    /// Daily rate applied to the new total (percent).
    pub interest_rate: f64,
    pub date: String,
}

/// `POST /withdrawal` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawReceipt {
    pub success: bool,
    pub tx_hash: String,
    /// Amount sent back to the user's wallet (USDT).
    pub amount: f64,
    pub message: String,
    /// Remaining referral earnings, when the withdrawal drew on them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_referral_earning: Option<f64>,
    /// Remaining deposit total, when the withdrawal drew on deposits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_deposit: Option<f64>,
}

/// `POST /walletAddress` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveWalletAddressResponse {
    pub success: bool,
    pub message: String,
}
