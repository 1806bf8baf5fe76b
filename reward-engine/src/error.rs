use {crate::cooldown::CooldownRemaining, thiserror::Error};

/// Errors produced by the reward engine.
///
/// All of these are detected client-side, before any network call, and
/// terminate at the UI boundary as user-visible messages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RewardError {
    /// A claim was attempted before the 24-hour window elapsed.
    #[error("cannot claim yet: {remaining} until the next claim window")]
    CooldownActive { remaining: CooldownRemaining },

    /// Another claim for the same reward kind is still in flight.
    #[error("a claim for {kind} is already pending")]
    ClaimPending { kind: String },

    /// Deposit amount outside the allowed range.
    #[error("deposit amount {amount} USDT is outside the allowed ${min}-${max} range")]
    DepositOutOfRange { amount: f64, min: f64, max: f64 },

    /// Withdrawal of zero or a negative amount.
    #[error("withdrawal amount must be positive, got {amount}")]
    NonPositiveWithdrawal { amount: f64 },

    /// Withdrawal larger than the available balance.
    #[error("insufficient balance: requested {requested} USDT but only {available} available")]
    InsufficientBalance { requested: f64, available: f64 },

    /// The engine configuration is invalid (e.g. cooldown of 0).
    #[error("invalid reward engine configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A tier catalog is malformed (unordered, overlapping, min > max).
    #[error("invalid tier catalog: {reason}")]
    InvalidCatalog { reason: String },
}

/// Convenience result type for reward-engine operations.
pub type Result<T> = std::result::Result<T, RewardError>;
