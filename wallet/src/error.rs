use {std::time::Duration, thiserror::Error};

pub type Result<T> = std::result::Result<T, WalletError>;

/// Wallet-extension failures.
///
/// These are a category of their own: a wallet problem must never surface
/// as a backend error (or vice versa), because the recovery paths differ —
/// installing/unlocking the extension versus retrying a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("wallet extension is not installed")]
    NotInstalled,

    #[error("wallet connection rejected: {reason}")]
    ConnectionRejected { reason: String },

    #[error("transfer rejected or reverted: {reason}")]
    TransferRejected { reason: String },

    #[error("wallet not ready after {waited:?}")]
    ReadyTimeout { waited: Duration },
}
