//! Backend error taxonomy and the client error type.
//!
//! The backend rejects requests with `{ "type": CODE, "message": ... }`
//! bodies.  Every code maps to a user-facing title/description pair; codes
//! this client does not know about fall back to a generic message instead of
//! failing to decode.

use {
    lazrchain_reward_engine::RewardError,
    serde::{Deserialize, Serialize},
    thiserror::Error,
};

pub type Result<T> = std::result::Result<T, ApiClientError>;

/// Typed backend rejection codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackendErrorCode {
    MissingFields,
    InvalidEmail,
    PasswordMismatch,
    PasswordTooShort,
    UserExists,
    InvalidCredentials,
    UserNotFound,
    TxNotFound,
    TxFailed,
    InvalidTxTarget,
    AmountMismatch,
    InsufficientFunds,
    TxSendError,
    ServerError,
    /// Any code this client does not recognize.
    #[serde(other)]
    Unknown,
}

/// Title/description pair shown to the user for a backend rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserFacingError {
    pub title: &'static str,
    pub description: &'static str,
}

impl BackendErrorCode {
    /// Total mapping from code to user-facing copy.
    pub fn user_facing(self) -> UserFacingError {
        match self {
            BackendErrorCode::MissingFields => UserFacingError {
                title: "Missing Fields",
                description: "Wallet, amount or transaction hash is missing.",
            },
            BackendErrorCode::InvalidEmail => UserFacingError {
                title: "Invalid Email",
                description: "Please enter a valid email address.",
            },
            BackendErrorCode::PasswordMismatch => UserFacingError {
                title: "Password Mismatch",
                description: "Passwords do not match.",
            },
            BackendErrorCode::PasswordTooShort => UserFacingError {
                title: "Password Too Short",
                description: "Password must be at least 8 characters.",
            },
            BackendErrorCode::UserExists => UserFacingError {
                title: "User Exists",
                description: "An account with this email already exists.",
            },
            BackendErrorCode::InvalidCredentials => UserFacingError {
                title: "Login Failed",
                description: "Email or password is incorrect.",
            },
            BackendErrorCode::UserNotFound => UserFacingError {
                title: "Wallet Not Linked",
                description: "No user found for this wallet address.",
            },
            BackendErrorCode::TxNotFound => UserFacingError {
                title: "Transaction Missing",
                description: "Transaction not found on-chain.",
            },
            BackendErrorCode::TxFailed => UserFacingError {
                title: "Transaction Failed",
                description: "Transaction was not successful on-chain.",
            },
            BackendErrorCode::InvalidTxTarget => UserFacingError {
                title: "Invalid Transaction",
                description: "Transaction does not match wallet or admin address.",
            },
            BackendErrorCode::AmountMismatch => UserFacingError {
                title: "Amount Mismatch",
                description: "Sent amount does not match entered amount.",
            },
            BackendErrorCode::InsufficientFunds => UserFacingError {
                title: "Insufficient Balance",
                description: "The requested amount exceeds the available balance.",
            },
            BackendErrorCode::TxSendError => UserFacingError {
                title: "Transfer Failed",
                description: "Could not process USDT transaction. Try again later.",
            },
            BackendErrorCode::ServerError => UserFacingError {
                title: "Server Error",
                description: "An unexpected server error occurred.",
            },
            BackendErrorCode::Unknown => UserFacingError {
                title: "Unknown Error",
                description: "Something went wrong. Please try again.",
            },
        }
    }
}

/// The error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendErrorBody {
    #[serde(rename = "type")]
    pub code: BackendErrorCode,
    #[serde(default)]
    pub message: Option<String>,
}

/// Everything an API call can fail with.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// Typed rejection from the backend.
    #[error(
        "{title}: {detail}",
        title = .code.user_facing().title,
        detail = .message.as_deref().unwrap_or(.code.user_facing().description),
    )]
    Backend {
        code: BackendErrorCode,
        message: Option<String>,
    },

    /// Non-2xx status whose body was not a typed backend error.
    #[error("unexpected response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Transport or decoding failure in the HTTP layer.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request rejected client-side before any network call.
    #[error(transparent)]
    Rejected(#[from] RewardError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_code_deserializes() {
        for (wire, expected) in [
            ("MISSING_FIELDS", BackendErrorCode::MissingFields),
            ("INVALID_EMAIL", BackendErrorCode::InvalidEmail),
            ("PASSWORD_MISMATCH", BackendErrorCode::PasswordMismatch),
            ("PASSWORD_TOO_SHORT", BackendErrorCode::PasswordTooShort),
            ("USER_EXISTS", BackendErrorCode::UserExists),
            ("INVALID_CREDENTIALS", BackendErrorCode::InvalidCredentials),
            ("USER_NOT_FOUND", BackendErrorCode::UserNotFound),
            ("TX_NOT_FOUND", BackendErrorCode::TxNotFound),
            ("TX_FAILED", BackendErrorCode::TxFailed),
            ("INVALID_TX_TARGET", BackendErrorCode::InvalidTxTarget),
            ("AMOUNT_MISMATCH", BackendErrorCode::AmountMismatch),
            ("INSUFFICIENT_FUNDS", BackendErrorCode::InsufficientFunds),
            ("TX_SEND_ERROR", BackendErrorCode::TxSendError),
            ("SERVER_ERROR", BackendErrorCode::ServerError),
        ] {
            let json = format!("\"{wire}\"");
            let code: BackendErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, expected);
        }
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let body: BackendErrorBody =
            serde_json::from_str(r#"{"type": "SOMETHING_NEW", "message": "later"}"#).unwrap();
        assert_eq!(body.code, BackendErrorCode::Unknown);
        assert_eq!(body.code.user_facing().title, "Unknown Error");
    }

    #[test]
    fn test_mapping_is_total_and_distinct() {
        let codes = [
            BackendErrorCode::MissingFields,
            BackendErrorCode::InvalidEmail,
            BackendErrorCode::PasswordMismatch,
            BackendErrorCode::PasswordTooShort,
            BackendErrorCode::UserExists,
            BackendErrorCode::InvalidCredentials,
            BackendErrorCode::UserNotFound,
            BackendErrorCode::TxNotFound,
            BackendErrorCode::TxFailed,
            BackendErrorCode::InvalidTxTarget,
            BackendErrorCode::AmountMismatch,
            BackendErrorCode::InsufficientFunds,
            BackendErrorCode::TxSendError,
            BackendErrorCode::ServerError,
            BackendErrorCode::Unknown,
        ];
        let titles: Vec<_> = codes.iter().map(|c| c.user_facing().title).collect();
        for title in &titles {
            assert!(!title.is_empty());
        }
        let mut deduped = titles.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), titles.len());
    }

    #[test]
    fn test_backend_error_display_prefers_server_message() {
        let err = ApiClientError::Backend {
            code: BackendErrorCode::InsufficientFunds,
            message: Some("Only 12.50 USDT available".to_string()),
        };
        assert_eq!(format!("{err}"), "Insufficient Balance: Only 12.50 USDT available");

        let err = ApiClientError::Backend {
            code: BackendErrorCode::TxFailed,
            message: None,
        };
        assert_eq!(
            format!("{err}"),
            "Transaction Failed: Transaction was not successful on-chain."
        );
    }
}
