//! Deterministic in-memory wallet for tests.

use {
    crate::{
        error::{Result, WalletError},
        provider::WalletProvider,
    },
    async_trait::async_trait,
    std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

/// One transfer the mock accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedTransfer {
    pub to: String,
    pub amount: f64,
    pub tx_hash: String,
}

/// A scripted wallet: becomes ready after a configurable number of polls,
/// hands out a fixed address, and records (or rejects) transfers.
pub struct MockWallet {
    installed: bool,
    address: String,
    /// Remaining `is_ready` polls that report false.
    not_ready_polls: AtomicUsize,
    reject_connection: bool,
    reject_transfers: bool,
    transfers: Mutex<Vec<RecordedTransfer>>,
    next_tx: AtomicUsize,
}

impl MockWallet {
    pub fn installed(address: impl Into<String>) -> Self {
        Self {
            installed: true,
            address: address.into(),
            not_ready_polls: AtomicUsize::new(0),
            reject_connection: false,
            reject_transfers: false,
            transfers: Mutex::new(Vec::new()),
            next_tx: AtomicUsize::new(1),
        }
    }

    pub fn not_installed() -> Self {
        Self {
            installed: false,
            ..Self::installed("")
        }
    }

    /// Report not-ready for the first `polls` readiness checks.
    pub fn ready_after_polls(self, polls: usize) -> Self {
        self.not_ready_polls.store(polls, Ordering::Relaxed);
        self
    }

    pub fn rejecting_connection(mut self) -> Self {
        self.reject_connection = true;
        self
    }

    pub fn rejecting_transfers(mut self) -> Self {
        self.reject_transfers = true;
        self
    }

    /// Transfers accepted so far, in order.
    pub fn transfers(&self) -> Vec<RecordedTransfer> {
        self.transfers
            .lock()
            .map(|t| t.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    fn is_installed(&self) -> bool {
        self.installed
    }

    async fn is_ready(&self) -> bool {
        if !self.installed {
            return false;
        }
        self.not_ready_polls
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
            .is_err()
    }

    async fn request_accounts(&self) -> Result<String> {
        if !self.installed {
            return Err(WalletError::NotInstalled);
        }
        if self.reject_connection {
            return Err(WalletError::ConnectionRejected {
                reason: "user dismissed the prompt".to_string(),
            });
        }
        Ok(self.address.clone())
    }

    async fn transfer_usdt(&self, to: &str, amount: f64) -> Result<String> {
        if !self.installed {
            return Err(WalletError::NotInstalled);
        }
        if self.reject_transfers {
            return Err(WalletError::TransferRejected {
                reason: "user rejected the transaction".to_string(),
            });
        }
        let tx_hash = format!("mock-tx-{:04}", self.next_tx.fetch_add(1, Ordering::Relaxed));
        if let Ok(mut transfers) = self.transfers.lock() {
            transfers.push(RecordedTransfer {
                to: to.to_string(),
                amount,
                tx_hash: tx_hash.clone(),
            });
        }
        Ok(tx_hash)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::provider::{wait_for_ready, DEFAULT_POLL_INTERVAL},
        assert_matches::assert_matches,
        std::time::Duration,
    };

    #[tokio::test(start_paused = true)]
    async fn test_ready_after_polls() {
        let wallet = MockWallet::installed("TMockAddr").ready_after_polls(3);
        wait_for_ready(&wallet, DEFAULT_POLL_INTERVAL, Duration::from_secs(5))
            .await
            .unwrap();
        assert!(wallet.is_ready().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ready_timeout() {
        let wallet = MockWallet::installed("TMockAddr").ready_after_polls(usize::MAX);
        let result = wait_for_ready(&wallet, DEFAULT_POLL_INTERVAL, Duration::from_secs(2)).await;
        assert_matches!(result, Err(WalletError::ReadyTimeout { .. }));
    }

    #[tokio::test]
    async fn test_not_installed_fails_fast() {
        let wallet = MockWallet::not_installed();
        let result =
            wait_for_ready(&wallet, DEFAULT_POLL_INTERVAL, Duration::from_secs(2)).await;
        assert_matches!(result, Err(WalletError::NotInstalled));
        assert_matches!(
            wallet.request_accounts().await,
            Err(WalletError::NotInstalled)
        );
    }

    #[tokio::test]
    async fn test_transfers_recorded_in_order() {
        let wallet = MockWallet::installed("TMockAddr");
        let first = wallet.transfer_usdt("TAdmin", 50.0).await.unwrap();
        let second = wallet.transfer_usdt("TAdmin", 25.0).await.unwrap();
        assert_ne!(first, second);

        let transfers = wallet.transfers();
        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].amount, 50.0);
        assert_eq!(transfers[0].tx_hash, first);
        assert_eq!(transfers[1].to, "TAdmin");
    }

    #[tokio::test]
    async fn test_scripted_rejections() {
        let wallet = MockWallet::installed("TMockAddr").rejecting_connection();
        assert_matches!(
            wallet.request_accounts().await,
            Err(WalletError::ConnectionRejected { .. })
        );

        let wallet = MockWallet::installed("TMockAddr").rejecting_transfers();
        assert_matches!(
            wallet.transfer_usdt("TAdmin", 10.0).await,
            Err(WalletError::TransferRejected { .. })
        );
        assert!(wallet.transfers().is_empty());
    }
}
