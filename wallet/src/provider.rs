//! The wallet-extension interface.
//!
//! Browser wallet extensions inject themselves into the page and become
//! usable only after an internal handshake, so readiness is observed by
//! polling at a fixed interval.  [`wait_for_ready`] reproduces that loop
//! with an explicit timeout; the extension itself is opaque behind
//! [`WalletProvider`].

use {
    crate::error::{Result, WalletError},
    async_trait::async_trait,
    log::debug,
    std::time::Duration,
    tokio::time::Instant,
};

/// Poll cadence used by the readiness loop.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(300);

/// Default upper bound on how long [`wait_for_ready`] polls.
pub const DEFAULT_READY_TIMEOUT: Duration = Duration::from_secs(15);

/// An injected wallet extension, as far as this client cares.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Whether the extension is present at all.
    fn is_installed(&self) -> bool;

    /// Whether the extension has finished its handshake and exposes an
    /// account.  Polled; must be cheap.
    async fn is_ready(&self) -> bool;

    /// Prompt the user to connect and return the active account address.
    async fn request_accounts(&self) -> Result<String>;

    /// Send `amount` USDT to `to` and return the transaction hash.
    async fn transfer_usdt(&self, to: &str, amount: f64) -> Result<String>;
}

/// Poll `wallet` every `poll_interval` until it reports ready, giving up
/// after `timeout`.
pub async fn wait_for_ready<W>(wallet: &W, poll_interval: Duration, timeout: Duration) -> Result<()>
where
    W: WalletProvider + ?Sized,
{
    if !wallet.is_installed() {
        return Err(WalletError::NotInstalled);
    }
    let deadline = Instant::now() + timeout;
    let mut ticker = tokio::time::interval(poll_interval);
    loop {
        ticker.tick().await;
        if wallet.is_ready().await {
            debug!("wallet ready");
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(WalletError::ReadyTimeout { waited: timeout });
        }
    }
}

/// [`wait_for_ready`] with the default cadence and timeout.
pub async fn wait_for_ready_default<W>(wallet: &W) -> Result<()>
where
    W: WalletProvider + ?Sized,
{
    wait_for_ready(wallet, DEFAULT_POLL_INTERVAL, DEFAULT_READY_TIMEOUT).await
}
