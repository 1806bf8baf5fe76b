//! Wallet-extension abstraction for the LazrChain client.
//!
//! The browser build talks to an injected TRON wallet extension; everything
//! above it only needs three capabilities — detect the extension, obtain
//! the connected account, and send USDT.  [`WalletProvider`] captures those
//! behind a trait, [`provider::wait_for_ready`] reproduces the extension's
//! fixed-interval readiness poll, and [`mock::MockWallet`] scripts it all
//! for tests.

pub mod error;
pub mod mock;
pub mod provider;

pub use {
    error::WalletError,
    mock::MockWallet,
    provider::{
        wait_for_ready, wait_for_ready_default, WalletProvider, DEFAULT_POLL_INTERVAL,
        DEFAULT_READY_TIMEOUT,
    },
};
