//! Command-line front end for the LazrChain platform.
//!
//! Stands in for the browser presentation layer: the same engine, client,
//! store, and wallet crates drive both.  Every command renders either a
//! `Display`-able output struct or an error message; nothing here computes
//! financial state on its own.

pub mod clap_app;
pub mod cli;
pub mod config;
pub mod referral;
pub mod rewards;
pub mod session;
pub mod tiers;
pub mod transfer;
