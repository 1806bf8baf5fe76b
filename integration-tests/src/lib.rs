//! LazrChain Integration Tests
//!
//! Cross-crate test suite for the client stack.
//!
//! # Flows Tested
//!
//! 1. **Claiming** — shared 24-hour cooldown across reward kinds, claim-time
//!    re-check, in-flight guard, per-kind backend effects
//! 2. **Deposits / Withdrawals** — validation before any wallet or network
//!    interaction, wallet readiness polling, error-category separation
//! 3. **Session state** — login/logout across the store slices, in-flight
//!    discard on teardown
//!
//! The harness does not spin up a backend; it mutates its own account facts
//! the way the backend would, keeping every flow deterministic.

pub mod harness;



#[cfg(test)]
mod session_tests;
