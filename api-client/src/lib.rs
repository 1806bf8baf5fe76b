//! Typed async client for the LazrChain user API.
//!
//! [`response`] mirrors the backend's JSON contracts, [`error`] carries the
//! total backend error-code mapping, and [`client::ApiClient`] exposes one
//! async method per endpoint.  All authoritative financial state lives on
//! the backend; this crate only moves it.

pub mod client;
pub mod error;
pub mod response;

pub use {
    client::ApiClient,
    error::{ApiClientError, BackendErrorCode, UserFacingError},
};
