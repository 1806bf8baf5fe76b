//! Application state for the LazrChain client.
//!
//! Small state containers with explicit mutation entry points, one per
//! concern, composed into [`AppState`] by whoever owns the event loop.
//! There is no global singleton; ownership decides who may mutate.

pub mod auth;
pub mod layout;
pub mod pending;
pub mod referral_link;

pub use {
    auth::AuthState,
    layout::LayoutState,
    pending::{PendingClaims, StoreError},
    referral_link::ReferralLinkState,
};

/// Everything the presentation layer keeps between renders.
#[derive(Debug, Default)]
pub struct AppState {
    pub auth: AuthState,
    pub layout: LayoutState,
    pub referral_link: ReferralLinkState,
    pub pending_claims: PendingClaims,
}

impl AppState {
    /// Drop the session and all per-session UI state.  In-flight claims are
    /// discarded, not rolled back.
    pub fn logout(&mut self) {
        self.auth.logout();
        self.layout.reset();
        self.referral_link.clear_referral_code();
        self.pending_claims = PendingClaims::default();
    }
}
