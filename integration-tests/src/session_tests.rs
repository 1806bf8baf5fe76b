//! Integration tests for session/state handling across the store slices.

use {
    crate::harness::LazrTestHarness,
    lazrchain_reward_engine::RewardKind,
};

#[test]
fn test_login_then_logout_resets_ui_state() {
    let mut harness = LazrTestHarness::new(50.0, 0.0);
    harness.state.auth.set_login("user@example.com", "u-1");
    harness.state.layout.set_wallet_address("TUserWallet");
    harness.state.layout.set_wallet_saved(true);
    harness.state.layout.set_active_tab("rewards");
    harness.state.referral_link.set_referral_code("AB12CD");

    harness.state.logout();
    assert!(!harness.state.auth.is_logged_in);
    assert_eq!(harness.state.layout.active_tab, "dashboard");
    assert!(!harness.state.layout.wallet_saved);
    assert!(harness.state.referral_link.referral_code.is_empty());
}

#[test]
fn test_logout_discards_in_flight_claims() {
    let mut harness = LazrTestHarness::new(50.0, 0.0);
    harness
        .state
        .pending_claims
        .begin(&RewardKind::BalanceReward)
        .unwrap();

    // Teardown discards, no rollback: the kind is simply free again.
    harness.state.logout();
    harness
        .state
        .pending_claims
        .begin(&RewardKind::BalanceReward)
        .unwrap();
}

#[tokio::test]
async fn test_reconnecting_wallet_clears_saved_flag() {
    let mut harness = LazrTestHarness::new(20.0, 0.0);
    let wallet = lazrchain_wallet::MockWallet::installed("TFirstWallet");
    harness.deposit(&wallet, 50.0).await.unwrap();
    harness.state.layout.set_wallet_saved(true);

    // A different wallet connects and deposits; the saved flag must drop
    // until the new address is persisted server-side.
    let other = lazrchain_wallet::MockWallet::installed("TSecondWallet");
    harness.deposit(&other, 50.0).await.unwrap();
    assert_eq!(harness.state.layout.wallet_address, "TSecondWallet");
    assert!(!harness.state.layout.wallet_saved);
}
