//! LazrChain Test Harness
//!
//! Deterministic environment for integration-testing the client stack:
//! a simulated wall clock, an account whose backend-visible facts the test
//! scripts directly, and a claim/deposit driver that wires the reward
//! engine, the store's in-flight guard, and the mock wallet together the
//! way the presentation layer does.
//!
//! Nothing here talks to a network; the "backend" is the harness mutating
//! its own account facts the way the real one would.

use {
    lazrchain_reward_engine::{
        evaluator, AccountSnapshot, RewardEngineConfig, RewardError, RewardKind,
    },
    lazrchain_store::{AppState, StoreError},
    lazrchain_wallet::{wait_for_ready, MockWallet, WalletError, WalletProvider},
    std::{cell::Cell, time::Duration},
    thiserror::Error,
};

// ─── Constants ───────────────────────────────────────────────────────────────

pub const HOUR_MS: i64 = 3_600_000;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Harness epoch: an arbitrary fixed instant all tests start from.
pub const START_MS: i64 = 1_700_000_000_000;

/// Platform deposit address used by the scripted wallet flows.
pub const ADMIN_ADDRESS: &str = "TAdminDepositAddr";

// ─── Clock ───────────────────────────────────────────────────────────────────

/// A manually advanced wall clock.
#[derive(Debug)]
pub struct TestClock {
    now: Cell<i64>,
}

impl Default for TestClock {
    fn default() -> Self {
        Self {
            now: Cell::new(START_MS),
        }
    }
}

impl TestClock {
    pub fn now_ms(&self) -> i64 {
        self.now.get()
    }

    pub fn advance_ms(&self, ms: i64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn advance_hours(&self, hours: i64) {
        self.advance_ms(hours * HOUR_MS);
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Everything a scripted flow can fail with, one category per subsystem.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Engine(#[from] RewardError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error("no claimable candidate of kind {kind}")]
    NoCandidate { kind: RewardKind },
}

// ─── Harness ─────────────────────────────────────────────────────────────────

/// The client stack around one account.
pub struct LazrTestHarness {
    pub clock: TestClock,
    pub engine: RewardEngineConfig,
    pub state: AppState,
    // Backend-visible account facts, mutated the way the backend would.
    pub balance: f64,
    pub referral_earnings: f64,
    pub daily_bonus: f64,
    pub last_reward_claim: Option<i64>,
}

impl LazrTestHarness {
    pub fn new(balance: f64, referral_earnings: f64) -> Self {
        Self {
            clock: TestClock::default(),
            engine: RewardEngineConfig::default(),
            state: AppState::default(),
            balance,
            referral_earnings,
            daily_bonus: 0.0,
            last_reward_claim: None,
        }
    }

    /// Start with the cooldown already running: last claim `hours_ago`.
    pub fn with_claim_hours_ago(mut self, hours_ago: i64) -> Self {
        self.last_reward_claim = Some(self.clock.now_ms() - hours_ago * HOUR_MS);
        self
    }

    /// The snapshot a fresh fetch would produce right now.
    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            balance: self.balance,
            referral_earnings: self.referral_earnings,
            daily_bonus: self.daily_bonus,
            last_reward_claim: self.last_reward_claim,
        }
    }

    /// Current reward candidates, freshly evaluated.
    pub fn candidates(&self) -> Vec<evaluator::RewardCandidate> {
        evaluator::evaluate_rewards(&self.engine, &self.snapshot(), self.clock.now_ms())
    }

    /// Run the full claim flow for `kind`: in-flight guard, claim-time
    /// cooldown re-check, then the backend-side effects.  Returns the
    /// claimed amount.
    pub fn claim(&mut self, kind: &RewardKind) -> Result<f64, FlowError> {
        self.state.pending_claims.begin(kind)?;
        let result = self.claim_inner(kind);
        self.state.pending_claims.finish(kind);
        result
    }

    fn claim_inner(&mut self, kind: &RewardKind) -> Result<f64, FlowError> {
        let now = self.clock.now_ms();
        let snapshot = self.snapshot();
        evaluator::authorize_claim(&self.engine, &snapshot, now)?;

        let candidates = evaluator::evaluate_rewards(&self.engine, &snapshot, now);
        let candidate = candidates
            .into_iter()
            .find(|c| &c.kind == kind)
            .ok_or_else(|| FlowError::NoCandidate { kind: kind.clone() })?;

        // What the backend would do on a successful claim.
        self.last_reward_claim = Some(now);
        match kind {
            RewardKind::ReferralBonus => self.referral_earnings = 0.0,
            RewardKind::DailyBonus => self.daily_bonus = 0.0,
            RewardKind::BalanceReward | RewardKind::Milestone { .. } => {}
        }
        self.balance += candidate.amount;
        Ok(candidate.amount)
    }

    /// Run the full deposit flow against `wallet`: amount gate, readiness
    /// poll, on-chain transfer, then backend crediting.  Returns the tx
    /// hash.
    pub async fn deposit(
        &mut self,
        wallet: &MockWallet,
        amount: f64,
    ) -> Result<String, FlowError> {
        evaluator::validate_deposit(&self.engine, amount)?;
        wait_for_ready(wallet, Duration::from_millis(300), Duration::from_secs(5)).await?;
        let address = wallet.request_accounts().await?;
        let tx_hash = wallet.transfer_usdt(ADMIN_ADDRESS, amount).await?;

        // Backend: verify the transaction and credit the deposit.
        self.balance += amount;
        self.state.layout.set_wallet_address(address);
        Ok(tx_hash)
    }

    /// Run the withdrawal flow: amount/balance gates, then backend debiting.
    pub fn withdraw(&mut self, amount: f64) -> Result<(), FlowError> {
        evaluator::validate_withdrawal(amount, self.balance)?;
        self.balance -= amount;
        Ok(())
    }
}
