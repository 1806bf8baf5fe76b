//! Async HTTP client with one method per backend contract.
//!
//! Thin by design: each method serializes its request, decodes the typed
//! response, and converts non-2xx bodies into [`ApiClientError::Backend`]
//! rejections.  Deposit and withdrawal amounts are validated client-side
//! before any request leaves the process; the backend re-validates
//! everything and stays authoritative.

use {
    crate::{
        error::{ApiClientError, BackendErrorBody, Result},
        response::{
            ClaimReferralResponse, DailyEarning, DepositReceipt, InvestmentTiersResponse,
            LogoutResponse, ReferralCodeResponse, ReferralStatsResponse, ReferralTiersResponse,
            SaveWalletAddressResponse, SigninResponse, SignupResponse, TotalYieldResponse,
            UserYieldResponse, VerifyAuthResponse, WithdrawReceipt, YesterdayReferralTotal,
        },
    },
    lazrchain_reward_engine::{evaluator, RewardEngineConfig, RewardError},
    log::debug,
    serde::{de::DeserializeOwned, Serialize},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignupRequest<'a> {
    email: &'a str,
    password: &'a str,
    confirm_password: &'a str,
    referral_code_referred_by: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SigninRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DepositRequest<'a> {
    wallet_address: &'a str,
    tx_hash: &'a str,
    amount: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WithdrawRequest<'a> {
    user_id: &'a str,
    amount: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveWalletAddressRequest<'a> {
    email: &'a str,
    wallet_address: &'a str,
}

/// Client for the LazrChain user API.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    config: RewardEngineConfig,
}

impl ApiClient {
    /// Create a client against `base_url` (e.g. `https://api.lazrchain.app/api/user`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, RewardEngineConfig::default())
    }

    /// Create a client with explicit engine configuration for the
    /// client-side validation gates.
    pub fn with_config(base_url: impl Into<String>, config: RewardEngineConfig) -> Result<Self> {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        // The session cookie set by `/auth/signin` lives in the client's
        // cookie store and authenticates every subsequent request.
        Ok(Self {
            base_url,
            http: reqwest::Client::builder().cookie_store(true).build()?,
            config,
        })
    }

    pub fn config(&self) -> &RewardEngineConfig {
        &self.config
    }

    // ─── Authentication ─────────────────────────────────────────────────

    /// `POST /auth/signup`
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
        referral_code: &str,
    ) -> Result<SignupResponse> {
        self.post(
            "/auth/signup",
            &SignupRequest {
                email,
                password,
                confirm_password,
                referral_code_referred_by: referral_code,
            },
        )
        .await
    }

    /// `POST /auth/signin` — on success the backend sets the session cookie
    /// the rest of the API authenticates with.
    pub async fn signin(&self, email: &str, password: &str) -> Result<SigninResponse> {
        debug!("signing in as {email}");
        self.post("/auth/signin", &SigninRequest { email, password })
            .await
    }

    /// `GET /auth/verify` — whether the current session cookie is valid,
    /// and which account it belongs to.
    pub async fn verify_auth(&self) -> Result<VerifyAuthResponse> {
        self.get("/auth/verify", &[]).await
    }

    /// `POST /auth/logout` — invalidates the server-side session.
    pub async fn logout(&self) -> Result<LogoutResponse> {
        self.post_empty("/auth/logout").await
    }

    // ─── Tier Catalogs ──────────────────────────────────────────────────

    /// `GET /investmentTier`
    pub async fn investment_tiers(&self) -> Result<InvestmentTiersResponse> {
        self.get("/investmentTier", &[]).await
    }

    /// `GET /referralTier`
    pub async fn referral_bonus_tiers(&self) -> Result<ReferralTiersResponse> {
        self.get("/referralTier", &[]).await
    }

    // ─── Yield ──────────────────────────────────────────────────────────

    /// `GET /yield?userId=` — the authoritative accrued yield.
    pub async fn user_yield(&self, user_id: &str) -> Result<UserYieldResponse> {
        self.get("/yield", &[("userId", user_id)]).await
    }

    /// `GET /total-yield?userId=`
    pub async fn total_yield(&self, user_id: &str) -> Result<TotalYieldResponse> {
        self.get("/total-yield", &[("userId", user_id)]).await
    }

    /// `GET /dailyEarnings?userId=`
    pub async fn daily_earnings(&self, user_id: &str) -> Result<Vec<DailyEarning>> {
        self.get("/dailyEarnings", &[("userId", user_id)]).await
    }

    // ─── Referrals ──────────────────────────────────────────────────────

    /// `GET /referralEarningsTotal?userId=`
    pub async fn yesterday_referral_total(&self, user_id: &str) -> Result<YesterdayReferralTotal> {
        self.get("/referralEarningsTotal", &[("userId", user_id)])
            .await
    }

    /// `PATCH /claimeReferralEarnings?userId=` — marks yesterday's referral
    /// earnings as claimed.  The path typo is the backend's, not ours.
    pub async fn claim_referral_earnings(&self, user_id: &str) -> Result<ClaimReferralResponse> {
        debug!("claiming referral earnings for user {user_id}");
        let response = self
            .http
            .patch(format!("{}/claimeReferralEarnings", self.base_url))
            .query(&[("userId", user_id)])
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `GET /referral?userId=`
    pub async fn referral_stats(&self, user_id: &str) -> Result<ReferralStatsResponse> {
        self.get("/referral", &[("userId", user_id)]).await
    }

    /// `GET /referralLink?email=`
    pub async fn referral_code(&self, email: &str) -> Result<ReferralCodeResponse> {
        self.get("/referralLink", &[("email", email)]).await
    }

    // ─── Deposits and Withdrawals ───────────────────────────────────────

    /// `POST /deposits` — report an on-chain USDT transfer for crediting.
    ///
    /// The amount must already sit inside the configured deposit range;
    /// out-of-range amounts are rejected here without a network call.
    pub async fn deposit(
        &self,
        wallet_address: &str,
        tx_hash: &str,
        amount: f64,
    ) -> Result<DepositReceipt> {
        evaluator::validate_deposit(&self.config, amount)?;
        debug!("reporting deposit of {amount} USDT (tx {tx_hash})");
        self.post(
            "/deposits",
            &DepositRequest {
                wallet_address,
                tx_hash,
                amount,
            },
        )
        .await
    }

    /// `POST /withdrawal`
    ///
    /// Non-positive amounts are rejected here; the insufficient-funds check
    /// belongs to the backend, which knows the real balance.
    pub async fn withdraw(&self, user_id: &str, amount: f64) -> Result<WithdrawReceipt> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(RewardError::NonPositiveWithdrawal { amount }.into());
        }
        debug!("requesting withdrawal of {amount} USDT for user {user_id}");
        self.post("/withdrawal", &WithdrawRequest { user_id, amount })
            .await
    }

    /// `POST /walletAddress` — link a wallet address to the account.
    pub async fn save_wallet_address(
        &self,
        email: &str,
        wallet_address: &str,
    ) -> Result<SaveWalletAddressResponse> {
        self.post(
            "/walletAddress",
            &SaveWalletAddressRequest {
                email,
                wallet_address,
            },
        )
        .await
    }

    // ─── Transport ──────────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .query(query)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let body = response.text().await?;
        match serde_json::from_str::<BackendErrorBody>(&body) {
            Ok(BackendErrorBody { code, message }) => {
                debug!("backend rejected request: {code:?}");
                Err(ApiClientError::Backend { code, message })
            }
            Err(_) => Err(ApiClientError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            }),
        }
    }
}
