//! Shared command plumbing: the top-level command enum, the error type,
//! and dispatch from parsed arguments to the per-domain processors.

use {
    crate::{
        config::Config,
        referral::{parse_referral_command, process_referral_command, ReferralCliCommand},
        rewards::{parse_rewards_command, process_rewards_command, RewardsCliCommand},
        session::{parse_session_command, process_session_command, SessionCliCommand},
        tiers::{parse_tiers_command, process_tiers_command, TiersCliCommand},
        transfer::{parse_transfer_command, process_transfer_command, TransferCliCommand},
    },
    clap::ArgMatches,
    lazrchain_api_client::{ApiClient, ApiClientError},
    lazrchain_reward_engine::RewardError,
    lazrchain_store::{AuthState, PendingClaims, StoreError},
    log::debug,
    lazrchain_wallet::{WalletError, WalletProvider},
    std::{
        io,
        time::{SystemTime, UNIX_EPOCH},
    },
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiClientError),
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error(transparent)]
    Engine(#[from] RewardError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("unrecognized reward kind '{0}' (expected balance, referral, daily, or a milestone id)")]
    BadRewardKind(String),
    #[error("bad value for {arg}: {value}")]
    BadArgument { arg: &'static str, value: String },
    #[error("no user id configured; pass --user-id or set it in the config file")]
    MissingUserId,
    #[error("no email configured; set it in the config file")]
    MissingEmail,
    #[error("authentication failed: {0}")]
    AuthFailed(String),
}

pub type ProcessResult = Result<String, CliError>;

// ── CLI Command Enum ────────────────────────────────────────────────
#[derive(Debug, PartialEq)]
pub enum CliCommand {
    Session(SessionCliCommand),
    Tiers(TiersCliCommand),
    Rewards(RewardsCliCommand),
    Transfer(TransferCliCommand),
    Referral(ReferralCliCommand),
}

/// Everything a processor needs for one invocation.
pub struct CliContext {
    pub api: ApiClient,
    pub wallet: Box<dyn WalletProvider>,
    pub auth: AuthState,
    pub config: Config,
    /// Where to persist config changes, `None` to skip persisting.
    pub config_file: Option<String>,
    pub pending_claims: PendingClaims,
}

impl CliContext {
    pub fn user_id(&self) -> Result<&str, CliError> {
        if self.config.user_id.is_empty() {
            Err(CliError::MissingUserId)
        } else {
            Ok(&self.config.user_id)
        }
    }

    pub fn email(&self) -> Result<&str, CliError> {
        if self.config.email.is_empty() {
            Err(CliError::MissingEmail)
        } else {
            Ok(&self.config.email)
        }
    }

    pub fn persist_config(&self) -> Result<(), CliError> {
        if let Some(config_file) = &self.config_file {
            self.config.save(config_file)?;
            debug!("config saved to {config_file}");
        }
        Ok(())
    }
}

/// Wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default()
}

// ── Argument Parsing ────────────────────────────────────────────────
pub fn parse_command(matches: &ArgMatches<'_>) -> Result<CliCommand, CliError> {
    match matches.subcommand() {
        ("login", Some(matches)) => parse_session_command("login", matches),
        ("logout", Some(matches)) => parse_session_command("logout", matches),
        ("tiers", Some(matches)) => parse_tiers_command(matches),
        ("rewards", Some(matches)) => parse_rewards_command(matches),
        ("deposit", Some(matches)) => parse_transfer_command("deposit", matches),
        ("withdraw", Some(matches)) => parse_transfer_command("withdraw", matches),
        ("referral", Some(matches)) => parse_referral_command(matches),
        _ => unreachable!(),
    }
}

// ── Command Processing ──────────────────────────────────────────────
pub async fn process_command(context: &mut CliContext, command: &CliCommand) -> ProcessResult {
    // Not `{command:?}`: the login variant carries the password.
    debug!(
        "processing {} command",
        match command {
            CliCommand::Session(_) => "session",
            CliCommand::Tiers(_) => "tiers",
            CliCommand::Rewards(_) => "rewards",
            CliCommand::Transfer(_) => "transfer",
            CliCommand::Referral(_) => "referral",
        }
    );
    match command {
        CliCommand::Session(command) => process_session_command(context, command).await,
        CliCommand::Tiers(command) => process_tiers_command(context, command).await,
        CliCommand::Rewards(command) => process_rewards_command(context, command).await,
        CliCommand::Transfer(command) => process_transfer_command(context, command).await,
        CliCommand::Referral(command) => process_referral_command(context, command).await,
    }
}
