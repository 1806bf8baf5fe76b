//! Deposit and withdrawal flows.
//!
//! A deposit is two steps: an on-chain USDT transfer to the platform
//! deposit address through the wallet, then a backend call that verifies
//! the transaction and credits the account.  Withdrawals are backend-only.
//! All amount validation happens before the first wallet or network
//! interaction.

use {
    crate::cli::{CliCommand, CliContext, CliError, ProcessResult},
    clap::{App, Arg, ArgMatches, SubCommand},
    lazrchain_reward_engine::evaluator,
    lazrchain_wallet::wait_for_ready_default,
    serde::{Deserialize, Serialize},
    std::fmt,
};

// ── CLI Command Enum Variants ───────────────────────────────────────
#[derive(Debug, PartialEq)]
pub enum TransferCliCommand {
    Deposit { amount: f64 },
    Withdraw { amount: f64 },
}

// ── Output Structs ──────────────────────────────────────────────────
#[derive(Serialize, Deserialize, Debug)]
pub struct CliDeposit {
    pub amount: f64,
    pub tx_hash: String,
    pub wallet_address: String,
    pub total_deposited: f64,
    pub interest_rate: f64,
}

impl fmt::Display for CliDeposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deposit Confirmed")?;
        writeln!(f, "  Amount:          {} USDT", self.amount)?;
        writeln!(f, "  Transaction:     {}", self.tx_hash)?;
        writeln!(f, "  From Wallet:     {}", self.wallet_address)?;
        writeln!(f, "  Total Deposited: {} USDT", self.total_deposited)?;
        writeln!(f, "  Interest Rate:   {}% daily", self.interest_rate)?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CliWithdrawal {
    pub amount: f64,
    pub tx_hash: String,
    pub message: String,
    pub remaining_referral_earnings: Option<f64>,
    pub remaining_deposit: Option<f64>,
}

impl fmt::Display for CliWithdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Withdrawal Processed")?;
        writeln!(f, "  Amount:      {} USDT", self.amount)?;
        writeln!(f, "  Transaction: {}", self.tx_hash)?;
        writeln!(f, "  {}", self.message)?;
        if let Some(remaining) = self.remaining_referral_earnings {
            writeln!(f, "  Referral Earnings Left: {remaining} USDT")?;
        }
        if let Some(remaining) = self.remaining_deposit {
            writeln!(f, "  Deposits Left:          {remaining} USDT")?;
        }
        Ok(())
    }
}

// ── Subcommand Definition (clap) ────────────────────────────────────
pub trait TransferSubCommands {
    fn transfer_subcommands(self) -> Self;
}

impl TransferSubCommands for App<'_, '_> {
    fn transfer_subcommands(self) -> Self {
        self.subcommand(
            SubCommand::with_name("deposit")
                .about("Send USDT to the platform and credit the account")
                .arg(
                    Arg::with_name("amount")
                        .index(1)
                        .value_name("USDT")
                        .required(true)
                        .help("Amount to deposit ($10 - $1500)"),
                ),
        )
        .subcommand(
            SubCommand::with_name("withdraw")
                .about("Withdraw USDT back to the connected wallet")
                .arg(
                    Arg::with_name("amount")
                        .index(1)
                        .value_name("USDT")
                        .required(true)
                        .help("Amount to withdraw"),
                ),
        )
    }
}

// ── Argument Parsing ────────────────────────────────────────────────
pub fn parse_transfer_command(
    name: &str,
    matches: &ArgMatches<'_>,
) -> Result<CliCommand, CliError> {
    let value = matches.value_of("amount").unwrap_or_default();
    let amount: f64 = value.parse().map_err(|_| CliError::BadArgument {
        arg: "amount",
        value: value.to_string(),
    })?;
    match name {
        "deposit" => Ok(CliCommand::Transfer(TransferCliCommand::Deposit { amount })),
        "withdraw" => Ok(CliCommand::Transfer(TransferCliCommand::Withdraw { amount })),
        _ => unreachable!(),
    }
}

// ── Command Processing ──────────────────────────────────────────────
pub async fn process_transfer_command(
    context: &mut CliContext,
    command: &TransferCliCommand,
) -> ProcessResult {
    match command {
        TransferCliCommand::Deposit { amount } => process_deposit(context, *amount).await,
        TransferCliCommand::Withdraw { amount } => process_withdraw(context, *amount).await,
    }
}

async fn process_deposit(context: &mut CliContext, amount: f64) -> ProcessResult {
    // Rejects out-of-range amounts before the wallet is even touched.
    evaluator::validate_deposit(context.api.config(), amount)?;

    wait_for_ready_default(context.wallet.as_ref()).await?;
    let wallet_address = context.wallet.request_accounts().await?;
    let admin_address = context.config.admin_address.clone();
    let tx_hash = context.wallet.transfer_usdt(&admin_address, amount).await?;

    let receipt = context.api.deposit(&wallet_address, &tx_hash, amount).await?;

    context.config.wallet_address = wallet_address.clone();
    context.persist_config()?;

    Ok(CliDeposit {
        amount: receipt.amount,
        tx_hash: receipt.tx_hash,
        wallet_address,
        total_deposited: receipt.total_deposited,
        interest_rate: receipt.interest_rate,
    }
    .to_string())
}

async fn process_withdraw(context: &mut CliContext, amount: f64) -> ProcessResult {
    let user_id = context.user_id()?.to_string();
    let totals = context.api.total_yield(&user_id).await?;
    evaluator::validate_withdrawal(amount, totals.total_yield)?;

    let receipt = context.api.withdraw(&user_id, amount).await?;
    Ok(CliWithdrawal {
        amount: receipt.amount,
        tx_hash: receipt.tx_hash,
        message: receipt.message,
        remaining_referral_earnings: receipt.updated_referral_earning,
        remaining_deposit: receipt.updated_deposit,
    }
    .to_string())
}
