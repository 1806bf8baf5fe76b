//! Referral program commands.

use {
    crate::cli::{CliCommand, CliContext, CliError, ProcessResult},
    clap::{App, AppSettings, ArgMatches, SubCommand},
    lazrchain_store::ReferralLinkState,
    serde::{Deserialize, Serialize},
    std::fmt,
};

const INVITE_BASE_URL: &str = "https://lazrchain.app";

// ── CLI Command Enum Variants ───────────────────────────────────────
#[derive(Debug, PartialEq)]
pub enum ReferralCliCommand {
    Stats,
    Link,
    YesterdayTotal,
}

// ── Output Structs ──────────────────────────────────────────────────
#[derive(Serialize, Deserialize, Debug)]
pub struct CliReferralRow {
    pub email: String,
    pub investment: String,
    pub reward: String,
    pub earnings: String,
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CliReferralStats {
    pub total_referrals: u64,
    pub active_referrals: u64,
    pub daily_earnings: f64,
    pub referrals: Vec<CliReferralRow>,
}

impl fmt::Display for CliReferralStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Referral Program")?;
        writeln!(f, "  Total Referrals:  {}", self.total_referrals)?;
        writeln!(f, "  Active Referrals: {}", self.active_referrals)?;
        writeln!(f, "  Today's Earnings: {} USDT", self.daily_earnings)?;
        if !self.referrals.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "  {:<28} {:>12} {:>8} {:>10} {:>10}",
                "Email", "Investment", "Reward", "Earnings", "Status"
            )?;
            writeln!(f, "  {}", "-".repeat(74))?;
            for row in &self.referrals {
                writeln!(
                    f,
                    "  {:<28} {:>12} {:>8} {:>10} {:>10}",
                    row.email, row.investment, row.reward, row.earnings, row.status
                )?;
            }
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CliReferralLink {
    pub referral_code: String,
    pub invite_url: String,
}

impl fmt::Display for CliReferralLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Referral Code: {}", self.referral_code)?;
        writeln!(f, "Invite Link:   {}", self.invite_url)?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CliYesterdayReferralTotal {
    pub total_earnings: f64,
    pub date: String,
    pub count: u64,
}

impl fmt::Display for CliYesterdayReferralTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Yesterday's Referral Earnings ({})", self.date)?;
        writeln!(f, "  Unclaimed: {} USDT across {} record(s)", self.total_earnings, self.count)?;
        Ok(())
    }
}

// ── Subcommand Definition (clap) ────────────────────────────────────
pub trait ReferralSubCommands {
    fn referral_subcommands(self) -> Self;
}

impl ReferralSubCommands for App<'_, '_> {
    fn referral_subcommands(self) -> Self {
        self.subcommand(
            SubCommand::with_name("referral")
                .about("Referral program status and invite link")
                .setting(AppSettings::SubcommandRequiredElseHelp)
                .subcommand(
                    SubCommand::with_name("stats")
                        .about("Show referral counts, earnings, and referred users"),
                )
                .subcommand(
                    SubCommand::with_name("link")
                        .about("Show the referral code and invite link"),
                )
                .subcommand(
                    SubCommand::with_name("yesterday")
                        .about("Show yesterday's unclaimed referral earnings"),
                ),
        )
    }
}

// ── Argument Parsing ────────────────────────────────────────────────
pub fn parse_referral_command(matches: &ArgMatches<'_>) -> Result<CliCommand, CliError> {
    match matches.subcommand() {
        ("stats", Some(_matches)) => Ok(CliCommand::Referral(ReferralCliCommand::Stats)),
        ("link", Some(_matches)) => Ok(CliCommand::Referral(ReferralCliCommand::Link)),
        ("yesterday", Some(_matches)) => {
            Ok(CliCommand::Referral(ReferralCliCommand::YesterdayTotal))
        }
        _ => unreachable!(),
    }
}

// ── Command Processing ──────────────────────────────────────────────
pub async fn process_referral_command(
    context: &CliContext,
    command: &ReferralCliCommand,
) -> ProcessResult {
    match command {
        ReferralCliCommand::Stats => {
            let user_id = context.user_id()?;
            let stats = context.api.referral_stats(user_id).await?;
            let output = CliReferralStats {
                total_referrals: stats.total_referrals,
                active_referrals: stats.active_referrals,
                daily_earnings: stats.daily_earnings,
                referrals: stats
                    .referrals
                    .iter()
                    .map(|entry| CliReferralRow {
                        email: entry.email.clone(),
                        investment: entry.investment.clone(),
                        reward: entry.reward.clone(),
                        earnings: entry.earnings.clone(),
                        status: format!("{:?}", entry.status),
                    })
                    .collect(),
            };
            Ok(output.to_string())
        }
        ReferralCliCommand::Link => {
            let email = context.email()?;
            let response = context.api.referral_code(email).await?;
            let mut link_state = ReferralLinkState::default();
            link_state.set_referral_code(&response.referral_code);
            let invite_url = link_state
                .invite_url(INVITE_BASE_URL)
                .unwrap_or_else(|| INVITE_BASE_URL.to_string());
            Ok(CliReferralLink {
                referral_code: response.referral_code,
                invite_url,
            }
            .to_string())
        }
        ReferralCliCommand::YesterdayTotal => {
            let user_id = context.user_id()?;
            let total = context.api.yesterday_referral_total(user_id).await?;
            Ok(CliYesterdayReferralTotal {
                total_earnings: total.total_earnings,
                date: total.date,
                count: total.count,
            }
            .to_string())
        }
    }
}
