//! Tier catalog commands.

use {
    crate::cli::{CliCommand, CliContext, CliError, ProcessResult},
    clap::{App, AppSettings, ArgMatches, SubCommand},
    lazrchain_api_client::response::{InvestmentTierRecord, ReferralTierRecord},
    serde::{Deserialize, Serialize},
    std::fmt,
};

// ── CLI Command Enum Variants ───────────────────────────────────────
#[derive(Debug, PartialEq)]
pub enum TiersCliCommand {
    Investment,
    Referral,
}

// ── Output Structs ──────────────────────────────────────────────────
#[derive(Serialize, Deserialize, Debug)]
pub struct CliInvestmentTier {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub daily_yield_min: f64,
    pub daily_yield_max: f64,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CliInvestmentTiers {
    pub tiers: Vec<CliInvestmentTier>,
}

impl fmt::Display for CliInvestmentTiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Investment Tiers")?;
        writeln!(
            f,
            "  {:<12} {:>18} {:>16}  {}",
            "Tier", "Balance (USDT)", "Daily Yield", "Description"
        )?;
        writeln!(f, "  {}", "-".repeat(70))?;
        for tier in &self.tiers {
            writeln!(
                f,
                "  {:<12} {:>8} - {:>7} {:>6}% - {:>4}%  {}",
                tier.name,
                tier.min,
                tier.max,
                tier.daily_yield_min,
                tier.daily_yield_max,
                tier.description
            )?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CliReferralTier {
    pub name: String,
    pub min_investment: f64,
    pub max_investment: f64,
    pub referral_percentage: f64,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CliReferralTiers {
    pub tiers: Vec<CliReferralTier>,
}

impl fmt::Display for CliReferralTiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Referral Bonus Tiers")?;
        writeln!(
            f,
            "  {:<12} {:>20} {:>8}  {}",
            "Tier", "Investment (USDT)", "Bonus", "Description"
        )?;
        writeln!(f, "  {}", "-".repeat(64))?;
        for tier in &self.tiers {
            writeln!(
                f,
                "  {:<12} {:>9} - {:>8} {:>7}%  {}",
                tier.name,
                tier.min_investment,
                tier.max_investment,
                tier.referral_percentage,
                tier.description
            )?;
        }
        Ok(())
    }
}

// ── Subcommand Definition (clap) ────────────────────────────────────
pub trait TiersSubCommands {
    fn tiers_subcommands(self) -> Self;
}

impl TiersSubCommands for App<'_, '_> {
    fn tiers_subcommands(self) -> Self {
        self.subcommand(
            SubCommand::with_name("tiers")
                .about("Show the platform tier catalogs")
                .setting(AppSettings::SubcommandRequiredElseHelp)
                .subcommand(
                    SubCommand::with_name("investment")
                        .about("Show investment tiers and their daily yield ranges"),
                )
                .subcommand(
                    SubCommand::with_name("referral")
                        .about("Show referral bonus tiers and their percentages"),
                ),
        )
    }
}

// ── Argument Parsing ────────────────────────────────────────────────
pub fn parse_tiers_command(matches: &ArgMatches<'_>) -> Result<CliCommand, CliError> {
    match matches.subcommand() {
        ("investment", Some(_matches)) => Ok(CliCommand::Tiers(TiersCliCommand::Investment)),
        ("referral", Some(_matches)) => Ok(CliCommand::Tiers(TiersCliCommand::Referral)),
        _ => unreachable!(),
    }
}

// ── Command Processing ──────────────────────────────────────────────
pub async fn process_tiers_command(
    context: &CliContext,
    command: &TiersCliCommand,
) -> ProcessResult {
    match command {
        TiersCliCommand::Investment => {
            let response = context.api.investment_tiers().await?;
            let output = CliInvestmentTiers {
                tiers: response
                    .tiers
                    .iter()
                    .map(|record: &InvestmentTierRecord| CliInvestmentTier {
                        name: record.tier_name.clone(),
                        min: record.min,
                        max: record.max,
                        daily_yield_min: record.daily_yield_min,
                        daily_yield_max: record.daily_yield_max,
                        description: record.description.clone(),
                    })
                    .collect(),
            };
            Ok(output.to_string())
        }
        TiersCliCommand::Referral => {
            let response = context.api.referral_bonus_tiers().await?;
            let output = CliReferralTiers {
                tiers: response
                    .tiers
                    .iter()
                    .map(|record: &ReferralTierRecord| CliReferralTier {
                        name: record.tier_name.clone(),
                        min_investment: record.min_investment,
                        max_investment: record.max_investment,
                        referral_percentage: record.referral_percentage,
                        description: record.description.clone(),
                    })
                    .collect(),
            };
            Ok(output.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_investment_tiers_render() {
        let output = CliInvestmentTiers {
            tiers: vec![CliInvestmentTier {
                name: "Starter".to_string(),
                min: 10.0,
                max: 100.0,
                daily_yield_min: 0.5,
                daily_yield_max: 2.0,
                description: "Entry tier".to_string(),
            }],
        };
        let rendered = output.to_string();
        assert!(rendered.contains("Investment Tiers"));
        assert!(rendered.contains("Starter"));
        assert!(rendered.contains("Entry tier"));
    }
}
