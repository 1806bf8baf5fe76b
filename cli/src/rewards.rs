//! Reward commands: list candidates, claim, live cooldown countdown, and
//! the local yield estimate.

use {
    crate::cli::{now_ms, CliCommand, CliContext, CliError, ProcessResult},
    clap::{App, AppSettings, Arg, ArgMatches, SubCommand},
    console::Term,
    lazrchain_reward_engine::{
        cooldown, estimator,
        evaluator::{self, RewardCandidate},
        AccountSnapshot, RewardEngineConfig, RewardKind,
    },
    serde::{Deserialize, Serialize},
    std::{fmt, time::Duration},
};

// ── CLI Command Enum Variants ───────────────────────────────────────
#[derive(Debug, PartialEq)]
pub enum RewardsCliCommand {
    List,
    Claim { kind: RewardKind },
    Countdown,
    Estimate { balance: f64, speed: f64 },
}

// ── Output Structs ──────────────────────────────────────────────────
#[derive(Serialize, Deserialize, Debug)]
pub struct CliRewardRow {
    pub kind: String,
    pub amount: f64,
    pub claimable: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CliRewardList {
    pub rewards: Vec<CliRewardRow>,
    /// Remaining cooldown as `XhYmZs`, `None` when claimable.
    pub cooldown_remaining: Option<String>,
}

impl fmt::Display for CliRewardList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Claimable Rewards")?;
        if self.rewards.is_empty() {
            writeln!(f, "  (nothing to claim)")?;
            return Ok(());
        }
        writeln!(f, "  {:<24} {:>14} {:>10}", "Reward", "Amount (USDT)", "Status")?;
        writeln!(f, "  {}", "-".repeat(52))?;
        for row in &self.rewards {
            writeln!(
                f,
                "  {:<24} {:>14.4} {:>10}",
                row.kind,
                row.amount,
                if row.claimable { "ready" } else { "cooldown" }
            )?;
        }
        if let Some(remaining) = &self.cooldown_remaining {
            writeln!(f)?;
            writeln!(f, "  Next claim in {remaining}")?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CliYieldEstimate {
    pub balance: f64,
    pub speed_mbps: f64,
    pub yield_pct: f64,
    pub yield_amount: f64,
}

impl fmt::Display for CliYieldEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Estimated Daily Yield (display estimate only)")?;
        writeln!(f, "  Balance:       {} USDT", self.balance)?;
        writeln!(f, "  Network Speed: {} Mbps", self.speed_mbps)?;
        writeln!(f, "  Daily Yield:   {:.4}%", self.yield_pct)?;
        writeln!(f, "  Daily Amount:  {:.4} USDT", self.yield_amount)?;
        Ok(())
    }
}

// ── Subcommand Definition (clap) ────────────────────────────────────
pub trait RewardsSubCommands {
    fn rewards_subcommands(self) -> Self;
}

impl RewardsSubCommands for App<'_, '_> {
    fn rewards_subcommands(self) -> Self {
        self.subcommand(
            SubCommand::with_name("rewards")
                .about("Reward eligibility, claiming, and the cooldown")
                .setting(AppSettings::SubcommandRequiredElseHelp)
                .subcommand(
                    SubCommand::with_name("list")
                        .about("Show the rewards claimable right now"),
                )
                .subcommand(
                    SubCommand::with_name("claim")
                        .about("Claim one reward")
                        .arg(
                            Arg::with_name("kind")
                                .index(1)
                                .value_name("KIND")
                                .required(true)
                                .help(
                                    "balance, referral, daily (only when the backend \
                                     has granted a bonus), or a milestone id",
                                ),
                        ),
                )
                .subcommand(
                    SubCommand::with_name("countdown")
                        .about("Live countdown until the next claim is allowed"),
                )
                .subcommand(
                    SubCommand::with_name("estimate")
                        .about("Estimate today's yield from balance and network speed")
                        .arg(
                            Arg::with_name("balance")
                                .long("balance")
                                .value_name("USDT")
                                .takes_value(true)
                                .required(true),
                        )
                        .arg(
                            Arg::with_name("speed")
                                .long("speed")
                                .value_name("MBPS")
                                .takes_value(true)
                                .required(true),
                        ),
                ),
        )
    }
}

// ── Argument Parsing ────────────────────────────────────────────────
pub fn parse_reward_kind(value: &str) -> Result<RewardKind, CliError> {
    match value {
        "balance" => Ok(RewardKind::BalanceReward),
        "referral" => Ok(RewardKind::ReferralBonus),
        "daily" => Ok(RewardKind::DailyBonus),
        id if lazrchain_reward_engine::milestones::MILESTONES
            .iter()
            .any(|def| def.id == id) =>
        {
            Ok(RewardKind::Milestone { id: id.to_string() })
        }
        other => Err(CliError::BadRewardKind(other.to_string())),
    }
}

fn value_of_f64(matches: &ArgMatches<'_>, arg: &'static str) -> Result<f64, CliError> {
    let value = matches.value_of(arg).unwrap_or_default();
    value.parse().map_err(|_| CliError::BadArgument {
        arg,
        value: value.to_string(),
    })
}

pub fn parse_rewards_command(matches: &ArgMatches<'_>) -> Result<CliCommand, CliError> {
    match matches.subcommand() {
        ("list", Some(_matches)) => Ok(CliCommand::Rewards(RewardsCliCommand::List)),
        ("claim", Some(matches)) => {
            let kind = parse_reward_kind(matches.value_of("kind").unwrap_or_default())?;
            Ok(CliCommand::Rewards(RewardsCliCommand::Claim { kind }))
        }
        ("countdown", Some(_matches)) => Ok(CliCommand::Rewards(RewardsCliCommand::Countdown)),
        ("estimate", Some(matches)) => Ok(CliCommand::Rewards(RewardsCliCommand::Estimate {
            balance: value_of_f64(matches, "balance")?,
            speed: value_of_f64(matches, "speed")?,
        })),
        _ => unreachable!(),
    }
}

// ── Command Processing ──────────────────────────────────────────────

/// Assemble the evaluator's input from fresh backend data plus the locally
/// recorded last claim.
async fn fetch_snapshot(context: &CliContext) -> Result<AccountSnapshot, CliError> {
    let user_id = context.user_id()?;
    let totals = context.api.total_yield(user_id).await?;
    let mut snapshot = AccountSnapshot::new(totals.total_deposited, totals.total_referral_earning);
    snapshot.last_reward_claim = context.config.last_reward_claim_ms;
    // No endpoint reports a granted daily bonus, so `daily_bonus` stays
    // zero and the kind only becomes claimable once the backend serves it.
    Ok(snapshot)
}

pub async fn process_rewards_command(
    context: &mut CliContext,
    command: &RewardsCliCommand,
) -> ProcessResult {
    let engine = context.api.config().clone();
    match command {
        RewardsCliCommand::List => {
            let snapshot = fetch_snapshot(context).await?;
            let now = now_ms();
            let candidates = evaluator::evaluate_rewards(&engine, &snapshot, now);
            let remaining = cooldown::time_remaining(&engine, snapshot.last_reward_claim, now);
            let output = CliRewardList {
                rewards: candidates
                    .iter()
                    .map(|candidate: &RewardCandidate| CliRewardRow {
                        kind: candidate.kind.to_string(),
                        amount: candidate.amount,
                        claimable: candidate.can_claim,
                    })
                    .collect(),
                cooldown_remaining: (!remaining.is_zero()).then(|| remaining.to_string()),
            };
            Ok(output.to_string())
        }
        RewardsCliCommand::Claim { kind } => {
            context.pending_claims.begin(kind)?;
            let result = process_claim(context, kind).await;
            context.pending_claims.finish(kind);
            result
        }
        RewardsCliCommand::Countdown => process_countdown(context, &engine).await,
        RewardsCliCommand::Estimate { balance, speed } => {
            let estimate = estimator::estimated_daily_yield(&engine, *balance, *speed);
            Ok(CliYieldEstimate {
                balance: *balance,
                speed_mbps: *speed,
                yield_pct: estimate.yield_pct,
                yield_amount: estimate.yield_amount,
            }
            .to_string())
        }
    }
}

async fn process_claim(context: &mut CliContext, kind: &RewardKind) -> ProcessResult {
    let engine = context.api.config().clone();
    let snapshot = fetch_snapshot(context).await?;
    let now = now_ms();

    // Re-checked at claim time; a violation never reaches the network.
    evaluator::authorize_claim(&engine, &snapshot, now)?;

    let candidates = evaluator::evaluate_rewards(&engine, &snapshot, now);
    let Some(candidate) = candidates.iter().find(|c| &c.kind == kind) else {
        return Ok(format!("Nothing to claim for {kind}."));
    };

    let mut lines = Vec::new();
    if *kind == RewardKind::ReferralBonus {
        let user_id = context.user_id()?.to_string();
        let response = context.api.claim_referral_earnings(&user_id).await?;
        lines.push(format!(
            "{} ({} record(s) for {})",
            response.message, response.updated_count, response.date
        ));
    }
    lines.push(format!(
        "Claimed {}: {:.4} USDT.",
        candidate.kind, candidate.amount
    ));

    context.config.last_reward_claim_ms = Some(now);
    context.persist_config()?;
    Ok(lines.join("\n"))
}

async fn process_countdown(context: &CliContext, engine: &RewardEngineConfig) -> ProcessResult {
    let last_claim = context.config.last_reward_claim_ms;
    let term = Term::stdout();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    loop {
        ticker.tick().await;
        let remaining = cooldown::time_remaining(engine, last_claim, now_ms());
        term.clear_line()?;
        if remaining.is_zero() {
            return Ok("Rewards are claimable now.".to_string());
        }
        term.write_str(&format!("Next claim in {remaining}"))?;
    }
}
