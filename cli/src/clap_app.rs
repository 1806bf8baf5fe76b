//! Top-level clap application assembly.

use {
    crate::{
        referral::ReferralSubCommands, rewards::RewardsSubCommands,
        session::SessionSubCommands, tiers::TiersSubCommands, transfer::TransferSubCommands,
    },
    clap::{App, AppSettings, Arg},
};

pub fn get_clap_app<'a, 'b>(name: &str, about: &'a str, version: &'b str) -> App<'a, 'b> {
    App::new(name)
        .about(about)
        .version(version)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("config_file")
                .short("C")
                .long("config")
                .value_name("FILEPATH")
                .takes_value(true)
                .global(true)
                .help("Configuration file to use"),
        )
        .arg(
            Arg::with_name("url")
                .long("url")
                .value_name("URL")
                .takes_value(true)
                .global(true)
                .help("Backend API base URL, overrides the config file"),
        )
        .arg(
            Arg::with_name("user_id")
                .long("user-id")
                .value_name("ID")
                .takes_value(true)
                .global(true)
                .help("Acting user id, overrides the config file"),
        )
        .session_subcommands()
        .tiers_subcommands()
        .rewards_subcommands()
        .transfer_subcommands()
        .referral_subcommands()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            cli::{parse_command, CliCommand},
            rewards::RewardsCliCommand,
            session::SessionCliCommand,
            tiers::TiersCliCommand,
            transfer::TransferCliCommand,
        },
        lazrchain_reward_engine::RewardKind,
    };

    fn parse(args: &[&str]) -> CliCommand {
        let matches = get_clap_app("lazrchain", "test", "0.1.0")
            .get_matches_from_safe(args)
            .unwrap();
        parse_command(&matches).unwrap()
    }

    #[test]
    fn test_parse_session() {
        assert_eq!(
            parse(&[
                "lazrchain",
                "login",
                "user@example.com",
                "--password",
                "hunter22hunter22"
            ]),
            CliCommand::Session(SessionCliCommand::Login {
                email: "user@example.com".to_string(),
                password: "hunter22hunter22".to_string(),
            })
        );
        assert_eq!(
            parse(&["lazrchain", "logout"]),
            CliCommand::Session(SessionCliCommand::Logout)
        );
    }

    #[test]
    fn test_login_requires_password() {
        assert!(get_clap_app("lazrchain", "test", "0.1.0")
            .get_matches_from_safe(["lazrchain", "login", "user@example.com"])
            .is_err());
    }

    #[test]
    fn test_parse_tiers() {
        assert_eq!(
            parse(&["lazrchain", "tiers", "investment"]),
            CliCommand::Tiers(TiersCliCommand::Investment)
        );
        assert_eq!(
            parse(&["lazrchain", "tiers", "referral"]),
            CliCommand::Tiers(TiersCliCommand::Referral)
        );
    }

    #[test]
    fn test_parse_rewards() {
        assert_eq!(
            parse(&["lazrchain", "rewards", "list"]),
            CliCommand::Rewards(RewardsCliCommand::List)
        );
        assert_eq!(
            parse(&["lazrchain", "rewards", "claim", "balance"]),
            CliCommand::Rewards(RewardsCliCommand::Claim {
                kind: RewardKind::BalanceReward
            })
        );
        assert_eq!(
            parse(&[
                "lazrchain", "rewards", "estimate", "--balance", "50", "--speed", "50"
            ]),
            CliCommand::Rewards(RewardsCliCommand::Estimate {
                balance: 50.0,
                speed: 50.0
            })
        );
    }

    #[test]
    fn test_parse_transfers() {
        assert_eq!(
            parse(&["lazrchain", "deposit", "100"]),
            CliCommand::Transfer(TransferCliCommand::Deposit { amount: 100.0 })
        );
        assert_eq!(
            parse(&["lazrchain", "withdraw", "25.5"]),
            CliCommand::Transfer(TransferCliCommand::Withdraw { amount: 25.5 })
        );
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(get_clap_app("lazrchain", "test", "0.1.0")
            .get_matches_from_safe(["lazrchain", "frobnicate"])
            .is_err());
    }
}
