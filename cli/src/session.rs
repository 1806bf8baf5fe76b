//! Session commands: sign in and out of the platform account.
//!
//! The session itself is a backend cookie held by the HTTP client; what the
//! CLI persists is the verified identity (user id and email), so the other
//! commands know who they act for.

use {
    crate::cli::{CliCommand, CliContext, CliError, ProcessResult},
    clap::{App, Arg, ArgMatches, SubCommand},
    serde::{Deserialize, Serialize},
    std::fmt,
};

// ── CLI Command Enum Variants ───────────────────────────────────────
#[derive(Debug, PartialEq)]
pub enum SessionCliCommand {
    Login { email: String, password: String },
    Logout,
}

// ── Output Structs ──────────────────────────────────────────────────
#[derive(Serialize, Deserialize, Debug)]
pub struct CliLogin {
    pub email: String,
    pub user_id: String,
}

impl fmt::Display for CliLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Logged In")?;
        writeln!(f, "  Email:   {}", self.email)?;
        writeln!(f, "  User Id: {}", self.user_id)?;
        Ok(())
    }
}

// ── Subcommand Definition (clap) ────────────────────────────────────
pub trait SessionSubCommands {
    fn session_subcommands(self) -> Self;
}

impl SessionSubCommands for App<'_, '_> {
    fn session_subcommands(self) -> Self {
        self.subcommand(
            SubCommand::with_name("login")
                .about("Sign in and persist the verified identity")
                .arg(
                    Arg::with_name("email")
                        .index(1)
                        .value_name("EMAIL")
                        .required(true)
                        .help("Account email"),
                )
                .arg(
                    Arg::with_name("password")
                        .long("password")
                        .value_name("PASSWORD")
                        .takes_value(true)
                        .required(true)
                        .help("Account password"),
                ),
        )
        .subcommand(
            SubCommand::with_name("logout")
                .about("Sign out and clear the persisted identity"),
        )
    }
}

// ── Argument Parsing ────────────────────────────────────────────────
pub fn parse_session_command(
    name: &str,
    matches: &ArgMatches<'_>,
) -> Result<CliCommand, CliError> {
    match name {
        "login" => Ok(CliCommand::Session(SessionCliCommand::Login {
            email: matches.value_of("email").unwrap_or_default().to_string(),
            password: matches
                .value_of("password")
                .unwrap_or_default()
                .to_string(),
        })),
        "logout" => Ok(CliCommand::Session(SessionCliCommand::Logout)),
        _ => unreachable!(),
    }
}

// ── Command Processing ──────────────────────────────────────────────
pub async fn process_session_command(
    context: &mut CliContext,
    command: &SessionCliCommand,
) -> ProcessResult {
    match command {
        SessionCliCommand::Login { email, password } => {
            context.api.signin(email, password).await?;

            // The cookie is opaque; the verify endpoint says who we are.
            let verify = context.api.verify_auth().await?;
            if !verify.is_authenticated {
                return Err(CliError::AuthFailed(
                    verify
                        .error
                        .unwrap_or_else(|| "session was not established".to_string()),
                ));
            }
            let email = verify.email.unwrap_or_else(|| email.clone());
            let user_id = verify.id.unwrap_or_default();

            context.auth.set_login(&email, &user_id);
            context.config.email = email.clone();
            context.config.user_id = user_id.clone();
            context.persist_config()?;
            Ok(CliLogin { email, user_id }.to_string())
        }
        SessionCliCommand::Logout => {
            let response = context.api.logout().await?;
            context.auth.logout();
            context.config.user_id.clear();
            context.config.email.clear();
            context.persist_config()?;
            Ok(response.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_render() {
        let output = CliLogin {
            email: "user@example.com".to_string(),
            user_id: "u-42".to_string(),
        };
        let rendered = output.to_string();
        assert!(rendered.contains("Logged In"));
        assert!(rendered.contains("user@example.com"));
        assert!(rendered.contains("u-42"));
    }
}
