use {
    lazrchain_cli::{
        clap_app::get_clap_app,
        cli::{parse_command, process_command, CliContext},
        config::{Config, CONFIG_FILE},
    },
    lazrchain_api_client::ApiClient,
    lazrchain_store::{AuthState, PendingClaims},
    lazrchain_wallet::MockWallet,
    std::process::exit,
};

fn load_config(matches: &clap::ArgMatches<'_>) -> Result<(Config, Option<String>), String> {
    let config_file = matches
        .value_of("config_file")
        .map(String::from)
        .or_else(|| CONFIG_FILE.clone());
    let mut config = match &config_file {
        Some(config_file) => Config::load_or_default(config_file)
            .map_err(|err| format!("unable to read {config_file}: {err}"))?,
        None => Config::default(),
    };
    if let Some(url) = matches.value_of("url") {
        config.api_url = url.to_string();
    }
    if let Some(user_id) = matches.value_of("user_id") {
        config.user_id = user_id.to_string();
    }
    Ok((config, config_file))
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("info")).init();

    let matches = get_clap_app(
        "lazrchain",
        "LazrChain platform command-line client",
        env!("CARGO_PKG_VERSION"),
    )
    .get_matches();

    let (config, config_file) = match load_config(&matches) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    };

    let api = match ApiClient::new(&config.api_url) {
        Ok(api) => api,
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    };

    // There is no extension host in a terminal; a scripted wallet stands in
    // for TronLink so the deposit flow can be exercised end to end.
    let wallet_address = if config.wallet_address.is_empty() {
        "TLocalWallet".to_string()
    } else {
        config.wallet_address.clone()
    };
    let mut context = CliContext {
        api,
        wallet: Box::new(MockWallet::installed(wallet_address)),
        auth: AuthState::default(),
        config,
        config_file,
        pending_claims: PendingClaims::default(),
    };

    let command = match parse_command(&matches) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    };

    match process_command(&mut context, &command).await {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    }
}
