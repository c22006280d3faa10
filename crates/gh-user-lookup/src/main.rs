use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use gh_client::OctocrabClient;
use gh_lookup_config::AppConfig;
use gh_user_lookup::{logger, Intent, LoadingState, SearchCoordinator, Store, ViewState};

#[derive(Parser, Debug)]
#[command(name = "gh-user-lookup", version)]
#[command(about = "Look up a GitHub user's profile and public repositories")]
struct Cli {
    /// GitHub login to look up
    login: String,

    /// REST API base URL, overrides the config file
    #[arg(long)]
    api_base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // .env may carry RUST_LOG, so it is read before the logger starts
    let dotenv = dotenvy::dotenv();
    logger::init();
    match dotenv {
        Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
        Err(_) => log::debug!(".env file not found, will rely on environment variables"),
    }

    let config = AppConfig::load();
    let api_base_url = cli.api_base_url.unwrap_or(config.api_base_url);
    let token = std::env::var("GITHUB_TOKEN").ok();

    let client = OctocrabClient::with_base_url(&api_base_url, token)
        .with_context(|| format!("Failed to create GitHub client for {}", api_base_url))?;

    let store = Store::default();
    let coordinator = SearchCoordinator::new(Arc::new(client), store.clone());
    let mut updates = store.subscribe();

    coordinator.handle(Intent::QueryChanged(cli.login));
    coordinator.handle(Intent::SearchPressed);
    if coordinator.live_request().is_none() {
        bail!("Login must not be blank");
    }

    let progress = async {
        let mut last_line = String::new();
        while updates.changed().await.is_ok() {
            let line = progress_line(&updates.borrow_and_update());
            if line != last_line {
                eprintln!("{}", line);
                last_line = line;
            }
        }
    };

    tokio::select! {
        _ = coordinator.settled() => {}
        _ = progress => {}
    }

    let state = store.state();
    print_summary(&state);

    match (state.user_error(), state.repositories_error()) {
        (None, None) => Ok(()),
        (Some(user), None) => bail!("User lookup failed: {}", user),
        (None, Some(repos)) => bail!("Repository lookup failed: {}", repos),
        (Some(user), Some(repos)) => bail!(
            "User lookup failed: {}; repository lookup failed: {}",
            user,
            repos
        ),
    }
}

fn stream_status(state: &LoadingState) -> &'static str {
    match state {
        LoadingState::Idle => "idle",
        LoadingState::Loading => "loading",
        LoadingState::Loaded => "loaded",
        LoadingState::Error(_) => "failed",
    }
}

fn progress_line(state: &ViewState) -> String {
    format!(
        "[{}] user: {}, repositories: {} ({} so far)",
        state.login,
        stream_status(&state.user_state),
        stream_status(&state.repositories_state),
        state.repositories.len()
    )
}

fn print_summary(state: &ViewState) {
    match &state.user {
        Some(user) => {
            let name = if user.name.is_empty() {
                state.login.as_str()
            } else {
                user.name.as_str()
            };
            println!("{}", name);
            println!("  avatar: {}", user.avatar_url);
        }
        None => println!("{}", state.login),
    }

    println!("  public repositories: {}", state.repositories.len());
    println!("  total forks: {}", state.total_forks());
    if state.has_star_badge() {
        println!("  \u{2605} star badge");
    }

    for repo in &state.repositories {
        let updated = repo
            .formatted_updated_at()
            .unwrap_or_else(|| "unknown".to_string());
        println!(
            "  - {} \u{2605}{} forks:{} watchers:{} issues:{} (updated {})",
            repo.name, repo.stargazers, repo.forks, repo.watchers, repo.open_issues, updated
        );
        if !repo.description.is_empty() {
            println!("      {}", repo.description);
        }
    }
}
