//! Chatline - a terminal client for the chatline chat service.
//!
//! Provides account registration, login, and profile viewing against the
//! chatline HTTP API. A successful login is saved to disk and reused until
//! the server stops honoring the token.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use chatline::api::ApiClient;
use chatline::auth::{AuthService, Credentials, SessionStore};
use chatline::config::Config;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("register") => register(args.get(2).cloned()).await,
        Some("login") => login(args.get(2).cloned()).await,
        Some("profile") => profile().await,
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("chatline - terminal client for the chatline service");
    println!();
    println!("Usage:");
    println!("  chatline register [username]   Create an account");
    println!("  chatline login [username]      Log in and save the session");
    println!("  chatline profile               Show the logged-in user's profile");
}

fn build_service(config: &Config) -> Result<AuthService> {
    let api = ApiClient::new(config.resolve_api_url())?;
    let store = SessionStore::open(config.data_dir()?)?;
    Ok(AuthService::new(api, store))
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}

/// Ask for a username, offering the last-used one as the default.
fn ask_username(arg: Option<String>, last: Option<&str>) -> Result<String> {
    if let Some(username) = arg {
        return Ok(username);
    }
    let label = match last {
        Some(last) => format!("Username [{}]: ", last),
        None => "Username: ".to_string(),
    };
    let entered = prompt(&label)?;
    if entered.is_empty() {
        if let Some(last) = last {
            return Ok(last.to_string());
        }
        anyhow::bail!("A username is required");
    }
    Ok(entered)
}

async fn register(username_arg: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let username = ask_username(username_arg, None)?;
    let password = rpassword::prompt_password("Password: ").context("Failed to read password")?;
    let confirm =
        rpassword::prompt_password("Confirm password: ").context("Failed to read password")?;
    if password != confirm {
        anyhow::bail!("Passwords do not match");
    }

    let service = build_service(&config)?;
    service.register(&Credentials::new(username, password)).await?;

    println!("Account created. Run `chatline login` to sign in.");
    Ok(())
}

async fn login(username_arg: Option<String>) -> Result<()> {
    let mut config = Config::load()?;
    let username = ask_username(username_arg, config.last_username.as_deref())?;
    let password = rpassword::prompt_password("Password: ").context("Failed to read password")?;

    let mut service = build_service(&config)?;
    service
        .login(&Credentials::new(username.clone(), password))
        .await?;

    config.last_username = Some(username.clone());
    config.save()?;

    println!("Logged in as {}.", username);
    Ok(())
}

async fn profile() -> Result<()> {
    let config = Config::load()?;
    let service = build_service(&config)?;

    if let Some(saved_at) = service.store().saved_at() {
        info!(%saved_at, "using saved session");
    }

    let profile = service.get_profile().await?;
    println!("Username: {}", profile.username);
    println!("Email:    {}", profile.email);
    Ok(())
}
