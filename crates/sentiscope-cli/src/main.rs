use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod app;
mod commands;

#[derive(Parser)]
#[command(name = "sentiscope")]
#[command(about = "Sentiscope - social media comment sentiment analysis client", long_about = None)]
struct Cli {
    /// Server base URL (overrides SENTISCOPE_API_URL and config.toml)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login { username: String, password: String },
    /// Create an account (does not log in)
    Register {
        username: String,
        password: String,
        confirm_password: String,
    },
    /// Invalidate the session remotely (best effort) and clear it locally
    Logout,
    /// Show the current session state
    Status,
    /// Submit a URL for comment sentiment analysis
    Analyze { url: String },
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    let code = match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32> {
    let app = app::bootstrap(cli.api_url)?;

    match cli.command {
        Commands::Login { username, password } => {
            commands::login::run(&app, &username, &password).await
        }
        Commands::Register {
            username,
            password,
            confirm_password,
        } => commands::register::run(&app, &username, &password, &confirm_password).await,
        Commands::Logout => commands::logout::run(&app).await,
        Commands::Status => commands::status::run(&app).await,
        Commands::Analyze { url } => commands::analyze::run(&app, &url).await,
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
