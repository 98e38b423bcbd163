//! POSystem CLI - operator tools against the content backend.
//!
//! # Usage
//!
//! ```bash
//! # Get a token
//! possystem-cli login -e admin@example.com -p secret
//!
//! # Public posts
//! possystem-cli posts list
//!
//! # Admin data (token from --token or POSSYSTEM_TOKEN)
//! possystem-cli messages list
//! possystem-cli subscribers export -o subscribers.csv
//! possystem-cli stats
//! ```
//!
//! # Commands
//!
//! - `login` - Exchange credentials for a bearer token
//! - `posts list` - List blog posts
//! - `messages list` - List contact messages
//! - `subscribers export` - Export subscribers as CSV
//! - `stats` - Dashboard counts

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use secrecy::SecretString;
use url::Url;

mod commands;

#[derive(Parser)]
#[command(name = "possystem-cli")]
#[command(author, version, about = "POSystem CLI tools")]
struct Cli {
    /// Backend origin
    #[arg(
        long,
        global = true,
        env = "BACKEND_URL",
        default_value = "http://localhost:5000"
    )]
    backend_url: Url,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exchange credentials for a bearer token
    Login {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password
        #[arg(short, long, env = "POSSYSTEM_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Blog posts
    Posts {
        #[command(subcommand)]
        action: PostsAction,
    },
    /// Contact messages
    Messages {
        #[command(subcommand)]
        action: MessagesAction,
    },
    /// Newsletter subscribers
    Subscribers {
        #[command(subcommand)]
        action: SubscribersAction,
    },
    /// Print dashboard counts
    Stats {
        #[command(flatten)]
        auth: TokenArg,
    },
}

#[derive(Subcommand)]
enum PostsAction {
    /// List every post the backend returns
    List,
}

#[derive(Subcommand)]
enum MessagesAction {
    /// List contact messages
    List {
        #[command(flatten)]
        auth: TokenArg,
    },
}

#[derive(Subcommand)]
enum SubscribersAction {
    /// Export subscribers as CSV
    Export {
        #[command(flatten)]
        auth: TokenArg,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct TokenArg {
    /// Admin bearer token
    #[arg(long, env = "POSSYSTEM_TOKEN", hide_env_values = true)]
    token: String,
}

impl TokenArg {
    fn secret(self) -> SecretString {
        SecretString::from(self.token)
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so command output can be piped
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let client = commands::client(&cli.backend_url)?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&client, email, password).await?;
        }
        Commands::Posts { action } => match action {
            PostsAction::List => commands::posts::list(&client).await?,
        },
        Commands::Messages { action } => match action {
            MessagesAction::List { auth } => {
                commands::inbox::list_messages(&client, &auth.secret()).await?;
            }
        },
        Commands::Subscribers { action } => match action {
            SubscribersAction::Export { auth, output } => {
                commands::inbox::export_subscribers(&client, &auth.secret(), output.as_deref())
                    .await?;
            }
        },
        Commands::Stats { auth } => commands::inbox::stats(&client, &auth.secret()).await?,
    }
    Ok(())
}
