mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "daybox")]
#[command(about = "Edit countdown-calendar day boxes locally and sync them with the calendar service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a local calendar
    New {
        calendar_id: String,

        /// First day of the calendar (YYYY-MM-DD)
        #[arg(long)]
        start_date: String,

        /// Display title
        #[arg(long)]
        title: Option<String>,
    },
    /// Show a calendar's day boxes
    Show { calendar_id: String },
    /// Save content into one day box
    Save {
        calendar_id: String,

        /// Day offset from the calendar's start date (0-based)
        #[arg(short, long)]
        day: u32,

        /// Message text
        #[arg(long)]
        text: Option<String>,

        /// Image URL
        #[arg(long)]
        image: Option<String>,

        /// Attach a local image file instead of an image URL
        #[arg(long, conflicts_with = "image")]
        image_file: Option<PathBuf>,

        /// Video URL
        #[arg(long)]
        video: Option<String>,

        /// Audio URL
        #[arg(long)]
        audio: Option<String>,

        /// Anchor date for calendars without a stored one (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,
    },
    /// Manage the stored session for the calendar service
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
}

#[derive(Subcommand)]
enum AuthCommands {
    /// Store a bearer token
    Login {
        #[arg(long)]
        token: String,

        /// Account label shown in output
        #[arg(long)]
        account: Option<String>,
    },
    /// Forget the stored session
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::New {
            calendar_id,
            start_date,
            title,
        } => commands::new::run(calendar_id, start_date, title),
        Commands::Show { calendar_id } => commands::show::run(calendar_id),
        Commands::Save {
            calendar_id,
            day,
            text,
            image,
            image_file,
            video,
            audio,
            start_date,
        } => {
            commands::save::run(
                calendar_id,
                day,
                text,
                image,
                image_file,
                video,
                audio,
                start_date,
            )
            .await
        }
        Commands::Auth { command } => match command {
            AuthCommands::Login { token, account } => commands::auth::login(token, account),
            AuthCommands::Logout => commands::auth::logout(),
        },
    }
}
