//! CLI Adapter.

mod recommend;

use clap::{Parser, Subcommand};

use crate::app::commands::health::HealthStatus;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "adspecta")]
#[command(version)]
#[command(
    about = "Request smart ad-space recommendations from the AdSpecta service",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request ad-space recommendations for a campaign
    #[clap(visible_alias = "r")]
    Recommend {
        /// Monthly budget in rupees
        #[arg(short, long)]
        budget: Option<String>,
        /// Audience type (general, students, it_workers, shoppers, residents, tourists)
        #[arg(short, long)]
        audience: Option<String>,
        /// Minimum audience age
        #[arg(long)]
        age_min: Option<String>,
        /// Maximum audience age
        #[arg(long)]
        age_max: Option<String>,
        /// Override the recommendation service base URL
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Check that the recommendation service is reachable
    Health {
        /// Override the recommendation service base URL
        #[arg(long)]
        api_url: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Recommend { budget, audience, age_min, age_max, api_url } => {
            recommend::run_recommend(budget, audience, age_min, age_max, api_url)
        }
        Commands::Health { api_url } => run_health(api_url),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_health(api_url: Option<String>) -> Result<i32, AppError> {
    match crate::health(api_url.as_deref())? {
        HealthStatus::Reachable { status, body } => {
            println!("Service reachable (HTTP {status}): {body}");
            Ok(0)
        }
        HealthStatus::Unreachable { message } => {
            eprintln!("Service unreachable: {message}");
            Ok(1)
        }
    }
}
