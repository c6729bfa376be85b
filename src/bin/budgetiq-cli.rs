use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;

use budgetiq::security::{X_ORG_ID, X_USER_ID};
use budgetiq::services::{actuator, ServiceKind};

#[derive(Parser)]
#[command(name = "budgetiq-cli")]
#[command(about = "Probe BudgetIQ internal services", long_about = None)]
struct Cli {
    /// Base URL of the service (or the gateway).
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call a service's ping endpoint
    Ping {
        #[arg(short, long, value_enum, default_value = "core")]
        service: ServiceKind,

        /// Send X-User-Id as the gateway would
        #[arg(long)]
        user_id: Option<String>,

        /// Send X-Org-Id as the gateway would
        #[arg(long)]
        org_id: Option<String>,
    },
    /// Check actuator health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Ping {
            service,
            user_id,
            org_id,
        } => {
            let mut headers = HeaderMap::new();
            if let Some(user_id) = user_id {
                headers.insert(X_USER_ID, HeaderValue::from_str(&user_id)?);
            }
            if let Some(org_id) = org_id {
                headers.insert(X_ORG_ID, HeaderValue::from_str(&org_id)?);
            }
            let res = client
                .get(format!("{}{}", base, service.ping_path()))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Health => {
            let res = client
                .get(format!("{}{}", base, actuator::HEALTH_PATH))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
