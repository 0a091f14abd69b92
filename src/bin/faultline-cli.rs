use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "faultline-cli")]
#[command(about = "Management CLI for the Faultline service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show service metadata and the current failure mode
    Info,
    /// Run a health check
    Health,
    /// Show the fault-state snapshot
    Status,
    /// Set the failure mode (e.g. none, health_failure, slow_response)
    Mode { mode: String },
    /// Toggle the memory leak simulation
    Leak {
        #[arg(value_parser = parse_switch)]
        enable: bool,
    },
    /// Toggle the CPU stress simulation
    Stress {
        #[arg(value_parser = parse_switch)]
        enable: bool,
    },
}

fn parse_switch(s: &str) -> Result<bool, String> {
    match s {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        other => Err(format!("expected on/off, got '{}'", other)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Info => {
            let res = client.get(format!("{}/", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Status => {
            let res = client.get(format!("{}/api/status", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Mode { mode } => {
            let res = client
                .post(format!("{}/api/failure-mode", cli.url))
                .json(&serde_json::json!({ "mode": mode }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Leak { enable } => {
            let res = client
                .post(format!("{}/api/memory-leak", cli.url))
                .json(&serde_json::json!({ "enable": enable }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Stress { enable } => {
            let res = client
                .post(format!("{}/api/cpu-stress", cli.url))
                .json(&serde_json::json!({ "enable": enable }))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let body: Value = res.json().await?;
    if !status.is_success() {
        eprintln!("Service returned status {}", status);
    }
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
