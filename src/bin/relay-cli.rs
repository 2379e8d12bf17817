use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Management CLI for the request relay", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check relay liveness
    Health,
    /// Fetch upstream data through the relay
    Fetch {
        /// Override the upstream URL (open variant only)
        #[arg(long)]
        api_url: Option<String>,

        /// API token for the gated variant
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Exercise the login endpoint
    Login {
        #[arg(short = 'U', long)]
        username: String,

        #[arg(short = 'P', long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/healthz", cli.url)).send().await?;
            println!("{}", res.status());
        }
        Commands::Fetch { api_url, token } => {
            let mut req = client.get(format!("{}/", cli.url));
            if let Some(api_url) = api_url {
                req = req.query(&[("api_url", api_url)]);
            }
            if let Some(token) = token {
                req = req.header("X-API-Token", token);
            }
            let res = req.send().await?;
            print_response(res).await?;
        }
        Commands::Login { username, password } => {
            let res = client
                .post(format!("{}/login", cli.url))
                .json(&serde_json::json!({
                    "username": username,
                    "password": password,
                }))
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
        eprintln!("Error: relay returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
