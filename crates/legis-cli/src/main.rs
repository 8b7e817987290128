use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use serde_json::Value;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use legis_cli::output::render_items;
use legis_cli::{Command, Config};
use legis_client::LegifranceClient;
use legis_core::{extract_results, Credentials, Endpoints};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Setup logging (stderr to keep stdout clean for --json)
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // Credentials are read once here and owned by the client from now on
    let config = Config::parse();

    let endpoints = Endpoints::new(&config.base_url, &config.oauth_url)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let credentials = Credentials::new(config.client_id, config.client_secret);
    let client =
        LegifranceClient::new(credentials, endpoints).context("Failed to build HTTP client")?;

    match config.command.unwrap_or(Command::Ping) {
        Command::Ping => ping(&client).await,
        Command::Question { question } => {
            info!("Searching law articles for: '{}'", question);
            let response = client.search_by_question(&question).await;
            print_results(response.as_ref(), config.json)?;
        }
        Command::Article { code, number } => {
            info!("Looking up article {} of {}", number, code);
            let response = client.search_code_article(&code, &number).await;
            print_results(response.as_ref(), config.json)?;
        }
        Command::CaseLaw { theme } => {
            info!("Searching case law for: '{}'", theme);
            let response = client.search_case_law(&theme).await;
            print_results(response.as_ref(), config.json)?;
        }
    }

    Ok(())
}

/// Authenticates, runs a one-result search and reports the outcome
async fn ping(client: &LegifranceClient) {
    println!("Testing connection to the Legifrance API...");
    let outcome = client.ping().await;
    println!("{}", outcome);
    println!("Done.");
}

/// Prints extracted results; a failed search prints as an empty list
fn print_results(response: Option<&Value>, as_json: bool) -> anyhow::Result<()> {
    if response.is_none() {
        eprintln!("Search failed, see the log above for details.");
    }

    let items = extract_results(response);
    info!("Extracted {} result(s)", items.len());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print!("{}", render_items(&items));
    }
    Ok(())
}
