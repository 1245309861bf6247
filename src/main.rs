use clap::Parser;
use tracing_subscriber::EnvFilter;

use trackio_cli::error::EXIT_SUCCESS;
use trackio_cli::{input, Config, HeartbeatSender};

#[derive(Parser)]
#[command(name = "trackio-cli", version)]
#[command(about = "Forward editor heartbeats from stdin to the Code Tracker API", long_about = None)]
struct Cli {
    /// Your Code Tracker API key
    #[arg(long)]
    key: Option<String>,

    /// The API endpoint URL to send heartbeats to
    #[arg(long)]
    api_url: Option<String>,

    /// The editor plugin version string (used for User-Agent)
    #[arg(long)]
    plugin: Option<String>,
}

#[tokio::main]
async fn main() {
    // Logging goes to stderr; stdout is reserved for the status lines the
    // host extension parses.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    std::process::exit(run(cli).await);
}

async fn run(cli: Cli) -> i32 {
    let config = match Config::from_flags(cli.key, cli.api_url, cli.plugin) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return e.exit_code();
        }
    };

    if config.plugin.is_empty() {
        eprintln!(
            "Warning: Plugin info is missing via --plugin flag. User-Agent header will be omitted."
        );
    }

    let payload = match input::read_payload(tokio::io::stdin()).await {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("Error: {}", e);
            return e.exit_code();
        }
    };

    if payload.is_empty() {
        println!("No data received from stdin. Exiting.");
        return EXIT_SUCCESS;
    }

    let result = match HeartbeatSender::new(&config) {
        Ok(sender) => sender.send(&payload).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            println!("Heartbeats sent successfully.");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error sending heartbeats: {}", e);
            e.exit_code()
        }
    }
}
