use clap::Parser;
use luxestate::adapter::inbound::cli::{command::Cli, output, run};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = run::run(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
