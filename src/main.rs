use clap::Parser;
use std::process::ExitCode;

use quickdesk::TicketStore;

#[derive(Parser)]
#[command(name = "quickdesk")]
#[command(about = "In-memory support ticket triage for the terminal")]
#[command(version)]
struct Cli {
    /// Preload a sample ticket to explore the UI with
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let store = if cli.demo {
        TicketStore::with_sample_data()
    } else {
        TicketStore::new()
    };

    match quickdesk::tui::run(store).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
