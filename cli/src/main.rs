mod commands;
mod terminal;

use commands::{CommandLine, Commands, expired, new, run};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Credentials may live in a .env file; it must be loaded before clap reads the environment.
    let _ = dotenvy::dotenv();

    let commands = CommandLine::parse_args();
    let quiet = commands.quiet;

    logging::init_logging(commands.verbose, quiet);
    print::banner(quiet);

    let cfg = commands.config();
    let orchestrator = commands::orchestrator(&cfg)?;

    match commands.command {
        Commands::New => new::new_domains(&orchestrator, quiet).await?,
        Commands::Expired => expired::expired_domains(&orchestrator, quiet).await?,
        Commands::Run => run::run_all(&orchestrator, quiet).await?,
    }

    print::end_of_program(quiet);
    Ok(())
}
