use std::error::Error;
use std::io;

use clap::Parser;
use env_logger::Env;
use log::info;

use plum_duel::console::cli::Cli;
use plum_duel::console::session::ConsoleSession;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr; keep them quiet unless asked so the board stays readable.
    let env = Env::default().filter_or("PLUM_DUEL_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let config = cli.session_config();
    info!("session config: {config:?}");

    let stdin = io::stdin();
    let mut session = ConsoleSession::new(&config, stdin.lock(), io::stdout());
    let outcome = session.run()?;
    info!("session ended: {outcome:?}");
    Ok(())
}
