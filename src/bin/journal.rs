use std::io::{self, BufRead, Write};

use dotenvy::dotenv;
use tracing::{info, instrument, warn};

use trade_journal::command::{Command, HELP};
use trade_journal::config;
use trade_journal::logging;
use trade_journal::session::Session;

#[instrument(name = "journal_main")]
fn main() -> eyre::Result<()> {
    // Load environment variables from .env file, if present
    dotenv().ok();

    // Initialize logging
    if let Err(e) = logging::init_logging(env!("CARGO_BIN_NAME").to_string()) {
        eprintln!("Failed to initialize logging: {}", e);
        return Err(e);
    }

    let cfg = config::Config::load();
    info!(title = %cfg.title, currency = %cfg.currency_symbol, "Configuration loaded and logging initialized");

    // One session for the lifetime of the process; nothing survives exit
    let mut session = Session::new(cfg);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}\n\n{}", session.view(), HELP)?;

    loop {
        write!(stdout, "\n> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "Error: {}", e)?;
                continue;
            }
        };

        match command {
            Command::Action(action) => match session.handle(action) {
                Ok(view) => writeln!(stdout, "{}", view)?,
                Err(e) => {
                    warn!(error = %e, "Action rejected");
                    writeln!(stdout, "Error: {}", e)?;
                }
            },
            Command::Show => writeln!(stdout, "{}", session.view())?,
            Command::Json => writeln!(stdout, "{}", session.view().to_json()?)?,
            Command::Help => writeln!(stdout, "{}", HELP)?,
            Command::Quit => break,
        }
    }

    info!(trades = session.store().len(), "Session ended, journal discarded");
    Ok(())
}
