//! Terminal blackjack: a single deck, the dealer, and you.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{GameOptions, Session};

fn main() -> ExitCode {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(GameOptions::default(), seed, stdin.lock(), stdout.lock());

    if let Err(err) = session.run() {
        eprintln!("session ended: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
