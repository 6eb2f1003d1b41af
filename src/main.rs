use avl_grove::command::{log_level, Command, Session};
use log::{warn, LevelFilter};
use std::io::{self, BufRead, Write};

fn initialize_logging() {
    use simplelog::*;
    let (level, invalid) = match log_level(std::env::var("AVL_LOG").ok().as_deref()) {
        Ok(level) => (level, None),
        Err(invalid) => (LevelFilter::Warn, Some(invalid)),
    };
    // only fails if a logger was already set
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
    if let Some(level) = invalid {
        warn!("ignoring AVL_LOG `{}`, it is not a log level", level);
    }
}

fn new_session() -> Session {
    match std::env::var("AVL_SEED") {
        Err(_) => Session::new(),
        Ok(seed) => match seed.parse() {
            Ok(seed) => Session::with_seed(seed),
            Err(_) => {
                warn!("ignoring AVL_SEED `{}`, it is not a number", seed);
                Session::new()
            }
        },
    }
}

fn main() -> io::Result<()> {
    initialize_logging();
    let mut session = new_session();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => writeln!(out, "{}", session.execute(command))?,
            Err(err) => writeln!(out, "error: {}", err)?,
        }
        out.flush()?;
    }
    Ok(())
}
