use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::state::AppState;
use crate::ui::table;

// ---------------------------------------------------------------------------
// Interactive console session
// ---------------------------------------------------------------------------

/// Words that end the session, checked case-insensitively.
const EXIT_WORDS: &[&str] = &["exit", "quit", "выйти"];

pub struct PriceScoutApp {
    pub state: AppState,
}

impl PriceScoutApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Prompt loop: every line is a search query until an exit word or EOF.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut line = String::new();
        loop {
            print!("Search query (or \"exit\" to quit): ");
            io::stdout().flush().context("flushing prompt")?;

            line.clear();
            let read = input.read_line(&mut line).context("reading query")?;
            if read == 0 {
                // EOF: finish the newline the prompt started.
                println!();
                break;
            }
            let query = line.trim();
            if is_exit_word(query) {
                break;
            }

            let results = self.state.search(query);
            if results.is_empty() {
                println!("No matches. Try another query.");
            } else {
                print!("{}", table::render(&results));
            }
        }
        println!("Session finished.");
        Ok(())
    }
}

fn is_exit_word(input: &str) -> bool {
    let lowered = input.to_lowercase();
    EXIT_WORDS.contains(&lowered.as_str())
}
