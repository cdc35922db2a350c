//! Terminal implementation of the console capability

use colored::*;
use console::Term;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use sheetflow_core::{Console, SheetflowError, SheetflowResult};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

/// Answers accepted as "yes" on plain stdin
const YES_ANSWERS: &[&str] = &["y", "yes", "s", "sim"];

/// Console for a real terminal, with line-based fallback when stdin is piped
pub struct TerminalConsole {
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal() && Term::stdout().is_term(),
        }
    }

    fn read_line(&self, prompt: &str) -> SheetflowResult<String> {
        print!("{} {} ", "?".blue().bold(), prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(SheetflowError::console("standard input closed"));
        }
        Ok(line.trim().to_string())
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a typed answer means yes
pub fn is_affirmative(answer: &str) -> bool {
    YES_ANSWERS.contains(&answer.trim().to_lowercase().as_str())
}

impl Console for TerminalConsole {
    fn echo(&self, message: &str) {
        println!("{message}");
    }

    fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    fn confirm(&self, question: &str) -> SheetflowResult<bool> {
        if self.interactive {
            return Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(question)
                .default(false)
                .interact()
                .map_err(|e| SheetflowError::console(e.to_string()));
        }
        Ok(is_affirmative(&self.read_line(&format!("{question} [y/N]:"))?))
    }

    fn input(&self, prompt: &str) -> SheetflowResult<String> {
        if self.interactive {
            return Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| SheetflowError::console(e.to_string()));
        }
        self.read_line(&format!("{prompt}:"))
    }

    fn display_image(&self, path: &Path) {
        println!("{} Chart saved: {}", "✓".green().bold(), path.display());
    }
}
