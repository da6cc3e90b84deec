//! tutsh REPL — Interactive terminal for the tutsh teaching shell.
//!
//! This REPL provides an interactive interface to one tutsh kernel.
//! It handles:
//! - Meta-commands: `/help`, `/quit`, `/cwd`, `/tools`, `/session`
//! - Command execution via the Kernel
//! - The coloured `user@host:/path$ ` prompt
//! - Command history via rustyline

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use tutsh_kernel::{ExecResult, Kernel, KernelConfig, Screen};

/// Clears the real terminal with ANSI escapes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalScreen;

/// Erase the display and home the cursor.
const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[H";

impl Screen for TerminalScreen {
    fn clear(&self) {
        let mut stdout = std::io::stdout().lock();
        let written = stdout
            .write_all(CLEAR_SEQUENCE.as_bytes())
            .and_then(|()| stdout.flush());
        if let Err(e) = written {
            tracing::warn!("Failed to clear terminal: {}", e);
        }
    }
}

/// What the REPL loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    /// Keep reading, printing the text if any.
    Continue(Option<String>),
    /// Leave the REPL (caller saves history first).
    Exit,
}

/// REPL state: one kernel for the lifetime of the terminal.
pub struct Repl {
    kernel: Kernel,
}

impl Repl {
    /// Create a REPL over the seeded tree, clearing the real terminal.
    pub fn new() -> Result<Self> {
        let kernel = Kernel::with_screen(KernelConfig::repl(), Arc::new(TerminalScreen))
            .context("Failed to create kernel")?;
        Ok(Self { kernel })
    }

    /// Create a REPL with a custom kernel configuration and no display.
    pub fn with_config(config: KernelConfig) -> Result<Self> {
        let kernel = Kernel::new(config).context("Failed to create kernel")?;
        Ok(Self { kernel })
    }

    /// Wrap an already-built kernel.
    pub fn with_kernel(kernel: Kernel) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// The prompt to show before the next line.
    pub fn prompt(&self) -> String {
        self.kernel.prompt()
    }

    /// Process a single line of input.
    pub fn process_line(&mut self, line: &str) -> LineResult {
        let trimmed = line.trim();

        if trimmed.starts_with('/') {
            return self.handle_meta_command(trimmed);
        }
        if matches!(trimmed, "quit" | "exit") {
            return LineResult::Exit;
        }
        if trimmed.is_empty() {
            return LineResult::Continue(None);
        }

        let result = self.kernel.execute(trimmed);
        LineResult::Continue(format_result(&result))
    }

    /// Handle a meta-command (starts with /).
    fn handle_meta_command(&mut self, cmd: &str) -> LineResult {
        let command = cmd.split_whitespace().next().unwrap_or("");

        match command {
            "/quit" | "/q" | "/exit" => LineResult::Exit,
            "/help" | "/h" | "/?" => LineResult::Continue(Some(HELP_TEXT.trim_end().to_string())),
            "/cwd" => LineResult::Continue(Some(self.kernel.cwd().to_string())),
            "/tools" => {
                let names: Vec<_> = self
                    .kernel
                    .tool_schemas()
                    .iter()
                    .map(|s| s.name.as_str())
                    .collect();
                LineResult::Continue(Some(format!("Available tools: {}", names.join(", "))))
            }
            "/session" | "/state" => {
                let session = self.kernel.session();
                LineResult::Continue(Some(format!(
                    "Kernel: {}\nUser: {}@{}\nCwd: {}\nHistory: {}",
                    self.kernel.name(),
                    session.user,
                    session.host,
                    session.cwd,
                    session.history.len()
                )))
            }
            _ => LineResult::Continue(Some(format!(
                "Unknown command: {}\nType /help for available commands.",
                command
            ))),
        }
    }
}

/// Text to show for a result, `None` when there is nothing to print.
fn format_result(result: &ExecResult) -> Option<String> {
    let text = result.text();
    (!text.is_empty()).then(|| text.to_string())
}

const HELP_TEXT: &str = r#"tutsh — a teaching shell over an in-memory filesystem

Meta Commands:
  /help, /?         Show this help
  /quit, quit       Exit the REPL
  /cwd              Show current working directory
  /tools            List available commands
  /session          Show session info

Shell commands:
  help              List every command with its usage
  help <command>    Describe one command

Everything lives in memory; nothing you do here touches your real files.
"#;

/// Where rustyline keeps history between runs.
fn history_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.data_dir().join("tutsh").join("history.txt"))
}

/// Save REPL history to disk.
fn save_history(rl: &mut Editor<(), DefaultHistory>, history_path: &Option<PathBuf>) {
    if let Some(path) = history_path {
        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            tracing::warn!("Failed to create history directory: {}", e);
        }
        if let Err(e) = rl.save_history(path) {
            tracing::warn!("Failed to save history: {}", e);
        }
    }
}

/// Run the REPL.
pub fn run() -> Result<()> {
    println!("tutsh v{}", env!("CARGO_PKG_VERSION"));
    println!("Type help for commands, /quit to exit.");

    let mut rl: Editor<(), DefaultHistory> =
        Editor::new().context("Failed to create editor")?;

    let history_path = history_path();
    if let Some(ref path) = history_path
        && let Err(e) = rl.load_history(path)
    {
        // A missing file is expected on first run.
        let is_not_found = matches!(&e, ReadlineError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound);
        if !is_not_found {
            tracing::warn!("Failed to load history: {}", e);
        }
    }

    let mut repl = Repl::new()?;
    println!();

    loop {
        match rl.readline(&repl.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty()
                    && let Err(e) = rl.add_history_entry(line.as_str())
                {
                    tracing::warn!("Failed to add history entry: {}", e);
                }

                match repl.process_line(&line) {
                    LineResult::Continue(Some(output)) => println!("{}", output),
                    LineResult::Continue(None) => {}
                    LineResult::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    save_history(&mut rl, &history_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repl() -> Repl {
        Repl::with_config(KernelConfig::repl()).unwrap()
    }

    #[test]
    fn test_quit_variants() {
        let mut repl = repl();
        for line in ["/quit", "/q", "/exit", "quit", "  exit  "] {
            assert_eq!(repl.process_line(line), LineResult::Exit, "{line}");
        }
    }

    #[test]
    fn test_empty_line_prints_nothing() {
        assert_eq!(repl().process_line("   "), LineResult::Continue(None));
    }

    #[test]
    fn test_silent_success_prints_nothing() {
        assert_eq!(repl().process_line("mkdir x"), LineResult::Continue(None));
    }

    #[test]
    fn test_failures_print_error_text() {
        assert_eq!(
            repl().process_line("cat nope"),
            LineResult::Continue(Some("cat: nope: No such file or directory".into()))
        );
    }

    #[test]
    fn test_unknown_meta_command() {
        let LineResult::Continue(Some(out)) = repl().process_line("/frob") else {
            panic!("expected output");
        };
        assert!(out.starts_with("Unknown command: /frob"));
    }
}
