//! The Kernel — one tutsh session.
//!
//! The Kernel owns everything a terminal session needs:
//! - Filesystem tree (seeded or empty)
//! - Session state (location, identity, history)
//! - Tool registry (the builtins, `clear` bound to a screen)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  Kernel                      │
//! │  ┌──────────────┐  ┌──────────────────────┐  │
//! │  │ ToolRegistry │  │     ExecContext      │  │
//! │  │  (builtins)  │  │  Tree + Session +    │  │
//! │  │              │  │  Clock + newline     │  │
//! │  └──────────────┘  └──────────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Kernels share nothing. Two kernels built from the same config evolve
//! independently.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tutsh_types::{ExecResult, ShellError, EXIT_NOT_FOUND};

use crate::clock::{Clock, SystemClock};
use crate::paths::VPath;
use crate::state::{Session, DEFAULT_HOST, DEFAULT_USER};
use crate::tools::{
    register_builtins, ExecContext, NullScreen, Screen, ToolArgs, ToolRegistry, ToolSchema, CRLF,
};
use crate::vfs::{tutorial_tree, Tree};

/// Configuration for kernel initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelConfig {
    /// Name of this kernel (for identification in logs).
    pub name: String,

    /// Identity shown by `whoami` and the prompt.
    pub user: String,
    pub host: String,

    /// Target of `~` and bare `cd`. Not required to exist.
    pub home: String,

    /// Initial location. Must name a directory in the initial tree.
    pub cwd: String,

    /// Populate the tree with the tutorial home directory.
    pub seed: bool,

    /// Line ending used to join multi-line output.
    pub newline: String,
}

impl Default for KernelConfig {
    fn default() -> Self {
        let home = VPath::default_home().to_string();
        Self {
            name: "default".to_string(),
            user: DEFAULT_USER.to_string(),
            host: DEFAULT_HOST.to_string(),
            cwd: home.clone(),
            home,
            seed: true,
            newline: CRLF.to_string(),
        }
    }
}

impl KernelConfig {
    /// Create a kernel config with the given name.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Create a config with an empty tree, starting at the root.
    ///
    /// Useful for tests that build their own layout.
    pub fn isolated() -> Self {
        Self {
            name: "isolated".to_string(),
            home: "/".to_string(),
            cwd: "/".to_string(),
            seed: false,
            ..Self::default()
        }
    }

    /// Create a REPL config: seeded tree, POSIX line endings.
    pub fn repl() -> Self {
        Self {
            name: "repl".to_string(),
            newline: "\n".to_string(),
            ..Self::default()
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the home directory (absolute path).
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = home.into();
        self
    }

    /// Set the initial working directory (absolute path).
    pub fn with_cwd(mut self, cwd: impl Into<String>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// Seed the tutorial tree, or start empty.
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }
}

/// The Kernel — executes tutsh command lines.
///
/// This is the primary interface for running commands. It owns all the
/// session state; callers hand it one line at a time.
pub struct Kernel {
    /// Kernel name.
    name: String,
    /// Tool registry.
    tools: ToolRegistry,
    /// Execution context (tree, session, clock).
    ctx: ExecContext,
}

impl Kernel {
    /// Create a new kernel with the given configuration and no display.
    pub fn new(config: KernelConfig) -> Result<Self> {
        Self::with_screen(config, Arc::new(NullScreen))
    }

    /// Create a kernel whose `clear` wipes `screen`.
    pub fn with_screen(config: KernelConfig, screen: Arc<dyn Screen>) -> Result<Self> {
        Self::assemble(config, screen, Arc::new(SystemClock))
    }

    /// Create a kernel from all of its parts.
    ///
    /// The clock stamps the initial tree as well as every later mutation.
    pub fn assemble(
        config: KernelConfig,
        screen: Arc<dyn Screen>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        if !config.cwd.starts_with('/') {
            bail!("initial directory must be absolute: {}", config.cwd);
        }
        if !config.home.starts_with('/') {
            bail!("home directory must be absolute: {}", config.home);
        }

        let now = clock.stamp();
        let fs = if config.seed {
            tutorial_tree(&now)
        } else {
            Tree::new(now)
        };

        let cwd = VPath::parse(&config.cwd);
        fs.dir(&cwd)
            .with_context(|| format!("initial directory {}", config.cwd))?;

        let session = Session {
            cwd,
            prev_cwd: None,
            home: VPath::parse(&config.home),
            user: config.user,
            host: config.host,
            history: Vec::new(),
        };

        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools, screen);

        let mut ctx = ExecContext::with_session(fs, session)
            .with_clock(clock)
            .with_newline(config.newline);
        ctx.set_tool_schemas(tools.schemas());

        tracing::debug!(name = %config.name, seeded = config.seed, "kernel ready");
        Ok(Self {
            name: config.name,
            tools,
            ctx,
        })
    }

    /// Get the kernel name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Execute one command line.
    ///
    /// The line is split on whitespace into a verb and arguments; no quoting
    /// is interpreted. Blank lines do nothing and are not recorded.
    #[tracing::instrument(level = "debug", skip(self), fields(kernel = %self.name))]
    pub fn execute(&mut self, line: &str) -> ExecResult {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return ExecResult::default();
        };

        self.ctx.session.record(line);
        self.ctx.settle_cwd();
        self.dispatch(verb, ToolArgs::from_words(words))
    }

    /// Run the tool registered as `verb`.
    ///
    /// Unknown verbs produce a `command not found` line with exit code 127
    /// and leave all state unchanged.
    pub fn dispatch(&mut self, verb: &str, args: ToolArgs) -> ExecResult {
        let Some(tool) = self.tools.get(verb) else {
            tracing::debug!(verb, "unknown command");
            let err = ShellError::UnknownCommand(verb.to_string());
            return ExecResult::failure(EXIT_NOT_FOUND, format!("bash: {verb}: {err}"));
        };

        tracing::debug!(verb, args = args.len(), "dispatch");
        let result = tool.execute(args, &mut self.ctx);
        if !result.ok() {
            tracing::debug!(verb, code = result.code, "command failed");
        }
        result
    }

    /// The colourised prompt for the current location.
    pub fn prompt(&self) -> String {
        self.ctx.session.prompt()
    }

    /// Current location.
    pub fn cwd(&self) -> &VPath {
        self.ctx.cwd()
    }

    pub fn session(&self) -> &Session {
        &self.ctx.session
    }

    pub fn fs(&self) -> &Tree {
        &self.ctx.fs
    }

    /// Direct tree access for embedders provisioning content.
    ///
    /// If the current directory disappears through this handle, the next
    /// command relocates the session to the nearest surviving ancestor.
    pub fn fs_mut(&mut self) -> &mut Tree {
        &mut self.ctx.fs
    }

    /// Schemas of every registered command.
    pub fn tool_schemas(&self) -> &[ToolSchema] {
        &self.ctx.tool_schemas
    }
}
