//! Built-in tools for tutsh.
//!
//! Every verb the shell understands lives here; there are no external
//! commands.

mod cat;
mod cd;
mod clear;
mod cp;
mod date;
mod echo;
mod help;
mod history;
mod ls;
mod mkdir;
mod mv;
mod pwd;
mod rm;
mod rmdir;
mod touch;
mod whoami;

use std::sync::Arc;

use super::ToolRegistry;

pub use clear::{NullScreen, Screen};

/// Register all built-in tools with the registry.
///
/// `clear` is bound to `screen`; the rest only touch the execution context.
pub fn register_builtins(registry: &mut ToolRegistry, screen: Arc<dyn Screen>) {
    registry.register(ls::Ls);
    registry.register(cd::Cd);
    registry.register(pwd::Pwd);
    registry.register(cat::Cat);
    registry.register(mkdir::Mkdir);
    registry.register(rmdir::Rmdir);
    registry.register(touch::Touch);
    registry.register(rm::Rm);
    registry.register(mv::Mv);
    registry.register(cp::Cp);
    registry.register(whoami::Whoami);
    registry.register(date::Date);
    registry.register(clear::Clear::new(screen));
    registry.register(help::Help);
    registry.register(echo::Echo);
    registry.register(history::History);
}
