//! clear — Clear the terminal display.

use std::sync::Arc;

use tutsh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// The display the kernel's output is rendered on.
pub trait Screen: Send + Sync {
    /// Wipe everything currently shown.
    fn clear(&self);
}

/// A screen with nothing to clear, for headless kernels and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullScreen;

impl Screen for NullScreen {
    fn clear(&self) {}
}

/// Clear tool: bound to the screen handle it was registered with.
pub struct Clear {
    screen: Arc<dyn Screen>,
}

impl Clear {
    pub fn new(screen: Arc<dyn Screen>) -> Self {
        Self { screen }
    }
}

impl Tool for Clear {
    fn name(&self) -> &str {
        "clear"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("clear", "Clear the terminal screen.")
    }

    fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext) -> ExecResult {
        self.screen.clear();
        ExecResult::success("")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::tools::test_support::{ctx_with, run, NOW};
    use crate::vfs::Node;

    #[derive(Default)]
    struct CountingScreen(AtomicUsize);

    impl Screen for CountingScreen {
        fn clear(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_clear_calls_screen() {
        let screen = Arc::new(CountingScreen::default());
        let tool = Clear::new(screen.clone());
        let mut ctx = ctx_with(Node::directory(NOW));
        let before = ctx.fs.clone();

        let result = run(&tool, &mut ctx, "");
        assert!(result.ok());
        assert_eq!(result.out, "");
        assert_eq!(screen.0.load(Ordering::SeqCst), 1);
        assert_eq!(ctx.fs, before);
    }
}
