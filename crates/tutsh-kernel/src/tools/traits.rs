//! Core tool traits and types.

use tutsh_types::ExecResult;

use super::context::ExecContext;

/// A usage example shown by `help <tool>`.
#[derive(Debug, Clone)]
pub struct Example {
    pub description: String,
    pub code: String,
}

/// Schema describing a tool's interface, for `help`.
#[derive(Debug, Clone)]
pub struct ToolSchema {
    /// Tool name.
    pub name: String,
    /// Synopsis, e.g. `cp <src> <dest>`.
    pub usage: String,
    /// Short description.
    pub description: String,
    /// Usage examples.
    pub examples: Vec<Example>,
}

impl ToolSchema {
    /// Create a new tool schema. The usage line defaults to the bare name.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            usage: name.clone(),
            name,
            description: description.into(),
            examples: Vec::new(),
        }
    }

    /// Set the synopsis line.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Add a usage example.
    pub fn example(mut self, description: impl Into<String>, code: impl Into<String>) -> Self {
        self.examples.push(Example {
            description: description.into(),
            code: code.into(),
        });
        self
    }
}

/// Arguments for one invocation: whitespace-split words, no quoting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    /// Words in order, flags included until a tool extracts them.
    pub positional: Vec<String>,
}

impl ToolArgs {
    /// Create empty args.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build args from already-split words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positional: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Get a positional argument by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }

    /// Remove every `-xyz` word and return its letters in order.
    ///
    /// A lone `-` is an operand and stays put. Flags may appear anywhere.
    pub fn take_flags(&mut self) -> Vec<char> {
        let mut flags = Vec::new();
        self.positional.retain(|word| match word.strip_prefix('-') {
            Some(letters) if !letters.is_empty() => {
                flags.extend(letters.chars());
                false
            }
            _ => true,
        });
        flags
    }
}

/// A tool that can be executed.
///
/// Execution is synchronous and runs to completion; a tool sees the state
/// left by the previous command and leaves it untouched when it fails.
pub trait Tool: Send + Sync {
    /// The tool's name (used for lookup).
    fn name(&self) -> &str;

    /// Get the tool's schema.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments and context.
    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult;
}
