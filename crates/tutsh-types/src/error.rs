//! The error taxonomy shared by the filesystem tree and every builtin.

use thiserror::Error;

/// Result type for tree and builtin operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// Shell operation errors.
///
/// `Display` yields the strerror-style phrase only; each builtin wraps it in
/// its own bash-flavoured message (`rm: cannot remove 'x': Is a directory`).
/// The name carried by a variant is whatever the raiser knew: the tree reports
/// absolute paths, and builtins relabel them with [`ShellError::with_operand`]
/// so messages show the operand as typed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("missing operand")]
    MissingOperand,
    #[error("missing file operand")]
    InvalidArgumentCount,
    #[error("invalid option -- '{0}'")]
    InvalidOption(char),
    #[error("No such file or directory")]
    NotFound(String),
    #[error("Not a directory")]
    NotADirectory(String),
    #[error("Is a directory")]
    IsADirectory(String),
    #[error("File exists")]
    AlreadyExists(String),
    #[error("Directory not empty")]
    DirectoryNotEmpty(String),
    #[error("Invalid argument")]
    InvalidName(String),
    #[error("cannot move a directory into itself")]
    WouldCycle(String),
    #[error("command not found")]
    UnknownCommand(String),
}

impl ShellError {
    /// The operand this error is about, if any.
    pub fn operand(&self) -> Option<&str> {
        match self {
            ShellError::NotFound(name)
            | ShellError::NotADirectory(name)
            | ShellError::IsADirectory(name)
            | ShellError::AlreadyExists(name)
            | ShellError::DirectoryNotEmpty(name)
            | ShellError::InvalidName(name)
            | ShellError::WouldCycle(name)
            | ShellError::UnknownCommand(name) => Some(name),
            ShellError::MissingOperand
            | ShellError::InvalidArgumentCount
            | ShellError::InvalidOption(_) => None,
        }
    }

    /// Replace the carried operand, keeping the kind.
    ///
    /// The tree reports absolute paths; builtins re-label errors with the
    /// operand as typed before rendering them.
    pub fn with_operand(self, operand: impl Into<String>) -> Self {
        let operand = operand.into();
        match self {
            ShellError::NotFound(_) => ShellError::NotFound(operand),
            ShellError::NotADirectory(_) => ShellError::NotADirectory(operand),
            ShellError::IsADirectory(_) => ShellError::IsADirectory(operand),
            ShellError::AlreadyExists(_) => ShellError::AlreadyExists(operand),
            ShellError::DirectoryNotEmpty(_) => ShellError::DirectoryNotEmpty(operand),
            ShellError::InvalidName(_) => ShellError::InvalidName(operand),
            ShellError::WouldCycle(_) => ShellError::WouldCycle(operand),
            ShellError::UnknownCommand(_) => ShellError::UnknownCommand(operand),
            other => other,
        }
    }
}
