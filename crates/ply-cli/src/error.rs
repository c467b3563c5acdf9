//! Text-protocol errors.

use ply_core::LayoutError;

/// Errors that can occur while reading and parsing session input.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The `position` command has neither `startpos` nor any layout entries.
    #[error("malformed position command: expected startpos or layout entries")]
    MalformedPosition,

    /// A layout entry in the `position` command is invalid.
    #[error("invalid layout: {source}")]
    InvalidLayout {
        /// The underlying layout error.
        #[from]
        source: LayoutError,
    },

    /// A command that needs a square was given none.
    #[error("missing square for {command}")]
    MissingSquare {
        /// The command name.
        command: &'static str,
    },

    /// A square argument could not be parsed.
    #[error("invalid square: {value}")]
    InvalidSquare {
        /// The rejected text.
        value: String,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `set <name>` had no value, or the value was not understood.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value (empty if missing).
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
