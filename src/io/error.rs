//! # Error reporting for reading of problem files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::io;

use thiserror::Error;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error(transparent)]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed into a list of connections.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A `ParseError` describes a line that could not be read as a connection.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("ParseError: {description}\n\tCaused at line\t{line_number}:\t{line}")]
pub struct ParseError {
    description: String,
    /// Line number in the file as read from disk, starting at 1.
    line_number: usize,
    line: String,
}

impl ParseError {
    /// Create a new `ParseError`.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong with the line.
    /// * `line_number`: Where the line is in the file, starting at 1.
    /// * `line`: Contents of the line.
    pub fn new(description: impl Into<String>, line_number: usize, line: &str) -> Self {
        Self {
            description: description.into(),
            line_number,
            line: line.to_string(),
        }
    }

    /// What's wrong with the line.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Where the line is in the file, starting at 1.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
