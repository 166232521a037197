//! Parse and validation errors for the `gol-types` crate.

/// Errors produced when parsing or validating a [`WorldSize`].
///
/// [`WorldSize`]: crate::WorldSize
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldSizeError {
    /// The input did not split into exactly two tokens around `x`.
    #[error("world size should contain width and height, separated by 'x' (e.g. '80x40'), got '{input}'")]
    WrongTokenCount {
        /// The raw input string.
        input: String,
    },

    /// One of the two tokens was empty.
    #[error("world size '{input}' has an empty width or height")]
    EmptyToken {
        /// The raw input string.
        input: String,
    },

    /// A token could not be parsed as an integer.
    #[error("invalid literal for world size: '{token}' is not an integer")]
    NotAnInteger {
        /// The offending token.
        token: String,
    },

    /// Width or height was zero or negative.
    #[error("both width and height need to have positive values above zero, got {value}")]
    NonPositive {
        /// The rejected dimension.
        value: i64,
    },

    /// Width or height does not fit the coordinate range.
    #[error("world dimension {value} exceeds the supported coordinate range")]
    TooLarge {
        /// The rejected dimension.
        value: i64,
    },
}

/// Errors produced when parsing a [`Coordinate`] from its text form.
///
/// [`Coordinate`]: crate::Coordinate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    /// The text is not a `(row, col)` tuple of two non-negative integers.
    #[error("malformed coordinate '{input}', expected '(row, col)'")]
    Malformed {
        /// The raw input string.
        input: String,
    },
}
