//! Error kinds recorded by the parse pass and by queries.

use std::fmt;

/// The outcome of the most recent operation.
///
/// Only one kind is ever visible at a time: each error raised during the
/// parse pass overwrites the previous one, and every query overwrites
/// whatever the pass (or an earlier query) left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorKind {
    #[default]
    NoError,
    /// A compound option was left without a value (interrupted by another
    /// option, an empty inline value, or the end of input).
    MissingValue,
    /// A simple option was given a value through the separator.
    OptionCantHoldValue,
    /// A command-line token named an alias no option declares.
    NotPossibleOption,
    /// A query named an alias no option declares.
    OptionDoesntExist,
    /// More positional arguments than the configured limit.
    TooMuchArguments,
}

impl ErrorKind {
    /// Stable numeric code (`NoError` is 0).
    pub fn code(self) -> i32 {
        match self {
            Self::NoError => 0,
            Self::MissingValue => 1,
            Self::OptionCantHoldValue => 2,
            Self::NotPossibleOption => 3,
            Self::OptionDoesntExist => 4,
            Self::TooMuchArguments => 5,
        }
    }

    pub fn is_error(self) -> bool {
        self != Self::NoError
    }

    /// `Ok(())` for `NoError`, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), ErrorKind> {
        if self.is_error() { Err(self) } else { Ok(()) }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NoError => "no error",
            Self::MissingValue => "missing value for option",
            Self::OptionCantHoldValue => "option can't hold a value",
            Self::NotPossibleOption => "not a possible option",
            Self::OptionDoesntExist => "option doesn't exist",
            Self::TooMuchArguments => "too many arguments",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ErrorKind {}
