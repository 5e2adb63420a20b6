//! Small command-line argument parsing with a queryable result.
//!
//! Options are declared up front as [`Opt`] values. [`Parser::parse`] walks the
//! raw argument vector once, classifying each token as an option, an option
//! value, or a positional argument, and returns [`Matches`] for lookups:
//!
//! ```
//! use clorca::{Config, Opt, Parser};
//!
//! let m = Parser::new([
//!     Opt::simple(["-l"]),
//!     Opt::simple(["-a"]),
//!     Opt::compound(["-f", "--file"]).name("file"),
//! ])
//! .config(Config::new().verbose(false))
//! .parse(["ls", "-laf=foo.txt", "dir"]);
//!
//! assert!(m.status().is_ok());
//! assert!(m.is_set("-l"));
//! assert_eq!(m.value("--file"), "foo.txt");
//! assert_eq!(m.argument(0), "dir");
//! ```
//!
//! Errors never abort the pass. The pass keeps only its last error
//! ([`Matches::status`]), and every query overwrites the last-error slot
//! ([`Matches::last_error`]).

pub mod config;
pub mod error;
mod help;
pub mod matches;
pub mod option;
pub mod parser;
pub mod table;
pub mod token;

pub use config::{ArgLimit, Config};
pub use error::ErrorKind;
pub use matches::Matches;
pub use option::{Opt, OptKind};
pub use parser::Parser;
pub use table::{OptionTable, TableError};
pub use token::SEPARATOR;
