//! Option tables declared as JSON.
//!
//! ```json
//! {
//!   "options": [
//!     { "aliases": ["-h", "--help"], "kind": "simple", "description": "print help" },
//!     { "aliases": ["-p"], "kind": "compound", "name": "prefix", "defaults": ["> "] }
//!   ],
//!   "default-arguments": ["hello"],
//!   "config": { "verbose": false, "positional-limit": { "at-most": 2 } }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::option::Opt;
use crate::parser::Parser;

#[derive(Debug)]
pub enum TableError {
    Json(serde_json::Error),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "invalid option table: {e}"),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Declarations for a [`Parser`], in serializable form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OptionTable {
    #[serde(default)]
    pub options: Vec<Opt>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_arguments: Vec<String>,
    #[serde(default)]
    pub config: Config,
}

impl OptionTable {
    pub fn from_json(text: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn into_parser(self) -> Parser {
        Parser::new(self.options)
            .default_arguments(self.default_arguments)
            .config(self.config)
    }
}

impl From<OptionTable> for Parser {
    fn from(table: OptionTable) -> Self {
        table.into_parser()
    }
}

#[cfg(test)]
mod tests {
    use super::{OptionTable, TableError};
    use crate::config::ArgLimit;
    use crate::error::ErrorKind;
    use crate::option::OptKind;

    const TABLE: &str = r#"{
        "options": [
            { "aliases": ["-h", "--help"], "kind": "simple", "description": "print help" },
            { "aliases": ["-p", "--prefix"], "kind": "compound", "name": "prefix", "defaults": ["> "] }
        ],
        "default-arguments": ["hello"],
        "config": { "verbose": false, "positional-limit": { "at-most": 1 } }
    }"#;

    #[test]
    fn loads_options_and_config() {
        let table = OptionTable::from_json(TABLE).unwrap();
        assert_eq!(table.options.len(), 2);
        assert_eq!(table.options[1].kind(), OptKind::Compound);
        assert_eq!(table.config.positional_limit, ArgLimit::AtMost(1));

        let m = table.into_parser().parse(["prog", "--help"]);
        assert_eq!(m.status(), Ok(()));
        assert!(m.is_set("-h"));
        assert_eq!(m.value("-p"), "> ");
        assert_eq!(m.argument(0), "hello");
    }

    #[test]
    fn config_from_table_applies_limit() {
        let table = OptionTable::from_json(TABLE).unwrap();
        let m = table.into_parser().parse(["prog", "a", "b"]);
        assert_eq!(m.status(), Err(ErrorKind::TooMuchArguments));
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = OptionTable::from_json(r#"{"options": [{"aliases": ["-x"], "kind": "toggle"}]}"#)
            .unwrap_err();
        let TableError::Json(inner) = &err;
        assert!(inner.is_data());
        assert!(err.to_string().starts_with("invalid option table"));
    }

    #[test]
    fn rejects_option_without_aliases() {
        let err = OptionTable::from_json(
            r#"{"options": [{"aliases": [], "kind": "compound", "name": "x", "description": "d"}]}"#,
        )
        .unwrap_err();
        let TableError::Json(inner) = &err;
        assert!(inner.is_data());
        assert!(err.to_string().contains("at least one alias"), "{err}");
    }

    #[test]
    fn json_round_trip_keeps_declarations() {
        let table = OptionTable::from_json(TABLE).unwrap();
        let again = OptionTable::from_json(&table.to_json().unwrap()).unwrap();
        assert_eq!(again.options, table.options);
        assert_eq!(again.default_arguments, table.default_arguments);
        assert_eq!(again.config, table.config);
    }
}
