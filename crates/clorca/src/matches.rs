//! Read access to the result of a parse pass.

use std::cell::Cell;
use std::io::{self, Write};

use crate::config::Config;
use crate::error::ErrorKind;
use crate::option::Opt;

/// Options and positional arguments after the parse pass.
///
/// Every query records its outcome as the last error, replacing whatever was
/// there before. The slot is a `Cell`, so a `Matches` can be moved to another
/// thread but not shared between threads.
#[derive(Debug, Clone)]
pub struct Matches {
    executable_name: String,
    options: Vec<Opt>,
    arguments: Vec<String>,
    default_arguments: Vec<String>,
    status: ErrorKind,
    last_error: Cell<ErrorKind>,
    config: Config,
}

impl Matches {
    pub(crate) fn new(
        executable_name: String,
        options: Vec<Opt>,
        arguments: Vec<String>,
        default_arguments: Vec<String>,
        status: ErrorKind,
        config: Config,
    ) -> Self {
        Self {
            executable_name,
            options,
            arguments,
            default_arguments,
            status,
            last_error: Cell::new(status),
            config,
        }
    }

    /// Outcome of the parse pass: the last error it raised, if any.
    ///
    /// Unlike [`Matches::last_error`], queries never change it.
    pub fn status(&self) -> Result<(), ErrorKind> {
        self.status.into_result()
    }

    /// The error recorded by the most recent operation (the parse pass or any
    /// later query).
    pub fn last_error(&self) -> ErrorKind {
        self.last_error.get()
    }

    /// Basename of the first argument.
    pub fn executable_name(&self) -> &str {
        &self.executable_name
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// All declared options, in declaration order.
    pub fn options(&self) -> &[Opt] {
        &self.options
    }

    /// Find an option by any of its aliases.
    ///
    /// Records `OptionDoesntExist` when nothing matches, `NoError` otherwise.
    /// With `verbose` (and a verbose config) a miss is also reported on
    /// stderr.
    pub fn find_option(&self, alias: &str, verbose: bool) -> Option<&Opt> {
        self.find_option_reporting_to(alias, verbose, &mut io::stderr())
    }

    pub(crate) fn find_option_reporting_to(
        &self,
        alias: &str,
        verbose: bool,
        out: &mut dyn Write,
    ) -> Option<&Opt> {
        self.last_error.set(ErrorKind::NoError);
        let found = self.options.iter().find(|o| o.has_alias(alias));
        if found.is_none() {
            self.last_error.set(ErrorKind::OptionDoesntExist);
            tracing::debug!(alias, "lookup of unknown option");
            if verbose {
                self.config
                    .report_to(out, &format!("Option \"{alias}\" isn't a possible option"));
            }
        }
        found
    }

    /// Like [`Matches::find_option`], returning the outcome directly.
    pub fn lookup(&self, alias: &str) -> Result<&Opt, ErrorKind> {
        self.lookup_reporting_to(alias, &mut io::stderr())
    }

    pub(crate) fn lookup_reporting_to(
        &self,
        alias: &str,
        out: &mut dyn Write,
    ) -> Result<&Opt, ErrorKind> {
        self.find_option_reporting_to(alias, true, out)
            .ok_or(ErrorKind::OptionDoesntExist)
    }

    /// Whether the option was given on the command line. `false` for unknown
    /// aliases.
    pub fn is_set(&self, alias: &str) -> bool {
        self.lookup(alias).is_ok_and(Opt::is_provided)
    }

    /// First value of a compound option, or its first default.
    pub fn value(&self, alias: &str) -> &str {
        self.value_at(alias, 0)
    }

    /// Value at `index`, falling back to the default at the same index.
    /// Empty for unknown aliases, simple options and missing indices.
    pub fn value_at(&self, alias: &str, index: usize) -> &str {
        self.lookup(alias)
            .map(|o| o.value_at(index))
            .unwrap_or("")
    }

    /// Every value supplied for the option, without defaults.
    pub fn values(&self, alias: &str) -> &[String] {
        self.lookup(alias).map(Opt::values).unwrap_or(&[])
    }

    /// Positional argument `n`, else default positional `n`, else `""`.
    pub fn argument(&self, n: usize) -> &str {
        self.arguments
            .get(n)
            .or_else(|| self.default_arguments.get(n))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Positional arguments taken from the command line (defaults excluded).
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn default_arguments(&self) -> &[String] {
        &self.default_arguments
    }
}
