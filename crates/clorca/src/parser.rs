//! The parse pass.
//!
//! [`Parser`] collects the declarations; [`Parser::parse`] walks the argument
//! vector exactly once and hands the filled-in state over to [`Matches`].

use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::ErrorKind;
use crate::matches::Matches;
use crate::option::Opt;
use crate::token::{self, SEPARATOR, TokenClass};

/// Declarations for one parse pass.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: Vec<Opt>,
    default_arguments: Vec<String>,
    config: Config,
}

impl Parser {
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = Opt>,
    {
        Self {
            options: options.into_iter().collect(),
            default_arguments: Vec::new(),
            config: Config::default(),
        }
    }

    /// Positional arguments used when the command line has none at the same
    /// index.
    pub fn default_arguments<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_arguments = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn options(&self) -> &[Opt] {
        &self.options
    }

    /// Parse `argv`. The first element is the executable path.
    ///
    /// Never fails outright: problems are recorded and reported through
    /// [`Matches::status`] and [`Matches::last_error`].
    pub fn parse<I, S>(self, argv: I) -> Matches
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parse_reporting_to(argv, &mut io::stderr())
    }

    /// Like [`Parser::parse`], writing diagnostics to `out` instead of stderr.
    pub(crate) fn parse_reporting_to<I, S>(self, argv: I, out: &mut dyn Write) -> Matches
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut argv = argv.into_iter();
        let executable_name = argv
            .next()
            .map(|arg0| executable_basename(arg0.as_ref()))
            .unwrap_or_default();

        let mut engine = Engine {
            options: self.options,
            arguments: Vec::new(),
            pending: None,
            error: ErrorKind::NoError,
            config: &self.config,
            out,
        };
        for arg in argv {
            engine.load_token(arg.as_ref());
        }
        engine.finish();

        let Engine {
            options,
            arguments,
            error,
            ..
        } = engine;

        Matches::new(
            executable_name,
            options,
            arguments,
            self.default_arguments,
            error,
            self.config,
        )
    }
}

fn executable_basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

struct Engine<'c, 'w> {
    options: Vec<Opt>,
    arguments: Vec<String>,
    /// Index of the compound option waiting for the next token as its value.
    pending: Option<usize>,
    error: ErrorKind,
    config: &'c Config,
    out: &'w mut dyn Write,
}

impl Engine<'_, '_> {
    fn fail(&mut self, kind: ErrorKind, message: String) {
        tracing::debug!(kind = ?kind, %message, "argument error");
        self.error = kind;
        self.config.report_to(&mut *self.out, &message);
    }

    // First declared match wins when aliases collide.
    fn position(&self, alias: &str) -> Option<usize> {
        self.options.iter().position(|o| o.has_alias(alias))
    }

    fn load_token(&mut self, arg: &str) {
        let class = token::classify(arg);
        tracing::trace!(token = arg, class = ?class, "classified token");

        match class {
            TokenClass::Long(raw) => self.load_option(raw),
            TokenClass::ShortCluster(raw) => {
                for sub in token::expand_short_cluster(raw) {
                    self.load_option(&sub);
                }
            }
            TokenClass::Plain(value) => match self.pending.take() {
                Some(idx) => self.options[idx].push_value(value),
                None => self.arguments.push(value.to_string()),
            },
        }
    }

    fn load_option(&mut self, raw: &str) {
        let tok = token::split_inline(raw);
        let Some(idx) = self.position(tok.name) else {
            self.fail(
                ErrorKind::NotPossibleOption,
                format!("Option \"{}\" isn't a possible option", tok.name),
            );
            return;
        };

        self.options[idx].mark_provided();

        if let Some(prev) = self.pending.take() {
            let prev_alias = self.options[prev].primary_alias().to_string();
            self.fail(
                ErrorKind::MissingValue,
                format!(
                    "Got another option while previous option \"{prev_alias}\" is waiting for a value"
                ),
            );
        }

        if self.options[idx].is_compound() {
            if !tok.has_separator {
                self.pending = Some(idx);
            } else if tok.value.is_empty() {
                self.fail(
                    ErrorKind::MissingValue,
                    format!(
                        "Expecting a value for the option \"{}\" after \"{SEPARATOR}\"",
                        tok.name
                    ),
                );
            } else {
                self.options[idx].push_value(tok.value);
            }
        } else if tok.has_separator {
            self.fail(
                ErrorKind::OptionCantHoldValue,
                format!(
                    "Option \"{}\" is not compound and can't hold a value",
                    tok.name
                ),
            );
        }
    }

    fn finish(&mut self) {
        if let Some(idx) = self.pending.take() {
            let alias = self.options[idx].primary_alias().to_string();
            self.fail(
                ErrorKind::MissingValue,
                format!("Missing value for option \"{alias}\""),
            );
        }

        let count = self.arguments.len();
        let limit = self.config.positional_limit;
        if limit.is_exceeded_by(count) {
            self.fail(
                ErrorKind::TooMuchArguments,
                format!(
                    "Unexpected amount of arguments: {count}. Maximum expected amount is: {limit}"
                ),
            );
        }
    }
}
