//! Splitting of raw command-line tokens.

/// Separates an option name from an inline value (`--file=foo.txt`).
pub const SEPARATOR: char = '=';

/// How a raw token is handled by the parse pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass<'a> {
    /// `--name` or `--name=value`; processed as one option.
    Long(&'a str),
    /// `-x`, `-abc` or `-abf=value`; expanded into single-character options.
    ShortCluster(&'a str),
    /// Anything else, including `-` and the empty string.
    Plain(&'a str),
}

pub fn classify(token: &str) -> TokenClass<'_> {
    if token.starts_with("--") {
        TokenClass::Long(token)
    } else if token.starts_with('-') && token.len() > 1 {
        TokenClass::ShortCluster(token)
    } else {
        TokenClass::Plain(token)
    }
}

/// An option token split at its first separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionToken<'a> {
    pub name: &'a str,
    pub value: &'a str,
    /// Distinguishes `-f` from `-f=`.
    pub has_separator: bool,
}

/// Split `token` at the first [`SEPARATOR`]. Later separators belong to the
/// value.
pub fn split_inline(token: &str) -> OptionToken<'_> {
    match token.split_once(SEPARATOR) {
        Some((name, value)) => OptionToken {
            name,
            value,
            has_separator: true,
        },
        None => OptionToken {
            name: token,
            value: "",
            has_separator: false,
        },
    }
}

/// Expand a short cluster such as `-laf=foo.txt` into `-l`, `-a`,
/// `-f=foo.txt`.
///
/// Each character after the leading `-` becomes its own option, except that a
/// character directly followed by the separator takes the rest of the token
/// with it and ends the cluster.
pub fn expand_short_cluster(token: &str) -> Vec<String> {
    let body = token.strip_prefix('-').unwrap_or(token);
    let mut out = Vec::new();
    let mut chars = body.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if matches!(chars.peek(), Some((_, next)) if *next == SEPARATOR) {
            out.push(format!("-{}", &body[idx..]));
            break;
        }
        out.push(format!("-{c}"));
    }

    out
}
