//! Auto-generated help page.

use std::fmt::Write;

use crate::matches::Matches;
use crate::option::Opt;
use crate::token::SEPARATOR;

fn write_usage_item(out: &mut String, opt: &Opt) {
    let _ = write!(out, " [{}", opt.primary_alias());
    if opt.is_compound() && !opt.display_name().is_empty() {
        let _ = write!(out, "[{SEPARATOR}]{}", opt.display_name());
    }
    out.push(']');
}

impl Matches {
    /// Render the usage line and option list.
    ///
    /// `positional` names the positional arguments shown at the end of the
    /// usage line, e.g. `["message"]` renders `[message]`.
    ///
    /// ```text
    /// Usage:
    ///     orca-says [-h] [-p[=]prefix] [message]
    ///
    /// Options:
    ///     -h, --help
    ///         print this help page
    /// ```
    pub fn render_help<I, S>(&self, positional: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut usage = String::new();
        let mut options = String::new();

        // Writing into a `String` cannot fail.
        for opt in self.options() {
            write_usage_item(&mut usage, opt);
            let _ = writeln!(
                options,
                "\t{}\n\t\t{}",
                opt.joined_aliases_default(),
                opt.help()
            );
        }

        for arg in positional {
            let _ = write!(usage, " [{}]", arg.as_ref());
        }

        format!(
            "Usage:\n\t{}{usage}\n\nOptions:\n{options}",
            self.executable_name()
        )
    }
}
