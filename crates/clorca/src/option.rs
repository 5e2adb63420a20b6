//! Option descriptors.
//!
//! An [`Opt`] is declared once by the host and then filled in by the parse
//! pass: `provided` flips to true on the first occurrence and every value the
//! user attaches is appended to `values`.

use serde::{Deserialize, Deserializer, Serialize, de};

/// Whether an option can carry a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptKind {
    /// Flag-only, e.g. `-h`.
    Simple,
    /// Value-bearing, e.g. `-f file.txt` or `--file=file.txt`.
    Compound,
}

/// One recognized command-line option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Opt {
    #[serde(deserialize_with = "non_empty_aliases")]
    aliases: Vec<String>,
    kind: OptKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
    /// Fallback values. Kept for simple options too, but never read for them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    defaults: Vec<String>,
    #[serde(skip)]
    values: Vec<String>,
    #[serde(skip)]
    provided: bool,
}

fn non_empty_aliases<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let aliases = Vec::<String>::deserialize(deserializer)?;
    if aliases.is_empty() {
        return Err(de::Error::invalid_length(0, &"at least one alias"));
    }
    Ok(aliases)
}

impl Opt {
    /// `aliases` must not be empty: an option without aliases can never be
    /// matched and has nothing to show on the help page.
    pub fn new<I, S>(aliases: I, kind: OptKind) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let aliases: Vec<String> = aliases.into_iter().map(Into::into).collect();
        debug_assert!(!aliases.is_empty(), "option declared without aliases");
        Self {
            aliases,
            kind,
            name: String::new(),
            description: String::new(),
            defaults: Vec::new(),
            values: Vec::new(),
            provided: false,
        }
    }

    /// A flag-only option answering to `aliases`.
    pub fn simple<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(aliases, OptKind::Simple)
    }

    /// A value-bearing option answering to `aliases`.
    pub fn compound<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(aliases, OptKind::Compound)
    }

    /// Name shown in the usage line (`-f[=]file`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the defaults with a single value.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.defaults = vec![value.into()];
        self
    }

    /// Replace the defaults with a sequence of values, one per index.
    pub fn defaults<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.defaults = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }

    pub fn is_compound(&self) -> bool {
        self.kind == OptKind::Compound
    }

    /// Value at `index`: the supplied one if present, else the default at the
    /// same index, else `""`. Simple options always yield `""`.
    pub fn value_at(&self, index: usize) -> &str {
        if !self.is_compound() {
            return "";
        }
        self.values
            .get(index)
            .or_else(|| self.defaults.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn joined_aliases(&self, separator: &str) -> String {
        self.aliases.join(separator)
    }

    /// Aliases joined with `", "`, as listed on the help page.
    pub fn joined_aliases_default(&self) -> String {
        self.joined_aliases(", ")
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// First declared alias, used to name the option in diagnostics.
    pub fn primary_alias(&self) -> &str {
        self.aliases.first().map(String::as_str).unwrap_or("")
    }

    pub fn kind(&self) -> OptKind {
        self.kind
    }

    pub fn display_name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.description
    }

    pub fn default_values(&self) -> &[String] {
        &self.defaults
    }

    /// Values supplied on the command line, in order of appearance.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_provided(&self) -> bool {
        self.provided
    }

    pub(crate) fn mark_provided(&mut self) {
        self.provided = true;
    }

    pub(crate) fn push_value(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::{Opt, OptKind};

    #[test]
    fn aliases_are_matched_exactly() {
        let opt = Opt::simple(["-h", "--help"]);
        assert!(opt.has_alias("-h"));
        assert!(opt.has_alias("--help"));
        assert!(!opt.has_alias("-H"));
        assert!(!opt.has_alias("--hel"));
        assert!(!opt.has_alias(""));
    }

    #[test]
    fn supplied_value_beats_default() {
        let mut opt = Opt::compound(["-d"]).defaults(["1", "2", "3"]);
        opt.push_value("one");
        assert_eq!(opt.value_at(0), "one");
        assert_eq!(opt.value_at(1), "2");
        assert_eq!(opt.value_at(2), "3");
        assert_eq!(opt.value_at(3), "");
    }

    #[test]
    fn simple_options_never_yield_values() {
        let opt = Opt::simple(["-v"]).default_value("ignored");
        assert_eq!(opt.kind(), OptKind::Simple);
        assert_eq!(opt.value_at(0), "");
        assert_eq!(opt.default_values(), ["ignored"]);
    }

    #[test]
    fn single_default_replaces_sequence() {
        let opt = Opt::compound(["-p"])
            .defaults(["a", "b"])
            .default_value("Orca says: ");
        assert_eq!(opt.default_values(), ["Orca says: "]);
        assert_eq!(opt.value_at(0), "Orca says: ");
        assert_eq!(opt.value_at(1), "");
    }

    #[test]
    fn joined_aliases_uses_separator() {
        let opt = Opt::compound(["-f", "--file"]);
        assert_eq!(opt.joined_aliases_default(), "-f, --file");
        assert_eq!(opt.joined_aliases("|"), "-f|--file");
        assert_eq!(opt.primary_alias(), "-f");
    }

    #[test]
    #[should_panic(expected = "option declared without aliases")]
    #[cfg(debug_assertions)]
    fn builder_rejects_empty_aliases() {
        let _ = Opt::compound(Vec::<String>::new());
    }

    #[test]
    fn deserializing_empty_aliases_fails() {
        let err = serde_json::from_str::<Opt>(r#"{"aliases": [], "kind": "simple"}"#).unwrap_err();
        assert!(err.is_data());
        assert!(err.to_string().contains("at least one alias"), "{err}");
    }

    #[test]
    fn runtime_state_is_not_serialized() {
        let mut opt = Opt::compound(["-f", "--file"])
            .name("file")
            .description("name of the file");
        opt.mark_provided();
        opt.push_value("a.txt");

        let json = serde_json::to_value(&opt).unwrap();
        assert_eq!(json["aliases"], serde_json::json!(["-f", "--file"]));
        assert_eq!(json["kind"], "compound");
        assert!(json.get("values").is_none());
        assert!(json.get("provided").is_none());
        assert!(json.get("defaults").is_none());

        let back: Opt = serde_json::from_value(json).unwrap();
        assert!(!back.is_provided());
        assert!(back.values().is_empty());
        assert_eq!(back.display_name(), "file");
    }
}
