//! Emoji alias expansion
//!
//! Expands short textual aliases (`:fire:`) into their Unicode symbols.
//! Expansion runs on the write path, before a message is persisted, so the
//! stored record already contains the symbol and reads never transform.
//!
//! The alias table is a swappable collaborator: callers can supply their own
//! table or use [`EmojiMap::default`].

/// Default alias table, alphabetical by alias
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    (":fire:", "\u{1F525}"),
    (":heart:", "\u{2764}\u{FE0F}"),
    (":joy:", "\u{1F602}"),
    (":smile:", "\u{1F604}"),
    (":tada:", "\u{1F389}"),
    (":thumbsup:", "\u{1F44D}"),
    (":wave:", "\u{1F44B}"),
];

/// Alias-to-symbol lookup table
#[derive(Debug, Clone)]
pub struct EmojiMap {
    aliases: Vec<(String, String)>,
}

impl Default for EmojiMap {
    fn default() -> Self {
        Self::new(
            DEFAULT_ALIASES
                .iter()
                .map(|(alias, symbol)| (alias.to_string(), symbol.to_string())),
        )
    }
}

impl EmojiMap {
    /// Create a map from `(alias, symbol)` pairs
    ///
    /// Aliases are matched verbatim, so they should include their `:`
    /// delimiters (e.g. `":fire:"`). When one alias is a prefix of another,
    /// the earlier pair wins.
    pub fn new(aliases: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            aliases: aliases.into_iter().collect(),
        }
    }

    /// Create a map that expands nothing
    pub fn empty() -> Self {
        Self {
            aliases: Vec::new(),
        }
    }

    /// Expand every recognized alias in `text` exactly once
    ///
    /// Runs a single left-to-right pass: replaced symbols are never
    /// re-examined, so expanding already-expanded text is a no-op and
    /// stored messages stay stable across reads. Unrecognized `:tokens:`
    /// pass through untouched.
    pub fn expand(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = rest.find(':') {
            out.push_str(&rest[..start]);
            let candidate = &rest[start..];
            match self.match_alias(candidate) {
                Some((len, symbol)) => {
                    out.push_str(symbol);
                    rest = &candidate[len..];
                }
                None => {
                    out.push(':');
                    rest = &candidate[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Match the first-registered alias at the start of `s`
    fn match_alias(&self, s: &str) -> Option<(usize, &str)> {
        self.aliases
            .iter()
            .find(|(alias, _)| s.starts_with(alias.as_str()))
            .map(|(alias, symbol)| (alias.len(), symbol.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_known_alias() {
        let map = EmojiMap::default();
        assert_eq!(map.expand("gg :fire:"), "gg \u{1F525}");
    }

    #[test]
    fn test_expands_multiple_aliases() {
        let map = EmojiMap::default();
        assert_eq!(
            map.expand(":wave: hello :tada:"),
            "\u{1F44B} hello \u{1F389}"
        );
    }

    #[test]
    fn test_unknown_alias_passes_through() {
        let map = EmojiMap::default();
        assert_eq!(map.expand("so :unknown: much"), "so :unknown: much");
    }

    #[test]
    fn test_unterminated_alias_passes_through() {
        let map = EmojiMap::default();
        assert_eq!(map.expand("gg :fire"), "gg :fire");
    }

    #[test]
    fn test_expansion_is_idempotent() {
        let map = EmojiMap::default();
        let once = map.expand("gg :fire:");
        assert_eq!(map.expand(&once), once);
    }

    #[test]
    fn test_adjacent_colons() {
        let map = EmojiMap::default();
        // The leading colon is literal; the alias after it still expands
        assert_eq!(map.expand("::fire:"), ":\u{1F525}");
    }

    #[test]
    fn test_back_to_back_aliases() {
        let map = EmojiMap::default();
        assert_eq!(map.expand(":fire::fire:"), "\u{1F525}\u{1F525}");
    }

    #[test]
    fn test_custom_table() {
        let map = EmojiMap::new([(":ship:".to_string(), "\u{1F6A2}".to_string())]);
        assert_eq!(map.expand("we :ship: today"), "we \u{1F6A2} today");
        // Default aliases are not known to a custom table
        assert_eq!(map.expand(":fire:"), ":fire:");
    }

    #[test]
    fn test_empty_table_expands_nothing() {
        let map = EmojiMap::empty();
        assert_eq!(map.expand(":fire: :wave:"), ":fire: :wave:");
    }

    #[test]
    fn test_empty_text() {
        let map = EmojiMap::default();
        assert_eq!(map.expand(""), "");
    }
}
