//! Text normalization shared by the builder and the query path.

/// Trims and lower-cases a display name for indexing, matching how queries
/// are normalized so a record's own name always finds it.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Lower-cases a symbol for indexing. Symbols are not trimmed, so a padded
/// symbol only matches queries that reach past its padding.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.to_lowercase()
}

/// Whitespace-delimited words of an already normalized field.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// Every non-empty prefix of `token`, shortest first.
///
/// Prefixes end on char boundaries, so `"€ur"` yields `"€"`, `"€u"`, `"€ur"`.
pub fn prefixes(token: &str) -> impl Iterator<Item = &str> {
    token
        .char_indices()
        .skip(1)
        .map(move |(end, _)| &token[..end])
        .chain((!token.is_empty()).then_some(token))
}
