//! Result formatting.

use coinfind_core::types::{ListType, Record};
use coinfind_core::Catalog;
use coinfind_search::{IndexStats, ResultKind, SearchOutcome};

pub struct DisplayOptions {
    pub limit: Option<usize>,
    pub show_codes: bool,
}

/// Renders an outcome as aligned rows, or a no-results line.
pub fn render_outcome(outcome: &SearchOutcome, catalog: &Catalog, options: &DisplayOptions) -> String {
    if outcome.kind == ResultKind::NoMatches {
        return "No results\n".to_string();
    }

    let shown = options.limit.unwrap_or(usize::MAX).min(outcome.records.len());
    let mut out = String::new();
    for record in &outcome.records[..shown] {
        out.push_str(&render_row(record, catalog, options.show_codes));
        out.push('\n');
    }
    if shown < outcome.records.len() {
        out.push_str(&format!("... {} more\n", outcome.records.len() - shown));
    }
    out
}

/// One record as `id  name  symbol  [code]`. Fiat symbols are omitted like
/// the list screens do, since they are ambiguous (`$`).
pub fn render_row(record: &Record, catalog: &Catalog, show_codes: bool) -> String {
    let mut row = format!("{:<6} {}", record.id().as_str(), record.display_name());
    if catalog.list_type_of(record.id()) != Some(ListType::Fiat) {
        row.push_str(&format!("  {}", record.symbol()));
    }
    if show_codes {
        if let Some(code) = record.code() {
            row.push_str(&format!("  [{code}]"));
        }
    }
    row
}

pub fn render_stats(stats: &IndexStats) -> String {
    format!(
        "records: {}\ndistinct ids: {}\nkeys: {}\npostings: {}\n",
        stats.records, stats.distinct_ids, stats.keys, stats.postings
    )
}
