//! Line-oriented interactive search.

use crate::display::{DisplayOptions, render_outcome};
use coinfind_core::types::ListFilter;
use coinfind_search::SearchSession;
use std::io::{BufRead, Write};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Filter(ListFilter),
    Clear,
    Quit,
    Query(String),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseCommandError(pub String);

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseCommandError> {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        let Some(directive) = trimmed.strip_prefix(':') else {
            return Ok(Command::Query(trimmed.to_string()));
        };

        let mut parts = directive.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("filter"), Some(name), None) => name
                .parse()
                .map(Command::Filter)
                .map_err(|e| ParseCommandError(format!("{e}"))),
            (Some("clear"), None, None) => Ok(Command::Clear),
            (Some("quit"), None, None) => Ok(Command::Quit),
            _ => Err(ParseCommandError(format!("unknown command :{directive}"))),
        }
    }
}

/// Drives a session from `input` until EOF or `:quit`.
pub fn run<R: BufRead, W: Write>(
    session: &mut SearchSession,
    input: R,
    mut output: W,
    options: &DisplayOptions,
) -> std::io::Result<()> {
    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Filter(filter)) => session.set_filter(filter),
            Ok(Command::Clear) => session.clear_query(),
            Ok(Command::Query(query)) => session.set_query(query),
            Err(ParseCommandError(message)) => {
                writeln!(output, "error: {message}")?;
                continue;
            }
        }

        let outcome = session.results();
        write!(output, "{}", render_outcome(&outcome, session.catalog(), options))?;
        writeln!(
            output,
            "-- {} [{}] {:?}",
            session.filter(),
            session.query(),
            outcome.kind
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinfind_core::Catalog;
    use coinfind_core::types::{Record, RecordId};

    fn record(id: &str, name: &str, symbol: &str) -> Record {
        Record::new(RecordId::try_new(id.to_string()).unwrap(), name, symbol)
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse(":filter fiat"), Ok(Command::Filter(ListFilter::Fiat)));
        assert_eq!(Command::parse(":clear"), Ok(Command::Clear));
        assert_eq!(Command::parse(":quit\r\n"), Ok(Command::Quit));
        assert_eq!(Command::parse("  Eth "), Ok(Command::Query("  Eth ".to_string())));
        Command::parse(":filter stocks").unwrap_err();
        Command::parse(":launch").unwrap_err();
    }

    #[test]
    fn parse_rejects_extra_arguments() {
        assert_eq!(
            Command::parse(":filter fiat extra"),
            Err(ParseCommandError("unknown command :filter fiat extra".to_string()))
        );
        Command::parse(":filter").unwrap_err();
        Command::parse(":clear now").unwrap_err();
    }

    #[test]
    fn run_switches_filter_between_queries() {
        let catalog = Catalog::new(
            vec![record("ETH", "Ethereum", "ETH")],
            vec![record("EUR", "Euro", "€").with_code("EUR")],
        );
        let mut session = SearchSession::new(catalog, ListFilter::Crypto);
        let options = DisplayOptions {
            limit: None,
            show_codes: false,
        };
        let input = "e\n:filter fiat\n:bogus\n:quit\nnever\n".as_bytes();
        let mut output = Vec::new();

        run(&mut session, input, &mut output, &options).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "ETH    Ethereum  ETH\n-- crypto [e] Matches\n\
             EUR    Euro\n-- fiat [e] Matches\n\
             error: unknown command :bogus\n"
        );
        assert_eq!(session.generation(), 1);
    }
}
