use anyhow::{Context, Result};
use clap::Parser;
use coinfind_core::Catalog;
use coinfind_core::types::{AppConfig, ListFilter};
use coinfind_search::{SearchSession, build};
use std::io;
use std::path::Path;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod display;
mod repl;

use args::{Cli, Commands, Source};
use display::{DisplayOptions, render_outcome, render_stats};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| AppConfig::path(Path::new(".")));
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;

    let problems = config.validate();
    let config = config.with_defaults_for_invalid();

    let env_problem = init_tracing(&config.logging.filter);
    for problem in &problems {
        tracing::warn!(%problem, "invalid config value, using default");
    }
    if let Some(problem) = env_problem {
        tracing::warn!(%problem, "ignoring RUST_LOG, using logging.filter");
    }
    tracing::info!(path = %config_path.display(), "config loaded");

    match cli.command {
        Commands::Search {
            source,
            query,
            limit,
        } => {
            let (catalog, filter) = load_source(&source, &config)?;
            let mut session = SearchSession::new(catalog, filter);
            session.set_query(query);

            let options = DisplayOptions {
                limit: match limit {
                    Some(0) => None,
                    Some(n) => Some(n),
                    None => config.display.limit(),
                },
                show_codes: config.display.show_codes,
            };
            print!(
                "{}",
                render_outcome(&session.results(), session.catalog(), &options)
            );
        }
        Commands::Stats { source } => {
            let (catalog, filter) = load_source(&source, &config)?;
            let index = build(catalog.records(filter));
            print!("{}", render_stats(&index.stats()));
        }
        Commands::Repl { source } => {
            let (catalog, filter) = load_source(&source, &config)?;
            let mut session = SearchSession::new(catalog, filter);
            let options = DisplayOptions {
                limit: config.display.limit(),
                show_codes: config.display.show_codes,
            };
            repl::run(&mut session, io::stdin().lock(), io::stdout().lock(), &options)
                .context("repl i/o")?;
        }
    }

    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` wins when it is set and parses;
/// otherwise the already validated config filter applies. Returns why an
/// unparsable `RUST_LOG` was ignored, to be logged once the subscriber is up.
fn init_tracing(config_filter: &str) -> Option<String> {
    let mut env_problem = None;
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => match EnvFilter::try_new(&directives) {
            Ok(filter) => filter,
            Err(e) => {
                env_problem = Some(format!("{directives:?}: {e}"));
                EnvFilter::new(config_filter)
            }
        },
        Err(_) => EnvFilter::new(config_filter),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    env_problem
}

fn load_source(source: &Source, config: &AppConfig) -> Result<(Catalog, ListFilter)> {
    let json = std::fs::read_to_string(&source.catalog)
        .with_context(|| format!("reading catalog {}", source.catalog.display()))?;
    let catalog = Catalog::from_json(&json)
        .with_context(|| format!("parsing catalog {}", source.catalog.display()))?;
    let filter = source.filter.unwrap_or(config.general.default_filter);

    tracing::info!(records = catalog.len(), %filter, "catalog loaded");
    Ok((catalog, filter))
}
