use anyhow::Context;
use clap::Parser;
use config_engine::StorageBackend;
use ledger_service::{CurrencyFormat, FileStore, KeyValueStore, LedgerService, MemoryStore};
use logger_redacted::NameRedactor;
use splitbill_cli::{run_interactive, Shell};
use std::path::PathBuf;

/// Split shared bills and see who owes whom
#[derive(Debug, Parser)]
#[command(name = "splitbill", version, about)]
struct Args {
    /// Extra configuration file (TOML, or YAML by extension)
    #[arg(long, env = "SPLITBILL_CONFIG")]
    config: Option<PathBuf>,

    /// Keep participants in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Log filter; `RUST_LOG` still takes precedence
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config =
        config_engine::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(level) = args.log_level {
        config.logging.log_level = level;
    }
    if args.ephemeral {
        config.storage.backend = StorageBackend::Memory;
    }

    logger_redacted::init(&config.logging).context("failed to initialise logging")?;
    colored::control::set_override(console::colors_enabled());

    let currency = CurrencyFormat::new(
        config.display.currency_symbol.clone(),
        config.display.separator(),
    );
    let redactor = NameRedactor::new(config.logging.redaction_enabled);

    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::info!("participants kept in memory only");
            session(LedgerService::open(MemoryStore::new()).with_redactor(redactor), currency)
        }
        StorageBackend::File => {
            let root = match config.storage.path {
                Some(path) => path,
                None => config_engine::default_data_dir()?,
            };
            let store = FileStore::new(root);
            tracing::info!(path = %store.root().display(), "participants cached on disk");
            session(LedgerService::open(store).with_redactor(redactor), currency)
        }
    }
}

fn session<S: KeyValueStore>(ledger: LedgerService<S>, currency: CurrencyFormat) -> anyhow::Result<()> {
    let mut shell = Shell::new(ledger, currency);
    run_interactive(&mut shell)
}
