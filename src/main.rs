// SPDX-License-Identifier: PMPL-1.0-or-later

//! portfolio-search: bilingual portfolio page with live search
//!
//! Renders the experience timeline and case-study gallery from a JSON data
//! file, filters them by a query, and drives the page interactively from a
//! line-based session.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use portfolio_search::config::PortfolioConfig;
use portfolio_search::controller::{Event, LoadState, ViewController};
use portfolio_search::i18n::{Lang, LanguageSource, LanguageStore};
use portfolio_search::loader::{self, DataSource};
use portfolio_search::render::{self, ConsoleFormatter, OutputFormat};
use portfolio_search::search::filter_dataset;
use portfolio_search::storage::PreferenceStore;
use portfolio_search::{session, telemetry};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-search")]
#[command(version)]
#[command(about = "Bilingual portfolio page with timeline and case-study search")]
#[command(long_about = None)]
struct Cli {
    /// YAML configuration file (default: $PORTFOLIO_CONFIG or ./portfolio.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Language preference file
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the full page
    Render {
        /// Data file path or http(s) URL
        #[arg(short, long)]
        data: Option<DataSource>,

        /// Render in this language instead of the resolved one
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        /// Apply a search query before rendering
        #[arg(short, long)]
        query: Option<String>,

        /// Page URL whose `lang` parameter selects the language
        #[arg(long)]
        page_url: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: OutputFormat,

        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List timeline entries and case studies matching a query
    Search {
        /// Search text (case-insensitive substring)
        #[arg(value_name = "QUERY")]
        query: String,

        /// Data file path or http(s) URL
        #[arg(short, long)]
        data: Option<DataSource>,

        /// Search in this language instead of the resolved one
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,
    },

    /// Show or set the persisted language preference
    Lang {
        #[arg(value_enum)]
        lang: Option<LangArg>,
    },

    /// Drive the page with line commands on stdin
    Session {
        /// Data file path or http(s) URL
        #[arg(short, long)]
        data: Option<DataSource>,

        /// Page URL whose `lang` parameter selects the language
        #[arg(long)]
        page_url: Option<String>,

        /// Output format for printed documents
        #[arg(short, long, value_enum, default_value = "html")]
        format: OutputFormat,
    },
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    Pt,
    En,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Pt => Lang::Pt,
            LangArg::En => Lang::En,
        }
    }
}

fn language_store(
    config: &PortfolioConfig,
    prefs: PreferenceStore,
    lang: Option<LangArg>,
    page_url: Option<&str>,
) -> LanguageStore {
    match lang {
        Some(lang) => LanguageStore::overridden(lang.into(), prefs),
        None => LanguageStore::resolve(page_url, prefs, config.default_lang()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose)?;

    let config = PortfolioConfig::discover(cli.config.as_deref())?;
    let prefs = cli
        .prefs
        .map(PreferenceStore::new)
        .unwrap_or_else(|| config.preference_store());

    match cli.command {
        Commands::Render {
            data,
            lang,
            query,
            page_url,
            format,
            output,
        } => {
            let language = language_store(&config, prefs, lang, page_url.as_deref());
            let mut ctl = ViewController::new(language, &config.contact);
            let source = data.unwrap_or_else(|| config.data_source());

            if let LoadState::Failed(reason) = ctl.start(&source).await {
                bail!("no page rendered, dataset unavailable: {reason}");
            }
            if let Some(query) = query {
                ctl.handle(Event::Input(query));
            }

            match output {
                Some(path) => {
                    render::save_document(ctl.document(), format, &path)?;
                    eprintln!("Page saved to: {}", path.display());
                }
                None => print!("{}", format.serialize(ctl.document())?),
            }
        }

        Commands::Search { query, data, lang } => {
            let language = language_store(&config, prefs, lang, None);
            let source = data.unwrap_or_else(|| config.data_source());
            let dataset = loader::load(&source).await?;
            let matches = filter_dataset(&dataset, &query, language.get());
            ConsoleFormatter::new(language.get()).print(&query, &matches);
        }

        Commands::Lang { lang } => match lang {
            Some(lang) => {
                let lang: Lang = lang.into();
                prefs.write_lang(lang)?;
                println!("Language preference set to: {lang}");
            }
            None => {
                let language = LanguageStore::resolve(None, prefs, config.default_lang());
                let origin = match language.source() {
                    LanguageSource::Stored => "stored preference",
                    _ => "default",
                };
                println!("{} ({origin})", language.get());
            }
        },

        Commands::Session {
            data,
            page_url,
            format,
        } => {
            let language = language_store(&config, prefs, None, page_url.as_deref());
            let mut ctl = ViewController::new(language, &config.contact);
            let source = data.unwrap_or_else(|| config.data_source());

            // A failed load is logged by the controller; the session goes on
            // with an empty page.
            ctl.start(&source).await;
            let stdout = io::stdout();
            println!("{}", format.serialize(ctl.document())?);
            session::run(&mut ctl, io::stdin().lock(), stdout.lock(), format)?;
        }
    }

    Ok(())
}
