//! anki-llm - Generate Anki flashcards from PDFs with Gemini
//!
//! This is the binary entry point. Without arguments it opens the review TUI;
//! with `--pdf` and `--deck` it runs the whole workflow headless.

mod headless;

use std::path::PathBuf;
use std::sync::Arc;

use ankillm_app::config::{self, Settings};
use ankillm_app::Services;
use ankillm_core::logging;
use ankillm_core::prelude::*;
use ankillm_remote::{AnkiClient, GeminiClient, GeminiConfig};
use clap::Parser;

use headless::HeadlessRequest;

/// anki-llm - Generate Anki flashcards from PDFs with Gemini
#[derive(Parser, Debug)]
#[command(name = "anki-llm", version)]
#[command(about = "Generate Anki flashcards from PDFs with Gemini", long_about = None)]
struct Args {
    /// PDF to generate notes from, skipping the TUI
    #[arg(long, value_name = "PATH", requires = "deck")]
    pdf: Option<PathBuf>,

    /// Deck to create (or reuse) and fill in headless mode
    #[arg(long, value_name = "NAME", requires = "pdf")]
    deck: Option<String>,
}

impl Args {
    /// Parse the command line. Usage errors exit with status 1.
    fn parse_or_exit() -> Self {
        match Args::try_parse() {
            Ok(args) => args,
            Err(e) if e.use_stderr() => {
                let _ = e.print();
                std::process::exit(1);
            }
            // --help and --version
            Err(e) => e.exit(),
        }
    }

    fn headless_request(&self, template: &str) -> Option<HeadlessRequest> {
        match (&self.pdf, &self.deck) {
            (Some(pdf), Some(deck)) => Some(HeadlessRequest {
                pdf: pdf.clone(),
                deck: deck.clone(),
                template: template.to_string(),
            }),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse_or_exit();

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    install_error_reports()?;

    // Logs go to a file, the TUI owns the terminal and headless owns stdout
    logging::init()?;

    let settings = config::load_settings();
    let api_key = config::api_key_from_env()?;
    let services = build_services(&settings, api_key)?;

    let result = match args.headless_request(&settings.notes.template) {
        Some(request) => {
            let deck = request.deck.clone();
            headless::run_headless(services, request)
                .await
                .map(|count| {
                    eprintln!("Successfully added {count} notes to the '{deck}' deck.");
                })
        }
        None => {
            let start_dir = std::env::current_dir().context("Reading working directory")?;
            info!("Starting TUI in {}", start_dir.display());
            ankillm_tui::run(settings, services, start_dir).await
        }
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("anki-llm exiting");
    result
}

/// Install color-eyre's panic and error report hooks. Only the first call
/// in a process succeeds.
fn install_error_reports() -> Result<()> {
    color_eyre::install().map_err(|e| Error::startup(format!("error report hook: {e}")))
}

/// Wire the AnkiConnect and Gemini clients into the shared service handles
fn build_services(settings: &Settings, api_key: String) -> Result<Services> {
    let http = ankillm_remote::http_client()?;

    let anki = AnkiClient::new(http.clone(), &settings.anki.url)?
        .with_tags(settings.notes.tags.clone());
    let gemini = GeminiClient::new(http, GeminiConfig::new(api_key, &settings.llm.model))?;
    info!(
        "Using AnkiConnect at {} and Gemini model {}",
        anki.endpoint(),
        gemini.model()
    );

    Ok(Services::new(
        Arc::new(anki),
        Arc::new(gemini),
        settings.llm.timeout(),
    ))
}
