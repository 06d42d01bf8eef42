use clap::Parser;
use fourfold::{
    DEFAULT_MAX_ITERATIONS, Engine, EngineError, Lang,
    lang::{DEFAULT_LANG, from_code},
};
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fourfold")]
#[command(about = "Count a word's letters, spell the count, repeat until the magic word")]
#[command(version)]
struct Cli {
    /// Words to walk; each prints its path
    words: Vec<String>,

    /// Language code (en, nl, de, ja, zh); unknown codes use English
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Also walk a random example word of the language
    #[arg(short, long)]
    random: bool,

    /// Iterations before giving up on a word
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Skip input validation (digits, punctuation, over-long words)
    #[arg(long)]
    unchecked: bool,

    /// NFC-compose input before counting letters
    #[arg(long)]
    compose: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "fourfold=debug"
    } else {
        "fourfold=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(&cli);
    if let Err(e) = &result {
        error!("{e}");
    }
    ExitCode::from(exit_status(&result))
}

/// 0 when every path converged, 2 when a word was rejected or did not
/// converge, 1 on a lexicon defect.
fn exit_status(result: &Result<bool, EngineError>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 2,
        Err(_) => 1,
    }
}

/// Ok(false) when some word was rejected or did not converge.
fn run(cli: &Cli) -> Result<bool, EngineError> {
    let lang = resolve_lang(&cli.lang);
    let engine = Engine::builder()
        .lang(lang)
        .max_iterations(cli.max_iterations)
        .compose_input(cli.compose)
        .build()?;

    let mut all_ok = true;
    for word in &cli.words {
        let result = if cli.unchecked {
            engine.path(word)
        } else {
            engine.checked_path(word)
        };
        match result {
            Ok(path) => {
                all_ok &= path.converged();
                print_path(&path);
            }
            Err(EngineError::Input(e)) => {
                warn!(word = %word, "{e}");
                all_ok = false;
            }
            Err(e) => return Err(e),
        }
    }

    if cli.random || cli.words.is_empty() {
        match engine.random_path(&mut rand::rng())? {
            Some(path) => {
                all_ok &= path.converged();
                print_path(&path);
            }
            None => warn!(lang = lang.code(), "language has no example words"),
        }
    }

    Ok(all_ok)
}

/// Exact code first, then the primary subtag of a locale (`de-AT`).
fn resolve_lang(code: &str) -> Lang {
    from_code(code)
        .or_else(|| Lang::from_locale(code))
        .unwrap_or_else(|| {
            warn!(code, using = DEFAULT_LANG.code(), "unsupported language code");
            DEFAULT_LANG
        })
}

fn print_path(path: &fourfold::Path<'_>) {
    if path.converged() {
        println!("{path}  ({} steps)", path.step_count());
    } else {
        println!("{path}  (did not converge)");
    }
}
