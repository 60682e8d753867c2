use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ImageResolver, LogoCatalog, QuizService};
use tracing::info;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidRounds { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidRounds { raw } => write!(f, "invalid --rounds value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz: Arc<QuizService>,
    images: ImageResolver,
}

impl UiApp for DesktopApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    fn images(&self) -> ImageResolver {
        self.images.clone()
    }
}

struct Args {
    catalog_path: Option<PathBuf>,
    rounds: Option<usize>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--catalog <json_path>] [--rounds <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --catalog  bundled dataset");
    eprintln!("  --rounds   {}", services::DEFAULT_ROUND_COUNT);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LOGOQUIZ_CATALOG, LOGOQUIZ_ROUNDS");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut catalog_path = std::env::var("LOGOQUIZ_CATALOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut rounds = std::env::var("LOGOQUIZ_ROUNDS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    catalog_path = Some(PathBuf::from(value));
                }
                "--rounds" => {
                    let value = require_value(args, "--rounds")?;
                    let parsed: usize = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidRounds { raw: value.clone() })?;
                    rounds = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            catalog_path,
            rounds,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let catalog = match &parsed.catalog_path {
        Some(path) => LogoCatalog::from_file(path)?,
        None => LogoCatalog::builtin()?,
    };

    let mut quiz = QuizService::new(Arc::new(catalog));
    if let Some(rounds) = parsed.rounds {
        quiz = quiz.with_round_count(rounds);
    }
    info!(rounds = quiz.round_count(), "launching quiz");

    let app = DesktopApp {
        quiz: Arc::new(quiz),
        images: ImageResolver::default(),
    };
    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    // Keep the quiz window a normal window, not an always-on-top one.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Singapore Logo Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
