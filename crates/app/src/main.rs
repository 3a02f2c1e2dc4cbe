use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::info;
use quiz_core::model::QuizSet;
use services::{QuizSource, load_source};
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPath { raw } => write!(f, "invalid --file value: {raw:?}"),
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
    initial_quiz: Option<QuizSet>,
    upload_enabled: bool,
}

impl UiApp for DesktopApp {
    fn initial_quiz(&self) -> Option<QuizSet> {
        self.initial_quiz.clone()
    }

    fn upload_enabled(&self) -> bool {
        self.upload_enabled
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--file <quiz.json>] [--no-upload] [--empty]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --file <path>   quiz loaded at startup (default: bundled sample quiz)");
    eprintln!("  --no-upload     hide the file loader; only the bundled quiz is available");
    eprintln!("  --empty         start without a quiz");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_FILE, QUIZ_NO_UPLOAD=1, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    file: Option<PathBuf>,
    upload_enabled: bool,
    start_empty: bool,
}

impl Args {
    fn from_env() -> Self {
        let file = std::env::var("QUIZ_FILE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let no_upload = std::env::var("QUIZ_NO_UPLOAD")
            .ok()
            .is_some_and(|value| is_truthy(&value));

        Self {
            file,
            upload_enabled: !no_upload,
            start_empty: false,
        }
    }

    fn parse(mut self, args: &mut impl Iterator<Item = String>) -> Result<Parsed, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--file" => {
                    let value = require_value(args, "--file")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidPath { raw: value });
                    }
                    self.file = Some(PathBuf::from(value));
                }
                "--no-upload" => self.upload_enabled = false,
                "--empty" => self.start_empty = true,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(self))
    }

    /// Which quiz to show at launch, if any. An explicit file wins over `--empty`.
    fn initial_source(&self) -> Option<QuizSource> {
        match (&self.file, self.start_empty) {
            (Some(path), _) => Some(QuizSource::File(path.clone())),
            (None, true) => None,
            (None, false) => Some(QuizSource::Bundled),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = match Args::from_env()
        .parse(&mut argv)
        .inspect_err(|_| print_usage())?
    {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    let initial_quiz = match args.initial_source() {
        Some(source) => Some(load_source(source).await?),
        None => None,
    };
    info!(
        "starting quiz runner (questions: {}, uploads: {})",
        initial_quiz.as_ref().map_or(0, QuizSet::len),
        args.upload_enabled
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        initial_quiz,
        upload_enabled: args.upload_enabled,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
