use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{BankError, Clock, QuestionBank, SessionLauncher};
use tracing::info;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBool { name: &'static str, raw: String },
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBool { name, raw } => {
                write!(f, "invalid {name} value: {raw} (expected true/false)")
            }
            ArgsError::EmptyPath { flag } => write!(f, "{flag} must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
enum AppError {
    #[error(transparent)]
    Args(#[from] ArgsError),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error("failed to initialize logging: {0}")]
    Tracing(String),
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ArgsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ArgsError::InvalidBool {
            name,
            raw: raw.to_string(),
        }),
    }
}

struct DesktopApp {
    session_launcher: Arc<SessionLauncher>,
}

impl UiApp for DesktopApp {
    fn session_launcher(&self) -> Arc<SessionLauncher> {
        Arc::clone(&self.session_launcher)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    bank_path: Option<PathBuf>,
    shuffle: bool,
    log_filter: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--bank <path>] [--shuffle] [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in question bank, fixed question order, log filter `warn`");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BANK_PATH, QUIZ_SHUFFLE, QUIZ_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            _ => None,
        }
    }
}

impl Args {
    /// Returns `Ok(None)` when help was requested.
    fn parse_ui(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut bank_path = env("QUIZ_BANK_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut shuffle = match env("QUIZ_SHUFFLE") {
            Some(raw) => parse_bool("QUIZ_SHUFFLE", &raw)?,
            None => false,
        };
        let mut log_filter = env("QUIZ_LOG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => {
                    let value = require_value(args, "--bank")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyPath { flag: "--bank" });
                    }
                    bank_path = Some(PathBuf::from(value));
                }
                "--shuffle" => shuffle = true,
                "--log" => log_filter = require_value(args, "--log")?,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            bank_path,
            shuffle,
            log_filter,
        }))
    }
}

fn init_tracing(filter: &str) -> Result<(), AppError> {
    let filter = tracing_subscriber::EnvFilter::try_new(filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| AppError::Tracing(err.to_string()))
}

fn load_bank(path: Option<&std::path::Path>) -> Result<QuestionBank, BankError> {
    match path {
        Some(path) => QuestionBank::from_path(path),
        None => QuestionBank::embedded(),
    }
}

fn run() -> Result<(), AppError> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand means `ui`.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            print_usage();
            ArgsError::UnknownArg(first.to_string())
        })?,
    };
    if argv.first().is_some_and(|first| !first.starts_with('-')) {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = match cmd {
        Command::Ui => Args::parse_ui(&mut iter, |key| std::env::var(key).ok()),
    }
    .inspect_err(|_| print_usage())?;
    let Some(parsed) = parsed else {
        print_usage();
        return Ok(());
    };

    init_tracing(&parsed.log_filter)?;

    let bank = load_bank(parsed.bank_path.as_deref())?;
    info!(
        title = bank.title(),
        questions = bank.len(),
        shuffle = parsed.shuffle,
        "question bank loaded"
    );

    let session_launcher = Arc::new(
        SessionLauncher::new(Clock::System, Arc::new(bank)).with_shuffle(parsed.shuffle),
    );
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { session_launcher });
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

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Option<Args>, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse_ui(&mut iter, |key| {
            env.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_string())
        })
    }

    #[test]
    fn defaults_use_embedded_bank_in_fixed_order() {
        let args = parse(&[], &[]).unwrap().unwrap();
        assert_eq!(
            args,
            Args {
                bank_path: None,
                shuffle: false,
                log_filter: "warn".to_string(),
            }
        );
    }

    #[test]
    fn environment_supplies_defaults() {
        let args = parse(
            &[],
            &[
                ("QUIZ_BANK_PATH", "/tmp/bank.json"),
                ("QUIZ_SHUFFLE", "yes"),
                ("QUIZ_LOG", "debug"),
            ],
        )
        .unwrap()
        .unwrap();
        assert_eq!(args.bank_path, Some(PathBuf::from("/tmp/bank.json")));
        assert!(args.shuffle);
        assert_eq!(args.log_filter, "debug");
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--bank", "other.json", "--log", "services=debug", "--shuffle"],
            &[("QUIZ_BANK_PATH", "/tmp/bank.json"), ("QUIZ_SHUFFLE", "off")],
        )
        .unwrap()
        .unwrap();
        assert_eq!(args.bank_path, Some(PathBuf::from("other.json")));
        assert!(args.shuffle);
        assert_eq!(args.log_filter, "services=debug");
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse(&["--shuffle", "--help"], &[]).unwrap(), None);
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(
            parse(&["--bank"], &[]).unwrap_err(),
            ArgsError::MissingValue { flag: "--bank" }
        );
        assert_eq!(
            parse(&["--bank", " "], &[]).unwrap_err(),
            ArgsError::EmptyPath { flag: "--bank" }
        );
        assert_eq!(
            parse(&["--questions", "10"], &[]).unwrap_err(),
            ArgsError::UnknownArg("--questions".to_string())
        );
        assert!(matches!(
            parse(&[], &[("QUIZ_SHUFFLE", "maybe")]).unwrap_err(),
            ArgsError::InvalidBool { name: "QUIZ_SHUFFLE", .. }
        ));
    }

    #[test]
    fn commands_parse() {
        assert_eq!(Command::from_arg("ui"), Some(Command::Ui));
        assert_eq!(Command::from_arg("review"), None);
    }
}
