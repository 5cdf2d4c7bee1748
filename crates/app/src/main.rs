use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::Catalog;
use services::{CatalogSource, QuizConfigError, QuizSettings};
use ui::{App, UiApp, build_app_context};

const CATALOG_ENV: &str = "BIAS_QUIZ_CATALOG";
const SESSION_SIZE_ENV: &str = "BIAS_QUIZ_SESSION_SIZE";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidSessionSize { origin: &'static str, raw: String },
    InvalidCatalogPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidSessionSize { origin, raw } => {
                write!(f, "invalid {origin} value: {raw}")
            }
            ArgsError::InvalidCatalogPath { raw } => write!(f, "invalid --catalog value: {raw:?}"),
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
    catalog: Arc<Catalog>,
    quiz_settings: QuizSettings,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn quiz_settings(&self) -> QuizSettings {
        self.quiz_settings
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    catalog: CatalogSource,
    session_size: Option<usize>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--catalog <path.json>] [--session-size <n>]");
    eprintln!("  cargo run -p app -- check [--catalog <path.json>] [--session-size <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in catalog, 5 scenarios per session");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {CATALOG_ENV}, {SESSION_SIZE_ENV}, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

/// `Ok(None)` means usage was requested.
fn select_command(first: Option<&str>) -> Result<Option<Command>, ArgsError> {
    match first {
        // Default behavior: launching UI when no subcommand is provided.
        None => Ok(Some(Command::Ui)),
        Some("--help" | "-h") => Ok(None),
        Some(first) if first.starts_with("--") => Ok(Some(Command::Ui)),
        Some(first) => Command::from_arg(first)
            .map(Some)
            .ok_or_else(|| ArgsError::UnknownCommand(first.to_string())),
    }
}

fn parse_session_size(raw: &str, origin: &'static str) -> Result<usize, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSessionSize {
            origin,
            raw: raw.to_string(),
        })
}

impl Args {
    /// Environment first, then flags; a flag overrides its variable.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut catalog = env(CATALOG_ENV)
            .filter(|value| !value.trim().is_empty())
            .map_or(CatalogSource::Builtin, |value| {
                CatalogSource::JsonFile(PathBuf::from(value))
            });
        let mut session_size = env(SESSION_SIZE_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(|value| parse_session_size(&value, SESSION_SIZE_ENV))
            .transpose()?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCatalogPath { raw: value });
                    }
                    catalog = CatalogSource::JsonFile(PathBuf::from(value));
                }
                "--session-size" => {
                    let value = require_value(args, "--session-size")?;
                    session_size = Some(parse_session_size(&value, "--session-size")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            catalog,
            session_size,
        })
    }

    fn quiz_settings(&self) -> Result<QuizSettings, QuizConfigError> {
        self.session_size
            .map_or_else(|| Ok(QuizSettings::default()), QuizSettings::new)
    }
}

fn check_summary(source: &CatalogSource, catalog: &Catalog, settings: QuizSettings) -> String {
    format!(
        "{source}: {} scenarios across {} bias categories, {} per session",
        catalog.len(),
        catalog.categories().len(),
        settings.session_size()
    )
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Errors are printed once, by `main`.
    let cmd = match select_command(argv.first().map(String::as_str)) {
        Ok(Some(cmd)) => cmd,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(e) => {
            print_usage();
            return Err(e.into());
        }
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, |key| std::env::var(key).ok()).inspect_err(|_| {
        print_usage();
    })?;

    // Load and validate everything before a window exists, so bad data fails here.
    let catalog = Arc::new(parsed.catalog.load()?);
    let quiz_settings = parsed.quiz_settings()?;
    quiz_settings.validate_for(&catalog)?;

    match cmd {
        Command::Check => {
            println!("{}", check_summary(&parsed.catalog, &catalog, quiz_settings));
            Ok(())
        }
        Command::Ui => {
            log::info!(
                "launching with {} ({} scenarios, {} per session)",
                parsed.catalog,
                catalog.len(),
                quiz_settings.session_size()
            );
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                catalog,
                quiz_settings,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("AI Bias Detective")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    pretty_env_logger::init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, |key| env.get(key).cloned())
    }

    #[test]
    fn defaults_to_builtin_catalog() {
        let args = parse(&[], &[]).unwrap();
        assert_eq!(args.catalog, CatalogSource::Builtin);
        assert_eq!(args.session_size, None);
        assert_eq!(args.quiz_settings().unwrap(), QuizSettings::default());
    }

    #[test]
    fn environment_is_read() {
        let args = parse(
            &[],
            &[(CATALOG_ENV, "data/catalog.json"), (SESSION_SIZE_ENV, "3")],
        )
        .unwrap();
        assert_eq!(
            args.catalog,
            CatalogSource::JsonFile(PathBuf::from("data/catalog.json"))
        );
        assert_eq!(args.session_size, Some(3));
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--catalog", "other.json", "--session-size", "4"],
            &[(CATALOG_ENV, "data/catalog.json"), (SESSION_SIZE_ENV, "3")],
        )
        .unwrap();
        assert_eq!(args.catalog, CatalogSource::JsonFile(PathBuf::from("other.json")));
        assert_eq!(args.session_size, Some(4));
    }

    #[test]
    fn blank_environment_is_ignored() {
        let args = parse(&[], &[(CATALOG_ENV, "  "), (SESSION_SIZE_ENV, "")]).unwrap();
        assert_eq!(args.catalog, CatalogSource::Builtin);
        assert_eq!(args.session_size, None);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert_eq!(
            parse(&["--session-size", "five"], &[]).unwrap_err(),
            ArgsError::InvalidSessionSize {
                origin: "--session-size",
                raw: "five".to_string(),
            }
        );
        assert_eq!(
            parse(&[], &[(SESSION_SIZE_ENV, "-1")]).unwrap_err(),
            ArgsError::InvalidSessionSize {
                origin: SESSION_SIZE_ENV,
                raw: "-1".to_string(),
            }
        );
        assert_eq!(
            parse(&["--catalog", " "], &[]).unwrap_err(),
            ArgsError::InvalidCatalogPath {
                raw: " ".to_string()
            }
        );
        assert_eq!(
            parse(&["--catalog"], &[]).unwrap_err(),
            ArgsError::MissingValue { flag: "--catalog" }
        );
        assert_eq!(
            parse(&["--deck-id", "1"], &[]).unwrap_err(),
            ArgsError::UnknownArg("--deck-id".to_string())
        );
    }

    #[test]
    fn zero_session_size_fails_settings() {
        let args = parse(&["--session-size", "0"], &[]).unwrap();
        assert_eq!(
            args.quiz_settings().unwrap_err(),
            QuizConfigError::ZeroSessionSize
        );
    }

    #[test]
    fn commands_parse() {
        assert_eq!(Command::from_arg("ui"), Some(Command::Ui));
        assert_eq!(Command::from_arg("check"), Some(Command::Check));
        assert_eq!(Command::from_arg("seed"), None);
    }

    #[test]
    fn subcommand_selection() {
        assert_eq!(select_command(None), Ok(Some(Command::Ui)));
        assert_eq!(select_command(Some("--catalog")), Ok(Some(Command::Ui)));
        assert_eq!(select_command(Some("check")), Ok(Some(Command::Check)));
        assert_eq!(select_command(Some("-h")), Ok(None));

        let err = select_command(Some("seed")).unwrap_err();
        assert_eq!(err, ArgsError::UnknownCommand("seed".to_string()));
        assert_eq!(err.to_string(), "unknown subcommand: seed");
    }

    #[test]
    fn check_summary_describes_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            check_summary(&CatalogSource::Builtin, &catalog, QuizSettings::default()),
            "built-in catalog: 5 scenarios across 4 bias categories, 5 per session"
        );
    }
}
