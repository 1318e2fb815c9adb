use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{QuestionSet, QuizSettings, QuizSettingsDraft, choice_letter};
use quiz_core::time::format_countdown;
use services::QuestionSource;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownCommand(String),
    UnknownArg(String),
    InvalidDuration { raw: String },
    InvalidQuestionsPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDuration { raw } => write!(f, "invalid --duration value: {raw}"),
            ArgsError::InvalidQuestionsPath { raw } => {
                write!(f, "invalid --questions value: {raw:?}")
            }
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
    questions: Arc<QuestionSet>,
    settings: QuizSettings,
    source: QuestionSource,
}

impl UiApp for DesktopApp {
    fn questions(&self) -> Arc<QuestionSet> {
        Arc::clone(&self.questions)
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn source_label(&self) -> String {
        self.source.describe()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    source: QuestionSource,
    duration_secs: Option<u32>,
}

fn write_usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Usage:")?;
    writeln!(out, "  cargo run -p app -- ui    [--questions <file.json>] [--duration <secs>]")?;
    writeln!(out, "  cargo run -p app -- check [--questions <file.json>] [--duration <secs>]")?;
    writeln!(out)?;
    writeln!(out, "Defaults:")?;
    writeln!(out, "  built-in questions, --duration 900")?;
    writeln!(out)?;
    writeln!(out, "Environment:")?;
    writeln!(out, "  LEARNINEER_QUESTIONS, LEARNINEER_QUIZ_SECS, RUST_LOG")
}

fn print_usage() {
    let _ = write_usage(&mut io::stderr());
}

/// Show usage for a rejected invocation. The error itself is left to `main`.
fn usage_error(err: ArgsError, out: &mut impl Write) -> ArgsError {
    let _ = write_usage(out);
    err
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

fn parse_duration(raw: String) -> Result<u32, ArgsError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ArgsError::InvalidDuration { raw })
}

fn parse_questions_path(raw: String) -> Result<QuestionSource, ArgsError> {
    if raw.trim().is_empty() {
        return Err(ArgsError::InvalidQuestionsPath { raw });
    }
    Ok(QuestionSource::File(PathBuf::from(raw)))
}

impl Args {
    /// Environment values seed the defaults; flags override them.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_questions: Option<String>,
        env_duration: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut source = env_questions
            .map(parse_questions_path)
            .transpose()?
            .unwrap_or_default();
        let mut duration_secs = env_duration.map(parse_duration).transpose()?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    source = parse_questions_path(require_value(args, "--questions")?)?;
                }
                "--duration" => {
                    duration_secs = Some(parse_duration(require_value(args, "--duration")?)?);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            source,
            duration_secs,
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Help,
    Run(Command, Args),
}

fn parse_invocation(
    mut argv: Vec<String>,
    env_questions: Option<String>,
    env_duration: Option<String>,
) -> Result<Invocation, ArgsError> {
    if argv.iter().any(|arg| arg == "--help" || arg == "-h") {
        return Ok(Invocation::Help);
    }

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => {
            let cmd = Command::from_arg(first)
                .ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?;
            argv.remove(0);
            cmd
        }
    };

    let mut iter = argv.into_iter();
    let args = Args::parse(&mut iter, env_questions, env_duration)?;
    Ok(Invocation::Run(cmd, args))
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn print_summary(source: &QuestionSource, questions: &QuestionSet, settings: QuizSettings) {
    println!("questions: {} ({})", questions.len(), source.describe());
    println!("duration:  {}", format_countdown(settings.duration_secs()));
    for (index, question) in questions.iter().enumerate() {
        let answer = choice_letter(question.correct_choice());
        println!(
            "  {:>2}. {} [{} choices, answer {answer}]",
            index + 1,
            question.prompt(),
            question.choice_count()
        );
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let invocation = parse_invocation(
        std::env::args().skip(1).collect(),
        std::env::var("LEARNINEER_QUESTIONS").ok(),
        std::env::var("LEARNINEER_QUIZ_SECS").ok(),
    )
    .map_err(|err| usage_error(err, &mut io::stderr()))?;

    let (cmd, parsed) = match invocation {
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
        Invocation::Run(cmd, args) => (cmd, args),
    };

    init_tracing()?;

    let settings = QuizSettingsDraft {
        duration_secs: parsed.duration_secs,
    }
    .validate()?;
    let questions = parsed.source.load().await?;
    tracing::info!(
        source = %parsed.source.describe(),
        questions = questions.len(),
        duration_secs = settings.duration_secs(),
        "question set ready"
    );

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                questions: Arc::new(questions),
                settings,
                source: parsed.source,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Learnineer")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            print_summary(&parsed.source, &questions, settings);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoke(args: &[&str]) -> Result<Invocation, ArgsError> {
        let argv = args.iter().map(|arg| (*arg).to_string()).collect();
        parse_invocation(argv, None, None)
    }

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, None, None)
    }

    #[test]
    fn defaults_to_built_in_questions() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.source, QuestionSource::Reference);
        assert_eq!(args.duration_secs, None);
    }

    #[test]
    fn flags_override_environment() {
        let mut iter = ["--duration", "120"].iter().map(|arg| (*arg).to_string());
        let args = Args::parse(
            &mut iter,
            Some("env.json".to_string()),
            Some("60".to_string()),
        )
        .unwrap();
        assert_eq!(args.source, QuestionSource::File(PathBuf::from("env.json")));
        assert_eq!(args.duration_secs, Some(120));
    }

    #[test]
    fn questions_flag_sets_file_source() {
        let args = parse(&["--questions", "quiz.json"]).unwrap();
        assert_eq!(args.source, QuestionSource::File(PathBuf::from("quiz.json")));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse(&["--duration"]).unwrap_err(),
            ArgsError::MissingValue { flag: "--duration" }
        );
        assert_eq!(
            parse(&["--duration", "soon"]).unwrap_err(),
            ArgsError::InvalidDuration {
                raw: "soon".to_string()
            }
        );
        assert_eq!(
            parse(&["--questions", " "]).unwrap_err(),
            ArgsError::InvalidQuestionsPath {
                raw: " ".to_string()
            }
        );
        assert_eq!(
            parse(&["--verbose"]).unwrap_err(),
            ArgsError::UnknownArg("--verbose".to_string())
        );
    }

    #[test]
    fn subcommand_selects_command() {
        assert_eq!(
            invoke(&[]).unwrap(),
            Invocation::Run(Command::Ui, parse(&[]).unwrap())
        );
        assert_eq!(
            invoke(&["check", "--duration", "60"]).unwrap(),
            Invocation::Run(Command::Check, parse(&["--duration", "60"]).unwrap())
        );
        assert_eq!(
            invoke(&["--questions", "quiz.json"]).unwrap(),
            Invocation::Run(Command::Ui, parse(&["--questions", "quiz.json"]).unwrap())
        );
        assert_eq!(invoke(&["check", "--help"]).unwrap(), Invocation::Help);
        assert_eq!(
            invoke(&["serve"]).unwrap_err(),
            ArgsError::UnknownCommand("serve".to_string())
        );
    }

    #[test]
    fn rejected_invocation_prints_usage_but_not_the_error() {
        let err = invoke(&["check", "--duration", "soon"]).unwrap_err();
        let message = err.to_string();

        let mut out = Vec::new();
        let returned = usage_error(err, &mut out);
        let printed = String::from_utf8(out).unwrap();

        assert_eq!(returned.to_string(), message);
        assert!(printed.starts_with("Usage:"), "missing usage in {printed}");
        assert!(!printed.contains(&message), "error printed early in {printed}");
        assert!(!printed.contains("soon"), "error printed early in {printed}");
    }
}
