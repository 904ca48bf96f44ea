use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use course_core::model::{CourseId, format_total};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CourseService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCatalog { raw: String },
    InvalidCourseId { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCatalog { raw } => write!(f, "invalid --catalog value: {raw:?}"),
            ArgsError::InvalidCourseId { raw } => write!(f, "invalid --course value: {raw:?}"),
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
    course_service: Arc<CourseService>,
    start_course: Option<CourseId>,
}

impl UiApp for DesktopApp {
    fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.course_service)
    }

    fn start_course(&self) -> Option<CourseId> {
        self.start_course.clone()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    catalog: Option<PathBuf>,
    start_course: Option<CourseId>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--catalog <path>] [--course <id>]");
    eprintln!("  cargo run -p app -- list [--catalog <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  the bundled course catalog; open on the course listing");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSES_CATALOG, COURSES_START_COURSE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    List,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            catalog: env("COURSES_CATALOG")
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            start_course: env("COURSES_START_COURSE").and_then(|value| value.parse().ok()),
            help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCatalog { raw: value });
                    }
                    parsed.catalog = Some(PathBuf::from(value));
                }
                "--course" => {
                    let value = require_value(args, "--course")?;
                    let id: CourseId = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidCourseId { raw: value.clone() })?;
                    parsed.start_course = Some(id);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "app=info,services=info,storage=info".into());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_services(args: &Args) -> Result<AppServices, Box<dyn std::error::Error>> {
    let services = match &args.catalog {
        Some(path) => AppServices::from_catalog_path(path)?,
        None => AppServices::bundled()?,
    };
    Ok(services)
}

fn print_courses(service: &CourseService) {
    for item in service.list_courses() {
        println!(
            "{:<6} {:<40} {:>2} lessons  {:>7}  {}",
            item.id,
            item.title,
            item.lesson_count,
            format_total(item.total_duration_seconds),
            item.instructor
        );
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with('-') {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    init_tracing();
    let services = build_services(&parsed)?;
    let course_service = services.course_service();

    match cmd {
        Command::List => {
            print_courses(&course_service);
            Ok(())
        }
        Command::Ui => {
            if let Some(course_id) = &parsed.start_course {
                if course_service.lookup_course(course_id).is_none() {
                    tracing::warn!(course_id = %course_id, "start course is not in the catalog");
                }
            }

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                course_service,
                start_course: parsed.start_course,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            // Explicitly disable it so the app doesn't behave like a modal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Academy")
                    .with_always_on_top(false),
            );

            tracing::info!("launching desktop ui");
            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
