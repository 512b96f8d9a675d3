mod config;

use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{Difficulty, QuestionSet};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

use crate::config::{AppConfig, AppError, Cli, load_questions};

struct DesktopApp {
    title: String,
    questions: Arc<QuestionSet>,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn questions(&self) -> Arc<QuestionSet> {
        Arc::clone(&self.questions)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_report(config: &AppConfig, questions: &QuestionSet) {
    println!("{}: {} questions OK", config.source, questions.len());
    for difficulty in Difficulty::ALL {
        let count = questions
            .iter()
            .filter(|question| question.difficulty() == difficulty)
            .count();
        println!("  {:<13}{count}", difficulty.label());
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::from_cli(Cli::parse())?;

    // Validate the whole bank before any window exists.
    let questions = Arc::new(load_questions(&config.source)?);
    info!(
        source = %config.source,
        count = questions.len(),
        "question bank loaded"
    );

    if config.check_only {
        print_report(&config, &questions);
        return Ok(());
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: config.title.clone(),
        questions,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(config.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
