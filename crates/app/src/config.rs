use std::fmt;
use std::path::{Path, PathBuf};

use clap::Parser;
use quiz_core::dataset;
use quiz_core::model::{QuestionSet, QuestionSetError};
use thiserror::Error;

pub const DEFAULT_TITLE: &str = "Grammar Drill";

#[derive(Debug, Parser)]
#[command(name = "grammar-drill", about = "Fill-in-the-blank grammar quiz.")]
pub struct Cli {
    /// JSON question bank to use instead of the bundled one
    #[arg(long, env = "GRAMMAR_QUIZ_QUESTIONS", value_name = "PATH")]
    pub questions: Option<PathBuf>,

    /// Window and header title
    #[arg(long, env = "GRAMMAR_QUIZ_TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Validate the question bank and exit without opening a window
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("failed to read question bank {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid question bank ({origin}): {source}")]
    Questions {
        origin: QuestionSource,
        #[source]
        source: QuestionSetError,
    },
    #[error("--title cannot be empty")]
    EmptyTitle,
}

/// Where the question bank comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSource::Builtin => f.write_str("built-in"),
            QuestionSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Validated startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub title: String,
    pub source: QuestionSource,
    pub check_only: bool,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `AppError::EmptyTitle` for a blank title.
    pub fn from_cli(cli: Cli) -> Result<Self, AppError> {
        let title = cli.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::EmptyTitle);
        }
        let source = cli
            .questions
            .map_or(QuestionSource::Builtin, QuestionSource::File);

        Ok(Self {
            title,
            source,
            check_only: cli.check,
        })
    }
}

/// Load and validate the configured question bank.
///
/// # Errors
///
/// Returns `AppError::Read` if the file cannot be read and
/// `AppError::Questions` if its contents do not form a valid bank.
pub fn load_questions(source: &QuestionSource) -> Result<QuestionSet, AppError> {
    let loaded = match source {
        QuestionSource::Builtin => dataset::builtin(),
        QuestionSource::File(path) => QuestionSet::from_json_str(&read_bank(path)?),
    };
    loaded.map_err(|source_err| AppError::Questions {
        origin: source.clone(),
        source: source_err,
    })
}

fn read_bank(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}
