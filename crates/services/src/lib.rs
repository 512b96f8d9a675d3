#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use error::QuizError;
pub use quiz::{
    BlankStatus, FeedbackTier, OptionStatus, OptionView, QuizPhase, QuizProgress, QuizSession,
    QuizSummary, SessionState,
};
