mod progress;
mod session;
mod state;
mod summary;
mod view;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use progress::QuizProgress;
pub use session::QuizSession;
pub use state::SessionState;
pub use summary::{FeedbackTier, QuizSummary};
pub use view::{BlankStatus, OptionStatus, OptionView, QuizPhase};
