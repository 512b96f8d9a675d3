use std::sync::Arc;

use quiz_core::dataset;
use services::QuizSession;

pub(crate) fn builtin_session() -> QuizSession {
    QuizSession::new(Arc::new(dataset::builtin().expect("bundled bank")))
}
