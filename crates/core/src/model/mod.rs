mod ids;
mod question;
mod question_set;

pub use ids::{ParseIdError, QuestionId};
pub use question::{Difficulty, Explanation, Question, QuestionDraft, QuestionError};
pub use question_set::{QuestionSet, QuestionSetError};
