mod intent;
mod quiz_vm;
mod summary_vm;
#[cfg(test)]
pub(crate) mod test_support;

pub use intent::{QuizIntent, apply_intent, intent_for_key};
pub use quiz_vm::{FeedbackVm, OptionVm, QuestionCardVm, QuizScreenVm};
pub use summary_vm::{SummaryVm, tier_message};
