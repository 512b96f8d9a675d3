use services::{FeedbackTier, QuizSummary};

const REVIEW_TIPS: [&str; 3] = [
    "Go back over non-finite verbs and the different kinds of clauses.",
    "Keep a notebook of the questions you missed and revisit it regularly.",
    "Read original English texts to build an ear for the grammar.",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub score: usize,
    pub total: usize,
    pub percentage: usize,
    pub tier: FeedbackTier,
    pub message: &'static str,
    pub tips: &'static [&'static str],
}

impl SummaryVm {
    #[must_use]
    pub fn from_summary(summary: &QuizSummary) -> Self {
        let tier = summary.tier();
        Self {
            score: summary.score,
            total: summary.total,
            percentage: summary.percentage(),
            tier,
            message: tier_message(tier),
            tips: &REVIEW_TIPS,
        }
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.score, self.total)
    }
}

#[must_use]
pub fn tier_message(tier: FeedbackTier) -> &'static str {
    match tier {
        FeedbackTier::Excellent => "Excellent! Your grammar foundations are really solid!",
        FeedbackTier::Good => {
            "Nice work! Keep it up, and reviewing the questions you missed will help."
        }
        FeedbackTier::KeepPracticing => {
            "Don't be discouraged. Grammar takes practice, and you can do it!"
        }
    }
}
