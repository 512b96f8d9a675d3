use super::progress::rounded_percentage;

/// Qualitative bucket for the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackTier {
    /// 90% and above.
    Excellent,
    /// 60% up to 89%.
    Good,
    /// Below 60%.
    KeepPracticing,
}

impl FeedbackTier {
    pub const EXCELLENT_FROM: usize = 90;
    pub const GOOD_FROM: usize = 60;

    #[must_use]
    pub fn from_percentage(percentage: usize) -> Self {
        if percentage >= Self::EXCELLENT_FROM {
            Self::Excellent
        } else if percentage >= Self::GOOD_FROM {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }
}

/// Final result of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
}

impl QuizSummary {
    /// `round(100 * score / total)`.
    #[must_use]
    pub fn percentage(&self) -> usize {
        rounded_percentage(self.score, self.total)
    }

    #[must_use]
    pub fn tier(&self) -> FeedbackTier {
        FeedbackTier::from_percentage(self.percentage())
    }
}
