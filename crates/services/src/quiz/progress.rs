/// Position of the current question within the session, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
}

impl QuizProgress {
    /// `position / total`, in `(0, 1]`; `0.0` when `total` is zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.position as f64 / self.total as f64
    }

    /// Fraction as a whole percentage, rounded half up.
    #[must_use]
    pub fn percent(&self) -> usize {
        rounded_percentage(self.position, self.total)
    }
}

/// `round(100 * part / whole)` with halves rounded up, in integer arithmetic.
///
/// An empty whole yields 0.
pub(crate) fn rounded_percentage(part: usize, whole: usize) -> usize {
    if whole == 0 {
        return 0;
    }
    (200 * part + whole) / (2 * whole)
}
