/// Running tally of questions answered and answered correctly.
///
/// Counters only ever grow; `correct` can never exceed `answered` because the
/// only mutator bumps `answered` unconditionally.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreTracker {
    answered: u32,
    correct: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fully-resolved question.
    pub fn increment(&mut self, is_correct: bool) {
        self.answered += 1;
        if is_correct {
            self.correct += 1;
        }
    }

    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_counts_correct_and_incorrect_separately() {
        let mut score = ScoreTracker::new();
        score.increment(true);
        score.increment(false);
        assert_eq!(score.answered(), 2);
        assert_eq!(score.correct(), 1);
    }

    #[test]
    fn new_tracker_starts_at_zero() {
        let score = ScoreTracker::new();
        assert_eq!(score.answered(), 0);
        assert_eq!(score.correct(), 0);
    }
}
