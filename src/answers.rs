use crate::pool::QuestionPool;
use rand::{Rng, seq::SliceRandom};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    #[error("question '{0}' is not in the question pool")]
    QuestionNotFound(String),
}

/// How answer choices for a question are assembled.
#[derive(Debug, Clone, Copy)]
pub enum AnswerPolicy {
    /// Distractors are other questions' correct answers, sampled without
    /// replacement; the correct answer lands at a random index.
    Randomized { choices: usize },
    /// The question's stored answer list, shuffled whole.
    Preset,
}

/// Produces the answer-choice set shown for each question.
///
/// Owns its RNG so tests can seed it and assert exact draws.
#[derive(Debug)]
pub struct AnswerProvider<R: Rng> {
    policy: AnswerPolicy,
    rng: R,
}

impl<R: Rng> AnswerProvider<R> {
    pub fn new(policy: AnswerPolicy, rng: R) -> Self {
        Self { policy, rng }
    }

    /// Build a fresh choice set for `question`.
    ///
    /// The result always contains the correct answer exactly once and no
    /// duplicate strings. Under [`AnswerPolicy::Randomized`] the requested
    /// choice count clamps down to the pool size, and further down when fewer
    /// distinct distractors exist.
    pub fn get_answers(
        &mut self,
        pool: &QuestionPool,
        question: &str,
    ) -> Result<Vec<String>, AnswerError> {
        match self.policy {
            AnswerPolicy::Randomized { choices } => self.randomized(pool, question, choices),
            AnswerPolicy::Preset => self.preset(pool, question),
        }
    }

    fn randomized(
        &mut self,
        pool: &QuestionPool,
        question: &str,
        choices: usize,
    ) -> Result<Vec<String>, AnswerError> {
        let correct = pool
            .correct_answer(question)
            .ok_or_else(|| AnswerError::QuestionNotFound(question.to_string()))?
            .to_string();
        let wanted = choices.min(pool.len());

        // Sorted set so a seeded RNG draws reproducibly regardless of pool
        // hash order; the set difference also removes duplicate answers.
        let candidates: Vec<&str> = pool
            .iter()
            .map(|(_, answer)| answer)
            .filter(|answer| *answer != correct)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let distractors = wanted.saturating_sub(1).min(candidates.len());
        let mut answers: Vec<String> = rand::seq::index::sample(
            &mut self.rng,
            candidates.len(),
            distractors,
        )
        .into_iter()
        .map(|index| candidates[index].to_string())
        .collect();

        let slot = self.rng.random_range(0..=answers.len());
        answers.insert(slot, correct);
        Ok(answers)
    }

    fn preset(&mut self, pool: &QuestionPool, question: &str) -> Result<Vec<String>, AnswerError> {
        let mut answers = pool
            .answers(question)
            .ok_or_else(|| AnswerError::QuestionNotFound(question.to_string()))?
            .to_vec();
        answers.shuffle(&mut self.rng);
        Ok(answers)
    }
}
