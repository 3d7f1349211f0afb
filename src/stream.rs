use crate::pool::QuestionPool;
use rand::{Rng, seq::IndexedRandom};

/// Placeholder yielded by an endless stream over an empty pool.
pub const FALLBACK_QUESTION: &str = "???";
pub const FALLBACK_ANSWER: &str = "???";

/// One question to ask, paired with its correct answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionItem {
    pub question: String,
    pub answer: String,
}

/// Which questions a session asks, and in what order.
#[derive(Debug, Clone, Copy)]
pub enum StreamRequest {
    /// At most `n` distinct questions, drawn without replacement.
    Bounded(usize),
    /// Every question once, in pool insertion order.
    Ordered,
    /// Random questions with replacement, forever.
    Endless,
}

/// Lazy sequence of `(question, answer)` pairs over a pool snapshot.
///
/// The pool is copied at construction, so later pool mutation cannot affect
/// an existing stream. Bounded and ordered streams are finite iterators;
/// an endless stream never returns `None`.
#[derive(Debug)]
pub struct QuestionStream<R: Rng> {
    items: Vec<QuestionItem>,
    endless: bool,
    cursor: usize,
    rng: R,
}

impl<R: Rng> QuestionStream<R> {
    pub fn new(pool: &QuestionPool, request: StreamRequest, mut rng: R) -> Self {
        let snapshot: Vec<QuestionItem> = pool
            .iter()
            .map(|(question, answer)| QuestionItem {
                question: question.to_string(),
                answer: answer.to_string(),
            })
            .collect();

        match request {
            StreamRequest::Bounded(count) => {
                let drawn = count.min(snapshot.len());
                let items = rand::seq::index::sample(&mut rng, snapshot.len(), drawn)
                    .into_iter()
                    .map(|index| snapshot[index].clone())
                    .collect();
                Self {
                    items,
                    endless: false,
                    cursor: 0,
                    rng,
                }
            }
            StreamRequest::Ordered => Self {
                items: snapshot,
                endless: false,
                cursor: 0,
                rng,
            },
            StreamRequest::Endless => Self {
                items: snapshot,
                endless: true,
                cursor: 0,
                rng,
            },
        }
    }
}

impl<R: Rng> Iterator for QuestionStream<R> {
    type Item = QuestionItem;

    fn next(&mut self) -> Option<QuestionItem> {
        if self.endless {
            return Some(self.items.choose(&mut self.rng).cloned().unwrap_or_else(
                || QuestionItem {
                    question: FALLBACK_QUESTION.to_string(),
                    answer: FALLBACK_ANSWER.to_string(),
                },
            ));
        }
        let item = self.items.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{LineFormat, QuestionPool};
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    fn pool_of(lines: &[&str]) -> QuestionPool {
        QuestionPool::from_lines(lines, &LineFormat::Delimiter("\t".to_string()), false).pool
    }

    #[test]
    fn bounded_stream_never_repeats_a_question() {
        let pool = pool_of(&["a\t1", "b\t2", "c\t3", "d\t4"]);
        let stream = QuestionStream::new(&pool, StreamRequest::Bounded(3), StdRng::seed_from_u64(5));
        let questions: Vec<String> = stream.map(|item| item.question).collect();
        assert_eq!(questions.len(), 3);
        let distinct: HashSet<_> = questions.iter().collect();
        assert_eq!(distinct.len(), 3);
    }

    #[test]
    fn bounded_stream_clamps_to_pool_size() {
        let pool = pool_of(&["a\t1", "b\t2", "c\t3"]);
        let stream =
            QuestionStream::new(&pool, StreamRequest::Bounded(10), StdRng::seed_from_u64(9));
        let questions: HashSet<String> = stream.map(|item| item.question).collect();
        assert_eq!(
            questions,
            ["a", "b", "c"].map(String::from).into_iter().collect()
        );
    }

    #[test]
    fn ordered_stream_preserves_insertion_order() {
        let pool = pool_of(&["first\t1", "second\t2", "third\t3"]);
        let stream = QuestionStream::new(&pool, StreamRequest::Ordered, StdRng::seed_from_u64(0));
        let items: Vec<(String, String)> =
            stream.map(|item| (item.question, item.answer)).collect();
        assert_eq!(
            items,
            vec![
                ("first".to_string(), "1".to_string()),
                ("second".to_string(), "2".to_string()),
                ("third".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn endless_stream_keeps_yielding_pool_questions() {
        let pool = pool_of(&["a\t1", "b\t2"]);
        let mut stream =
            QuestionStream::new(&pool, StreamRequest::Endless, StdRng::seed_from_u64(11));
        for _ in 0..50 {
            let item = stream.next().expect("endless stream never ends");
            assert!(pool.contains(&item.question));
        }
    }

    #[test]
    fn endless_stream_over_empty_pool_yields_the_fallback_pair() {
        let pool = QuestionPool::new();
        let mut stream =
            QuestionStream::new(&pool, StreamRequest::Endless, StdRng::seed_from_u64(0));
        for _ in 0..20 {
            let item = stream.next().unwrap();
            assert_eq!(item.question, FALLBACK_QUESTION);
            assert_eq!(item.answer, FALLBACK_ANSWER);
        }
    }
}
