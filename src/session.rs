use crate::{
    answers::AnswerProvider,
    log_util::log_debug,
    pool::QuestionPool,
    score::ScoreTracker,
    stream::{QuestionItem, QuestionStream},
};
use rand::Rng;

/// Placeholder choice shown when answer provisioning fails for a question.
/// It never equals the correct answer, so picking it always scores as wrong.
const UNKNOWN_CHOICE: &str = "???";

/// A discrete event fed into the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(char),
    Resize,
    Quit,
}

/// Visual feedback state of one answer choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    None,
    Correct,
    Incorrect,
}

/// What the caller should do after an event has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Event was absorbed; no visible change.
    Continue,
    /// Session state changed (or a resize arrived); draw again.
    Redraw,
    /// The session is over; the final score is still readable.
    Finished,
}

#[derive(Debug)]
struct ActiveQuestion {
    question: String,
    correct_answer: String,
    choices: Vec<String>,
    highlights: Vec<Highlight>,
    answer_chosen: bool,
}

/// Drives one interactive quiz run: pulls questions from the stream, builds
/// choice sets, interprets keystrokes, and keeps the running score.
///
/// The session never touches a terminal; callers feed it [`InputEvent`]s and
/// render from its accessors, so tests drive it with scripted events.
#[derive(Debug)]
pub struct Session<R: Rng> {
    pool: QuestionPool,
    stream: QuestionStream<R>,
    provider: AnswerProvider<R>,
    score: ScoreTracker,
    precede: String,
    question_no: usize,
    current: Option<ActiveQuestion>,
}

impl<R: Rng> Session<R> {
    pub fn new(
        pool: QuestionPool,
        stream: QuestionStream<R>,
        provider: AnswerProvider<R>,
        precede: String,
    ) -> Self {
        Self {
            pool,
            stream,
            provider,
            score: ScoreTracker::new(),
            precede,
            question_no: 0,
            current: None,
        }
    }

    /// Pull the first question. Returns false if the stream was empty.
    pub fn start(&mut self) -> bool {
        self.advance()
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::Quit => {
                log_debug("Session: quit requested");
                self.current = None;
                Outcome::Finished
            }
            InputEvent::Resize => Outcome::Redraw,
            InputEvent::Key(key) => self.on_key(key),
        }
    }

    fn on_key(&mut self, key: char) -> Outcome {
        let Some(active) = self.current.as_ref() else {
            return Outcome::Finished;
        };
        if let Some(digit) = key.to_digit(10) {
            let digit = digit as usize;
            if !active.answer_chosen && (1..=active.choices.len()).contains(&digit) {
                self.select(digit - 1);
                return Outcome::Redraw;
            }
            // Out-of-range digits, and digits after an answer, do nothing.
            return Outcome::Continue;
        }
        if active.answer_chosen {
            return if self.advance() {
                Outcome::Redraw
            } else {
                log_debug("Session: question stream exhausted");
                Outcome::Finished
            };
        }
        Outcome::Continue
    }

    /// Resolve the choice at `index` for the active question.
    fn select(&mut self, index: usize) {
        let Some(active) = self.current.as_mut() else {
            return;
        };
        let correct_index = active
            .choices
            .iter()
            .position(|choice| *choice == active.correct_answer);
        if let Some(correct_index) = correct_index {
            active.highlights[correct_index] = Highlight::Correct;
        }
        let is_correct = correct_index == Some(index);
        if !is_correct {
            active.highlights[index] = Highlight::Incorrect;
        }
        active.answer_chosen = true;
        self.score.increment(is_correct);
        log_debug(&format!(
            "Session: question {} answered (correct: {}), score {}/{}",
            self.question_no,
            is_correct,
            self.score.correct(),
            self.score.answered()
        ));
    }

    /// Move to the next stream item, rebuilding per-question state.
    fn advance(&mut self) -> bool {
        let Some(QuestionItem { question, answer }) = self.stream.next() else {
            self.current = None;
            return false;
        };
        self.question_no += 1;
        let choices = match self.provider.get_answers(&self.pool, &question) {
            Ok(choices) => choices,
            Err(err) => {
                log_debug(&format!("Session: answer provisioning failed: {}", err));
                vec![UNKNOWN_CHOICE.to_string()]
            }
        };
        let highlights = vec![Highlight::None; choices.len()];
        log_debug(&format!("Session: asking question {}", self.question_no));
        self.current = Some(ActiveQuestion {
            question,
            correct_answer: answer,
            choices,
            highlights,
            answer_chosen: false,
        });
        true
    }

    pub fn question(&self) -> Option<&str> {
        self.current.as_ref().map(|active| active.question.as_str())
    }

    pub fn question_number(&self) -> usize {
        self.question_no
    }

    pub fn precede(&self) -> &str {
        &self.precede
    }

    pub fn choices(&self) -> &[String] {
        self.current
            .as_ref()
            .map(|active| active.choices.as_slice())
            .unwrap_or_default()
    }

    pub fn highlights(&self) -> &[Highlight] {
        self.current
            .as_ref()
            .map(|active| active.highlights.as_slice())
            .unwrap_or_default()
    }

    pub fn answer_chosen(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|active| active.answer_chosen)
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }
}
