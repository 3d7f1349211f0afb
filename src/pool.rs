use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("input is empty or has no lines in the expected format")]
    Empty,
    #[error("pattern must contain exactly two capture groups (question, answer), found {found}")]
    BadGroupCount { found: usize },
    #[error("invalid pattern: {0}")]
    BadPattern(#[from] regex::Error),
}

/// How a raw input line is split into a question and its answers.
#[derive(Debug, Clone)]
pub enum LineFormat {
    /// Split the line on a delimiter. Randomized mode takes everything after
    /// the first occurrence as the answer; preset mode splits every field.
    Delimiter(String),
    /// Extract question and answer via two regex capture groups.
    Pattern(Regex),
}

impl LineFormat {
    pub fn pattern(pattern: &str) -> Result<Self, PoolError> {
        let regex = Regex::new(pattern)?;
        // captures_len counts the implicit whole-match group.
        let found = regex.captures_len() - 1;
        if found != 2 {
            return Err(PoolError::BadGroupCount { found });
        }
        Ok(Self::Pattern(regex))
    }
}

/// Insertion-ordered mapping from question text to its answer list.
///
/// The first answer in each list is the correct one; Randomized-mode input
/// produces single-element lists. Duplicate questions overwrite the stored
/// answers but keep their original position. Immutable once built.
#[derive(Debug, Default)]
pub struct QuestionPool {
    order: Vec<String>,
    answers: HashMap<String, Vec<String>>,
}

/// A freshly parsed pool together with the lines that did not parse.
#[derive(Debug)]
pub struct PoolLoad {
    pub pool: QuestionPool,
    pub skipped: Vec<String>,
}

impl QuestionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from raw input lines.
    ///
    /// With `preset` every delimited field after the question becomes an
    /// answer choice; otherwise only the first split is taken and the rest of
    /// the line is the single correct answer. Lines that produce no answer are
    /// collected in [`PoolLoad::skipped`] rather than failing the load.
    pub fn from_lines<I, S>(lines: I, format: &LineFormat, preset: bool) -> PoolLoad
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool = Self::new();
        let mut skipped = Vec::new();
        for line in lines {
            let line = line.as_ref().trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                continue;
            }
            match Self::parse_line(line, format, preset) {
                Some((question, answers)) => pool.insert(question, answers),
                None => skipped.push(line.to_string()),
            }
        }
        PoolLoad { pool, skipped }
    }

    fn parse_line(line: &str, format: &LineFormat, preset: bool) -> Option<(String, Vec<String>)> {
        match format {
            LineFormat::Delimiter(delimiter) => {
                if preset {
                    let mut fields = line.split(delimiter.as_str()).map(str::to_string);
                    let question = fields.next()?;
                    let answers: Vec<String> = fields.collect();
                    (!answers.is_empty()).then_some((question, answers))
                } else {
                    let (question, answer) = line.split_once(delimiter.as_str())?;
                    (!answer.is_empty())
                        .then(|| (question.to_string(), vec![answer.to_string()]))
                }
            }
            LineFormat::Pattern(regex) => {
                let captures = regex.captures(line)?;
                let question = captures.get(1)?.as_str().to_string();
                let answer = captures.get(2)?.as_str().to_string();
                Some((question, vec![answer]))
            }
        }
    }

    fn insert(&mut self, question: String, answers: Vec<String>) {
        if !self.answers.contains_key(&question) {
            self.order.push(question.clone());
        }
        self.answers.insert(question, answers);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, question: &str) -> bool {
        self.answers.contains_key(question)
    }

    /// Full stored answer list for a question, correct answer first.
    pub fn answers(&self, question: &str) -> Option<&[String]> {
        self.answers.get(question).map(Vec::as_slice)
    }

    pub fn correct_answer(&self, question: &str) -> Option<&str> {
        self.answers
            .get(question)
            .and_then(|answers| answers.first())
            .map(String::as_str)
    }

    /// Questions paired with their correct answers, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().filter_map(|question| {
            self.correct_answer(question)
                .map(|answer| (question.as_str(), answer))
        })
    }
}
