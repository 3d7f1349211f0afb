use crate::stream::StreamRequest;
use clap::Parser;
use std::path::PathBuf;

/// Answer questions from a text file using the number keys.
///
/// Questions and their answers sit on the same line, split by a common
/// delimiter or matched by a regex with two capture groups. Answer choices
/// for a question are sampled from the other questions' answers unless
/// --preset supplies them per line.
#[derive(Debug, Parser)]
#[command(name = "termquiz")]
pub struct Cli {
    /// File to read questions from; stdin when omitted.
    pub infile: Option<PathBuf>,

    /// Delimiter dividing the question and answer(s) on each line.
    #[arg(short, long, default_value = "\t")]
    pub delimiter: String,

    /// Regex with two capture groups extracting the question and answer.
    #[arg(short = 'x', long, conflicts_with_all = ["delimiter", "preset"])]
    pub pattern: Option<String>,

    /// Treat the fields after the question as that question's full answer
    /// list, correct answer first.
    #[arg(long)]
    pub preset: bool,

    /// Prepend this string to every question.
    #[arg(short, long, default_value = "")]
    pub precede: String,

    /// Number of answers to choose from per question.
    #[arg(short, long, default_value_t = 3, value_parser = positive_usize)]
    pub choices: usize,

    /// Number of questions to ask, without duplicates. Capped at the number
    /// of questions in the input.
    #[arg(short = 'n', long, default_value_t = 10, value_parser = positive_usize, group = "amount")]
    pub questions: usize,

    /// Ask every question in the input, preserving input order.
    #[arg(short, long, group = "amount")]
    pub all: bool,

    /// Keep asking random questions until quit.
    #[arg(short, long, group = "amount")]
    pub endless: bool,
}

impl Cli {
    pub fn stream_request(&self) -> StreamRequest {
        if self.endless {
            StreamRequest::Endless
        } else if self.all {
            StreamRequest::Ordered
        } else {
            StreamRequest::Bounded(self.questions)
        }
    }
}

fn positive_usize(value: &str) -> Result<usize, String> {
    let parsed: usize = value
        .parse()
        .map_err(|_| format!("invalid int value: '{value}'"))?;
    if parsed == 0 {
        return Err(format!("expected a positive integer but got: '{value}'"));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_ask_ten_bounded_questions_with_three_choices() {
        let cli = Cli::parse_from(["termquiz"]);
        assert_eq!(cli.choices, 3);
        assert!(matches!(cli.stream_request(), StreamRequest::Bounded(10)));
        assert_eq!(cli.delimiter, "\t");
        assert!(!cli.preset);
    }

    #[test]
    fn amount_flags_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["termquiz", "-a", "-e"]).is_err());
        assert!(Cli::try_parse_from(["termquiz", "-n", "5", "-a"]).is_err());
    }

    #[test]
    fn pattern_conflicts_with_delimiter_and_preset() {
        assert!(Cli::try_parse_from(["termquiz", "-x", "(a)(b)", "-d", ","]).is_err());
        assert!(Cli::try_parse_from(["termquiz", "-x", "(a)(b)", "--preset"]).is_err());
        assert!(Cli::try_parse_from(["termquiz", "-x", "(a)(b)"]).is_ok());
    }

    #[test]
    fn counts_must_be_positive() {
        assert!(Cli::try_parse_from(["termquiz", "-c", "0"]).is_err());
        assert!(Cli::try_parse_from(["termquiz", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["termquiz", "-c", "nope"]).is_err());
    }

    #[test]
    fn endless_and_all_map_to_their_stream_modes() {
        let endless = Cli::parse_from(["termquiz", "-e"]);
        assert!(matches!(endless.stream_request(), StreamRequest::Endless));
        let all = Cli::parse_from(["termquiz", "--all"]);
        assert!(matches!(all.stream_request(), StreamRequest::Ordered));
    }
}
