mod answers;
mod cli;
mod log_util;
mod pool;
mod score;
mod session;
mod stream;
mod ui;

use answers::{AnswerPolicy, AnswerProvider};
use clap::Parser;
use cli::Cli;
use color_eyre::{Result, eyre::WrapErr};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log_util::log_debug;
use pool::{LineFormat, PoolError, PoolLoad, QuestionPool};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::DefaultTerminal;
use session::{InputEvent, Outcome, Session};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};
use stream::QuestionStream;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let format = match cli.pattern.as_deref() {
        Some(pattern) => LineFormat::pattern(pattern)?,
        None => LineFormat::Delimiter(cli.delimiter.clone()),
    };
    let PoolLoad { pool, skipped } = load_pool(cli.infile.as_deref(), &format, cli.preset)?;
    for line in &skipped {
        eprintln!("Skipping incorrectly formatted line: {}", line);
    }
    if pool.is_empty() {
        return Err(PoolError::Empty.into());
    }
    log_debug(&format!(
        "App: loaded {} question(s), skipped {} line(s)",
        pool.len(),
        skipped.len()
    ));

    let stream = QuestionStream::new(&pool, cli.stream_request(), StdRng::from_os_rng());
    let policy = if cli.preset {
        AnswerPolicy::Preset
    } else {
        AnswerPolicy::Randomized {
            choices: cli.choices,
        }
    };
    let provider = AnswerProvider::new(policy, StdRng::from_os_rng());
    let mut session = Session::new(pool, stream, provider, cli.precede.clone());
    if !session.start() {
        println!("No questions to ask.");
        return Ok(());
    }

    let terminal = ratatui::init();
    let mut app = App::new(session);
    let result = app.run(terminal);
    ratatui::restore();
    result?;

    let score = app.session.score();
    println!("Final score: {}/{}", score.correct(), score.answered());
    Ok(())
}

fn load_pool(infile: Option<&Path>, format: &LineFormat, preset: bool) -> Result<PoolLoad> {
    let lines: Vec<String> = match infile {
        Some(path) => {
            let file = File::open(path)
                .wrap_err_with(|| format!("failed to open {}", path.display()))?;
            BufReader::new(file)
                .lines()
                .collect::<io::Result<_>>()
                .wrap_err_with(|| format!("failed to read {}", path.display()))?
        }
        None => io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<_>>()
            .wrap_err("failed to read questions from stdin")?,
    };
    Ok(QuestionPool::from_lines(lines, format, preset))
}

/// Couples the session state machine to the terminal: blocks on crossterm
/// events, translates them to [`InputEvent`]s, and redraws after each one.
struct App {
    session: Session<StdRng>,
    running: bool,
}

impl App {
    fn new(session: Session<StdRng>) -> Self {
        Self {
            session,
            running: false,
        }
    }

    fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.running = true;
        log_debug("App: session started");
        while self.running {
            terminal.draw(|frame| ui::render(frame, &self.session))?;
            if let Some(input) = Self::next_input()? {
                if self.session.handle_event(input) == Outcome::Finished {
                    self.running = false;
                }
            }
        }
        log_debug("App: session finished");
        Ok(())
    }

    /// Block until the next event the session cares about.
    fn next_input() -> Result<Option<InputEvent>> {
        let input = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match (key.modifiers, key.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => {
                        Some(InputEvent::Quit)
                    }
                    (_, KeyCode::Esc | KeyCode::Char('q')) => Some(InputEvent::Quit),
                    (_, KeyCode::Char(c)) => Some(InputEvent::Key(c)),
                    _ => None,
                }
            }
            Event::Resize(_, _) => Some(InputEvent::Resize),
            _ => None,
        };
        Ok(input)
    }
}
