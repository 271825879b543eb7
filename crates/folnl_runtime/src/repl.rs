//! The interactive REPL.
//!
//! Plain lines are translated in whichever direction they look like: lines
//! holding logic symbols (or their ASCII spellings) are read as formulas,
//! everything else as English. Lines starting with `:` are commands.

use std::fmt::Write as _;
use std::io::{self, Write};

use folnl_foundation::{Error, ErrorKind, Result};
use folnl_translator::{Direction, Translator};
use tracing::debug;

use crate::config::RuntimeConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor, open_parens};
use crate::notation;
use crate::practice::{Challenge, ChallengeManager, PracticeMode};
use crate::serialize;
use crate::session::{Outcome, Session};

const HELP: &str = "\
Enter an English sentence or a formula to translate it.

Commands:
  :nl TEXT          Translate TEXT from English to a formula
  :fol FORMULA      Translate FORMULA to English
  :history          Show this session's translations
  :save PATH        Save the session transcript
  :load PATH        Replace the transcript with a saved one
  :clear            Forget the transcript
  :practice [MODE]  Start a block exercise (nl2fol, fol2nl, mixed)
  :answer N N ...   Answer the exercise with block numbers in order
  :help             Show this help
  :quit             Leave the REPL

ASCII spellings: forall exists ~ & | -> <->";

/// What evaluating one line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print.
    Text(String),
    /// Nothing to print.
    Silent,
    /// Leave the REPL.
    Quit,
}

/// Interactive translator bound to a line editor.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,

    /// Translator over the standard vocabulary.
    translator: Translator<'static>,

    /// Transcript of translations.
    session: Session,

    /// Block exercises.
    practice: ChallengeManager,

    /// The exercise `:answer` refers to.
    current: Option<Challenge>,

    config: RuntimeConfig,
}

/// Shown while an entry still has unclosed parentheses.
const CONTINUATION_PROMPT: &str = ".. ";

impl Repl<RustylineEditor> {
    /// Opens a terminal REPL.
    ///
    /// # Errors
    ///
    /// Fails when the terminal editor cannot be set up.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_size)?;
        Ok(Self::with_editor(editor, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Builds a REPL reading from `editor`.
    pub fn with_editor(editor: E, config: RuntimeConfig) -> Self {
        let practice = match config.practice_seed {
            Some(seed) => ChallengeManager::with_seed(config.practice_capacity, seed),
            None => ChallengeManager::new(config.practice_capacity),
        };
        Self {
            editor,
            translator: Translator::standard(),
            session: Session::new(),
            practice,
            current: None,
            config,
        }
    }

    /// Resumes from an existing transcript.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Returns the transcript so far.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the practice manager.
    #[must_use]
    pub const fn practice(&self) -> &ChallengeManager {
        &self.practice
    }

    /// Returns the open exercise, if any.
    #[must_use]
    pub const fn current_challenge(&self) -> Option<&Challenge> {
        self.current.as_ref()
    }

    /// Runs the REPL loop until `:quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => print_error(&e),
            }
        }

        println!("\nbye");
        Ok(())
    }

    /// Handles one entry. `Ok(false)` ends the loop.
    fn read_eval_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            return Ok(false);
        };

        let entry = input.trim();
        if entry.is_empty() {
            return Ok(true);
        }
        self.editor.add_history(entry);

        match self.eval(entry) {
            Ok(Reply::Text(text)) => println!("{text}"),
            Ok(Reply::Silent) => {}
            Ok(Reply::Quit) => return Ok(false),
            Err(e) => print_error(&e),
        }
        Ok(true)
    }

    /// Reads one entry, continuing while parentheses are open.
    ///
    /// `None` means input ended before an entry started.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut lines: Vec<String> = Vec::new();

        loop {
            let prompt = if lines.is_empty() {
                self.config.prompt.as_str()
            } else {
                CONTINUATION_PROMPT
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    lines.push(line);
                    let entry = lines.join(" ");
                    if open_parens(&entry) <= 0 {
                        return Ok(Some(entry));
                    }
                }
                ReadResult::Interrupted if lines.is_empty() => return Ok(Some(String::new())),
                ReadResult::Interrupted => {
                    println!("\n(entry discarded)");
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof if lines.is_empty() => return Ok(None),
                ReadResult::Eof => {
                    return Err(Error::new(ErrorKind::Io(format!(
                        "input ended with {} unclosed parenthesis(es)",
                        open_parens(&lines.join(" "))
                    ))));
                }
            }
        }
    }

    /// Evaluates one line: a command or a translation.
    ///
    /// # Errors
    ///
    /// Returns translation errors and command misuse.
    pub fn eval(&mut self, line: &str) -> Result<Reply> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Reply::Silent);
        }
        if line.starts_with(':') {
            let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
            return self.command(command, rest.trim());
        }

        if notation::looks_like_formula(line) {
            self.translate(Direction::FolToNl, line)
        } else {
            self.translate(Direction::NlToFol, line)
        }
    }

    fn command(&mut self, command: &str, arg: &str) -> Result<Reply> {
        debug!(command, arg, "repl command");
        match command {
            ":nl" => self.translate(Direction::NlToFol, required(arg, ":nl TEXT")?),
            ":fol" => self.translate(Direction::FolToNl, required(arg, ":fol FORMULA")?),
            ":history" | ":h" => Ok(Reply::Text(self.history())),
            ":save" => {
                let path = required(arg, ":save PATH")?;
                serialize::save_to_file(&self.session, path)?;
                Ok(Reply::Text(format!(
                    "Saved {} entries to {path}",
                    self.session.len()
                )))
            }
            ":load" => {
                let path = required(arg, ":load PATH")?;
                self.session = serialize::load_from_file(path)?;
                Ok(Reply::Text(format!(
                    "Loaded {} entries from {path}",
                    self.session.len()
                )))
            }
            ":clear" => {
                self.session.clear();
                Ok(Reply::Silent)
            }
            ":practice" | ":p" => self.start_practice(arg),
            ":answer" | ":a" => self.answer(arg),
            ":help" | ":?" => Ok(Reply::Text(HELP.to_string())),
            ":quit" | ":q" | ":exit" => Ok(Reply::Quit),
            other => Err(Error::usage(format!(
                "unknown command: {other} (try :help)"
            ))),
        }
    }

    fn translate(&mut self, direction: Direction, text: &str) -> Result<Reply> {
        let text = match direction {
            Direction::FolToNl => notation::to_symbols(text),
            Direction::NlToFol => text.to_string(),
        };
        self.session
            .translate(&self.translator, direction, &text)
            .map(Reply::Text)
    }

    fn history(&self) -> String {
        if self.session.is_empty() {
            return "(no translations yet)".to_string();
        }
        let mut out = String::new();
        for (i, entry) in self.session.entries().iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = write!(out, "{:>3}. [{}] {}", i + 1, entry.direction, entry.input);
            let _ = match &entry.outcome {
                Outcome::Translated(text) => write!(out, "\n     => {text}"),
                Outcome::Failed(message) => write!(out, "\n     error: {message}"),
            };
        }
        out
    }

    fn start_practice(&mut self, arg: &str) -> Result<Reply> {
        let mode = if arg.is_empty() {
            PracticeMode::default()
        } else {
            arg.parse::<PracticeMode>()
                .map_err(|e| Error::usage(e.to_string()))?
        };
        let challenge = self.practice.create_challenge(mode);
        let text = describe(&challenge);
        self.current = Some(challenge);
        Ok(Reply::Text(text))
    }

    fn answer(&mut self, arg: &str) -> Result<Reply> {
        let Some(challenge) = &self.current else {
            return Err(Error::usage("no exercise in progress (start one with :practice)"));
        };

        let mut selection = Vec::new();
        for number in arg
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
        {
            let block = number
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| challenge.blocks.get(i))
                .ok_or_else(|| Error::usage(format!("no block numbered {number}")))?;
            selection.push(block.id.clone());
        }

        let Some(verdict) = self.practice.verify(&challenge.id, &selection) else {
            self.current = None;
            return Err(Error::usage(
                "that exercise has expired (start a new one with :practice)",
            ));
        };

        if verdict.correct {
            self.current = None;
        }
        Ok(Reply::Text(match verdict.expected {
            Some(expected) => format!("{}\n  {expected}", verdict.message),
            None => verdict.message,
        }))
    }
}

/// Returns `arg` or a usage error naming `usage`.
fn required<'a>(arg: &'a str, usage: &str) -> Result<&'a str> {
    if arg.is_empty() {
        Err(Error::usage(format!("usage: {usage}")))
    } else {
        Ok(arg)
    }
}

/// Formats an exercise with numbered blocks.
fn describe(challenge: &Challenge) -> String {
    let mut out = format!(
        "{}: {}\n{}\n",
        challenge.label(),
        challenge.prompt,
        challenge.instructions
    );
    for (i, block) in challenge.blocks.iter().enumerate() {
        let _ = write!(out, " [{}] {}", i + 1, block.text);
    }
    let _ = write!(
        out,
        "\nAnswer with :answer and the {} block numbers in order.",
        challenge.block_count()
    );
    out
}

/// Reports a failed entry on stderr.
fn print_error(error: &Error) {
    eprintln!("\x1b[31merror: {error}\x1b[0m");
}

/// Greets the user and lists the main commands.
fn print_banner() {
    println!("\x1b[1;36mfolnl\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
    println!("Translate between English and first-order logic.");
    println!("Type :help for commands. Use Ctrl+D to exit.\n");
    let _ = io::stdout().flush();
}
