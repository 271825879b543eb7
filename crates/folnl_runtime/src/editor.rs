//! Terminal input for the folnl REPL.
//!
//! The REPL reads through the [`LineEditor`] trait so tests can script
//! input; [`RustylineEditor`] is the terminal implementation.

use std::borrow::Cow;

use folnl_foundation::{Error, ErrorKind, Result};
use folnl_vocabulary::stdlib;
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};

use crate::highlight::FormulaHighlighter;

/// What one call to [`LineEditor::read_line`] produced.
#[derive(Debug)]
pub enum ReadResult {
    /// The entered text.
    Line(String),
    /// Ctrl+C; the current entry is abandoned.
    Interrupted,
    /// Ctrl+D or closed input.
    Eof,
}

/// Source of REPL input lines.
pub trait LineEditor {
    /// Shows `prompt` and waits for one line.
    ///
    /// # Errors
    ///
    /// Fails when the terminal cannot be read.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Remembers an entry for history navigation and hints.
    fn add_history(&mut self, line: &str);
}

/// REPL command names offered for completion.
pub const COMMANDS: &[&str] = &[
    ":nl", ":fol", ":history", ":save", ":load", ":clear", ":practice", ":answer", ":help",
    ":quit",
];

/// Commands whose argument is a file path.
const PATH_COMMANDS: &[&str] = &[":save", ":load"];

#[derive(Helper, Completer, Hinter, RLValidator)]
struct FolnlHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: ParenValidator,
    highlighter: FormulaHighlighter,
}

impl Highlighter for FolnlHelper {
    fn highlight<'l>(&self, line: &'l str, cursor: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, cursor)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;34m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2;3m{hint}\x1b[0m"))
    }
}

/// Completes REPL commands, predicate and constant names, and file paths
/// after `:save`/`:load`.
struct WordCompleter {
    file_completer: FilenameCompleter,
    words: Vec<String>,
}

impl WordCompleter {
    fn new() -> Self {
        let mut words: Vec<String> = COMMANDS.iter().map(ToString::to_string).collect();
        words.extend(stdlib::PREDICATE_PHRASES.iter().map(|(name, _)| (*name).to_string()));
        words.extend(stdlib::CONSTANTS.iter().map(|(word, _)| (*word).to_string()));
        words.extend(["forall".to_string(), "exists".to_string()]);
        Self {
            file_completer: FilenameCompleter::new(),
            words,
        }
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = &line[..pos];
        if PATH_COMMANDS
            .iter()
            .any(|command| head.starts_with(command) && head.len() > command.len())
        {
            return self.file_completer.complete(line, pos, ctx);
        }

        let start = head
            .rfind(|c: char| c.is_whitespace() || "(),".contains(c))
            .map_or(0, |i| i + 1);
        let word = &head[start..];
        if word.is_empty() {
            return Ok((start, Vec::new()));
        }

        let candidates = self
            .words
            .iter()
            .filter(|candidate| candidate.starts_with(word))
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

/// Keeps reading while parentheses are open.
#[derive(Default)]
struct ParenValidator;

impl Validator for ParenValidator {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        let result = match open_parens(ctx.input()) {
            depth if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Valid(None),
        };
        Ok(result)
    }
}

/// Net count of unclosed `(` in `input`.
#[must_use]
pub fn open_parens(input: &str) -> i32 {
    input.chars().fold(0, |depth, c| match c {
        '(' => depth + 1,
        ')' => depth - 1,
        _ => depth,
    })
}

/// [`LineEditor`] backed by a rustyline terminal editor.
pub struct RustylineEditor {
    editor: Editor<FolnlHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor keeping `history_size` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the history size is rejected or the terminal
    /// cannot be initialized.
    pub fn new(history_size: usize) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(history_size)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = FolnlHelper {
            completer: WordCompleter::new(),
            hinter: HistoryHinter::new(),
            validator: ParenValidator,
            highlighter: FormulaHighlighter::new(),
        };

        let mut editor: Editor<FolnlHelper, DefaultHistory> =
            Editor::with_config(config).map_err(|e| Error::new(ErrorKind::Io(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        let read = match self.editor.readline(prompt) {
            Ok(line) => ReadResult::Line(line),
            Err(ReadlineError::Interrupted) => ReadResult::Interrupted,
            Err(ReadlineError::Eof) => ReadResult::Eof,
            Err(e) => return Err(Error::new(ErrorKind::Io(e.to_string()))),
        };
        Ok(read)
    }

    fn add_history(&mut self, entry: &str) {
        // Duplicate or ignored entries are not an error for the REPL.
        let _ = self.editor.add_history_entry(entry);
    }
}
