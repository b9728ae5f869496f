//! # Interactive Shell
//!
//! A line-oriented session over one [`RolodexApi`]. Unlike one-shot commands,
//! the directory stays in memory between lines and is only written on `save`.
//!
//! Each line is split into words (single and double quotes group words,
//! backslash escapes inside double quotes) and parsed by clap into a
//! [`ShellCommand`], which one `dispatch` match turns into an API call.
//!
//! `add` and `edit` without field flags fall back to a prompted form, the
//! edit form pre-filled with the current values (an empty answer keeps them,
//! `-` clears one).
//! `quit` asks before discarding unsaved changes.
//!
//! Input comes from a [`LineSource`]: rustyline on a terminal, plain line
//! reads when stdin is piped, a scripted list in tests.

use super::commands::{about_text, parse_yes_no, search_directory};
use super::render::{render_entry_table, render_error, render_messages};
use super::styles::ROLODEX_THEME;
use clap::{Parser, Subcommand};
use rolodex::api::{CmdResult, RolodexApi};
use rolodex::error::{Result, RolodexError};
use rolodex::model::EntryDraft;
use rolodex::search::SearchField;
use rolodex::session::CloseDecision;
use rolodex::store::DirectoryStore;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

/// Where shell lines come from.
pub trait LineSource {
    /// Next line without its newline, or `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

pub struct EditorSource(DefaultEditor);

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.0.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.0.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            // Ctrl-C drops the current line, like a shell
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(e)) => Err(RolodexError::Io(e)),
            Err(e) => Err(RolodexError::Api(format!("Line editor failed: {}", e))),
        }
    }
}

/// Reads piped input; prompts are not echoed.
pub struct PipedSource<R: BufRead>(R);

impl<R: BufRead> LineSource for PipedSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        if self.0.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "rolodex",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum ShellCommand {
    New {
        path: PathBuf,
        #[arg(long)]
        force: bool,
    },
    Open {
        path: PathBuf,
    },
    Save {
        path: Option<PathBuf>,
    },
    Add {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        favorite: bool,
    },
    #[command(alias = "e")]
    Edit {
        selector: String,
    },
    #[command(alias = "rm")]
    Remove {
        selector: String,
    },
    Search {
        field: SearchField,
        criterion: Option<String>,
    },
    Reset,
    #[command(alias = "ls")]
    List,
    Check,
    Status,
    Help {
        topic: Option<String>,
    },
    About,
    #[command(alias = "exit")]
    Quit,
}

/// (name, usage, explanation) for every shell action.
const HELP_TOPICS: &[(&str, &str, &str)] = &[
    ("new", "new PATH [--force]", "Create a new entry directory file"),
    ("open", "open PATH", "Open an existing entry directory file"),
    (
        "save",
        "save [PATH]",
        "Save modifications made to the directory (with PATH, save there and keep working on it)",
    ),
    (
        "add",
        "add [--name N] [--phone P] [--email E] [--favorite]",
        "Add a new entry to the directory (asks for the fields when --name is omitted)",
    ),
    (
        "edit",
        "edit NAME|INDEX",
        "Edit an entry in the directory (press enter to keep a value, - to clear it)",
    ),
    ("remove", "remove NAME|INDEX", "Remove an entry from the directory"),
    (
        "search",
        "search name|phone|email|favorite [CRITERION]",
        "Search for an entry in the directory",
    ),
    ("reset", "reset", "Leave search results and show the whole directory"),
    ("list", "list", "Show the entries in view"),
    ("check", "check", "Report entries that break the directory rules"),
    ("status", "status", "Show the open file and whether it has unsaved changes"),
    ("help", "help [COMMAND]", "Show this help"),
    ("about", "about", "Show information about the program"),
    ("quit", "quit", "Leave the shell"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<S: DirectoryStore, I: LineSource, W: Write> {
    api: RolodexApi<S>,
    input: I,
    out: W,
    verbose: bool,
}

/// Runs the shell on stdin/stdout.
pub fn run_interactive<S: DirectoryStore>(api: RolodexApi<S>, verbose: bool) -> Result<()> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let editor = DefaultEditor::new()
            .map_err(|e| RolodexError::Api(format!("Line editor failed: {}", e)))?;
        Shell::new(api, EditorSource(editor), io::stdout(), verbose).run()
    } else {
        Shell::new(api, PipedSource(stdin.lock()), io::stdout(), verbose).run()
    }
}

impl<S: DirectoryStore, I: LineSource, W: Write> Shell<S, I, W> {
    pub fn new(api: RolodexApi<S>, input: I, out: W, verbose: bool) -> Self {
        Self {
            api,
            input,
            out,
            verbose,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "rolodex {} (type `help` for commands)",
            env!("CARGO_PKG_VERSION")
        )?;

        loop {
            let prompt = self.prompt();
            let Some(line) = self.input.read_line(&prompt)? else {
                if self.api.close_decision() == CloseDecision::ConfirmDiscard {
                    writeln!(self.out, "Unsaved changes were discarded.")?;
                }
                return Ok(());
            };

            match self.handle_line(&line) {
                Ok(Flow::Quit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(e) => write!(self.out, "{}", render_error(&e))?,
            }
        }
    }

    fn prompt(&self) -> String {
        let session = self.api.session();
        let file = session
            .path()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().to_string());
        let text = match file {
            Some(name) if session.has_unsaved_changes() => format!("rolodex [{}*]> ", name),
            Some(name) => format!("rolodex [{}]> ", name),
            None => "rolodex> ".to_string(),
        };
        ROLODEX_THEME.prompt.apply_to(text).to_string()
    }

    fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let words = split_words(line).map_err(RolodexError::Api)?;
        if words.is_empty() {
            return Ok(Flow::Continue);
        }
        match ShellLine::try_parse_from(words) {
            Ok(parsed) => self.dispatch(parsed.command),
            Err(e) => {
                write!(self.out, "{}", e.render())?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<Flow> {
        match command {
            ShellCommand::New { path, force } => {
                let result = self.api.new_directory(&path, force)?;
                self.show_messages(&result)?;
            }
            ShellCommand::Open { path } => {
                let result = self.api.open(&path)?;
                self.show_messages(&result)?;
            }
            ShellCommand::Save { path } => {
                let result = match path {
                    Some(path) => self.api.save_as(&path)?,
                    None => self.api.save()?,
                };
                self.show_messages(&result)?;
            }
            ShellCommand::Add {
                name,
                phone,
                email,
                favorite,
            } => {
                let draft = match name {
                    Some(name) => Some(EntryDraft::new(
                        name,
                        phone.unwrap_or_default(),
                        email.unwrap_or_default(),
                        favorite,
                    )),
                    None => self.fill_form(EntryDraft::default(), false)?,
                };
                match draft {
                    Some(draft) => {
                        let result = self.api.add_entry(draft)?;
                        self.show_messages(&result)?;
                    }
                    None => writeln!(self.out, "Cancelled.")?,
                }
            }
            ShellCommand::Edit { selector } => {
                let current = self.api.edit_draft(selector.as_str())?;
                match self.fill_form(current, true)? {
                    Some(draft) => {
                        let result = self.api.edit_entry(selector, draft)?;
                        self.show_messages(&result)?;
                    }
                    None => writeln!(self.out, "Cancelled.")?,
                }
            }
            ShellCommand::Remove { selector } => {
                let result = self.api.remove_entry(selector)?;
                self.show_messages(&result)?;
            }
            ShellCommand::Search { field, criterion } => {
                let result = search_directory(&mut self.api, field, criterion.as_deref())?;
                self.show_listing(&result)?;
            }
            ShellCommand::Reset => {
                let result = self.api.reset_search()?;
                self.show_listing(&result)?;
            }
            ShellCommand::List => {
                let result = self.api.list()?;
                self.show_listing(&result)?;
            }
            ShellCommand::Check => {
                let result = self.api.check()?;
                self.show_messages(&result)?;
            }
            ShellCommand::Status => self.show_status()?,
            ShellCommand::Help { topic } => self.show_help(topic.as_deref())?,
            ShellCommand::About => write!(self.out, "{}", about_text())?,
            ShellCommand::Quit => return self.confirm_quit(),
        }
        Ok(Flow::Continue)
    }

    fn show_messages(&mut self, result: &CmdResult) -> Result<()> {
        write!(
            self.out,
            "{}",
            render_messages(&result.messages, self.verbose)
        )?;
        Ok(())
    }

    fn show_listing(&mut self, result: &CmdResult) -> Result<()> {
        let table = render_entry_table(&result.listed_entries, self.api.marker());
        write!(self.out, "{}", table)?;
        self.show_messages(result)
    }

    fn show_status(&mut self) -> Result<()> {
        let session = self.api.session();
        let file = session
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string());
        let unsaved = if session.has_unsaved_changes() {
            "yes"
        } else {
            "no"
        };
        let view = match session.last_query() {
            Some(query) if session.is_showing_search_results() => format!(
                "search results for {} \"{}\" ({} of {})",
                query.field,
                query.criterion,
                session.search_results().len(),
                session.entries().len()
            ),
            _ => format!("whole directory ({} entries)", session.entries().len()),
        };
        writeln!(self.out, "File:            {}", file)?;
        writeln!(self.out, "Unsaved changes: {}", unsaved)?;
        writeln!(self.out, "Showing:         {}", view)?;
        Ok(())
    }

    fn show_help(&mut self, topic: Option<&str>) -> Result<()> {
        match topic {
            None => {
                writeln!(self.out, "Commands:")?;
                for (name, _, explanation) in HELP_TOPICS {
                    writeln!(self.out, "  {:<8} {}", name, explanation)?;
                }
                writeln!(self.out, "Type `help COMMAND` for its usage.")?;
            }
            Some(wanted) => match HELP_TOPICS.iter().find(|(name, _, _)| *name == wanted) {
                Some((_, usage, explanation)) => {
                    writeln!(self.out, "{}", explanation)?;
                    writeln!(self.out, "Usage: {}", usage)?;
                }
                None => writeln!(self.out, "No help for '{}'", wanted)?,
            },
        }
        Ok(())
    }

    fn confirm_quit(&mut self) -> Result<Flow> {
        if self.api.close_decision() == CloseDecision::Close {
            return Ok(Flow::Quit);
        }
        let answer = self
            .input
            .read_line("You have unsaved changes! Quit anyway? [y/N] ")?;
        match answer.as_deref().and_then(parse_yes_no) {
            Some(true) => Ok(Flow::Quit),
            _ => Ok(Flow::Continue),
        }
    }

    /// Asks for each field of `draft`. In `keep` mode the current value is
    /// shown, an empty answer keeps it and `-` clears it. `None` if input ran
    /// out.
    fn fill_form(&mut self, draft: EntryDraft, keep: bool) -> Result<Option<EntryDraft>> {
        let Some(name) = self.ask("Name", &draft.name, keep)? else {
            return Ok(None);
        };
        let Some(phone) = self.ask("Phone", &draft.phone, keep)? else {
            return Ok(None);
        };
        let Some(email) = self.ask("Email", &draft.email, keep)? else {
            return Ok(None);
        };

        let current = if draft.favorite { "yes" } else { "no" };
        let prompt = format!("Favorite [{}]: ", current);
        let Some(answer) = self.input.read_line(&prompt)? else {
            return Ok(None);
        };
        let favorite = if answer.trim().is_empty() {
            draft.favorite
        } else {
            parse_yes_no(&answer).ok_or_else(|| {
                RolodexError::Api(format!("Expected yes or no, got '{}'", answer.trim()))
            })?
        };

        Ok(Some(EntryDraft::new(name, phone, email, favorite)))
    }

    fn ask(&mut self, label: &str, current: &str, keep: bool) -> Result<Option<String>> {
        let prompt = if keep && !current.is_empty() {
            format!("{} [{}]: ", label, current)
        } else {
            format!("{}: ", label)
        };
        let Some(answer) = self.input.read_line(&prompt)? else {
            return Ok(None);
        };
        if keep {
            match answer.trim() {
                "" => return Ok(Some(current.to_string())),
                CLEAR_ANSWER => return Ok(Some(String::new())),
                _ => {}
            }
        }
        Ok(Some(answer))
    }
}

/// Edit-form answer that empties a field.
const CLEAR_ANSWER: &str = "-";

/// Splits a shell line into words.
fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped) => current.push(escaped),
                            None => return Err("Unterminated quote".to_string()),
                        },
                        Some(other) => current.push(other),
                        None => return Err("Unterminated quote".to_string()),
                    }
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(other) => current.push(other),
                        None => return Err("Unterminated quote".to_string()),
                    }
                }
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
