//! One-shot command handling.
//!
//! Each handler opens the directory file, calls one API method, saves when the
//! method changed the directory and prints the result. `shell` hands the same
//! API value to the interactive session instead.

use super::render::{print_messages, render_config, render_entry_table};
use super::setup::{
    print_grouped_help, print_help_for_command, subcommand_name, Cli, Commands,
    DirectoryCommands, EntryCommands, EntryForm, MiscCommands,
};
use super::shell;
use clap::Parser;
use rolodex::api::{CmdResult, ConfigAction, RolodexApi};
use rolodex::config::RolodexConfig;
use rolodex::error::{Result, RolodexError};
use rolodex::init::{initialize, resolve_directory_file};
use rolodex::model::EntryDraft;
use rolodex::search::SearchField;
use rolodex::store::fs::FileStore;
use rolodex::store::DirectoryStore;
use std::path::PathBuf;

struct AppContext {
    api: RolodexApi<FileStore>,
    config: RolodexConfig,
    file: Option<PathBuf>,
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        match &cli.command {
            None => print_grouped_help(),
            Some(command) => print_help_for_command(subcommand_name(command)),
        }
        return Ok(());
    }

    // These don't need a config dir or a directory file
    match &cli.command {
        Some(Commands::Misc(MiscCommands::About)) => {
            print!("{}", about_text());
            return Ok(());
        }
        Some(Commands::Misc(MiscCommands::Help { command })) => {
            match command {
                Some(name) => print_help_for_command(name),
                None => print_grouped_help(),
            }
            return Ok(());
        }
        _ => {}
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Directory(cmd)) => match cmd {
            DirectoryCommands::New { path, force } => handle_new(&mut ctx, path, force),
            DirectoryCommands::List => handle_list(&mut ctx),
            DirectoryCommands::Search { field, criterion } => {
                handle_search(&mut ctx, field, criterion)
            }
            DirectoryCommands::Check => handle_check(&mut ctx),
        },
        Some(Commands::Entry(cmd)) => match cmd {
            EntryCommands::Add(form) => handle_add(&mut ctx, form),
            EntryCommands::Edit {
                selector,
                name,
                phone,
                email,
                favorite,
            } => handle_edit(&mut ctx, selector, name, phone, email, favorite),
            EntryCommands::Remove { selector } => handle_remove(&mut ctx, selector),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Shell => handle_shell(ctx),
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
            MiscCommands::About | MiscCommands::Help { .. } => Ok(()),
        },
        None => handle_list(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.config_dir.as_deref())?;

    Ok(AppContext {
        api: ctx.api,
        file: cli.file.clone(),
        config: ctx.config,
        verbose: cli.verbose,
    })
}

/// The about text shared by `rolodex about` and the shell.
pub(super) fn about_text() -> String {
    format!(
        "rolodex {}\n\
         A small contact directory: names, phone numbers, e-mail addresses\n\
         and favorites, kept in a plain `;`-delimited text file.\n\
         Licensed under the {} license.\n",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_LICENSE"),
    )
}

/// Parses a yes/no answer, as used by `--favorite` and favorite searches.
pub(super) fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

fn directory_file(ctx: &AppContext) -> Result<PathBuf> {
    resolve_directory_file(ctx.file.clone(), &ctx.config).ok_or_else(|| {
        RolodexError::Api(
            "No directory file given (use --file, ROLODEX_FILE or `rolodex config directory PATH`)"
                .to_string(),
        )
    })
}

fn open_directory(ctx: &mut AppContext) -> Result<()> {
    let path = directory_file(ctx)?;
    let result = ctx.api.open(&path)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

/// Prints the result of a mutation and writes the directory back.
fn commit(ctx: &mut AppContext, result: CmdResult) -> Result<()> {
    print_messages(&result.messages, ctx.verbose);
    let saved = ctx.api.save()?;
    print_messages(&saved.messages, ctx.verbose);
    Ok(())
}

fn print_listing(ctx: &AppContext, result: &CmdResult) {
    print!(
        "{}",
        render_entry_table(&result.listed_entries, ctx.api.marker())
    );
    print_messages(&result.messages, ctx.verbose);
}

fn handle_new(ctx: &mut AppContext, path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => directory_file(ctx)?,
    };
    let result = ctx.api.new_directory(&path, force)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    open_directory(ctx)?;
    let result = ctx.api.list()?;
    print_listing(ctx, &result);
    Ok(())
}

fn handle_search(
    ctx: &mut AppContext,
    field: SearchField,
    criterion: Option<String>,
) -> Result<()> {
    open_directory(ctx)?;
    let result = search_directory(&mut ctx.api, field, criterion.as_deref())?;
    print_listing(ctx, &result);
    Ok(())
}

/// Runs a search, reading a favorite criterion as yes/no when it is one.
///
/// A missing favorite criterion means "yes"; anything that is not a yes/no
/// answer is matched against the marker column as typed.
pub(super) fn search_directory<S: DirectoryStore>(
    api: &mut RolodexApi<S>,
    field: SearchField,
    criterion: Option<&str>,
) -> Result<CmdResult> {
    match (field, criterion) {
        (SearchField::Favorite, None) => api.search_favorites(true),
        (SearchField::Favorite, Some(raw)) => match parse_yes_no(raw) {
            Some(favorite) => api.search_favorites(favorite),
            None => api.search(field, raw),
        },
        (_, criterion) => api.search(field, criterion.unwrap_or("")),
    }
}

fn handle_check(ctx: &mut AppContext) -> Result<()> {
    open_directory(ctx)?;
    let result = ctx.api.check()?;
    print_messages(&result.messages, ctx.verbose);
    if result.listed_entries.is_empty() {
        return Ok(());
    }
    Err(RolodexError::Api(format!(
        "{} invalid entries",
        result.listed_entries.len()
    )))
}

fn handle_add(ctx: &mut AppContext, form: EntryForm) -> Result<()> {
    open_directory(ctx)?;
    let draft = EntryDraft::new(form.name, form.phone, form.email, form.favorite);
    let result = ctx.api.add_entry(draft)?;
    commit(ctx, result)
}

fn handle_edit(
    ctx: &mut AppContext,
    selector: String,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    favorite: Option<String>,
) -> Result<()> {
    let favorite = match favorite {
        Some(raw) => Some(parse_yes_no(&raw).ok_or_else(|| {
            RolodexError::Api(format!("--favorite expects yes or no, got '{}'", raw))
        })?),
        None => None,
    };

    open_directory(ctx)?;
    let mut draft = ctx.api.edit_draft(selector.as_str())?;
    if let Some(name) = name {
        draft.name = name;
    }
    if let Some(phone) = phone {
        draft.phone = phone;
    }
    if let Some(email) = email {
        draft.email = email;
    }
    if let Some(favorite) = favorite {
        draft.favorite = favorite;
    }

    let result = ctx.api.edit_entry(selector, draft)?;
    commit(ctx, result)
}

fn handle_remove(ctx: &mut AppContext, selector: String) -> Result<()> {
    open_directory(ctx)?;
    let result = ctx.api.remove_entry(selector)?;
    commit(ctx, result)
}

fn handle_shell(mut ctx: AppContext) -> Result<()> {
    // A configured or given file is opened up front; a missing one is not fatal.
    if let Some(path) = resolve_directory_file(ctx.file.clone(), &ctx.config) {
        if path.exists() {
            let result = ctx.api.open(&path)?;
            print_messages(&result.messages, ctx.verbose);
        }
    }
    shell::run_interactive(ctx.api, ctx.verbose)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let showing = !matches!(action, ConfigAction::Set(..));

    let result = ctx.api.config(action)?;
    if let (true, Some(config)) = (showing, &result.config) {
        print!("{}", render_config(config, key.as_deref()));
    }
    print_messages(&result.messages, true);
    Ok(())
}
