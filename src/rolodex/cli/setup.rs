use clap::{Args, CommandFactory, Parser, Subcommand};
use rolodex::search::SearchField;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rolodex",
    bin_name = "rolodex",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "A small contact directory kept in a plain delimited file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory file to operate on
    #[arg(
        short,
        long,
        global = true,
        env = "ROLODEX_FILE",
        value_name = "PATH",
        help_heading = "Options"
    )]
    pub file: Option<PathBuf>,

    /// Config directory (defaults to the OS config dir)
    #[arg(long, global = true, env = "ROLODEX_CONFIG_DIR", hide = true)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Directory,
    Entry,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Directory => "Directory Commands:",
            CommandGroup::Entry => "Entry Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "new" | "list" | "search" | "check" => Some(CommandGroup::Directory),
            "add" | "edit" | "remove" => Some(CommandGroup::Entry),
            "shell" | "config" | "about" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Directory,
            CommandGroup::Entry,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("rolodex {version}\n"));
    output.push_str("A small contact directory kept in a plain delimited file\n");
    output.push('\n');
    output.push_str("Usage: rolodex [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -f, --file <PATH>  Directory file to operate on [env: ROLODEX_FILE]\n");
    output.push_str("  -v, --verbose      Verbose output\n");
    output.push_str("  -h, --help         Print help\n");
    output.push_str("  -V, --version      Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name, using clap's built-in rendering
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

pub fn subcommand_name(command: &Commands) -> &'static str {
    match command {
        Commands::Directory(c) => match c {
            DirectoryCommands::New { .. } => "new",
            DirectoryCommands::List => "list",
            DirectoryCommands::Search { .. } => "search",
            DirectoryCommands::Check => "check",
        },
        Commands::Entry(c) => match c {
            EntryCommands::Add(_) => "add",
            EntryCommands::Edit { .. } => "edit",
            EntryCommands::Remove { .. } => "remove",
        },
        Commands::Misc(c) => match c {
            MiscCommands::Shell => "shell",
            MiscCommands::Config { .. } => "config",
            MiscCommands::About => "about",
            MiscCommands::Help { .. } => "help",
        },
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Directory(DirectoryCommands),

    #[command(flatten)]
    Entry(EntryCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum DirectoryCommands {
    /// Create a new, empty directory file
    #[command(display_order = 1)]
    New {
        /// Where to create it (defaults to --file)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List all entries
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Search entries by one field
    #[command(display_order = 3)]
    Search {
        /// Field to search: name, phone, email or favorite
        field: SearchField,

        /// Text to look for (for favorite: yes or no, default yes)
        criterion: Option<String>,
    },

    /// Report entries that break the directory rules
    #[command(display_order = 4)]
    Check,
}

/// The fields of the add form.
#[derive(Args, Debug, Clone)]
pub struct EntryForm {
    /// Contact name (must be unique)
    #[arg(long)]
    pub name: String,

    /// Phone number, digits only
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Mark as favorite
    #[arg(long)]
    pub favorite: bool,
}

#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Add an entry
    #[command(display_order = 10)]
    Add(EntryForm),

    /// Edit an entry (omitted fields keep their value)
    #[command(alias = "e", display_order = 11)]
    Edit {
        /// Entry name or list index
        selector: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// Favorite: yes or no
        #[arg(long, value_name = "YES|NO")]
        favorite: Option<String>,
    },

    /// Remove an entry
    #[command(alias = "rm", display_order = 12)]
    Remove {
        /// Entry name or list index
        selector: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Start an interactive session
    #[command(display_order = 20)]
    Shell,

    /// Get or set configuration
    #[command(display_order = 21)]
    Config {
        /// Configuration key (favorite-marker, directory)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Show information about the program
    #[command(display_order = 22)]
    About,

    /// Print help for rolodex or a subcommand
    #[command(display_order = 23)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
