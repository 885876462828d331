/// CLI argument parsing and command handling.
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::db::SqliteStore;
use crate::store::KeyValueStore;
use crate::theme::{Theme, read_theme};
use crate::timer::parse_completed_count;
use crate::types::{COMPLETED_COUNT_KEY, CountdownLength, SAVED_NAME_KEY, THEME_KEY};

#[derive(Parser, Debug)]
#[command(
    name = "motiv",
    version,
    about = "motiv - A terminal countdown timer that cheers you on"
)]
pub struct Cli {
    /// Database file to keep the completion record and theme in
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Keep everything in memory; nothing is read or written on disk
    #[arg(long, conflicts_with = "db")]
    pub ephemeral: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pre-fill the name field
    #[arg(long)]
    pub name: Option<String>,

    /// Countdown length in seconds
    #[arg(short, long, value_parser = parse_length)]
    pub duration: Option<CountdownLength>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the completion record
    Stats,
    /// Forget the completion record and the saved name
    Reset,
    /// Show or change the theme
    Theme { choice: Option<ThemeChoice> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    Toggle,
}

fn parse_length(value: &str) -> std::result::Result<CountdownLength, String> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(CountdownLength::from_secs)
        .ok_or_else(|| format!("'{value}' is not one of 10, 20, 30"))
}

/// Execute a CLI command against the store.
pub fn run(command: Command, store: &SqliteStore) -> Result<()> {
    match command {
        Command::Stats => handle_stats(store)?,
        Command::Reset => handle_reset(store)?,
        Command::Theme { choice } => handle_theme(choice, store)?,
    }
    Ok(())
}

fn handle_stats(store: &SqliteStore) -> Result<()> {
    let count = parse_completed_count(store.get(COMPLETED_COUNT_KEY)?.as_deref());
    println!("Completed timers: {count}");
    match store.get(SAVED_NAME_KEY)? {
        Some(name) => println!("Saved name: {name}"),
        None => println!("Saved name: -"),
    }
    if let Some(at) = store.updated_at(COMPLETED_COUNT_KEY)? {
        println!("Last completed: {}", at.format("%Y-%m-%d %H:%M:%S"));
    }
    Ok(())
}

fn handle_reset(store: &SqliteStore) -> Result<()> {
    store.remove(COMPLETED_COUNT_KEY)?;
    store.remove(SAVED_NAME_KEY)?;
    tracing::info!("completion record cleared from the command line");
    println!("Completion record cleared.");
    Ok(())
}

fn handle_theme(choice: Option<ThemeChoice>, store: &SqliteStore) -> Result<()> {
    let current = read_theme(store);
    let next = match choice {
        None => {
            println!("{current}");
            return Ok(());
        }
        Some(ThemeChoice::Light) => Theme::Light,
        Some(ThemeChoice::Dark) => Theme::Dark,
        Some(ThemeChoice::Toggle) => current.toggled(),
    };
    store.set(THEME_KEY, next.as_str())?;
    tracing::info!(theme = %next, "theme set from the command line");
    println!("{next}");
    Ok(())
}
