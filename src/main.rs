mod app;
mod cli;
mod clock;
mod db;
mod event;
mod logging;
mod phrases;
mod store;
mod theme;
mod timer;
mod tui;
mod types;
mod ui;

use std::{path::PathBuf, rc::Rc};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::app::SharedStore;
use crate::store::MemoryStore;

/// `<data_local_dir>/motiv`, created on first use.
pub fn data_dir() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()?.join("motiv");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let log_path = data_dir()
        .map(|dir| dir.join("motiv.log"))
        .unwrap_or_else(|| PathBuf::from("motiv.log"));
    logging::init(&log_path, cli_opts.verbose)?;

    if cli_opts.ephemeral && cli_opts.command.is_some() {
        anyhow::bail!("--ephemeral only applies to the interactive timer");
    }

    let store: SharedStore = if cli_opts.ephemeral {
        info!("running with an in-memory store");
        Rc::new(MemoryStore::new())
    } else {
        let db_path = cli_opts.db.clone().unwrap_or_else(db::default_db_path);
        info!(db = %db_path, "opening store");
        let sqlite = db::SqliteStore::new(db::init(&db_path)?);
        if let Some(command) = cli_opts.command {
            return cli::run(command, &sqlite);
        }
        Rc::new(sqlite)
    };

    let mut app = app::App::new(store);
    if let Some(name) = cli_opts.name {
        app.session.set_name(name);
    }
    if let Some(length) = cli_opts.duration {
        app.session.select_duration(length.secs());
    }

    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;
    info!("bye");

    result
}
