//! tasklist CLI - Local task list management

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tasklist::cli::display::{display_task_detail, display_task_list, error, success};
use tasklist::cli::{Cli, Commands};
use tasklist::storage::{JsonFileStore, StoreLocation};
use tasklist::store::TaskStore;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = &result {
        error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let location = match cli.file {
        Some(ref path) => StoreLocation::at(path),
        None => StoreLocation::default_location()?,
    };

    location.ensure_parent()?;

    let mut store = TaskStore::new(JsonFileStore::new(&location.data_file));
    store.load()?;

    match cli.command {
        Commands::Add { title } => {
            let created = store.add(&title)?;
            success(&format!("Created task #{}: {}", created.id, created.title));
        }

        Commands::List => {
            display_task_list(store.items());
        }

        Commands::Show { id } => {
            let task = store.get(id)?;
            display_task_detail(task);
        }

        Commands::Update { id, title } => {
            let updated = store.update(id, &title)?;
            success(&format!("Updated #{}: {}", updated.id, updated.title));
        }

        Commands::Delete { id, force } => {
            if !force {
                let task = store.get(id)?;
                print!("Delete #{} '{}'? [y/N] ", task.id, task.title);
                io::stdout().flush()?;

                let mut input = String::new();
                io::stdin().read_line(&mut input)?;

                if !input.trim().eq_ignore_ascii_case("y") {
                    log::info!("Cancelled.");
                    return Ok(());
                }
            }

            store.remove(id)?;
            success(&format!("Deleted #{}", id));
        }
    }

    Ok(())
}
