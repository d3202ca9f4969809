use clap::Parser;
use directories::ProjectDirs;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use todoz::api::TodozApi;
use todoz::config::TodozConfig;
use todoz::error::Result;
use todoz::logging::init_tracing;
use todoz::store::memory::InMemoryStore;

mod args;
mod cli;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let pretty = config.pretty_json && !cli.compact;
    let mut api = TodozApi::new(InMemoryStore::new(), config);

    match cli.command {
        Some(Commands::Demo) | None => cli::demo::run(&mut api, pretty)?,
        Some(Commands::Run { file }) => handle_run(&mut api, file, pretty)?,
    }

    let store = api.store();
    tracing::info!(
        users = store.user_count(),
        todos = store.todo_count(),
        "store state at exit"
    );
    Ok(())
}

fn load_config(explicit: Option<&PathBuf>) -> Result<TodozConfig> {
    let dir = match explicit {
        Some(dir) => dir.clone(),
        None => match ProjectDirs::from("com", "todoz", "todoz") {
            Some(dirs) => dirs.config_dir().to_path_buf(),
            None => return Ok(TodozConfig::default()),
        },
    };
    tracing::debug!(dir = %dir.display(), "loading config");
    TodozConfig::load(dir)
}

fn handle_run(api: &mut TodozApi<InMemoryStore>, file: Option<PathBuf>, pretty: bool) -> Result<()> {
    let handled = match file {
        Some(path) => cli::script::run(api, BufReader::new(File::open(path)?), pretty)?,
        None => cli::script::run(api, io::stdin().lock(), pretty)?,
    };
    tracing::info!(handled, "requests processed");
    Ok(())
}
