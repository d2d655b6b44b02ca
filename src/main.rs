use clap::Parser;
use jotter::cli::{
    handle_add, handle_delete, handle_edit, handle_list, handle_search, handle_shell, handle_show,
    Cli, Commands,
};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_env("JOTTER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let data_dir = cli.data_dir;

    let result = match cli.command {
        Commands::List { json } => handle_list(data_dir, json),
        Commands::Search { query, json } => handle_search(data_dir, query, json),
        Commands::Show { id, json } => handle_show(data_dir, id, json),
        Commands::Add {
            title,
            text,
            stdin,
            json,
        } => handle_add(data_dir, title, text, stdin, json),
        Commands::Edit {
            id,
            title,
            text,
            stdin,
            json,
        } => handle_edit(data_dir, id, title, text, stdin, json),
        Commands::Delete { id, force } => handle_delete(data_dir, id, force),
        Commands::Shell { ephemeral } => handle_shell(data_dir, ephemeral),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
