use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(version, about = "Keep short text notes from the terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the notes database and config.yaml
    #[arg(long, global = true, env = "JOTTER_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all notes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes whose title contains the query (case-insensitive)
    Search {
        /// Text to look for in titles
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Show {
        /// Note ID (full id or unique prefix)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new note
    Add {
        /// Note title
        title: String,

        /// Note text
        #[arg(long, short = 't', conflicts_with = "stdin")]
        text: Option<String>,

        /// Read note text from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a note and move it to the top of the list
    Edit {
        /// Note ID (full id or unique prefix)
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New text
        #[arg(long, short = 't', conflicts_with = "stdin")]
        text: Option<String>,

        /// Read new text from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note ID (full id or unique prefix)
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Start an interactive session
    Shell {
        /// Keep notes in memory only; nothing is written to disk
        #[arg(long)]
        ephemeral: bool,
    },
}
