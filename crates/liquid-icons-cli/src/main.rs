mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "liquid-icons",
    about = "Add icon snippets from installed icon packages to your Shopify theme",
    version,
    propagate_version = true
)]
struct Cli {
    /// Package search root, the directory whose node_modules holds the icon
    /// packages (default: current directory)
    #[arg(long, global = true, env = "LIQUID_ICONS_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add icon snippet(s) to your theme
    Add {
        /// Icon library, optionally with a variant suffix
        /// (e.g. lucide, heroicons:20/solid)
        library: String,

        /// Icon name(s) to add (e.g. menu chevron-down)
        #[arg(required = true)]
        icons: Vec<String>,

        /// Snippets directory
        #[arg(long, short = 'd', default_value = "snippets")]
        dir: String,

        /// Prefix for snippet filenames
        #[arg(long, short = 'p', default_value = "icon-")]
        prefix: String,

        /// Overwrite output files if they already exist
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Search a library for icons by name or tag
    Search {
        /// Icon library to search
        library: String,

        /// Search term; matches icon names unless --tag is set
        term: String,

        /// Search tags instead of names
        #[arg(long, short = 't')]
        tag: bool,
    },

    /// List a library's tags with icon counts
    Tags { library: String },

    /// List a library's variants
    Variants { library: String },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = cli
        .root
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let result = match cli.command {
        Commands::Add {
            library,
            icons,
            dir,
            prefix,
            force,
        } => cmd::add::run(
            &root,
            &library,
            &icons,
            &cmd::add::AddOptions { dir, prefix, force },
            cli.json,
        ),
        Commands::Search { library, term, tag } => {
            cmd::search::run(&root, &library, &term, tag, cli.json)
        }
        Commands::Tags { library } => cmd::tags::run(&root, &library, cli.json),
        Commands::Variants { library } => cmd::variants::run(&root, &library, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
