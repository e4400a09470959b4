//! CLI entry point for pagebind

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pagebind")]
#[command(version)]
#[command(about = "Populate static HTML site templates from a JSON content document", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site from the starter template
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Populate pages and write them to the public folder
    #[command(alias = "a")]
    Apply {
        /// Output directory (overrides public_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local server that populates pages on every request
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long)]
        ip: Option<String>,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Print how the content document binds to each page
    Check,

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "pagebind=debug,info"
    } else {
        "pagebind=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    // Watchers report absolute paths
    let base_dir = base_dir.canonicalize().unwrap_or(base_dir);

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            pagebind::commands::init::init_site(&target_dir)?;
            println!("Initialized starter site in {:?}", target_dir);
        }

        Commands::Apply { output, watch } => {
            let mut site = pagebind::Site::new(&base_dir)?;
            if let Some(output) = output {
                site.public_dir = if output.is_absolute() {
                    output
                } else {
                    base_dir.join(output)
                };
            }
            tracing::info!("Populating pages...");

            site.apply().await?;
            println!("Applied successfully!");

            if watch {
                tracing::info!("Watching for file changes...");
                pagebind::commands::apply::watch(&site).await?;
            }
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = pagebind::Site::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            let port = port.unwrap_or(site.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            pagebind::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::Check => {
            let site = pagebind::Site::new(&base_dir)?;
            pagebind::commands::check::run(&site).await?;
        }

        Commands::Clean => {
            let site = pagebind::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("pagebind version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
