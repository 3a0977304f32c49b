//! CLI entry point for postshelf

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postshelf")]
#[command(version)]
#[command(about = "A static blog generator for MDX posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
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
    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Remove the public folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, category, slug)
        #[arg(default_value = "post")]
        r#type: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postshelf=debug,info"
    } else {
        "postshelf=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Generate => {
            let blog = postshelf::Blog::new(&base_dir)?;
            tracing::info!("Generating static files...");
            let report = blog.generate()?;
            println!(
                "Generated {} posts into {:?}",
                report.posts, blog.public_dir
            );
        }

        Commands::Clean => {
            let blog = postshelf::Blog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type, json } => {
            let blog = postshelf::Blog::new(&base_dir)?;
            postshelf::commands::list::run(&blog, &r#type, json)?;
        }

        Commands::Version => {
            println!("postshelf version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
