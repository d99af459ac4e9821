use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use photo_schema::config::Config;
use photo_schema::{diagram, schema};

#[derive(Parser)]
#[command(name = "photo-schema", about = "Photo sharing schema tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply pending migrations to DATABASE_URL
    Migrate,
    /// Render the entity-relationship diagram
    Diagram {
        /// Output file
        #[arg(long, short, default_value = "diagram.png")]
        output: PathBuf,
        /// Write Graphviz DOT source instead of a PNG
        #[arg(long)]
        dot: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Migrate => {
            let config = Config::from_env().context("Failed to load configuration")?;
            info!(env = %config.app.env, "Migrating database");
            schema::open(config.db_config())
                .await
                .context("Failed to migrate database")?;
        }
        Command::Diagram { output, dot } => match render(&output, dot).await {
            Ok(()) => println!("Diagram '{}' generated successfully.", output.display()),
            Err(e) => {
                eprintln!("Error generating diagram: {:#}", e);
                eprintln!("Make sure graphviz is installed and `dot` is on PATH");
                eprintln!("(e.g. 'apt-get install graphviz' or 'brew install graphviz'),");
                eprintln!("or pass --dot to write the DOT source without rendering.");
            }
        },
    }

    Ok(())
}

async fn render(output: &Path, dot_only: bool) -> Result<()> {
    let pool = schema::open_in_memory()
        .await
        .context("Failed to build schema")?;
    let tables = schema::describe(&pool).await?;
    let dot = diagram::render_dot(&tables);

    if dot_only {
        tokio::fs::write(output, dot)
            .await
            .with_context(|| format!("Failed to write {}", output.display()))?;
    } else {
        diagram::write_png(&dot, output).await?;
    }
    Ok(())
}
