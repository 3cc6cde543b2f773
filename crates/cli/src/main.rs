use anyhow::Context;
use clap::{Parser, Subcommand};
use mirr_core::{
    config::resolve_data_root, constants::DATA_ROOT_ENV_VAR, CoreConfig, PathGenerator,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "mirr")]
#[command(about = "Mirrulations storage path CLI")]
struct Cli {
    /// Directory storage paths are placed under (overrides MIRR_DATA_ROOT)
    #[arg(long, global = true)]
    data_root: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the storage path of a docket, document or comment record
    Path {
        /// Record JSON file
        record: PathBuf,
    },
    /// Print the storage path of every attachment referenced by a record
    Attachments {
        /// Record JSON file
        record: PathBuf,
    },
    /// Print where the text extracted from an attachment is saved
    Extracted {
        /// Attachment storage path
        attachment_path: String,
    },
    /// Print the agency, docket and item ids resolved from a record
    Attributes {
        /// Record JSON file
        record: PathBuf,
        /// Treat the record as a docket
        #[arg(long)]
        docket: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("mirr=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = resolve_data_root(cli.data_root, std::env::var(DATA_ROOT_ENV_VAR).ok())?;

    let stdout = std::io::stdout();
    run(cli.command, config.as_ref(), &mut stdout.lock())
}

fn run(
    command: Option<Commands>,
    config: Option<&CoreConfig>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let generator = PathGenerator::new();

    match command {
        Some(Commands::Path { record }) => {
            let json = read_record(&record)?;
            let path = generator
                .get_path(&json)
                .with_context(|| format!("failed to resolve path for {}", record.display()))?;
            print_path(out, config, &path)?;
        }
        Some(Commands::Attachments { record }) => {
            let json = read_record(&record)?;
            let paths = generator.get_attachment_json_paths(&json).with_context(|| {
                format!("failed to resolve attachments for {}", record.display())
            })?;
            if paths.is_empty() {
                tracing::info!(record = %record.display(), "record has no attachments");
            }
            for path in &paths {
                print_path(out, config, path)?;
            }
        }
        Some(Commands::Extracted { attachment_path }) => {
            let path = PathGenerator::make_attachment_save_path(&attachment_path);
            print_path(out, config, &path)?;
        }
        Some(Commands::Attributes { record, docket }) => {
            let json = read_record(&record)?;
            let attributes = generator
                .get_attributes(&json, docket)
                .with_context(|| format!("failed to read ids from {}", record.display()))?;
            writeln!(out, "{}", serde_json::to_string_pretty(&attributes)?)?;
        }
        None => {
            writeln!(out, "Use 'mirr --help' for commands")?;
        }
    }

    Ok(())
}

fn read_record(path: &Path) -> anyhow::Result<serde_json::Value> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read record {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse record {}", path.display()))
}

fn print_path(out: &mut impl Write, config: Option<&CoreConfig>, path: &str) -> anyhow::Result<()> {
    match config {
        Some(config) => writeln!(out, "{}", config.locate(path)?.display())?,
        None => writeln!(out, "{path}")?,
    }
    Ok(())
}
