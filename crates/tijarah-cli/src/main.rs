//! tijarah - inspect and initialize an accounting installation.

/// Subscriber setup.
mod logging;

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::instrument;

use tijarah_settings::{RootLocation, Settings, SettingsFile, resolve_settings_path};
use tijarah_store::{ensure_directories, open_all};

/// CLI argument parser.
#[derive(Parser)]
#[command(name = "tijarah", about, version)]
struct Cli {
    /// Installation root (default: $TIJARAH_ROOT, then the working directory).
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Settings overrides file (default: {root}/settings.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the resolved settings.
    Show(ShowArgs),
    /// List the data directories and entity database files.
    Paths,
    /// Create the data directories and every entity database.
    Init,
    /// Manage the settings overrides file.
    Config(ConfigCommand),
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
struct ShowArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Toml)]
    format: OutputFormat,
}

/// Serialization used by `show`.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Toml,
    Json,
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Write the current settings to the overrides file.
    Write(ConfigWriteArgs),
}

/// Arguments for the `config write` subcommand.
#[derive(clap::Args)]
struct ConfigWriteArgs {
    /// Overwrite an existing file.
    #[arg(long)]
    force: bool,
}

/// Runs the `show` subcommand.
///
/// # Errors
///
/// Returns an error if serialization or writing to stdout fails.
fn run_show(settings: &Settings, args: &ShowArgs) -> Result<()> {
    let text = match args.format {
        OutputFormat::Toml => {
            toml::to_string_pretty(settings).context("failed to serialize settings to TOML")?
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(settings).context("failed to serialize settings to JSON")?
        }
    };

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", text.trim_end()).context("failed to write to stdout")?;
    Ok(())
}

/// Runs the `paths` subcommand.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
#[instrument(skip_all)]
fn run_paths(settings: &Settings) -> Result<()> {
    let dirs = settings.directories();
    let mut out = std::io::stdout().lock();
    writeln!(out, "Root:      {}", settings.root().as_path().display())?;
    writeln!(out, "Data:      {}", dirs.data().display())?;
    writeln!(out, "Database:  {}", dirs.database().display())?;
    writeln!(out, "Backups:   {}", dirs.backup().display())?;
    writeln!(out, "Logs:      {}", dirs.log().display())?;

    for (entity, path) in settings.database_paths().iter() {
        writeln!(out, "  {:<10} {}", entity, path.display())?;
    }

    Ok(())
}

/// Runs the `init` subcommand.
///
/// # Errors
///
/// Returns an error if a directory or database cannot be created.
#[instrument(skip_all)]
fn run_init(settings: &Settings) -> Result<()> {
    ensure_directories(settings.directories()).context("failed to create data directories")?;

    let conns = open_all(settings).context("failed to open databases")?;
    tracing::debug!("opened {} entity databases", conns.len());

    let mut out = std::io::stdout().lock();
    for (entity, _) in &conns {
        writeln!(out, "  {:<10} {}", entity, settings.database_path(*entity).display())?;
    }
    writeln!(
        out,
        "Initialized {} databases under {}",
        conns.len(),
        settings.directories().data().display()
    )?;

    Ok(())
}

/// Runs the `config write` subcommand.
///
/// # Errors
///
/// Returns an error if the file exists without `--force` or cannot be written.
#[instrument(skip_all)]
fn run_config_write(settings: &Settings, path: &Path, args: &ConfigWriteArgs) -> Result<()> {
    if path.exists() && !args.force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    SettingsFile::from_settings(settings)
        .save(path)
        .context("failed to save settings")?;
    writeln!(std::io::stdout().lock(), "Wrote {}", path.display())?;

    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if settings cannot be loaded or the subcommand fails.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let root = RootLocation::resolve(cli.root.as_deref());
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| resolve_settings_path(&root));
    let settings =
        Settings::load(root, Some(config_path.as_path())).context("failed to load settings")?;

    // Events emitted while resolving the root and reading the overrides
    // file precede the subscriber, so the outcome is logged here instead.
    logging::init(settings.logging());
    tracing::debug!(
        "{} {} at {}",
        settings.app().title,
        settings.app().version,
        settings.root().as_path().display()
    );
    if config_path.exists() {
        tracing::debug!("settings overrides from {}", config_path.display());
    } else {
        tracing::debug!("no settings file at {}, using defaults", config_path.display());
    }

    match cli.command {
        Commands::Show(args) => run_show(&settings, &args),
        Commands::Paths => run_paths(&settings),
        Commands::Init => run_init(&settings),
        Commands::Config(cfg) => match cfg.command {
            ConfigSubcommands::Write(args) => run_config_write(&settings, &config_path, &args),
        },
    }
}
