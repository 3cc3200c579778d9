//! treemend — automatic SVN tree-conflict resolver.
//!
//! Repairs "local missing, incoming edit/replace" tree conflicts in a branch
//! working copy by copying the matching file from a trunk working copy and
//! marking the conflict resolved.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use treemend_core::svn::parser::parse_status;
use treemend_core::{classify, ResolveEngine, ResolverConfig, SvnClient, WorkingCopy};

/// Automatic resolver for SVN "local missing, incoming edit/replace" tree conflicts.
#[derive(Parser)]
#[command(name = "treemend", version, about)]
struct Cli {
    /// Path to the config file.
    #[arg(short, long, default_value = "~/.config/treemend/treemend.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full resolution pass and print the summary.
    Run,

    /// Show the conflicts a run would act on, without touching anything.
    Status,

    /// Write a config template to the config path.
    Init {
        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config_path = expand_tilde(&cli.config);

    match cli.command {
        Commands::Run => cmd_run(&config_path).await,
        Commands::Status => cmd_status(&config_path).await,
        Commands::Init { force } => cmd_init(&config_path, force),
    }
}

/// Run a full resolution pass.
async fn cmd_run(config_path: &str) -> Result<()> {
    let config =
        ResolverConfig::load_and_validate(config_path).context("failed to load configuration")?;
    let client = SvnClient::new(&config.options.svn_command);

    info!("starting SVN tree-conflict resolution");
    let engine = ResolveEngine::new(config, client);
    let report = engine.run().await.context("resolution run failed")?;

    println!("{}", report);
    Ok(())
}

/// Parse and classify without resolving anything.
async fn cmd_status(config_path: &str) -> Result<()> {
    let config =
        ResolverConfig::load_and_validate(config_path).context("failed to load configuration")?;
    let client = SvnClient::new(&config.options.svn_command);

    let output = client
        .status(&config.trees.branch_path)
        .await
        .context("svn status failed")?;
    let raw = parse_status(&output);
    let classification = classify::classify(&raw, &config.filter.supported_extensions);

    println!("Tree conflicts found: {}", raw.len());
    for entry in classification.registry.values() {
        println!("  would resolve: {}", entry.path.display());
    }
    for name in &classification.skipped {
        println!("  skipped (duplicate filename): {}", name);
    }
    Ok(())
}

/// Write the default config template.
fn cmd_init(config_path: &str, force: bool) -> Result<()> {
    let path = std::path::Path::new(config_path);
    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory: {}", parent.display()))?;
    }
    std::fs::write(path, ResolverConfig::default_template())
        .with_context(|| format!("failed to write config file: {}", path.display()))?;

    println!("✓ Wrote config template to {}", path.display());
    println!("Edit the trunk/branch paths before running `treemend run`.");
    Ok(())
}

/// Expand `~` to the user's home directory.
fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}/{}", home.display(), rest);
        }
    }
    path.to_string()
}
