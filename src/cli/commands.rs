use anyhow::{bail, Context};
use clap::{CommandFactory, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::generator::{
    capitalize, make_controller, make_dto, make_mapper, make_repository, make_service,
};
use crate::paths::ProjectPaths;

/// Command-line interface for layergen
///
/// Scaffolds one artifact set per domain model and keeps the persisted model
/// list in sync with the model directory.
#[derive(Parser)]
#[command(name = "layergen")]
#[command(about = "Layered-architecture scaffolding CLI", long_about = None)]
pub struct Cli {
    /// Project root containing layergen.json and the layer directories
    /// (defaults to the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// The subcommand to execute; none prints usage
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands for layergen
#[derive(Subcommand)]
pub enum Commands {
    /// Generate controller, repository, service, DTOs, and mapper for a model
    Generate {
        /// Model name; `{Model}.cs` must exist in the configured model path
        #[arg(short, long)]
        model: String,
    },
    /// Rescan the model directory and rewrite the persisted model list
    Patch,
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The configuration cannot be loaded or fails validation
/// - A resolved project path does not exist
/// - Any generator fails (missing model, missing region marker, I/O error)
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("failed to determine current directory")?,
    };
    let root = fs::canonicalize(&root)
        .with_context(|| format!("project root not found: {}", root.display()))?;

    let config_path = root.join(CONFIG_FILE_NAME);
    let mut config = Config::load(&config_path)?;
    config.validate()?;
    let paths = ProjectPaths::resolve(&config, &root)?;
    paths.validate()?;
    paths.print_summary(&config_path);

    match command {
        Commands::Generate { model } => {
            let class_name = capitalize(&model);
            let model_file = paths.model.join(format!("{class_name}.cs"));
            if !model_file.exists() {
                bail!(
                    "model {class_name}.cs not found at {}",
                    paths.model.display()
                );
            }

            println!("ℹ️  [step 1 of 5] Generating controller...");
            make_controller(&config, &paths, &model)?;
            println!("ℹ️  [step 2 of 5] Generating repository...");
            make_repository(&config, &paths, &model)?;
            println!("ℹ️  [step 3 of 5] Generating service...");
            make_service(&config, &paths, &model)?;
            println!("ℹ️  [step 4 of 5] Generating DTOs...");
            make_dto(&paths, &model)?;
            println!("ℹ️  [step 5 of 5] Generating mapper...");
            make_mapper(&config, &paths, &model)?;

            config.push_model(&class_name)?;
            config.persist(&config_path)?;
            println!("✅ Done");
        }
        Commands::Patch => {
            let models = scan_models(&paths.model)?;
            config.set_models(models)?;
            config.persist(&config_path)?;
            println!("✅ Done");
        }
    }
    Ok(())
}

/// Collect the class names of every `.cs` file in the model directory.
///
/// Stems are capitalized so the persisted list holds class names, matching
/// what generation records.
pub(crate) fn scan_models(model_dir: &Path) -> anyhow::Result<Vec<String>> {
    let entries = fs::read_dir(model_dir)
        .with_context(|| format!("failed to read model directory: {}", model_dir.display()))?;
    let mut models = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read model directory: {}", model_dir.display()))?
            .path();
        if !path.is_file() {
            continue;
        }
        if let Some(stem) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(".cs"))
        {
            models.push(capitalize(stem));
        }
    }
    models.sort();
    models.dedup();
    Ok(models)
}
