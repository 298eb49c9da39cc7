//! Openimages-pen: Open Images adapter for the single-class pen dataset.
//!
//! This crate parses Open Images bounding-box CSV exports for a pen
//! detection task, groups annotations into per-image records with absolute
//! pixel coordinates, and registers each dataset split as a lazily-loaded
//! entry in an explicit [`registry::DatasetRegistry`].
//!
//! # Modules
//!
//! - [`record`]: Output model (PixelBox, ObjectAnnotation, ImageRecord)
//! - [`loader`]: The Open Images CSV reader
//! - [`registry`]: Name-keyed registry of lazy record producers + metadata
//! - [`splits`]: The predefined train/val/test split table
//! - [`error`]: Error types for openimages-pen operations

pub mod error;
pub mod loader;
pub mod record;
pub mod registry;
pub mod splits;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::OpenImagesError;

/// The openimages-pen CLI application.
#[derive(Parser)]
#[command(name = "openimages-pen")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Load a predefined split and summarize (or dump) its records.
    Load(LoadArgs),

    /// Print the predefined split table with paths resolved under the root.
    Splits(SplitsArgs),
}

/// Arguments for the load subcommand.
#[derive(clap::Args)]
struct LoadArgs {
    /// Split name ('pen_train', 'pen_val', or 'pen_test').
    name: String,

    /// Dataset root directory.
    #[arg(long, default_value = "datasets")]
    root: PathBuf,

    /// Dump the full records as JSON instead of a text summary.
    #[arg(long)]
    json: bool,
}

/// Arguments for the splits subcommand.
#[derive(clap::Args)]
struct SplitsArgs {
    /// Dataset root directory.
    #[arg(long, default_value = "datasets")]
    root: PathBuf,
}

/// Run the openimages-pen CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), OpenImagesError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Load(args)) => run_load(args),
        Some(Commands::Splits(args)) => run_splits(args),
        None => {
            println!("openimages-pen {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Open Images adapter for the pen detection dataset.");
            println!();
            println!("Run 'openimages-pen --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the load subcommand.
fn run_load(args: LoadArgs) -> Result<(), OpenImagesError> {
    let mut registry = registry::DatasetRegistry::new();
    splits::register_all(&mut registry, &args.root)?;

    let records = registry.produce(&args.name)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        let box_count: usize = records.iter().map(|r| r.annotations.len()).sum();
        let meta = registry.metadata(&args.name)?;
        println!("Dataset:    {}", args.name);
        println!("Source:     {}", meta.annotation_file.display());
        println!("Image root: {}", meta.image_root.display());
        println!("Records:    {}", records.len());
        println!("Boxes:      {}", box_count);
    }

    Ok(())
}

/// Execute the splits subcommand.
fn run_splits(args: SplitsArgs) -> Result<(), OpenImagesError> {
    for (name, image_subdir, csv_file) in splits::PREDEFINED_SPLITS {
        println!(
            "{}\t{}\t{}",
            name,
            args.root.join(image_subdir).display(),
            args.root.join(csv_file).display()
        );
    }
    Ok(())
}
