//! Predefined pen dataset splits.
//!
//! The pen dataset ships as three Open Images CSV exports under a common
//! root directory. This module knows that layout and wires each split into
//! a [`DatasetRegistry`] as a lazy loader plus the fixed metadata every
//! split shares.

use std::path::{Path, PathBuf};

use crate::error::OpenImagesError;
use crate::loader::load_openimages_csv;
use crate::registry::{DatasetMetadata, DatasetRegistry};

/// Evaluation protocol tag recorded for every split.
pub const EVALUATOR_TYPE: &str = "coco";

/// Class names indexed by category id. Index 0 is the background
/// placeholder; the single foreground class is "pen".
pub const THING_CLASSES: [&str; 2] = ["__not-pen__", "pen"];

/// The fixed split table: name, image subdirectory, annotation filename,
/// all relative to the dataset root.
pub const PREDEFINED_SPLITS: [(&str, &str, &str); 3] = [
    ("pen_train", "images/train", "train-annotations-bbox.csv"),
    ("pen_val", "images/val", "val-annotations-bbox.csv"),
    ("pen_test", "images/test", "test-annotations-bbox.csv"),
];

/// Registers a single pen split under `name`.
///
/// The annotation file is not touched here; loading happens only when the
/// registry is asked to produce the split.
pub fn register_pen_split(
    registry: &mut DatasetRegistry,
    name: &str,
    annotation_file: PathBuf,
    image_root: PathBuf,
) -> Result<(), OpenImagesError> {
    let metadata = DatasetMetadata {
        annotation_file: annotation_file.clone(),
        image_root: image_root.clone(),
        evaluator_type: EVALUATOR_TYPE.to_string(),
        thing_classes: THING_CLASSES.iter().map(|s| s.to_string()).collect(),
    };

    registry.register(
        name,
        Box::new(move || load_openimages_csv(&annotation_file, &image_root)),
        metadata,
    )
}

/// Registers all predefined splits relative to `root`.
pub fn register_all(registry: &mut DatasetRegistry, root: &Path) -> Result<(), OpenImagesError> {
    for (name, image_subdir, csv_file) in PREDEFINED_SPLITS {
        register_pen_split(registry, name, root.join(csv_file), root.join(image_subdir))?;
    }
    Ok(())
}
