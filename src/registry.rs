//! Explicit dataset registry.
//!
//! Rather than a process-wide catalog, registration happens on a
//! [`DatasetRegistry`] value owned by the caller. Each entry pairs a lazy
//! record producer with its metadata; producing records is deferred until
//! [`DatasetRegistry::produce`] is called, so registering every known split
//! at startup costs nothing until a split is actually used.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::OpenImagesError;
use crate::record::ImageRecord;

/// A deferred record source. Invoked each time the registry is asked to
/// produce the dataset, never at registration time.
pub type RecordProducer =
    Box<dyn Fn() -> Result<Vec<ImageRecord>, OpenImagesError> + Send + Sync>;

/// Static facts about a registered dataset, available without loading it.
#[derive(Clone, Debug, Serialize)]
pub struct DatasetMetadata {
    /// Path to the source annotation file.
    pub annotation_file: PathBuf,

    /// Directory containing the dataset's images.
    pub image_root: PathBuf,

    /// Which evaluation protocol applies to this dataset.
    pub evaluator_type: String,

    /// Class names indexed by category id (index 0 is the background
    /// placeholder).
    pub thing_classes: Vec<String>,
}

struct RegistryEntry {
    producer: RecordProducer,
    metadata: DatasetMetadata,
}

/// Name-keyed mapping of datasets to lazy producers and metadata.
#[derive(Default)]
pub struct DatasetRegistry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl DatasetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a producer and its metadata under `name`.
    ///
    /// # Errors
    /// Returns an error if `name` is already registered; silently replacing
    /// a dataset would make load results depend on registration order.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        producer: RecordProducer,
        metadata: DatasetMetadata,
    ) -> Result<(), OpenImagesError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(OpenImagesError::DuplicateDataset(name));
        }
        self.entries
            .insert(name, RegistryEntry { producer, metadata });
        Ok(())
    }

    /// Invokes the producer registered under `name` and returns its records.
    ///
    /// # Errors
    /// Returns an error if `name` is unknown, or whatever error the producer
    /// itself raises while loading.
    pub fn produce(&self, name: &str) -> Result<Vec<ImageRecord>, OpenImagesError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| OpenImagesError::UnknownDataset(name.to_string()))?;
        (entry.producer)()
    }

    /// Returns the metadata registered under `name`.
    pub fn metadata(&self, name: &str) -> Result<&DatasetMetadata, OpenImagesError> {
        self.entries
            .get(name)
            .map(|entry| &entry.metadata)
            .ok_or_else(|| OpenImagesError::UnknownDataset(name.to_string()))
    }

    /// Iterates over registered dataset names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered datasets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
