//! Core record model for the pen detection dataset.
//!
//! These are the types handed to consumers of the registry: one
//! [`ImageRecord`] per distinct image, each carrying its object annotations
//! in absolute pixel coordinates. Records are built once per load, held in
//! memory, and never mutated afterwards.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Category id assigned to every foreground box.
///
/// The dataset has exactly one foreground class ("pen"); id 0 is the
/// background placeholder in the class list.
pub const PEN_CATEGORY_ID: u32 = 1;

/// An axis-aligned bounding box in absolute pixel coordinates (XYXY).
///
/// Note: this type does NOT enforce that min < max in the constructor.
/// The loader produces whatever the source annotations imply, including
/// geometrically odd boxes; consumers decide what to do with them.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl PixelBox {
    /// Creates a new box from explicit coordinates.
    #[inline]
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Returns the width of the box. May be negative for malformed boxes.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Returns the height of the box. May be negative for malformed boxes.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Returns true if all coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x_min.is_finite()
            && self.y_min.is_finite()
            && self.x_max.is_finite()
            && self.y_max.is_finite()
    }
}

impl std::fmt::Debug for PixelBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBox")
            .field("x_min", &self.x_min)
            .field("y_min", &self.y_min)
            .field("x_max", &self.x_max)
            .field("y_max", &self.y_max)
            .finish()
    }
}

/// Coordinate convention tag carried on every annotation.
///
/// Only absolute XYXY is produced today; the tag exists so downstream
/// consumers never have to guess the convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoxMode {
    #[serde(rename = "XYXY_ABS")]
    XyxyAbs,
}

/// A single annotated object on an image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectAnnotation {
    /// Bounding box in absolute pixel coordinates.
    pub bbox: PixelBox,

    /// Coordinate convention for `bbox`.
    pub bbox_mode: BoxMode,

    /// Category of the object. Always [`PEN_CATEGORY_ID`].
    pub category_id: u32,
}

impl ObjectAnnotation {
    /// Creates a foreground annotation for the given box.
    pub fn pen(bbox: PixelBox) -> Self {
        Self {
            bbox,
            bbox_mode: BoxMode::XyxyAbs,
            category_id: PEN_CATEGORY_ID,
        }
    }
}

/// One record per distinct image, in source file order.
///
/// Invariants upheld by the loader: `annotations` is never empty (a record
/// is only created when its first box is seen), and every box in a record
/// came from a row carrying this record's `image_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Full path to the image file on disk.
    pub file_name: PathBuf,

    /// Image height in pixels, from the decoded image header.
    pub height: u32,

    /// Image width in pixels, from the decoded image header.
    pub width: u32,

    /// The source image identifier (filename stem in the annotation CSV).
    pub image_id: String,

    /// Annotated objects on this image, in source row order.
    pub annotations: Vec<ObjectAnnotation>,
}

impl ImageRecord {
    /// Creates a record seeded with its first annotation.
    pub fn with_first(
        file_name: impl Into<PathBuf>,
        width: u32,
        height: u32,
        image_id: impl Into<String>,
        first: ObjectAnnotation,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            height,
            width,
            image_id: image_id.into(),
            annotations: vec![first],
        }
    }

    /// Appends another annotation for the same image.
    pub fn push(&mut self, annotation: ObjectAnnotation) {
        self.annotations.push(annotation);
    }
}
