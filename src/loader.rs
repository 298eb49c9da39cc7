//! Open Images bounding-box CSV reader.
//!
//! Parses an Open Images style annotation CSV and produces one
//! [`ImageRecord`] per run of rows sharing an image id, with boxes rescaled
//! from normalized to absolute pixel coordinates.
//!
//! # CSV Format Reference
//!
//! Comma-delimited with a header row that is skipped. Columns are accessed
//! by fixed index, matching the Open Images bbox export layout:
//!
//! | idx | column      | use                                  |
//! |-----|-------------|--------------------------------------|
//! | 0   | ImageID     | image identifier (filename stem)     |
//! | 4   | XMin        | normalized [0,1]                     |
//! | 5   | XMax        | normalized [0,1]                     |
//! | 6   | YMin        | normalized [0,1]                     |
//! | 7   | YMax        | normalized [0,1]                     |
//! | 10  | IsGroupOf   | read but currently unused            |
//! | 11  | IsDepiction | rows with "1" are skipped            |
//!
//! Images live at `<image_root>/<ImageID>.jpg`; each referenced image is
//! probed once for its pixel dimensions, because the CSV carries only
//! normalized coordinates.
//!
//! # Grouping Semantics
//!
//! Records are grouped by run-length adjacency in file order, not by a
//! global group-by: a row starts a new record exactly when its image id
//! differs from the previous kept row's id. An id that reappears after an
//! intervening different id therefore produces a second, separate record.
//! Downstream consumers rely on this ordering, so it must not be collapsed
//! into a keyed grouping.
//!
//! # Known Coordinate Quirk
//!
//! `y_min` is scaled by `width - 1` rather than `height - 1`, while `y_max`
//! uses `height - 1`. This reproduces the upstream loader this adapter
//! replaces byte-for-byte in its outputs; on non-square images it skews
//! `y_min`. Kept deliberately for parity with existing trained models —
//! do not change one axis without re-generating downstream artifacts.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::StringRecord;

use crate::error::OpenImagesError;
use crate::record::{ImageRecord, ObjectAnnotation, PixelBox};

const COL_IMAGE_ID: usize = 0;
const COL_X_MIN: usize = 4;
const COL_X_MAX: usize = 5;
const COL_Y_MIN: usize = 6;
const COL_Y_MAX: usize = 7;
#[allow(dead_code)]
const COL_IS_GROUP_OF: usize = 10; // carried by the format, not consumed yet
const COL_IS_DEPICTION: usize = 11;

/// Minimum number of fields a data row must have for index access.
const MIN_FIELDS: usize = 12;

/// Reads pen detection records from an Open Images bbox CSV.
///
/// # Arguments
/// * `csv_path` - Path to the annotation CSV file
/// * `image_root` - Directory containing `<ImageID>.jpg` files
///
/// # Errors
/// Returns an error if the CSV cannot be read, a row has fewer than 12
/// fields, a coordinate fails to parse as a float, or a referenced image
/// cannot be probed for its dimensions. Any such failure aborts the whole
/// load; no partial result is returned.
///
/// # Side effects
/// Opens and reads the header of every referenced image file, one per row.
pub fn load_openimages_csv(
    csv_path: &Path,
    image_root: &Path,
) -> Result<Vec<ImageRecord>, OpenImagesError> {
    let file = File::open(csv_path).map_err(OpenImagesError::Io)?;
    let reader = BufReader::new(file);

    // flexible() lets ragged rows through so the length check below can
    // report them as our own format error instead of a csv-crate one.
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records: Vec<ImageRecord> = Vec::new();

    for result in csv_reader.records() {
        let row = result.map_err(|source| OpenImagesError::CsvRead {
            path: csv_path.to_path_buf(),
            source,
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if row.len() < MIN_FIELDS {
            return Err(OpenImagesError::RowTooShort {
                path: csv_path.to_path_buf(),
                line,
                found: row.len(),
                expected: MIN_FIELDS,
            });
        }

        // Depictions (drawings of the object rather than the object) are
        // filtered out before the image is ever touched.
        if &row[COL_IS_DEPICTION] == "1" {
            continue;
        }

        let image_id = &row[COL_IMAGE_ID];
        let image_path = image_root.join(format!("{image_id}.jpg"));
        let size = imagesize::size(&image_path).map_err(|source| {
            OpenImagesError::ImageDimensionRead {
                path: image_path.clone(),
                source,
            }
        })?;
        let (w, h) = (size.width as f64, size.height as f64);

        let x_min = parse_coord(&row, COL_X_MIN, csv_path, line)? * (w - 1.0);
        let x_max = parse_coord(&row, COL_X_MAX, csv_path, line)? * (w - 1.0);
        // y_min uses the x extent; see the module docs before touching this.
        let y_min = parse_coord(&row, COL_Y_MIN, csv_path, line)? * (w - 1.0);
        let y_max = parse_coord(&row, COL_Y_MAX, csv_path, line)? * (h - 1.0);

        let annotation = ObjectAnnotation::pen(PixelBox::new(x_min, y_min, x_max, y_max));

        // Run-length grouping: the last record's image id is always the
        // previous kept row's id.
        match records.last_mut() {
            Some(last) if last.image_id == *image_id => last.push(annotation),
            _ => records.push(ImageRecord::with_first(
                image_path,
                size.width as u32,
                size.height as u32,
                image_id,
                annotation,
            )),
        }
    }

    log::info!(
        "Loaded {} image records from {}",
        records.len(),
        csv_path.display()
    );

    Ok(records)
}

fn parse_coord(
    row: &StringRecord,
    column: usize,
    csv_path: &Path,
    line: u64,
) -> Result<f64, OpenImagesError> {
    row[column]
        .parse::<f64>()
        .map_err(|source| OpenImagesError::CoordParse {
            path: csv_path.to_path_buf(),
            line,
            column,
            source,
        })
}
