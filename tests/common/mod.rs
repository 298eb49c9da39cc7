use std::fs;
use std::path::Path;

pub const OI_HEADER: &str = "ImageID,Source,LabelName,Confidence,XMin,XMax,YMin,YMax,\
                             IsOccluded,IsTruncated,IsGroupOf,IsDepiction,IsInside\n";

pub fn bmp_bytes(width: u32, height: u32) -> Vec<u8> {
    let row_stride = (width * 3).div_ceil(4) * 4;
    let pixel_array_size = row_stride * height;
    let file_size = 54 + pixel_array_size;

    let mut bytes = Vec::with_capacity(file_size as usize);
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&file_size.to_le_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes.extend_from_slice(&54u32.to_le_bytes());

    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&(width as i32).to_le_bytes());
    bytes.extend_from_slice(&(height as i32).to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&pixel_array_size.to_le_bytes());
    bytes.extend_from_slice(&2835u32.to_le_bytes());
    bytes.extend_from_slice(&2835u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());

    bytes.resize(file_size as usize, 0);
    bytes
}

/// Writes image bytes for `image_id` the way the loader expects to find
/// them: `<dir>/<image_id>.jpg`. Dimension probing sniffs file content, so
/// BMP bytes under a .jpg name are fine for tests.
pub fn write_image(dir: &Path, image_id: &str, width: u32, height: u32) {
    fs::create_dir_all(dir).expect("create image dir");
    fs::write(dir.join(format!("{image_id}.jpg")), bmp_bytes(width, height))
        .expect("write image file");
}

/// One Open Images bbox CSV data row with the columns the loader reads
/// filled in and the rest set to plausible fixed values.
pub fn oi_row(id: &str, xmin: f64, xmax: f64, ymin: f64, ymax: f64, depiction: &str) -> String {
    format!("{id},freeform,/m/0k1tl,1,{xmin},{xmax},{ymin},{ymax},0,0,0,{depiction},0\n")
}
