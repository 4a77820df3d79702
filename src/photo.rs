//! Student photos travel as `data:` URLs inside the record.

use std::fs;
use std::path::Path;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tokio::task;
use crate::error::KioskError;

pub const MAX_PHOTO_BYTES: usize = 2 * 1024 * 1024;

/// Opens a file dialog and returns the chosen image as a data URL.
/// `Ok(None)` when the dialog is cancelled.
pub async fn pick_photo() -> Result<Option<String>, KioskError> {
    task::spawn_blocking(|| {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image", &["png", "jpg", "jpeg"])
            .pick_file()
        else {
            return Ok(None);
        };
        read_photo(&path).map(Some)
    })
    .await
    .unwrap_or_else(|join_err| Err(KioskError::Storage(format!("Photo picker failed: {}", join_err))))
}

pub fn read_photo(path: &Path) -> Result<String, KioskError> {
    let bytes = fs::read(path)?;
    let mime = match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("png") => "image/png",
        _ => "image/jpeg",
    };
    encode_data_url(&bytes, mime)
}

pub fn encode_data_url(bytes: &[u8], mime: &str) -> Result<String, KioskError> {
    if bytes.len() > MAX_PHOTO_BYTES {
        return Err(KioskError::validation("File size too large (max 2MB)"));
    }
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Raw image bytes of a data URL (or of a bare base64 string).
pub fn decode_data_url(url: &str) -> Option<Vec<u8>> {
    let payload = match url.split_once(";base64,") {
        Some((_, data)) => data,
        None => url,
    };
    STANDARD.decode(payload.trim()).ok()
}
