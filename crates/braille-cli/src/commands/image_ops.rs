use std::fs;
use std::io;
use std::path::Path;

use base64::{engine::general_purpose, Engine};
use tracing::debug;

pub fn extension_to_media_type(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Image reference for the print sheet. Local files are inlined as a `data:`
/// URI so the sheet does not depend on where it is written; data and web
/// URIs are kept as given.
pub fn image_source(src: &str) -> io::Result<String> {
    if ["data:", "http://", "https://"]
        .iter()
        .any(|p| src.starts_with(p))
    {
        return Ok(src.to_string());
    }
    let path = Path::new(src);
    let bytes = fs::read(path)?;
    let media_type = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or("application/octet-stream", extension_to_media_type);
    debug!(src, len = bytes.len(), media_type, "inlining image");
    Ok(format!(
        "data:{media_type};base64,{}",
        general_purpose::STANDARD.encode(bytes)
    ))
}
