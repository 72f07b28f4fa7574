use crate::core::AssetSource;
use crate::domain::model::Asset;
use std::path::Path;

/// MIME type guessed from a file extension.
pub fn mime_type_for(path: &str) -> &'static str {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Read an optional asset. Any failure is logged and reported as absent.
pub async fn load_optional<A: AssetSource>(source: &A, path: Option<&str>) -> Option<Asset> {
    let path = path?;
    match source.read_asset(path).await {
        Ok(bytes) => {
            tracing::debug!("Loaded asset {} ({} bytes)", path, bytes.len());
            Some(Asset {
                path: path.to_string(),
                mime_type: mime_type_for(path).to_string(),
                bytes,
            })
        }
        Err(e) => {
            tracing::warn!("Asset {} unavailable, using placeholder: {}", path, e);
            None
        }
    }
}
