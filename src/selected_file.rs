use std::fmt;
use std::path::Path;
use std::sync::Arc;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Arc<[u8]>) -> Self {
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            mime: mime.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, mime_from_path(path), bytes.into()))
    }

    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / BYTES_PER_MB)
    }

    /// Same underlying buffer, not just equal contents.
    pub fn is_same_buffer(&self, bytes: &Arc<[u8]>) -> bool {
        Arc::ptr_eq(&self.bytes, bytes)
    }
}

// Image payloads are megabytes; keep them out of the logs.
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("mime", &self.mime)
            .finish()
    }
}

pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

pub fn mime_from_path(path: &Path) -> String {
    match image::ImageFormat::from_path(path) {
        Ok(format) => format.to_mime_type().to_string(),
        Err(_) => FALLBACK_MIME.to_string(),
    }
}

/// Prefers the platform-supplied media type, falling back to the extension.
pub fn resolve_mime(reported: &str, path: Option<&Path>, name: &str) -> String {
    if !reported.is_empty() {
        return reported.to_string();
    }
    match path {
        Some(path) => mime_from_path(path),
        None => mime_from_path(Path::new(name)),
    }
}
