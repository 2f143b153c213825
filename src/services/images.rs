//! Image storage service
//!
//! Uploaded files live under the configured uploads root, partitioned by
//! `devices/<manufacturer>/<device>/` or `projects/<project>/`. Every path
//! segment coming from a client is sanitized before it touches the
//! filesystem.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{AppError, AppResult};

/// Maximum number of files accepted by one upload request
pub const MAX_UPLOAD_FILES: usize = 25;

/// Target partition of an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Device,
    Project,
}

impl std::str::FromStr for ImageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "device" => Ok(ImageKind::Device),
            "project" => Ok(ImageKind::Project),
            _ => Err(format!("Invalid image type: {}", s)),
        }
    }
}

#[derive(Clone)]
pub struct ImagesService {
    root: PathBuf,
}

impl ImagesService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root of the uploads tree (served read-only by the router)
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Store one uploaded file under the device partition.
    /// Returns the stored path relative to the uploads root.
    pub async fn store_device_image(
        &self,
        manufacturer: &str,
        device: &str,
        filename: &str,
        data: &[u8],
    ) -> AppResult<String> {
        let dir = PathBuf::from("devices")
            .join(sanitize_segment(manufacturer)?)
            .join(sanitize_segment(device)?);
        self.store(dir, filename, data).await
    }

    /// Store one uploaded file under the project partition.
    /// Returns the stored path relative to the uploads root.
    pub async fn store_project_image(
        &self,
        project: &str,
        filename: &str,
        data: &[u8],
    ) -> AppResult<String> {
        let dir = PathBuf::from("projects").join(sanitize_segment(project)?);
        self.store(dir, filename, data).await
    }

    async fn store(&self, rel_dir: PathBuf, filename: &str, data: &[u8]) -> AppResult<String> {
        let filename = sanitize_segment(filename)?;
        let dir = self.root.join(&rel_dir);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to create upload directory: {}", e)))?;

        let path = dir.join(&filename);
        fs::write(&path, data)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to write uploaded file: {}", e)))?;

        let rel = rel_dir.join(&filename);
        Ok(rel.to_string_lossy().replace('\\', "/"))
    }
}

/// Reduce a client-supplied path segment to a safe single component.
///
/// Whitespace runs become underscores; anything outside
/// `[A-Za-z0-9._-]` is dropped. Empty results and dot-only names are
/// rejected.
pub fn sanitize_segment(segment: &str) -> AppResult<String> {
    // Strip any path the client smuggled into a filename
    let base = segment
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = super::slug::normalize(base)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        return Err(AppError::Validation(format!(
            "Invalid path segment: '{}'",
            segment
        )));
    }
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_plain_names() {
        assert_eq!(sanitize_segment("photo.png").unwrap(), "photo.png");
        assert_eq!(sanitize_segment("3D Printer Lab").unwrap(), "3d_printer_lab");
    }

    #[test]
    fn test_sanitize_strips_paths() {
        assert_eq!(sanitize_segment("/etc/passwd").unwrap(), "passwd");
        assert_eq!(sanitize_segment("a\\b\\evil.png").unwrap(), "evil.png");
    }

    #[test]
    fn test_sanitize_rejects_traversal() {
        assert!(sanitize_segment("..").is_err());
        assert!(sanitize_segment(".").is_err());
        assert!(sanitize_segment("").is_err());
        assert!(sanitize_segment("///").is_err());
    }

    #[tokio::test]
    async fn test_store_partitions_by_kind() {
        let tmp = tempfile::tempdir().unwrap();
        let service = ImagesService::new(tmp.path());

        let rel = service
            .store_device_image("Acme Corp", "Laser Cutter", "front.png", b"png")
            .await
            .unwrap();
        assert_eq!(rel, "devices/acme_corp/laser_cutter/front.png");
        assert!(tmp.path().join(&rel).exists());

        let rel = service
            .store_project_image("solar_car", "team.jpg", b"jpg")
            .await
            .unwrap();
        assert_eq!(rel, "projects/solar_car/team.jpg");
        assert!(tmp.path().join(&rel).exists());
    }
}
