use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Uploaded files live flat in one directory under a uuid-prefixed name, so
/// two uploads with the same original filename never collide.
pub struct FileStore {
    upload_dir: PathBuf,
}

impl FileStore {
    pub fn new(upload_dir: &str) -> Self {
        Self {
            upload_dir: PathBuf::from(upload_dir),
        }
    }

    pub fn store(&self, source: &Path, original_name: &str) -> AppResult<String> {
        std::fs::create_dir_all(&self.upload_dir)
            .map_err(|e| AppError::Internal(format!("Failed to create upload dir: {}", e)))?;

        let sanitized = sanitize_filename(original_name);
        let stored_name = format!("{}_{}", Uuid::new_v4().simple(), sanitized);
        let target = self.upload_dir.join(&stored_name);

        std::fs::copy(source, &target)
            .map_err(|e| AppError::Internal(format!("Failed to store upload: {}", e)))?;

        Ok(stored_name)
    }

    /// Resolves a previously stored name for download; path components in
    /// the request are rejected so nothing outside the upload dir is served.
    pub fn resolve(&self, stored_name: &str) -> AppResult<PathBuf> {
        if stored_name.contains('/') || stored_name.contains('\\') || stored_name.contains("..") {
            return Err(AppError::Validation("Invalid file name".to_string()));
        }

        let path = self.upload_dir.join(stored_name);
        if !path.is_file() {
            return Err(AppError::NotFound(format!("File '{}' not found", stored_name)));
        }
        Ok(path)
    }
}

fn sanitize_filename(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload");
    base.chars()
        .map(|c| if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("skillforge-store-{}-{}", label, Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_store_prefixes_and_preserves_extension() {
        let dir = temp_dir("store");
        let store = FileStore::new(dir.to_str().unwrap());

        let src = dir.join("input.pdf");
        let mut f = std::fs::File::create(&src).unwrap();
        f.write_all(b"pdf bytes").unwrap();

        let stored = store.store(&src, "lecture notes.pdf").unwrap();
        assert!(stored.ends_with("_lecture_notes.pdf"));
        assert!(dir.join(&stored).is_file());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let dir = temp_dir("resolve");
        let store = FileStore::new(dir.to_str().unwrap());

        assert!(matches!(
            store.resolve("../etc/passwd"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            store.resolve("missing.pdf"),
            Err(AppError::NotFound(_))
        ));

        std::fs::remove_dir_all(&dir).ok();
    }
}
