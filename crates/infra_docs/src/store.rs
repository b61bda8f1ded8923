//! On-disk document store
//!
//! Generated PDFs live under a single root directory, bills in one folder
//! per billing month and reports in a flat `reports/` folder. Everything
//! outside this module works with store-relative paths; the only place an
//! absolute path appears is when a file is actually written or served.

use std::fs;
use std::path::{Component, Path, PathBuf};

use chrono::NaiveDateTime;

use core_kernel::MonthRef;

use crate::error::DocumentError;

/// Timestamp suffix on bill filenames, e.g. `20250827_093015`
const BILL_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// A freshly allocated slot in the store
#[derive(Debug, Clone)]
pub struct StoredPath {
    /// Where to write the file
    pub absolute: PathBuf,
    /// What to persist and hand to download links
    pub relative: String,
}

/// Root of the generated-document tree
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Allocates a path for a bill PDF, creating the month folder on
    /// demand. The filename carries the guest name and a second-resolution
    /// timestamp, so repeated runs for one guest do not overwrite each
    /// other within the same second only.
    pub fn bill_path(
        &self,
        month: MonthRef,
        guest_name: &str,
        generated_at: NaiveDateTime,
    ) -> Result<StoredPath, DocumentError> {
        let relative = format!(
            "bills/bills for {}/bill_{}_{}.pdf",
            month.label(),
            sanitize_stem(guest_name),
            generated_at.format(BILL_STAMP_FORMAT)
        );
        self.allocate(relative)
    }

    /// Allocates the path for a monthly report PDF. Reports are keyed by
    /// year and month only, so rendering the same month again overwrites
    /// the previous file.
    pub fn report_path(&self, month: MonthRef) -> Result<StoredPath, DocumentError> {
        let relative = format!(
            "reports/monthly_report_{}_{}.pdf",
            month.year(),
            month.month()
        );
        self.allocate(relative)
    }

    /// Maps a store-relative path back to an absolute one for serving.
    /// Rejects absolute paths and any component that is not a plain name,
    /// so `..` cannot escape the root.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, DocumentError> {
        let candidate = Path::new(relative);
        let escapes = candidate
            .components()
            .any(|part| !matches!(part, Component::Normal(_)));
        if relative.is_empty() || escapes {
            return Err(DocumentError::InvalidPath(relative.to_string()));
        }
        Ok(self.root.join(candidate))
    }

    fn allocate(&self, relative: String) -> Result<StoredPath, DocumentError> {
        let absolute = self.root.join(&relative);
        if let Some(parent) = absolute.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(StoredPath { absolute, relative })
    }
}

/// Reduces a display name to a filename-safe stem: alphanumerics kept,
/// whitespace collapsed to underscores, everything else dropped.
fn sanitize_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            stem.push(c);
        } else if c.is_whitespace() && !stem.ends_with('_') {
            stem.push('_');
        }
    }
    stem.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_stem() {
        assert_eq!(sanitize_stem("Asha Verma"), "Asha_Verma");
        assert_eq!(sanitize_stem("  Ravi   Kumar  "), "Ravi_Kumar");
        assert_eq!(sanitize_stem("O'Brien / Jr."), "OBrien_Jr");
        assert_eq!(sanitize_stem("../../etc/passwd"), "etcpasswd");
    }

    #[test]
    fn test_resolve_rejects_escaping_paths() {
        let store = DocumentStore::new("/tmp/docs");

        assert!(store.resolve("../outside.pdf").is_err());
        assert!(store.resolve("/etc/passwd").is_err());
        assert!(store.resolve("bills/../../outside.pdf").is_err());
        assert!(store.resolve("").is_err());
    }

    #[test]
    fn test_resolve_joins_plain_paths() {
        let store = DocumentStore::new("/tmp/docs");
        let path = store
            .resolve("reports/monthly_report_2025_8.pdf")
            .unwrap();

        assert_eq!(
            path,
            PathBuf::from("/tmp/docs/reports/monthly_report_2025_8.pdf")
        );
    }
}
