//! Image manifest: in-memory record log and the persisted index
//!
//! Every successfully downloaded image contributes one [`ImageRecord`].
//! Records accumulate in completion order while downloads run concurrently,
//! and are serialized once, after the crawl has fully joined, as
//! `index.json` in the output directory.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// File name of the persisted manifest inside the output directory
pub const MANIFEST_FILE_NAME: &str = "index.json";

/// Metadata for one downloaded image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Absolute URL the image was fetched from
    pub url: String,

    /// Page the image was discovered on
    pub page: String,

    /// Crawl depth of the discovering page (seed page is depth 1)
    pub depth: u32,
}

/// The persisted manifest shape: `{"images": [...]}`
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ImageRecord>,
}

/// Append-only record log shared across concurrent downloads
///
/// Appends are serialized by a mutex; order reflects download completion,
/// not discovery.
#[derive(Debug, Default)]
pub struct ManifestLog {
    records: Mutex<Vec<ImageRecord>>,
}

impl ManifestLog {
    /// Appends one record
    pub fn record(&self, record: ImageRecord) {
        self.records.lock().unwrap().push(record);
    }

    /// Number of records logged so far
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Takes all accumulated records, leaving the log empty
    pub fn drain(&self) -> Vec<ImageRecord> {
        std::mem::take(&mut *self.records.lock().unwrap())
    }
}

/// Writes the manifest to `path`, pretty-printed with 4-space indentation
pub fn write_manifest(records: &[ImageRecord], path: &Path) -> crate::Result<()> {
    let manifest = Manifest {
        images: records.to_vec(),
    };

    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    manifest.serialize(&mut serializer)?;
    writer.flush()?;

    Ok(())
}
