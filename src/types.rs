//! Result model returned to callers.
//!
//! Field names serialize in camelCase to match what the upload UI consumes:
//!
//! ```json
//! {
//!   "duplicateGroups": [{ "hash": "…", "files": [ … ], "count": 2 }],
//!   "uniqueFiles": [ … ],
//!   "totalFiles": 3,
//!   "duplicateCount": 2
//! }
//! ```

use canonical::CanonicalizedDocument;
use ingest::InputFile;
use serde::{Deserialize, Serialize};

/// One accepted file with its decoded text and fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedFile {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub media_type: String,
    /// Decoded text as uploaded, for display.
    pub content: String,
    /// Canonical comparison form. Never shown as "the" content.
    pub normalized_content: String,
    /// Hex SHA-256 of `normalized_content`; the grouping key.
    pub hash: String,
    pub last_modified: i64,
    pub path: String,
    pub is_from_folder: bool,
}

impl ProcessedFile {
    pub(crate) fn new(file: &InputFile, content: String, doc: CanonicalizedDocument) -> Self {
        Self {
            name: file.name.clone(),
            size: file.size,
            media_type: file.media_type.clone(),
            content,
            normalized_content: doc.canonical_text,
            hash: doc.sha256_hex,
            last_modified: file.last_modified,
            path: file.declared_path().to_owned(),
            is_from_folder: file.is_from_folder(),
        }
    }

    /// Lowercased text after the last `.` of the name, if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .filter(|ext| !ext.is_empty() && !ext.contains('/'))
    }
}

/// Files sharing one fingerprint. Only built for two or more members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub hash: String,
    pub files: Vec<ProcessedFile>,
    pub count: usize,
}

impl DuplicateGroup {
    /// Returns `None` for fewer than two members.
    pub(crate) fn from_members(files: Vec<ProcessedFile>) -> Option<Self> {
        if files.len() < 2 {
            return None;
        }
        let hash = files[0].hash.clone();
        debug_assert!(files.iter().all(|f| f.hash == hash));
        Some(Self {
            hash,
            count: files.len(),
            files,
        })
    }
}

/// Outcome of one upload.
///
/// `total_files == duplicate_count + unique_files.len()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    /// Sorted by descending `count`; equal counts keep discovery order.
    pub duplicate_groups: Vec<DuplicateGroup>,
    /// Files whose fingerprint occurs once, in discovery order.
    pub unique_files: Vec<ProcessedFile>,
    /// Accepted files. Dropped files are not counted.
    pub total_files: usize,
    /// Sum of `count` over all duplicate groups.
    pub duplicate_count: usize,
}
