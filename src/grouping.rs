//! Partition accepted files by fingerprint.
//!
//! Runs single-threaded after every batch has been joined. Buckets keep the
//! order in which fingerprints were first seen, so unique files and members
//! of a group come out in upload order.

use std::collections::HashMap;

use crate::types::{DuplicateGroup, ProcessedFile, ProcessingResult};

/// Split `files` into duplicate groups and unique files.
pub fn group_by_fingerprint(files: Vec<ProcessedFile>) -> ProcessingResult {
    let total_files = files.len();

    let mut slots: HashMap<String, usize> = HashMap::with_capacity(files.len());
    let mut buckets: Vec<Vec<ProcessedFile>> = Vec::new();
    for file in files {
        match slots.get(&file.hash) {
            Some(&slot) => buckets[slot].push(file),
            None => {
                slots.insert(file.hash.clone(), buckets.len());
                buckets.push(vec![file]);
            }
        }
    }

    let mut duplicate_groups = Vec::new();
    let mut unique_files = Vec::new();
    for mut bucket in buckets {
        if bucket.len() == 1 {
            unique_files.extend(bucket.pop());
        } else if let Some(group) = DuplicateGroup::from_members(bucket) {
            duplicate_groups.push(group);
        }
    }

    // Stable: ties keep discovery order.
    duplicate_groups.sort_by(|a, b| b.count.cmp(&a.count));
    let duplicate_count = duplicate_groups.iter().map(|g| g.count).sum();

    ProcessingResult {
        duplicate_groups,
        unique_files,
        total_files,
        duplicate_count,
    }
}
