//! Upload-side data types.
//!
//! [`InputFile`] is what the caller hands to the pipeline: one uploaded file
//! with its declared attributes and raw bytes. [`DecodedText`] is what the
//! ingest stage hands back once a file has been admitted.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// One uploaded file as declared by the client.
///
/// Every attribute except `content` is client-declared and untrusted. The
/// struct is immutable once built; workers receive it by value and the byte
/// buffer is reference counted, so moving it between tasks does not copy the
/// content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// File name as sent by the client. May contain separators.
    pub name: String,

    /// Declared size in bytes.
    pub size: u64,

    /// Declared media type. Advisory only; empty when unknown.
    pub media_type: String,

    /// Raw file bytes.
    pub content: Bytes,

    /// Client-declared modification time, milliseconds since the Unix epoch.
    pub last_modified: i64,

    /// Relative path inside an uploaded folder tree, if any.
    pub relative_path: Option<String>,
}

impl InputFile {
    /// Build a file whose declared size matches its content length.
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let content = content.into();
        Self {
            name: name.into(),
            size: content.len() as u64,
            media_type: String::new(),
            content,
            last_modified: 0,
            relative_path: None,
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    pub fn with_last_modified(mut self, millis: i64) -> Self {
        self.last_modified = millis;
        self
    }

    pub fn with_relative_path(mut self, path: impl Into<String>) -> Self {
        self.relative_path = Some(path.into());
        self
    }

    /// Override the declared size. Clients may declare a size that differs
    /// from the bytes actually received.
    pub fn with_declared_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// The path the client declared for this file, falling back to the bare
    /// name for individually selected files.
    pub fn declared_path(&self) -> &str {
        match self.relative_path.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => &self.name,
        }
    }

    /// Whether the file came from a folder upload.
    ///
    /// Heuristic on caller-supplied strings: the declared path contains a `/`
    /// and is not identical to the bare name. Display hint only.
    pub fn is_from_folder(&self) -> bool {
        let path = self.declared_path();
        path.contains('/') && path != self.name
    }
}

/// Encoding that produced a [`DecodedText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    /// Bytes were valid UTF-8.
    Utf8,
    /// Bytes were not valid UTF-8 and were mapped one byte per character.
    Latin1,
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text recovered from an admitted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: TextEncoding,
}

impl DecodedText {
    /// Length in Unicode scalar values (not UTF-16 units), the unit the
    /// content ceiling is expressed in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
