//! In-memory ZIP packaging for bulk downloads.

use std::collections::HashSet;
use std::io::{Cursor, Write};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Failed to write archive entry '{name}': {source}")]
    Entry {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to build archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Builds a ZIP archive entry by entry, in insertion order.
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    names: HashSet<String>,
    entries: usize,
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            names: HashSet::new(),
            entries: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Append a file. Duplicate names get a ` (n)` suffix before the
    /// extension so no entry is shadowed.
    pub fn add_file(&mut self, name: &str, bytes: &[u8]) -> Result<String, ArchiveError> {
        let unique = self.unique_name(name);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.writer.start_file(unique.clone(), options)?;
        self.writer
            .write_all(bytes)
            .map_err(|source| ArchiveError::Entry {
                name: unique.clone(),
                source,
            })?;
        self.names.insert(unique.clone());
        self.entries += 1;
        Ok(unique)
    }

    pub fn finish(self) -> Result<Vec<u8>, ArchiveError> {
        let cursor = self.writer.finish()?;
        Ok(cursor.into_inner())
    }

    fn unique_name(&self, name: &str) -> String {
        let name = if name.trim().is_empty() { "file" } else { name };
        if !self.names.contains(name) {
            return name.to_string();
        }
        let (stem, ext) = match name.rfind('.') {
            Some(pos) if pos > 0 => (&name[..pos], &name[pos..]),
            _ => (name, ""),
        };
        let mut n = 1;
        loop {
            let candidate = format!("{} ({}){}", stem, n, ext);
            if !self.names.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn test_archive_keeps_insertion_order() {
        let mut builder = ArchiveBuilder::new();
        builder.add_file("b.jpg", b"bbb").unwrap();
        builder.add_file("a.jpg", b"aaaa").unwrap();
        builder.add_file("c.png", b"c").unwrap();
        assert_eq!(builder.len(), 3);

        let bytes = builder.finish().unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 3);
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["b.jpg", "a.jpg", "c.png"]);

        let mut content = Vec::new();
        archive.by_index(1).unwrap().read_to_end(&mut content).unwrap();
        assert_eq!(content, b"aaaa");
    }

    #[test]
    fn test_duplicate_names_are_suffixed() {
        let mut builder = ArchiveBuilder::new();
        assert_eq!(builder.add_file("fault.jpg", b"1").unwrap(), "fault.jpg");
        assert_eq!(builder.add_file("fault.jpg", b"2").unwrap(), "fault (1).jpg");
        assert_eq!(builder.add_file("fault.jpg", b"3").unwrap(), "fault (2).jpg");
        assert_eq!(builder.add_file("", b"4").unwrap(), "file");
    }

    #[test]
    fn test_empty_archive_is_valid() {
        let builder = ArchiveBuilder::new();
        assert!(builder.is_empty());
        let bytes = builder.finish().unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
