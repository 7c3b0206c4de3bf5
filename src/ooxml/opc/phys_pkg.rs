//! Provides a general interface to a physical OPC package (ZIP file).
//!
//! This module handles the low-level writing of OPC packages to ZIP archives.
//! Every entry carries the same fixed modification time (the DOS epoch,
//! 1980-01-01), so identical parts always produce identical archive bytes.

use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::packuri::PackURI;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Physical package writer for creating OPC packages.
///
/// Handles the low-level writing of parts to an in-memory ZIP archive.
pub struct PhysPkgWriter {
    /// The underlying ZIP archive writer
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    fn options(method: CompressionMethod) -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(method)
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644)
    }

    /// Write a part to the package with Deflate compression.
    ///
    /// # Arguments
    /// * `pack_uri` - The PackURI for the part
    /// * `blob` - The binary content to write
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.archive.start_file(
            pack_uri.membername(),
            Self::options(CompressionMethod::Deflated),
        )?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    ///
    /// Consumes the writer and returns the complete ZIP archive.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_member(zip_data: &[u8], name: &str) -> Vec<u8> {
        let mut archive = ZipArchive::new(Cursor::new(zip_data)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_round_trip() {
        let mut writer = PhysPkgWriter::new();
        let pack_uri = PackURI::new("/test.txt").unwrap();
        writer.write(&pack_uri, b"Hello, World!").unwrap();
        let zip_data = writer.finish().unwrap();

        assert_eq!(read_member(&zip_data, "test.txt"), b"Hello, World!");
    }

    #[test]
    fn test_multiple_parts_keep_order() {
        let mut writer = PhysPkgWriter::new();

        let content_types = PackURI::new("/[Content_Types].xml").unwrap();
        let rels = PackURI::new("/_rels/.rels").unwrap();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();

        writer.write(&content_types, b"<Types/>").unwrap();
        writer.write(&rels, b"<Relationships/>").unwrap();
        writer.write(&pres, b"<p:presentation/>").unwrap();

        let zip_data = writer.finish().unwrap();
        let archive = ZipArchive::new(Cursor::new(&zip_data)).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert_eq!(names.len(), 3);
        assert_eq!(read_member(&zip_data, "ppt/presentation.xml"), b"<p:presentation/>");
    }

    #[test]
    fn test_output_is_reproducible() {
        let build = || {
            let mut writer = PhysPkgWriter::new();
            writer
                .write(&PackURI::new("/a.xml").unwrap(), b"<a/>")
                .unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }
}
