//! Helpers for reading packages back

#![allow(dead_code)]

use std::io::{Cursor, Read};

use duke_stream::{WriterOptions, XlsxStreamWriter};

/// In-memory writer, so tests don't touch the temp dir
pub fn memory_writer() -> XlsxStreamWriter {
    XlsxStreamWriter::with_options(WriterOptions::new().with_in_memory(true))
}

/// Unzipped package
pub struct Package {
    archive: zip::ZipArchive<Cursor<Vec<u8>>>,
}

impl Package {
    pub fn open(bytes: Vec<u8>) -> Self {
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
        Self { archive }
    }

    /// Entry names in archive order
    pub fn entries(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect::<Vec<_>>()
    }

    pub fn has(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }

    pub fn part(&mut self, name: &str) -> String {
        let mut file = self
            .archive
            .by_name(name)
            .unwrap_or_else(|_| panic!("missing part {name}"));
        let mut content = String::new();
        file.read_to_string(&mut content).expect("UTF-8 part");
        content
    }
}
