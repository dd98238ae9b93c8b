//! Zip payload builder for integration tests.

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

#[derive(Default)]
pub(crate) struct ArchiveBuilder {
    writer: Option<ZipWriter<Cursor<Vec<u8>>>>,
}

impl ArchiveBuilder {
    pub(crate) fn new() -> Self {
        Self { writer: Some(ZipWriter::new(Cursor::new(Vec::new()))) }
    }

    fn writer(&mut self) -> &mut ZipWriter<Cursor<Vec<u8>>> {
        self.writer.as_mut().expect("archive already finished")
    }

    /// Add a directory entry; `name` should end with `/`.
    pub(crate) fn dir(mut self, name: &str) -> Self {
        self.writer().add_directory(name, SimpleFileOptions::default()).expect("add directory");
        self
    }

    pub(crate) fn file(mut self, name: &str, content: &str) -> Self {
        let writer = self.writer();
        writer.start_file(name, SimpleFileOptions::default()).expect("start file");
        writer.write_all(content.as_bytes()).expect("write file");
        self
    }

    pub(crate) fn build(mut self) -> Vec<u8> {
        let writer = self.writer.take().expect("archive already finished");
        writer.finish().expect("finish archive").into_inner()
    }
}
