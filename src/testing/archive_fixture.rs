use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

enum FixtureEntry {
    Dir(String),
    File { name: String, content: Vec<u8>, mode: Option<u32> },
}

/// Builds in-memory zip payloads for tests.
#[derive(Default)]
pub struct ArchiveFixture {
    entries: Vec<FixtureEntry>,
}

impl ArchiveFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(mut self, name: &str) -> Self {
        self.entries.push(FixtureEntry::Dir(name.to_string()));
        self
    }

    pub fn file(mut self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.entries.push(FixtureEntry::File {
            name: name.to_string(),
            content: content.as_ref().to_vec(),
            mode: None,
        });
        self
    }

    pub fn executable(self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.file_with_mode(name, content, 0o755)
    }

    pub fn file_with_mode(mut self, name: &str, content: impl AsRef<[u8]>, mode: u32) -> Self {
        self.entries.push(FixtureEntry::File {
            name: name.to_string(),
            content: content.as_ref().to_vec(),
            mode: Some(mode),
        });
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for entry in self.entries {
            match entry {
                FixtureEntry::Dir(name) => {
                    writer.add_directory(name, SimpleFileOptions::default()).unwrap();
                }
                FixtureEntry::File { name, content, mode } => {
                    let mut options = SimpleFileOptions::default();
                    if let Some(mode) = mode {
                        options = options.unix_permissions(mode);
                    }
                    writer.start_file(name, options).unwrap();
                    writer.write_all(&content).unwrap();
                }
            }
        }
        writer.finish().unwrap().into_inner()
    }
}
