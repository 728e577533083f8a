//! In-memory transport and archive builders shared by unit tests.

use crate::core::http::Transport;
use crate::error::{GanfetchError, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub struct FakeTransport {
    catalog: String,
    archives: HashMap<String, Vec<u8>>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn new(catalog: &str) -> Self {
        Self {
            catalog: catalog.to_string(),
            archives: HashMap::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_archive(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.archives.insert(url.to_string(), bytes);
        self
    }

    pub fn download_count(&self) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|url| self.archives.contains_key(*url))
            .count()
    }
}

impl Transport for FakeTransport {
    fn get_text(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(self.catalog.clone())
    }

    fn download(&self, url: &str, destination: &Path) -> Result<()> {
        self.requests.borrow_mut().push(url.to_string());
        let bytes = self.archives.get(url).ok_or_else(|| GanfetchError::HttpStatus {
            url: url.to_string(),
            status: 404,
        })?;
        std::fs::write(destination, bytes)?;
        Ok(())
    }
}

pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, data) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub fn tar_gz_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    for (name, data) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        builder.append_data(&mut header, name, *data).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}
