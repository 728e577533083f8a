use ganfetch::core::http::Transport;
use ganfetch::{DatasetFetcher, GanfetchError, Result};
use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const CATALOG: &str = r#"<html><body>
<a href="?C=N;O=D">Name</a>
<a href="facades.zip">facades.zip</a>
<a href="night2day.tar.gz">night2day.tar.gz</a>
<a href="notes.txt">notes.txt</a>
</body></html>"#;

struct StaticServer {
    archive: Vec<u8>,
    downloads: Cell<usize>,
}

impl Transport for StaticServer {
    fn get_text(&self, _url: &str) -> Result<String> {
        Ok(CATALOG.to_string())
    }

    fn download(&self, _url: &str, destination: &Path) -> Result<()> {
        self.downloads.set(self.downloads.get() + 1);
        std::fs::write(destination, &self.archive)?;
        Ok(())
    }
}

fn facades_zip() -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .add_directory("facades/", SimpleFileOptions::default())
        .unwrap();
    writer
        .start_file("facades/train/1.jpg", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"jpeg").unwrap();
    writer.finish().unwrap().into_inner()
}

fn server() -> StaticServer {
    StaticServer {
        archive: facades_zip(),
        downloads: Cell::new(0),
    }
}

#[test]
fn test_list_options_from_catalog() {
    let fetcher = DatasetFetcher::with_transport("pix2pix", false, server());
    assert_eq!(
        fetcher.list_options().unwrap(),
        vec!["facades.zip", "night2day.tar.gz"]
    );
}

#[test]
fn test_second_get_reuses_extracted_directory() {
    let temp = TempDir::new().unwrap();
    let server = server();
    let fetcher = DatasetFetcher::with_transport("pix2pix", false, &server);

    let first = fetcher.get(temp.path(), Some("facades.zip")).unwrap();
    let second = fetcher.get(temp.path(), Some("facades.zip")).unwrap();

    assert_eq!(first, second);
    assert_eq!(server.downloads.get(), 1);
    assert_eq!(std::fs::read(first.join("train/1.jpg")).unwrap(), b"jpeg");
    assert!(!temp.path().join("facades.zip").exists());
}

#[test]
fn test_unsupported_archive_keeps_download() {
    let temp = TempDir::new().unwrap();
    let server = server();
    let fetcher = DatasetFetcher::with_transport("cyclegan", false, &server);

    let err = fetcher.get(temp.path(), Some("data.rar")).unwrap_err();

    assert!(matches!(err, GanfetchError::UnsupportedArchive { ref name } if name == "data.rar"));
    assert!(temp.path().join("data.rar").is_file());
    assert!(!temp.path().join("data").exists());
}
