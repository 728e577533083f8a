use crate::core::http::Transport;
use crate::error::{GanfetchError, Result};
use crate::utils::fs;
use flate2::read::GzDecoder;
use std::fs::File;
use std::path::{Path, PathBuf};
use tar::Archive;
use zip::ZipArchive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    TarGz,
    Zip,
}

impl ArchiveKind {
    pub fn from_file_name(name: &str) -> Option<Self> {
        if name.ends_with(".tar.gz") {
            Some(ArchiveKind::TarGz)
        } else if name.ends_with(".zip") {
            Some(ArchiveKind::Zip)
        } else {
            None
        }
    }
}

/// Downloads an archive next to its extraction directory, unpacks it, and removes it.
pub struct Downloader<'a, T: Transport> {
    transport: &'a T,
    verbose: bool,
}

impl<'a, T: Transport> Downloader<'a, T> {
    pub fn new(transport: &'a T, verbose: bool) -> Self {
        Self { transport, verbose }
    }

    pub fn download_and_extract(&self, url: &str, destination: &Path) -> Result<()> {
        fs::ensure_dir_exists(destination)?;

        let archive_path = destination.join(archive_file_name(url)?);
        log::debug!("Downloading {url} to {}", archive_path.display());
        self.transport.download(url, &archive_path)?;

        self.extract_archive(&archive_path, destination)?;

        fs::remove_file(&archive_path)?;
        log::debug!("Removed {}", archive_path.display());
        Ok(())
    }

    pub fn extract_archive(&self, archive_path: &Path, destination: &Path) -> Result<()> {
        let file_name = archive_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        let kind = ArchiveKind::from_file_name(file_name).ok_or_else(|| {
            GanfetchError::UnsupportedArchive {
                name: file_name.to_string(),
            }
        })?;

        if self.verbose {
            println!("Unpacking Data...");
        }

        match kind {
            ArchiveKind::TarGz => extract_tar_gz(archive_path, destination),
            ArchiveKind::Zip => extract_zip(archive_path, destination),
        }
    }
}

/// Last path segment of `url`, used as the temporary archive name.
pub fn archive_file_name(url: &str) -> Result<&str> {
    url.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| GanfetchError::InvalidUrl {
            url: url.to_string(),
            reason: "no file name in URL".to_string(),
        })
}

fn extract_tar_gz(archive_path: &Path, destination: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let decoder = GzDecoder::new(file);
    let mut archive = Archive::new(decoder);
    archive.unpack(destination)?;
    Ok(())
}

fn extract_zip(archive_path: &Path, destination: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| zip_error(archive_path, e))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| zip_error(archive_path, e))?;
        let outpath: PathBuf = match entry.enclosed_name() {
            Some(path) => destination.join(path),
            None => {
                log::warn!("Skipping unsafe zip entry {:?}", entry.name());
                continue;
            }
        };

        if entry.is_dir() {
            fs::ensure_dir_exists(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::ensure_dir_exists(parent)?;
            }
            let mut outfile = File::create(&outpath)?;
            std::io::copy(&mut entry, &mut outfile)?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
            }
        }
    }
    Ok(())
}

fn zip_error(path: &Path, error: zip::result::ZipError) -> GanfetchError {
    match error {
        zip::result::ZipError::Io(e) => GanfetchError::Io(e),
        other => GanfetchError::ArchiveError {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}
