use crate::core::catalog;
use crate::core::download::Downloader;
use crate::core::http::{HttpTransport, Transport};
use crate::core::select::{LineSelector, Selector};
use crate::core::technique::Technique;
use crate::error::{GanfetchError, Result};
use crate::utils::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Lists, downloads and unpacks the datasets published for one technique.
pub struct DatasetFetcher<T: Transport = HttpTransport> {
    technique: String,
    base_url: Option<&'static str>,
    verbose: bool,
    transport: T,
}

impl DatasetFetcher<HttpTransport> {
    /// An unrecognized `technique` is accepted here; the first request made with it fails.
    pub fn new(technique: &str, verbose: bool) -> Result<Self> {
        Ok(Self::with_transport(technique, verbose, HttpTransport::new()?))
    }
}

impl<T: Transport> DatasetFetcher<T> {
    pub fn with_transport(technique: &str, verbose: bool, transport: T) -> Self {
        Self {
            technique: technique.to_string(),
            base_url: Technique::from_name(technique).map(|t| t.catalog_url()),
            verbose,
            transport,
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Archive names currently linked from the catalog page.
    pub fn list_options(&self) -> Result<Vec<String>> {
        let url = self.catalog_url()?;
        let html = self.transport.get_text(url)?;
        let options = catalog::parse_options(&html);
        log::debug!("Found {} datasets at {url}", options.len());
        Ok(options)
    }

    pub fn select_option<S: Selector>(&self, selector: &mut S) -> Result<String> {
        let options = self.list_options()?;
        if options.is_empty() {
            return Err(GanfetchError::EmptyCatalog {
                url: self.catalog_url()?.to_string(),
            });
        }
        selector.select(&options)
    }

    /// Downloads `dataset` into `destination`, prompting on stdin when no dataset is given.
    pub fn get(&self, destination: &Path, dataset: Option<&str>) -> Result<PathBuf> {
        self.get_with(destination, dataset, &mut LineSelector::stdio())
    }

    pub fn get_with<S: Selector>(
        &self,
        destination: &Path,
        dataset: Option<&str>,
        selector: &mut S,
    ) -> Result<PathBuf> {
        let name = match dataset {
            Some(name) => name.to_string(),
            None => self.select_option(selector)?,
        };
        self.fetch_into(destination, &name, &mut io::stdout())
    }

    /// Returns the absolute extraction directory whether or not anything was downloaded.
    ///
    /// Progress lines go to `out` when verbose; the already-exists warning goes to the log only.
    pub(crate) fn fetch_into<W: Write>(
        &self,
        destination: &Path,
        dataset: &str,
        out: &mut W,
    ) -> Result<PathBuf> {
        let target = extraction_dir(destination, dataset);

        if target.is_dir() {
            log::warn!("'{}' already exists. Voiding Download.", target.display());
        } else {
            if self.verbose {
                writeln!(out, "Downloading Data...")?;
            }
            let url = format!("{}/{}", self.catalog_url()?, dataset);
            Downloader::new(&self.transport, self.verbose)
                .download_and_extract(&url, destination)?;
        }

        fs::absolute(&target)
    }

    fn catalog_url(&self) -> Result<&str> {
        self.base_url.ok_or_else(|| GanfetchError::InvalidUrl {
            url: String::new(),
            reason: format!("no dataset catalog for technique '{}'", self.technique),
        })
    }

}

/// `destination` joined with everything before the first '.' of the dataset name.
pub fn extraction_dir(destination: &Path, dataset: &str) -> PathBuf {
    let stem = dataset.split('.').next().unwrap_or(dataset);
    destination.join(stem)
}
