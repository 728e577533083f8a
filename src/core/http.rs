use crate::error::{GanfetchError, Result};
use crate::utils::fs;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::fs::File;
use std::path::Path;

const USER_AGENT_STRING: &str = concat!("ganfetch/", env!("CARGO_PKG_VERSION"));

/// The two GETs the fetcher needs: a page as text and an archive straight to disk.
pub trait Transport {
    fn get_text(&self, url: &str) -> Result<String>;

    /// Writes the response body to `destination`, replacing any existing file.
    fn download(&self, url: &str, destination: &Path) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get_text(&self, url: &str) -> Result<String> {
        (**self).get_text(url)
    }

    fn download(&self, url: &str, destination: &Path) -> Result<()> {
        (**self).download(url, destination)
    }
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STRING));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| GanfetchError::network("<client>", e))?;

        Ok(Self { client })
    }

    fn send(&self, url: &str) -> Result<reqwest::blocking::Response> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| classify_send_error(url, e))?;

        let status = response.status();
        log::debug!("Received HTTP {status} for {url}");

        if !status.is_success() {
            return Err(GanfetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

impl Transport for HttpTransport {
    fn get_text(&self, url: &str) -> Result<String> {
        self.send(url)?
            .text()
            .map_err(|e| GanfetchError::network(url, e))
    }

    fn download(&self, url: &str, destination: &Path) -> Result<()> {
        let mut response = self.send(url)?;

        if let Some(parent) = destination.parent() {
            fs::ensure_dir_exists(parent)?;
        }

        let mut file = File::create(destination)?;
        let written = response
            .copy_to(&mut file)
            .map_err(|e| GanfetchError::network(url, e))?;

        log::debug!("Wrote {written} bytes to {}", destination.display());
        Ok(())
    }
}

fn classify_send_error(url: &str, error: reqwest::Error) -> GanfetchError {
    if error.is_builder() {
        GanfetchError::InvalidUrl {
            url: url.to_string(),
            reason: error.to_string(),
        }
    } else {
        GanfetchError::network(url, error)
    }
}
