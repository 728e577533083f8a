//! ganfetch library
//!
//! Lists, downloads and unpacks the CycleGAN and pix2pix datasets published on the Berkeley
//! dataset catalog pages.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::fetcher::DatasetFetcher;
pub use crate::core::technique::Technique;
pub use crate::error::{GanfetchError, Result};
