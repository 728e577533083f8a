pub mod catalog;
pub mod config;
pub mod download;
pub mod fetcher;
pub mod http;
pub mod select;
pub mod technique;

#[cfg(test)]
pub(crate) mod testing;
