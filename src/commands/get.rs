use crate::core::fetcher::DatasetFetcher;
use crate::error::Result;
use std::path::Path;

pub fn get_dataset(
    technique: &str,
    destination: &Path,
    dataset: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let fetcher = DatasetFetcher::new(technique, verbose)?;
    let path = fetcher.get(destination, dataset)?;

    if verbose {
        println!("✅ Dataset ready at {}", path.display());
    } else {
        println!("{}", path.display());
    }
    Ok(())
}
