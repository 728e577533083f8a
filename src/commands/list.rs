use crate::core::fetcher::DatasetFetcher;
use crate::error::Result;

pub fn list_datasets(technique: &str) -> Result<()> {
    let fetcher = DatasetFetcher::new(technique, true)?;
    let options = fetcher.list_options()?;

    if options.is_empty() {
        println!("No datasets available for {technique}.");
        return Ok(());
    }

    println!("Available {technique} datasets:");
    for option in &options {
        println!("  • {option}");
    }

    println!();
    println!("Download: ganfetch get --technique {technique} --dataset <name>");
    Ok(())
}
