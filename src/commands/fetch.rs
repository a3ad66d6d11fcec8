use crate::core::config::Config;
use crate::core::download::Downloader;
use crate::error::Result;
use crate::utils::fs;
use std::path::PathBuf;

pub fn fetch_dataset() -> Result<()> {
    let config = Config::new()?;
    fetch_with_config(&config)?;
    Ok(())
}

pub fn fetch_with_config(config: &Config) -> Result<PathBuf> {
    fs::ensure_dir_exists(&config.data_dir)?;

    println!("Downloading {}...", config.source_url);

    let destination = config.destination();
    let downloader = Downloader::new()?;
    let bytes = downloader.fetch_gzip(&config.source_url, &destination)?;
    log::info!("Decompressed {bytes} bytes");

    println!("Saved to {}", destination.display());
    Ok(destination)
}
