use crate::error::{FetchError, Result};
use std::path::{Path, PathBuf};

pub const DATASET_URL: &str = "https://kaikki.org/dictionary/raw-wiktextract-data.jsonl.gz";
pub const DATA_DIR_NAME: &str = "data";
pub const DATASET_FILE_NAME: &str = "words.jsonl";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source_url: String,
    pub data_dir: PathBuf,
}

impl Config {
    /// Config rooted next to the running executable.
    pub fn new() -> Result<Self> {
        Ok(Self::with_base_dir(&get_program_dir()?))
    }

    pub fn with_base_dir(base_dir: &Path) -> Self {
        Config {
            source_url: DATASET_URL.to_string(),
            data_dir: base_dir.join(DATA_DIR_NAME),
        }
    }

    pub fn with_source_url<S: Into<String>>(mut self, url: S) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn destination(&self) -> PathBuf {
        self.data_dir.join(DATASET_FILE_NAME)
    }
}

fn get_program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(FetchError::ProgramDirectory)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        FetchError::ProgramDirectory(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{exe:?} has no parent directory"),
        ))
    })
}
