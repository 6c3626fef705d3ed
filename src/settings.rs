use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Where the feed fragments arrive (`pull set`).
    pub from_dir: Option<PathBuf>,
    /// Where combined, intermediate and final files go (`pull set`).
    pub to_dir: Option<PathBuf>,
    /// Keep the annotated text as `<YYYYMMDD>.partext` next to the output.
    #[serde(default)]
    pub keep_intermediate: bool,
}

impl Settings {
    /// `pull.toml` in the working directory if present, then `extra`, then
    /// `PULL_*` environment variables.
    pub fn load(extra: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::with_name("pull").required(false));
        if let Some(path) = extra {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder
            .add_source(Environment::with_prefix("PULL"))
            .build()
            .and_then(Config::try_deserialize)
            .context("loading settings")
    }
}
