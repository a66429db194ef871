use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::config::RunConfig;

pub const TEMP_DIR_NAME: &str = "hscan_temp";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Layout {
    pub target: PathBuf,
    pub output: PathBuf,
    pub temp: PathBuf,
}

impl Layout {
    /// An explicit `--directory` receives documents directly; the default
    /// target sorts them into one subdirectory per extension.
    pub fn resolve(config: &RunConfig, extension: &str) -> Result<Self> {
        let (target, output) = match &config.target_directory {
            Some(dir) => (dir.clone(), dir.clone()),
            None => {
                let target = default_target()?;
                let output = target.join(extension);
                (target, output)
            }
        };

        let temp = target.join(TEMP_DIR_NAME);

        Ok(Self {
            target,
            output,
            temp,
        })
    }

    pub fn provision(&self) -> Result<()> {
        ensure_dir(&self.target)?;
        ensure_dir(&self.output)?;
        ensure_dir(&self.temp)?;
        Ok(())
    }
}

fn default_target() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Cannot determine the home directory")?;
    Ok(home.join("Documents").join("HScan"))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        tracing::debug!("Creating directory \"{}\"", path.display());

        if let Err(err) = std::fs::create_dir_all(path) {
            tracing::debug!("create_dir_all failed: {err}");
        }
    }

    if !path.is_dir() {
        bail!("Cannot create directory \"{}\".", path.display());
    }

    Ok(())
}
