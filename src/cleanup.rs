use std::path::Path;

pub fn remove_temp_dir(temp: &Path) {
    if !temp.exists() {
        return;
    }

    tracing::debug!("Removing temporary directory \"{}\"", temp.display());

    if let Err(err) = std::fs::remove_dir_all(temp) {
        tracing::warn!(
            "Could not remove temporary directory \"{}\": {err}",
            temp.display()
        );
    }
}

pub fn remove_partial_file(path: &Path) {
    if path.exists() {
        tracing::debug!("Removing partial file \"{}\"", path.display());

        if let Err(err) = std::fs::remove_file(path) {
            tracing::debug!("Could not remove \"{}\": {err}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_removal_is_recursive_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let temp = dir.path().join("hscan_temp");
        std::fs::create_dir_all(temp.join("nested")).unwrap();
        std::fs::write(temp.join("nested").join("scan.tiff"), "x").unwrap();

        remove_temp_dir(&temp);
        assert!(!temp.exists());

        remove_temp_dir(&temp);
    }

    #[test]
    fn partial_file_removal_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let raster = dir.path().join("hscan_scan.tiff");
        std::fs::write(&raster, "partial").unwrap();

        remove_partial_file(&raster);
        assert!(!raster.exists());

        remove_partial_file(&raster);
        remove_partial_file(dir.path());
        assert!(dir.path().is_dir());
    }
}
