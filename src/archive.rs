use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Bundles a finished series folder into `<folder>.zip`, every regular file
/// stored under its path relative to the folder root.
pub fn zip_folder(folder: &Path) -> Result<PathBuf> {
    let zip_path = PathBuf::from(format!("{}.zip", folder.display()));
    let file = File::create(&zip_path)
        .with_context(|| format!("creating archive {}", zip_path.display()))?;

    let mut zip = ZipWriter::new(file);
    add_directory(&mut zip, folder, folder)?;
    zip.finish()?;

    info!("archive created: {}", zip_path.display());
    Ok(zip_path)
}

fn add_directory(zip: &mut ZipWriter<File>, root: &Path, dir: &Path) -> Result<()> {
    let options = SimpleFileOptions::default();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            add_directory(zip, root, &path)?;
        } else {
            let name = path
                .strip_prefix(root)
                .expect("walked path is under the root")
                .to_string_lossy()
                .into_owned();
            zip.start_file(name, options)?;
            io::copy(&mut File::open(&path)?, zip)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::io::Read;

    #[test]
    fn every_file_appears_once_with_relative_name() {
        let dir = tempfile::tempdir().unwrap();
        let series = dir.path().join("Ma_Série");
        fs::create_dir_all(series.join("Chapitre_001")).unwrap();
        fs::create_dir_all(series.join("Chapitre_002")).unwrap();
        fs::write(series.join("metadata.json"), b"{}").unwrap();
        fs::write(series.join("cover.jpg"), b"\xff\xd8").unwrap();
        fs::write(series.join("Chapitre_001").join("001.jpg"), b"a").unwrap();
        fs::write(series.join("Chapitre_002").join("001.png"), b"b").unwrap();

        let zip_path = zip_folder(&series).unwrap();
        assert_eq!(zip_path, dir.path().join("Ma_Série.zip"));

        let mut archive = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        let names: BTreeSet<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names.len(), archive.len(), "duplicate entry names");
        let expected: BTreeSet<String> = [
            "metadata.json",
            "cover.jpg",
            "Chapitre_001/001.jpg",
            "Chapitre_002/001.png",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn archived_contents_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let series = dir.path().join("solo");
        fs::create_dir_all(&series).unwrap();
        fs::write(series.join("metadata.json"), b"{\"title\":\"x\"}").unwrap();

        let zip_path = zip_folder(&series).unwrap();
        let mut archive = zip::ZipArchive::new(File::open(zip_path).unwrap()).unwrap();
        let mut contents = String::new();
        archive
            .by_name("metadata.json")
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "{\"title\":\"x\"}");
    }
}
