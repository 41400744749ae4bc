use std::fs::File;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Everything extracted once from a series page. Written to
/// `metadata.json` inside the series folder and never mutated afterward.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesMetadata {
    pub title: String,
    pub alt_name: String,
    pub authors: Vec<String>,
    pub artists: Vec<String>,
    pub genres: Vec<String>,
    /// Only set when the page carries an all-digit release date.
    pub release_year: Option<u32>,
    pub status: String,
    pub summary: String,
    pub thumbnail_path: String,
}

impl SeriesMetadata {
    /// Serializes to `<dir>/metadata.json`, pretty-printed UTF-8 with
    /// non-ASCII characters kept literal.
    pub fn write_json(&self, dir: &Path) -> Result<()> {
        let file = File::create(dir.join("metadata.json"))?;
        serde_json::to_writer_pretty(file, self).map_err(io::Error::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SeriesMetadata {
        SeriesMetadata {
            title: "Le Chevalier Déchu".to_string(),
            alt_name: "堕ちた騎士".to_string(),
            authors: vec!["A. Dubois".to_string()],
            artists: vec![],
            genres: vec!["Action".to_string(), "Action".to_string()],
            release_year: None,
            status: "Unknown".to_string(),
            summary: String::new(),
            thumbnail_path: "Le_Chevalier_Déchu/cover.jpg".to_string(),
        }
    }

    #[test]
    fn absent_release_year_serializes_as_null() {
        let json = serde_json::to_string_pretty(&sample()).unwrap();
        assert!(json.contains("\"release_year\": null"));
    }

    #[test]
    fn non_ascii_is_preserved_literally() {
        let json = serde_json::to_string_pretty(&sample()).unwrap();
        assert!(json.contains("Déchu"));
        assert!(json.contains("堕ちた騎士"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn duplicate_genres_are_kept() {
        let round: SeriesMetadata =
            serde_json::from_str(&serde_json::to_string(&sample()).unwrap()).unwrap();
        assert_eq!(round.genres, vec!["Action", "Action"]);
    }
}
