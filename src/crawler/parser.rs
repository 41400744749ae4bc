use regex::Regex;
use scraper::{Html, Selector};

use crate::error::{Result, ScrapeError};
use crate::models::SeriesMetadata;

/// All document queries against a series page: title, cover, the labelled
/// info blocks, and the chapter navigation anchors.
pub struct SeriesParser;

impl SeriesParser {
    pub fn extract_title(&self, document: &Html) -> Result<String> {
        let title_selector = Selector::parse("div.post-title h1").unwrap();
        let title = document
            .select(&title_selector)
            .next()
            .ok_or(ScrapeError::MissingElement("div.post-title h1"))?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        Ok(title)
    }

    pub fn extract_cover_url(&self, document: &Html) -> Option<String> {
        let cover_selector = Selector::parse("div.summary_image img").unwrap();
        document
            .select(&cover_selector)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string)
    }

    /// Builds the metadata record. Extraction never fails: absent fields
    /// degrade to empty strings, empty lists, `None`, or the "Unknown"
    /// status sentinel.
    pub fn extract_metadata(
        &self,
        document: &Html,
        title: &str,
        folder_name: &str,
    ) -> SeriesMetadata {
        let summary_selector = Selector::parse("div.summary__content").unwrap();
        let summary = document
            .select(&summary_selector)
            .next()
            .map(|block| block.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let info_item_selector = Selector::parse("div.post-content_item").unwrap();
        let content_selector = Selector::parse("div.summary-content").unwrap();

        let mut alt_name = String::new();
        let mut release_year: Option<u32> = None;
        let mut status = "Unknown".to_string();

        // Label scan over every info block: each label is tested against
        // each block independently and a later match overwrites an earlier
        // one. The page may legitimately repeat blocks.
        for item in document.select(&info_item_selector) {
            let item_text = item.text().collect::<String>();
            let content = || {
                item.select(&content_selector)
                    .next()
                    .map(|block| block.text().collect::<String>().trim().to_string())
            };

            if item_text.contains("Alternative") {
                alt_name = content().unwrap_or_default();
            }
            if item_text.contains("Date de sortie") {
                // Only an all-digit content block sets the year; anything
                // else leaves the previous value in place.
                if let Some(text) = content() {
                    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
                        if let Ok(year) = text.parse() {
                            release_year = Some(year);
                        }
                    }
                }
            }
            if item_text.contains("Statut") {
                status = content().unwrap_or_else(|| "Unknown".to_string());
            }
        }

        SeriesMetadata {
            title: title.to_string(),
            alt_name,
            authors: self.anchor_texts(document, "div.author-content a"),
            artists: self.anchor_texts(document, "div.artist-content a"),
            genres: self.anchor_texts(document, "div.genres-content a"),
            release_year,
            status,
            summary,
            thumbnail_path: format!("{}/cover.jpg", folder_name),
        }
    }

    /// Trimmed text of every matching anchor, DOM order, duplicates kept.
    fn anchor_texts(&self, document: &Html, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        document
            .select(&selector)
            .map(|a| a.text().collect::<String>().trim().to_string())
            .collect()
    }

    /// Derives one URL per chapter index, in ascending reading order, from
    /// the two boundary anchors of the navigation container. Any missing or
    /// unparseable piece yields an empty list: a series without a usable
    /// chapter index is skipped, not an error.
    pub fn resolve_chapter_links(&self, document: &Html) -> Vec<String> {
        let nav_selector = Selector::parse("div#init-links").unwrap();
        // The button ids are inverted relative to their chronological
        // meaning: #btn-read-last links the earliest chapter and
        // #btn-read-first the latest.
        let earliest_selector = Selector::parse("a#btn-read-last").unwrap();
        let latest_selector = Selector::parse("a#btn-read-first").unwrap();

        let Some(nav) = document.select(&nav_selector).next() else {
            return Vec::new();
        };

        let earliest_url = nav
            .select(&earliest_selector)
            .next()
            .and_then(|a| a.value().attr("href"));
        let latest_url = nav
            .select(&latest_selector)
            .next()
            .and_then(|a| a.value().attr("href"));
        let (Some(earliest_url), Some(latest_url)) = (earliest_url, latest_url) else {
            return Vec::new();
        };

        let index_pattern = Regex::new(r"chapitre-(\d+)").unwrap();
        let index_of = |url: &str| -> Option<u32> {
            index_pattern.captures(url)?.get(1)?.as_str().parse().ok()
        };
        let (Some(first), Some(last)) = (index_of(earliest_url), index_of(latest_url)) else {
            return Vec::new();
        };

        let Some((base_url, _)) = earliest_url.trim_end_matches('/').rsplit_once('/') else {
            return Vec::new();
        };

        // Boundary anchors that disagree (first > last) make the range
        // meaningless; the series is then treated like one with no chapter
        // index at all.
        (first..=last)
            .map(|index| format!("{}/chapitre-{}/", base_url, index))
            .collect()
    }
}
