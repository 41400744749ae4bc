use std::fs;
use std::path::Path;

use log::warn;
use scraper::Selector;

use super::downloader::ImageDownloader;
use super::fetch::{parse_document, Fetcher};
use crate::error::Result;

/// Downloads one chapter: fetches its page, walks the gallery in DOM order
/// and writes every image under a zero-padded chapter folder.
pub struct ChapterProcessor {
    fetcher: Fetcher,
    downloader: ImageDownloader,
}

impl ChapterProcessor {
    pub fn new(fetcher: Fetcher) -> Self {
        Self {
            downloader: ImageDownloader::new(fetcher.clone()),
            fetcher,
        }
    }

    /// Fetch or parse failure of the chapter page fails the chapter; a
    /// single image failure is logged and skipped. `index` is the 1-based
    /// position of the chapter in the resolved reading order.
    pub async fn download_chapter(
        &self,
        chapter_url: &str,
        series_dir: &Path,
        index: usize,
    ) -> Result<()> {
        let body = self.fetcher.fetch_page(chapter_url).await?;
        let document = parse_document(&body)?;

        let image_selector = Selector::parse("div.page-break.no-gaps img").unwrap();

        let chapter_dir = series_dir.join(format!("Chapitre_{:03}", index));
        fs::create_dir_all(&chapter_dir)?;

        for (position, image) in document.select(&image_selector).enumerate() {
            // Numbering follows gallery position, so a source-less slot
            // leaves a gap instead of shifting later images.
            let Some(src) = image.value().attr("src") else {
                continue;
            };

            let filename = image_filename(position + 1, src);
            let filepath = chapter_dir.join(&filename);
            if let Err(e) = self.downloader.download_image(src, &filepath).await {
                warn!("image {} of chapter {} failed: {}", filename, index, e);
            }
        }

        Ok(())
    }
}

/// `NNN.<ext>`, where the extension comes from the URL path with any query
/// string stripped. A path without an extension yields a bare `NNN`.
fn image_filename(position: usize, src: &str) -> String {
    match image_extension(src) {
        Some(ext) => format!("{:03}.{}", position, ext),
        None => format!("{:03}", position),
    }
}

fn image_extension(src: &str) -> Option<&str> {
    let path = src.split('?').next().unwrap_or(src);
    Path::new(path).extension().and_then(|ext| ext.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_comes_from_path_without_query() {
        assert_eq!(image_extension("https://cdn.test/a.jpg"), Some("jpg"));
        assert_eq!(image_extension("https://cdn.test/b.png?x=1"), Some("png"));
        assert_eq!(image_extension("https://cdn.test/c"), None);
    }

    #[test]
    fn filenames_are_zero_padded_in_gallery_order() {
        let sources = ["a.jpg", "b.png?x=1", "c"];
        let names: Vec<String> = sources
            .iter()
            .enumerate()
            .map(|(i, src)| image_filename(i + 1, src))
            .collect();
        assert_eq!(names, vec!["001.jpg", "002.png", "003"]);
    }

    #[test]
    fn query_only_dots_do_not_leak_into_extension() {
        assert_eq!(image_extension("https://cdn.test/scan?cache=v2.webp"), None);
    }
}
