pub mod downloader;
pub mod fetch;
pub mod parser;
pub mod processor;

pub use downloader::ImageDownloader;
pub use fetch::Fetcher;
pub use parser::SeriesParser;
pub use processor::ChapterProcessor;

use std::fs;
use std::path::PathBuf;

use log::{error, info, warn};

use crate::archive;
use crate::config::FetchConfig;
use crate::error::Result;
use crate::utils::sanitize_filename;

use fetch::parse_document;

/// Drives one series end-to-end: page fetch, metadata, cover, sequential
/// chapter downloads, archive.
pub struct MadaraCrawler {
    fetcher: Fetcher,
    parser: SeriesParser,
    downloader: ImageDownloader,
}

impl MadaraCrawler {
    pub fn new() -> Self {
        Self::with_config(FetchConfig::default())
    }

    pub fn with_config(config: FetchConfig) -> Self {
        let fetcher = Fetcher::new(config);
        Self {
            downloader: ImageDownloader::new(fetcher.clone()),
            parser: SeriesParser,
            fetcher,
        }
    }

    /// Processes one seed URL. Failures are logged and contained here so
    /// the caller can always move on to the next seed.
    pub async fn crawl_series(&self, url: &str) {
        info!("processing series: {}", url);
        if let Err(e) = self.process_series(url).await {
            error!("series {} abandoned: {}", url, e);
        }
    }

    async fn process_series(&self, url: &str) -> Result<()> {
        let body = self.fetcher.fetch_page(url).await?;
        let document = parse_document(&body)?;

        let title = self.parser.extract_title(&document)?;
        let folder_name = sanitize_filename(&title);
        let series_dir = PathBuf::from(&folder_name);
        fs::create_dir_all(&series_dir)?;

        match self.parser.extract_cover_url(&document) {
            Some(cover_url) => {
                if let Err(e) = self.downloader.download_cover(&cover_url, &series_dir).await {
                    warn!("cover download failed for {}: {}", title, e);
                }
            }
            None => warn!("no cover found for {}", title),
        }

        let metadata = self.parser.extract_metadata(&document, &title, &folder_name);
        metadata.write_json(&series_dir)?;
        info!("metadata written for: {}", title);

        let chapter_links = self.parser.resolve_chapter_links(&document);
        info!("{} chapters found", chapter_links.len());

        let processor = ChapterProcessor::new(self.fetcher.clone());
        for (position, chapter_url) in chapter_links.iter().enumerate() {
            let index = position + 1;
            info!("downloading chapter {}/{}", index, chapter_links.len());
            if let Err(e) = processor.download_chapter(chapter_url, &series_dir, index).await {
                // Remaining chapters of this series are abandoned; whatever
                // was downloaded so far still gets archived below.
                error!("chapter {} failed, stopping series: {}", index, e);
                break;
            }
            tokio::time::sleep(self.fetcher.config().chapter_delay).await;
        }

        if let Err(e) = archive::zip_folder(&series_dir) {
            error!("archiving {} failed: {}", series_dir.display(), e);
        }

        Ok(())
    }
}

impl Default for MadaraCrawler {
    fn default() -> Self {
        Self::new()
    }
}
