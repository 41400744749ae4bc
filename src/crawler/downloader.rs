use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use super::fetch::Fetcher;
use crate::error::Result;

/// Streams binary assets to disk.
pub struct ImageDownloader {
    fetcher: Fetcher,
}

impl ImageDownloader {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Downloads one image, streaming the response body to `filepath`
    /// through a buffer sized by the configured chunk size.
    pub async fn download_image(&self, image_url: &str, filepath: &Path) -> Result<()> {
        debug!("downloading image: {}", image_url);

        let mut response = self.fetcher.fetch_asset(image_url).await?;
        let file = File::create(filepath)?;
        let mut writer = BufWriter::with_capacity(self.fetcher.config().chunk_size, file);

        while let Some(chunk) = response.chunk().await? {
            writer.write_all(&chunk)?;
        }
        writer.flush()?;

        debug!("image saved to: {}", filepath.display());
        Ok(())
    }

    /// Series covers always land as `cover.jpg`, whatever the source
    /// extension, so the metadata thumbnail path stays stable.
    pub async fn download_cover(&self, image_url: &str, series_dir: &Path) -> Result<()> {
        self.download_image(image_url, &series_dir.join("cover.jpg")).await
    }
}
