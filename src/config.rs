use std::time::Duration;

/// Fixed request/transfer settings shared by every fetch in a run.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    /// Applied to binary asset requests only; page fetches run untimed.
    pub asset_timeout: Duration,
    /// Buffer size for streamed writes of downloaded images.
    pub chunk_size: usize,
    /// Pause after each successfully downloaded chapter.
    pub chapter_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".to_string(),
            asset_timeout: Duration::from_secs(20),
            chunk_size: 1024,
            chapter_delay: Duration::from_secs(1),
        }
    }
}
