pub mod archive;
pub mod config;
pub mod crawler;
pub mod error;
pub mod models;
pub mod utils;

pub use config::FetchConfig;
pub use crawler::MadaraCrawler;
pub use error::{Result, ScrapeError};
pub use models::SeriesMetadata;
pub use utils::sanitize_filename;
