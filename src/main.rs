use std::fs;
use std::path::Path;

use log::{error, info};
use madara_fetch::MadaraCrawler;

const SEED_FILE: &str = "mangas.txt";

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if !Path::new(SEED_FILE).exists() {
        error!("seed file {} is missing", SEED_FILE);
        return;
    }

    let contents = match fs::read_to_string(SEED_FILE) {
        Ok(contents) => contents,
        Err(e) => {
            error!("could not read {}: {}", SEED_FILE, e);
            return;
        }
    };

    let urls: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    info!("{} series to process", urls.len());

    let crawler = MadaraCrawler::new();
    for url in urls {
        crawler.crawl_series(url).await;
    }
}
