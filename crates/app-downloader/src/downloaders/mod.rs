use std::path::Path;

use crate::{post::Post, shortcode::Shortcode};

pub mod common;
pub mod generic;
pub mod instagram;

/// Looks up a post's metadata by its shortcode.
pub trait PostFetcher {
    fn fetch_post(&self, shortcode: &Shortcode) -> anyhow::Result<Post>;
}

/// Writes the resource at `url` to `destination`, replacing any existing file.
pub trait FileDownloader {
    fn download(&self, url: &str, destination: &Path) -> anyhow::Result<()>;
}
