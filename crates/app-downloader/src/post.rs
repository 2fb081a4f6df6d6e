use serde::Serialize;

use crate::shortcode::Shortcode;

/// Metadata of a single post as returned by a [`crate::PostFetcher`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    pub caption: Option<String>,
    pub thumbnail_url: Option<String>,
    pub owner_username: Option<String>,
    pub is_video: bool,
    pub video_url: Option<String>,
}

impl Post {
    /// The URL of the post's video, if it is a video and has one.
    #[must_use]
    pub fn video_url(&self) -> Option<&str> {
        if !self.is_video {
            return None;
        }

        self.video_url.as_deref().filter(|x| !x.is_empty())
    }
}

/// The success payload printed for an imported post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportResult {
    pub shortcode: Shortcode,
    pub caption: String,
    pub thumbnail_url: Option<String>,
    pub video_path: Option<String>,
    pub source_url: String,
    pub owner_username: Option<String>,
}
