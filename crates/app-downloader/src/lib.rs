use std::path::Path;

use app_logger::{debug, info, trace};

pub use crate::{
    downloaders::{FileDownloader, PostFetcher},
    error::{ErrorReport, ImportError, INVALID_URL_MESSAGE},
    post::{ImportResult, Post},
    shortcode::Shortcode,
};

pub mod downloaders;
mod error;
mod post;
mod shortcode;

/// Imports the post behind `url`, writing its video (if any) into `output_dir`.
///
/// Runs to completion or stops at the first failure, nothing is retried.
pub fn import<F, D>(
    url: &str,
    output_dir: &Path,
    fetcher: &F,
    downloader: &D,
) -> Result<ImportResult, ImportError>
where
    F: PostFetcher + ?Sized,
    D: FileDownloader + ?Sized,
{
    info!("Importing {url:?} into {output_dir:?}");

    let shortcode = Shortcode::from_url(url).ok_or(ImportError::InvalidUrl)?;
    debug!("Instagram shortcode: {:?}", &shortcode);

    app_helpers::dirs::ensure_dir(output_dir).map_err(|source| {
        ImportError::OutputDirectory {
            path: output_dir.to_path_buf(),
            source,
        }
    })?;

    let post = fetcher
        .fetch_post(&shortcode)
        .map_err(|e| ImportError::FetchFailed(e.to_string()))?;
    trace!("Fetched post: {:?}", &post);

    let video_path = match post.video_url() {
        Some(video_url) => {
            let video_path = output_dir.join(format!("{shortcode}.mp4"));
            debug!("Post is a video. Downloading {video_url:?}");

            downloader
                .download(video_url, &video_path)
                .map_err(|e| ImportError::VideoDownloadFailed(e.to_string()))?;

            Some(video_path.to_string_lossy().into_owned())
        }
        None => {
            debug!("Post has no video. Skipping download.");
            None
        }
    };

    Ok(ImportResult {
        shortcode,
        caption: post.caption.unwrap_or_default(),
        thumbnail_url: post.thumbnail_url,
        video_path,
        source_url: url.to_string(),
        owner_username: post.owner_username,
    })
}
