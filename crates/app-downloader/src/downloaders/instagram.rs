use app_logger::{debug, trace, warn};
use once_cell::sync::Lazy;
use reqwest::{blocking::Client, header, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use super::PostFetcher;
use crate::{post::Post, shortcode::Shortcode};

pub static GRAPHQL_ENDPOINT: Lazy<Url> = Lazy::new(|| {
    Url::parse("https://www.instagram.com/graphql/query").expect("Invalid GraphQL endpoint")
});

/// Persisted query returning a single post's `xdt_shortcode_media`.
const POST_DOC_ID: &str = "8845758582119845";
/// App id of the Instagram web client.
const IG_APP_ID: &str = "936619743392459";

#[derive(Debug, Error)]
pub enum InstagramError {
    #[error("Failed to send request to Instagram: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Instagram responded with {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Failed to parse response from Instagram: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Instagram API error: {0}")]
    Api(String),

    #[error("Post {0:?} not found or not publicly accessible")]
    NotFound(String),
}

/// Fetches post metadata anonymously from Instagram's web GraphQL API.
///
/// Nothing is written to disk and no session is kept between calls.
#[derive(Debug, Clone)]
pub struct InstagramFetcher {
    client: Client,
    endpoint: Url,
}

impl InstagramFetcher {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, GRAPHQL_ENDPOINT.clone())
    }

    #[must_use]
    pub const fn with_endpoint(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn fetch(&self, shortcode: &Shortcode) -> Result<Post, InstagramError> {
        let variables = serde_json::json!({
            "shortcode": shortcode.as_str(),
            "fetch_tagged_user_count": null,
            "hoisted_comment_id": null,
            "hoisted_reply_id": null,
        });
        trace!("Query variables: {:?}", &variables);
        let variables = serde_json::to_string(&variables)?;

        debug!("Fetching post {:?} from {:?}", shortcode, self.endpoint.as_str());

        let res = self
            .client
            .post(self.endpoint.clone())
            .header("X-IG-App-ID", IG_APP_ID)
            .header(
                header::REFERER,
                format!("https://www.instagram.com/p/{shortcode}/"),
            )
            .form(&[
                ("variables", variables.as_str()),
                ("doc_id", POST_DOC_ID),
                ("server_timestamps", "true"),
            ])
            .send()
            .map_err(InstagramError::Request)?;

        let status = res.status();
        let body = res.text().map_err(InstagramError::Request)?;
        trace!("Instagram responded with {}: {}", status, &body);

        if !status.is_success() {
            let message = serde_json::from_str::<GraphQlResponse>(&body)
                .ok()
                .and_then(|x| x.message);
            warn!("Instagram refused the request with {}", status);

            return Err(InstagramError::Status { status, message });
        }

        parse_post(shortcode, &body)
    }
}

impl PostFetcher for InstagramFetcher {
    fn fetch_post(&self, shortcode: &Shortcode) -> anyhow::Result<Post> {
        Ok(self.fetch(shortcode)?)
    }
}

fn parse_post(shortcode: &Shortcode, body: &str) -> Result<Post, InstagramError> {
    let response = serde_json::from_str::<GraphQlResponse>(body)?;

    if response.status.as_deref() == Some("fail") {
        return Err(InstagramError::Api(
            response
                .message
                .unwrap_or_else(|| "request failed".to_string()),
        ));
    }

    let media = response
        .data
        .and_then(|x| x.shortcode_media)
        .ok_or_else(|| InstagramError::NotFound(shortcode.to_string()))?;

    debug!(
        "Got post {:?} (video: {})",
        shortcode,
        media.is_video.unwrap_or_default()
    );

    Ok(media.into())
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<GraphQlData>,
    status: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphQlData {
    #[serde(alias = "xdt_shortcode_media")]
    shortcode_media: Option<ShortcodeMedia>,
}

#[derive(Debug, Deserialize)]
struct ShortcodeMedia {
    display_url: Option<String>,
    is_video: Option<bool>,
    video_url: Option<String>,
    owner: Option<Owner>,
    edge_media_to_caption: Option<Edges<CaptionNode>>,
}

#[derive(Debug, Deserialize)]
struct Owner {
    username: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Edges<T> {
    #[serde(default = "Vec::new")]
    edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
struct Edge<T> {
    node: T,
}

#[derive(Debug, Deserialize)]
struct CaptionNode {
    text: Option<String>,
}

impl From<ShortcodeMedia> for Post {
    fn from(media: ShortcodeMedia) -> Self {
        let caption = media
            .edge_media_to_caption
            .and_then(|x| x.edges.into_iter().next())
            .and_then(|x| x.node.text);

        Self {
            caption,
            thumbnail_url: media.display_url,
            owner_username: media.owner.and_then(|x| x.username),
            is_video: media.is_video.unwrap_or_default(),
            video_url: media.video_url,
        }
    }
}
