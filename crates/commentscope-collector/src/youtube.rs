//! YouTube Data API v3 client

use crate::CollectorError;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Default YouTube Data API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3";

/// Default timeout for API requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Thin client over the two YouTube Data API calls the collector needs
pub struct YouTubeClient {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

/// One video returned by a search query
#[derive(Debug, Clone)]
pub struct VideoHit {
    /// YouTube video ID
    pub video_id: String,

    /// Video title
    pub title: String,

    /// Channel title, matched against the bias lookup table
    pub channel_title: String,

    /// RFC 3339 publication timestamp
    pub published_at: String,
}

/// One top-level comment thread on a video
#[derive(Debug, Clone)]
pub struct CommentThread {
    /// Thread ID - the comment's identity key downstream
    pub comment_id: String,

    /// Comment text with newlines flattened to spaces
    pub body: String,

    /// Author display name
    pub author: String,

    /// Like count
    pub likes: i64,

    /// RFC 3339 publication timestamp
    pub published_at: String,
}

// Wire format of search.list

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: SearchSnippet,
}

#[derive(Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: String,
}

#[derive(Deserialize)]
struct SearchSnippet {
    title: String,
    #[serde(rename = "channelTitle")]
    channel_title: String,
    #[serde(rename = "publishedAt")]
    published_at: String,
}

// Wire format of commentThreads.list

#[derive(Deserialize)]
struct ThreadsResponse {
    #[serde(default)]
    items: Vec<ThreadItem>,
}

#[derive(Deserialize)]
struct ThreadItem {
    id: String,
    snippet: ThreadSnippet,
}

#[derive(Deserialize)]
struct ThreadSnippet {
    #[serde(rename = "topLevelComment")]
    top_level_comment: TopLevelComment,
}

#[derive(Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Deserialize)]
struct CommentSnippet {
    #[serde(rename = "textDisplay")]
    text_display: String,
    #[serde(rename = "authorDisplayName")]
    author_display_name: String,
    #[serde(rename = "likeCount", default)]
    like_count: i64,
    #[serde(rename = "publishedAt")]
    published_at: String,
}

impl YouTubeClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns `CollectorError::Configuration` if the API key is empty or
    /// the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CollectorError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CollectorError::Configuration(
                "missing YouTube API key".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                CollectorError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key,
            client,
        })
    }

    /// Override the API endpoint (for tests and proxies)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Search for videos matching a query, most relevant first
    pub async fn search_videos(
        &self,
        query: &str,
        published_after: &str,
        max_results: u32,
    ) -> Result<Vec<VideoHit>, CollectorError> {
        let url = format!("{}/search", self.endpoint.trim_end_matches('/'));
        debug!("Searching videos: {:?}", query);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("order", "relevance"),
                ("maxResults", &max_results.to_string()),
                ("publishedAfter", published_after),
                ("key", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| CollectorError::Communication(format!("Request failed: {}", e)))?;

        let parsed: SearchResponse = Self::decode(response).await?;

        Ok(parsed
            .items
            .into_iter()
            .map(|item| VideoHit {
                video_id: item.id.video_id,
                title: item.snippet.title,
                channel_title: item.snippet.channel_title,
                published_at: item.snippet.published_at,
            })
            .collect())
    }

    /// List top-level comment threads on a video, most relevant first
    ///
    /// A video with comments disabled yields an empty list rather than an
    /// error; every other failure surfaces.
    pub async fn list_comments(
        &self,
        video_id: &str,
        max_results: u32,
    ) -> Result<Vec<CommentThread>, CollectorError> {
        let url = format!("{}/commentThreads", self.endpoint.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("videoId", video_id),
                ("maxResults", &max_results.min(100).to_string()),
                ("order", "relevance"),
                ("textFormat", "plainText"),
                ("key", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| CollectorError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            if body.contains("commentsDisabled") {
                debug!("Comments disabled on video {}", video_id);
                return Ok(Vec::new());
            }
            return Err(CollectorError::Communication(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let parsed: ThreadsResponse = Self::decode(response).await?;

        Ok(parsed
            .items
            .into_iter()
            .map(|item| {
                let snippet = item.snippet.top_level_comment.snippet;
                CommentThread {
                    comment_id: item.id,
                    body: flatten_body(&snippet.text_display),
                    author: snippet.author_display_name,
                    likes: snippet.like_count,
                    published_at: snippet.published_at,
                }
            })
            .collect())
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CollectorError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CollectorError::Communication(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CollectorError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

/// Flatten newlines so a comment never spans CSV rows visually
pub(crate) fn flatten_body(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_rejects_empty_key() {
        assert!(matches!(
            YouTubeClient::new(""),
            Err(CollectorError::Configuration(_))
        ));
    }

    #[test]
    fn test_flatten_body() {
        assert_eq!(flatten_body("line one\nline two\r\nthree"), "line one line two  three");
    }

    #[test]
    fn test_search_response_decoding() {
        let json = r#"{
            "items": [
                {
                    "id": {"videoId": "abc123"},
                    "snippet": {
                        "title": "Coverage",
                        "channelTitle": "KARE 11",
                        "publishedAt": "2026-01-10T12:00:00Z"
                    }
                }
            ]
        }"#;

        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].id.video_id, "abc123");
        assert_eq!(parsed.items[0].snippet.channel_title, "KARE 11");
    }

    #[test]
    fn test_threads_response_decoding() {
        let json = r#"{
            "items": [
                {
                    "id": "Ugz987",
                    "snippet": {
                        "topLevelComment": {
                            "snippet": {
                                "textDisplay": "first\nsecond",
                                "authorDisplayName": "viewer",
                                "likeCount": 12,
                                "publishedAt": "2026-01-11T08:30:00Z"
                            }
                        }
                    }
                }
            ]
        }"#;

        let parsed: ThreadsResponse = serde_json::from_str(json).unwrap();
        let snippet = &parsed.items[0].snippet.top_level_comment.snippet;
        assert_eq!(parsed.items[0].id, "Ugz987");
        assert_eq!(snippet.like_count, 12);
    }

    #[test]
    fn test_missing_like_count_defaults_to_zero() {
        let json = r#"{
            "items": [
                {
                    "id": "UgzNoLikes",
                    "snippet": {
                        "topLevelComment": {
                            "snippet": {
                                "textDisplay": "text",
                                "authorDisplayName": "viewer",
                                "publishedAt": "2026-01-11T08:30:00Z"
                            }
                        }
                    }
                }
            ]
        }"#;

        let parsed: ThreadsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items[0].snippet.top_level_comment.snippet.like_count, 0);
    }
}
