/**
 * External Search Adapters
 *
 * Queries two third-party search services - YouTube Data v3 for videos and
 * a Bing-compatible web search for articles - behind one narrow contract:
 * `search(query) -> results`, never an error.
 *
 * # Fallback Behavior
 *
 * - No API credential configured: return exactly 3 deterministic
 *   placeholder results labeled as samples, without any network call.
 * - Credential present: one outbound request with a 5-second timeout; any
 *   failure (network, non-2xx, malformed payload) is logged and degrades
 *   to an empty list. Failures never propagate to the caller.
 */

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::server::config::AppConfig;

/// Bound on every outbound search request
const SEARCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Results requested from each upstream service
const MAX_RESULTS: &str = "10";

/// Placeholder results returned per capability when unconfigured
const PLACEHOLDER_COUNT: usize = 3;

/// YouTube Data API v3 search endpoint
pub const VIDEO_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Bing Web Search v7 endpoint
pub const ARTICLE_SEARCH_URL: &str = "https://api.bing.microsoft.com/v7.0/search";

/// Normalized video search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub url: String,
}

/// Normalized article search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleResult {
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
}

/// External search client holding both capability adapters
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    youtube_api_key: Option<String>,
    search_api_key: Option<String>,
    video_endpoint: String,
    article_endpoint: String,
}

impl SearchClient {
    /// Create a search client from configuration
    pub fn new(config: &AppConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(SEARCH_TIMEOUT)
            .build()
            .expect("failed to construct HTTP client");

        Self {
            http,
            youtube_api_key: config.youtube_api_key.clone(),
            search_api_key: config.search_api_key.clone(),
            video_endpoint: VIDEO_SEARCH_URL.to_string(),
            article_endpoint: ARTICLE_SEARCH_URL.to_string(),
        }
    }

    /// Override the upstream endpoints (used by tests)
    pub fn with_endpoints(mut self, video_endpoint: &str, article_endpoint: &str) -> Self {
        self.video_endpoint = video_endpoint.to_string();
        self.article_endpoint = article_endpoint.to_string();
        self
    }

    /// Search for videos about a query
    ///
    /// Infallible: placeholders when unconfigured, empty list on failure.
    pub async fn search_videos(&self, query: &str) -> Vec<VideoResult> {
        let Some(key) = &self.youtube_api_key else {
            return placeholder_videos(query);
        };

        match self.fetch_videos(key, query).await {
            Ok(videos) => videos,
            Err(e) => {
                tracing::warn!("Video search failed for {:?}: {}", query, e);
                Vec::new()
            }
        }
    }

    /// Search for articles about a query
    ///
    /// Infallible: placeholders when unconfigured, empty list on failure.
    pub async fn search_articles(&self, query: &str) -> Vec<ArticleResult> {
        let Some(key) = &self.search_api_key else {
            return placeholder_articles(query);
        };

        match self.fetch_articles(key, query).await {
            Ok(articles) => articles,
            Err(e) => {
                tracing::warn!("Article search failed for {:?}: {}", query, e);
                Vec::new()
            }
        }
    }

    async fn fetch_videos(&self, key: &str, query: &str) -> Result<Vec<VideoResult>, reqwest::Error> {
        let response: VideoSearchResponse = self
            .http
            .get(&self.video_endpoint)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", MAX_RESULTS),
                ("key", key),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let videos = response
            .items
            .into_iter()
            .filter_map(|item| {
                // Non-video items come back without a videoId; skip them.
                let video_id = item.id.video_id?;
                Some(VideoResult {
                    url: format!("https://www.youtube.com/watch?v={}", video_id),
                    id: video_id,
                    title: item.snippet.title,
                    description: item.snippet.description,
                    thumbnail: item.snippet.thumbnails.medium.url,
                })
            })
            .collect();

        Ok(videos)
    }

    async fn fetch_articles(
        &self,
        key: &str,
        query: &str,
    ) -> Result<Vec<ArticleResult>, reqwest::Error> {
        let response: ArticleSearchResponse = self
            .http
            .get(&self.article_endpoint)
            .header("Ocp-Apim-Subscription-Key", key)
            .query(&[("q", query), ("count", MAX_RESULTS)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let articles = response
            .web_pages
            .value
            .into_iter()
            .map(|item| ArticleResult {
                title: item.name,
                description: item.snippet,
                url: item.url,
                source: item.display_url,
            })
            .collect();

        Ok(articles)
    }
}

/// Deterministic sample videos returned when no API key is configured
fn placeholder_videos(query: &str) -> Vec<VideoResult> {
    (0..PLACEHOLDER_COUNT)
        .map(|i| VideoResult {
            id: format!("placeholder_{}", i),
            title: format!("Sample {} Video {}", query, i + 1),
            description: format!(
                "This is a sample video about {}. Please configure your YouTube API key to fetch real videos.",
                query
            ),
            thumbnail: "https://via.placeholder.com/320x180?text=YouTube".to_string(),
            url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        })
        .collect()
}

/// Deterministic sample articles returned when no API key is configured
fn placeholder_articles(query: &str) -> Vec<ArticleResult> {
    (0..PLACEHOLDER_COUNT)
        .map(|i| ArticleResult {
            title: format!("Sample {} Article {}", query, i + 1),
            description: format!(
                "This is a sample article about {}. Please configure your search API key to fetch real articles.",
                query
            ),
            url: format!("https://example.com/article-{}", i + 1),
            source: "Example Source".to_string(),
        })
        .collect()
}

// Upstream response shapes. Every field defaults so a partially-populated
// payload maps to empty strings instead of a deserialization failure.

#[derive(Debug, Default, Deserialize)]
struct VideoSearchResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Default, Deserialize)]
struct VideoItem {
    #[serde(default)]
    id: VideoItemId,
    #[serde(default)]
    snippet: VideoSnippet,
}

#[derive(Debug, Default, Deserialize)]
struct VideoItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct VideoSnippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    thumbnails: VideoThumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct VideoThumbnails {
    #[serde(default)]
    medium: VideoThumbnail,
}

#[derive(Debug, Default, Deserialize)]
struct VideoThumbnail {
    #[serde(default)]
    url: String,
}

#[derive(Debug, Default, Deserialize)]
struct ArticleSearchResponse {
    #[serde(rename = "webPages", default)]
    web_pages: ArticleWebPages,
}

#[derive(Debug, Default, Deserialize)]
struct ArticleWebPages {
    #[serde(default)]
    value: Vec<ArticleItem>,
}

#[derive(Debug, Default, Deserialize)]
struct ArticleItem {
    #[serde(default)]
    name: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    url: String,
    #[serde(rename = "displayUrl", default)]
    display_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(youtube_key: Option<&str>, search_key: Option<&str>) -> AppConfig {
        AppConfig {
            database_url: "postgres://localhost/unused".to_string(),
            jwt_secret: "test-secret".to_string(),
            token_ttl_minutes: 30,
            youtube_api_key: youtube_key.map(String::from),
            search_api_key: search_key.map(String::from),
            cors_origins: vec![],
            port: 0,
        }
    }

    #[tokio::test]
    async fn test_unconfigured_video_search_returns_labeled_placeholders() {
        // Endpoint points nowhere reachable; placeholder mode must not
        // attempt a network call.
        let client = SearchClient::new(&test_config(None, None))
            .with_endpoints("http://127.0.0.1:1/video", "http://127.0.0.1:1/article");

        let videos = client.search_videos("algebra").await;
        assert_eq!(videos.len(), 3);
        for (i, video) in videos.iter().enumerate() {
            assert_eq!(video.id, format!("placeholder_{}", i));
            assert!(video.title.starts_with("Sample algebra Video"));
        }
    }

    #[tokio::test]
    async fn test_unconfigured_article_search_returns_labeled_placeholders() {
        let client = SearchClient::new(&test_config(None, None))
            .with_endpoints("http://127.0.0.1:1/video", "http://127.0.0.1:1/article");

        let articles = client.search_articles("algebra").await;
        assert_eq!(articles.len(), 3);
        for article in &articles {
            assert!(article.title.starts_with("Sample algebra Article"));
            assert_eq!(article.source, "Example Source");
        }
    }

    #[tokio::test]
    async fn test_video_search_maps_upstream_payload() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/video"))
            .and(query_param("q", "rust"))
            .and(query_param("key", "yt-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {
                        "id": { "videoId": "abc123" },
                        "snippet": {
                            "title": "Rust in 10 minutes",
                            "description": "A quick tour",
                            "thumbnails": { "medium": { "url": "http://img/1.jpg" } }
                        }
                    },
                    // A channel result: no videoId, must be skipped.
                    { "id": {}, "snippet": { "title": "Some channel" } }
                ]
            })))
            .mount(&server)
            .await;

        let client = SearchClient::new(&test_config(Some("yt-key"), None))
            .with_endpoints(&format!("{}/video", server.uri()), "http://127.0.0.1:1");

        let videos = client.search_videos("rust").await;
        assert_eq!(
            videos,
            vec![VideoResult {
                id: "abc123".to_string(),
                title: "Rust in 10 minutes".to_string(),
                description: "A quick tour".to_string(),
                thumbnail: "http://img/1.jpg".to_string(),
                url: "https://www.youtube.com/watch?v=abc123".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_article_search_maps_upstream_payload() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/article"))
            .and(header("Ocp-Apim-Subscription-Key", "bing-key"))
            .and(query_param("q", "rust"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "webPages": {
                    "value": [
                        {
                            "name": "The Rust Book",
                            "snippet": "Learn Rust",
                            "url": "https://doc.rust-lang.org/book/",
                            "displayUrl": "doc.rust-lang.org"
                        }
                    ]
                }
            })))
            .mount(&server)
            .await;

        let client = SearchClient::new(&test_config(None, Some("bing-key")))
            .with_endpoints("http://127.0.0.1:1", &format!("{}/article", server.uri()));

        let articles = client.search_articles("rust").await;
        assert_eq!(
            articles,
            vec![ArticleResult {
                title: "The Rust Book".to_string(),
                description: "Learn Rust".to_string(),
                url: "https://doc.rust-lang.org/book/".to_string(),
                source: "doc.rust-lang.org".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_degrades_to_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = SearchClient::new(&test_config(Some("yt-key"), Some("bing-key")))
            .with_endpoints(&server.uri(), &server.uri());

        assert!(client.search_videos("rust").await.is_empty());
        assert!(client.search_articles("rust").await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_payload_degrades_to_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = SearchClient::new(&test_config(Some("yt-key"), None))
            .with_endpoints(&server.uri(), &server.uri());

        assert!(client.search_videos("rust").await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_degrades_to_empty_list() {
        let client = SearchClient::new(&test_config(Some("yt-key"), Some("bing-key")))
            .with_endpoints("http://127.0.0.1:1/video", "http://127.0.0.1:1/article");

        assert!(client.search_videos("rust").await.is_empty());
        assert!(client.search_articles("rust").await.is_empty());
    }
}
