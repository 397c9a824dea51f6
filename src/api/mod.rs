use crate::error::FetchError;
use crate::models::Item;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use strum_macros::Display;

/// Types of Hacker News story lists we can fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StoryListType {
    Best,
    Top,
    New,
    Ask,
    Show,
    Job,
}

impl StoryListType {
    fn as_api_str(&self) -> &str {
        match self {
            Self::Best => "beststories",
            Self::Top => "topstories",
            Self::New => "newstories",
            Self::Ask => "askstories",
            Self::Show => "showstories",
            Self::Job => "jobstories",
        }
    }
}

const HN_API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0/";

/// HTTP client for the Hacker News Firebase API.
///
/// Performs exactly one round trip per call and never retries internally;
/// retry policy lives in [`crate::retry::Retryer`] so that fetching and
/// flakiness tolerance stay independently testable. The client holds no
/// state beyond the connection pool `reqwest` manages, so it is safe to call
/// from independent scenarios without coordination.
#[derive(Clone)]
pub struct HnClient {
    client: Client,
    base_url: Option<String>,
}

impl HnClient {
    /// A client against the real API.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    /// A client against an alternate base URL, for pointing scenarios at a
    /// local mock server. The URL must end with a slash.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url),
        }
    }

    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(HN_API_BASE_URL)
    }

    /// URL of the item endpoint for `id`.
    pub fn item_url(&self, id: u64) -> String {
        format!("{}item/{}.json", self.base_url(), id)
    }

    /// URL of the list endpoint for `list_type`.
    pub fn list_url(&self, list_type: StoryListType) -> String {
        format!("{}{}.json", self.base_url(), list_type.as_api_str())
    }

    /// GET `url` and decode the JSON body into `T`.
    ///
    /// One request, four distinct failure classes (see [`FetchError`]). The
    /// response is fully consumed inside this call on every path, including
    /// the early error returns, so the connection is always released back to
    /// the pool.
    pub fn get_json<T>(&self, url: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let body = self.get_bytes(url)?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// GET `url` and return the raw body text. Scenarios that assert on the
    /// literal response (the API answers absent ids with the bare token
    /// `null` and a 200) read it through here instead of decoding.
    pub fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        resp.text().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = resp.bytes().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;
        Ok(body.to_vec())
    }

    /// Fetch a list of story IDs for the given list type (e.g., top, new).
    pub fn fetch_story_ids(&self, list_type: StoryListType) -> Result<Vec<u64>, FetchError> {
        self.get_json(&self.list_url(list_type))
    }

    /// Fetch a single item by id.
    ///
    /// Absent or deleted ids come back as the JSON `null` token with a 200,
    /// which decodes to `Ok(None)` rather than an error.
    pub fn fetch_item(&self, id: u64) -> Result<Option<Item>, FetchError> {
        self.get_json(&self.item_url(id))
    }
}

impl Default for HnClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemType;

    #[test]
    fn test_story_list_type_as_api_str() {
        assert_eq!(StoryListType::Best.as_api_str(), "beststories");
        assert_eq!(StoryListType::Top.as_api_str(), "topstories");
        assert_eq!(StoryListType::New.as_api_str(), "newstories");
        assert_eq!(StoryListType::Ask.as_api_str(), "askstories");
        assert_eq!(StoryListType::Show.as_api_str(), "showstories");
        assert_eq!(StoryListType::Job.as_api_str(), "jobstories");
    }

    #[test]
    fn test_item_url() {
        let client = HnClient::new();
        assert_eq!(
            client.item_url(12345),
            "https://hacker-news.firebaseio.com/v0/item/12345.json"
        );
    }

    #[test]
    fn test_list_url() {
        let client = HnClient::new();
        assert_eq!(
            client.list_url(StoryListType::Top),
            "https://hacker-news.firebaseio.com/v0/topstories.json"
        );
        assert_eq!(
            client.list_url(StoryListType::Best),
            "https://hacker-news.firebaseio.com/v0/beststories.json"
        );
    }

    #[test]
    fn test_fetch_story_ids_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/topstories.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[1, 2, 3, 4, 5]")
            .create();

        let client = HnClient::with_base_url(format!("{}/", server.url()));
        let result = client.fetch_story_ids(StoryListType::Top);

        mock.assert();
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_fetch_story_ids_transport_error() {
        // A port nothing listens on, so the connect itself fails.
        let client = HnClient::with_base_url("http://localhost:1/".to_string());
        let result = client.fetch_story_ids(StoryListType::Top);

        assert!(matches!(result, Err(FetchError::Transport { .. })));
    }

    #[test]
    fn test_fetch_item_success_id_matches_url() {
        let mut server = mockito::Server::new();
        let item_json = r#"{
            "by": "testuser",
            "descendants": 10,
            "id": 12345,
            "kids": [1, 2, 3],
            "score": 100,
            "time": 1234567890,
            "title": "Test Story",
            "type": "story",
            "url": "https://example.com"
        }"#;

        let mock = server
            .mock("GET", "/item/12345.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(item_json)
            .create();

        let client = HnClient::with_base_url(format!("{}/", server.url()));
        let item = client.fetch_item(12345).unwrap().unwrap();

        mock.assert();
        assert_eq!(item.id, 12345);
        assert_eq!(item.kind, Some(ItemType::Story));
        assert_eq!(item.title.as_deref(), Some("Test Story"));
        assert_eq!(item.kids, vec![1, 2, 3]);
    }

    #[test]
    fn test_fetch_item_null_body_is_none() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/item/0.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("null")
            .create();

        let client = HnClient::with_base_url(format!("{}/", server.url()));
        let result = client.fetch_item(0);

        mock.assert();
        assert_eq!(result.unwrap(), None);
    }

    #[test]
    fn test_fetch_item_invalid_json_is_decode_error() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/item/12345.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("invalid json")
            .create();

        let client = HnClient::with_base_url(format!("{}/", server.url()));
        let result = client.fetch_item(12345);

        mock.assert();
        assert!(matches!(result, Err(FetchError::Decode { .. })));
    }

    #[test]
    fn test_non_ok_status_is_status_error() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/item/99999.json")
            .with_status(404)
            .create();

        let client = HnClient::with_base_url(format!("{}/", server.url()));
        let result = client.fetch_item(99999);

        mock.assert();
        match result {
            Err(FetchError::Status { status, url }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert!(url.ends_with("/item/99999.json"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn test_get_text_returns_raw_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/item/0.json")
            .with_status(200)
            .with_body("null")
            .create();

        let client = HnClient::with_base_url(format!("{}/", server.url()));
        let url = client.item_url(0);
        let body = client.get_text(&url).unwrap();

        mock.assert();
        assert_eq!(body, "null");
    }

    #[test]
    fn test_client_default() {
        let client = HnClient::default();
        assert!(client.client.get("https://example.com").build().is_ok());
    }
}
