use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::error::LookupError;

use super::ProfileLookup;
use super::models::{ProfileSource, PublicSource};
use super::profiles;

const INSTAGRAM_BASE_URL: &str = "https://i.instagram.com";
// App id the instagram.com web client sends; without it the endpoint serves
// a login page instead of JSON.
const IG_APP_ID: &str = "936619743392459";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:122.0) Gecko/20100101 Firefox/122.0";

#[derive(Debug, Clone)]
pub struct InstagramClient {
    http: Client,
    base_url: String,
}

impl InstagramClient {
    pub fn new() -> Self {
        Self::with_base_url(INSTAGRAM_BASE_URL.to_string())
    }

    /// Client against a non-default base URL. Tests point this at a local
    /// mock server.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    async fn fetch_user(&self, username: &str) -> Result<UserResource, LookupError> {
        let url = self.endpoint_url(profiles::web_profile_endpoint())?;
        let query = profiles::web_profile_query(username);
        let response = self
            .http
            .get(url)
            .query(&query)
            .header("User-Agent", USER_AGENT)
            .header("X-IG-App-Id", IG_APP_ID)
            .send()
            .await
            .map_err(|err| LookupError::Connection(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &body));
        }

        // Rate-limit interstitials come back as 200 with an HTML body.
        let envelope: WebProfileEnvelope = response
            .json()
            .await
            .map_err(|err| LookupError::Connection(format!("undecodable response body: {err}")))?;

        // Unknown users surface as a 200 with a null user as often as a 404.
        envelope
            .data
            .and_then(|data| data.user)
            .ok_or(LookupError::NotFound)
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, LookupError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|err| LookupError::Other(err.to_string()))?;
        url.set_path(endpoint.trim_start_matches('/'));
        Ok(url)
    }
}

impl Default for InstagramClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileLookup for InstagramClient {
    async fn profile(&self, username: &str) -> Result<ProfileSource, LookupError> {
        let user = self.fetch_user(username).await?;
        Ok(user.into_source(username))
    }

    async fn public_profile(&self, username: &str) -> Result<PublicSource, LookupError> {
        // There is no narrower endpoint; reissue the request and keep only
        // the fields Instagram serves for any profile.
        let user = self.fetch_user(username).await?;
        Ok(user.into_public_source(username))
    }
}

#[derive(Debug, Deserialize)]
struct WebProfileEnvelope {
    data: Option<WebProfileData>,
}

#[derive(Debug, Deserialize)]
struct WebProfileData {
    user: Option<UserResource>,
}

#[derive(Debug, Deserialize)]
struct UserResource {
    username: Option<String>,
    full_name: Option<String>,
    edge_followed_by: Option<EdgeCount>,
    edge_follow: Option<EdgeCount>,
    edge_owner_to_timeline_media: Option<EdgeCount>,
    profile_pic_url: Option<String>,
    is_private: Option<bool>,
    is_verified: Option<bool>,
    biography: Option<String>,
    external_url: Option<String>,
    business_category_name: Option<String>,
    is_business_account: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct EdgeCount {
    count: Option<u64>,
}

impl UserResource {
    fn into_source(self, requested: &str) -> ProfileSource {
        ProfileSource {
            username: self.username.unwrap_or_else(|| requested.to_string()),
            full_name: self.full_name,
            followers: edge_count(self.edge_followed_by),
            followees: edge_count(self.edge_follow),
            media_count: edge_count(self.edge_owner_to_timeline_media),
            profile_pic_url: self.profile_pic_url,
            is_private: self.is_private.unwrap_or(false),
            is_verified: self.is_verified.unwrap_or(false),
            biography: self.biography,
            external_url: self.external_url,
            business_category_name: self.business_category_name,
            is_business_account: self.is_business_account.unwrap_or(false),
        }
    }

    fn into_public_source(self, requested: &str) -> PublicSource {
        PublicSource {
            username: self.username.unwrap_or_else(|| requested.to_string()),
            full_name: self.full_name,
            profile_pic_url: self.profile_pic_url,
            is_verified: self.is_verified.unwrap_or(false),
        }
    }
}

fn edge_count(edge: Option<EdgeCount>) -> u64 {
    edge.and_then(|edge| edge.count).unwrap_or(0)
}

fn map_status_error(status: StatusCode, body: &str) -> LookupError {
    if status == StatusCode::NOT_FOUND {
        return LookupError::NotFound;
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return LookupError::PrivateNotFollowed;
    }

    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        return LookupError::Connection(format!("instagram returned {status}"));
    }

    let body = body.trim();
    if body.is_empty() {
        LookupError::Other(format!("instagram request failed ({status})"))
    } else {
        LookupError::Other(format!(
            "instagram request failed ({status}): {}",
            excerpt(body)
        ))
    }
}

fn excerpt(body: &str) -> String {
    let compact = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if compact.len() <= 200 {
        return compact;
    }

    let mut end = 200;
    while !compact.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &compact[..end])
}
