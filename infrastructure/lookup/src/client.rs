use std::time::Duration;

use reqwest::Client;
use url::Url;

use business::domain::product_lookup::errors::LookupError;

#[derive(Debug, thiserror::Error)]
pub enum LookupClientError {
    #[error("lookup.invalid_base_url")]
    InvalidBaseUrl,
}

/// Shared HTTP client configuration for the summary endpoint.
pub struct LookupClient {
    pub client: Client,
    pub base_url: Url,
}

impl LookupClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupClientError> {
        let base_url = Url::parse(base_url).map_err(|_| LookupClientError::InvalidBaseUrl)?;
        if base_url.cannot_be_a_base() {
            return Err(LookupClientError::InvalidBaseUrl);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("shopping-list/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Ok(Self { client, base_url })
    }

    /// Returns `{base}/page/summary/{term}` with the term percent-encoded as
    /// a single path segment.
    pub fn summary_url(&self, term: &str) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::Unavailable)?
            .pop_if_empty()
            .extend(["page", "summary", term]);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> LookupClient {
        LookupClient::new("https://en.wikipedia.org/api/rest_v1", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn should_build_summary_url_for_plain_term() {
        let url = client().summary_url("Gouda").unwrap();

        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/Gouda"
        );
    }

    #[test]
    fn should_encode_term_as_single_segment() {
        let url = client().summary_url("salt & pepper/mix").unwrap();

        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/salt%20&%20pepper%2Fmix"
        );
    }

    #[test]
    fn should_ignore_trailing_slash_in_base_url() {
        let client =
            LookupClient::new("http://localhost:9000/api/", Duration::from_secs(1)).unwrap();

        let url = client.summary_url("Tea").unwrap();

        assert_eq!(url.as_str(), "http://localhost:9000/api/page/summary/Tea");
    }

    #[test]
    fn should_reject_unusable_base_url() {
        assert!(LookupClient::new("not a url", Duration::from_secs(1)).is_err());
        assert!(LookupClient::new("mailto:someone@example.com", Duration::from_secs(1)).is_err());
    }
}
