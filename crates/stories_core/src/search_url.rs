use thiserror::Error;
use url::form_urlencoded;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://hn.algolia.com/api/v1/search";

const PARAM_SEARCH: &str = "query";
const PARAM_PAGE: &str = "page";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("malformed search url: {0}")]
    Malformed(String),
    #[error("search url has no `{0}` parameter")]
    MissingParam(&'static str),
    #[error("search url has a non-numeric page `{0}`")]
    InvalidPage(String),
}

/// Base address of the search API; every request target is built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEndpoint {
    base: String,
}

impl SearchEndpoint {
    /// Validates `base` as an absolute URL without query or fragment.
    pub fn new(base: &str) -> Result<Self, UrlError> {
        let parsed = Url::parse(base).map_err(|err| UrlError::Malformed(err.to_string()))?;
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(UrlError::Malformed(format!(
                "api base must not carry a query or fragment: {base}"
            )));
        }
        Ok(Self {
            base: base.to_string(),
        })
    }

    pub fn build_url(&self, term: &str, page: u32) -> String {
        let encoded: String = form_urlencoded::byte_serialize(term.as_bytes()).collect();
        format!(
            "{}?{PARAM_SEARCH}={encoded}&{PARAM_PAGE}={page}",
            self.base
        )
    }
}

impl Default for SearchEndpoint {
    fn default() -> Self {
        Self {
            base: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// Builds a request target against the default endpoint.
pub fn build_url(term: &str, page: u32) -> String {
    SearchEndpoint::default().build_url(term, page)
}

/// Recovers the search term from a url produced by [`SearchEndpoint::build_url`].
pub fn extract_term(url: &str) -> Result<String, UrlError> {
    query_param(url, PARAM_SEARCH)
}

pub fn extract_page(url: &str) -> Result<u32, UrlError> {
    let raw = query_param(url, PARAM_PAGE)?;
    raw.parse().map_err(|_| UrlError::InvalidPage(raw))
}

fn query_param(url: &str, name: &'static str) -> Result<String, UrlError> {
    let parsed = Url::parse(url).map_err(|err| UrlError::Malformed(err.to_string()))?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .ok_or(UrlError::MissingParam(name))
}
