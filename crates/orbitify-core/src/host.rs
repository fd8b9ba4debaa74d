//! Host environment the pipeline is embedded in (a browser page, a CLI).

/// Query parameter carrying the bearer token after the OAuth redirect.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";
/// Query parameter carrying the OAuth failure reason.
pub const ERROR_PARAM: &str = "error";

/// Access to the page URL the client was loaded from.
///
/// The pipeline reads the OAuth callback parameters through this trait and
/// asks the host to hide them afterwards instead of mutating the URL itself.
pub trait HostEnvironment: Send + Sync {
    /// Value of the query parameter `name`, if present.
    fn query_param(&self, name: &str) -> Option<String>;

    /// Removes the query string from the visible URL without reloading.
    fn strip_query_params(&self);
}
