use crate::error::QueryFailed;

use std::fmt;
use url::Url;

pub const FIND_PATH_ROUTE: &str = "api/find-path";

/// Raw contents of the three input fields. Nothing is validated here; the
/// strings are read as-is when a query is submitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryInput {
    pub latitude: String,
    pub longitude: String,
    pub run_count: String,
}

impl QueryInput {
    pub fn new(latitude: &str, longitude: &str, run_count: &str) -> Self {
        Self {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
            run_count: run_count.to_string(),
        }
    }

    // Path with the three fields substituted verbatim
    pub fn path(&self) -> String {
        format!("/{}/{}/{}/{}", FIND_PATH_ROUTE,
                self.latitude, self.longitude, self.run_count)
    }

    /// Builds the request URL against `base`.
    ///
    /// With `escape` off the fields are pasted into the path unmodified, so
    /// a field containing `/`, `?` or `#` changes the shape of the request.
    /// With `escape` on every field becomes exactly one percent-encoded
    /// path segment.
    pub fn url(&self, base: &str, escape: bool) -> Result<Url, QueryFailed> {
        if !escape {
            let raw = format!("{}{}", base.trim_end_matches('/'), self.path());
            return Ok(Url::parse(&raw)?);
        }

        let mut url = Url::parse(base)?;
        url.path_segments_mut()
            .map_err(|_| QueryFailed::BaseUrl(base.to_string()))?
            .pop_if_empty()
            .extend(FIND_PATH_ROUTE.split('/'))
            .extend([&self.latitude, &self.longitude, &self.run_count]);

        Ok(url)
    }
}

impl fmt::Display for QueryInput {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}, {} ({} runs)",
               self.latitude, self.longitude, self.run_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_verbatim() {
        let q = QueryInput::new("52.1", "5.3", "4");
        assert_eq!(q.path(), "/api/find-path/52.1/5.3/4");

        let q = QueryInput::new("", "abc", " ");
        assert_eq!(q.path(), "/api/find-path//abc/ ");
    }

    #[test]
    fn test_url_verbatim() {
        let q = QueryInput::new("52.1", "5.3", "4");
        let u = q.url("http://localhost:5000/", false).unwrap();
        assert_eq!(u.as_str(), "http://localhost:5000/api/find-path/52.1/5.3/4");

        // A slash in a field adds a segment
        let q = QueryInput::new("1/2", "3", "4");
        let u = q.url("http://localhost:5000", false).unwrap();
        assert_eq!(u.path(), "/api/find-path/1/2/3/4");
    }

    #[test]
    fn test_url_escaped() {
        let q = QueryInput::new("1/2", "a b", "4?x");
        let u = q.url("http://localhost:5000", true).unwrap();
        assert_eq!(u.path(), "/api/find-path/1%2F2/a%20b/4%3Fx");
        assert_eq!(u.query(), None);
    }

    #[test]
    fn test_url_escaped_keeps_base_path() {
        let q = QueryInput::new("1", "2", "3");
        let u = q.url("http://example.com/beer/", true).unwrap();
        assert_eq!(u.as_str(), "http://example.com/beer/api/find-path/1/2/3");
    }

    #[test]
    fn test_bad_base_url() {
        let q = QueryInput::new("1", "2", "3");
        assert!(q.url("not a url", false).is_err());
        assert!(q.url("not a url", true).is_err());
    }
}
