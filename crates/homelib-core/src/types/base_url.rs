//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL for a library service API.
///
/// Plain HTTP is accepted alongside HTTPS because the service is commonly
/// self-hosted on a LAN.
///
/// # Example
///
/// ```
/// use homelib_core::BaseUrl;
///
/// let base = BaseUrl::new("http://localhost:8080").unwrap();
/// assert_eq!(base.endpoint_url("/auth/login"), "http://localhost:8080/auth/login");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute, is not http(s), or has
    /// no host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::BaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the full URL for a given endpoint path.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        // The URL crate always adds a trailing slash to root paths,
        // so strip it before joining the endpoint
        let base = self.0.as_str().trim_end_matches('/');
        if endpoint.starts_with('/') {
            format!("{}{}", base, endpoint)
        } else {
            format!("{}/{}", base, endpoint)
        }
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the URL scheme ("http" or "https").
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        // Must be absolute
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must use http or https".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BaseUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let base = BaseUrl::new("https://books.example.com").unwrap();
        assert_eq!(base.host(), Some("books.example.com"));
        assert_eq!(base.scheme(), "https");
    }

    #[test]
    fn valid_http_lan_url() {
        let base = BaseUrl::new("http://192.168.1.20:8080").unwrap();
        assert_eq!(base.host(), Some("192.168.1.20"));
    }

    #[test]
    fn endpoint_url_construction() {
        let base = BaseUrl::new("http://localhost:8080").unwrap();
        assert_eq!(
            base.endpoint_url("/v1/library"),
            "http://localhost:8080/v1/library"
        );
        assert_eq!(
            base.endpoint_url("v1/library"),
            "http://localhost:8080/v1/library"
        );
    }

    #[test]
    fn normalizes_trailing_slash() {
        let base = BaseUrl::new("http://localhost:8080/").unwrap();
        assert_eq!(
            base.endpoint_url("/auth/login"),
            "http://localhost:8080/auth/login"
        );
    }

    #[test]
    fn invalid_scheme() {
        assert!(BaseUrl::new("ftp://example.com").is_err());
        assert!(BaseUrl::new("file:///tmp/api").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(BaseUrl::new("/v1/library").is_err());
    }
}
