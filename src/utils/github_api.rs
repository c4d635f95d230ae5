use crate::config::ApiConfig;
use crate::core::activity::{parse_feed, EventRecord, FeedError};
use std::time::Duration;
use thiserror::Error;

const ACCEPT: &str = "application/vnd.github.v3+json";

/// Why the events feed could not be retrieved
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid username '{0}'")]
    InvalidUsername(String),
    #[error("User '{username}' not found")]
    NotFound { username: String },
    #[error("API rate limit exceeded or access forbidden")]
    RateLimited { status: u16 },
    #[error("HTTP {status} - {reason}")]
    Http { status: u16, reason: String },
    #[error("Could not connect to GitHub API - {0}")]
    Unreachable(String),
    #[error("Invalid JSON response - {0}")]
    MalformedResponse(#[from] FeedError),
}

impl FetchError {
    /// Extra advice printed under the error message
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            FetchError::RateLimited { .. } => {
                Some("Try again later; unauthenticated requests are limited to 60 per hour")
            }
            _ => None,
        }
    }
}

/// Something that can produce a user's activity feed
pub trait EventSource {
    fn fetch(&self, username: &str) -> Result<Vec<EventRecord>, FetchError>;
}

/// Blocking client for `GET /users/{username}/events`
pub struct GitHubClient {
    agent: ureq::Agent,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: &ApiConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build();

        Self {
            agent,
            base_url: config.base_url.clone(),
        }
    }

    pub fn events_url(&self, username: &str) -> String {
        events_url(&self.base_url, username)
    }
}

impl EventSource for GitHubClient {
    fn fetch(&self, username: &str) -> Result<Vec<EventRecord>, FetchError> {
        validate_username(username)?;
        let url = self.events_url(username);
        tracing::debug!(%url, "requesting activity feed");

        let response = match self.agent.get(&url).set("Accept", ACCEPT).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                tracing::debug!(status, "feed request rejected");
                return Err(classify_status(status, response.status_text(), username));
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(FetchError::Unreachable(transport.to_string()));
            }
        };

        let status = response.status();
        if status != 200 {
            return Err(FetchError::Http {
                status,
                reason: response.status_text().to_string(),
            });
        }

        let body = response
            .into_string()
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;
        let records = parse_feed(&body)?;
        tracing::debug!(count = records.len(), "fetched activity feed");
        Ok(records)
    }
}

/// Reject names that would change the request path or query
///
/// Logins are ASCII letters, digits, `-` and `_`.
pub fn validate_username(username: &str) -> Result<(), FetchError> {
    let valid = !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(FetchError::InvalidUsername(username.to_string()))
    }
}

/// Events endpoint for a user under the given API root
pub fn events_url(base_url: &str, username: &str) -> String {
    format!("{}/users/{}/events", base_url.trim_end_matches('/'), username)
}

/// Map an error status to the failure the user is told about
pub fn classify_status(status: u16, reason: &str, username: &str) -> FetchError {
    match status {
        404 => FetchError::NotFound {
            username: username.to_string(),
        },
        403 | 429 => FetchError::RateLimited { status },
        _ => FetchError::Http {
            status,
            reason: reason.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one canned HTTP response on a local port
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{}", addr)
    }

    fn client(base_url: String) -> GitHubClient {
        GitHubClient::new(&ApiConfig {
            base_url,
            ..Default::default()
        })
    }

    #[test]
    fn test_events_url() {
        assert_eq!(
            events_url("https://api.github.com", "octocat"),
            "https://api.github.com/users/octocat/events"
        );
        assert_eq!(
            events_url("https://api.github.com/", "octocat"),
            "https://api.github.com/users/octocat/events"
        );
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("octocat").is_ok());
        assert!(validate_username("octo-cat_2").is_ok());

        for name in ["", "../repos/rust-lang/rust", "a?b", "a#b", "a b", "caf\u{e9}"] {
            assert!(
                matches!(validate_username(name), Err(FetchError::InvalidUsername(ref n)) if n == name),
                "{:?} should be rejected",
                name
            );
        }
        assert_eq!(
            FetchError::InvalidUsername("a/b".into()).to_string(),
            "Invalid username 'a/b'"
        );
    }

    #[test]
    fn test_fetch_rejects_invalid_username_before_request() {
        // Nothing listens on port 9; a request would surface as Unreachable
        let err = client("http://127.0.0.1:9".to_string())
            .fetch("octocat/../../orgs")
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidUsername(_)));
    }

    #[test]
    fn test_classify_status() {
        assert!(matches!(
            classify_status(404, "Not Found", "ghost"),
            FetchError::NotFound { ref username } if username == "ghost"
        ));
        assert!(matches!(
            classify_status(403, "Forbidden", "x"),
            FetchError::RateLimited { status: 403 }
        ));
        assert!(matches!(
            classify_status(429, "Too Many Requests", "x"),
            FetchError::RateLimited { status: 429 }
        ));
        assert!(matches!(
            classify_status(502, "Bad Gateway", "x"),
            FetchError::Http { status: 502, .. }
        ));
    }

    #[test]
    fn test_error_messages() {
        let not_found = FetchError::NotFound {
            username: "ghost".into(),
        };
        assert_eq!(not_found.to_string(), "User 'ghost' not found");
        assert!(not_found.hint().is_none());

        let limited = FetchError::RateLimited { status: 403 };
        assert_eq!(limited.to_string(), "API rate limit exceeded or access forbidden");
        assert!(limited.hint().is_some());

        let http = FetchError::Http {
            status: 500,
            reason: "Internal Server Error".into(),
        };
        assert_eq!(http.to_string(), "HTTP 500 - Internal Server Error");
    }

    #[test]
    fn test_fetch_success() {
        let base = serve_once(
            "200 OK",
            r#"[{"type":"WatchEvent","repo":{"name":"octo/a"},"created_at":"2024-01-15T10:00:00Z"}]"#,
        );
        let records = client(base).fetch("octocat").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].repo_name(), "octo/a");
    }

    #[test]
    fn test_fetch_not_found() {
        let base = serve_once("404 Not Found", r#"{"message":"Not Found"}"#);
        let err = client(base).fetch("ghost").unwrap_err();
        assert!(matches!(err, FetchError::NotFound { .. }));
    }

    #[test]
    fn test_fetch_forbidden() {
        let base = serve_once("403 Forbidden", r#"{"message":"API rate limit exceeded"}"#);
        let err = client(base).fetch("octocat").unwrap_err();
        assert!(matches!(err, FetchError::RateLimited { status: 403 }));
    }

    #[test]
    fn test_fetch_malformed_body() {
        let base = serve_once("200 OK", "<html>oops</html>");
        let err = client(base).fetch("octocat").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(_)));
        assert!(err.to_string().starts_with("Invalid JSON response - "));
    }

    #[test]
    fn test_fetch_unreachable() {
        // Bind then drop to get a local port nothing listens on
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let err = client(format!("http://127.0.0.1:{}", port))
            .fetch("octocat")
            .unwrap_err();
        assert!(matches!(err, FetchError::Unreachable(_)));
    }
}
