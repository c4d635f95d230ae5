pub mod github_api;

pub use github_api::{EventSource, FetchError, GitHubClient};
