//! Network access to the GitHub REST API.

mod github;

pub use github::GistsClient;
