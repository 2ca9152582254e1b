//! Data models for the gists relay.
//!
//! `github` holds the upstream shape and its projection; `responses` holds the
//! JSON envelopes the relay answers with.

mod github;
mod responses;

pub use github::*;
pub use responses::*;
