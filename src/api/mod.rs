//! Sources of classified email batches.

pub mod client;
pub mod file;

pub use client::HttpApi;
pub use file::JsonFileSource;

use crate::Result;
use crate::domain::email::FetchResponse;

pub const FETCH_EMAILS_PATH: &str = "api/fetch-emails";
pub const RECLASSIFY_PATH: &str = "api/reclassify";

/// Anything that can produce one decoded fetch response.
///
/// An `Err` is a transport or decoding failure; a backend-reported failure
/// comes back as `Ok` with `success == false`.
pub trait EmailSource: Send + Sync {
    fn fetch_emails(&self) -> Result<FetchResponse>;
}
