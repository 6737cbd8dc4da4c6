//! # Email Hunter Client
//! Asynchronous wrapper around the Email Hunter HTTP API: search the addresses known for a domain, guess a person's address, verify an address, count addresses and read account usage, using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers who want typed access to Email Hunter from services, scripts or data pipelines: configure with an API key, call one of the endpoint methods and work with the returned result structs ([`DomainSearchResults`], [`EmailVerificationResults`], ...). [`Client::send`] is available for endpoints this crate does not wrap.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. Each call is a single request with no retries, caching or background tasks; drop the future to cancel it and use [`ClientBuilder::timeout`] to bound it.
//!
//! ## Logging
//! Requests and responses are reported as `tracing` debug events (method, path, status, size). Nothing is printed unless the application installs a subscriber, and the API key is never logged.
//!
//! ## Errors
//! Every failure is a variant of [`Error`]: missing configuration, local validation, unsupported HTTP method, body encoding, transport failures ([`Error::Network`]), undecodable bodies ([`Error::Decoding`]) and non-2xx statuses ([`Error::Api`], classified by [`ApiErrorKind`]). The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use email_hunter::{Client, DomainSearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), email_hunter::Error> {
//!     let client = Client::new("my-api-key")?;
//!
//!     let results = client.domain_search(&DomainSearchOptions::domain("stripe.com")).await?;
//!     for email in results.emails {
//!         println!("{} ({}%)", email.value, email.confidence);
//!     }
//!
//!     let verification = client.email_verification("steli@close.io").await?;
//!     println!("deliverable: {}", verification.smtp_check);
//!     Ok(())
//! }
//! ```

mod client;
mod date;
mod error;
mod models;
mod request;
mod response;

pub use client::{Client, ClientBuilder};
pub use date::{DATE_FORMAT, Date};
pub use error::{ApiErrorKind, DecodingError, Error};
pub use models::{
    AccountInformationResults, Calls, DomainSearchOptions, DomainSearchResults, Email,
    EmailCountResults, EmailFinderOptions, EmailFinderResults, EmailType,
    EmailVerificationResults, Source,
};
pub use request::{Method, Request};
pub use response::Response;

/// Result type alias for Email Hunter operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
