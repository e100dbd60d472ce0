//! # Simple and type-safe client for the DNSimple API.
//!
//! Implements a blocking client for the records and secondary DNS endpoints
//! of the [DNSimple API]. Every call is a single request: the path is built
//! from the given identifiers, only the attributes that are set are sent, and
//! the response is decoded into typed values alongside the HTTP metadata.
//!
//! Non-2xx responses are returned as [ApiError]s carrying the status and the
//! message from the server. Nothing is retried.
//!
//! ## Examples
//!
//! ```no_run
//! use dnsimple::Client;
//! use dnsimple::record::{RecordAttributes, RecordListOptions, RecordType};
//!
//! let client = Client::builder()
//!     .oauth_token("<TOKEN>")
//!     .build()
//!     .unwrap();
//!
//! let options = RecordListOptions::default().record_type(RecordType::A);
//! let records = client.list_records("example.com", Some(&options)).unwrap();
//!
//! let created = client
//!     .create_record(
//!         "example.com",
//!         &RecordAttributes::default()
//!             .name("www")
//!             .content("192.0.2.1")
//!             .record_type(RecordType::A),
//!     )
//!     .unwrap();
//! println!("{} records, created {}", records.data.len(), created.data.id);
//! ```
//!
//! [DNSimple API]: https://developer.dnsimple.com/

mod client;
mod errors;
mod path;
mod payload;
pub mod record;
mod response;
pub mod secondary;
#[cfg(test)]
mod testutil;

pub use client::*;
pub use errors::*;
pub use path::Identifier;
pub use response::*;
