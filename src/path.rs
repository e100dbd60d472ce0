//! Builders for the API paths, relative to the endpoint.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::record::Record;

/// Characters that can't appear literally inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub(crate) const API_V1: &str = "v1";
pub(crate) const API_V2: &str = "v2";

/// Identifies a resource either by its numeric ID or by a textual handle,
/// such as a domain name or an account handle.
///
/// ```
/// use dnsimple::Identifier;
///
/// assert_eq!(Identifier::from(23).to_string(), "23");
/// assert_eq!(Identifier::from("example.com").to_string(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Id(i64),
    Name(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Id(id) => write!(f, "{id}"),
            Identifier::Name(name) => f.write_str(name),
        }
    }
}

impl Identifier {
    /// Renders the identifier as exactly one percent-encoded path segment.
    pub(crate) fn segment(&self) -> String {
        match self {
            Identifier::Id(id) => id.to_string(),
            Identifier::Name(name) => utf8_percent_encode(name, SEGMENT).to_string(),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Id(value)
    }
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        Identifier::Id(value.into())
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        Identifier::Id(value.into())
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Name(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::Name(value)
    }
}

impl From<&String> for Identifier {
    fn from(value: &String) -> Self {
        Identifier::Name(value.clone())
    }
}

impl From<&Identifier> for Identifier {
    fn from(value: &Identifier) -> Self {
        value.clone()
    }
}

impl From<&Record> for Identifier {
    fn from(value: &Record) -> Self {
        Identifier::Id(value.id)
    }
}

/// Prefixes the path with the API version.
pub(crate) fn versioned(version: &str, path: &str) -> String {
    format!("{version}/{path}")
}

fn collection_or_member(collection: String, member: Option<&Identifier>) -> String {
    match member {
        Some(id) => format!("{collection}/{}", id.segment()),
        None => collection,
    }
}

pub(crate) fn record_path(domain: &Identifier, record: Option<&Identifier>) -> String {
    collection_or_member(format!("domains/{}/records", domain.segment()), record)
}

pub(crate) fn secondary_server_path(account: &Identifier, server: Option<&Identifier>) -> String {
    let collection = format!("{}/secondary_dns/primaries", account.segment());
    collection_or_member(collection, server)
}

pub(crate) fn secondary_server_link_path(account: &Identifier, server: &Identifier) -> String {
    format!("{}/link", secondary_server_path(account, Some(server)))
}

pub(crate) fn secondary_server_unlink_path(account: &Identifier, server: &Identifier) -> String {
    format!("{}/unlink", secondary_server_path(account, Some(server)))
}

pub(crate) fn secondary_zone_path(account: &Identifier, zone: Option<&Identifier>) -> String {
    collection_or_member(format!("{}/secondary_dns/zones", account.segment()), zone)
}
