//! DNS records of the v1 records API.

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::path::{self, API_V1};
use crate::payload::{DataEnvelope, Query, QueryOptions, RecordEnvelope};
use crate::{ApiResponse, Client, ClientError, Identifier, ListOptions};

/// Possible types a DNS record can have.
///
/// Types this crate doesn't know about are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Alias,
    Caa,
    Cdnskey,
    Cds,
    Cname,
    Dnskey,
    Ds,
    Hinfo,
    Https,
    Mx,
    Naptr,
    Ns,
    Pool,
    Ptr,
    Soa,
    Spf,
    Srv,
    Sshfp,
    Svcb,
    Tlsa,
    Txt,
    Url,
    #[strum(default)]
    Other(String),
}

impl RecordType {
    /// Gets the string representation of the type.
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::Other(type_) => type_.as_str(),
            known => known.into(),
        }
    }
}

impl Serialize for RecordType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let type_ = String::deserialize(deserializer)?;
        type_.parse().map_err(D::Error::custom)
    }
}

impl From<IpAddr> for RecordType {
    fn from(value: IpAddr) -> Self {
        match value {
            IpAddr::V4(_) => RecordType::A,
            IpAddr::V6(_) => RecordType::Aaaa,
        }
    }
}

/// A DNS record.
///
/// Fields missing from a response are left at their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub id: i64,
    pub domain_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub name: String,
    pub content: String,
    pub ttl: i64,
    #[serde(rename = "prio", skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_record: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record {
    /// Updates this record with the given attributes, returning the record as
    /// stored by the server.
    pub fn update(
        &self,
        client: &Client,
        attributes: &RecordAttributes,
    ) -> Result<ApiResponse<Record>, ClientError> {
        client.update_record(self.domain_id, self, attributes)
    }

    /// Points this record at `ip`, keeping its name.
    pub fn update_ip(
        &self,
        client: &Client,
        ip: IpAddr,
    ) -> Result<ApiResponse<Record>, ClientError> {
        let attributes = RecordAttributes::default()
            .name(&self.name)
            .content(&ip.to_string());
        self.update(client, &attributes)
    }
}

/// The user-settable attributes of a record.
///
/// Only the attributes that are set are sent to the server, so this doubles
/// as a patch when updating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(rename = "prio", skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
}

impl RecordAttributes {
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = Some(record_type);
        self
    }
}

/// Filters for [Client::list_records].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordListOptions {
    /// Only records with exactly this name. The empty name is the apex.
    pub name: Option<String>,
    pub record_type: Option<RecordType>,
    pub list: ListOptions,
}

impl RecordListOptions {
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = Some(record_type);
        self
    }

    pub fn list(mut self, list: ListOptions) -> Self {
        self.list = list;
        self
    }
}

impl QueryOptions for RecordListOptions {
    fn to_query(&self, query: Query) -> Query {
        let query = query
            .add_if_some("name", self.name.as_deref())
            .add_if_some("type", self.record_type.as_ref());
        self.list.to_query(query)
    }
}

impl Client {
    /// Lists the records of a domain, optionally filtered.
    pub fn list_records(
        &self,
        domain: impl Into<Identifier>,
        options: Option<&RecordListOptions>,
    ) -> Result<ApiResponse<Vec<Record>>, ClientError> {
        let path = path::versioned(API_V1, &path::record_path(&domain.into(), None));
        let url = self.build_url(&path, &options)?;

        // Either a bare array of `{"record": ...}` or a `{"data": [...]}` envelope.
        let resp = self.get::<JsonValue>(url)?;
        let (records, pagination) = if resp.data.is_array() {
            let list = serde_json::from_value::<Vec<RecordEnvelope<Record>>>(resp.data)?;
            (list.into_iter().map(|e| e.record).collect(), None)
        } else {
            let envelope = serde_json::from_value::<DataEnvelope<Vec<Record>>>(resp.data)?;
            (envelope.data, envelope.pagination)
        };

        Ok(ApiResponse {
            status: resp.status,
            headers: resp.headers,
            data: records,
            pagination,
        })
    }

    /// Retrieves a single record.
    ///
    /// # Errors
    ///
    /// Will return an `Api` error for which `is_not_found` holds if the record doesn't exist.
    pub fn get_record(
        &self,
        domain: impl Into<Identifier>,
        record: impl Into<Identifier>,
    ) -> Result<ApiResponse<Record>, ClientError> {
        let (domain, record) = (domain.into(), record.into());
        let path = path::versioned(API_V1, &path::record_path(&domain, Some(&record)));
        let url = self.build_url(&path, &())?;

        Ok(self.get::<RecordEnvelope<Record>>(url)?.map(|e| e.record))
    }

    /// Creates a record, returning it with the ID and defaults assigned by the server.
    pub fn create_record(
        &self,
        domain: impl Into<Identifier>,
        attributes: &RecordAttributes,
    ) -> Result<ApiResponse<Record>, ClientError> {
        let path = path::versioned(API_V1, &path::record_path(&domain.into(), None));
        let url = self.build_url(&path, &())?;

        let body = RecordEnvelope { record: attributes };
        Ok(self.post::<_, RecordEnvelope<Record>>(url, &body)?.map(|e| e.record))
    }

    /// Updates the attributes that are set in `attributes`, leaving the others untouched.
    pub fn update_record(
        &self,
        domain: impl Into<Identifier>,
        record: impl Into<Identifier>,
        attributes: &RecordAttributes,
    ) -> Result<ApiResponse<Record>, ClientError> {
        let (domain, record) = (domain.into(), record.into());
        let path = path::versioned(API_V1, &path::record_path(&domain, Some(&record)));
        let url = self.build_url(&path, &())?;

        let body = RecordEnvelope { record: attributes };
        Ok(self.put::<_, RecordEnvelope<Record>>(url, &body)?.map(|e| e.record))
    }

    pub fn delete_record(
        &self,
        domain: impl Into<Identifier>,
        record: impl Into<Identifier>,
    ) -> Result<ApiResponse<()>, ClientError> {
        let (domain, record) = (domain.into(), record.into());
        let path = path::versioned(API_V1, &path::record_path(&domain, Some(&record)));
        let url = self.build_url(&path, &())?;

        self.delete(url)
    }
}
