//! Secondary DNS: primary servers that zones are transferred from, and the
//! secondary zones themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::path::{self, API_V2};
use crate::payload::{DataEnvelope, ZonePayload};
use crate::{ApiResponse, Client, ClientError, Identifier, ListOptions};

const DEFAULT_PORT: u16 = 53;

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// A primary DNS server, which secondary zones are transferred from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryServer {
    pub id: i64,
    pub account_id: i64,
    pub name: String,
    pub ip: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Names of the secondary zones linked to this server.
    #[serde(default)]
    pub linked_secondary_zones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The attributes used to create a [SecondaryServer].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryServerAttributes {
    pub name: String,
    pub ip: String,
    /// Defaults to 53 on the server side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl SecondaryServerAttributes {
    pub fn new(name: &str, ip: &str) -> Self {
        Self {
            name: name.to_string(),
            ip: ip.to_string(),
            port: None,
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }
}

/// A DNS zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Zone {
    pub id: i64,
    pub account_id: i64,
    pub name: String,
    pub reverse: bool,
    pub secondary: bool,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A zone whose authoritative data is transferred from a [SecondaryServer].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryZone {
    #[serde(flatten)]
    pub zone: Zone,
    /// Unset until the first successful transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transferred_at: Option<DateTime<Utc>>,
}

/// The attributes used to create a [SecondaryZone].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryZoneAttributes {
    pub name: String,
}

impl SecondaryZoneAttributes {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Client {
    pub fn list_secondary_servers(
        &self,
        account: impl Into<Identifier>,
        options: Option<&ListOptions>,
    ) -> Result<ApiResponse<Vec<SecondaryServer>>, ClientError> {
        let path = path::versioned(API_V2, &path::secondary_server_path(&account.into(), None));
        let url = self.build_url(&path, &options)?;

        Ok(self.get::<DataEnvelope<_>>(url)?.unwrap_envelope())
    }

    pub fn get_secondary_server(
        &self,
        account: impl Into<Identifier>,
        server: impl Into<Identifier>,
    ) -> Result<ApiResponse<SecondaryServer>, ClientError> {
        let path = path::versioned(
            API_V2,
            &path::secondary_server_path(&account.into(), Some(&server.into())),
        );
        let url = self.build_url(&path, &())?;

        Ok(self.get::<DataEnvelope<_>>(url)?.unwrap_envelope())
    }

    pub fn create_secondary_server(
        &self,
        account: impl Into<Identifier>,
        attributes: &SecondaryServerAttributes,
    ) -> Result<ApiResponse<SecondaryServer>, ClientError> {
        let path = path::versioned(API_V2, &path::secondary_server_path(&account.into(), None));
        let url = self.build_url(&path, &())?;

        Ok(self.post::<_, DataEnvelope<_>>(url, attributes)?.unwrap_envelope())
    }

    pub fn delete_secondary_server(
        &self,
        account: impl Into<Identifier>,
        server: impl Into<Identifier>,
    ) -> Result<ApiResponse<()>, ClientError> {
        let path = path::versioned(
            API_V2,
            &path::secondary_server_path(&account.into(), Some(&server.into())),
        );
        let url = self.build_url(&path, &())?;

        self.delete(url)
    }

    /// Links the server to a secondary zone, so that the zone is transferred from it.
    pub fn link_secondary_server(
        &self,
        account: impl Into<Identifier>,
        server: impl Into<Identifier>,
        zone: &str,
    ) -> Result<ApiResponse<SecondaryServer>, ClientError> {
        let path = path::versioned(
            API_V2,
            &path::secondary_server_link_path(&account.into(), &server.into()),
        );
        let url = self.build_url(&path, &())?;

        Ok(self
            .put::<_, DataEnvelope<_>>(url, &ZonePayload { zone })?
            .unwrap_envelope())
    }

    pub fn unlink_secondary_server(
        &self,
        account: impl Into<Identifier>,
        server: impl Into<Identifier>,
        zone: &str,
    ) -> Result<ApiResponse<SecondaryServer>, ClientError> {
        let path = path::versioned(
            API_V2,
            &path::secondary_server_unlink_path(&account.into(), &server.into()),
        );
        let url = self.build_url(&path, &())?;

        Ok(self
            .put::<_, DataEnvelope<_>>(url, &ZonePayload { zone })?
            .unwrap_envelope())
    }

    pub fn list_secondary_zones(
        &self,
        account: impl Into<Identifier>,
        options: Option<&ListOptions>,
    ) -> Result<ApiResponse<Vec<SecondaryZone>>, ClientError> {
        let path = path::versioned(API_V2, &path::secondary_zone_path(&account.into(), None));
        let url = self.build_url(&path, &options)?;

        Ok(self.get::<DataEnvelope<_>>(url)?.unwrap_envelope())
    }

    pub fn get_secondary_zone(
        &self,
        account: impl Into<Identifier>,
        zone: impl Into<Identifier>,
    ) -> Result<ApiResponse<SecondaryZone>, ClientError> {
        let path = path::versioned(
            API_V2,
            &path::secondary_zone_path(&account.into(), Some(&zone.into())),
        );
        let url = self.build_url(&path, &())?;

        Ok(self.get::<DataEnvelope<_>>(url)?.unwrap_envelope())
    }

    pub fn create_secondary_zone(
        &self,
        account: impl Into<Identifier>,
        attributes: &SecondaryZoneAttributes,
    ) -> Result<ApiResponse<SecondaryZone>, ClientError> {
        let path = path::versioned(API_V2, &path::secondary_zone_path(&account.into(), None));
        let url = self.build_url(&path, &())?;

        Ok(self.post::<_, DataEnvelope<_>>(url, attributes)?.unwrap_envelope())
    }

    pub fn delete_secondary_zone(
        &self,
        account: impl Into<Identifier>,
        zone: impl Into<Identifier>,
    ) -> Result<ApiResponse<()>, ClientError> {
        let path = path::versioned(
            API_V2,
            &path::secondary_zone_path(&account.into(), Some(&zone.into())),
        );
        let url = self.build_url(&path, &())?;

        self.delete(url)
    }
}

#[cfg(test)]
mod tests;
