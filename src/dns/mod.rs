use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub mod godaddy;

pub use godaddy::{GoDaddyClient, GODADDY_API_URL};

/// DNS record types accepted by the registrar API. Anything else is rejected
/// at parse time, before a request is built.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    SOA,
    SRV,
    TXT,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::SOA => "SOA",
            RecordType::SRV => "SRV",
            RecordType::TXT => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "MX" => Ok(RecordType::MX),
            "NS" => Ok(RecordType::NS),
            "SOA" => Ok(RecordType::SOA),
            "SRV" => Ok(RecordType::SRV),
            "TXT" => Ok(RecordType::TXT),
            _ => Err(AppError::InvalidRecordType),
        }
    }
}

/// A DNS resource record as the GoDaddy v1 API represents it:
///
/// ```json
/// {
///   "data": "string",
///   "name": "string",
///   "port": 65535,
///   "priority": 0,
///   "protocol": "string",
///   "service": "string",
///   "ttl": 0,
///   "type": "A",
///   "weight": 0
/// }
/// ```
///
/// The API omits the SRV-specific fields on non-SRV records, so those fall
/// back to their zero values on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub data: String,
    pub name: String,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    #[serde(default)]
    pub weight: u16,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub priority: u16,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub port: u16,
}

impl DnsRecord {
    /// Record as submitted on add. The API requires the SRV-specific fields
    /// to be present even for non-SRV records, so they carry placeholder
    /// values; SRV semantics are not modelled here.
    pub fn for_upsert(data: &str, name: &str, record_type: RecordType, ttl: u32) -> Self {
        DnsRecord {
            data: data.to_string(),
            name: name.to_string(),
            ttl,
            record_type,
            weight: 0,
            service: "string".to_string(),
            priority: 0,
            protocol: "string".to_string(),
            port: 65535,
        }
    }
}
