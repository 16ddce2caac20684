use std::path::Path;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use tracing::debug;

use crate::config::Domain;
use crate::error::AppError;
use crate::output;

use super::{DnsRecord, RecordType};

/// Production API host; overridable so tests can point at a mock server.
pub const GODADDY_API_URL: &str = "https://api.godaddy.com";

pub struct GoDaddyClient {
    client: Client,
    base_url: String,
}

/// Everything we know about a response, kept around so that any failure can
/// be dumped in full for the operator.
struct ResponseInfo {
    status: StatusCode,
    proto: String,
    elapsed: Duration,
    received_at: DateTime<Local>,
    body: Vec<u8>,
}

impl ResponseInfo {
    fn dump(&self, error: &str) {
        output::print_error("Response Info:");
        output::print_error(&format!("  Error      : {}", error));
        output::print_error(&format!("  Status Code: {}", self.status.as_u16()));
        output::print_error(&format!("  Status     : {}", self.status));
        output::print_error(&format!("  Proto      : {}", self.proto));
        output::print_error(&format!("  Time       : {:?}", self.elapsed));
        output::print_error(&format!("  Received At: {}", self.received_at.to_rfc3339()));
        output::print_error(&format!(
            "  Body       : {}\n",
            String::from_utf8_lossy(&self.body)
        ));
    }
}

impl GoDaddyClient {
    pub fn new(base_url: &str) -> crate::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(GoDaddyClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    // Endpoint paths, per https://developer.godaddy.com/doc/endpoint/domains
    // The domain is always lower-cased before substitution; the record name
    // is used as given.
    fn records_url(&self, domain: &str) -> String {
        format!(
            "{}/v1/domains/{}/records/",
            self.base_url,
            domain.to_lowercase()
        )
    }

    fn records_type_url(&self, domain: &str, record_type: RecordType) -> String {
        format!("{}{}/", self.records_url(domain), record_type)
    }

    fn records_type_name_url(&self, domain: &str, record_type: RecordType, name: &str) -> String {
        format!("{}{}/", self.records_type_url(domain, record_type), name)
    }

    fn request(&self, method: Method, url: &str, credential: &Domain) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(
                AUTHORIZATION,
                format!("sso-key {}:{}", credential.api_key, credential.api_secret),
            )
    }

    async fn send(&self, request: RequestBuilder) -> crate::Result<ResponseInfo> {
        let started = Instant::now();
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                output::print_error("Response Info:");
                output::print_error(&format!("  Error      : {}\n", e));
                return Err(AppError::HttpError(e.to_string()));
            }
        };

        let status = response.status();
        let proto = format!("{:?}", response.version());
        let body = response.bytes().await?.to_vec();

        Ok(ResponseInfo {
            status,
            proto,
            elapsed: started.elapsed(),
            received_at: Local::now(),
            body,
        })
    }

    /// List the records of the credential's domain, optionally filtered by
    /// type. With `dump`, the raw response body is written verbatim to the
    /// path and no records are returned.
    pub async fn list_records(
        &self,
        credential: &Domain,
        filter: Option<RecordType>,
        dump: Option<&Path>,
    ) -> crate::Result<Option<Vec<DnsRecord>>> {
        let url = match filter {
            Some(record_type) => self.records_type_url(&credential.name, record_type),
            None => self.records_url(&credential.name),
        };
        output::print_info(&format!(
            "Using access key {} for {}",
            credential.api_key,
            credential.name.to_lowercase()
        ));
        debug!("GET {}", url);

        let info = self.send(self.request(Method::GET, &url, credential)).await?;

        if let Some(path) = dump {
            if let Err(e) = std::fs::write(path, &info.body) {
                info.dump(&e.to_string());
                return Err(AppError::IoError(e));
            }
            output::print_info(&format!("Dumped response in {}", path.display()));
            return Ok(None);
        }

        match serde_json::from_slice::<Vec<DnsRecord>>(&info.body) {
            Ok(records) => Ok(Some(records)),
            Err(e) => {
                info.dump(&e.to_string());
                Err(AppError::JsonError(e))
            }
        }
    }

    /// Add (upsert) a record. Only HTTP 200 counts as success.
    pub async fn add_record(
        &self,
        credential: &Domain,
        data: &str,
        name: &str,
        record_type: RecordType,
        ttl: u32,
    ) -> crate::Result<()> {
        output::print_info(&format!(
            "Pointing {} to {} ({}) in {}",
            name,
            data,
            record_type,
            credential.name.to_lowercase()
        ));
        let url = self.records_type_name_url(&credential.name, record_type, name);
        let records = vec![DnsRecord::for_upsert(data, name, record_type, ttl)];
        debug!("PUT {}", url);

        let info = self
            .send(self.request(Method::PUT, &url, credential).json(&records))
            .await?;

        if info.status == StatusCode::OK {
            output::print_info(&format!("Added {} OK", name));
            Ok(())
        } else {
            info.dump("request rejected");
            Err(AppError::ApiError(format!("error adding {}", name)))
        }
    }

    /// Delete a record scoped by type and name. HTTP 200 and 204 are success.
    pub async fn delete_record(
        &self,
        credential: &Domain,
        name: &str,
        record_type: RecordType,
    ) -> crate::Result<()> {
        output::print_info(&format!(
            "Deleting {} ({}) in {}",
            name,
            record_type,
            credential.name.to_lowercase()
        ));
        let url = self.records_type_name_url(&credential.name, record_type, name);
        debug!("DELETE {}", url);

        let info = self
            .send(self.request(Method::DELETE, &url, credential))
            .await?;

        if info.status == StatusCode::OK || info.status == StatusCode::NO_CONTENT {
            output::print_info(&format!("Deleted {} OK", name));
            Ok(())
        } else {
            info.dump("request rejected");
            Err(AppError::ApiError(format!("error deleting {}", name)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credential() -> Domain {
        Domain {
            name: "Example.com".to_string(),
            api_key: "test_key".to_string(),
            api_secret: "test_secret".to_string(),
        }
    }

    fn client(server: &MockServer) -> GoDaddyClient {
        GoDaddyClient::new(&server.uri()).unwrap()
    }

    #[tokio::test]
    async fn test_list_records() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/domains/example.com/records/"))
            .and(header("Authorization", "sso-key test_key:test_secret"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"data": "192.0.2.1", "name": "www", "ttl": 600, "type": "A"},
                {"data": "mail.example.com", "name": "@", "ttl": 3600, "type": "MX", "priority": 10}
            ])))
            .mount(&server)
            .await;

        let records = client(&server)
            .list_records(&credential(), None, None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "www");
        assert_eq!(records[0].record_type, RecordType::A);
        assert_eq!(records[1].priority, 10);
        assert_eq!(records[1].port, 0);
    }

    #[tokio::test]
    async fn test_list_records_with_type_filter() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/domains/example.com/records/TXT/"))
            .and(header("Authorization", "sso-key test_key:test_secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"data": "v=spf1 -all", "name": "@", "ttl": 600, "type": "TXT"}
            ])))
            .mount(&server)
            .await;

        let records = client(&server)
            .list_records(&credential(), Some(RecordType::TXT), None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].record_type, RecordType::TXT);
    }

    #[tokio::test]
    async fn test_list_records_dumps_raw_body() {
        let server = MockServer::start().await;
        // Deliberately ugly whitespace so any re-encode would show up.
        let raw = "[ {\"data\":\"192.0.2.1\",\n  \"name\":\"www\",\"ttl\":600,\"type\":\"A\"} ]\n";

        Mock::given(method("GET"))
            .and(path("/v1/domains/example.com/records/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(raw.as_bytes().to_vec(), "application/json"),
            )
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let out = dir.path().join("out.json");
        let result = client(&server)
            .list_records(&credential(), None, Some(&out))
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(std::fs::read(&out).unwrap(), raw.as_bytes());
    }

    #[tokio::test]
    async fn test_list_records_fails_on_undecodable_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/domains/example.com/records/"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": "UNABLE_TO_AUTHENTICATE",
                "message": "Unauthorized"
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .list_records(&credential(), None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::JsonError(_)));
    }

    #[tokio::test]
    async fn test_add_then_list_reflects_record() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/domains/example.com/records/A/api/"))
            .and(header("Authorization", "sso-key test_key:test_secret"))
            .and(body_json(json!([{
                "data": "192.0.2.7",
                "name": "api",
                "ttl": 3600,
                "type": "A",
                "weight": 0,
                "service": "string",
                "priority": 0,
                "protocol": "string",
                "port": 65535
            }])))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/domains/example.com/records/A/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"data": "192.0.2.7", "name": "api", "ttl": 3600, "type": "A"}
            ])))
            .mount(&server)
            .await;

        let client = client(&server);
        client
            .add_record(&credential(), "192.0.2.7", "api", RecordType::A, 3600)
            .await
            .unwrap();

        let records = client
            .list_records(&credential(), Some(RecordType::A), None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].data, "192.0.2.7");
        assert_eq!(records[0].name, "api");
        assert_eq!(records[0].record_type, RecordType::A);
        assert_eq!(records[0].ttl, 3600);
    }

    #[tokio::test]
    async fn test_add_record_fails_on_non_200() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/domains/example.com/records/CNAME/www/"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "code": "INVALID_BODY",
                "message": "Request body doesn't fulfill schema"
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .add_record(&credential(), "example.com", "www", RecordType::CNAME, 600)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("error adding www"));
    }

    #[tokio::test]
    async fn test_delete_record_accepts_200_and_204() {
        for status in [200u16, 204] {
            let server = MockServer::start().await;

            Mock::given(method("DELETE"))
                .and(path("/v1/domains/example.com/records/TXT/_acme-challenge/"))
                .and(header("Authorization", "sso-key test_key:test_secret"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&server)
                .await;

            client(&server)
                .delete_record(&credential(), "_acme-challenge", RecordType::TXT)
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_delete_then_list_no_longer_shows_record() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/domains/example.com/records/A/old/"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/domains/example.com/records/A/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client(&server);
        client
            .delete_record(&credential(), "old", RecordType::A)
            .await
            .unwrap();

        let records = client
            .list_records(&credential(), Some(RecordType::A), None)
            .await
            .unwrap()
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_delete_record_fails_on_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/domains/example.com/records/A/missing/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": "NOT_FOUND",
                "message": "Record not found"
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .delete_record(&credential(), "missing", RecordType::A)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("error deleting missing"));
    }

    #[tokio::test]
    async fn test_transport_error_is_reported() {
        // Nothing is listening on this port.
        let client = GoDaddyClient::new("http://127.0.0.1:1").unwrap();

        let err = client
            .list_records(&credential(), None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::HttpError(_)));
    }
}
