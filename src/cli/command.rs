use std::path::Path;

use crate::config::Domains;
use crate::dns::{GoDaddyClient, RecordType};
use crate::output;

pub async fn list_records(
    client: &GoDaddyClient,
    domains: &Domains,
    domain: &str,
    record_type: Option<RecordType>,
    file: Option<&Path>,
    no_table: bool,
) -> crate::Result<()> {
    let credential = domains.resolve(domain)?;
    if let Some(records) = client.list_records(credential, record_type, file).await? {
        output::print_records(&records, no_table);
    }
    Ok(())
}

pub async fn add_record(
    client: &GoDaddyClient,
    domains: &Domains,
    domain: &str,
    record_type: RecordType,
    data: &str,
    name: &str,
    ttl: u32,
) -> crate::Result<()> {
    let credential = domains.resolve(domain)?;
    client
        .add_record(credential, data, name, record_type, ttl)
        .await
}

pub async fn delete_record(
    client: &GoDaddyClient,
    domains: &Domains,
    domain: &str,
    record_type: RecordType,
    name: &str,
) -> crate::Result<()> {
    let credential = domains.resolve(domain)?;
    client.delete_record(credential, name, record_type).await
}

pub fn list_domains(domains: &Domains) {
    output::print_domains(&domains.domains);
}
