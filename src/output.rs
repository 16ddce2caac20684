use colored::Colorize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::config::Domain;
use crate::dns::DnsRecord;

/// Disable all styling for the rest of the process.
pub fn set_no_color() {
    colored::control::set_override(false);
}

pub fn print_info(msg: &str) {
    println!("{}", msg.blue());
}

pub fn print_error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Numbered grid with a separator line between records, or bare columns in
/// plain mode.
pub fn render_records(records: &[DnsRecord], plain: bool) -> String {
    let mut builder = Builder::default();
    if plain {
        for record in records {
            builder.push_record([
                record.name.clone(),
                record.data.clone(),
                record.record_type.to_string(),
                record.ttl.to_string(),
            ]);
        }
    } else {
        builder.push_record(["#", "Data", "Name", "TTL", "Type"]);
        for (i, record) in records.iter().enumerate() {
            builder.push_record([
                (i + 1).to_string(),
                record.data.clone(),
                record.name.clone(),
                record.ttl.to_string(),
                record.record_type.to_string(),
            ]);
        }
    }

    let mut table = builder.build();
    if plain {
        table.with(Style::blank());
    } else {
        table.with(Style::ascii());
    }
    table.to_string()
}

pub fn render_domains(domains: &[Domain]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["#", "Domain Name"]);
    for (i, domain) in domains.iter().enumerate() {
        builder.push_record([(i + 1).to_string(), domain.name.clone()]);
    }

    let mut table = builder.build();
    table.with(Style::ascii());
    table.to_string()
}

pub fn print_records(records: &[DnsRecord], plain: bool) {
    println!("{}", render_records(records, plain).green().bold());
}

pub fn print_domains(domains: &[Domain]) {
    println!("{}", render_domains(domains).green().bold());
}
