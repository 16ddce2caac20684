use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::dns::{RecordType, GODADDY_API_URL};

const LONG_ABOUT: &str = r#"Simple utility to manipulate GoDaddy DNS via API.
Using an access key and secret pair, list, add and remove DNS entries.
It reads the configuration from a JSON file (default ~/.gddns.json)
or passed via --config. The format of the file must be the following:

{
  "domains": [
    {"name": "example.com", "api_key": "EXAMPLE_KEY", "api_secret": "EXAMPLE_SECRET"},
    {"name": "me.com", "api_key": "ME_KEY", "api_secret": "ME_SECRET"},
    {"name": "xxxx.net", "api_key": "XXXX_KEY", "api_secret": "XXXX_SECRET"}
  ]
}
"#;

#[derive(Debug, Parser)]
#[command(name = "gddns", version)]
#[command(about = "Simple utility to manipulate GoDaddy DNS via API")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    /// Config file (default is ~/.gddns.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// No color output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// GoDaddy API base URI
    #[arg(long, global = true, default_value = GODADDY_API_URL)]
    pub godaddy_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all the entries in the provided DNS
    ///
    /// Entries can be filtered by type, and the raw response (json) can be
    /// stored inside a file.
    List {
        /// Domain
        #[arg(long)]
        domain: String,

        /// DNS type. Allowed "A", "AAAA", "CNAME", "MX", "NS", "SOA", "SRV", "TXT"
        #[arg(long = "type", value_name = "TYPE")]
        record_type: Option<RecordType>,

        /// File to store the raw json (backup)
        #[arg(long)]
        file: Option<PathBuf>,

        /// No table output
        #[arg(long)]
        no_table: bool,
    },
    /// Add a new entry to the domain DNS
    Add {
        /// Domain (required)
        #[arg(long)]
        domain: String,

        /// Entry type. Allowed "A", "AAAA", "CNAME", "MX", "NS", "SOA", "SRV", "TXT" (required)
        #[arg(long = "type", value_name = "TYPE")]
        record_type: RecordType,

        /// DNS data IP/FQDN to point (required)
        #[arg(long)]
        data: String,

        /// Hostname (required)
        #[arg(long)]
        name: String,

        /// TTL of the record
        #[arg(long, default_value_t = 600)]
        ttl: u32,
    },
    /// Delete a specific entry in the DNS
    Del {
        /// Domain (required)
        #[arg(long)]
        domain: String,

        /// Entry type. Allowed "A", "AAAA", "CNAME", "MX", "NS", "SOA", "SRV", "TXT" (required)
        #[arg(long = "type", value_name = "TYPE")]
        record_type: RecordType,

        /// Hostname (required)
        #[arg(long)]
        name: String,
    },
    /// List all the domains inside the config file
    Domains,
}
