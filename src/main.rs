use std::process;

use clap::Parser;
use gddns::cli::args::{Cli, Commands};
use gddns::cli::command;
use gddns::config;
use gddns::dns::GoDaddyClient;
use gddns::output;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.no_color {
        output::set_no_color();
    }

    let (domains, config_path) = match config::load(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => fatal(&e.to_string()),
    };
    output::print_info(&format!(
        "Using configuration file {}",
        config_path.display()
    ));
    if domains.is_empty() {
        fatal("configuration file is empty or bad formatted");
    }

    let client = match GoDaddyClient::new(&cli.godaddy_url) {
        Ok(client) => client,
        Err(e) => fatal(&e.to_string()),
    };

    let result = match cli.command {
        Commands::List {
            domain,
            record_type,
            file,
            no_table,
        } => {
            command::list_records(
                &client,
                &domains,
                &domain,
                record_type,
                file.as_deref(),
                no_table,
            )
            .await
        }
        Commands::Add {
            domain,
            record_type,
            data,
            name,
            ttl,
        } => command::add_record(&client, &domains, &domain, record_type, &data, &name, ttl).await,
        Commands::Del {
            domain,
            record_type,
            name,
        } => command::delete_record(&client, &domains, &domain, record_type, &name).await,
        Commands::Domains => {
            command::list_domains(&domains);
            Ok(())
        }
    };

    if let Err(e) = result {
        fatal(&e.to_string());
    }
}

fn fatal(msg: &str) -> ! {
    output::print_error(msg);
    process::exit(1);
}
