//! ratings-client CLI entry point.

use clap::Parser;
use ratings_client::cli::{Cli, Commands, OutputFormat};
use ratings_client::client::RatingsClient;
use ratings_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = RatingsClient::new(&cli.base_url);

    match cli.command {
        Commands::Entries(entries_cmd) => {
            use ratings_client::cli::entries::EntriesAction;
            match entries_cmd.action {
                EntriesAction::List => {
                    let entries = client.list_entries().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&entries, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_entries(&entries)),
                    }
                }
                EntriesAction::Get { name } => {
                    let entry = client.get_entry(&name).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&entry, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_entry(&entry)),
                    }
                }
                EntriesAction::Set { name, rating } => {
                    let outcome = client.set_rating(&name, rating).await?;
                    if !cli.quiet {
                        match cli.format {
                            OutputFormat::Json => {
                                println!("{}", format_output(&outcome, cli.format))
                            }
                            OutputFormat::Pretty => println!("{}", pretty::format_write(&outcome)),
                        }
                    }
                }
                EntriesAction::Create { name, rating } => {
                    let outcome = client.create_entry(&name, rating).await?;
                    if !cli.quiet {
                        match cli.format {
                            OutputFormat::Json => {
                                println!("{}", format_output(&outcome, cli.format))
                            }
                            OutputFormat::Pretty => println!("{}", pretty::format_write(&outcome)),
                        }
                    }
                }
                EntriesAction::Delete { name } => {
                    client.delete_entry(&name).await?;
                    if !cli.quiet {
                        println!("Deleted entry {}", name);
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use ratings_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Live => {
                    client.livez().await?;
                    if !cli.quiet {
                        println!("Live");
                    }
                }
                HealthAction::Ready => {
                    let readiness = client.readyz().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&readiness, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_readiness(&readiness))
                        }
                    }
                    if !readiness.ready {
                        std::process::exit(1);
                    }
                }
            }
        }
    }

    Ok(())
}
