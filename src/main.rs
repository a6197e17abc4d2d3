use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use siteimprove_core::domain::{ContentEntity, EntityKind, RequestContext};
use siteimprove_core::domain_provider::DomainProviderRegistry;
use siteimprove_core::service::EntityUrlResolver;
use siteimprove_core::token::{SiteimproveTokenClient, TokenClient};
use siteimprove_core::{config::Config, server, telemetry};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "siteimprove-core", version, about = "Siteimprove integration service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP service (default)
    Serve,
    /// Request a new Siteimprove token and print it
    Token,
    /// Print the frontend URLs of an entity, one per line
    Urls {
        /// Entity kind: node, taxonomy_term or user
        #[arg(long)]
        kind: String,
        #[arg(long)]
        id: String,
        /// Path alias, e.g. /about-us
        #[arg(long)]
        alias: Option<String>,
        /// Name of the route being served
        #[arg(long)]
        route: Option<String>,
        /// Treat the request as served on the front page
        #[arg(long)]
        front: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_env()?;

    telemetry::init(&config.telemetry);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("Starting Siteimprove Core Service");
            server::run(config).await
        }
        Command::Token => {
            let client = SiteimproveTokenClient::new(&config.siteimprove);
            match client.request_token().await {
                Some(token) => {
                    println!("{}", token);
                    Ok(())
                }
                None => std::process::exit(1),
            }
        }
        Command::Urls {
            kind,
            id,
            alias,
            route,
            front,
        } => {
            let kind: EntityKind = kind.parse()?;
            let entity = ContentEntity {
                kind,
                id: Some(id),
                alias,
            };
            let context = RequestContext {
                route_name: route,
                is_front_page: front,
                ..Default::default()
            };

            let provider = DomainProviderRegistry::with_builtin(&config.site)
                .active(&config)
                .context("Failed to resolve domain plugin")?;
            let resolver =
                EntityUrlResolver::new(provider, Arc::new(config), Arc::new(context));

            for url in resolver
                .get_entity_urls(&entity)
                .await
                .context("Failed to resolve entity URLs")?
            {
                println!("{}", url);
            }
            Ok(())
        }
    }
}
