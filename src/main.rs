use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use recruit_admin_core::{
    application::{
        ports::{security::TokenProvider, time::Clock, util::SlugGenerator},
        queries::dashboard::DashboardQueryService,
        services::{ApplicationServices, Repositories},
    },
    config::{AppConfig, CatalogBackend},
    domain::{catalog::CatalogRepository, user::evaluate_password},
    infrastructure::{
        airtable::AirtableClient,
        http::{ApiClient, build_http_client},
        repositories::{
            AirtableCatalogRepository, AirtableTables, RestCatalogRepository,
            RestDashboardRepository, RestRecruitmentPostRepository, RestUserRepository,
        },
        security::{Credentials, SessionTokenProvider, StaticTokenProvider},
        time::SystemClock,
        util::DefaultSlugGenerator,
    },
    presentation::cli::{Cli, CliError, Command, Output, handlers},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match bootstrap(cli).await {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<CliError>()
                .map(CliError::exit_code)
                .unwrap_or(1);
            std::process::exit(code);
        }
    }
}

async fn bootstrap(cli: Cli) -> Result<String> {
    dotenvy::dotenv().ok();
    init_tracing();

    let output = Output::new(cli.json);
    let config = AppConfig::from_env()?;

    let rendered = match cli.command {
        Command::PasswordStrength { password } => {
            output.password_strength(&evaluate_password(&password))?
        }
        Command::Dashboard if config.api_base_url().is_none() => {
            output.dashboard(&DashboardQueryService::new(None).load().await)?
        }
        command => {
            let services = build_services(&config)?;
            handlers::run(command, output, &services).await?
        }
    };
    Ok(rendered)
}

fn build_services(config: &AppConfig) -> Result<ApplicationServices> {
    let api_base_url = config.require_api_base_url()?;
    let http_client = build_http_client(config.http_timeout())?;

    let credentials = (config.api_token(), config.admin_credentials());
    let token_provider: Arc<dyn TokenProvider> = match credentials {
        (Some(token), _) => Arc::new(StaticTokenProvider::new(Some(token.to_string()))),
        (None, Some((email, password))) => Arc::new(SessionTokenProvider::new(
            api_base_url,
            http_client.clone(),
            Credentials {
                email: email.to_string(),
                password: password.to_string(),
            },
        )),
        (None, None) => {
            tracing::warn!("no API_TOKEN or admin credentials, requests are anonymous");
            Arc::new(StaticTokenProvider::default())
        }
    };

    let api = ApiClient::new(api_base_url, http_client.clone(), Arc::clone(&token_provider));

    let catalog: Arc<dyn CatalogRepository> = match config.catalog_backend() {
        CatalogBackend::Rest => Arc::new(RestCatalogRepository::new(api.clone())),
        CatalogBackend::Airtable(airtable) => {
            let client = AirtableClient::new(
                &airtable.api_url,
                airtable.base_id.clone(),
                airtable.token.clone(),
                http_client,
            )
            .context("failed to configure Airtable client")?;
            let tables = airtable
                .tables
                .iter()
                .fold(AirtableTables::default(), |tables, (kind, table)| {
                    tables.with_table(*kind, table.clone())
                });
            tracing::info!(base = %airtable.base_id, "catalog collections served from Airtable");
            Arc::new(AirtableCatalogRepository::new(client, tables))
        }
    };

    let repos = Repositories {
        catalog,
        posts: Arc::new(RestRecruitmentPostRepository::new(api.clone())),
        users: Arc::new(RestUserRepository::new(api.clone())),
        dashboard: Some(Arc::new(RestDashboardRepository::new(api))),
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let cache_ttl = config
        .cache_ttl()
        .map(chrono::Duration::from_std)
        .transpose()
        .context("CACHE_TTL_SECONDS is out of range")?;

    Ok(ApplicationServices::new(
        repos,
        token_provider,
        clock,
        slugger,
        cache_ttl,
        config.slug_max_attempts(),
    ))
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,reqwest=warn".to_string());

    // Logs go to stderr so command output stays pipeable.
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
