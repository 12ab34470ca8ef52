mod models;
mod commands;
mod services;

use std::collections::HashSet;
use std::env;
use std::error;
use std::fs;
use std::sync::Arc;
use commands::get_framework;
use models::{bot_module::BotModule, config::Config};
use services::{bot_init, role_directory::RoleDirectory};
use serenity::{
    http::Http,
    model::{gateway::GatewayIntents, id::UserId}
};
use tokio::sync::RwLock;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;

pub type Error = Box<dyn error::Error + Send + Sync>;
pub type FormContext<'a> = poise::Context<'a, Data, Error>;

/// State shared by every command.
pub struct Data {
    pub config: Config,
    /// Replaced wholesale by `reload`; commands read a snapshot.
    pub directory: RwLock<Arc<RoleDirectory>>,
    pub unloaded: RwLock<HashSet<BotModule>>
}

fn init_logger() -> std::io::Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::hourly("logs", "sixthform.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing::subscriber::set_global_default(
        fmt::Subscriber::builder()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_span_events(fmt::format::FmtSpan::CLOSE)
            .with_ansi(true)
            .with_max_level(tracing::Level::DEBUG)
            .finish()
            .with(fmt::Layer::default().with_writer(non_blocking))
    ).expect("Failed to set global subscriber");

    const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");
    info!("Initializing Sixth Form bot v{}", VERSION.unwrap_or("<unknown>"));
    info!("Reading from {}", env::current_dir()?.display());

    Ok(guard)
}

async fn fetch_owners(token: &str) -> Result<HashSet<UserId>, Error> {
    let http = Http::new(token);
    let info = http.get_current_application_info().await?;

    let mut owners = HashSet::new();
    if let Some(team) = info.team {
        owners.insert(team.owner_user_id);
    } else {
        owners.insert(info.owner.id);
    }

    Ok(owners)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Dropping the guard stops the file writer, so it lives as long as main.
    let _log_guard = match init_logger() {
        Ok(guard) => Some(guard),
        Err(ex) => {
            error!("Failed to initialize logger: {}", ex);
            None
        }
    };

    let config_json = fs::read_to_string("config.json").expect("config.json not found");
    let config: Config = serde_json::from_str(&config_json).expect("config.json is malformed");

    let token = config.token.clone();
    let owners = fetch_owners(&token).await?;
    let options = get_framework(&config.cmd_prefix, owners);

    let framework = poise::Framework::builder()
        .token(&token)
        .intents(GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT | GatewayIntents::GUILD_MEMBERS)
        .options(options)
        .setup(move |ctx, ready, _framework| {
            Box::pin(async move {
                bot_init::ready(ctx, ready, config).await
            })
        })
        .build()
        .await?;

    if let Err(ex) = framework.start().await {
        error!("Discord bot client error: {:?}", ex);
    }

    Ok(())
}
