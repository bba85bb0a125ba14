use anyhow::Result;
use clap::Parser;
use config::Config;
use log::{error, info};
use roster_api::get_db_context;
use roster_api::service::create_service_context;

mod api_docs;
mod config;
mod constants;
mod data;
mod error;
mod handlers;
mod router;

// MAIN
#[macro_use]
extern crate lazy_static;
lazy_static! {
    pub static ref CONFIG: Config = Config::parse();
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let conf = CONFIG.clone();
    // Initialize the API
    let api_config = roster_api::Config {
        data_dir: conf.data_dir.clone(),
        avatar_max_height: conf.avatar_max_height,
    };
    roster_api::init(api_config.clone())?;

    let db = get_db_context(&api_config).await?;
    let service_context = create_service_context(api_config, db).await?;

    if conf.seed_demo_contacts {
        let seeded = service_context.contact_service.seed_demo_contacts().await?;
        if seeded > 0 {
            info!("Seeded {seeded} demo contacts");
        }
    }

    if let Err(e) = router::rocket_main(conf, service_context).launch().await {
        error!("Web server stopped with error: {e}");
    }

    Ok(())
}
