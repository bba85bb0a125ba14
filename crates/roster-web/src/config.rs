use clap::Parser;

/// Web server configuration, taken from CLI flags or environment
#[derive(Debug, Clone, Parser)]
#[command(version)]
pub struct Config {
    #[arg(default_value = "127.0.0.1", long, env = "HTTP_ADDRESS")]
    pub http_address: String,

    #[arg(default_value_t = 8000, long, env = "HTTP_PORT")]
    pub http_port: u16,

    #[arg(default_value = "./data", long, env = "DATA_DIR")]
    pub data_dir: String,

    /// Uploaded avatars are shrunk to at most this height in pixels
    #[arg(default_value_t = 64, long, env = "AVATAR_MAX_HEIGHT")]
    pub avatar_max_height: u32,

    /// Fill an empty store with a few demo contacts at startup
    #[arg(
        long,
        env = "SEED_DEMO_CONTACTS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub seed_demo_contacts: bool,

    #[arg(long, env = "LAUNCH_FRONTEND_AT_STARTUP")]
    pub launch_frontend_at_startup: bool,

    #[arg(default_value = "/", long, env = "FRONTEND_URL_PATH")]
    pub frontend_url_path: String,

    #[arg(
        default_value = "crates/roster-web/static",
        long,
        env = "FRONTEND_SERVE_FOLDER"
    )]
    pub frontend_serve_folder: String,

    #[arg(
        default_value = "crates/roster-web/templates",
        long,
        env = "TEMPLATE_DIR"
    )]
    pub template_dir: String,
}

impl Config {
    pub fn http_listen_url(&self) -> String {
        format!("http://{}:{}", self.http_address, self.http_port)
    }
}
