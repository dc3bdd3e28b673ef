//! Loading a whole struct with `#[derive(EnvLoad)]`

use envload::EnvLoad;

#[derive(Debug, EnvLoad)]
#[load(prefix = "APP_")]
struct Config {
    // APP_NAME, falls back to Default::default()
    pub name: String,

    // APP_PORT
    #[load(default = 8080)]
    pub port: u16,

    // APP_DEBUG
    #[load(default)]
    pub debug: bool,

    // Custom name: DATABASE_CONNECTION_STRING (prefix still applies)
    #[load(
        name = "DATABASE_CONNECTION_STRING",
        default = "postgres://localhost/db".to_string()
    )]
    pub database_url: String,

    // APP_TAGS, semicolon separated
    #[load(separator = ";", default = vec!["default".to_string()])]
    pub tags: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("envload=info"))
        .init();

    std::env::set_var("APP_NAME", "my-application");
    std::env::set_var("APP_PORT", "not-a-port");
    std::env::set_var("APP_TAGS", "production; api");

    let config = Config::from_env();

    println!("Configuration:");
    println!("  Name: {}", config.name);
    println!("  Port: {}", config.port);
    println!("  Debug: {}", config.debug);
    println!("  Database URL: {}", config.database_url);
    println!("  Tags: {:?}", config.tags);

    Ok(())
}
