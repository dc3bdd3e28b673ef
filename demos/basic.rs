//! Basic usage example

fn main() -> anyhow::Result<()> {
    // Print the diagnostic line each load emits
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("envload=info")),
        )
        .init();

    // Set environment variables for demonstration
    std::env::set_var("MAX_CONNECTIONS", "  42 ");
    std::env::set_var("SAMPLE_RATE", "not-a-number");
    std::env::set_var("ALLOWED_HOSTS", "a.example.com, b.example.com,");

    let database_url = envload::load_string("DATABASE_URL", "postgres://localhost/mydb");
    let max_connections = envload::load_int("MAX_CONNECTIONS", 10);
    let sample_rate = envload::load_float("SAMPLE_RATE", 0.5);
    let debug_mode = envload::load_bool("DEBUG_MODE", false);
    let allowed_hosts =
        envload::load_array("ALLOWED_HOSTS", ",", vec!["localhost".to_string()]);

    println!("Configuration loaded:");
    println!("  Database URL: {}", database_url);
    println!("  Max Connections: {}", max_connections);
    println!("  Sample Rate: {}", sample_rate);
    println!("  Debug Mode: {}", debug_mode);
    println!("  Allowed Hosts: {:?}", allowed_hosts);

    Ok(())
}
