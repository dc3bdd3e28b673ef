//! Typed environment variable loading with default fallback
//!
//! `envload` reads configuration values from the environment and converts
//! them into typed values. Whenever a variable is missing, blank, or cannot be
//! parsed, the caller's default is returned instead. Loading never fails.
//!
//! # Features
//!
//! - **Never fails**: every loader returns either the parsed value or the default
//! - **Whitespace tolerant**: values are trimmed before parsing
//! - **Diagnostics**: one structured record per load, logged through `tracing`
//! - **Injectable**: swap the process environment for [`MapEnv`] in tests
//! - **Declarative**: load whole structs with `#[derive(EnvLoad)]`
//!
//! # Value Parsing
//!
//! - Integers: `MAX_CONNECTIONS=42` (base 10, signed 64-bit)
//! - Floats: `SAMPLE_RATE=0.25`
//! - Booleans: `DEBUG=true` (exactly `true` or `false`)
//! - Strings: `DATABASE_URL=postgres://localhost/db`
//! - Lists: `ALLOWED_HOSTS=a.example.com, b.example.com` (caller-chosen separator)
//!
//! Any other `FromStr` type works through [`Loader::load`], and arbitrary
//! formats through [`Loader::load_with`].
//!
//! # Example
//!
//! ```rust
//! # std::env::set_var("MAX_CONNECTIONS", " 42 ");
//! # std::env::set_var("ALLOWED_HOSTS", "a.example.com, b.example.com");
//! # std::env::remove_var("DEBUG");
//! let max_connections = envload::load_int("MAX_CONNECTIONS", 10);
//! let debug = envload::load_bool("DEBUG", false);
//! let hosts = envload::load_array("ALLOWED_HOSTS", ",", vec!["localhost".to_string()]);
//!
//! assert_eq!(max_connections, 42);
//! assert!(!debug);
//! assert_eq!(hosts, ["a.example.com", "b.example.com"]);
//! ```
//!
//! # Injected environment
//!
//! ```rust
//! use envload::{Loader, MapEnv, RecordingSink};
//!
//! let loader = Loader::new(MapEnv::new().with("PORT", "not-a-port"), RecordingSink::new());
//!
//! assert_eq!(loader.load::<u16>("PORT", 8080), 8080);
//! assert!(loader.sink().last().unwrap().is_fallback());
//! ```
//!
//! # Derive
//!
//! ```rust
//! use envload::EnvLoad;
//!
//! #[derive(Debug, EnvLoad)]
//! #[load(prefix = "APP_")]
//! struct Config {
//!     // Loaded from APP_SERVER_ADDR
//!     #[load(default = "127.0.0.1:8080".to_string())]
//!     pub server_addr: String,
//!
//!     #[load(default = 10)]
//!     pub max_connections: u32,
//!
//!     // Defaults to `false` via `Default::default()`
//!     pub debug_mode: bool,
//!
//!     // Custom names get the prefix too: APP_HOSTS
//!     #[load(name = "HOSTS", separator = ";")]
//!     pub allowed_hosts: Vec<String>,
//! }
//!
//! # std::env::set_var("APP_MAX_CONNECTIONS", "20");
//! # std::env::set_var("APP_HOSTS", "a; b");
//! let config = Config::from_env();
//! assert_eq!(config.server_addr, "127.0.0.1:8080");
//! assert_eq!(config.max_connections, 20);
//! assert!(!config.debug_mode);
//! assert_eq!(config.allowed_hosts, ["a", "b"]);
//! ```

mod diagnostic;
mod error;
mod loader;
mod source;

pub use diagnostic::{DiagnosticSink, LoadEvent, Outcome, RecordingSink, TracingSink};
pub use envload_derive::EnvLoad;
pub use error::FallbackReason;
pub use loader::Loader;
pub use source::{EnvSource, MapEnv, SystemEnv};

/// Load a base-10 `i64` from the process environment.
pub fn load_int(key: &str, default: i64) -> i64 {
    Loader::system().load_int(key, default)
}

/// Load an `f64` from the process environment.
pub fn load_float(key: &str, default: f64) -> f64 {
    Loader::system().load_float(key, default)
}

/// Load a `bool` (`true` or `false`) from the process environment.
pub fn load_bool(key: &str, default: bool) -> bool {
    Loader::system().load_bool(key, default)
}

/// Load a trimmed string from the process environment.
pub fn load_string(key: &str, default: impl Into<String>) -> String {
    Loader::system().load_string(key, default)
}

/// Load a `separator`-delimited list from the process environment.
///
/// See [`Loader::load_array`].
pub fn load_array(key: &str, separator: &str, default: Vec<String>) -> Vec<String> {
    Loader::system().load_array(key, separator, default)
}

/// Load any `FromStr` type from the process environment.
pub fn load<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Debug,
    T::Err: std::fmt::Display,
{
    Loader::system().load(key, default)
}
