// Separators only apply to list fields

use envload::EnvLoad;

#[derive(EnvLoad)]
#[allow(dead_code)]
struct Config {
    #[load(separator = ";")]
    pub port: u16,
}

fn main() {}
