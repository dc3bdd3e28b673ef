// Option<T> fields are rejected: every field already falls back to a default

use envload::EnvLoad;

#[derive(EnvLoad)]
#[allow(dead_code)]
struct Config {
    pub port: Option<u16>,
}

fn main() {}
