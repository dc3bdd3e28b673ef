// A custom parser receives the whole value, so a separator has no meaning

use envload::EnvLoad;

#[derive(EnvLoad)]
#[allow(dead_code)]
struct Config {
    #[load(separator = ";", parser = "parse_hosts")]
    pub hosts: Vec<String>,
}

fn main() {}
