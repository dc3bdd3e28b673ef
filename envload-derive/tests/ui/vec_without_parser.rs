// Lists are split into strings; other element types need a parser

use envload::EnvLoad;

#[derive(EnvLoad)]
#[allow(dead_code)]
struct Config {
    pub ports: Vec<u16>,
}

fn main() {}
