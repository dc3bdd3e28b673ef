// Unit structs have nothing to load

use envload::EnvLoad;

#[derive(EnvLoad)]
#[allow(dead_code)]
struct Config;

fn main() {}
