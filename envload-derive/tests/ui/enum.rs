// Only structs can be loaded

use envload::EnvLoad;

#[derive(EnvLoad)]
#[allow(dead_code)]
enum Mode {
    Fast,
    Slow,
}

fn main() {}
