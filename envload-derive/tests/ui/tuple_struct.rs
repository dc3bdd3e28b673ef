// Tuple structs have no field names to derive variable names from

use envload::EnvLoad;

#[derive(EnvLoad)]
#[allow(dead_code)]
struct Config(u16);

fn main() {}
