//! Loading from an in-memory environment and inspecting diagnostics

use envload::{Loader, MapEnv, Outcome, RecordingSink};

fn main() -> anyhow::Result<()> {
    let env = MapEnv::new()
        .with("WORKERS", "8")
        .with("RATIO", "half")
        .with("FEATURES", " , ");

    let loader = Loader::new(env, RecordingSink::new());

    let workers = loader.load_int("WORKERS", 1);
    let ratio = loader.load_float("RATIO", 0.5);
    let features = loader.load_array("FEATURES", ",", vec!["base".to_string()]);

    println!("workers={workers} ratio={ratio} features={features:?}");

    for event in loader.sink().events() {
        match event.outcome {
            Outcome::Loaded { value } => println!("  {} loaded {}", event.key, value),
            Outcome::Fallback { reason, default } => {
                println!("  {} fell back to {} ({})", event.key, default, reason)
            }
        }
    }

    Ok(())
}
