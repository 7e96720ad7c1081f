// src/main.rs
//
// Headless entry point: boot from the bundle, print what the list and the
// add flow would show. Presentation is external to this crate.

use std::sync::Arc;

use anyhow::Context;

use movieshelf::app::{bootstrap, BundleConfig};
use movieshelf::application::{NavigationLog, Session};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. CONFIGURATION
    let config = BundleConfig::from_env();

    // 2. BOOT (fatal on a missing or corrupt bundle)
    let navigation = NavigationLog::new();
    let state = bootstrap(&config, Arc::new(navigation.clone()))
        .with_context(|| format!("failed to start from {}", config.data_dir.display()))?;

    // 3. SESSION
    let session = Session::new(&state);
    let list = session.list();

    println!("{}", list.title());
    for (index, row) in list.rows().iter().enumerate() {
        println!("  {:>2}. {} [{}]", index, row.name, row.image_name);
    }

    let add = list.open_add_flow();
    println!();
    println!("Available to add:");
    match add.prompt() {
        Some(prompt) => println!("  {}", prompt),
        None => {
            for movie in add.available() {
                println!("  - {}", movie.name);
            }
        }
    }

    Ok(())
}
