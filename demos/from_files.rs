//! Example running the full pipeline from files on disk.
//!
//! Run with:
//! `cargo run --example from_files -- photo.png resume.pdf background.jpg`

use std::env;

use folio_gen::{build, present, Assets, Config, Profile};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        eprintln!("Usage: {} <photo> <resume> <background>", args[0]);
        std::process::exit(1);
    }

    let profile = Profile::from_form(
        "Ada Lovelace",
        "Analyst and programmer.",
        "Mathematics, Analytical Engines",
        "https://example.com/engine",
        "ada@example.com",
    );
    let assets = Assets {
        photo: args[1].clone().into(),
        resume: args[2].clone().into(),
        background: args[3].clone().into(),
    };

    println!("Encoding assets and assembling...");
    let html = build(&profile, &assets, &Config::default()).await?;

    let path = present::open(&html)?;
    println!("Opened {}", path.display());

    Ok(())
}
