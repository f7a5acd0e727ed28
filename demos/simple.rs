//! Simple example assembling a portfolio from in-memory assets.
//!
//! Run with: `cargo run --example simple`

use folio_gen::{generate, Config, DataUrl, EncodedAssets, Profile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let profile = Profile::from_form(
        "Ada Lovelace",
        "Analyst, programmer, and writer of the first published algorithm.",
        "Mathematics, Analytical Engines, Writing",
        "https://example.com/notes, https://example.com/engine",
        "ada@example.com",
    );

    // A 1x1 transparent PNG standing in for real uploads.
    let pixel: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
        0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
        0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78,
        0x9C, 0x62, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00,
        0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];
    let assets = EncodedAssets {
        photo: DataUrl::from_bytes("image/png", pixel),
        resume: DataUrl::from_bytes("application/pdf", b"%PDF-1.4 minimal"),
        background: DataUrl::from_bytes("image/png", pixel),
    };

    let html = generate(&profile, &assets, &Config::default())?;

    std::fs::write("portfolio.html", &html)?;
    println!("Saved portfolio.html ({} bytes)", html.len());

    Ok(())
}
