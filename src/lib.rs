//! # folio-gen
//!
//! Generates a self-contained single-page HTML portfolio from profile fields
//! and three local files (photo, resume, background image), then presents it
//! in the default browser. PDF export is delegated to a client-side
//! HTML-to-PDF renderer embedded in the generated page.
//!
//! ## Features
//!
//! - **Self-contained output**: the three uploads are embedded as base64
//!   data URLs, so the page has no local file dependencies
//! - **Concurrent encoding**: the three file reads run at once and are
//!   joined before assembly; any failure aborts the whole run
//! - **In-page PDF export**: a "Download Portfolio" trigger drives the
//!   embedded renderer with a validated, fixed configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use folio_gen::{present, Assets, Config, Profile};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), folio_gen::Error> {
//! let profile = Profile::from_form(
//!     "Ada Lovelace",
//!     "Analyst and programmer.",
//!     "Rust, SQL, Writing",
//!     "https://example.com/engine, https://example.com/notes",
//!     "ada@example.com",
//! );
//!
//! let assets = Assets {
//!     photo: "photo.png".into(),
//!     resume: "resume.pdf".into(),
//!     background: "background.jpg".into(),
//! };
//!
//! let html = folio_gen::build(&profile, &assets, &Config::default()).await?;
//! present::open(&html)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Caveat
//!
//! Field values are interpolated into the template verbatim, with no
//! escaping; do not feed the generator untrusted input.

mod config;
mod encode;
mod error;
mod page;
pub mod present;
mod profile;

pub use config::{Config, Orientation};
pub use encode::{data_url, encode_assets, DataUrl};
pub use error::{Error, Result};
pub use profile::{split_list, Assets, EncodedAssets, Profile};

/// Assemble the portfolio document from already-encoded assets.
///
/// Pure except for the decorative skill-bar widths: no I/O, no browsing
/// context. Use [`build`] for the full pipeline and [`present::open`] to
/// display the result.
///
/// # Errors
///
/// Returns an error if the configuration fails validation or any profile
/// field is missing. Validation runs before anything is assembled.
pub fn generate(profile: &Profile, assets: &EncodedAssets, config: &Config) -> Result<String> {
    config.validate()?;
    profile.validate()?;
    Ok(page::assemble(profile, assets, config))
}

/// Run the full generation pipeline: validate, encode the three uploads
/// concurrently, and assemble the document.
///
/// Validation happens up front; if any field is missing, no file is read
/// and no document is produced. The run is all-or-nothing: a single failed
/// read fails the whole build with no partial output.
///
/// # Errors
///
/// Returns [`Error::MissingInput`] for an empty field,
/// [`Error::InvalidConfig`] for a bad export configuration, or
/// [`Error::Read`] if any of the three files cannot be read.
pub async fn build(profile: &Profile, assets: &Assets, config: &Config) -> Result<String> {
    config.validate()?;
    profile.validate()?;
    let encoded = encode::encode_assets(assets).await?;
    Ok(page::assemble(profile, &encoded, config))
}
