//! Assembly of the portfolio document.
//!
//! The output is a complete HTML page with a fixed section order: navbar,
//! home, about, skills, projects, contact. Assets arrive as data URLs, so
//! the page carries everything inline; the only network references are the
//! two CDN bundles for the UI framework and the client-side PDF renderer.
//!
//! Field values are interpolated verbatim, with no escaping. Markup in a
//! field reflects directly into the rendered document.

mod sections;

use crate::config::Config;
use crate::profile::{EncodedAssets, Profile};

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";
const HTML2PDF_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/html2pdf.js/0.9.2/html2pdf.bundle.min.js";

/// Assemble the full document from validated fields and resolved data URLs.
///
/// Deterministic except for the decorative skill progress-bar widths, which
/// are drawn fresh on every call.
pub(crate) fn assemble(profile: &Profile, assets: &EncodedAssets, config: &Config) -> String {
    let mut rng = fastrand::Rng::new();
    assemble_with(&mut rng, profile, assets, config)
}

fn assemble_with(
    rng: &mut fastrand::Rng,
    profile: &Profile,
    assets: &EncodedAssets,
    config: &Config,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name}'s Portfolio</title>
    <link href="{BOOTSTRAP_CSS}" rel="stylesheet">
    <style>
{style}    </style>
</head>
<body>
{navbar}
{home}
{about}
{skills}
{projects}
{contact}
    <script src="{BOOTSTRAP_JS}"></script>
    <script src="{HTML2PDF_JS}"></script>

{download}</body>
</html>
"#,
        name = profile.name,
        style = style(assets.background.as_str()),
        navbar = sections::navbar(&profile.name),
        home = sections::home(&profile.name, &assets.photo),
        about = sections::about(&profile.name, &profile.bio, &assets.resume),
        skills = sections::skills(rng, &profile.skills),
        projects = sections::projects(&profile.projects),
        contact = sections::contact(&profile.contact),
        download = sections::download_script(&profile.name, config),
    )
}

/// Embedded stylesheet. The navbar is hidden under `@media print` so it
/// stays out of the exported PDF.
fn style(background: &str) -> String {
    format!(
        r#"        body {{ font-family: Arial, sans-serif; margin: 0; padding: 0; box-sizing: border-box; }}
        .full-screen-section {{
            height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            background-image: url('{background}');
            background-size: cover;
            color: white;
            text-align: center;
            max-width: 100%;
            overflow-x: hidden;
        }}
        .container {{
            max-width: 100%;
            padding: 0 15px;
        }}
        img {{ width: 150px; border-radius: 50%; }}
        .progress {{ background-color: #f1f1f1; }}
        .progress-bar {{ background-color: #007bff; }}
        @media print {{
            .navbar {{ display: none; }}
            body {{ margin: 0; padding: 0; }}
            .full-screen-section {{ height: auto; }}
        }}
"#
    )
}
