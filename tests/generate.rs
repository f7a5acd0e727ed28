//! Integration tests for document assembly.

use folio_gen::{generate, Config, DataUrl, EncodedAssets, Error, Profile};

fn sample_profile() -> Profile {
    Profile::from_form(
        "Ada Lovelace",
        "Analyst and programmer.",
        "Rust, SQL, Writing",
        "https://example.com/engine, https://example.com/notes",
        "ada@example.com",
    )
}

fn sample_assets() -> EncodedAssets {
    EncodedAssets {
        photo: DataUrl::from_bytes("image/png", b"photo-bytes"),
        resume: DataUrl::from_bytes("application/pdf", b"resume-bytes"),
        background: DataUrl::from_bytes("image/jpeg", b"background-bytes"),
    }
}

fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_name_in_title_exactly_once() {
    let html = generate(&sample_profile(), &sample_assets(), &Config::default())
        .expect("generation should succeed");

    assert_eq!(
        count_occurrences(&html, "<title>Ada Lovelace's Portfolio</title>"),
        1,
        "title should carry the name once"
    );
}

#[test]
fn test_name_in_navbar_brand() {
    let html = generate(&sample_profile(), &sample_assets(), &Config::default()).unwrap();

    assert_eq!(
        count_occurrences(
            &html,
            r##"<a class="navbar-brand" href="#">Ada Lovelace's Portfolio</a>"##
        ),
        1,
        "navbar brand should carry the name once"
    );
}

#[test]
fn test_greeting_and_bio_present() {
    let html = generate(&sample_profile(), &sample_assets(), &Config::default()).unwrap();

    assert!(html.contains("Hello, I'm Ada Lovelace"));
    assert!(html.contains("<p>Analyst and programmer.</p>"));
    assert!(html.contains("<p>ada@example.com</p>"));
}

#[test]
fn test_one_progress_bar_per_skill_in_order() {
    let html = generate(&sample_profile(), &sample_assets(), &Config::default()).unwrap();

    assert_eq!(
        count_occurrences(&html, r#"class="progress-bar""#),
        3,
        "one bar per skill"
    );

    let rust = html.find("<label>Rust</label>").expect("Rust label");
    let sql = html.find("<label>SQL</label>").expect("SQL label");
    let writing = html.find("<label>Writing</label>").expect("Writing label");
    assert!(rust < sql && sql < writing, "bars should keep input order");
}

#[test]
fn test_empty_skill_entry_rendered_as_is() {
    let profile = Profile::from_form("Ada", "bio", "a,,b", "proj", "a@b.c");
    let html = generate(&profile, &sample_assets(), &Config::default()).unwrap();

    assert_eq!(
        count_occurrences(&html, r#"class="progress-bar""#),
        3,
        "empty entries still get a bar"
    );
    assert_eq!(count_occurrences(&html, "<label></label>"), 1);
}

#[test]
fn test_one_link_per_project_with_literal_href() {
    let html = generate(&sample_profile(), &sample_assets(), &Config::default()).unwrap();

    let first = r#"<li><a href="https://example.com/engine" target="_blank">https://example.com/engine</a></li>"#;
    let second = r#"<li><a href="https://example.com/notes" target="_blank">https://example.com/notes</a></li>"#;
    assert_eq!(count_occurrences(&html, first), 1);
    assert_eq!(count_occurrences(&html, second), 1);
    assert!(
        html.find(first).unwrap() < html.find(second).unwrap(),
        "links should keep input order"
    );
}

#[test]
fn test_assets_embedded_as_data_urls() {
    let assets = sample_assets();
    let html = generate(&sample_profile(), &assets, &Config::default()).unwrap();

    assert!(html.contains(&format!(r#"<img src="{}""#, assets.photo.as_str())));
    assert!(html.contains(&format!(r#"<a href="{}""#, assets.resume.as_str())));
    assert!(html.contains(&format!(
        "background-image: url('{}')",
        assets.background.as_str()
    )));
}

#[test]
fn test_resume_download_filename_derived_from_name() {
    let html = generate(&sample_profile(), &sample_assets(), &Config::default()).unwrap();
    assert!(html.contains(r#"download="Ada Lovelace_resume.pdf""#));
}

#[test]
fn test_export_filename_derived_from_name() {
    let html = generate(&sample_profile(), &sample_assets(), &Config::default()).unwrap();
    assert!(html.contains("filename: 'Ada Lovelace_Portfolio.pdf'"));
}

#[test]
fn test_export_options_from_config() {
    let config = Config::new()
        .margins([5.0, 6.0, 7.0, 8.0])
        .image_quality(0.5)
        .scale(2)
        .page_size(210, 297)
        .orientation(folio_gen::Orientation::Landscape);
    let html = generate(&sample_profile(), &sample_assets(), &config).unwrap();

    assert!(html.contains("margin: [5, 6, 7, 8]"));
    assert!(html.contains("quality: 0.5"));
    assert!(html.contains("scale: 2"));
    assert!(html.contains("format: [210, 297]"));
    assert!(html.contains("orientation: 'landscape'"));
}

#[test]
fn test_third_party_bundles_referenced() {
    let html = generate(&sample_profile(), &sample_assets(), &Config::default()).unwrap();

    assert!(html.contains("bootstrap@5.3.3/dist/css/bootstrap.min.css"));
    assert!(html.contains("bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js"));
    assert!(html.contains("html2pdf.js/0.9.2/html2pdf.bundle.min.js"));
}

#[test]
fn test_download_trigger_wired_to_navbar() {
    let html = generate(&sample_profile(), &sample_assets(), &Config::default()).unwrap();
    assert!(html.contains(r#"onclick="downloadPortfolio()""#));
    assert!(html.contains("function downloadPortfolio()"));
}

#[test]
fn test_interpolation_is_verbatim() {
    // Known reflection gap: field content lands in the markup unescaped.
    let profile = Profile::from_form("<b>Ada</b>", "a & b", "Rust", "proj", "a@b.c");
    let html = generate(&profile, &sample_assets(), &Config::default()).unwrap();

    assert!(html.contains("<title><b>Ada</b>'s Portfolio</title>"));
    assert!(html.contains("<p>a & b</p>"));
    assert!(!html.contains("&lt;b&gt;"));
}

#[test]
fn test_generate_rejects_missing_field() {
    let profile = Profile::from_form("", "bio", "Rust", "proj", "a@b.c");

    let result = generate(&profile, &sample_assets(), &Config::default());
    assert!(matches!(result, Err(Error::MissingInput("name"))));
}

#[test]
fn test_generate_rejects_invalid_config() {
    let config = Config::new().page_size(0, 297);

    let result = generate(&sample_profile(), &sample_assets(), &config);
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_document_is_complete_html() {
    let html = generate(&sample_profile(), &sample_assets(), &Config::default()).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.trim_end().ends_with("</html>"));
}
