//! Per-section markup builders. All interpolation is verbatim.

use std::fmt::Write;

use crate::config::Config;
use crate::encode::DataUrl;

pub(super) fn navbar(name: &str) -> String {
    format!(
        r##"    <nav class="navbar navbar-expand-lg navbar-dark bg-dark fixed-top">
        <div class="container mt-2">
            <a class="navbar-brand" href="#">{name}'s Portfolio</a>
            <button class="navbar-toggler" type="button" data-bs-toggle="collapse" data-bs-target="#navbarNav" aria-controls="navbarNav" aria-expanded="false" aria-label="Toggle navigation">
                <span class="navbar-toggler-icon"></span>
            </button>
            <div class="collapse navbar-collapse" id="navbarNav">
                <ul class="navbar-nav ms-auto">
                    <li class="nav-item"><a class="nav-link" href="#home">Home</a></li>
                    <li class="nav-item"><a class="nav-link" href="#about">About</a></li>
                    <li class="nav-item"><a class="nav-link" href="#skills">Skills</a></li>
                    <li class="nav-item"><a class="nav-link" href="#projects">Projects</a></li>
                    <li class="nav-item"><a class="nav-link" href="#contact">Contact</a></li>
                    <button class="btn btn-light" onclick="downloadPortfolio()">Download Portfolio</button>
                </ul>
            </div>
        </div>
    </nav>
"##
    )
}

pub(super) fn home(name: &str, photo: &DataUrl) -> String {
    format!(
        r#"    <section id="home" class="full-screen-section mt-2">
        <div class="container mt-2">
            <div class="row align-items-center">
                <div class="col-md-4">
                    <img src="{photo}" alt="Profile Photo">
                </div>
                <div class="col-md-8">
                    <h1>Hello, I'm {name}</h1>
                </div>
            </div>
        </div>
    </section>
"#
    )
}

pub(super) fn about(name: &str, bio: &str, resume: &DataUrl) -> String {
    format!(
        r#"    <section id="about" class="full-screen-section mt-2">
        <div class="container">
            <h2>About Me</h2>
            <p>{bio}</p>
            <a href="{resume}" download="{name}_resume.pdf" target="_blank" class="btn btn-primary">View Resume</a>
        </div>
    </section>
"#
    )
}

/// One labeled progress bar per skill, in input order. Fill widths are
/// decorative pseudo-random percentages with no relation to proficiency.
pub(super) fn skills(rng: &mut fastrand::Rng, skills: &[String]) -> String {
    let mut bars = String::new();
    for skill in skills {
        let fill = rng.u32(0..100);
        let _ = write!(
            bars,
            r#"            <div class="mb-2">
                <label>{skill}</label>
                <div class="progress">
                    <div class="progress-bar" role="progressbar" style="width: {fill}%">{skill}</div>
                </div>
            </div>
"#
        );
    }
    format!(
        r#"    <section id="skills" class="full-screen-section mt-2">
        <div class="container mt-2">
            <h2>Skills</h2>
{bars}        </div>
    </section>
"#
    )
}

/// One link per project, in input order, pointing at the literal trimmed
/// text the user provided.
pub(super) fn projects(projects: &[String]) -> String {
    let mut items = String::new();
    for project in projects {
        let _ = write!(
            items,
            r#"                <li><a href="{project}" target="_blank">{project}</a></li>
"#
        );
    }
    format!(
        r#"    <section id="projects" class="full-screen-section mt-2">
        <div class="container mt-2">
            <h2>Projects</h2>
            <ul class="list-unstyled">
{items}            </ul>
        </div>
    </section>
"#
    )
}

pub(super) fn contact(contact: &str) -> String {
    format!(
        r#"    <section id="contact" class="full-screen-section mt-2">
        <div class="container mt-2">
            <h2>Contact</h2>
            <p>{contact}</p>
        </div>
    </section>
"#
    )
}

/// The in-page export trigger. The options object is generated from
/// [`Config`] and handed to the renderer unchanged; the output filename is
/// derived from the profile name.
pub(super) fn download_script(name: &str, config: &Config) -> String {
    let [top, right, bottom, left] = config.margins;
    format!(
        r#"    <script>
        function downloadPortfolio() {{
            const element = document.body;

            const options = {{
                margin: [{top}, {right}, {bottom}, {left}],
                filename: '{name}_Portfolio.pdf',
                image: {{ type: 'jpeg', quality: {quality} }},
                html2canvas: {{
                    scale: {scale},
                    height: document.body.scrollHeight
                }},
                jsPDF: {{
                    unit: 'mm',
                    format: [{width}, {height}],
                    orientation: '{orientation}'
                }}
            }};

            html2pdf().from(element).set(options).save();
        }}
    </script>
"#,
        quality = config.image_quality,
        scale = config.scale,
        width = config.page_width,
        height = config.page_height,
        orientation = config.orientation,
    )
}
