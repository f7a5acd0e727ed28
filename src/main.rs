use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use folio_gen::{present, Assets, Config, Profile};

#[derive(Parser, Debug)]
#[clap(name = "folio-gen")]
#[clap(about = "Generate a self-contained HTML portfolio page", long_about = None)]
struct Cli {
    /// Display name used in the page title and navbar brand
    #[clap(long)]
    name: String,

    /// Short biography shown in the About section
    #[clap(long)]
    bio: String,

    /// Comma-separated list of skills
    #[clap(long)]
    skills: String,

    /// Comma-separated list of project links
    #[clap(long)]
    projects: String,

    /// Contact details shown in the Contact section
    #[clap(long)]
    contact: String,

    /// Profile photo shown in the Home section
    #[clap(long)]
    photo: PathBuf,

    /// Resume file linked from the About section
    #[clap(long)]
    resume: PathBuf,

    /// Background image for the full-viewport sections
    #[clap(long)]
    background: PathBuf,

    /// Write the document to this path instead of a temp file
    #[clap(long)]
    out: Option<PathBuf>,

    /// Generate without opening the page in a browser
    #[clap(long)]
    no_open: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(path) => {
            println!("portfolio written to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> folio_gen::Result<PathBuf> {
    let profile = Profile::from_form(
        &cli.name,
        &cli.bio,
        &cli.skills,
        &cli.projects,
        &cli.contact,
    );
    let assets = Assets {
        photo: cli.photo,
        resume: cli.resume,
        background: cli.background,
    };

    let html = folio_gen::build(&profile, &assets, &Config::default()).await?;

    let path = match cli.out {
        Some(out) => {
            std::fs::write(&out, &html)?;
            out
        }
        None => present::write_temp(&html)?,
    };

    if !cli.no_open {
        present::launch(&path)?;
    }
    Ok(path)
}
