use clap::Parser;
use palette::THUMBNAILS;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod font;
mod palette;
mod render;

/// Generate the placeholder thumbnails used by the blog posts.
#[derive(Parser, Debug)]
#[command(name = "portfolio-thumbnails", version, about)]
struct Cli {
    /// Directory the JPEG files are written to, created if missing
    #[arg(long, default_value = "static/assets/images/blog_thumbnails")]
    out_dir: PathBuf,
}

#[derive(Debug, Error)]
enum Error {
    #[error("Error creating output directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),
    #[error("Embedded font could not be read: {0}")]
    Font(#[from] ab_glyph::InvalidFont),
    #[error(transparent)]
    Render(#[from] render::RenderError),
}

fn install_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_thumbnails=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<(), Error> {
    install_tracing();
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.out_dir)
        .map_err(|err| Error::CreateDir(cli.out_dir.clone(), err))?;

    let font = font::label_font()?;
    for thumbnail in &THUMBNAILS {
        let path = render::write(&font, thumbnail, &cli.out_dir)?;
        info!(path = %path.display(), "Created thumbnail");
    }

    info!(count = THUMBNAILS.len(), "All thumbnails created");
    Ok(())
}
