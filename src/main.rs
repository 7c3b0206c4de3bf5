//! Command-line tool that renders a slide deck to a PowerPoint file.
//!
//! Renders the built-in demo deck:
//! ```sh
//! deckwright -o resend-invoice-demo.pptx
//! ```
//!
//! Renders a YAML deck file:
//! ```sh
//! RUST_LOG=debug deckwright --deck talk.yaml -o talk.pptx
//! ```

use clap::Parser;
use deckwright::deck::{DeckFile, Theme, build, demo_deck};
use std::path::PathBuf;

/// Render a slide deck to a .pptx presentation
#[derive(Parser, Debug)]
#[command(
    name = "deckwright",
    about = "Render a template and data driven slide deck to PowerPoint (.pptx)",
    version
)]
struct Args {
    /// Output presentation path
    #[arg(
        short,
        long,
        value_name = "OUTPUT",
        default_value = "resend-invoice-demo.pptx"
    )]
    output: PathBuf,

    /// YAML deck file to render instead of the built-in demo deck
    #[arg(long, value_name = "FILE")]
    deck: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let (deck, theme) = match &args.deck {
        Some(path) => {
            let file = DeckFile::load(path)?;
            (file.deck, file.theme)
        },
        None => (demo_deck(), Theme::default()),
    };

    let pres = build(&deck, &theme)?;
    pres.save(&args.output)?;
    log::info!(
        "Wrote {} slides to {}",
        pres.slide_count(),
        args.output.display()
    );

    println!("Saved → {}", args.output.display());
    Ok(())
}
