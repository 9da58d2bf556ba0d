use clap::Parser;
use std::path::PathBuf;

use timeline_placeholders::{Face, Generator, GeneratorConfig};

#[derive(Parser)]
#[command(name = "timeline-placeholders")]
#[command(about = "Generate placeholder JPEGs for the website timeline section")]
struct Cli {
    /// Project root, relative to the current directory; images go to
    /// <ROOT>/public/images/timeline
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Use this TTF/OTF font instead of the system default
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save every render stage to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    println!("🎨 Generating timeline placeholder images");
    println!("==========================================\n");

    let config = GeneratorConfig::new(&args.root);
    println!("Output directory: {}\n", config.output_dir.display());

    let face = Face::locate(args.font.as_deref())?;
    if args.verbose {
        println!("Font: {}", face.describe());
    }

    let mut generator = Generator::new(config, face).with_verbose(args.verbose);
    if let Some(debug_dir) = args.debug_out {
        generator = generator.with_debug(debug_dir)?;
    }

    let results = generator.run()?;

    println!("\n=== Summary ===");
    println!("Created {} placeholder images:", results.len());
    for image in &results {
        println!(
            "  {} ({}x{}, {} bytes)",
            image.path.display(),
            image.width,
            image.height,
            image.bytes
        );
    }

    println!("\nNext steps:");
    println!("  1. Review the images in {}", generator.config().output_dir.display());
    println!("  2. Replace them with real photography when it is available");
    println!("  3. Keep the same file names so the timeline picks them up");

    Ok(())
}
