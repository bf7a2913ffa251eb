use std::path::{Path, PathBuf};

use launcher_icons::{sizes::TOTAL_ICONS, GeneratorBuilder, IconError};
use log::LevelFilter;

// Usage: generate-icons [SOURCE_IMAGE]
fn main() {
    // initialize logger
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    std::process::exit(match run() {
        Ok(()) => 0,
        Err(IconError::SourceNotFound(path)) => {
            eprintln!("Error: Source image not found: {}", path.display());
            eprintln!("Please provide a high-resolution PNG image (512x512 or larger)");
            1
        }
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("{:?}", e);
            1
        }
    })
}

fn run() -> Result<(), IconError> {
    let mut builder = GeneratorBuilder::new(project_root());
    if let Some(source) = std::env::args_os().nth(1) {
        builder = builder.with_source(source);
    }

    let report = builder.build()?.run()?;
    debug_assert_eq!(report.count(), TOTAL_ICONS);

    println!("\nDone! Generated {} icons.", report.count());
    Ok(())
}

/// The tool lives one directory below the Android project root.
///
/// Resolved from `CARGO_MANIFEST_DIR` at compile time: a copied or installed
/// binary still writes into the tree it was built from, even when the source
/// path is passed on the command line.
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}
