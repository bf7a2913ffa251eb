use std::{
    fs,
    path::{Path, PathBuf},
};

use image::RgbaImage;
use log::{debug, info, warn};

use crate::debug::TIME;
use crate::error::{IconError, Result};
use crate::raster::{encode_png, load_rgba, resample};
use crate::sizes::{
    ANDROID_ICONS, LAUNCHER_FILENAME, LAUNCHER_ROUND_FILENAME, PLAY_STORE_EDGE,
    PLAY_STORE_FILENAME, RECOMMENDED_SOURCE_EDGE,
};

/// Default source image, relative to the project root.
pub const DEFAULT_SOURCE: &str = "app/src/main/assets/vettid-icon-300.png";
/// Android resource root, relative to the project root.
pub const RES_DIR: &str = "app/src/main/res";
/// Android assets root, relative to the project root.
pub const ASSETS_DIR: &str = "app/src/main/assets";

pub struct GeneratorBuilder {
    source: PathBuf,
    res_dir: PathBuf,
    assets_dir: PathBuf,
}

impl GeneratorBuilder {
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        let root = project_root.as_ref();
        Self {
            source: root.join(DEFAULT_SOURCE),
            res_dir: root.join(RES_DIR),
            assets_dir: root.join(ASSETS_DIR),
        }
    }

    pub fn with_source(mut self, p: impl Into<PathBuf>) -> Self {
        self.source = p.into();
        self
    }

    pub fn with_res_dir(mut self, p: impl Into<PathBuf>) -> Self {
        self.res_dir = p.into();
        self
    }

    pub fn with_assets_dir(mut self, p: impl Into<PathBuf>) -> Self {
        self.assets_dir = p.into();
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Fails with [`IconError::SourceNotFound`] before anything touches the disk.
    pub fn build(self) -> Result<Generator> {
        if !self.source.exists() {
            return Err(IconError::SourceNotFound(self.source));
        }

        Ok(Generator {
            source: self.source,
            res_dir: self.res_dir,
            assets_dir: self.assets_dir,
        })
    }
}

#[derive(Debug)]
pub struct Generator {
    source: PathBuf,
    res_dir: PathBuf,
    assets_dir: PathBuf,
}

impl Generator {
    pub fn run(&self) -> Result<Report> {
        generate(&self.source, &self.res_dir, &self.assets_dir)
    }
}

/// Files written by a run, in write order.
#[derive(Debug, Default)]
pub struct Report {
    written: Vec<PathBuf>,
}

impl Report {
    pub fn count(&self) -> usize {
        self.written.len()
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

/// Writes every launcher icon density plus the Play Store icon.
///
/// The caller is expected to have checked that `source` exists. The first
/// failure aborts the run; files already written stay in place.
pub fn generate(source: &Path, res_dir: &Path, assets_dir: &Path) -> Result<Report> {
    info!("Loading source image: {}", source.display());
    let img = {
        TIME!(format!("decode {}", source.display()));
        load_rgba(source)?
    };
    check_source(&img);

    info!("Generating icons in: {}", res_dir.display());
    let mut report = Report::default();

    for size in ANDROID_ICONS.iter() {
        TIME!(format!("{} ({}x{})", size.directory, size.edge, size.edge));

        let output_dir = res_dir.join(size.directory);
        create_dir(&output_dir)?;

        let resized = resample(&img, size.edge);
        let data = encode_png(&resized, &output_dir.join(LAUNCHER_FILENAME))?;

        // both names share the same bytes
        for name in [LAUNCHER_FILENAME, LAUNCHER_ROUND_FILENAME] {
            let output_path = output_dir.join(name);
            write_file(&output_path, &data)?;
            report.written.push(output_path);
        }

        info!(
            "  Created: {}/{} ({}x{})",
            size.directory, LAUNCHER_FILENAME, size.edge, size.edge
        );
    }

    {
        TIME!("play store icon");

        create_dir(assets_dir)?;
        let playstore_path = assets_dir.join(PLAY_STORE_FILENAME);
        let resized = resample(&img, PLAY_STORE_EDGE);
        let data = encode_png(&resized, &playstore_path)?;
        write_file(&playstore_path, &data)?;
        report.written.push(playstore_path);

        info!(
            "  Created: {} ({}x{})",
            PLAY_STORE_FILENAME, PLAY_STORE_EDGE, PLAY_STORE_EDGE
        );
    }

    Ok(report)
}

fn check_source(img: &RgbaImage) {
    let (w, h) = img.dimensions();
    debug!("source is {}x{}", w, h);

    for warning in source_warnings(w, h) {
        warn!("{}", warning);
    }
}

/// Problems with the source that degrade the output without stopping the run.
fn source_warnings(w: u32, h: u32) -> Vec<String> {
    let mut warnings = Vec::new();
    if w != h {
        warnings.push(format!(
            "source image is not square ({}x{}), icons will be stretched",
            w, h
        ));
    }
    if w < RECOMMENDED_SOURCE_EDGE || h < RECOMMENDED_SOURCE_EDGE {
        warnings.push(format!(
            "source image is smaller than {0}x{0}, the Play Store icon will be upscaled",
            RECOMMENDED_SOURCE_EDGE
        ));
    }
    warnings
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| IconError::CreateDir {
        path: path.to_owned(),
        source,
    })
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(|source| IconError::Write {
        path: path.to_owned(),
        source,
    })
}
