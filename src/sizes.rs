/// A density-qualified launcher icon target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    pub directory: &'static str,
    pub edge: u32,
}

impl IconSize {
    const fn new(directory: &'static str, edge: u32) -> Self {
        Self { directory, edge }
    }
}

/// Android launcher icon densities, smallest first.
pub const ANDROID_ICONS: [IconSize; 5] = [
    IconSize::new("mipmap-mdpi", 48),
    IconSize::new("mipmap-hdpi", 72),
    IconSize::new("mipmap-xhdpi", 96),
    IconSize::new("mipmap-xxhdpi", 144),
    IconSize::new("mipmap-xxxhdpi", 192),
];

pub const LAUNCHER_FILENAME: &str = "ic_launcher.png";
// no round mask is applied, the file only carries the name Android looks up
pub const LAUNCHER_ROUND_FILENAME: &str = "ic_launcher_round.png";

pub const PLAY_STORE_FILENAME: &str = "ic_launcher-playstore.png";
pub const PLAY_STORE_EDGE: u32 = 512;

/// Number of files a successful run writes.
pub const TOTAL_ICONS: usize = ANDROID_ICONS.len() * 2 + 1;

/// Sources below this edge get upscaled for the Play Store icon.
pub const RECOMMENDED_SOURCE_EDGE: u32 = PLAY_STORE_EDGE;
