use std::fs::{self, File};
use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use launcher_icons::{generate, sizes::ANDROID_ICONS, sizes::TOTAL_ICONS};

struct Layout {
    _dir: tempfile::TempDir,
    source: PathBuf,
    res: PathBuf,
    assets: PathBuf,
}

fn layout_with(img: DynamicImage) -> Layout {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.png");
    img.save(&source).unwrap();

    Layout {
        res: dir.path().join("res"),
        assets: dir.path().join("assets"),
        source,
        _dir: dir,
    }
}

fn expected_outputs(res: &Path, assets: &Path) -> Vec<(PathBuf, u32)> {
    let mut out = Vec::new();
    for size in ANDROID_ICONS.iter() {
        let dir = res.join(size.directory);
        out.push((dir.join("ic_launcher.png"), size.edge));
        out.push((dir.join("ic_launcher_round.png"), size.edge));
    }
    out.push((assets.join("ic_launcher-playstore.png"), 512));
    out
}

fn png_color(path: &Path) -> (png::ColorType, png::BitDepth) {
    let decoder = png::Decoder::new(File::open(path).unwrap());
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    (info.color_type, info.bit_depth)
}

#[test]
fn test_writes_all_outputs() {
    let l = layout_with(DynamicImage::ImageRgba8(RgbaImage::from_fn(600, 600, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    })));

    let report = generate(&l.source, &l.res, &l.assets).unwrap();
    assert_eq!(report.count(), TOTAL_ICONS);

    let expected = expected_outputs(&l.res, &l.assets);
    assert_eq!(expected.len(), 11);
    for (path, edge) in &expected {
        assert_eq!(image::image_dimensions(path).unwrap(), (*edge, *edge), "{:?}", path);
    }

    let written: Vec<&PathBuf> = report.written().iter().collect();
    let paths: Vec<&PathBuf> = expected.iter().map(|(p, _)| p).collect();
    assert_eq!(written, paths);
}

#[test]
fn test_square_and_round_are_identical() {
    let l = layout_with(DynamicImage::ImageRgba8(RgbaImage::from_fn(512, 512, |x, y| {
        Rgba([(x / 2) as u8, (y / 2) as u8, ((x + y) % 256) as u8, 200])
    })));

    generate(&l.source, &l.res, &l.assets).unwrap();

    for size in ANDROID_ICONS.iter() {
        let dir = l.res.join(size.directory);
        let square = fs::read(dir.join("ic_launcher.png")).unwrap();
        let round = fs::read(dir.join("ic_launcher_round.png")).unwrap();
        assert_eq!(square, round, "{}", size.directory);
    }
}

#[test]
fn test_outputs_are_rgba_for_any_source() {
    let sources = [
        DynamicImage::ImageRgb8(RgbImage::from_pixel(300, 300, Rgb([0, 200, 0]))),
        DynamicImage::ImageLuma8(GrayImage::from_pixel(300, 300, Luma([90]))),
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(300, 300, Rgba([9, 8, 7, 6]))),
    ];

    for src in sources {
        let l = layout_with(src);
        generate(&l.source, &l.res, &l.assets).unwrap();

        for (path, _) in expected_outputs(&l.res, &l.assets) {
            assert_eq!(
                png_color(&path),
                (png::ColorType::Rgba, png::BitDepth::Eight),
                "{:?}",
                path
            );
        }
    }
}

#[test]
fn test_gray_source_gets_opaque_alpha() {
    let l = layout_with(DynamicImage::ImageLuma8(GrayImage::from_pixel(
        300,
        300,
        Luma([90]),
    )));
    generate(&l.source, &l.res, &l.assets).unwrap();

    let icon = image::open(l.res.join("mipmap-xhdpi").join("ic_launcher.png"))
        .unwrap()
        .to_rgba8();
    assert!(icon.pixels().all(|p| *p == Rgba([90, 90, 90, 255])));
}

#[test]
fn test_solid_red_source() {
    let red = Rgba([255, 0, 0, 255]);
    let l = layout_with(DynamicImage::ImageRgba8(RgbaImage::from_pixel(300, 300, red)));

    generate(&l.source, &l.res, &l.assets).unwrap();

    for (path, edge) in expected_outputs(&l.res, &l.assets) {
        let icon = image::open(&path).unwrap().to_rgba8();
        assert_eq!(icon.dimensions(), (edge, edge));
        assert!(icon.pixels().all(|p| *p == red), "{:?} is not solid red", path);
    }
}

#[test]
fn test_rerun_is_byte_identical() {
    let l = layout_with(DynamicImage::ImageRgb8(RgbImage::from_fn(520, 520, |x, y| {
        Rgb([(x * y % 256) as u8, (x % 256) as u8, (y % 256) as u8])
    })));

    generate(&l.source, &l.res, &l.assets).unwrap();
    let first: Vec<Vec<u8>> = expected_outputs(&l.res, &l.assets)
        .iter()
        .map(|(p, _)| fs::read(p).unwrap())
        .collect();

    generate(&l.source, &l.res, &l.assets).unwrap();
    let second: Vec<Vec<u8>> = expected_outputs(&l.res, &l.assets)
        .iter()
        .map(|(p, _)| fs::read(p).unwrap())
        .collect();

    assert_eq!(first, second);
}
