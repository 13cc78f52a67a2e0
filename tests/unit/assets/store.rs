use std::io::Cursor;

use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "cardgen_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn write_png(path: &Path, width: u32, height: u32, pixel: [u8; 4]) {
    let img = RgbaImage::from_pixel(width, height, image::Rgba(pixel));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(path, &buf).unwrap();
}

#[test]
fn category_dirs_match_layout() {
    assert_eq!(AssetCategory::Avatar.dir(), "avatars");
    assert_eq!(AssetCategory::Club.dir(), "clubs");
    assert_eq!(AssetCategory::Grade.dir(), "grades");
    assert_eq!(AssetCategory::Special.dir(), "icons");
    assert_eq!(AssetCategory::Frame.dir(), "frame");
}

#[test]
fn asset_path_follows_naming_convention() {
    let store = AssetStore::new("root");
    assert_eq!(
        store.asset_path(AssetCategory::Club, "tennis"),
        PathBuf::from("root/clubs/tennis.png")
    );
    assert_eq!(
        store.asset_path(AssetCategory::Grade, "3"),
        PathBuf::from("root/grades/3.png")
    );
}

#[test]
fn load_decodes_once_per_key() {
    let tmp = temp_dir("store_decode_once");
    std::fs::create_dir_all(tmp.join("grades")).unwrap();
    write_png(&tmp.join("grades/2.png"), 4, 4, [1, 2, 3, 255]);

    let mut store = AssetStore::new(&tmp);
    let first = store.grade(2).unwrap();
    let second = store.grade(2).unwrap();
    assert_eq!(first.dimensions(), (4, 4));
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(store.decode_count(AssetCategory::Grade, "2"), 1);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn frame_always_resolves_default_key() {
    let tmp = temp_dir("store_frame_default");
    std::fs::create_dir_all(tmp.join("frame")).unwrap();
    write_png(&tmp.join("frame/default.png"), 2, 2, [9, 9, 9, 255]);

    let mut store = AssetStore::new(&tmp);
    assert_eq!(store.frame().unwrap().dimensions(), (2, 2));
    assert_eq!(store.decode_count(AssetCategory::Frame, FRAME_KEY), 1);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn missing_file_is_asset_not_found() {
    let tmp = temp_dir("store_not_found");
    std::fs::create_dir_all(&tmp).unwrap();

    let mut store = AssetStore::new(&tmp);
    let err = store.load(AssetCategory::Club, "missing").unwrap_err();
    assert!(matches!(err, CardError::AssetNotFound(_)));
    assert!(err.to_string().contains("missing.png"));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn bad_bytes_are_asset_decode() {
    let tmp = temp_dir("store_bad_bytes");
    std::fs::create_dir_all(tmp.join("icons")).unwrap();
    std::fs::write(tmp.join("icons/bad.png"), b"definitely not a png").unwrap();

    let mut store = AssetStore::new(&tmp);
    let err = store.load(AssetCategory::Special, "bad").unwrap_err();
    assert!(matches!(err, CardError::AssetDecode { .. }));

    std::fs::remove_dir_all(&tmp).ok();
}
