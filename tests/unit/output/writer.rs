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

#[test]
fn writes_decodable_png_named_by_id() {
    let tmp = temp_dir("writer_roundtrip");
    let img = RgbaImage::from_pixel(3, 5, image::Rgba([9, 8, 7, 255]));

    let path = write_card(&tmp, "m1", &img).unwrap();
    assert_eq!(path, tmp.join("m1.png"));

    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (3, 5));
    assert_eq!(back.get_pixel(2, 4).0, [9, 8, 7, 255]);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn rewrite_truncates_existing_file() {
    let tmp = temp_dir("writer_truncate");
    let big = RgbaImage::from_pixel(64, 64, image::Rgba([1, 2, 3, 255]));
    let small = RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 255]));

    write_card(&tmp, "m1", &big).unwrap();
    write_card(&tmp, "m1", &small).unwrap();
    let back = image::open(tmp.join("m1.png")).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (2, 2));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn unwritable_dir_is_output_create() {
    let tmp = temp_dir("writer_create_err");
    std::fs::create_dir_all(&tmp).unwrap();
    // A regular file where the output directory should be.
    let blocker = tmp.join("blocked");
    std::fs::write(&blocker, b"x").unwrap();

    let img = RgbaImage::new(1, 1);
    let err = write_card(&blocker, "m1", &img).unwrap_err();
    assert!(matches!(err, CardError::OutputCreate { .. }));

    std::fs::remove_dir_all(&tmp).ok();
}
