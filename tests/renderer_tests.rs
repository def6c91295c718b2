use std::fs;
use std::path::PathBuf;

use image::{GenericImageView, Rgba};
use maplemetrics_icons::constants::{palette, targets};
use maplemetrics_icons::font::{FontProvider, Typesetter};
use maplemetrics_icons::renderer::{
    generate_all, launcher_requests, render, render_with_provider, IconRequest, IconStyle,
};

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "maplemetrics-icons-{}-{}",
        name,
        std::process::id()
    ));
    if dir.exists() {
        fs::remove_dir_all(&dir).expect("Failed to clear test directory");
    }
    fs::create_dir_all(&dir).expect("Failed to create test directory");
    dir
}

fn no_font(size: u32) -> FontProvider {
    FontProvider::NoFont {
        width: size * 2 / 5,
        height: size * 3 / 10,
    }
}

#[test]
fn full_launcher_set_lands_on_disk_with_exact_dimensions() {
    let dir = test_dir("full-set");
    let requests = launcher_requests(&dir);
    let style = IconStyle::default();
    let mut typesetter = Typesetter::new();

    generate_all(&requests, &style, &mut typesetter).expect("Generation failed");

    assert_eq!(requests.len(), targets::LAUNCHER_ICONS.len());
    for (size, path) in targets::LAUNCHER_ICONS {
        let full_path = dir.join(path);
        assert!(full_path.exists(), "Missing icon: {}", full_path.display());

        let img = image::open(&full_path).expect("Failed to decode PNG");
        assert_eq!(img.dimensions(), (*size, *size));
        assert!(img.color().has_alpha(), "Icon lost its alpha channel");
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn background_fills_corners_when_no_text_is_drawn() {
    let style = IconStyle::default();
    let mut typesetter = Typesetter::new();
    let canvas = render_with_provider(48, &style, &no_font(48), &mut typesetter);

    let background = Rgba(palette::BACKGROUND);
    assert_eq!(*canvas.get_pixel(0, 0), background);
    assert_eq!(*canvas.get_pixel(47, 47), background);
}

#[test]
fn small_icons_carry_no_leaf_decoration() {
    let style = IconStyle::default();
    let mut typesetter = Typesetter::new();
    let canvas = render_with_provider(48, &style, &no_font(48), &mut typesetter);

    // The whole upper quarter stays free of the translucent overlay
    for y in 0..12 {
        for x in 0..48 {
            assert_ne!(
                canvas.get_pixel(x, y)[3],
                200,
                "Unexpected leaf pixel at ({x}, {y})"
            );
        }
    }
}

#[test]
fn large_icons_show_the_translucent_leaf() {
    let style = IconStyle::default();
    let mut typesetter = Typesetter::new();
    let canvas = render_with_provider(96, &style, &no_font(96), &mut typesetter);

    // leaf_size = 96 / 8 = 12; probe the triangle's interior
    let probe = canvas.get_pixel(48, 24 + 6);
    assert_eq!(*probe, Rgba(palette::LEAF));
}

#[test]
fn reruns_produce_byte_identical_files() {
    let dir = test_dir("idempotence");
    let style = IconStyle::default();
    let mut typesetter = Typesetter::new();

    let first = IconRequest {
        size: 96,
        output_path: dir.join("first.png"),
    };
    let second = IconRequest {
        size: 96,
        output_path: dir.join("second.png"),
    };

    render(&first, &style, &mut typesetter).expect("First render failed");
    render(&second, &style, &mut typesetter).expect("Second render failed");

    let a = fs::read(&first.output_path).expect("Failed to read first PNG");
    let b = fs::read(&second.output_path).expect("Failed to read second PNG");
    assert_eq!(a, b, "Renders of the same request diverged");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn overwrites_existing_files_without_warning() {
    let dir = test_dir("overwrite");
    let style = IconStyle::default();
    let mut typesetter = Typesetter::new();

    let request = IconRequest {
        size: 48,
        output_path: dir.join("icon.png"),
    };

    fs::write(&request.output_path, b"not a png").expect("Failed to seed stale file");
    render(&request, &style, &mut typesetter).expect("Render over stale file failed");

    let img = image::open(&request.output_path).expect("Overwritten file is not a PNG");
    assert_eq!(img.dimensions(), (48, 48));

    fs::remove_dir_all(&dir).ok();
}

#[cfg(unix)]
#[test]
fn batch_aborts_at_first_unwritable_target() {
    let dir = test_dir("fatal");
    let style = IconStyle::default();
    let mut typesetter = Typesetter::new();

    // A plain file where a directory is needed makes create_dir_all fail
    let blocker = dir.join("blocker");
    fs::write(&blocker, b"").expect("Failed to create blocker file");

    let requests = vec![
        IconRequest {
            size: 48,
            output_path: dir.join("ok/first.png"),
        },
        IconRequest {
            size: 72,
            output_path: blocker.join("nested/second.png"),
        },
        IconRequest {
            size: 96,
            output_path: dir.join("never/third.png"),
        },
    ];

    let result = generate_all(&requests, &style, &mut typesetter);
    assert!(result.is_err(), "Expected the batch to abort");

    assert!(requests[0].output_path.exists(), "Earlier icon was lost");
    assert!(
        !requests[1].output_path.exists(),
        "Failing icon should not exist"
    );
    assert!(
        !requests[2].output_path.parent().unwrap().exists(),
        "Later requests should never run"
    );

    fs::remove_dir_all(&dir).ok();
}
