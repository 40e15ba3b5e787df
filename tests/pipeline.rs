mod common;

use common::synthetic_image::{checkerboard, noise};
use sobel_edge::image::io::{load_bitmap, save_bitmap, write_json_file};
use sobel_edge::image::ImageView;
use sobel_edge::{apply_files, pipeline, ChannelCount, EdgeFilter, EdgeFilterError};
use std::fs;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sobel_edge_{name}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn bitmap_round_trip_keeps_bgr_order() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = scratch_dir("round_trip");
    for channels in [ChannelCount::Bgr, ChannelCount::Bgra] {
        let img = noise(13, 9, channels, 31);
        let path = dir.join(format!("noise_{}.bmp", channels.bit_depth()));
        save_bitmap(&img, &path).expect("save");
        let back = load_bitmap(&path).expect("load");
        assert_eq!(back.geometry(), img.geometry());
        assert_eq!(back.data(), img.data());
    }
}

/// 32-bit `BI_RGB` bitmap with a 40-byte info header, rows stored
/// bottom-up. `pixel(i)` gives the BGRX bytes of the i-th pixel in file order.
fn bi_rgb_32(width: u32, height: u32, pixel: impl Fn(u32) -> [u8; 4]) -> Vec<u8> {
    let image_size = width * height * 4;
    let mut bmp = Vec::new();
    bmp.extend_from_slice(b"BM");
    bmp.extend_from_slice(&(54 + image_size).to_le_bytes());
    bmp.extend_from_slice(&0u32.to_le_bytes());
    bmp.extend_from_slice(&54u32.to_le_bytes());
    bmp.extend_from_slice(&40u32.to_le_bytes());
    bmp.extend_from_slice(&(width as i32).to_le_bytes());
    bmp.extend_from_slice(&(height as i32).to_le_bytes());
    bmp.extend_from_slice(&1u16.to_le_bytes());
    bmp.extend_from_slice(&32u16.to_le_bytes());
    bmp.extend_from_slice(&0u32.to_le_bytes());
    bmp.extend_from_slice(&image_size.to_le_bytes());
    bmp.extend_from_slice(&2835i32.to_le_bytes());
    bmp.extend_from_slice(&2835i32.to_le_bytes());
    bmp.extend_from_slice(&0u32.to_le_bytes());
    bmp.extend_from_slice(&0u32.to_le_bytes());
    for i in 0..width * height {
        bmp.extend_from_slice(&pixel(i));
    }
    bmp
}

#[test]
fn bi_rgb_32_bit_input_keeps_fourth_byte() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = scratch_dir("bi_rgb_32");
    let input = dir.join("padded.bmp");
    let output = dir.join("edges.bmp");
    fs::write(&input, bi_rgb_32(4, 4, |i| [10, 20, 30, i as u8 + 1])).expect("write bmp");

    let img = load_bitmap(&input).expect("load");
    assert_eq!(img.channels(), ChannelCount::Bgra);
    for file_row in 0..4 {
        for x in 0..4 {
            let i = (file_row * 4 + x) as u8;
            assert_eq!(img.pixel(x, 3 - file_row), &[10, 20, 30, i + 1]);
        }
    }

    let report = pipeline::run(&input, &output).expect("pipeline run");
    assert_eq!(report.geometry.channels(), ChannelCount::Bgra);
    let written = load_bitmap(&output).expect("load output");
    assert_eq!(written.channels(), ChannelCount::Bgra);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(written.pixel(x, y)[3], img.pixel(x, y)[3], "padding at ({x}, {y})");
            assert_eq!(&written.pixel(x, y)[..3], &[255, 255, 255]);
        }
    }
}

#[test]
fn file_run_matches_in_memory_filter() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = scratch_dir("file_run");
    let input = dir.join("board.bmp");
    let output = dir.join("nested/edges.bmp");
    let img = checkerboard(24, 16, 4, ChannelCount::Bgr);
    save_bitmap(&img, &input).expect("save input");

    let report = pipeline::run(&input, &output).expect("pipeline run");
    assert_eq!(report.geometry, img.geometry());
    assert_eq!(report.stats.border_pixels, 24 * 2 + 14 * 2);
    assert!(report.stats.edge_pixels > 0);
    for label in ["load", "filter", "save"] {
        assert!(report.timings.stage_ms(label).is_some(), "missing {label}");
    }

    let written = load_bitmap(&output).expect("load output");
    let expected = EdgeFilter::new().apply(&img).expect("filter");
    assert_eq!(written.data(), expected.data());

    let json = dir.join("report.json");
    write_json_file(&json, &report).expect("write report");
    let text = fs::read_to_string(&json).expect("read report");
    assert!(text.contains("\"edgePixels\""), "report JSON: {text}");
}

#[test]
fn missing_input_fails_without_output() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = scratch_dir("missing_input");
    let input = dir.join("absent.bmp");
    let output = dir.join("out.bmp");

    assert!(!apply_files(&input, &output));
    assert!(matches!(
        pipeline::run(&input, &output),
        Err(EdgeFilterError::Read { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn grayscale_input_is_rejected() {
    let dir = scratch_dir("gray_input");
    let input = dir.join("gray.png");
    image::GrayImage::new(4, 4).save(&input).expect("save gray png");

    match pipeline::run(&input, &dir.join("out.bmp")) {
        Err(EdgeFilterError::UnsupportedLayout { color, .. }) => {
            assert!(color.contains("L8"), "unexpected layout {color}")
        }
        other => panic!("expected UnsupportedLayout, got {other:?}"),
    }
}

#[test]
fn unwritable_output_is_a_write_failure() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = scratch_dir("unwritable");
    let input = dir.join("in.bmp");
    save_bitmap(&noise(6, 6, ChannelCount::Bgr, 3), &input).expect("save input");

    // Parent "directory" is a regular file.
    let output = input.join("out.bmp");
    assert!(matches!(
        pipeline::run(&input, &output),
        Err(EdgeFilterError::Write { .. })
    ));
    assert!(!apply_files(&input, &output));
}
