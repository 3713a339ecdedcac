use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use image::{Rgb, RgbImage};
use webp_optimizer::{ConversionReport, OptimizerConfig, optimize_images};

/// Collects everything the fmt subscriber writes.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn run_logged(dir: &Path) -> (ConversionReport, String) {
    let sink = Captured::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_target(false)
        .finish();

    let report = tracing::subscriber::with_default(subscriber, || {
        optimize_images(&OptimizerConfig::new(dir)).unwrap()
    });
    (report, sink.text())
}

fn line_with<'a>(output: &'a str, needle: &str) -> &'a str {
    output
        .lines()
        .find(|l| l.contains(needle))
        .unwrap_or_else(|| panic!("no line containing {needle:?} in:\n{output}"))
}

fn assert_megabytes_line(output: &str) {
    let line = line_with(output, "Total space saved: ");
    let value = line.split("Total space saved: ").nth(1).unwrap();
    let number = value.strip_suffix(" MB").expect("MB suffix");
    let (_, decimals) = number.split_once('.').expect("decimal point");
    assert_eq!(decimals.len(), 2, "{line}");
    number.parse::<f64>().unwrap();
}

#[test]
fn console_lines_follow_the_run() {
    let dir = tempfile::tempdir().unwrap();
    RgbImage::from_fn(32, 32, |x, y| Rgb([(x * 8) as u8, (y * 8) as u8, 128]))
        .save(dir.path().join("good.png"))
        .unwrap();
    fs::write(dir.path().join("bad.png"), b"not an image").unwrap();

    let (report, first) = run_logged(dir.path());
    assert_eq!(report.converted, 1);
    line_with(&first, "Optimizing images in ");
    line_with(&first, "Converting good.png to WebP...");
    // Announced before decoding, so a corrupt file still gets its line
    line_with(&first, "Converting bad.png to WebP...");
    line_with(&first, "Error converting bad.png: ");
    line_with(&first, "Done! Converted 1 images.");
    assert_megabytes_line(&first);

    let (report, second) = run_logged(dir.path());
    assert_eq!(report.converted, 0);
    line_with(&second, "Skipping good.png (WebP already up to date)");
    assert!(!second.contains("Converting good.png"));
    line_with(&second, "Error converting bad.png: ");
    line_with(&second, "Done! Converted 0 images.");
    line_with(&second, "Total space saved: 0.00 MB");
}
