use crate::cli::ThemeMode;
use crate::pipeline::histogram::PixelBuffer;

/// Detect whether the image is predominantly dark or light, from the mean
/// HSV value of the sampled pixels. Empty images count as dark.
pub fn detect_mode(buffer: &PixelBuffer<'_>, stride: usize) -> ThemeMode {
    let (sum, count) = buffer
        .sampled(stride)
        .fold((0.0f64, 0usize), |(sum, count), color| {
            let max = color.r.max(color.g).max(color.b);
            (sum + max as f64 / 255.0, count + 1)
        });
    if count == 0 || sum / (count as f64) < 0.5 {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}
