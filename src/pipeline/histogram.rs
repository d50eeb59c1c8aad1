use std::collections::HashMap;

use anyhow::{bail, Result};

use crate::color::{Color, Hsv};

/// A decoded image: `width * height` pixels of `channels` bytes each, red,
/// green and blue first. Extra channels (alpha) are ignored.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    channels: usize,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    pub fn new(width: u32, height: u32, channels: usize, data: &'a [u8]) -> Result<Self> {
        if channels < 3 {
            bail!("pixel buffer needs at least 3 channels, got {channels}");
        }
        let Some(needed) = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(channels))
        else {
            bail!("pixel buffer dimensions overflow: {width}x{height}x{channels}");
        };
        if data.len() < needed {
            bail!(
                "pixel buffer too short: {width}x{height}x{channels} needs {needed} bytes, got {}",
                data.len()
            );
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let i = (y as usize * self.width as usize + x as usize) * self.channels;
        Color::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Every `stride`-th pixel of every `stride`-th row, row-major.
    /// A stride of zero is treated as one.
    pub fn sampled(&self, stride: usize) -> impl Iterator<Item = Color> + '_ {
        let stride = stride.max(1);
        (0..self.height)
            .step_by(stride)
            .flat_map(move |y| (0..self.width).step_by(stride).map(move |x| self.pixel(x, y)))
    }
}

/// One distinct color seen in the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBucket {
    pub color: Color,
    pub hsv: Hsv,
    pub frequency: u32,
}

/// Frequency count per distinct RGB value. Buckets keep first-seen order so
/// ranking ties resolve the same way on every run.
#[derive(Debug, Clone, Default)]
pub struct Histogram {
    buckets: Vec<ColorBucket>,
    index: HashMap<u32, usize>,
    samples: usize,
}

impl Histogram {
    pub fn build(buffer: &PixelBuffer<'_>, stride: usize) -> Self {
        let mut histogram = Self::default();
        for color in buffer.sampled(stride) {
            histogram.add(color);
        }
        histogram
    }

    pub fn add(&mut self, color: Color) {
        self.samples += 1;
        let next = self.buckets.len();
        let slot = *self.index.entry(color.packed()).or_insert(next);
        if slot == next {
            self.buckets.push(ColorBucket {
                color,
                hsv: color.to_hsv(),
                frequency: 1,
            });
        } else {
            self.buckets[slot].frequency += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of pixels visited.
    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn get(&self, color: Color) -> Option<&ColorBucket> {
        self.index.get(&color.packed()).map(|&i| &self.buckets[i])
    }

    /// Buckets in first-seen order.
    pub fn buckets(&self) -> &[ColorBucket] {
        &self.buckets
    }

    /// Consume the histogram, returning buckets by descending frequency.
    /// Equal frequencies keep first-seen order.
    pub fn into_ranked(self) -> Vec<ColorBucket> {
        let mut ranked = self.buckets;
        ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        ranked
    }
}
