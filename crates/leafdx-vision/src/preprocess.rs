//! Image -> model input tensor

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use leafdx_types::{ResizeFilter, TensorLayout};

use crate::model::InputTensor;

/// Spatial resolution the model was trained on
pub const INPUT_SIZE: u32 = 256;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreprocessConfig {
    pub filter: ResizeFilter,
    pub layout: TensorLayout,
}

impl PreprocessConfig {
    pub fn with_filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_layout(mut self, layout: TensorLayout) -> Self {
        self.layout = layout;
        self
    }
}

pub fn filter_type(filter: ResizeFilter) -> FilterType {
    match filter {
        ResizeFilter::Nearest => FilterType::Nearest,
        ResizeFilter::Bilinear => FilterType::Triangle,
        ResizeFilter::Bicubic => FilterType::CatmullRom,
        ResizeFilter::Lanczos3 => FilterType::Lanczos3,
    }
}

/// Shape of the batched input tensor for a layout
pub fn input_shape(layout: TensorLayout) -> [usize; 4] {
    let size = INPUT_SIZE as usize;
    match layout {
        TensorLayout::Nhwc => [1, size, size, 3],
        TensorLayout::Nchw => [1, 3, size, size],
    }
}

/// Resize to `INPUT_SIZE`, scale channels to [0, 1] and add the batch dimension.
pub fn to_input_tensor(image: &DynamicImage, config: &PreprocessConfig) -> InputTensor {
    let rgb = image
        .resize_exact(INPUT_SIZE, INPUT_SIZE, filter_type(config.filter))
        .to_rgb8();

    log::debug!(
        "preprocess {}x{} -> {}x{} ({}, {})",
        image.width(),
        image.height(),
        INPUT_SIZE,
        INPUT_SIZE,
        config.filter,
        config.layout
    );

    let [n, a, b, c] = input_shape(config.layout);
    match config.layout {
        TensorLayout::Nhwc => {
            InputTensor::from_shape_fn((n, a, b, c), |(_, y, x, ch)| channel(&rgb, x, y, ch))
        }
        TensorLayout::Nchw => {
            InputTensor::from_shape_fn((n, a, b, c), |(_, ch, y, x)| channel(&rgb, x, y, ch))
        }
    }
}

fn channel(rgb: &RgbImage, x: usize, y: usize, ch: usize) -> f32 {
    f32::from(rgb.get_pixel(x as u32, y as u32)[ch]) / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
    }

    #[test]
    fn test_any_size_becomes_256() {
        for (w, h) in [(300, 300), (64, 480), (256, 256), (1, 1)] {
            let tensor = to_input_tensor(&solid(w, h, [0, 0, 0]), &PreprocessConfig::default());
            assert_eq!(tensor.shape(), &[1, 256, 256, 3]);
        }
    }

    #[test]
    fn test_nchw_layout() {
        let config = PreprocessConfig::default().with_layout(TensorLayout::Nchw);
        let tensor = to_input_tensor(&solid(100, 50, [255, 0, 51]), &config);
        assert_eq!(tensor.shape(), &[1, 3, 256, 256]);
        assert_eq!(tensor[[0, 0, 10, 10]], 1.0);
        assert_eq!(tensor[[0, 1, 10, 10]], 0.0);
        assert!((tensor[[0, 2, 10, 10]] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_values_scaled_to_unit_range() {
        let tensor = to_input_tensor(&solid(40, 40, [255, 128, 0]), &PreprocessConfig::default());
        assert_eq!(tensor[[0, 0, 0, 0]], 1.0);
        assert!((tensor[[0, 0, 0, 1]] - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(tensor[[0, 0, 0, 2]], 0.0);
        assert!(tensor.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_grayscale_and_alpha_inputs_become_three_channels() {
        let gray = DynamicImage::new_luma8(30, 30);
        let rgba = DynamicImage::new_rgba8(30, 30);
        for image in [gray, rgba] {
            let tensor = to_input_tensor(&image, &PreprocessConfig::default());
            assert_eq!(tensor.shape(), &[1, 256, 256, 3]);
        }
    }

    #[test]
    fn test_every_filter_is_deterministic() {
        let mut img = RgbImage::new(97, 61);
        for (x, y, px) in img.enumerate_pixels_mut() {
            *px = Rgb([(x * 2) as u8, (y * 4) as u8, ((x + y) % 256) as u8]);
        }
        let img = DynamicImage::ImageRgb8(img);
        for filter in [
            ResizeFilter::Nearest,
            ResizeFilter::Bilinear,
            ResizeFilter::Bicubic,
            ResizeFilter::Lanczos3,
        ] {
            let config = PreprocessConfig::default().with_filter(filter);
            assert_eq!(to_input_tensor(&img, &config), to_input_tensor(&img, &config));
        }
    }
}
