//! Window sizing for image windows.

use std::fmt;

/// A width/height pair in logical points.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub(crate) struct Size {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl Size {
    pub(crate) const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and strictly positive.
    pub(crate) fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub(crate) fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    pub(crate) fn fits_within(&self, bounds: Size) -> bool {
        self.width <= bounds.width && self.height <= bounds.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}x{:.0}", self.width, self.height)
    }
}

#[cfg(feature = "gui")]
impl From<egui::Vec2> for Size {
    fn from(v: egui::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(feature = "gui")]
impl From<Size> for egui::Vec2 {
    fn from(s: Size) -> Self {
        egui::vec2(s.width, s.height)
    }
}

/// Initial size of a window presenting an image of natural size `image`
/// on a screen whose visible area is `screen`.
///
/// Images that fit are shown at their natural size. Larger images are
/// scaled down by the tighter of the two ratios so the aspect ratio is
/// kept. When no usable screen size is known the natural size is returned.
pub(crate) fn fit_to_screen(image: Size, screen: Option<Size>) -> Size {
    let Some(screen) = screen.filter(Size::is_usable) else {
        return image;
    };
    if !image.is_usable() || image.fits_within(screen) {
        return image;
    }

    let width_ratio = screen.width / image.width;
    let height_ratio = screen.height / image.height;
    let scale = width_ratio.min(height_ratio);

    // Rounding in the product can overshoot the bound by an ulp.
    Size::new(
        (image.width * scale).min(screen.width),
        (image.height * scale).min(screen.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn screen() -> Size {
        Size::new(1600.0, 1000.0)
    }

    #[test]
    fn wide_image_is_bound_by_width() {
        let out = fit_to_screen(Size::new(4000.0, 2000.0), Some(screen()));
        assert!((out.width - 1600.0).abs() < EPS);
        assert!((out.height - 800.0).abs() < EPS);
    }

    #[test]
    fn image_that_fits_is_unchanged() {
        let image = Size::new(800.0, 600.0);
        assert_eq!(fit_to_screen(image, Some(screen())), image);
    }

    #[test]
    fn exact_fit_is_unchanged() {
        assert_eq!(fit_to_screen(screen(), Some(screen())), screen());
    }

    #[test]
    fn tall_image_is_bound_by_height() {
        let out = fit_to_screen(Size::new(1000.0, 5000.0), Some(screen()));
        assert!((out.height - 1000.0).abs() < EPS);
        assert!((out.width - 200.0).abs() < EPS);
    }

    #[test]
    fn one_dimension_over_budget_still_scales() {
        let image = Size::new(1700.0, 100.0);
        let out = fit_to_screen(image, Some(screen()));
        assert!(out.width <= 1600.0);
        assert!((out.aspect_ratio() - image.aspect_ratio()).abs() < EPS);
    }

    #[test]
    fn missing_screen_falls_back_to_natural_size() {
        let image = Size::new(4000.0, 2000.0);
        assert_eq!(fit_to_screen(image, None), image);
    }

    #[test]
    fn degenerate_screen_falls_back_to_natural_size() {
        let image = Size::new(4000.0, 2000.0);
        assert_eq!(fit_to_screen(image, Some(Size::new(0.0, 1000.0))), image);
        assert_eq!(fit_to_screen(image, Some(Size::new(1600.0, -1.0))), image);
        assert_eq!(fit_to_screen(image, Some(Size::new(f32::NAN, 1000.0))), image);
    }

    #[test]
    fn degenerate_image_is_returned_as_is() {
        let flat = Size::new(0.0, 5000.0);
        assert_eq!(fit_to_screen(flat, Some(screen())), flat);

        let negative = Size::new(-20.0, 5000.0);
        assert_eq!(fit_to_screen(negative, Some(screen())), negative);

        let out = fit_to_screen(Size::new(f32::NAN, 5000.0), Some(screen()));
        assert!(out.width.is_nan());
        assert_eq!(out.height, 5000.0);
    }

    #[test]
    fn scaled_sizes_keep_ratio_and_stay_in_bounds() {
        let screens = [
            Size::new(1600.0, 1000.0),
            Size::new(1280.0, 777.0),
            Size::new(333.0, 1920.0),
        ];
        let images = [
            Size::new(4000.0, 2000.0),
            Size::new(1601.0, 1.0),
            Size::new(3.0, 9999.0),
            Size::new(12345.6, 7890.1),
            Size::new(2000.0, 2000.0),
        ];
        for screen in screens {
            for image in images {
                let out = fit_to_screen(image, Some(screen));
                assert!(out.width > 0.0 && out.height > 0.0, "{image} on {screen}");
                assert!(out.width <= image.width && out.height <= image.height);
                assert!(out.fits_within(screen), "{out} exceeds {screen}");
                let drift = (out.aspect_ratio() - image.aspect_ratio()).abs() / image.aspect_ratio();
                assert!(drift < 1e-3, "{image} on {screen} gave {out}");
            }
        }
    }
}
