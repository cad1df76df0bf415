//! Sizes and positions of the color guide, computed before any node
//! is created.

use log::debug;

/// Style constants of a color guide.
///
/// The [`Default`] values give a 300px wide panel with 44px swatches.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideStyle {
    /// Side of a (square) swatch.
    pub swatch_size: f64,
    /// Space reserved above a row label.
    pub label_top_margin: f64,
    /// Height of a row label.
    pub label_height: f64,
    /// Space reserved below a row label (includes the label height).
    pub label_bottom_margin: f64,
    /// Horizontal gap between two swatches of a strip.
    pub swatch_gap: f64,
    /// Width of the panel.
    pub panel_width: f64,
    /// Maximum height of the image preview (and of its background).
    pub max_image_preview_height: f64,
    /// Margin added at the bottom of the panel.
    pub left_margin: f64,
    /// Space around the image preview inside its background.
    pub image_preview_inset: f64,
    pub panel_corner_radius: f64,
    pub swatch_corner_radius: f64,
    /// Font size of the row labels, in points.
    pub label_font_size: f64,
    /// Spacing between the label and the strip of a row.
    pub row_item_spacing: f64,
    pub row_vertical_padding: f64,
    pub row_horizontal_padding: f64,
    /// Horizontal distance between the source rectangle and the
    /// panel placed beside it.
    pub placement_gap: f64,
}

impl Default for GuideStyle {
    fn default() -> Self {
        GuideStyle {
            swatch_size: 44.,
            label_top_margin: 24.,
            label_height: 12.,
            label_bottom_margin: 8. + 12.,
            swatch_gap: 12.,
            panel_width: 300.,
            max_image_preview_height: 300.,
            left_margin: 16.,
            image_preview_inset: 16.,
            panel_corner_radius: 6.,
            swatch_corner_radius: 2.,
            label_font_size: 10.,
            row_item_spacing: 8.,
            row_vertical_padding: 12.,
            row_horizontal_padding: 16.,
            placement_gap: 100.,
        }
    }
}

impl GuideStyle {
    /// Height budgeted for one swatch row.
    #[inline]
    pub fn row_height(&self) -> f64 {
        self.label_top_margin + self.label_bottom_margin + self.swatch_size
    }
}

/// An axis aligned rectangle, relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Bounds { x, y, width, height }
    }

    /// Return the rectangle moved by `(dx, dy)`.
    #[inline]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Bounds { x: self.x + dx, y: self.y + dy, ..*self }
    }
}

/// Geometry of one color guide.
///
/// Created by [`plan`] and consumed by the builder; it is never
/// stored.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub panel_width: f64,
    /// Fixed height of the panel: image background, three rows and
    /// the bottom margin.
    pub panel_height: f64,
    pub image_background_height: f64,
    /// Bounds of the image preview inside the image background.
    pub image_preview: Bounds,
    /// Corner radius of the source, copied as is.
    pub image_preview_corner_radius: f64,
    /// Height budgeted for each of the three swatch rows.
    pub row_height: f64,
}

/// Number of swatch rows below the image.
pub(crate) const SWATCH_ROWS: usize = 3;

fn image_background_height(h: f64, s: &GuideStyle) -> f64 {
    let max = s.max_image_preview_height;
    if h > max { max }
    else { (h + 2. * s.image_preview_inset).min(max) }
}

fn image_preview_x(w: f64, s: &GuideStyle) -> f64 {
    if w >= s.panel_width { 0. } else { (s.panel_width - w) / 2. }
}

fn image_preview_y(h: f64, s: &GuideStyle) -> f64 {
    let max = s.max_image_preview_height;
    if h >= max { 0. }
    // The inset would push the preview past the cap: center it.
    else if h + s.image_preview_inset >= max { (max - h) / 2. }
    else { s.image_preview_inset }
}

/// Compute the geometry of a guide for a source of size `width` ×
/// `height` with corner radius `corner_radius`.
///
/// Degenerate sizes (zero or negative) are accepted and yield a
/// degenerate preview.
///
/// # Example
///
/// ```
/// use color_guide::{plan, GuideStyle};
/// let p = plan(500., 800., 0., &GuideStyle::default());
/// assert_eq!(p.image_background_height, 300.);
/// assert_eq!(p.panel_height, 580.);
/// ```
pub fn plan(width: f64, height: f64, corner_radius: f64,
            style: &GuideStyle) -> LayoutPlan {
    let image_background_height = image_background_height(height, style);
    let row_height = style.row_height();
    let panel_height = image_background_height
        + SWATCH_ROWS as f64 * row_height + style.left_margin;
    let image_preview = Bounds {
        x: image_preview_x(width, style),
        y: image_preview_y(height, style),
        width: width.min(style.panel_width),
        height: height.min(style.max_image_preview_height),
    };
    let plan = LayoutPlan {
        panel_width: style.panel_width,
        panel_height,
        image_background_height,
        image_preview,
        image_preview_corner_radius: corner_radius,
        row_height,
    };
    debug!("color guide plan for {width} × {height}: {plan:?}");
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(w: f64, h: f64) -> LayoutPlan {
        plan(w, h, 0., &GuideStyle::default())
    }

    #[test]
    fn short_source_is_inset() {
        for h in [1., 50., 150., 268.] {
            let p = p(100., h);
            assert_eq!(p.image_background_height, h + 32.);
            assert_eq!(p.image_preview.y, 16.);
            assert_eq!(p.image_preview.height, h);
        }
    }

    #[test]
    fn tall_source_is_clamped() {
        for h in [300., 301., 5000.] {
            let p = p(100., h);
            assert_eq!(p.image_background_height, 300.);
            assert_eq!(p.image_preview.height, 300.);
            assert_eq!(p.image_preview.y, 0.);
        }
    }

    #[test]
    fn near_cap_source_is_centered() {
        // 290 + 16 ≥ 300, so the preview is centered.
        let p = p(100., 290.);
        assert_eq!(p.image_background_height, 300.);
        assert_eq!(p.image_preview.y, 5.);
        // 280 + 16 < 300 but 280 + 32 > 300: inset kept, background capped.
        let p = super::plan(100., 280., 0., &GuideStyle::default());
        assert_eq!(p.image_background_height, 300.);
        assert_eq!(p.image_preview.y, 16.);
    }

    #[test]
    fn width_is_centered_or_clamped() {
        let p1 = p(100., 50.);
        assert_eq!(p1.image_preview.x, 100.);
        assert_eq!(p1.image_preview.width, 100.);
        let p2 = p(300., 50.);
        assert_eq!((p2.image_preview.x, p2.image_preview.width), (0., 300.));
        let p3 = p(1200., 50.);
        assert_eq!((p3.image_preview.x, p3.image_preview.width), (0., 300.));
        for w in [0., 1., 99., 299.] {
            let b = p(w, 50.).image_preview;
            assert_eq!(b.x, (300. - w) / 2.);
            assert!(b.x + b.width <= 300.);
        }
    }

    #[test]
    fn panel_height_is_monotone() {
        let mut prev = f64::NEG_INFINITY;
        for i in 0 .. 800 {
            let h = p(100., i as f64).panel_height;
            assert!(h >= prev, "panel height decreases at {i}");
            prev = h;
        }
        assert_eq!(prev, 300. + 3. * 88. + 16.);
    }

    #[test]
    fn zero_size_is_degenerate() {
        let p = p(0., 0.);
        assert_eq!(p.image_preview, Bounds::new(150., 16., 0., 0.));
        assert_eq!(p.image_background_height, 32.);
    }

    #[test]
    fn corner_radius_is_copied() {
        let p = plan(10., 10., 40., &GuideStyle::default());
        assert_eq!(p.image_preview_corner_radius, 40.);
    }
}
