//! Layout of color guides.
//!
//! A color guide is a panel placed next to an image showing, from
//! top to bottom:
//!
//! - a preview of the image on a background tinted with its dominant
//!   color;
//! - the dominant color;
//! - the recommended text colors;
//! - the palette extracted from the image.
//!
//! [`generate_color_guide`] computes the geometry of the panel
//! ([`plan`]), picks a label font with the help of the host
//! ([`FontService`]) and returns a tree of [`Node`]s with all sizes
//! and positions resolved.  Creating the actual elements is left to
//! the host, see [`host::materialize`].
//!
//! Colors are [`RGB<f64>`] with components in \[0, 1\].  They are
//! neither validated nor deduplicated.

use log::debug;
pub use rgb::{RGB, RGBA};

mod builder;
mod error;
mod font;
mod geometry;
pub mod host;
mod node;

pub use builder::{DOMINANT_COLOR, PALETTE, RECOMMENDED_TEXT_COLOR};
pub use error::{BoxError, Error, FontOperation, Result};
pub use font::{resolve_font, FontName, FontPreferences, FontService,
               StaticFonts, DEFAULT_FONTS};
pub use geometry::{plan, Bounds, GuideStyle, LayoutPlan};
pub use node::{first_image_paint, AutoLayout, AxisSizing, BlendMode,
               Descendants, Effect, ImagePaint, LayoutMode, Node, NodeKind,
               Paint, ScaleMode, Shadow, Text};

/// Colors extracted from an image.
#[derive(Debug, Clone, PartialEq)]
pub struct UIColorData {
    pub dominant_color: RGB<f64>,
    /// Palette, in display order.  May be empty.
    pub palette: Vec<RGB<f64>>,
    /// May be empty.
    pub suggested_text_colors: Vec<RGB<f64>>,
}

impl UIColorData {
    /// Color data with only a dominant color.
    pub fn new(dominant_color: RGB<f64>) -> Self {
        UIColorData { dominant_color, palette: vec![],
                      suggested_text_colors: vec![] }
    }

    pub fn palette(mut self, palette: impl IntoIterator<Item = RGB<f64>>)
                   -> Self {
        self.palette = palette.into_iter().collect();
        self
    }

    pub fn suggested_text_colors(
        mut self, colors: impl IntoIterator<Item = RGB<f64>>) -> Self {
        self.suggested_text_colors = colors.into_iter().collect();
        self
    }
}

/// The rectangle whose image is described by the guide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceRect<'a> {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    /// Image fill of the rectangle, shown in the preview.
    pub image_paint: &'a ImagePaint,
}

impl<'a> SourceRect<'a> {
    /// A `width` × `height` rectangle at the origin, without rounded
    /// corners.
    pub fn new(width: f64, height: f64, image_paint: &'a ImagePaint) -> Self {
        SourceRect { x: 0., y: 0., width, height, corner_radius: 0.,
                     image_paint }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn corner_radius(mut self, r: f64) -> Self {
        self.corner_radius = r;
        self
    }
}

/// Where the panel goes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Placement {
    /// To the right of the source, [`GuideStyle::placement_gap`]
    /// away, aligned with its top.
    #[default]
    BesideSource,
    At { x: f64, y: f64 },
}

/// Options of [`generate_color_guide_with`].
#[derive(Debug, Clone, Default)]
pub struct GuideOptions {
    style: GuideStyle,
    fonts: FontPreferences,
    placement: Placement,
    strict_geometry: bool,
}

impl GuideOptions {
    pub fn style(mut self, style: GuideStyle) -> Self {
        self.style = style;
        self
    }

    /// Label fonts, see [`FontPreferences`].
    pub fn fonts(mut self, fonts: FontPreferences) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Reject sources with a non-positive (or non-finite) width or
    /// height instead of producing a degenerate preview.
    pub fn strict_geometry(mut self, strict: bool) -> Self {
        self.strict_geometry = strict;
        self
    }

    fn origin(&self, source: &SourceRect<'_>) -> (f64, f64) {
        match self.placement {
            Placement::BesideSource =>
                (source.x + source.width + self.style.placement_gap, source.y),
            Placement::At { x, y } => (x, y),
        }
    }
}

fn check_geometry(source: &SourceRect<'_>) -> Result<()> {
    let ok = |d: f64| d.is_finite() && d > 0.;
    if ok(source.width) && ok(source.height) { Ok(()) }
    else { Err(Error::InvalidGeometry { width: source.width,
                                        height: source.height }) }
}

/// Generate the color guide of `source` with the default options.
///
/// # Example
///
/// ```
/// use color_guide::*;
/// let img = ImagePaint::new("0f3e9a");
/// let source = SourceRect::new(500., 800., &img);
/// let data = UIColorData::new(RGB::new(0.1, 0.2, 0.3));
/// let fonts = StaticFonts::new([FontName::new("Roboto", "Bold")]);
/// let guide = futures::executor::block_on(
///     generate_color_guide(&source, &data, &fonts))?;
/// assert_eq!(guide.bounds, Bounds::new(600., 0., 300., 580.));
/// # Ok::<(), Error>(())
/// ```
pub async fn generate_color_guide<'a, S: FontService>(
    source: &SourceRect<'a>, data: &UIColorData, fonts: &S)
    -> Result<Node<'a>> {
    generate_color_guide_with(source, data, fonts, &GuideOptions::default())
        .await
}

/// Generate the color guide of `source`.
///
/// The only suspension point is the font resolution.  Either the
/// whole tree is returned or an error.
pub async fn generate_color_guide_with<'a, S: FontService>(
    source: &SourceRect<'a>, data: &UIColorData, fonts: &S,
    options: &GuideOptions) -> Result<Node<'a>> {
    if options.strict_geometry {
        check_geometry(source)?;
    }
    let plan = plan(source.width, source.height, source.corner_radius,
                    &options.style);
    let font = resolve_font(fonts, &options.fonts).await?;
    let content = builder::Content { style: &options.style, font: &font,
                                     image: source.image_paint, data };
    let tree = builder::build(&plan, &content, options.origin(source));
    debug!("color guide with {} swatches",
           tree.count(|k| matches!(k, NodeKind::Swatch)));
    Ok(tree)
}

/// Same as [`generate_color_guide_with`] but blocks the current
/// thread until the font is resolved.
pub fn generate_color_guide_blocking<'a, S: FontService>(
    source: &SourceRect<'a>, data: &UIColorData, fonts: &S,
    options: &GuideOptions) -> Result<Node<'a>> {
    futures::executor::block_on(
        generate_color_guide_with(source, data, fonts, options))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn roboto() -> StaticFonts {
        StaticFonts::new([FontName::new("Roboto", "Bold")])
    }

    #[test]
    fn placement_beside_source() {
        let img = ImagePaint::new("x");
        let source = SourceRect::new(100., 50., &img).at(10., 20.);
        let g = generate_color_guide_blocking(
            &source, &UIColorData::new(RGB::new(0., 0., 0.)), &roboto(),
            &GuideOptions::default()).map(|g| g.bounds);
        assert_eq!(g.ok(), Some(Bounds::new(210., 20., 300.,
                                            82. + 3. * 88. + 16.)));
    }

    #[test]
    fn placement_override() {
        let img = ImagePaint::new("x");
        let source = SourceRect::new(100., 50., &img).at(10., 20.);
        let opts = GuideOptions::default()
            .placement(Placement::At { x: -5., y: 7. });
        let g = generate_color_guide_blocking(
            &source, &UIColorData::new(RGB::new(0., 0., 0.)), &roboto(),
            &opts).map(|g| (g.bounds.x, g.bounds.y));
        assert_eq!(g.ok(), Some((-5., 7.)));
    }

    #[test]
    fn strict_geometry() {
        let img = ImagePaint::new("x");
        let data = UIColorData::new(RGB::new(0., 0., 0.));
        let fonts = roboto();
        for (w, h) in [(0., 10.), (10., -1.), (f64::NAN, 10.)] {
            let source = SourceRect::new(w, h, &img);
            let strict = GuideOptions::default().strict_geometry(true);
            let r = generate_color_guide_blocking(&source, &data, &fonts,
                                                  &strict);
            assert!(matches!(r, Err(Error::InvalidGeometry { .. })));
        }
        // Nothing was resolved for rejected sources.
        assert!(fonts.loaded().is_empty());
        // Permissive by default.
        let source = SourceRect::new(0., 0., &img);
        let r = generate_color_guide_blocking(&source, &data, &fonts,
                                              &GuideOptions::default());
        assert!(r.is_ok());
    }

    #[test]
    fn custom_style_and_fonts() {
        let img = ImagePaint::new("x");
        let source = SourceRect::new(100., 100., &img);
        let style = GuideStyle { swatch_size: 20., ..GuideStyle::default() };
        let inter = FontName::new("Inter", "Bold");
        let opts = GuideOptions::default().style(style)
            .fonts(FontPreferences::new(inter.clone()));
        let g = generate_color_guide_blocking(
            &source, &UIColorData::new(RGB::new(0., 0., 0.)), &roboto(),
            &opts);
        let g = match g { Ok(g) => g, Err(e) => panic!("{e}") };
        assert_eq!(g.bounds.height, 132. + 3. * 64. + 16.);
        let label = &g.children[1].children[0];
        assert!(matches!(&label.kind, NodeKind::Label(t) if t.font == inter));
    }
}
