//! Assembly of the node tree from a [`LayoutPlan`].

use log::trace;
use rgb::{RGB, RGBA};
use crate::font::FontName;
use crate::geometry::{Bounds, GuideStyle, LayoutPlan};
use crate::node::*;
use crate::UIColorData;

/// Titles of the swatch rows, in display order.
pub const DOMINANT_COLOR: &str = "DOMINANT COLOR";
pub const RECOMMENDED_TEXT_COLOR: &str = "RECOMMENDED TEXT COLOR";
pub const PALETTE: &str = "PALETTE";

const BLACK: RGB<f64> = RGB { r: 0., g: 0., b: 0. };
const WHITE: RGB<f64> = RGB { r: 1., g: 1., b: 1. };

fn shadow(alpha: f64, offset: (f64, f64), radius: f64) -> Shadow {
    Shadow { color: RGBA { r: BLACK.r, g: BLACK.g, b: BLACK.b, a: alpha },
             offset, radius, visible: true,
             blend_mode: BlendMode::Normal }
}

/// Everything the builder needs besides the plan.
pub(crate) struct Content<'a, 'd> {
    pub style: &'d GuideStyle,
    pub font: &'d FontName,
    pub image: &'a ImagePaint,
    pub data: &'d UIColorData,
}

/// Horizontal strip of swatches, at the top left of its parent.
fn swatch_strip<'a>(colors: &[RGB<f64>], s: &GuideStyle) -> Node<'a> {
    let n = colors.len() as f64;
    let (width, height) = if colors.is_empty() { (0., 0.) }
        else { (n * s.swatch_size + (n - 1.) * s.swatch_gap, s.swatch_size) };
    let mut strip = Node::new(NodeKind::SwatchStrip, "Swatches",
                              Bounds::new(0., 0., width, height));
    strip.layout = Some(AutoLayout { item_spacing: s.swatch_gap,
                                     ..AutoLayout::new(LayoutMode::Horizontal) });
    strip.children = colors.iter().enumerate().map(|(i, &c)| {
        let x = i as f64 * (s.swatch_size + s.swatch_gap);
        let mut swatch = Node::new(NodeKind::Swatch, "Swatch",
                                   Bounds::new(x, 0., s.swatch_size,
                                               s.swatch_size));
        swatch.corner_radius = s.swatch_corner_radius;
        swatch.fills = vec![Paint::solid(c)];
        swatch
    }).collect();
    strip
}

/// A titled row of swatches whose top is at `y` in the panel.
fn swatch_row<'a>(title: &str, colors: &[RGB<f64>], y: f64,
                  s: &GuideStyle, font: &FontName) -> Node<'a> {
    let (px, py) = (s.row_horizontal_padding, s.row_vertical_padding);
    let mut label = Node::new(
        NodeKind::Label(Text { characters: title.to_string(),
                               font: font.clone(),
                               font_size: s.label_font_size }),
        "Label",
        Bounds::new(px, py, s.panel_width - 2. * px, s.label_height));
    label.fills = vec![Paint::solid(BLACK)];

    let mut strip = swatch_strip(colors, s);
    strip.bounds = strip.bounds.translate(
        px, py + s.label_height + s.row_item_spacing);

    // Hug the content; the panel clips rows wider than itself.
    let width = label.bounds.width.max(strip.bounds.width) + 2. * px;
    let height = strip.bounds.y + strip.bounds.height + py;
    let mut row = Node::new(NodeKind::SwatchRow, title,
                            Bounds::new(0., y, width, height));
    row.layout = Some(AutoLayout { item_spacing: s.row_item_spacing,
                                   vertical_padding: py,
                                   horizontal_padding: px,
                                   ..AutoLayout::new(LayoutMode::Vertical) });
    row.children = vec![label, strip];
    trace!("row {title:?}: {} swatches, height {height}", colors.len());
    row
}

fn image_row<'a>(plan: &LayoutPlan, c: &Content<'a, '_>) -> Node<'a> {
    let mut preview = Node::new(NodeKind::ImagePreview, "Source image",
                                plan.image_preview);
    preview.fills = vec![Paint::Image(c.image)];
    preview.corner_radius = plan.image_preview_corner_radius;

    let mut row = Node::new(NodeKind::ImageRow, "Image",
                            Bounds::new(0., 0., plan.panel_width,
                                        plan.image_background_height));
    row.fills = vec![Paint::Solid { color: c.data.dominant_color,
                                    opacity: 0.08 }];
    row.effects = vec![Effect::InnerShadow(shadow(0.08, (0., -1.), 0.))];
    row.children = vec![preview];
    row
}

/// Build the guide panel with its top left corner at `origin`.
pub(crate) fn build<'a>(plan: &LayoutPlan, c: &Content<'a, '_>,
                        origin: (f64, f64)) -> Node<'a> {
    let s = c.style;
    let mut panel = Node::new(NodeKind::Panel, "Palette",
                              Bounds::new(origin.0, origin.1,
                                          plan.panel_width,
                                          plan.panel_height));
    panel.fills = vec![Paint::solid(WHITE)];
    panel.effects = vec![Effect::DropShadow(shadow(0.16, (0., 2.), 12.))];
    panel.corner_radius = s.panel_corner_radius;
    panel.clips_content = true;
    panel.layout = Some(AutoLayout::new(LayoutMode::Vertical));

    panel.children.push(image_row(plan, c));
    let dominant = [c.data.dominant_color];
    let rows: [(&str, &[RGB<f64>]); 3] = [
        (DOMINANT_COLOR, &dominant[..]),
        (RECOMMENDED_TEXT_COLOR, c.data.suggested_text_colors.as_slice()),
        (PALETTE, c.data.palette.as_slice())];
    let mut y = plan.image_background_height;
    for (title, colors) in rows {
        let row = swatch_row(title, colors, y, s, c.font);
        y += row.bounds.height;
        panel.children.push(row);
    }
    panel
}
