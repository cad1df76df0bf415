//! A scene host writing the guide as absolutely positioned HTML
//! boxes.

use std::{convert::Infallible, fmt::Write};
use color_guide::{host::SceneHost, Effect, Node, NodeKind, Paint,
                  ScaleMode, Shadow, RGB};

struct Element {
    style: String,
    text: Option<String>,
    children: Vec<usize>,
}

#[derive(Default)]
pub struct HtmlHost {
    elements: Vec<Element>,
}

fn css_color(c: RGB<f64>, alpha: f64) -> String {
    format!("rgba({:.0}, {:.0}, {:.0}, {alpha})",
            255. * c.r, 255. * c.g, 255. * c.b)
}

fn css_shadow(s: &Shadow, inset: bool) -> String {
    let c = RGB::new(s.color.r, s.color.g, s.color.b);
    format!("{}{}px {}px {}px {}",
            if inset { "inset " } else { "" },
            s.offset.0, s.offset.1, s.radius, css_color(c, s.color.a))
}

fn css_background(p: &Paint<'_>) -> String {
    match p {
        Paint::Solid { color, opacity } =>
            format!("background-color: {};", css_color(*color, *opacity)),
        Paint::Image(img) => {
            let size = match img.scale_mode() {
                ScaleMode::Fill | ScaleMode::Crop => "cover",
                ScaleMode::Fit => "contain",
                ScaleMode::Tile => "auto",
            };
            format!("background: url(\"{}\") center / {size};",
                    img.image_hash())
        }
    }
}

fn css(node: &Node<'_>) -> String {
    let b = node.bounds;
    let mut s = format!("position: absolute; left: {}px; top: {}px; \
                         width: {}px; height: {}px;",
                        b.x, b.y, b.width, b.height);
    if let NodeKind::Label(t) = &node.kind {
        let weight = if t.font.style.contains("Bold") { "bold" }
                     else { "normal" };
        // Label fills color the text.
        let color = node.fills.iter().find_map(|p| match p {
            Paint::Solid { color, opacity } => Some(css_color(*color, *opacity)),
            Paint::Image(_) => None });
        let _ = write!(s, " font: {weight} {}pt \"{}\";", t.font_size,
                       t.font.family);
        if let Some(c) = color { let _ = write!(s, " color: {c};"); }
    } else {
        for p in &node.fills { s.push(' '); s.push_str(&css_background(p)) }
    }
    if node.corner_radius > 0. {
        let _ = write!(s, " border-radius: {}px;", node.corner_radius);
    }
    if node.clips_content { s.push_str(" overflow: hidden;") }
    let shadows: Vec<_> = node.effects.iter().map(|e| match e {
        Effect::DropShadow(sh) => css_shadow(sh, false),
        Effect::InnerShadow(sh) => css_shadow(sh, true),
    }).collect();
    if !shadows.is_empty() {
        let _ = write!(s, " box-shadow: {};", shadows.join(", "));
    }
    s
}

impl SceneHost for HtmlHost {
    type Handle = usize;
    type Error = Infallible;

    fn create(&mut self, node: &Node<'_>, parent: Option<&usize>)
              -> Result<usize, Infallible> {
        let text = match &node.kind {
            NodeKind::Label(t) => Some(t.characters.clone()),
            _ => None };
        let i = self.elements.len();
        self.elements.push(Element { style: css(node), text,
                                     children: vec![] });
        if let Some(&p) = parent { self.elements[p].children.push(i) }
        Ok(i)
    }
}

impl HtmlHost {
    fn render(&self, fh: &mut String, i: usize, indent: usize) {
        let e = &self.elements[i];
        let pad = " ".repeat(indent);
        let _ = writeln!(fh, "{pad}<div style=\"{}\">{}", e.style,
                         e.text.as_deref().unwrap_or(""));
        for &c in &e.children { self.render(fh, c, indent + 2) }
        let _ = writeln!(fh, "{pad}</div>");
    }

    /// HTML of the element `root` and its descendants.
    pub fn to_html(&self, root: usize) -> String {
        let mut s = String::new();
        self.render(&mut s, root, 2);
        s
    }
}
