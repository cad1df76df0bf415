//! The tree of visual nodes describing a color guide.
//!
//! The tree is plain data: it is handed to a host (see
//! [`crate::host`]) which creates the actual on-screen elements.

use rgb::{RGB, RGBA};
use crate::font::FontName;
use crate::geometry::Bounds;

/// How an image paint fits its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMode {
    #[default]
    Fill,
    Fit,
    Crop,
    Tile,
}

/// Opaque reference to an image fill owned by the host.
///
/// It is never interpreted, only attached to the image preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePaint {
    image_hash: String,
    scale_mode: ScaleMode,
}

impl ImagePaint {
    pub fn new(image_hash: impl Into<String>) -> Self {
        ImagePaint { image_hash: image_hash.into(),
                     scale_mode: ScaleMode::default() }
    }

    pub fn with_scale_mode(mut self, scale_mode: ScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }

    /// Host identifier of the image.
    pub fn image_hash(&self) -> &str { &self.image_hash }

    pub fn scale_mode(&self) -> ScaleMode { self.scale_mode }
}

/// A fill of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint<'a> {
    /// Flat color with an opacity in \[0, 1\].
    Solid { color: RGB<f64>, opacity: f64 },
    Image(&'a ImagePaint),
}

impl<'a> Paint<'a> {
    /// Fully opaque flat color.
    #[inline]
    pub fn solid(color: RGB<f64>) -> Self {
        Paint::Solid { color, opacity: 1. }
    }
}

/// Return the first image paint of `fills`, if any.
pub fn first_image_paint<'a>(fills: &[Paint<'a>]) -> Option<&'a ImagePaint> {
    fills.iter().find_map(|p| match p {
        Paint::Image(img) => Some(*img),
        Paint::Solid { .. } => None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Normal,
}

/// Shadow parameters shared by both kinds of [`Effect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: RGBA<f64>,
    pub offset: (f64, f64),
    /// Blur radius.
    pub radius: f64,
    pub visible: bool,
    pub blend_mode: BlendMode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    DropShadow(Shadow),
    InnerShadow(Shadow),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Vertical,
    Horizontal,
}

/// Sizing of an auto-layout container along its counter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSizing {
    /// Hug the content.
    Auto,
    Fixed,
}

/// Stacking of the children of a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoLayout {
    pub mode: LayoutMode,
    pub counter_axis_sizing: AxisSizing,
    pub item_spacing: f64,
    pub vertical_padding: f64,
    pub horizontal_padding: f64,
}

impl AutoLayout {
    /// Stack without spacing nor padding, hugging the counter axis.
    pub fn new(mode: LayoutMode) -> Self {
        AutoLayout { mode, counter_axis_sizing: AxisSizing::Auto,
                     item_spacing: 0., vertical_padding: 0.,
                     horizontal_padding: 0. }
    }
}

/// Text content of a label.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub characters: String,
    pub font: FontName,
    pub font_size: f64,
}

/// Role of a node in the guide.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Panel,
    /// The background frame of the image preview, tinted with the
    /// dominant color.  It is also the image background: there is no
    /// separate `ImageBackground` node.
    ImageRow,
    ImagePreview,
    SwatchRow,
    Label(Text),
    SwatchStrip,
    Swatch,
}

/// A node of the guide, owning its children.
///
/// `bounds` are relative to the parent (to the page for the root).
#[derive(Debug, Clone, PartialEq)]
pub struct Node<'a> {
    pub name: String,
    pub kind: NodeKind,
    pub bounds: Bounds,
    pub fills: Vec<Paint<'a>>,
    pub effects: Vec<Effect>,
    pub corner_radius: f64,
    pub clips_content: bool,
    pub layout: Option<AutoLayout>,
    pub children: Vec<Node<'a>>,
}

impl<'a> Node<'a> {
    pub fn new(kind: NodeKind, name: impl Into<String>, bounds: Bounds) -> Self {
        Node { name: name.into(), kind, bounds, fills: vec![],
               effects: vec![], corner_radius: 0., clips_content: false,
               layout: None, children: vec![] }
    }

    /// Iterate over the node and all its descendants, depth first,
    /// parents before children.
    pub fn descendants(&self) -> Descendants<'_, 'a> {
        Descendants { stack: vec![self] }
    }

    /// Count the nodes of the subtree matching `pred`.
    pub fn count(&self, pred: impl Fn(&NodeKind) -> bool) -> usize {
        self.descendants().filter(|n| pred(&n.kind)).count()
    }

    /// Bounds of the node at `path` (indices of children from
    /// `self`), in the coordinates of `self`'s parent.
    pub fn absolute_bounds(&self, path: &[usize]) -> Option<Bounds> {
        let mut node = self;
        let mut b = self.bounds;
        for &i in path {
            node = node.children.get(i)?;
            b = node.bounds.translate(b.x, b.y);
        }
        Some(b)
    }
}

/// Iterator created by [`Node::descendants`].
pub struct Descendants<'n, 'a> {
    stack: Vec<&'n Node<'a>>,
}

impl<'n, 'a> Iterator for Descendants<'n, 'a> {
    type Item = &'n Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
