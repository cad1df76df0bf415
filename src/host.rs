//! Hand the node tree to a scene host.
//!
//! The host creates its own elements; this module only walks the
//! tree in creation order.

use crate::error::{BoxError, Error, Result};
use crate::node::Node;

/// A scene able to instantiate [`Node`]s.
pub trait SceneHost {
    /// Host identifier of a created element.
    type Handle;
    type Error: Into<BoxError>;

    /// Create `node` (without its children) inside `parent`, or at
    /// the top level of the document when `parent` is `None`.
    fn create(&mut self, node: &Node<'_>, parent: Option<&Self::Handle>)
              -> std::result::Result<Self::Handle, Self::Error>;
}

fn create_subtree<H>(host: &mut H, node: &Node<'_>,
                     parent: Option<&H::Handle>) -> Result<H::Handle>
where H: SceneHost {
    let handle = host.create(node, parent)
        .map_err(|e| Error::Materialization(e.into()))?;
    for child in &node.children {
        create_subtree(host, child, Some(&handle))?;
    }
    Ok(handle)
}

/// Create all the nodes of `tree`, parents before children and
/// siblings in order.  Returns the handle of the root.
///
/// The first error of the host stops the walk.
pub fn materialize<H: SceneHost>(host: &mut H, tree: &Node<'_>)
                                 -> Result<H::Handle> {
    create_subtree(host, tree, None)
}
