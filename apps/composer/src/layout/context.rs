use crate::layout::icons::IconResolver;
use crate::layout::mirror::Reflect;
use crate::layout::node::LayoutNode;
use crate::models::presentation::{PresentationConfig, SectionKey};

/// Read-only inputs shared by every component during one document build.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub config: &'a PresentationConfig,
    pub icons: &'a dyn IconResolver,
}

impl<'a> Context<'a> {
    pub fn new(config: &'a PresentationConfig, icons: &'a dyn IconResolver) -> Self {
        Context { config, icons }
    }

    /// Orients a freshly assembled node for the document's direction.
    pub fn orient<T: Reflect>(&self, node: T) -> T {
        self.config.text_direction.orient(node)
    }

    /// `orient`, then wrap as a tree node.
    pub fn place<T: Reflect + Into<LayoutNode>>(&self, node: T) -> LayoutNode {
        self.orient(node).into()
    }

    pub fn label(&self, key: SectionKey) -> &'a str {
        self.config.section_labels.get(key)
    }
}
