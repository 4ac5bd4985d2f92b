// Layout composition: resume data + presentation config -> tree of layout primitives.
// Pure and synchronous; the rendering backend consumes the finished tree.

pub mod blocks;
pub mod components;
pub mod composer;
pub mod context;
pub mod icons;
pub mod mirror;
pub mod node;
pub mod policy;

// Re-export the public API consumed by main and the render backends.
pub use composer::compose_document;
pub use icons::{FsIconResolver, IconResolver};
pub use node::LayoutNode;
