use crate::errors::AppError;
use crate::layout::LayoutNode;
use crate::render::RenderBackend;

/// Serializes the page tree as JSON for an external paginating renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBackend {
    pub pretty: bool,
}

impl RenderBackend for JsonBackend {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, page: &LayoutNode) -> Result<Vec<u8>, AppError> {
        if !matches!(page, LayoutNode::Page(_)) {
            return Err(AppError::Render(
                "document root must be a page node".to_string(),
            ));
        }

        let bytes = if self.pretty {
            serde_json::to_vec_pretty(page)
        } else {
            serde_json::to_vec(page)
        };
        bytes.map_err(|e| AppError::Render(format!("failed to serialize page tree: {e}")))
    }
}
