use serde::{Deserialize, Serialize};

/// Identity of an external resource: its type tag plus the raw native handle.
/// Two references to the same object compare equal regardless of how many
/// owners they have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId {
    /// Type tag for debugging and validation
    pub resource_type: ResourceType,
    /// Raw native handle, as returned by `ash::vk::Handle::as_raw`
    pub raw: u64,
}

impl ResourceId {
    pub fn new(resource_type: ResourceType, raw: u64) -> Self {
        Self { resource_type, raw }
    }

    /// Create a null/invalid id.
    pub fn null() -> Self {
        Self {
            resource_type: ResourceType::None,
            raw: 0,
        }
    }

    pub fn is_null(&self) -> bool {
        self.resource_type == ResourceType::None && self.raw == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    None,
    Buffer,
    InputBuffer,
    Image,
    Pipeline,
    PipelineLayout,
    DescriptorSet,
    Event,
    QueryPool,
    RenderPass,
    Framebuffer,
    CommandBuffer,
}
