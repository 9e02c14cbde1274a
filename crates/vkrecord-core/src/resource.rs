//! Shared-ownership wrappers around the external objects that recorded commands
//! reference. Construction and memory binding happen elsewhere; these types only
//! carry the native handle and, optionally, the code that destroys it once the
//! last owner lets go.

use std::fmt;
use std::sync::Arc;

use ash::vk;
use ash::vk::Handle;

use crate::error::CoreError;
use crate::handle::{ResourceId, ResourceType};

/// An external object that can be kept alive by a reference ledger.
pub trait Resource: Send + Sync {
    fn id(&self) -> ResourceId;
}

type Destructor<H> = Box<dyn FnOnce(H) + Send + Sync>;

macro_rules! resource {
    ($(#[$meta:meta])* $name:ident, $raw:ty, $resource_type:ident) => {
        $(#[$meta])*
        pub struct $name {
            handle: $raw,
            destructor: Option<Destructor<$raw>>,
        }

        impl $name {
            /// Wrap a handle whose lifetime is managed by someone else.
            pub fn new(handle: $raw) -> Arc<Self> {
                Arc::new(Self {
                    handle,
                    destructor: None,
                })
            }

            /// Wrap a handle and run `destroy` when the last reference is dropped.
            pub fn with_destructor<F>(handle: $raw, destroy: F) -> Arc<Self>
            where
                F: FnOnce($raw) + Send + Sync + 'static,
            {
                Arc::new(Self {
                    handle,
                    destructor: Some(Box::new(destroy)),
                })
            }

            pub fn handle(&self) -> $raw {
                self.handle
            }
        }

        impl Resource for $name {
            fn id(&self) -> ResourceId {
                ResourceId::new(ResourceType::$resource_type, self.handle.as_raw())
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                if let Some(destroy) = self.destructor.take() {
                    destroy(self.handle);
                }
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.handle).finish()
            }
        }
    };
}

resource!(
    /// A device buffer resident in GPU-visible memory.
    Buffer, vk::Buffer, Buffer
);
resource!(Image, vk::Image, Image);
resource!(Pipeline, vk::Pipeline, Pipeline);
resource!(PipelineLayout, vk::PipelineLayout, PipelineLayout);
resource!(DescriptorSet, vk::DescriptorSet, DescriptorSet);
resource!(Event, vk::Event, Event);
resource!(QueryPool, vk::QueryPool, QueryPool);
resource!(RenderPass, vk::RenderPass, RenderPass);
resource!(Framebuffer, vk::Framebuffer, Framebuffer);

/// The destination queue handed to pre-execute hooks at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Queue {
    handle: vk::Queue,
    family_index: u32,
}

impl Queue {
    pub fn new(handle: vk::Queue, family_index: u32) -> Self {
        Self {
            handle,
            family_index,
        }
    }

    pub fn handle(&self) -> vk::Queue {
        self.handle
    }

    pub fn family_index(&self) -> u32 {
        self.family_index
    }
}

/// Moves host-side data into a staging buffer's backing device buffer.
pub trait StagingUpload: Send + Sync {
    fn upload(&self, queue: &Queue, buffer: &Buffer) -> Result<(), CoreError>;
}

impl<F> StagingUpload for F
where
    F: Fn(&Queue, &Buffer) -> Result<(), CoreError> + Send + Sync,
{
    fn upload(&self, queue: &Queue, buffer: &Buffer) -> Result<(), CoreError> {
        self(queue, buffer)
    }
}

/// A buffer filled from host memory. Commands that read from it resolve to the
/// backing [`Buffer`]; the host data is flushed right before the command buffer
/// is submitted.
pub struct InputBuffer {
    buffer: Arc<Buffer>,
    upload: Box<dyn StagingUpload>,
}

impl InputBuffer {
    pub fn new<U>(buffer: Arc<Buffer>, upload: U) -> Arc<Self>
    where
        U: StagingUpload + 'static,
    {
        Arc::new(Self {
            buffer,
            upload: Box::new(upload),
        })
    }

    /// The device buffer native calls operate on.
    pub fn buffer(&self) -> &Arc<Buffer> {
        &self.buffer
    }

    pub fn handle(&self) -> vk::Buffer {
        self.buffer.handle()
    }

    /// Upload pending host data for use on `queue`.
    pub fn flush(&self, queue: &Queue) -> Result<(), CoreError> {
        self.upload.upload(queue, &self.buffer)
    }
}

impl Resource for InputBuffer {
    fn id(&self) -> ResourceId {
        ResourceId::new(ResourceType::InputBuffer, self.buffer.handle().as_raw())
    }
}

impl fmt::Debug for InputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputBuffer")
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}
