//! Render passes and secondary command buffers.

use std::sync::Arc;

use ash::vk;
use vkrecord_core::{CommandBuffer, CoreError, Framebuffer, RenderPass};

use super::ClearValue;
use crate::compile::{sealed, CommandList, Encode};
use crate::error::RecordError;
use crate::session::RecordingSession;

/// A render pass instance wrapping an ordered list of inner commands.
///
/// The inner commands are recorded strictly between the begin and end render
/// pass calls. The render pass and framebuffer join the ledger only once the
/// whole block has been recorded.
#[derive(Debug, Clone)]
pub struct RenderPassBlock<L> {
    pub render_pass: Arc<RenderPass>,
    pub framebuffer: Arc<Framebuffer>,
    pub render_area: vk::Rect2D,
    pub clear_values: Vec<ClearValue>,
    pub contents: vk::SubpassContents,
    pub commands: L,
}

pub fn render_pass<L: CommandList>(
    render_pass: Arc<RenderPass>,
    framebuffer: Arc<Framebuffer>,
    render_area: vk::Rect2D,
    clear_values: Vec<ClearValue>,
    contents: vk::SubpassContents,
    commands: L,
) -> RenderPassBlock<L> {
    RenderPassBlock {
        render_pass,
        framebuffer,
        render_area,
        clear_values,
        contents,
        commands,
    }
}

impl<L: CommandList> sealed::Sealed for RenderPassBlock<L> {}

impl<L: CommandList> CommandList for RenderPassBlock<L> {
    fn compile_into(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        self.encode(session)
    }
}

impl<L: CommandList> Encode for RenderPassBlock<L> {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let clear_values: Vec<vk::ClearValue> =
            self.clear_values.iter().map(|v| v.to_vk()).collect();
        let begin_info = vk::RenderPassBeginInfo::default()
            .render_pass(self.render_pass.handle())
            .framebuffer(self.framebuffer.handle())
            .render_area(self.render_area)
            .clear_values(&clear_values);

        session.issue("vkCmdBeginRenderPass", |device, cb| {
            device.cmd_begin_render_pass(cb, &begin_info, self.contents)
        })?;
        self.commands.compile_into(session)?;
        session.issue("vkCmdEndRenderPass", |device, cb| device.cmd_end_render_pass(cb))?;

        session.ledger().add(self.render_pass);
        session.ledger().add(self.framebuffer);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NextSubpass {
    pub contents: vk::SubpassContents,
}

impl Encode for NextSubpass {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        session.issue("vkCmdNextSubpass", |device, cb| {
            device.cmd_next_subpass(cb, self.contents)
        })
    }
}

/// Execute secondary command buffers from a primary one.
///
/// Each secondary buffer stays alive, together with everything its own
/// recording references, for as long as the primary holds it. Secondaries
/// are never submitted on their own, so the primary's pre-execute hooks run
/// theirs.
#[derive(Debug, Clone)]
pub struct ExecuteCommands {
    pub command_buffers: Vec<Arc<CommandBuffer>>,
}

impl Encode for ExecuteCommands {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let secondaries: Vec<vk::CommandBuffer> =
            self.command_buffers.iter().map(|cb| cb.handle()).collect();
        session.issue("vkCmdExecuteCommands", |device, cb| {
            device.cmd_execute_commands(cb, &secondaries)
        })?;

        for secondary in self.command_buffers {
            if session.ledger().add(secondary.clone()) {
                session.hooks().add(move |queue| {
                    secondary.run_pre_execute_hooks(queue).map_err(|e| {
                        CoreError::Hook(format!("secondary {:?}: {}", secondary.handle(), e))
                    })
                });
            }
        }
        Ok(())
    }
}
