use std::sync::Arc;

use ash::vk;
use vkrecord_core::{Buffer, QueryPool};

use crate::compile::Encode;
use crate::error::RecordError;
use crate::session::RecordingSession;

#[derive(Debug, Clone)]
pub struct BeginQuery {
    pub query_pool: Arc<QueryPool>,
    pub query: u32,
    pub flags: vk::QueryControlFlags,
}

impl Encode for BeginQuery {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let pool = self.query_pool.handle();
        session.issue("vkCmdBeginQuery", |device, cb| {
            device.cmd_begin_query(cb, pool, self.query, self.flags)
        })?;
        session.ledger().add(self.query_pool);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct EndQuery {
    pub query_pool: Arc<QueryPool>,
    pub query: u32,
}

impl Encode for EndQuery {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let pool = self.query_pool.handle();
        session.issue("vkCmdEndQuery", |device, cb| {
            device.cmd_end_query(cb, pool, self.query)
        })?;
        session.ledger().add(self.query_pool);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ResetQueryPool {
    pub query_pool: Arc<QueryPool>,
    pub first_query: u32,
    pub query_count: u32,
}

impl Encode for ResetQueryPool {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let pool = self.query_pool.handle();
        session.issue("vkCmdResetQueryPool", |device, cb| {
            device.cmd_reset_query_pool(cb, pool, self.first_query, self.query_count)
        })?;
        session.ledger().add(self.query_pool);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct WriteTimestamp {
    pub pipeline_stage: vk::PipelineStageFlags,
    pub query_pool: Arc<QueryPool>,
    pub query: u32,
}

impl Encode for WriteTimestamp {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let pool = self.query_pool.handle();
        session.issue("vkCmdWriteTimestamp", |device, cb| {
            device.cmd_write_timestamp(cb, self.pipeline_stage, pool, self.query)
        })?;
        session.ledger().add(self.query_pool);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CopyQueryPoolResults {
    pub query_pool: Arc<QueryPool>,
    pub first_query: u32,
    pub query_count: u32,
    pub dst: Arc<Buffer>,
    pub dst_offset: vk::DeviceSize,
    pub stride: vk::DeviceSize,
    pub flags: vk::QueryResultFlags,
}

impl Encode for CopyQueryPoolResults {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let (pool, dst) = (self.query_pool.handle(), self.dst.handle());
        session.issue("vkCmdCopyQueryPoolResults", |device, cb| {
            device.cmd_copy_query_pool_results(
                cb,
                pool,
                self.first_query,
                self.query_count,
                dst,
                self.dst_offset,
                self.stride,
                self.flags,
            )
        })?;
        session.ledger().add(self.query_pool);
        session.ledger().add(self.dst);
        Ok(())
    }
}
