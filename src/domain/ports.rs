use crate::domain::model::Flow;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Line-oriented sink for demo transcripts.
pub trait Output: Send + Sync {
    fn emit(&self, line: &str) -> Result<()>;
}

#[async_trait]
pub trait Demo: Send + Sync {
    fn name(&self) -> &str;
    async fn run(&self, output: Arc<dyn Output>) -> Result<Flow>;
}
