use anyhow::Result;
use async_trait::async_trait;
use hubcast::HubConfig;

#[async_trait]
pub trait CommandRunner {
    async fn run(self, config: &HubConfig) -> Result<()>;
}
