use anyhow::Result;
use spmm_batch_runner::config::Config;
use spmm_batch_runner::orchestrator::App;
use spmm_batch_runner::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    let _outcome = App::initialize(config)?.run().await?;

    Ok(())
}
