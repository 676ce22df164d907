use crate::models::work_item::WorkItem;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 批量工作负载文件的 TOML 结构
///
/// ```toml
/// [[workloads]]
/// name = "wiki-vote"        # 可选，缺省时用 1 开始的序号
/// input = "wiki-Vote.mtx"
/// ```
#[derive(Debug, Deserialize)]
struct BatchFile {
    #[serde(default)]
    workloads: Vec<BatchEntry>,
}

#[derive(Debug, Deserialize)]
struct BatchEntry {
    name: Option<String>,
    input: String,
}

/// 从 TOML 文件加载批量工作负载，保持文件内顺序
///
/// 文件不存在或无法解析是硬错误：调用方配置了批量文件却读不到，
/// 不能悄悄当成"零个条目"返回。
pub async fn load_batch_file(toml_file_path: &Path) -> Result<Vec<WorkItem>> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取批量文件: {}", toml_file_path.display()))?;

    let batch: BatchFile = toml::from_str(&content)
        .with_context(|| format!("无法解析批量文件: {}", toml_file_path.display()))?;

    let items = batch
        .workloads
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let label = entry.name.unwrap_or_else(|| (index + 1).to_string());
            WorkItem::new(label, entry.input)
        })
        .collect::<Vec<_>>();

    tracing::info!(
        "成功加载 {} 个工作负载: {}",
        items.len(),
        toml_file_path.display()
    );

    Ok(items)
}
