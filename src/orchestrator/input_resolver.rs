//! 输入源解析器 - 编排层
//!
//! 决定本次运行的工作单元：
//! - **单次模式**：单次输入非空时，整批就是这一条输入
//! - **批量模式**：否则从批量文件加载有序的条目列表
//! - 两者都没有时返回空批次（合法的 no-op，不是错误）
//!
//! 批量文件配置了却读不到，是前置条件失败，向调用方硬报错，
//! 决不能伪装成"处理了零个条目"。

use crate::config::Config;
use crate::models::{load_batch_file, WorkItem};
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// 输入源解析器
#[derive(Debug, Clone)]
pub struct InputResolver {
    /// 单次输入内容
    single_input: Option<String>,
    /// 批量工作负载文件路径
    batch_file: Option<PathBuf>,
}

impl InputResolver {
    /// 创建输入源解析器
    pub fn new(single_input: Option<String>, batch_file: Option<PathBuf>) -> Self {
        Self {
            single_input,
            batch_file,
        }
    }

    /// 从配置创建输入源解析器
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.single_input.clone(),
            Some(PathBuf::from(&config.batch_file)),
        )
    }

    /// 解析本次运行的工作条目列表
    ///
    /// 单次模式优先：单次输入非空时不会打开批量文件
    pub async fn resolve(&self) -> Result<Vec<WorkItem>> {
        if let Some(input) = self.single_input.as_deref().filter(|v| !v.is_empty()) {
            info!("✓ 单次模式: {}", input);
            return Ok(vec![WorkItem::adhoc(input)]);
        }

        if let Some(path) = &self.batch_file {
            info!("📁 批量模式: 正在加载 {}", path.display());
            return load_batch_file(path).await;
        }

        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::work_item::ADHOC_LABEL;

    #[test]
    fn test_single_mode_takes_precedence_over_batch_file() {
        // 批量文件故意指向不存在的路径：单次模式下根本不会去读它
        let resolver = InputResolver::new(
            Some("wiki-Vote.mtx".to_string()),
            Some(PathBuf::from("no_such_dir/workloads.toml")),
        );

        let items = tokio_test::block_on(resolver.resolve()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, ADHOC_LABEL);
        assert_eq!(items[0].input, "wiki-Vote.mtx");
    }

    #[test]
    fn test_empty_single_input_falls_back_to_batch() {
        // 空字符串不算单次输入，缺失的批量文件此时必须硬报错
        let resolver = InputResolver::new(
            Some(String::new()),
            Some(PathBuf::from("no_such_dir/workloads.toml")),
        );

        let result = tokio_test::block_on(resolver.resolve());
        assert!(result.is_err());
    }

    #[test]
    fn test_no_input_at_all_yields_empty_batch() {
        let resolver = InputResolver::new(None, None);

        let items = tokio_test::block_on(resolver.resolve()).unwrap();
        assert!(items.is_empty());
    }
}
