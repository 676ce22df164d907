//! 工作条目
//!
//! 封装"提交给求解器的一条输入"这一信息

use std::fmt::Display;

/// 单次模式下使用的固定标签（单次输入没有列表位置可用）
pub const ADHOC_LABEL: &str = "adhoc";

/// 工作条目
///
/// 一条待提交的输入，label 用于状态标记和日志显示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// 条目标签（批量模式下为条目名或 1 开始的序号）
    pub label: String,

    /// 提交给求解器的输入文本
    pub input: String,
}

impl WorkItem {
    /// 创建批量模式下的工作条目
    pub fn new(label: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            input: input.into(),
        }
    }

    /// 创建单次模式下的工作条目
    pub fn adhoc(input: impl Into<String>) -> Self {
        Self {
            label: ADHOC_LABEL.to_string(),
            input: input.into(),
        }
    }
}

impl Display for WorkItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[条目#{} 输入#{}]", self.label, self.input)
    }
}
