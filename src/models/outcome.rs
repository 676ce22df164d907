//! 求解器响应与汇总结果的数据模型

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt::Display;

/// 求解器单次响应
///
/// 求解器返回的文本必须能解析为这个三字段结构，缺少任意字段
/// 都视为解析失败（在适配器层转成 SolverError，不会流入聚合器）。
/// `results` 中的记录对本层是不透明的，原样透传。
#[derive(Debug, Clone, Deserialize)]
pub struct SolverResponse {
    /// 本次求解产生的结果记录
    pub results: Vec<JsonValue>,
    /// 求解器内部处理成功的标识列表
    pub ok_list: Vec<String>,
    /// 求解器内部处理失败的标识列表
    pub err_list: Vec<String>,
}

/// 整批运行的汇总结果
///
/// 三个序列按条目处理顺序拼接，保留重复项；
/// 去重（若需要）是展示层的事情，不在这里做。
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AggregateOutcome {
    pub result_list: Vec<JsonValue>,
    pub ok_list: Vec<String>,
    pub err_list: Vec<String>,
}

impl AggregateOutcome {
    /// 汇总结果是否为空（空输入集的合法产出）
    pub fn is_empty(&self) -> bool {
        self.result_list.is_empty() && self.ok_list.is_empty() && self.err_list.is_empty()
    }
}

/// 单个条目的处理状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    /// 处理成功
    Success,
    /// 处理失败（调用失败或响应无法解析）
    Failure,
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStatus::Success => write!(f, "success"),
            ItemStatus::Failure => write!(f, "fail"),
        }
    }
}

/// 整批运行统计
#[derive(Debug, Default)]
pub struct RunStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}
