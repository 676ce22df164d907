//! 结果聚合器 - 业务能力层
//!
//! 只负责"把单次响应并入汇总结果"的能力，不关心流程

use crate::models::{AggregateOutcome, SolverResponse};

/// 结果聚合器
///
/// 职责：
/// - 持有三个累积序列
/// - 合并规则是纯追加：保持条目处理顺序，保留重复项
/// - 不做去重、不做排序、不做跨条目一致性校验
#[derive(Debug, Default)]
pub struct ResultAggregator {
    outcome: AggregateOutcome,
}

impl ResultAggregator {
    /// 创建空的聚合器
    pub fn new() -> Self {
        Self::default()
    }

    /// 把一条成功响应并入汇总结果
    pub fn merge(&mut self, response: SolverResponse) {
        self.outcome.result_list.extend(response.results);
        self.outcome.ok_list.extend(response.ok_list);
        self.outcome.err_list.extend(response.err_list);
    }

    /// 查看当前已累积的汇总结果
    ///
    /// 批次中途的任何暂停点上，这都是一个完整可用的值
    pub fn outcome(&self) -> &AggregateOutcome {
        &self.outcome
    }

    /// 取出最终的汇总结果
    pub fn into_outcome(self) -> AggregateOutcome {
        self.outcome
    }
}
