//! 求解器适配器 - 业务能力层
//!
//! 只负责"调用一次求解器并解析响应"的能力，不关心批次流程。
//!
//! 响应解析是适配器契约的一部分：畸形的响应文本在这里就转成
//! SolverError，绝不会把残缺的结构漏给聚合器。

use crate::error::{AppError, AppResult, SolverError};
use crate::infrastructure::Solver;
use crate::models::SolverResponse;
use crate::utils::truncate_text;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// 响应预览在错误信息里的最大长度
const PREVIEW_LEN: usize = 120;

/// 求解器适配器
///
/// 职责：
/// - 为每次调用套上超时（上游求解器没有超时保护）
/// - 把响应文本解析为 SolverResponse
/// - 只处理单个条目，不出现 Vec<WorkItem>
pub struct SolverAdapter<S: Solver> {
    solver: S,
    call_timeout: Duration,
}

impl<S: Solver> SolverAdapter<S> {
    /// 创建新的求解器适配器
    pub fn new(solver: S, call_timeout: Duration) -> Self {
        Self {
            solver,
            call_timeout,
        }
    }

    /// 提交一条输入，返回解析后的结构化响应
    ///
    /// # 参数
    /// - `input`: 提交给求解器的输入文本
    ///
    /// # 返回
    /// 成功时返回解析后的 SolverResponse；调用失败、超时、
    /// 响应无法解析时均返回 SolverError
    pub async fn invoke(&self, input: &str) -> AppResult<SolverResponse> {
        let raw = match timeout(self.call_timeout, self.solver.run(input)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(AppError::Solver(SolverError::Timeout {
                    secs: self.call_timeout.as_secs(),
                }));
            }
        };

        debug!("求解器原始响应长度: {}", raw.len());

        let response: SolverResponse = serde_json::from_str(&raw)
            .map_err(|e| AppError::solver_decode_failed(truncate_text(&raw, PREVIEW_LEN), e))?;

        Ok(response)
    }
}
