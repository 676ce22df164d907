//! 求解器客户端 - 基础设施层
//!
//! 持有唯一的 HTTP 连接资源，只暴露"调用求解器"的能力

use crate::error::{AppError, AppResult, SolverError};
use serde_json::json;
use tracing::debug;

/// 求解器抽象
///
/// 求解器对外只有一个异步操作：输入一段文本，返回一段文本。
/// 每次调用相互独立，调用之间不共享任何状态。
/// 返回文本的结构化解析不在这里做（那是适配器层的职责）。
#[allow(async_fn_in_trait)]
pub trait Solver {
    async fn run(&self, input: &str) -> AppResult<String>;
}

/// HTTP 求解器客户端
///
/// 职责：
/// - 持有唯一的 reqwest::Client 资源
/// - 暴露 run() 能力
/// - 不认识 WorkItem / AggregateOutcome
/// - 不处理业务流程
pub struct HttpSolverClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSolverClient {
    /// 创建新的求解器客户端
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/run", self.base_url)
    }
}

impl Solver for HttpSolverClient {
    /// 提交一条输入并返回求解器的原始响应文本
    async fn run(&self, input: &str) -> AppResult<String> {
        let endpoint = self.endpoint();
        debug!("调用求解器: {}", endpoint);

        let response = self
            .http
            .post(&endpoint)
            .json(&json!({ "input": input }))
            .send()
            .await
            .map_err(|e| AppError::solver_request_failed(&endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Solver(SolverError::BadStatus {
                endpoint,
                code: status.as_u16(),
            }));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::solver_request_failed(&endpoint, e))?;

        Ok(text)
    }
}
