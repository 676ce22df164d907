//! # Spmm Batch Runner
//!
//! 一个批量驱动外部求解器的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的三层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（HTTP 客户端），只暴露能力
//! - `HttpSolverClient` - 唯一的网络资源 owner，提供 run() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个条目
//! - `SolverAdapter` - 单次调用能力（超时 + 响应解析）
//! - `ResultAggregator` - 结果合并能力（纯追加）
//! - `StatusReporter` - 条目状态标记能力（fire-and-forget）
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/input_resolver` - 决定单次模式还是批量模式
//! - `orchestrator/batch_runner` - 串行驱动整批条目，隔离单条失败
//!
//! ## 核心保证
//!
//! - 任一时刻最多一个在途求解器调用，输出顺序与输入顺序一致
//! - 单条失败只标记该条目，绝不中断整批、不污染已累积的结果
//! - 空输入集是合法状态：零次调用、空的汇总结果

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, SolverError};
pub use infrastructure::{HttpSolverClient, Solver};
pub use models::{AggregateOutcome, ItemStatus, SolverResponse, WorkItem};
pub use orchestrator::{App, BatchRunner, InputResolver};
pub use services::{ResultAggregator, SolverAdapter, StatusReporter};
