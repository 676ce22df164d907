//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批次的解析与驱动，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `input_resolver` - 输入源解析器
//! - 决定单次模式还是批量模式
//! - 批量模式下按文件顺序加载条目
//! - 两者都没有时给出空批次
//!
//! ### `batch_runner` - 批量执行器
//! - 按输入顺序串行驱动求解器（任一时刻最多一个在途调用）
//! - 单条失败只标记该条目，绝不中断整批
//! - 成功响应交给聚合器追加合并
//! - 输出全局统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_runner (驱动 Vec<WorkItem>)
//!     ↓
//! services (能力层：adapter / aggregator / reporter)
//!     ↓
//! infrastructure (基础设施：Solver 客户端)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：input_resolver 管输入，batch_runner 管驱动
//! 2. **依赖注入**：求解器和标记器由调用方传入，不碰全局状态
//! 3. **失败隔离**：条目级错误永远停在条目边界
//! 4. **无业务逻辑**：只做调度和统计，不理解求解器内部

pub mod batch_runner;
pub mod input_resolver;

// 重新导出主要类型
pub use batch_runner::{App, BatchRunner};
pub use input_resolver::InputResolver;
