//! 批量执行器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批次的驱动和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动日志、创建求解器客户端
//! 2. **输入解析**：委托 InputResolver 决定单次/批量模式
//! 3. **串行驱动**：严格一次一条地调用求解器适配器
//! 4. **失败隔离**：单条失败只标记该条目，绝不中断整批
//! 5. **结果聚合**：成功响应交给 ResultAggregator 追加合并
//! 6. **全局统计**：汇总整批的成功/失败数量
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单次调用的细节（那是适配器的事）
//! - **依赖注入**：求解器和状态标记器都由调用方传入，不碰全局状态
//! - **严格串行**：任一时刻最多一个在途调用，上一条的结果处理完
//!   之前不会发起下一次调用，输出顺序因此与输入顺序一致

use crate::config::Config;
use crate::infrastructure::{HttpSolverClient, Solver};
use crate::models::{AggregateOutcome, ItemStatus, RunStats, WorkItem};
use crate::orchestrator::InputResolver;
use crate::services::{FileReporter, LogReporter, ResultAggregator, SolverAdapter, StatusReporter};
use crate::utils::{init_log_file, truncate_text};
use anyhow::{Context, Result};
use std::fs;
use std::time::Duration;
use tracing::{error, info, warn};

/// 批量执行器
///
/// 按输入顺序串行驱动求解器，把成功响应并入聚合器，
/// 把每个条目的状态推给标记器。整批调用本身从不失败。
pub struct BatchRunner<S: Solver, R: StatusReporter> {
    adapter: SolverAdapter<S>,
    reporter: R,
    verbose_logging: bool,
}

impl<S: Solver, R: StatusReporter> BatchRunner<S, R> {
    /// 创建新的批量执行器
    pub fn new(adapter: SolverAdapter<S>, reporter: R) -> Self {
        Self {
            adapter,
            reporter,
            verbose_logging: false,
        }
    }

    /// 启用详细日志（打印每条响应的概要）
    pub fn with_verbose_logging(mut self, verbose: bool) -> Self {
        self.verbose_logging = verbose;
        self
    }

    /// 驱动整批条目，返回三个累积序列
    ///
    /// 空输入集是合法的 no-op：直接返回空的汇总结果，
    /// 不会发起任何求解器调用。
    pub async fn run(&self, items: &[WorkItem]) -> AggregateOutcome {
        self.run_with_stats(items).await.0
    }

    /// 驱动整批条目，同时返回成功/失败统计
    pub async fn run_with_stats(&self, items: &[WorkItem]) -> (AggregateOutcome, RunStats) {
        let mut aggregator = ResultAggregator::new();
        let mut stats = RunStats {
            total: items.len(),
            ..Default::default()
        };

        for (index, item) in items.iter().enumerate() {
            log_item_start(index + 1, items.len(), item);

            // 串行等待本条结果，失败只标记该条目，继续下一条
            match self.adapter.invoke(&item.input).await {
                Ok(response) => {
                    if self.verbose_logging {
                        info!(
                            "[条目 {}] 响应概要: {} 条结果, ok {} / err {}",
                            item.label,
                            response.results.len(),
                            response.ok_list.len(),
                            response.err_list.len()
                        );
                    }
                    aggregator.merge(response);
                    self.reporter.report(&item.label, ItemStatus::Success);
                    stats.success += 1;
                }
                Err(e) => {
                    error!("[条目 {}] ❌ 处理失败: {}", item.label, e);
                    self.reporter.report(&item.label, ItemStatus::Failure);
                    stats.failed += 1;
                }
            }
        }

        (aggregator.into_outcome(), stats)
    }
}

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        Ok(Self { config })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<AggregateOutcome> {
        // 解析本次运行的输入集
        let resolver = InputResolver::from_config(&self.config);
        let items = resolver.resolve().await?;

        if items.is_empty() {
            warn!("⚠️ 没有找到待处理的输入，程序结束");
            return Ok(AggregateOutcome::default());
        }

        log_items_loaded(items.len());

        // 组装求解器调用链
        let client = HttpSolverClient::new(&self.config.solver_base_url);
        let adapter = SolverAdapter::new(
            client,
            Duration::from_secs(self.config.solver_timeout_secs),
        );
        let reporter = (LogReporter, FileReporter::new(&self.config.status_file));

        let runner = BatchRunner::new(adapter, reporter)
            .with_verbose_logging(self.config.verbose_logging);

        let (outcome, stats) = runner.run_with_stats(&items).await;

        // 写出汇总结果
        self.save_outcome(&outcome)?;

        // 输出最终统计
        print_final_stats(&stats, &self.config);

        Ok(outcome)
    }

    /// 把汇总结果写入结果文件
    fn save_outcome(&self, outcome: &AggregateOutcome) -> Result<()> {
        let json = serde_json::to_string_pretty(outcome)?;
        fs::write(&self.config.result_file, json)
            .with_context(|| format!("无法写入结果文件: {}", self.config.result_file))?;
        info!("💾 汇总结果已写入: {}", self.config.result_file);
        Ok(())
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量求解模式");
    info!("🔗 求解器地址: {}", config.solver_base_url);
    info!("⏱️ 单次调用超时: {} 秒", config.solver_timeout_secs);
    info!("{}", "=".repeat(60));
}

fn log_items_loaded(total: usize) {
    info!("✓ 找到 {} 个待处理的条目", total);
    info!("📋 将按输入顺序逐条处理\n");
}

fn log_item_start(current: usize, total: usize, item: &WorkItem) {
    info!("\n{}", "─".repeat(60));
    info!(
        "📄 [条目 {}] {}/{}: {}",
        item.label,
        current,
        total,
        truncate_text(&item.input, 80)
    );
}

fn print_final_stats(stats: &RunStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.success, stats.total);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}
