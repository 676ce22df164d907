//! 状态标记服务 - 业务能力层
//!
//! 只负责"给单个条目打成功/失败标记"的能力，不关心流程。
//!
//! 对编排层而言标记是 fire-and-forget 的：这一层的任何失败都只
//! 记日志，绝不会传回编排循环。

use crate::models::ItemStatus;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::{info, warn};

/// 状态标记抽象
///
/// 接收 (条目标签, 状态) 并让它对外可见
pub trait StatusReporter {
    fn report(&self, label: &str, status: ItemStatus);
}

/// 日志标记器
///
/// 把每个条目的状态打到 tracing 日志里
#[derive(Debug, Default)]
pub struct LogReporter;

impl StatusReporter for LogReporter {
    fn report(&self, label: &str, status: ItemStatus) {
        match status {
            ItemStatus::Success => info!("[条目 {}] ✅ 标记为成功", label),
            ItemStatus::Failure => warn!("[条目 {}] ❌ 标记为失败", label),
        }
    }
}

/// 文件标记器
///
/// 职责：
/// - 把每个条目的状态追加写入标记文件
/// - 只处理单个条目的标记
/// - 写入失败只记 warn，不向上传播
pub struct FileReporter {
    status_file_path: String,
}

impl FileReporter {
    /// 创建新的文件标记器
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            status_file_path: path.into(),
        }
    }

    fn append(&self, label: &str, status: ItemStatus) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.status_file_path)?;
        writeln!(file, "{}\t{}", label, status)?;
        Ok(())
    }
}

impl StatusReporter for FileReporter {
    fn report(&self, label: &str, status: ItemStatus) {
        if let Err(e) = self.append(label, status) {
            warn!(
                "写入状态文件失败 ({}): {}",
                self.status_file_path, e
            );
        }
    }
}

/// 空标记器（嵌入使用或测试时不需要标记）
#[derive(Debug, Default)]
pub struct NoopReporter;

impl StatusReporter for NoopReporter {
    fn report(&self, _label: &str, _status: ItemStatus) {}
}

/// 组合两个标记器（如日志 + 状态文件）
impl<A: StatusReporter, B: StatusReporter> StatusReporter for (A, B) {
    fn report(&self, label: &str, status: ItemStatus) {
        self.0.report(label, status);
        self.1.report(label, status);
    }
}
