//! 批量执行器的集成测试
//!
//! 用脚本化的求解器桩和记录式标记器验证编排层的核心保证：
//! 顺序保持、失败隔离、空批次 no-op、畸形响应按失败处理。

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use spmm_batch_runner::error::{AppError, AppResult};
use spmm_batch_runner::infrastructure::Solver;
use spmm_batch_runner::models::{ItemStatus, WorkItem};
use spmm_batch_runner::orchestrator::{BatchRunner, InputResolver};
use spmm_batch_runner::services::{SolverAdapter, StatusReporter};

/// 单条输入的脚本行为
#[derive(Clone)]
enum Behavior {
    /// 返回给定文本
    Respond(String),
    /// 调用失败
    Fail,
}

/// 脚本化求解器桩
///
/// 按输入查表决定行为，并记录调用顺序
struct ScriptedSolver {
    script: HashMap<String, Behavior>,
    invocations: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSolver {
    fn new(script: Vec<(&str, Behavior)>) -> (Self, Arc<Mutex<Vec<String>>>) {
        let invocations = Arc::new(Mutex::new(Vec::new()));
        let solver = Self {
            script: script
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            invocations: invocations.clone(),
        };
        (solver, invocations)
    }
}

impl Solver for ScriptedSolver {
    async fn run(&self, input: &str) -> AppResult<String> {
        self.invocations.lock().unwrap().push(input.to_string());
        match self.script.get(input) {
            Some(Behavior::Respond(text)) => Ok(text.clone()),
            Some(Behavior::Fail) | None => {
                Err(AppError::Other(format!("求解失败: {}", input)))
            }
        }
    }
}

/// 记录式标记器
#[derive(Default)]
struct RecordingReporter {
    reports: Arc<Mutex<Vec<(String, ItemStatus)>>>,
}

impl RecordingReporter {
    fn new() -> (Self, Arc<Mutex<Vec<(String, ItemStatus)>>>) {
        let reports = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                reports: reports.clone(),
            },
            reports,
        )
    }
}

impl StatusReporter for RecordingReporter {
    fn report(&self, label: &str, status: ItemStatus) {
        self.reports.lock().unwrap().push((label.to_string(), status));
    }
}

fn payload(results: Vec<&str>, ok_list: Vec<&str>, err_list: Vec<&str>) -> String {
    json!({
        "results": results,
        "ok_list": ok_list,
        "err_list": err_list,
    })
    .to_string()
}

fn runner_with(
    script: Vec<(&str, Behavior)>,
) -> (
    BatchRunner<ScriptedSolver, RecordingReporter>,
    Arc<Mutex<Vec<String>>>,
    Arc<Mutex<Vec<(String, ItemStatus)>>>,
) {
    let (solver, invocations) = ScriptedSolver::new(script);
    let adapter = SolverAdapter::new(solver, Duration::from_secs(5));
    let (reporter, reports) = RecordingReporter::new();
    (BatchRunner::new(adapter, reporter), invocations, reports)
}

fn items(inputs: &[&str]) -> Vec<WorkItem> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| WorkItem::new((i + 1).to_string(), *input))
        .collect()
}

#[tokio::test]
async fn test_order_preservation() {
    let (runner, invocations, _) = runner_with(vec![
        ("x", Behavior::Respond(payload(vec!["rx"], vec!["x"], vec![]))),
        ("y", Behavior::Respond(payload(vec!["ry"], vec!["y"], vec!["y2"]))),
        ("z", Behavior::Respond(payload(vec!["rz"], vec!["z"], vec![]))),
    ]);

    let outcome = runner.run(&items(&["x", "y", "z"])).await;

    // 调用顺序与输入顺序一致
    assert_eq!(*invocations.lock().unwrap(), vec!["x", "y", "z"]);

    // 三个序列都按条目处理顺序拼接
    assert_eq!(
        outcome.result_list,
        vec![json!("rx"), json!("ry"), json!("rz")]
    );
    assert_eq!(outcome.ok_list, vec!["x", "y", "z"]);
    assert_eq!(outcome.err_list, vec!["y2"]);
}

#[tokio::test]
async fn test_failure_isolation() {
    // 中间这条失败，后面的条目照常执行并贡献结果
    let (runner, invocations, reports) = runner_with(vec![
        ("a", Behavior::Respond(payload(vec!["ra"], vec!["a"], vec![]))),
        ("b", Behavior::Fail),
        ("c", Behavior::Respond(payload(vec!["rc"], vec!["c"], vec![]))),
    ]);

    let (outcome, stats) = runner.run_with_stats(&items(&["a", "b", "c"])).await;

    assert_eq!(*invocations.lock().unwrap(), vec!["a", "b", "c"]);
    assert_eq!(outcome.result_list, vec![json!("ra"), json!("rc")]);
    assert_eq!(outcome.ok_list, vec!["a", "c"]);
    assert!(outcome.err_list.is_empty());

    assert_eq!(stats.success, 2);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.total, 3);

    let reports = reports.lock().unwrap();
    assert_eq!(reports[1], ("2".to_string(), ItemStatus::Failure));
}

#[tokio::test]
async fn test_empty_input_is_noop() {
    let (runner, invocations, reports) = runner_with(vec![]);

    let outcome = runner.run(&[]).await;

    assert!(outcome.is_empty());
    assert!(invocations.lock().unwrap().is_empty());
    assert!(reports.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_payload_treated_as_failure() {
    // 能 JSON 解析但缺字段，和完全不是 JSON，都等同于调用失败
    let (runner, _, reports) = runner_with(vec![
        ("a", Behavior::Respond("这不是 JSON".to_string())),
        ("b", Behavior::Respond(r#"{"results":[]}"#.to_string())),
        ("c", Behavior::Respond(payload(vec!["rc"], vec!["c"], vec![]))),
    ]);

    let outcome = runner.run(&items(&["a", "b", "c"])).await;

    // 畸形响应不得污染累积结果
    assert_eq!(outcome.result_list, vec![json!("rc")]);
    assert_eq!(outcome.ok_list, vec!["c"]);

    let reports = reports.lock().unwrap();
    assert_eq!(reports[0].1, ItemStatus::Failure);
    assert_eq!(reports[1].1, ItemStatus::Failure);
    assert_eq!(reports[2].1, ItemStatus::Success);
}

#[tokio::test]
async fn test_round_trip_scenario() {
    // a 成功返回 {results:["r1"], ok_list:["a"], err_list:[]}，b 调用失败
    let (runner, _, reports) = runner_with(vec![
        ("a", Behavior::Respond(payload(vec!["r1"], vec!["a"], vec![]))),
        ("b", Behavior::Fail),
    ]);

    let work_items = vec![WorkItem::new("a", "a"), WorkItem::new("b", "b")];
    let outcome = runner.run(&work_items).await;

    assert_eq!(outcome.result_list, vec![json!("r1")]);
    assert_eq!(outcome.ok_list, vec!["a"]);
    assert!(outcome.err_list.is_empty());

    let reports = reports.lock().unwrap();
    assert_eq!(
        *reports,
        vec![
            ("a".to_string(), ItemStatus::Success),
            ("b".to_string(), ItemStatus::Failure),
        ]
    );
}

#[tokio::test]
async fn test_single_mode_end_to_end() {
    // 单次输入非空时整批就是这一条，批量文件即使指向不存在的路径也不会被读
    let resolver = InputResolver::new(
        Some("wiki-Vote.mtx".to_string()),
        Some(std::path::PathBuf::from("no_such_dir/workloads.toml")),
    );
    let work_items = resolver.resolve().await.unwrap();
    assert_eq!(work_items.len(), 1);

    let (runner, invocations, _) = runner_with(vec![(
        "wiki-Vote.mtx",
        Behavior::Respond(payload(vec!["r1"], vec!["wiki-Vote.mtx"], vec![])),
    )]);

    let outcome = runner.run(&work_items).await;

    assert_eq!(*invocations.lock().unwrap(), vec!["wiki-Vote.mtx"]);
    assert_eq!(outcome.ok_list, vec!["wiki-Vote.mtx"]);
}
