/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 单次输入内容（非空时优先于批量文件）
    pub single_input: Option<String>,
    /// 批量工作负载文件路径
    pub batch_file: String,
    /// 求解器服务地址
    pub solver_base_url: String,
    /// 单次求解器调用超时（秒）
    pub solver_timeout_secs: u64,
    /// 汇总结果输出文件
    pub result_file: String,
    /// 条目状态标记文件
    pub status_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            single_input: None,
            batch_file: "workloads.toml".to_string(),
            solver_base_url: "http://127.0.0.1:8080".to_string(),
            solver_timeout_secs: 300,
            result_file: "result.json".to_string(),
            status_file: "status.txt".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            single_input: std::env::var("SINGLE_INPUT").ok().filter(|v| !v.is_empty()),
            batch_file: std::env::var("BATCH_FILE").unwrap_or(default.batch_file),
            solver_base_url: std::env::var("SOLVER_BASE_URL").unwrap_or(default.solver_base_url),
            solver_timeout_secs: std::env::var("SOLVER_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.solver_timeout_secs),
            result_file: std::env::var("RESULT_FILE").unwrap_or(default.result_file),
            status_file: std::env::var("STATUS_FILE").unwrap_or(default.status_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
