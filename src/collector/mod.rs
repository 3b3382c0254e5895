//! Remote log collector client
//!
//! 将结构化日志事件 POST 到远端收集器。调用方视角完全是
//! fire-and-forget：校验失败、网络失败、非 2xx 都只写入本地
//! tracing sink，从不向上传播。
//!
//! HTTP 使用同步的 ureq Agent，在 `spawn_blocking` 中执行，
//! 外层用一个分离的 tokio 任务收掉结果。

mod payload;

pub use payload::{DEFAULT_PACKAGE, LogLevel, LogPackage, LogPayload, STACK_TAG};

use std::sync::OnceLock;
use std::time::Duration;

use serde_json::{Map, Value};
use tracing::{debug, warn};
use ureq::Agent;

use crate::errors::Result;

/// 全局收集器客户端（ureq 的 Agent 是 Send + Sync，clone 开销很小）
static COLLECTOR: OnceLock<LogClient> = OnceLock::new();

/// 获取全局客户端，首次访问时按配置构建
pub fn global() -> &'static LogClient {
    COLLECTOR.get_or_init(|| {
        let config = crate::config::get_config();
        LogClient::new(
            &config.collector.url,
            Duration::from_secs(config.collector.timeout_secs),
        )
    })
}

/// 远端日志收集器客户端
#[derive(Debug, Clone)]
pub struct LogClient {
    agent: Agent,
    endpoint: String,
}

impl LogClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        LogClient {
            agent,
            endpoint: endpoint.into(),
        }
    }

    /// 提交一条日志事件，package 使用默认的 "component"
    pub fn submit(&self, level: &str, message: &str) {
        self.submit_with(level, message, DEFAULT_PACKAGE, Map::new());
    }

    /// 提交一条日志事件
    ///
    /// 未知 level/package 在任何网络调用之前被拒绝并记录到本地；
    /// 合法输入则在分离任务中发送，调用方不等待也观察不到结果。
    pub fn submit_with(&self, level: &str, message: &str, package: &str, extra: Map<String, Value>) {
        let payload = match LogPayload::build(level, message, package, extra) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Log event rejected before send: {}", e.format_simple());
                return;
            }
        };

        let client = self.clone();
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("Log event dropped: no async runtime available");
            return;
        };

        // 不保留 JoinHandle：任务结果只体现在本地日志里
        drop(handle.spawn(async move {
            match tokio::task::spawn_blocking(move || client.post_blocking(&payload)).await {
                Ok(Ok(body)) => debug!("Collector accepted log event: {}", body),
                Ok(Err(e)) => warn!("Collector submit failed: {}", e.format_simple()),
                Err(e) => warn!("Collector task failed: {}", e),
            }
        }));
    }

    /// 同步 POST（在 spawn_blocking 中调用），返回响应体
    ///
    /// `send_json` 负责设置 `Content-Type: application/json`；
    /// 非 2xx 状态在 ureq 默认配置下直接作为 Err 返回。
    pub fn post_blocking(&self, payload: &LogPayload) -> Result<String> {
        let resp = self.agent.post(&self.endpoint).send_json(payload)?;
        let body = resp.into_body().read_to_string()?;
        Ok(body)
    }
}
