use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};

use crate::checker::{HttpChecker, PROBE_TIMEOUT};
use crate::config::Endpoint;
use crate::model::StatsStore;
use crate::output::print_report;

/// ラウンド終了から次のラウンド開始までの待ち時間
pub const ROUND_INTERVAL: Duration = Duration::from_secs(15);

/// 1 ラウンドの内訳
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundSummary {
    pub healthy: usize,
    pub unhealthy: usize,
    /// メソッド不正で集計しなかった数
    pub skipped: usize,
}

pub struct Monitor {
    checker: Arc<HttpChecker>,
    endpoints: Vec<Endpoint>,
    stats: Arc<StatsStore>,
    interval: Duration,
}

impl Monitor {
    pub fn new(checker: HttpChecker, endpoints: Vec<Endpoint>) -> Self {
        Self {
            checker: Arc::new(checker),
            endpoints,
            stats: Arc::new(StatsStore::new()),
            interval: ROUND_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn stats(&self) -> &Arc<StatsStore> {
        &self.stats
    }

    /// 全エンドポイントを並列にプローブし、全部終わるまで待つ
    pub async fn run_round(&self) -> RoundSummary {
        let mut handles = Vec::with_capacity(self.endpoints.len());

        for endpoint in &self.endpoints {
            let checker = self.checker.clone();
            let stats = self.stats.clone();
            let endpoint = endpoint.clone();

            handles.push(tokio::spawn(async move {
                match checker.probe(&endpoint).await {
                    Ok(outcome) => {
                        let healthy = outcome.status.is_healthy();
                        stats.record(&outcome.domain, healthy);
                        Some(healthy)
                    }
                    Err(err) => {
                        warn!(
                            "skipping {:?} ({}): {}",
                            endpoint.name, endpoint.url, err
                        );
                        None
                    }
                }
            }));
        }

        let mut summary = RoundSummary::default();
        for handle in handles {
            match handle.await {
                Ok(Some(true)) => summary.healthy += 1,
                Ok(Some(false)) => summary.unhealthy += 1,
                Ok(None) => summary.skipped += 1,
                Err(e) => error!("probe task failed: {}", e),
            }
        }

        debug!(
            "round finished: healthy={} unhealthy={} skipped={}",
            summary.healthy, summary.unhealthy, summary.skipped
        );

        summary
    }

    /// プローブ → レポート → 待機 を繰り返す。戻らない。
    pub async fn run(&self) {
        info!(
            "monitoring {} endpoints every {}s (timeout {}ms)",
            self.endpoints.len(),
            self.interval.as_secs(),
            PROBE_TIMEOUT.as_millis()
        );

        loop {
            self.run_round().await;

            if let Err(e) = print_report(&self.stats.snapshot()) {
                error!("failed to write report: {}", e);
            }

            // 固定ディレイ：ラウンドが終わってから数える
            tokio::time::sleep(self.interval).await;
        }
    }
}
