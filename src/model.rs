use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// 2xx かつ時間内
    Up,
    /// 応答はあったが非 2xx、または遅すぎた
    Down,
    /// 通信エラー・タイムアウト
    Error,
}

impl CheckStatus {
    pub fn is_healthy(self) -> bool {
        matches!(self, CheckStatus::Up)
    }
}

/// 1 回のプローブ結果
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub domain: String,
    pub status: CheckStatus,
    pub status_code: Option<u16>,
    pub latency: Duration,
}

/// ドメインごとの累積カウンタ。success <= total は常に成り立つ。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainStats {
    pub success: u64,
    pub total: u64,
}

impl DomainStats {
    pub fn record(&mut self, healthy: bool) {
        self.total += 1;
        if healthy {
            self.success += 1;
        }
    }

    /// 可用性（%、切り捨て）。まだ一度もプローブしていなければ None。
    pub fn availability(&self) -> Option<u64> {
        (self.total > 0).then(|| self.success * 100 / self.total)
    }
}

/// プロセス全体で共有するドメイン別集計。
///
/// 全ドメインを 1 つのロックで守る。ロック中の処理は加算だけなので
/// ポイズンされても値は壊れていない。
#[derive(Debug, Default)]
pub struct StatsStore {
    stats: Mutex<BTreeMap<String, DomainStats>>,
}

impl StatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, domain: &str, healthy: bool) {
        let mut stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);
        match stats.get_mut(domain) {
            Some(entry) => entry.record(healthy),
            None => {
                let mut entry = DomainStats::default();
                entry.record(healthy);
                stats.insert(domain.to_string(), entry);
            }
        }
    }

    /// ドメイン名順のスナップショット
    pub fn snapshot(&self) -> Vec<(String, DomainStats)> {
        let stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);
        stats
            .iter()
            .map(|(domain, entry)| (domain.clone(), *entry))
            .collect()
    }
}
