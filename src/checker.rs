use std::time::{Duration, Instant};

use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Request, StatusCode};
use thiserror::Error;

use crate::config::Endpoint;
use crate::domain::extract_domain;
use crate::model::{CheckStatus, ProbeOutcome};

/// 1 リクエストあたりの持ち時間（接続から本文の読み終わりまで）
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// メソッドが不正でリクエストを組み立てられなかった場合のエラー。
/// この場合はプローブ自体を行わず、集計にも含めない。
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid HTTP method {0:?}")]
    InvalidMethod(String),
}

// URL やヘッダの不備は送信失敗と同じ扱い（Error として集計する）
#[derive(Debug, Error)]
enum SendError {
    #[error("invalid header {name:?}")]
    InvalidHeader { name: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// healthy なのは 2xx かつ `PROBE_TIMEOUT` 以内（ちょうどは OK）のときだけ
pub fn classify(status: StatusCode, latency: Duration) -> CheckStatus {
    if status.is_success() && latency <= PROBE_TIMEOUT {
        CheckStatus::Up
    } else {
        CheckStatus::Down
    }
}

#[derive(Debug, Clone)]
pub struct HttpChecker {
    client: Client,
}

impl HttpChecker {
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder().timeout(PROBE_TIMEOUT).build()?;

        Ok(Self { client })
    }

    fn parse_method(endpoint: &Endpoint) -> Result<Method, ProbeError> {
        if endpoint.method.is_empty() {
            return Ok(Method::GET);
        }
        Method::from_bytes(endpoint.method.as_bytes())
            .map_err(|_| ProbeError::InvalidMethod(endpoint.method.clone()))
    }

    fn build_request(&self, endpoint: &Endpoint, method: Method) -> Result<Request, SendError> {
        // 同じ名前（大文字小文字違い含む）は後勝ち
        let mut headers = HeaderMap::with_capacity(endpoint.headers.len());
        for (name, value) in &endpoint.headers {
            let invalid = || SendError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(header_name, header_value);
        }

        let mut builder = self
            .client
            .request(method, endpoint.url.as_str())
            .headers(headers);
        if !endpoint.body.is_empty() {
            builder = builder.body(endpoint.body.clone());
        }

        Ok(builder.build()?)
    }

    // 本文の読み込みまでを計測対象にする
    async fn send(&self, endpoint: &Endpoint, method: Method) -> Result<StatusCode, SendError> {
        let request = self.build_request(endpoint, method)?;
        let resp = self.client.execute(request).await?;
        let status = resp.status();
        resp.bytes().await?;
        Ok(status)
    }

    /// エンドポイントを 1 回叩いて結果を分類する
    pub async fn probe(&self, endpoint: &Endpoint) -> Result<ProbeOutcome, ProbeError> {
        let method = Self::parse_method(endpoint)?;
        let domain = extract_domain(&endpoint.url);

        let start = Instant::now();
        let result = self.send(endpoint, method).await;
        let latency = start.elapsed();

        let (status, status_code) = match result {
            Ok(code) => (classify(code, latency), Some(code.as_u16())),
            Err(err) => {
                debug!("{} request failed: {}", endpoint.url, err);
                let code = match &err {
                    SendError::Http(e) => e.status().map(|s| s.as_u16()),
                    SendError::InvalidHeader { .. } => None,
                };
                (CheckStatus::Error, code)
            }
        };

        debug!(
            "{} domain={} status={:?} code={:?} latency={}ms",
            endpoint.url,
            domain,
            status,
            status_code,
            latency.as_millis()
        );

        Ok(ProbeOutcome {
            domain,
            status,
            status_code,
            latency,
        })
    }
}
