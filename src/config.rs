use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 監視対象のエンドポイント
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Endpoint {
    /// 表示用のラベル（集計には使わない）
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    /// 空なら GET として送る
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

// TOML はトップレベルに配列を置けないので [[endpoints]] で受ける
#[derive(Debug, Deserialize)]
struct TomlEndpoints {
    #[serde(default)]
    endpoints: Vec<Endpoint>,
}

/// 設定ファイルを読み込んでエンドポイント一覧を返す。
///
/// 拡張子でフォーマットを決める（`.json`, `.toml`、それ以外は YAML）。
/// URL の妥当性はここでは見ない。
pub fn load_endpoints(path: impl AsRef<Path>) -> Result<Vec<Endpoint>, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_endpoints(path, &content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_endpoints(path: &Path, content: &str) -> Result<Vec<Endpoint>, ParseError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("json") => Ok(serde_json::from_str(content)?),
        Some("toml") => Ok(toml::from_str::<TomlEndpoints>(content)?.endpoints),
        _ => {
            if content.trim().is_empty() {
                return Ok(Vec::new());
            }
            let endpoints: Option<Vec<Endpoint>> = serde_yaml::from_str(content)?;
            Ok(endpoints.unwrap_or_default())
        }
    }
}
