use reqwest::Url;

/// URL から集計キーとなるホスト名を取り出す（ポートは含めない）。
///
/// ホスト名は小文字化・punycode 化された形になる。
/// パースできない、またはホストを持たない URL は元の文字列をそのままキーにする。
pub fn extract_domain(raw_url: &str) -> String {
    let Ok(url) = Url::parse(raw_url) else {
        return raw_url.to_string();
    };

    match url.host_str() {
        // IPv6 は [::1] の角括弧を外す
        Some(host) => host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host)
            .to_string(),
        None => raw_url.to_string(),
    }
}
