use std::io::{self, Write};

use crate::model::DomainStats;

/// `<domain> has <percent>% availability` 形式の行を作る。
/// 一度もプローブされていないドメインは出さない。
pub fn render_report(snapshot: &[(String, DomainStats)]) -> Vec<String> {
    snapshot
        .iter()
        .filter_map(|(domain, stats)| {
            stats
                .availability()
                .map(|percent| format!("{} has {}% availability", domain, percent))
        })
        .collect()
}

pub fn write_report<W: Write>(out: &mut W, snapshot: &[(String, DomainStats)]) -> io::Result<()> {
    for line in render_report(snapshot) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

pub fn print_report(snapshot: &[(String, DomainStats)]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_report(&mut lock, snapshot)
}
