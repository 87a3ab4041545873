use crate::error::{RankError, RankResult};
use crate::plural::is_likely_plural;
use crate::scoring::WordScore;
use serde::Serialize;
use std::cmp::Ordering;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Highest score first; equal scores fall back to ascending byte order.
pub fn compare_ranked(a: &WordScore, b: &WordScore) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.word.as_bytes().cmp(b.word.as_bytes()))
}

/// Sorts scores into final ranked order. The sort is stable.
pub fn rank(scores: &mut [WordScore]) {
    scores.sort_by(compare_ranked);
}

/// Writes one word per line in the given order, replacing `path` atomically.
pub fn write_ranked(path: &Path, scores: &[WordScore]) -> RankResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(|e| RankError::output(path, e))?;

    // existing targets keep their mode
    let permissions = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    };
    if let Some(permissions) = permissions {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| RankError::output(path, e))?;
    }

    let mut out = BufWriter::new(tmp);
    for ws in scores {
        writeln!(out, "{}", ws.word).map_err(|e| RankError::output(path, e))?;
    }
    let tmp = out
        .into_inner()
        .map_err(|e| RankError::output(path, e.into_error()))?;
    tmp.persist(path).map_err(|e| RankError::output(path, e))?;

    debug!(words = scores.len(), path = %path.display(), "wrote ranked list");
    Ok(())
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

#[derive(Serialize)]
struct ReportRow<'a> {
    rank: usize,
    word: &'a str,
    score: String,
    plural: bool,
}

/// Writes a `rank,word,score,plural` CSV for the ranked scores.
pub fn write_score_report(path: &Path, scores: &[WordScore]) -> RankResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| RankError::output(path, e))?;
    for (i, ws) in scores.iter().enumerate() {
        writer
            .serialize(ReportRow {
                rank: i + 1,
                word: &ws.word,
                score: format!("{:.6}", ws.score),
                plural: is_likely_plural(&ws.word),
            })
            .map_err(|e| RankError::output(path, e))?;
    }
    writer.flush().map_err(|e| RankError::output(path, e))?;

    debug!(rows = scores.len(), path = %path.display(), "wrote score report");
    Ok(())
}
