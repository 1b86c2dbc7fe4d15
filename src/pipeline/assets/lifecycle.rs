use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::AssetError;

/// Marker carried by the image generation produced by the most recent run.
pub const CURRENT_MARKER: &str = "_current";

/// Marker prefix carried by retired generations; a sortable timestamp
/// follows it. Never present together with [`CURRENT_MARKER`].
pub const ARCHIVE_MARKER: &str = "_at_";

/// Compact UTC timestamp, lexicographically ordered by time. Fixed-width
/// nanosecond digits keep back-to-back archival events of the same image
/// from colliding on one archived name.
const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S%f";

/// Promote freshly extracted images to the current generation.
///
/// Each file is renamed in place, inserting [`CURRENT_MARKER`] before the
/// extension (`chart.png` → `chart_current.png`). An existing file at the
/// canonical current name is clobbered; callers that need the previous
/// generation must [`archive`] first. Returns the canonical paths in
/// input order.
///
/// Safe to re-run after a crash: a path already carrying the marker is
/// returned unchanged (it must still exist on disk), and a missing
/// source whose current target exists is treated as already promoted.
/// Archived files are never promotable; a name carrying the archival
/// marker is rejected so no file ever carries both markers.
pub fn promote<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>, AssetError> {
    let mut promoted = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AssetError::InvalidFileName(path.to_path_buf()))?;

        if file_name.contains(ARCHIVE_MARKER) {
            return Err(AssetError::AlreadyArchived(path.to_path_buf()));
        }

        if file_name.contains(CURRENT_MARKER) {
            if !path.exists() {
                return Err(AssetError::MissingSource(path.to_path_buf()));
            }
            promoted.push(path.to_path_buf());
            continue;
        }

        let target = path.with_file_name(current_name(file_name));
        if !path.exists() {
            if target.exists() {
                // An interrupted earlier run already renamed this one.
                promoted.push(target);
                continue;
            }
            return Err(AssetError::MissingSource(path.to_path_buf()));
        }

        fs::rename(path, &target)?;
        tracing::debug!(
            from = %path.display(),
            to = %target.display(),
            "image promoted to current generation"
        );
        promoted.push(target);
    }

    Ok(promoted)
}

/// Retire the current generation in `dir`.
///
/// Every file carrying [`CURRENT_MARKER`] is renamed with the marker
/// replaced by [`ARCHIVE_MARKER`] plus one timestamp shared by the whole
/// archival event (`chart_current.png` → `chart_at_<stamp>.png`).
/// Other files are untouched and nothing is ever deleted. Returns the
/// archived paths in name order; an empty result means no current files
/// were found.
pub fn archive(dir: &Path) -> Result<Vec<PathBuf>, AssetError> {
    if !dir.is_dir() {
        return Err(AssetError::NotADirectory(dir.to_path_buf()));
    }

    let stamp = Utc::now().format(ARCHIVE_TIMESTAMP_FORMAT).to_string();

    let mut current: Vec<(PathBuf, String)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        // Non-UTF-8 names cannot carry the marker.
        if let Some(name) = entry.file_name().to_str() {
            if name.contains(CURRENT_MARKER) {
                current.push((entry.path(), name.to_string()));
            }
        }
    }
    // read_dir order is platform-dependent.
    current.sort_by(|a, b| a.1.cmp(&b.1));

    let mut archived = Vec::with_capacity(current.len());
    for (path, name) in current {
        let archived_name = name.replacen(CURRENT_MARKER, &format!("{ARCHIVE_MARKER}{stamp}"), 1);
        let mut target = path.with_file_name(archived_name);
        // A coarse clock can hand two archival events the same stamp;
        // an existing archive must never be replaced.
        let mut attempt = 0u32;
        while target.exists() {
            attempt += 1;
            let unique = name.replacen(
                CURRENT_MARKER,
                &format!("{ARCHIVE_MARKER}{stamp}{attempt:03}"),
                1,
            );
            target = path.with_file_name(unique);
        }
        fs::rename(&path, &target)?;
        archived.push(target);
    }

    if !archived.is_empty() {
        tracing::debug!(
            archived = archived.len(),
            %stamp,
            dir = %dir.display(),
            "current image generation archived"
        );
    }

    Ok(archived)
}

/// Insert the current marker before the extension, or append it when the
/// name has none.
fn current_name(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => format!(
            "{}{}{}",
            &file_name[..dot],
            CURRENT_MARKER,
            &file_name[dot..]
        ),
        _ => format!("{file_name}{CURRENT_MARKER}"),
    }
}
