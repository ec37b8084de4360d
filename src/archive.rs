//! Cache/archive completeness check.
//!
//! For each project directory in the cache root, `source_stats.json` says how
//! many sessions and acquisitions the transfer should produce and which files
//! it should contain. The archive side is
//! `{archive}/{group}_{projectLabel}/arc001/{session}/SCANS/{scan}/...`
//! (spaces in the label become underscores).
//!
//! A project is `success` when the session count, the scan-directory count and
//! the file names found under the project all agree with the cache.

use std::{
    collections::HashSet,
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use walkdir::WalkDir;

use crate::config::consts::{ARCHIVE_SUBDIR, CATALOG_MARKER, SCANS_SUBDIR, SOURCE_STATS_FILE};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SourceStats {
    pub project_label: String,
    pub group: String,
    pub total_sessions: usize,
    pub total_acquisitions: usize,
    #[serde(default)]
    pub files: Vec<ExpectedFile>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ExpectedFile {
    pub filename: String,
}

impl SourceStats {
    pub fn load(path: &Path) -> Option<Self> {
        let text = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&text) {
            Ok(stats) => Some(stats),
            Err(e) => {
                loge!("Cache: unreadable {}: {e}", path.display());
                None
            }
        }
    }

    /// `{group}_{label}` with spaces in the label replaced.
    pub fn archive_dir_name(&self) -> String {
        join!(&self.group, "_", &self.project_label.replace(' ', "_"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    NoCache,
    NotStarted,
    NotCompleted,
    Success,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NoCache => "no_cache",
            ProjectStatus::NotStarted => "not_started",
            ProjectStatus::NotCompleted => "not_completed",
            ProjectStatus::Success => "success",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What was actually found in the archive for one project.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArchiveCounts {
    pub sessions: usize,
    pub scans: usize,
    pub unexpected_files: Vec<String>,
}

fn count_subdirs(dir: &Path) -> usize {
    fs::read_dir(dir)
        .map(|rd| rd.filter_map(|e| e.ok()).filter(|e| e.path().is_dir()).count())
        .unwrap_or(0)
}

/// File names (not paths) of every file below `root`, minus catalog files.
pub fn archived_file_names(root: &Path) -> Vec<String> {
    WalkDir::new(root)
        .follow_links(true)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.contains(CATALOG_MARKER))
        .collect()
}

/// Count sessions and scans under `{project_root}/arc001`. `None` when
/// `arc001` can't be listed.
pub fn scan_archive(project_root: &Path, expected: &HashSet<&str>) -> Option<ArchiveCounts> {
    let arc = project_root.join(ARCHIVE_SUBDIR);
    let sessions: Vec<PathBuf> = fs::read_dir(&arc)
        .ok()?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();

    let scans: usize = sessions
        .iter()
        .map(|s| s.join(SCANS_SUBDIR))
        .filter(|p| p.is_dir())
        .map(|p| count_subdirs(&p))
        .sum();

    let unexpected_files = archived_file_names(project_root)
        .into_iter()
        .filter(|name| !expected.contains(name.as_str()))
        .collect();

    Some(ArchiveCounts { sessions: sessions.len(), scans, unexpected_files })
}

/// Validate one project directory name found under `cache`.
pub fn validate_project(cache: &Path, archive: &Path, project: &str) -> ProjectStatus {
    let Some(stats) = SourceStats::load(&cache.join(project).join(SOURCE_STATS_FILE)) else {
        return ProjectStatus::NoCache;
    };

    let expected: HashSet<&str> = stats.files.iter().map(|f| f.filename.as_str()).collect();
    let project_root = archive.join(stats.archive_dir_name());

    let Some(found) = scan_archive(&project_root, &expected) else {
        return ProjectStatus::NotStarted;
    };

    logd!(
        "Archive: {project} sessions {}/{} scans {}/{} unexpected files {}",
        found.sessions,
        stats.total_sessions,
        found.scans,
        stats.total_acquisitions,
        found.unexpected_files.len()
    );

    if found.sessions == stats.total_sessions
        && found.scans == stats.total_acquisitions
        && found.unexpected_files.is_empty()
    {
        ProjectStatus::Success
    } else {
        ProjectStatus::NotCompleted
    }
}

/// Per-status project lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub checked: Vec<(String, ProjectStatus)>,
}

impl ValidationReport {
    pub fn push(&mut self, project: String, status: ProjectStatus) {
        self.checked.push((project, status));
    }

    pub fn with_status(&self, status: ProjectStatus) -> Vec<&str> {
        self.checked
            .iter()
            .filter(|(_, s)| *s == status)
            .map(|(p, _)| p.as_str())
            .collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = [
            ("Not Cached Projects", ProjectStatus::NoCache),
            ("Not Started Projects", ProjectStatus::NotStarted),
            ("Not Completed Projects", ProjectStatus::NotCompleted),
            ("Completed Projects", ProjectStatus::Success),
        ];
        for (title, status) in groups {
            writeln!(f, "\n{title}:")?;
            writeln!(f, "{:?}", self.with_status(status))?;
        }
        Ok(())
    }
}

/// Project directories under `cache`, sorted by name.
pub fn cached_projects(cache: &Path) -> std::io::Result<Vec<String>> {
    let mut out: Vec<String> = fs::read_dir(cache)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    out.sort();
    Ok(out)
}

/// Validate every project in the cache root.
pub fn validate_all(cache: &Path, archive: &Path) -> std::io::Result<ValidationReport> {
    let mut report = ValidationReport::default();
    for project in cached_projects(cache)? {
        let status = validate_project(cache, archive, &project);
        logf!("Archive: {project} → {status}");
        report.push(project, status);
    }
    Ok(report)
}

/// Validate a single project; `None` when it isn't a directory in the cache.
pub fn validate_one(cache: &Path, archive: &Path, project: &str) -> Option<ProjectStatus> {
    if !cache.join(project).is_dir() {
        return None;
    }
    Some(validate_project(cache, archive, project))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_dir_replaces_spaces() {
        let stats: SourceStats = serde_json::from_str(
            r#"{"projectLabel":"My Mice","group":"LAB","totalSessions":1,"totalAcquisitions":2}"#,
        )
        .unwrap();
        assert_eq!(stats.archive_dir_name(), "LAB_My_Mice");
        assert!(stats.files.is_empty());
    }

    #[test]
    fn status_strings() {
        assert_eq!(ProjectStatus::NoCache.to_string(), "no_cache");
        assert_eq!(ProjectStatus::NotCompleted.to_string(), "not_completed");
    }
}
