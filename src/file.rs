// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use csv::WriterBuilder;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::error::{Error, Result};
use crate::sheet::{Row, HEADERS};

/// Write rows to any writer as CSV/TSV. Fields are quoted only when needed.
pub fn write_rows<W: Write>(
    w: W,
    rows: &[Row],
    format: ExportFormat,
    include_headers: bool,
) -> Result<()> {
    let mut out = WriterBuilder::new()
        .delimiter(format.delim())
        .has_headers(false)
        .from_writer(w);

    if include_headers {
        out.write_record(HEADERS)?;
    }
    for row in rows {
        out.write_record(row.cells())?;
    }
    out.flush()?;
    Ok(())
}

/// Export text for clipboard/preview.
pub fn to_export_string(export: &ExportOptions, rows: &[Row]) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_rows(&mut buf, rows, export.format, export.include_headers)?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/// Write the sheet to `export.out_path()`, creating parent directories.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, rows: &[Row]) -> Result<PathBuf> {
    let path = export.out_path().to_path_buf();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = fs::File::create(&path)?; // truncate/overwrite
    write_rows(std::io::BufWriter::new(file), rows, export.format, export.include_headers)?;
    logf!("Export: {} rows → {}", rows.len(), path.display());
    Ok(path)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Config(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let row = Row {
            study_name: s!("A, B"),
            scan_name: s!("say \"hi\""),
            activity: s!(" "),
            ..Default::default()
        };
        let mut buf = Vec::new();
        write_rows(&mut buf, &[row], ExportFormat::Csv, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "\"A, B\",\"say \"\"hi\"\"\",,,, ,,,,\n");
    }

    #[test]
    fn tsv_uses_tabs() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &[], ExportFormat::Tsv, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Study Name\tScan Name\tModality\t"));
    }
}
