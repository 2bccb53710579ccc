//! Locating and reading the yearly office calendar CSV.

use crate::calendar::{CalendarError, TabularRecord};
use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// File name prefix shared by every source file of `roc_year`, e.g. `114年中華民國政府行政機關辦公日曆表`
pub fn source_prefix(roc_year: i64, label: &str) -> String {
    format!("{}年{}", roc_year, label)
}

/// Order candidate file names so that corrected releases come first, then by name.
pub fn rank_source_candidates(mut names: Vec<String>, corrected_marker: &str) -> Vec<String> {
    names.sort_by(|a, b| {
        let a_key = (!a.contains(corrected_marker), a.as_str());
        let b_key = (!b.contains(corrected_marker), b.as_str());
        a_key.cmp(&b_key)
    });
    names
}

fn is_source_candidate(name: &str, prefix: &str) -> bool {
    name.starts_with(prefix) && name.to_lowercase().ends_with(".csv")
}

/// Find the CSV for `roc_year` in `csv_dir`, preferring a corrected release.
pub fn find_source_csv(
    roc_year: i64,
    csv_dir: &Path,
    label: &str,
    corrected_marker: &str,
) -> Result<PathBuf> {
    let prefix = source_prefix(roc_year, label);
    let entries = match fs::read_dir(csv_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(CalendarError::SourceNotFound { prefix, dir: csv_dir.to_path_buf() }.into());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to list CSV directory {}", csv_dir.display()));
        }
    };

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry?;
        if let Ok(name) = entry.file_name().into_string() {
            if is_source_candidate(&name, &prefix) {
                candidates.push(name);
            }
        }
    }
    debug!("CSV candidates for {}: {:?}", prefix, candidates);

    let selected = rank_source_candidates(candidates, corrected_marker)
        .into_iter()
        .next()
        .ok_or_else(|| CalendarError::SourceNotFound { prefix, dir: csv_dir.to_path_buf() })?;

    Ok(csv_dir.join(selected))
}

/// Read every data row of an office calendar CSV.
///
/// The header row names the columns. A leading UTF-8 BOM is ignored and all
/// header names and values are trimmed. Rows shorter than the header leave the
/// missing fields empty.
pub fn read_calendar_csv(csv_path: &Path) -> Result<Vec<TabularRecord>> {
    let bytes = fs::read(csv_path)
        .with_context(|| format!("Failed to read CSV file {}", csv_path.display()))?;
    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);

    let mut reader =
        ReaderBuilder::new().trim(Trim::All).flexible(true).from_reader(content);

    let rows = reader
        .deserialize::<TabularRecord>()
        .collect::<std::result::Result<Vec<_>, csv::Error>>()
        .map_err(CalendarError::Malformed)?;

    debug!("Read {} rows from {}", rows.len(), csv_path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const LABEL: &str = "中華民國政府行政機關辦公日曆表";

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_source_prefix() {
        assert_eq!(source_prefix(114, LABEL), "114年中華民國政府行政機關辦公日曆表");
    }

    #[test]
    fn test_rank_prefers_corrected() {
        let ranked = rank_source_candidates(names(&["114年X.csv", "114年X(修正版).csv"]), "修正版");
        assert_eq!(ranked[0], "114年X(修正版).csv");
    }

    #[test]
    fn test_rank_breaks_ties_by_name() {
        let ranked = rank_source_candidates(
            names(&["114年X(修正版2).csv", "114年X.csv", "114年X(修正版).csv", "114年A.csv"]),
            "修正版",
        );
        assert_eq!(
            ranked,
            names(&["114年X(修正版).csv", "114年X(修正版2).csv", "114年A.csv", "114年X.csv"])
        );
    }

    #[test]
    fn test_find_source_csv_selects_corrected() -> Result<()> {
        let dir = tempdir()?;
        for name in [
            format!("114年{}.csv", LABEL),
            format!("114年{}(修正版).csv", LABEL),
            format!("115年{}.csv", LABEL),
            format!("114年{}.xlsx", LABEL),
        ] {
            fs::write(dir.path().join(name), "")?;
        }

        let found = find_source_csv(114, dir.path(), LABEL, "修正版")?;
        assert_eq!(found, dir.path().join(format!("114年{}(修正版).csv", LABEL)));
        Ok(())
    }

    #[test]
    fn test_find_source_csv_extension_is_case_insensitive() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join(format!("113年{}.CSV", LABEL)), "")?;

        let found = find_source_csv(113, dir.path(), LABEL, "修正版")?;
        assert_eq!(found, dir.path().join(format!("113年{}.CSV", LABEL)));
        Ok(())
    }

    #[test]
    fn test_find_source_csv_not_found() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join(format!("115年{}.csv", LABEL)), "")?;

        let err = find_source_csv(114, dir.path(), LABEL, "修正版").unwrap_err();
        match err.downcast_ref::<CalendarError>() {
            Some(CalendarError::SourceNotFound { prefix, .. }) => {
                assert_eq!(prefix, &source_prefix(114, LABEL));
            }
            other => panic!("Unexpected error: {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_find_source_csv_missing_directory() -> Result<()> {
        let dir = tempdir()?;
        let missing = dir.path().join("data").join(LABEL);

        let err = find_source_csv(114, &missing, LABEL, "修正版").unwrap_err();
        let calendar_err = err.downcast_ref::<CalendarError>().expect("calendar error");
        assert!(calendar_err.is_not_found());
        match calendar_err {
            CalendarError::SourceNotFound { dir, .. } => assert_eq!(dir, &missing),
            other => panic!("Unexpected error: {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_read_calendar_csv_strips_bom_and_whitespace() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cal.csv");
        let content = "\u{feff} 西元日期 ,星期, 是否放假 ,備註\n20260101, 四 ,2, 開國紀念日 \n20260102,五,0,\n";
        fs::write(&path, content)?;

        let rows = read_calendar_csv(&path)?;
        assert_eq!(
            rows,
            vec![
                TabularRecord::new("20260101", "四", "2", "開國紀念日"),
                TabularRecord::new("20260102", "五", "0", ""),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_read_calendar_csv_short_row() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cal.csv");
        fs::write(&path, "西元日期,星期,是否放假,備註\n20260103,六\n")?;

        let rows = read_calendar_csv(&path)?;
        assert_eq!(rows, vec![TabularRecord::new("20260103", "六", "", "")]);
        Ok(())
    }

    #[test]
    fn test_read_calendar_csv_malformed() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cal.csv");
        let mut content = "西元日期,星期\n".as_bytes().to_vec();
        content.extend_from_slice(b"\xFF\xFE,\xE5\x9B\x9B\n");
        fs::write(&path, content)?;

        let err = read_calendar_csv(&path).unwrap_err();
        assert!(matches!(err.downcast_ref::<CalendarError>(), Some(CalendarError::Malformed(_))));
        Ok(())
    }
}
