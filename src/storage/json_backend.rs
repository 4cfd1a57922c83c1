use chrono::NaiveDate;
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use uuid::Uuid;

use crate::{
    errors::{LedgerError, Result},
    ledger::WeeklyLedger,
    utils::{app_data_dir, ensure_dir},
};

use super::LedgerStore;

const LEDGER_DIR: &str = "ledgers";
const LEDGER_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";
const WEEK_FILE_FORMAT: &str = "%Y-%m-%d";

/// Stores each week as `<root>/ledgers/<home_id>/<week_start>.json`.
#[derive(Debug, Clone)]
pub struct JsonStore {
    ledgers_dir: PathBuf,
}

impl JsonStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        let ledgers_dir = root.join(LEDGER_DIR);
        ensure_dir(&ledgers_dir)?;
        Ok(Self { ledgers_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    fn home_dir(&self, home_id: Uuid) -> PathBuf {
        self.ledgers_dir.join(home_id.to_string())
    }

    pub fn week_path(&self, home_id: Uuid, week_start: NaiveDate) -> PathBuf {
        self.home_dir(home_id).join(format!(
            "{}.{}",
            week_start.format(WEEK_FILE_FORMAT),
            LEDGER_EXTENSION
        ))
    }
}

impl LedgerStore for JsonStore {
    fn save(&self, ledger: &WeeklyLedger) -> Result<()> {
        let path = self.week_path(ledger.home_id, ledger.week_start);
        save_ledger_to_path(ledger, &path)?;
        tracing::debug!(path = %path.display(), entries = ledger.entries.len(), "saved weekly ledger");
        Ok(())
    }

    fn load(&self, home_id: Uuid, week_start: NaiveDate) -> Result<WeeklyLedger> {
        let path = self.week_path(home_id, week_start);
        if !path.exists() {
            return Err(LedgerError::WeekNotFound {
                home_id,
                week_start,
            });
        }
        load_ledger_from_path(&path)
    }

    fn list_weeks(&self, home_id: Uuid) -> Result<Vec<NaiveDate>> {
        let dir = self.home_dir(home_id);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut weeks = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(LEDGER_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match NaiveDate::parse_from_str(stem, WEEK_FILE_FORMAT) {
                Ok(date) => weeks.push(date),
                Err(_) => tracing::warn!(path = %path.display(), "skipping unrecognised ledger file"),
            }
        }
        weeks.sort();
        Ok(weeks)
    }
}

/// Writes a ledger as pretty JSON, staging to a temporary file first.
///
/// Non-finite figures would be written as `null` and never load again, so
/// they are rejected before anything touches disk.
pub fn save_ledger_to_path(ledger: &WeeklyLedger, path: &Path) -> Result<()> {
    ledger.ensure_finite()?;
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(ledger)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load_ledger_from_path(path: &Path) -> Result<WeeklyLedger> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn week_files_are_keyed_by_home_and_monday() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();
        let home = Uuid::new_v4();
        let monday = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        let path = store.week_path(home, monday);
        assert!(path.ends_with(format!("{home}/2025-02-03.json")));
    }

    #[test]
    fn non_finite_figures_are_not_written() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let mut ledger = WeeklyLedger::new(Uuid::new_v4(), monday);
        ledger.budget_issued = f64::NAN;

        let err = store.save(&ledger).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
        assert!(!store.week_path(ledger.home_id, monday).exists());
        assert!(store.list_weeks(ledger.home_id).unwrap().is_empty());
    }

    #[test]
    fn stray_files_are_ignored_when_listing() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();
        let home = Uuid::new_v4();
        let dir = store.home_dir(home);
        ensure_dir(&dir).unwrap();
        fs::write(dir.join("notes.txt"), "x").unwrap();
        fs::write(dir.join("garbage.json"), "{}").unwrap();
        assert!(store.list_weeks(home).unwrap().is_empty());
    }
}
