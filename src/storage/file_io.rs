//! JSON file helpers
//!
//! Reads tolerate a missing file; writes go through a sibling temp file and a
//! rename so a crash never leaves a half-written data file behind.

use std::fmt::Display;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetlyError;

/// Wrap a lower-level error with the action and file it concerns
fn storage_err<'a, E: Display>(action: &'static str, path: &'a Path) -> impl FnOnce(E) -> BudgetlyError + 'a {
    move |e| BudgetlyError::Storage(format!("Failed to {} {}: {}", action, path.display(), e))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Deserialize `path`, or return `T::default()` when the file does not exist yet
pub fn read_json<T, P>(path: P) -> Result<T, BudgetlyError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_err("open", path)(e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(storage_err("parse", path))
}

/// Serialize `data` as pretty JSON and atomically replace `path` with it
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgetlyError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(storage_err("create directory for", path))?;
    }

    let bytes = serde_json::to_vec_pretty(data).map_err(storage_err("serialize", path))?;

    let temp_path = temp_path_for(path);
    let result = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&temp_path, path));

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_err("write", path)(e));
    }
    Ok(())
}
