use super::backend::StorageBackend;
use crate::error::{Result, SatError};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const BACKUP_SUFFIX: &str = ".backup";

pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data file>.backup`, next to the data file.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn staging_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "data".to_string());
        self.dir().join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }

    /// Writes `bytes` to `tmp_path`, then renames it over the data file.
    fn replace_via(&self, tmp_path: &Path, bytes: &[u8]) -> Result<()> {
        let written =
            write_synced(tmp_path, bytes).and_then(|_| fs::rename(tmp_path, &self.path));

        if let Err(e) = written {
            let _ = fs::remove_file(tmp_path);
            return Err(SatError::Io(e));
        }
        Ok(())
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(SatError::Io)?;
        }
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

impl StorageBackend for FsBackend {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SatError::Io(e)),
        }
    }

    fn write_atomic(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_dir(&self.dir())?;

        // Stage next to the target so the rename stays on one filesystem
        self.replace_via(&self.staging_path(), bytes)
    }

    fn write_backup(&self, bytes: &[u8]) -> Result<PathBuf> {
        let backup = self.backup_path();
        fs::write(&backup, bytes).map_err(SatError::Io)?;
        Ok(backup)
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
