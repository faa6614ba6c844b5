use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, or write it into a `.zip`
    /// archive next to it when `compress` is set. Returns the final path, or
    /// `None` when the user declined to overwrite an existing file.
    pub fn backup(
        database: &str,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = expand_tilde(database);
        let dest = expand_tilde(dest_file);

        if !src.exists() {
            return Err(AppError::StorageUnavailable(format!(
                "database not found: {}",
                src.display()
            )));
        }

        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.clone()
        };
        if src == final_path {
            return Err(AppError::Validation(
                "backup destination is the database itself".into(),
            ));
        }

        if let Some(parent) = final_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if final_path.exists()
            && !force
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite?",
                final_path.display()
            ))
        {
            warning("Backup cancelled.");
            return Ok(None);
        }

        if compress {
            compress_backup(&src, &entry_name(&src, &dest)?, &final_path)?;
        } else {
            fs::copy(&src, &final_path)?;
        }
        success(format!("Backup created: {}", final_path.display()));

        if let Ok(conn) = Connection::open(&src) {
            audit(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(Some(final_path))
    }
}

/// Name of the database inside the archive: the destination's stem with the
/// database's own extension, so `copy.zip` holds `copy.sqlite`.
fn entry_name(src: &Path, dest: &Path) -> AppResult<String> {
    let ext = src.extension().unwrap_or_default();
    dest.with_extension(ext)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", dest.display())))
}

/// Stream `src` into a new archive at `zip_path` under `name`.
fn compress_backup(src: &Path, name: &str, zip_path: &Path) -> AppResult<()> {
    let mut zip = ZipWriter::new(fs::File::create(zip_path)?);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(name, options).map_err(std::io::Error::other)?;
    let mut f = fs::File::open(src)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("dailylog_backup_{}_{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn plain_copy_matches_source() {
        let dir = scratch("plain");
        let db = dir.join("data.sqlite");
        fs::write(&db, b"not really sqlite").unwrap();
        let dest = dir.join("copy.sqlite");

        let out = BackupLogic::backup(db.to_str().unwrap(), dest.to_str().unwrap(), false, true)
            .unwrap()
            .unwrap();
        assert_eq!(out, dest);
        assert_eq!(fs::read(&dest).unwrap(), b"not really sqlite");
    }

    #[test]
    fn compressed_backup_leaves_no_plain_copy() {
        let dir = scratch("zip");
        let db = dir.join("data.sqlite");
        fs::write(&db, b"payload").unwrap();
        let dest = dir.join("copy.sqlite");

        let out = BackupLogic::backup(db.to_str().unwrap(), dest.to_str().unwrap(), true, true)
            .unwrap()
            .unwrap();
        assert_eq!(out, dir.join("copy.zip"));
        assert!(!dest.exists());
        assert_eq!(read_entry(&out, "copy.sqlite"), b"payload");
    }

    fn read_entry(archive: &Path, name: &str) -> Vec<u8> {
        let mut archive = zip::ZipArchive::new(fs::File::open(archive).unwrap()).unwrap();
        let mut inner = archive.by_name(name).unwrap();
        let mut buf = Vec::new();
        inner.read_to_end(&mut buf).unwrap();
        buf
    }

    #[test]
    fn compressed_backup_to_a_zip_name_keeps_the_archive() {
        let dir = scratch("zipname");
        let db = dir.join("data.sqlite");
        fs::write(&db, b"payload").unwrap();
        let dest = dir.join("backup.zip");

        let out = BackupLogic::backup(db.to_str().unwrap(), dest.to_str().unwrap(), true, true)
            .unwrap()
            .unwrap();
        assert_eq!(out, dest);
        assert!(dest.exists());
        assert_eq!(read_entry(&dest, "backup.sqlite"), b"payload");

        // A second run over the existing archive replaces it.
        fs::write(&db, b"newer").unwrap();
        BackupLogic::backup(db.to_str().unwrap(), dest.to_str().unwrap(), true, true).unwrap();
        assert_eq!(read_entry(&dest, "backup.sqlite"), b"newer");
    }

    #[test]
    fn missing_database_is_reported() {
        let dir = scratch("missing");
        let res = BackupLogic::backup(
            dir.join("nope.sqlite").to_str().unwrap(),
            dir.join("out.sqlite").to_str().unwrap(),
            false,
            true,
        );
        assert!(matches!(res, Err(AppError::StorageUnavailable(_))));
    }
}
