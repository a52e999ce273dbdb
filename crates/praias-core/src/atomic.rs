use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::PraiasError;

/// Write `dest` through a temp file in the same directory, then rename it
/// into place. Readers see either the previous file or the complete new
/// one; on error the previous file is left untouched.
pub fn write_atomically<T>(
    dest: &Path,
    write: impl FnOnce(&mut NamedTempFile) -> Result<T, PraiasError>,
) -> Result<T, PraiasError> {
    let dir = dest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    let value = write(&mut tmp)?;
    tmp.as_file().sync_all()?;
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old").unwrap();

        write_atomically(&path, |f| {
            f.write_all(b"new")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old").unwrap();

        let result: Result<(), PraiasError> = write_atomically(&path, |f| {
            f.write_all(b"partial")?;
            Err(PraiasError::NoRecords)
        });

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.txt");
        write_atomically(&path, |f| Ok(f.write_all(b"x")?)).unwrap();
        assert!(path.exists());
    }
}
