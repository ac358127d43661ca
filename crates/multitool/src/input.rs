use crate::prelude::*;
use std::path::Path;

/// Read a whole file into memory
///
/// The handle is closed before returning; callers get the raw bytes and
/// decide how strictly to decode them.
pub fn read_file(path: &Path) -> Result<Vec<u8>, Error> {
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_file_returns_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        std::fs::write(&path, "some words").unwrap();

        assert_eq!(read_file(&path).unwrap(), b"some words");
    }

    #[test]
    fn test_read_file_missing_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let err = read_file(&path).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().starts_with("Error reading file "));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_read_file_directory_is_read_error() {
        let temp_dir = TempDir::new().unwrap();

        assert!(matches!(
            read_file(temp_dir.path()),
            Err(Error::Read { .. })
        ));
    }
}
