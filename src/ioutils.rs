use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a text file, separating a missing file from other I/O failures.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::AssetNotFound { path: path.display().to_string() },
        _ => Error::AssetReadError { path: path.display().to_string(), source: e },
    })
}

/// Copies `source_path` to `dest_path`, refusing to replace an existing file.
///
/// The destination is opened with `create_new`, so the existence check and
/// the creation happen in one step. A destination left half-written by a
/// failed copy is removed.
pub fn copy_new_file<P: AsRef<Path>, Q: AsRef<Path>>(
    source_path: P,
    dest_path: Q,
) -> Result<()> {
    let source_path = source_path.as_ref();
    let dest_path = dest_path.as_ref();

    let mut source = std::fs::File::open(source_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            Error::AssetNotFound { path: source_path.display().to_string() }
        }
        _ => Error::CopyError { path: dest_path.display().to_string(), source: e },
    })?;

    let mut dest = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest_path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => {
                Error::DestinationExists { path: dest_path.display().to_string() }
            }
            _ => Error::CopyError { path: dest_path.display().to_string(), source: e },
        })?;

    if let Err(e) = std::io::copy(&mut source, &mut dest) {
        drop(dest);
        if let Err(cleanup) = std::fs::remove_file(dest_path) {
            log::warn!(
                "Failed to remove partial copy '{}': {cleanup}",
                dest_path.display()
            );
        }
        return Err(Error::CopyError { path: dest_path.display().to_string(), source: e });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn read_text_reports_missing_file() {
        let tmp = TempDir::new().unwrap();
        let result = read_text(tmp.path().join("absent.md"));
        assert!(matches!(result, Err(Error::AssetNotFound { .. })));
    }

    #[test]
    fn read_text_rejects_invalid_utf8() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("binary.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(read_text(&path), Err(Error::AssetReadError { .. })));
    }

    #[test]
    fn read_text_on_directory_is_read_error() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(read_text(tmp.path()), Err(Error::AssetReadError { .. })));
    }

    #[test]
    fn copy_new_file_preserves_bytes() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.md");
        let dst = tmp.path().join("dst.md");
        let bytes = b"# Title\r\n\xe2\x9c\x93 done\n".to_vec();
        fs::write(&src, &bytes).unwrap();

        copy_new_file(&src, &dst).unwrap();
        assert_eq!(fs::read(&dst).unwrap(), bytes);
    }

    #[test]
    fn copy_new_file_never_overwrites() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.md");
        let dst = tmp.path().join("dst.md");
        fs::write(&src, "new").unwrap();
        fs::write(&dst, "original").unwrap();

        let result = copy_new_file(&src, &dst);
        assert!(matches!(result, Err(Error::DestinationExists { .. })));
        assert_eq!(fs::read_to_string(&dst).unwrap(), "original");
    }

    #[test]
    fn copy_new_file_missing_source_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let dst = tmp.path().join("dst.md");

        let result = copy_new_file(tmp.path().join("absent.md"), &dst);
        assert!(matches!(result, Err(Error::AssetNotFound { .. })));
        assert!(!dst.exists());
    }

    #[test]
    fn copy_new_file_removes_partial_destination() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src_dir");
        let dst = tmp.path().join("dst.md");
        fs::create_dir(&src).unwrap();

        // Opening a directory succeeds; reading from it does not.
        let result = copy_new_file(&src, &dst);
        assert!(matches!(result, Err(Error::CopyError { .. })));
        assert!(!dst.exists());
    }

    #[test]
    fn copy_new_file_into_missing_directory_is_copy_error() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.md");
        fs::write(&src, "x").unwrap();

        let result = copy_new_file(&src, tmp.path().join("nope").join("dst.md"));
        assert!(matches!(result, Err(Error::CopyError { .. })));
    }
}
