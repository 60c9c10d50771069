//! Writing output artifacts so that they are either fully present or not
//! present at all.
//!
//! Each artifact is first written to a temporary file next to its
//! destination and then renamed over the destination. Because the rename
//! happens within a single directory, readers never observe a half-written
//! artifact, and a failure part way through leaves any previous file at the
//! destination untouched.

use std::fs;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

/// Creates the temporary file for an artifact within `directory`.
///
/// On Unix the file is opened with mode `0o666` so that, after the process
/// umask is applied, the artifact ends up with the same permissions as a file
/// created with [`fs::write`].
#[cfg(unix)]
fn temp_file_in(directory: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(directory)
}

#[cfg(not(unix))]
fn temp_file_in(directory: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(directory)
}

/// Writes the artifact at `path` using the `write` callback.
///
/// Missing parent directories are created.
pub fn write_atomically<P, F>(path: P, write: F) -> io::Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let path = path.as_ref();
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !directory.exists() {
        debug!("  [*] Creating directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let mut temp = temp_file_in(directory)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }

    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_atomically_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");

        write_atomically(&path, |w| w.write_all(b"hello")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomically_matches_default_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let expected = dir.path().join("expected.txt");
        let path = dir.path().join("out.txt");

        fs::write(&expected, "hello").unwrap();
        write_atomically(&path, |w| w.write_all(b"hello")).unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&expected));
    }

    #[test]
    fn test_write_atomically_leaves_destination_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "previous").unwrap();

        let result = write_atomically(&path, |w| {
            w.write_all(b"partial")?;
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomically_does_not_create_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let result = write_atomically(&path, |_| {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        });

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
