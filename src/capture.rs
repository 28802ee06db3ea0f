//! Invocation of the external still-capture program.

use std::path::Path;
use std::process::Command;

use crate::error::CaptureError;

/// Run `<program> -o <output>` and wait for it to finish.
///
/// A failed spawn, a non-zero exit, and a missing output file are each an
/// immediate error, with the program's stderr attached where there is one.
pub fn capture_still(program: &str, output: &Path) -> Result<(), CaptureError> {
    let out = Command::new(program)
        .arg("-o")
        .arg(output)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CaptureError::ProgramNotFound(program.to_string())
            } else {
                CaptureError::Spawn {
                    program: program.to_string(),
                    source: e,
                }
            }
        })?;

    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
        return Err(CaptureError::Failed {
            program: program.to_string(),
            status: out.status,
            stderr: if stderr.is_empty() {
                "(no stderr)".to_string()
            } else {
                stderr
            },
        });
    }

    if !output.is_file() {
        return Err(CaptureError::MissingImage {
            program: program.to_string(),
            path: output.to_path_buf(),
        });
    }

    Ok(())
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        fs::write(&path, body).expect("write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
        path
    }

    #[test]
    fn successful_capture_leaves_the_image_in_place() {
        let dir = tempfile::tempdir().expect("tempdir");
        let script = write_script(
            dir.path(),
            "fake-still",
            "#!/bin/sh\nprintf 'jpeg-bytes' > \"$2\"\n",
        );
        let image = dir.path().join("2024-03-07.jpg");

        capture_still(script.to_str().unwrap(), &image).expect("capture");
        assert_eq!(fs::read(&image).unwrap(), b"jpeg-bytes");
    }

    #[test]
    fn non_zero_exit_is_reported_with_stderr() {
        let dir = tempfile::tempdir().expect("tempdir");
        let script = write_script(
            dir.path(),
            "fake-still",
            "#!/bin/sh\necho 'ERROR: no cameras available' >&2\nexit 3\n",
        );
        let image = dir.path().join("out.jpg");

        let err = capture_still(script.to_str().unwrap(), &image).unwrap_err();
        match err {
            CaptureError::Failed { status, stderr, .. } => {
                assert_eq!(status.code(), Some(3));
                assert!(stderr.contains("no cameras available"), "stderr: {stderr}");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn clean_exit_without_an_image_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let script = write_script(dir.path(), "fake-still", "#!/bin/sh\nexit 0\n");
        let image = dir.path().join("out.jpg");

        let err = capture_still(script.to_str().unwrap(), &image).unwrap_err();
        match err {
            CaptureError::MissingImage { path, .. } => assert_eq!(path, image),
            other => panic!("expected MissingImage, got {other:?}"),
        }
    }

    #[test]
    fn missing_program_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("no-such-still");
        let image = dir.path().join("out.jpg");

        let err = capture_still(missing.to_str().unwrap(), &image).unwrap_err();
        match err {
            CaptureError::ProgramNotFound(name) => {
                assert_eq!(name, missing.to_str().unwrap());
            }
            other => panic!("expected ProgramNotFound, got {other:?}"),
        }
    }
}
