//! Writes rendered templates into a chart without ever overwriting a file.

use crate::error::{Error, Result};
use crate::template::Template;
use log::{debug, warn};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes resources below a root directory, optionally scoped to a component.
#[derive(Debug, Clone)]
pub struct ResourceWriter {
    root: PathBuf,
}

impl ResourceWriter {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The root itself for an empty component, otherwise `root/component`.
    pub fn destination_dir(&self, component: &str) -> PathBuf {
        if component.is_empty() {
            self.root.clone()
        } else {
            self.root.join(component)
        }
    }

    pub fn destination(&self, template: &Template, component: &str) -> PathBuf {
        self.destination_dir(component).join(template.file_name())
    }

    /// Renders `template` into a new file and returns its path.
    ///
    /// # Errors
    /// * `Error::WriteRefused` if a file already exists at the destination
    /// * `Error::WriteFailed` if the directory or file cannot be created
    pub fn write(&self, template: &Template, component: &str) -> Result<PathBuf> {
        let dir = self.destination_dir(component);
        fs::create_dir_all(&dir).map_err(|source| Error::WriteFailed {
            path: dir.display().to_string(),
            source,
        })?;

        let target = dir.join(template.file_name());
        println!("\nCreating a new resource in: {}", target.display());

        if target.exists() {
            return Err(Error::WriteRefused { path: target.display().to_string() });
        }

        let content = template.render();
        write_new_file(&target, content.as_bytes()).map_err(|source| {
            if source.kind() == io::ErrorKind::AlreadyExists {
                Error::WriteRefused { path: target.display().to_string() }
            } else {
                Error::WriteFailed { path: target.display().to_string(), source }
            }
        })?;

        debug!("Wrote {} byte(s) to {}", content.len(), target.display());
        Ok(target)
    }
}

fn write_new_file(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    let file = options.open(path)?;
    write_or_remove(path, file, content)
}

/// Writes `content` to the freshly created file at `path`, removing the file
/// again if the write fails so no truncated resource is left behind.
fn write_or_remove<W: Write>(path: &Path, mut out: W, content: &[u8]) -> io::Result<()> {
    match out.write_all(content).and_then(|_| out.flush()) {
        Ok(()) => Ok(()),
        Err(e) => {
            drop(out);
            if let Err(remove_err) = fs::remove_file(path) {
                warn!("Failed to remove partial file {}: {}", path.display(), remove_err);
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("configmap.yaml");
        fs::write(&path, "partial").unwrap();

        let result = write_or_remove(&path, FailingWriter, b"kind: ConfigMap\n");

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_successful_write_keeps_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("configmap.yaml");
        let file = File::create(&path).unwrap();

        write_or_remove(&path, file, b"kind: ConfigMap\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "kind: ConfigMap\n");
    }
}
