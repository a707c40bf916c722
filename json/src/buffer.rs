use memmap2::Mmap;
use std::fs::File;
use std::io::ErrorKind;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to map {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    fn of_io(path: &Path, source: std::io::Error) -> LoadError {
        if source.kind() == ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

enum Contents {
    Mapped(Mmap),
    // Zero-length files can't be mapped on every platform.
    Empty,
}

/// The whole contents of a file, mapped read-only.
///
/// Everything lexed from the buffer borrows from it, so the buffer has to stay
/// alive for as long as any token does.
pub struct SourceBuffer {
    contents: Contents,
}

impl SourceBuffer {
    pub fn load<P>(path: P) -> Result<SourceBuffer, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LoadError::of_io(path, e))?;
        let len = file
            .metadata()
            .map_err(|e| LoadError::of_io(path, e))?
            .len();

        let contents = if len == 0 {
            Contents::Empty
        } else {
            // SAFETY: the map is read-only. Another process truncating or
            // rewriting the file while it's mapped is not something we guard
            // against; the inputs here are files we generated ourselves.
            let map = unsafe { Mmap::map(&file) }.map_err(|e| LoadError::of_io(path, e))?;
            Contents::Mapped(map)
        };

        debug!(path = %path.display(), bytes = len, "mapped input");
        Ok(SourceBuffer { contents })
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.contents {
            Contents::Mapped(map) => &map[..],
            Contents::Empty => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Deref for SourceBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for SourceBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
