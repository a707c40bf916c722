use byteorder::{ByteOrder, LittleEndian};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is {len} bytes long, which is not a multiple of 8", path.display())]
    Misaligned { path: PathBuf, len: usize },
}

/// Splits a reference stream into its little-endian doubles.
pub fn decode(bytes: &[u8]) -> Option<Vec<f64>> {
    if bytes.len() % 8 != 0 {
        return None;
    }
    Some(bytes.chunks_exact(8).map(LittleEndian::read_f64).collect())
}

pub fn read<P>(path: P) -> Result<Vec<f64>, AnswerError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| AnswerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let values = decode(&bytes).ok_or_else(|| AnswerError::Misaligned {
        path: path.to_path_buf(),
        len: bytes.len(),
    })?;
    debug!(path = %path.display(), records = values.len(), "read reference answers");
    Ok(values)
}
