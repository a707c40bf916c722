use crate::aggregate::Aggregate;
use crate::distance;
use crate::haversine::{CoordinatePair, HaversineData};
use crate::source::ValueSource;
use byteorder::{ByteOrder, LittleEndian};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn generate(count: usize, source: &mut ValueSource) -> HaversineData {
    let mut pairs = Vec::with_capacity(count);
    for _ in 0..count {
        pairs.push(source.next_pair());
    }
    HaversineData { pairs }
}

fn write_pair<W>(writer: &mut W, pair: &CoordinatePair) -> io::Result<()>
where
    W: Write,
{
    write!(
        writer,
        "    {{\"x0\":{:.16}, \"y0\":{:.16}, \"x1\":{:.16}, \"y1\":{:.16}}}",
        pair.x0, pair.y0, pair.x1, pair.y1
    )
}

/// One object per line inside a single `pairs` array, every coordinate with
/// sixteen digits after the point, no trailing comma.
pub fn write_json<W>(data: &HaversineData, writer: &mut W) -> io::Result<()>
where
    W: Write,
{
    writer.write_all(b"{\"pairs\":[\n")?;
    for (i, pair) in data.pairs.iter().enumerate() {
        write_pair(writer, pair)?;
        if i + 1 < data.pairs.len() {
            writer.write_all(b",")?;
        }
        writer.write_all(b"\n")?;
    }
    writer.write_all(b"]}\n")?;
    writer.flush()
}

/// The reference distances as raw little-endian doubles, one per pair, in
/// order. No header, so the record count is the length over eight.
pub fn write_answers<W>(data: &HaversineData, radius: f64, writer: &mut W) -> io::Result<Aggregate>
where
    W: Write,
{
    let mut totals = Aggregate::default();
    let mut buf = [0u8; 8];
    for point in &data.pairs {
        let distance = distance::naive(point, radius);
        LittleEndian::write_f64(&mut buf, distance);
        writer.write_all(&buf)?;
        totals.add(distance);
    }
    writer.flush()?;
    Ok(totals)
}

fn create(path: &Path) -> Result<BufWriter<File>, DatasetError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| DatasetError::Create {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes the text document and the reference stream side by side. Both
/// outputs are opened before anything is written, and if either can't be
/// written in full, both files are removed again: a caller either gets a
/// matching pair of files or neither.
pub fn write_files<P, Q>(
    data: &HaversineData,
    radius: f64,
    json_path: P,
    answers_path: Q,
) -> Result<Aggregate, DatasetError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let json_path = json_path.as_ref();
    let answers_path = answers_path.as_ref();

    let mut json_writer = create(json_path)?;
    let mut answers_writer = match create(answers_path) {
        Ok(w) => w,
        Err(e) => {
            drop(json_writer);
            let _ = fs::remove_file(json_path);
            return Err(e);
        }
    };

    let result = write_json(data, &mut json_writer)
        .map_err(|source| DatasetError::Write {
            path: json_path.to_path_buf(),
            source,
        })
        .and_then(|()| {
            write_answers(data, radius, &mut answers_writer).map_err(|source| {
                DatasetError::Write {
                    path: answers_path.to_path_buf(),
                    source,
                }
            })
        });

    match result {
        Ok(totals) => {
            info!(
                pairs = totals.count,
                json = %json_path.display(),
                answers = %answers_path.display(),
                "wrote data set"
            );
            Ok(totals)
        }
        Err(e) => {
            debug!(error = %e, "removing partial outputs");
            drop(json_writer);
            drop(answers_writer);
            let _ = fs::remove_file(json_path);
            let _ = fs::remove_file(answers_path);
            Err(e)
        }
    }
}
