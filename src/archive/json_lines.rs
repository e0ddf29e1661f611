use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing::{debug, info, warn};

use crate::models::atmospheric::plume::{ConcentrationSample, SimulationRequest};

use super::{
    Clock, RecordId, SimulationRecord, SimulationStore, StoreError, SystemClock, newest_first,
};

/// Archive stored as an append-only file with one JSON record per line.
///
/// Appends are serialized through an internal lock. A line is encoded in
/// full before anything is written, and a failed write is rolled back by
/// truncating the file to its last committed record. A trailing line left
/// incomplete by an interrupted write is dropped when the archive is opened.
///
/// The store assumes it is the only writer of its file.
pub struct JsonLinesStore {
    path: PathBuf,
    cursor: Mutex<Cursor>,
    clock: Box<dyn Clock>,
}

/// Append position, guarded by the store lock.
#[derive(Debug)]
struct Cursor {
    next_id: u64,
    /// Byte length of the file up to the end of the last committed record.
    committed_len: u64,
}

impl JsonLinesStore {
    /// Opens (creating if needed) the archive at `path`, stamped by the system clock.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the file cannot be created or repaired, or
    /// if a record before the last line cannot be decoded.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open_with_clock(path, SystemClock)
    }

    /// Opens (creating if needed) the archive at `path`, stamped by `clock`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the file cannot be created or repaired, or
    /// if a record before the last line cannot be decoded.
    pub fn open_with_clock(
        path: impl AsRef<Path>,
        clock: impl Clock + 'static,
    ) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(StoreError::io(&path, "creating archive"))?;

        let scan = read_records(&path)?;
        let mut committed_len = scan.committed_len;

        let on_disk = file
            .metadata()
            .map_err(StoreError::io(&path, "reading archive length"))?
            .len();
        if on_disk > committed_len {
            warn!(
                path = %path.display(),
                discarded = on_disk - committed_len,
                "truncating incomplete trailing record"
            );
            file.set_len(committed_len)
                .map_err(StoreError::io(&path, "truncating incomplete record"))?;
        }
        if scan.unterminated {
            file.write_all(b"\n")
                .map_err(StoreError::io(&path, "terminating last record"))?;
            committed_len += 1;
        }

        let next_id = scan.records.iter().map(|r| r.id().get()).max().unwrap_or(0) + 1;

        info!(
            path = %path.display(),
            records = scan.records.len(),
            "opened plume archive"
        );

        Ok(Self {
            path,
            cursor: Mutex::new(Cursor {
                next_id,
                committed_len,
            }),
            clock: Box::new(clock),
        })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SimulationStore for JsonLinesStore {
    fn append(
        &self,
        request: SimulationRequest,
        samples: Vec<ConcentrationSample>,
    ) -> Result<SimulationRecord, StoreError> {
        let mut cursor = self.cursor.lock().map_err(|_| StoreError::poisoned())?;

        let id = RecordId::new(cursor.next_id);
        let record = SimulationRecord::new(id, self.clock.now(), request, samples);

        let mut line = serde_json::to_string(&record).map_err(StoreError::Encode)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .write(true)
            .open(&self.path)
            .map_err(StoreError::io(&self.path, "opening archive for append"))?;

        // Anything past the committed length is debris from a write whose
        // rollback also failed.
        file.set_len(cursor.committed_len)
            .and_then(|()| file.seek(SeekFrom::Start(cursor.committed_len)))
            .map_err(StoreError::io(&self.path, "positioning archive for append"))?;

        if let Err(source) = file
            .write_all(line.as_bytes())
            .and_then(|()| file.sync_data())
        {
            if let Err(rollback) = file.set_len(cursor.committed_len) {
                warn!(
                    path = %self.path.display(),
                    %rollback,
                    "failed to roll back partial record"
                );
            }
            return Err(StoreError::io(&self.path, "appending record")(source));
        }

        cursor.next_id += 1;
        cursor.committed_len += line.len() as u64;
        debug!(%id, path = %self.path.display(), "archived plume run");
        Ok(record)
    }

    fn list_recent(&self, limit: usize) -> Result<Vec<SimulationRecord>, StoreError> {
        // Holding the append lock keeps readers off a line that is mid-write.
        let _guard = self.cursor.lock().map_err(|_| StoreError::poisoned())?;
        if limit == 0 {
            return Ok(Vec::new());
        }
        let scan = read_records(&self.path)?;
        Ok(newest_first(&scan.records, limit))
    }
}

/// Decoded contents of an archive file.
#[derive(Debug)]
struct Scan {
    records: Vec<SimulationRecord>,
    /// Byte length up to the end of the last decodable line.
    committed_len: u64,
    /// The last record is missing its line terminator.
    unterminated: bool,
}

/// Reads every record in file order, skipping blank lines.
///
/// An undecodable final line without a terminator is an interrupted write
/// and is skipped with a warning. Any other undecodable line is corrupt.
fn read_records(path: &Path) -> Result<Scan, StoreError> {
    let file = File::open(path).map_err(StoreError::io(path, "opening archive"))?;
    let mut reader = BufReader::new(file);

    let mut scan = Scan {
        records: Vec::new(),
        committed_len: 0,
        unterminated: false,
    };
    let mut line = String::new();
    let mut number = 0;

    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(StoreError::io(path, "reading archive"))?;
        if read == 0 {
            break;
        }
        number += 1;

        let terminated = line.ends_with('\n');
        if line.trim().is_empty() {
            if terminated {
                scan.committed_len += read as u64;
            }
            continue;
        }

        match serde_json::from_str(&line) {
            Ok(record) => {
                scan.records.push(record);
                scan.committed_len += read as u64;
                scan.unterminated = !terminated;
            }
            Err(source) if !terminated => {
                warn!(
                    path = %path.display(),
                    line = number,
                    %source,
                    "skipping incomplete trailing record"
                );
            }
            Err(source) => {
                return Err(StoreError::Corrupt {
                    path: path.to_path_buf(),
                    line: number,
                    source,
                });
            }
        }
    }
    Ok(scan)
}
