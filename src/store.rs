//! Persistent AM and PM layouts, shared between the editor and viewers.
//!
//! The editor is the only writer. Viewers (a widget, a second process) open
//! the same storage read-only and may lag behind until they [`reload`].
//!
//! [`reload`]: PositionStore::reload

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use time::OffsetDateTime;

use crate::angle::normalize;
use crate::prelude::*;

/// Named byte records in storage both the editor and its viewers can reach.
pub trait PositionBackend {
    /// `Ok(None)` when the record has never been written.
    fn load(&self, record: &str) -> Result<Option<Vec<u8>>, ClockError>;

    /// Replaces the record. Readers see either the old or the new bytes, never a mix.
    fn save(&mut self, record: &str, bytes: &[u8]) -> Result<(), ClockError>;
}

/// One `<record>.json` file per layout inside a shared directory.
#[derive(Clone, Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> FileBackend {
        FileBackend { dir: dir.into() }
    }

    /// Like [`FileBackend::new`], creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<FileBackend, ClockError> {
        let backend = FileBackend::new(dir);
        std::fs::create_dir_all(&backend.dir).map_err(|err| {
            ClockError::ConfigError(format!(
                "Could not create store directory {}: {}",
                backend.dir.display(),
                err
            ))
        })?;
        Ok(backend)
    }

    pub fn record_path(&self, record: &str) -> PathBuf {
        self.dir.join(format!("{record}.json"))
    }
}

impl PositionBackend for FileBackend {
    fn load(&self, record: &str) -> Result<Option<Vec<u8>>, ClockError> {
        match std::fs::read(self.record_path(record)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, record: &str, bytes: &[u8]) -> Result<(), ClockError> {
        // written beside the target so the final rename stays on one filesystem
        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(bytes)?;
        staged.as_file().sync_all()?;
        staged
            .persist(self.record_path(record))
            .map_err(|err| ClockError::Persist(err.to_string()))?;
        Ok(())
    }
}

/// Records kept in process memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    records: HashMap<String, Vec<u8>>,
}

impl MemoryBackend {
    pub fn new() -> MemoryBackend {
        MemoryBackend::default()
    }

    pub fn with_record(mut self, record: &str, bytes: impl Into<Vec<u8>>) -> MemoryBackend {
        self.records.insert(record.to_string(), bytes.into());
        self
    }

    pub fn record(&self, record: &str) -> Option<&[u8]> {
        self.records.get(record).map(Vec::as_slice)
    }
}

impl PositionBackend for MemoryBackend {
    fn load(&self, record: &str) -> Result<Option<Vec<u8>>, ClockError> {
        Ok(self.records.get(record).cloned())
    }

    fn save(&mut self, record: &str, bytes: &[u8]) -> Result<(), ClockError> {
        self.records.insert(record.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// Result of reading one mode's record.
enum Loaded {
    Found(PositionSet),
    Missing,
    Unreadable,
}

fn load_record<B: PositionBackend>(backend: &B, mode: ClockMode) -> Loaded {
    let record = mode.record_name();
    match backend.load(record) {
        Ok(Some(bytes)) => match PositionSet::from_json(&bytes) {
            Ok(positions) => {
                debug!("Loaded {} positions from {}", mode, record);
                if !positions.respects_spacing() {
                    warn!("{} markers in {} are crowded or out of order", mode, record);
                }
                Loaded::Found(positions)
            }
            Err(err) => {
                warn!("Ignoring {}, using default positions: {}", record, err);
                Loaded::Unreadable
            }
        },
        Ok(None) => Loaded::Missing,
        Err(err) => {
            warn!("Could not read {}, using default positions: {}", record, err);
            Loaded::Unreadable
        }
    }
}

/// AM and PM hour layouts plus the mode currently being edited.
pub struct PositionStore<B> {
    backend: B,
    am: PositionSet,
    pm: PositionSet,
    mode: ClockMode,
    read_only: bool,
}

impl<B: PositionBackend> PositionStore<B> {
    /// Opens the store for editing.
    ///
    /// Missing records are created with the even layout so every later read
    /// sees the same thing. Unreadable records fall back to the even layout
    /// in memory and are left alone until the next edit replaces them.
    /// The edited mode starts as the half of the day `now` falls in.
    pub fn open(backend: B, now: OffsetDateTime) -> PositionStore<B> {
        let mut store = PositionStore::with_backend(backend, now, false);
        for mode in [ClockMode::Am, ClockMode::Pm] {
            match load_record(&store.backend, mode) {
                Loaded::Found(positions) => *store.positions_mut(mode) = positions,
                Loaded::Missing => {
                    debug!("No {} positions stored yet, writing defaults", mode);
                    if let Err(err) = store.persist(mode) {
                        error!("Failed to store default {} positions: {}", mode, err);
                    }
                }
                Loaded::Unreadable => {}
            }
        }
        store
    }

    /// Opens the store without write access, for widgets and previews.
    pub fn viewer(backend: B, now: OffsetDateTime) -> PositionStore<B> {
        let mut store = PositionStore::with_backend(backend, now, true);
        store.reload();
        store
    }

    fn with_backend(backend: B, now: OffsetDateTime, read_only: bool) -> PositionStore<B> {
        PositionStore {
            backend,
            am: PositionSet::even(),
            pm: PositionSet::even(),
            mode: ClockMode::from_time(now),
            read_only,
        }
    }

    /// Re-reads both layouts, picking up whatever the editor last wrote.
    pub fn reload(&mut self) {
        for mode in [ClockMode::Am, ClockMode::Pm] {
            *self.positions_mut(mode) = match load_record(&self.backend, mode) {
                Loaded::Found(positions) => positions,
                Loaded::Missing | Loaded::Unreadable => PositionSet::even(),
            };
        }
    }

    pub fn get(&self, mode: ClockMode) -> PositionSet {
        match mode {
            ClockMode::Am => self.am,
            ClockMode::Pm => self.pm,
        }
    }

    /// Moves one marker in `mode`'s layout and writes that layout back.
    ///
    /// The in-memory layout is updated even when the write fails. The anchor
    /// can't move, asking to is a no-op. Non-finite angles are refused and
    /// leave the layout untouched.
    pub fn set(&mut self, mode: ClockMode, hour: Hour, angle: Degrees) -> Result<(), ClockError> {
        if self.read_only {
            return Err(ClockError::ReadOnly);
        }
        if !angle.is_finite() {
            warn!("Refusing to move hour {} to {}", hour, angle);
            return Err(ClockError::InvalidAngle(angle));
        }
        if !self.positions_mut(mode).set(hour, normalize(angle)) {
            warn!("Hour {} is the fixed anchor and can't be moved", hour);
            return Ok(());
        }
        self.persist(mode)
    }

    pub fn current_mode(&self) -> ClockMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ClockMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> ClockMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Layout for the mode being edited.
    pub fn editing_positions(&self) -> PositionSet {
        self.get(self.mode)
    }

    /// Layout the hands should follow at `time`, chosen by the wall clock and
    /// not by the edited mode.
    pub fn display_positions(&self, time: OffsetDateTime) -> PositionSet {
        self.get(ClockMode::from_time(time))
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn positions_mut(&mut self, mode: ClockMode) -> &mut PositionSet {
        match mode {
            ClockMode::Am => &mut self.am,
            ClockMode::Pm => &mut self.pm,
        }
    }

    fn persist(&mut self, mode: ClockMode) -> Result<(), ClockError> {
        let bytes = self.get(mode).to_json()?;
        self.backend
            .save(mode.record_name(), &bytes)
            .inspect_err(|err| error!("Failed to save {} positions: {}", mode, err))?;
        debug!("Saved {} positions to {}", mode, mode.record_name());
        Ok(())
    }
}
