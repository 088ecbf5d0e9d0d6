//! Where expansion tables come from.
//!
//! The orchestrator only needs `TableSource::load`. Implementations:
//!
//! - `CsvTableSource`: reads the CSV pair from a directory on every call
//! - `CachedTableSource`: memoises any source by `TableKey`
//! - `MemoryTableSource`: tables already in memory (embedding, tests)

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::debug;

use crate::domain::{PceTable, TableKey};
use crate::error::AppError;
use crate::io::tables::load_table;

/// Environment variable naming the table directory.
pub const TABLES_DIR_ENV: &str = "PCE_TABLES_DIR";

/// Directory used when neither the CLI nor the environment names one.
pub const DEFAULT_TABLES_DIR: &str = "CSVfiles";

/// Table directory precedence: explicit path, then a non-blank
/// `PCE_TABLES_DIR` value, then `./CSVfiles`.
pub fn resolve_tables_dir(explicit: Option<&Path>, env: Option<String>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    match env {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir.trim()),
        _ => PathBuf::from(DEFAULT_TABLES_DIR),
    }
}

/// Keyed lookup of expansion tables.
pub trait TableSource {
    fn load(&self, key: TableKey) -> Result<Rc<PceTable>, AppError>;
}

/// Reads tables from `PCE_*_BASIS.csv` / `PCE_*_COEFS.csv` under a directory.
#[derive(Debug, Clone)]
pub struct CsvTableSource {
    base_dir: PathBuf,
}

impl CsvTableSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve the table directory from the CLI path and the process
    /// environment (a `.env` file is honoured). See `resolve_tables_dir`.
    pub fn from_env(explicit: Option<&Path>) -> Self {
        if let Some(dir) = explicit {
            return Self::new(dir);
        }
        dotenvy::dotenv().ok();
        Self::new(resolve_tables_dir(None, std::env::var(TABLES_DIR_ENV).ok()))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl TableSource for CsvTableSource {
    fn load(&self, key: TableKey) -> Result<Rc<PceTable>, AppError> {
        load_table(&self.base_dir, key).map(Rc::new)
    }
}

/// Memoising wrapper. Tables are static for the process lifetime, so entries
/// are never invalidated. Failed loads are not cached.
#[derive(Debug)]
pub struct CachedTableSource<S> {
    inner: S,
    cache: RefCell<HashMap<TableKey, Rc<PceTable>>>,
}

impl<S: TableSource> CachedTableSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of tables held.
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: TableSource> TableSource for CachedTableSource<S> {
    fn load(&self, key: TableKey) -> Result<Rc<PceTable>, AppError> {
        if let Some(table) = self.cache.borrow().get(&key) {
            return Ok(Rc::clone(table));
        }

        let table = self.inner.load(key)?;
        debug!(%key, "caching expansion table");
        self.cache.borrow_mut().insert(key, Rc::clone(&table));
        Ok(table)
    }
}

/// Tables supplied directly by the caller.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableSource {
    tables: HashMap<TableKey, Rc<PceTable>>,
}

impl MemoryTableSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: TableKey, table: PceTable) {
        self.tables.insert(key, Rc::new(table));
    }

    pub fn with(mut self, key: TableKey, table: PceTable) -> Self {
        self.insert(key, table);
        self
    }
}

impl TableSource for MemoryTableSource {
    fn load(&self, key: TableKey) -> Result<Rc<PceTable>, AppError> {
        self.tables
            .get(&key)
            .cloned()
            .ok_or_else(|| AppError::unavailable(format!("No table registered for {key}.")))
    }
}
