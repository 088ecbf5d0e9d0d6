//! Test helpers: throwaway table directories under the system temp dir.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Im, Quantity, Rqi, TableKey};
use crate::io::tables::table_paths;

pub struct TableDir {
    path: PathBuf,
}

impl TableDir {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("pce-test-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, key: TableKey, basis: &str, coefs: &str) {
        let (b, c) = table_paths(&self.path, key);
        fs::write(b, basis).unwrap();
        fs::write(c, coefs).unwrap();
    }

    /// Write all three quantities for `(rqi, im)` with constant expansions
    /// `c1 = 1`, `c2 = 2`, `beta = 3` plus one first-order term each.
    pub fn write_simple_set(&self, rqi: Rqi, im: Im) {
        self.write(
            TableKey::new(Quantity::C1, rqi, im),
            "0,0,0,0\n1,0,0,0\n",
            "1.0\n0.5\n",
        );
        self.write(
            TableKey::new(Quantity::C2, rqi, im),
            "0,0,0,0\n0,0,0,1\n",
            "2.0\n-0.25\n",
        );
        self.write(
            TableKey::new(Quantity::Beta, rqi, im),
            "0,0,0,0\n0,2,1,0\n",
            "3.0\n0.125\n",
        );
    }
}

impl Drop for TableDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
