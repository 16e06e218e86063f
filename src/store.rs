use std::io;
use std::path::{Path, PathBuf};

use crate::saving;

/// One record in the sheet. Fields are conventionally labeled A, B, C with
/// field A acting as the key, but arity is deliberately not enforced: a row
/// parsed from a shorter or longer payload is stored and rendered as-is.
pub type Row = Vec<String>;

/// Row-level primitives over the tabular store. Positions are discovered by
/// linear scan and never cached; a delete shifts all later positions up by
/// one, so no position survives a mutation.
pub trait RowStore {
    /// First row whose field A equals `key` exactly (whole-cell,
    /// case-sensitive). Used by update and delete.
    fn find_exact(&self, key: &str) -> Option<usize>;

    /// First row whose field A *contains* `key`. This is a looser match than
    /// `find_exact` and is only used by insert's uniqueness pre-check,
    /// matching the observed behavior of the sheet's text finder.
    fn find_loose(&self, key: &str) -> Option<usize>;

    /// Appends a row at the end of the sheet.
    fn append_row(&mut self, row: Row) -> io::Result<()>;

    /// Every row in storage order.
    fn read_all(&self) -> Vec<Row>;

    /// Replaces all fields of the row at `position`.
    fn overwrite_row(&mut self, position: usize, row: Row) -> io::Result<()>;

    /// Removes the row at `position`; later rows shift up.
    fn delete_row(&mut self, position: usize) -> io::Result<()>;
}

/// The concrete sheet: an ordered row list, optionally persisted to a
/// gzip-compressed binary file after every mutation. Opened once at startup
/// and held behind the app state mutex for the process lifetime.
pub struct SheetStore {
    rows: Vec<Row>,
    path: Option<PathBuf>,
}

impl SheetStore {
    /// A store with no backing file. Used by tests and `--ephemeral` runs.
    pub fn in_memory() -> Self {
        SheetStore {
            rows: Vec::new(),
            path: None,
        }
    }

    /// Opens the store backed by `path`, loading existing rows if the file
    /// is present and starting empty otherwise.
    pub fn open(path: &Path) -> io::Result<Self> {
        let rows = if path.exists() {
            saving::load_rows(path)?
        } else {
            Vec::new()
        };
        Ok(SheetStore {
            rows,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn persist(&self) -> io::Result<()> {
        match &self.path {
            Some(path) => saving::save_rows(&self.rows, path),
            None => Ok(()),
        }
    }

    fn field_a(row: &Row) -> &str {
        row.first().map(String::as_str).unwrap_or("")
    }
}

impl RowStore for SheetStore {
    fn find_exact(&self, key: &str) -> Option<usize> {
        self.rows.iter().position(|row| Self::field_a(row) == key)
    }

    fn find_loose(&self, key: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| Self::field_a(row).contains(key))
    }

    fn append_row(&mut self, row: Row) -> io::Result<()> {
        self.rows.push(row);
        self.persist()
    }

    fn read_all(&self) -> Vec<Row> {
        self.rows.clone()
    }

    fn overwrite_row(&mut self, position: usize, row: Row) -> io::Result<()> {
        if position >= self.rows.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("row position {} out of range", position),
            ));
        }
        self.rows[position] = row;
        self.persist()
    }

    fn delete_row(&mut self, position: usize) -> io::Result<()> {
        if position >= self.rows.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("row position {} out of range", position),
            ));
        }
        self.rows.remove(position);
        self.persist()
    }
}
