use crate::store::{Row, RowStore};

/// Result of one CRUD handler invocation. Domain errors are outcomes, not
/// `Err`: the original app reported them as ordinary responses and only the
/// wording distinguished success from failure. The HTTP layer turns these
/// into fragments via `render::render_outcome`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrudOutcome {
    Inserted(Row),
    Selected(Row),
    Updated(Row),
    Deleted(Row),
    /// Field A was empty (or absent) in the request.
    EmptyKey,
    /// Insert found an existing row matching the new key.
    DuplicateKey,
    /// Select/update/delete found no row for the key.
    NotFound,
}

/// Faults the handlers do not translate into user-facing messages: a
/// malformed payload or a failing store terminates the request.
#[derive(Debug, thiserror::Error)]
pub enum CrudError {
    #[error("malformed row payload: {0}")]
    BadPayload(#[from] serde_json::Error),

    #[error("row store failure: {0}")]
    Store(#[from] std::io::Error),
}

fn parse_row(text: &str) -> Result<Row, CrudError> {
    // A JSON string array of any length; arity is not validated.
    let row: Row = serde_json::from_str(text)?;
    Ok(row)
}

fn key_of(row: &Row) -> &str {
    row.first().map(String::as_str).unwrap_or("")
}

/// Inserts a new row. The uniqueness pre-check uses the store's loose
/// (substring) finder, not the exact one; this mirrors the sheet's text
/// finder and is intentionally not tightened. Check-then-append is not
/// atomic.
pub fn insert_data(store: &mut dyn RowStore, text: &str) -> Result<CrudOutcome, CrudError> {
    let row = parse_row(text)?;
    if key_of(&row).is_empty() {
        return Ok(CrudOutcome::EmptyKey);
    }
    if store.find_loose(key_of(&row)).is_some() {
        return Ok(CrudOutcome::DuplicateKey);
    }
    store.append_row(row.clone())?;
    Ok(CrudOutcome::Inserted(row))
}

/// Reads the first row whose field A equals `a`, by scanning the full sheet
/// rather than asking the store's finder. Never mutates.
pub fn select_data(store: &mut dyn RowStore, a: &str) -> Result<CrudOutcome, CrudError> {
    if a.is_empty() {
        return Ok(CrudOutcome::EmptyKey);
    }
    match store.read_all().into_iter().find(|row| key_of(row) == a) {
        Some(row) => Ok(CrudOutcome::Selected(row)),
        None => Ok(CrudOutcome::NotFound),
    }
}

/// Overwrites all fields of an existing row. The target is located by exact
/// match on the *new* field A value, so changing A to a fresh value reports
/// not-found rather than renaming the row.
pub fn update_data(store: &mut dyn RowStore, text: &str) -> Result<CrudOutcome, CrudError> {
    let row = parse_row(text)?;
    if key_of(&row).is_empty() {
        return Ok(CrudOutcome::EmptyKey);
    }
    let Some(position) = store.find_exact(key_of(&row)) else {
        return Ok(CrudOutcome::NotFound);
    };
    store.overwrite_row(position, row.clone())?;
    Ok(CrudOutcome::Updated(row))
}

/// Deletes the row whose field A equals `a`. The row's values are captured
/// through a second, independent full scan before removal, as the original
/// did; the response carries those captured values.
pub fn delete_data(store: &mut dyn RowStore, a: &str) -> Result<CrudOutcome, CrudError> {
    if a.is_empty() {
        return Ok(CrudOutcome::EmptyKey);
    }
    let Some(position) = store.find_exact(a) else {
        return Ok(CrudOutcome::NotFound);
    };
    let Some(values) = store.read_all().into_iter().find(|row| key_of(row) == a) else {
        return Ok(CrudOutcome::NotFound);
    };
    store.delete_row(position)?;
    Ok(CrudOutcome::Deleted(values))
}
