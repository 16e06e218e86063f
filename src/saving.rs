use bincode::{deserialize_from, serialize_into};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::fs::File;
use std::path::Path;

use crate::store::Row;

pub fn save_rows(rows: &[Row], path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut writer = std::io::BufWriter::new(encoder);

    serialize_into(&mut writer, rows)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    Ok(())
}

pub fn load_rows(path: &Path) -> std::io::Result<Vec<Row>> {
    let file = File::open(path)?;
    let decoder = GzDecoder::new(file);
    let mut reader = std::io::BufReader::new(decoder);

    let rows: Vec<Row> = deserialize_from(&mut reader)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_preserves_rows_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.bin.gz");

        let rows = vec![
            vec!["a".to_string(), "1".to_string(), "2".to_string()],
            vec!["b".to_string()],
            vec![],
        ];
        save_rows(&rows, &path).unwrap();

        assert_eq!(load_rows(&path).unwrap(), rows);
    }

    #[test]
    fn load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.bin.gz");
        std::fs::write(&path, b"not a gzip stream").unwrap();

        assert!(load_rows(&path).is_err());
    }
}
