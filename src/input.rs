//! Common routines for handling input data.
use crate::id::{HasID, IDLike};
use anyhow::{ensure, Context, Result};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub mod cost;
pub mod region;

/// The standard error message for a failed read of the given file
pub fn input_err_msg<P: AsRef<Path>>(file_path: P) -> String {
    format!("Error reading {}", file_path.as_ref().display())
}

/// Read a series of type `T`s from a CSV file into memory.
///
/// # Arguments
///
/// * `file_path` - Path to the CSV file
pub fn read_csv<T: DeserializeOwned>(file_path: &Path) -> Result<impl Iterator<Item = T>> {
    let reader = csv::Reader::from_path(file_path).with_context(|| input_err_msg(file_path))?;
    let records = reader
        .into_deserialize()
        .collect::<Result<Vec<T>, _>>()
        .with_context(|| input_err_msg(file_path))?;
    ensure!(
        !records.is_empty(),
        "CSV file {} cannot be empty",
        file_path.display()
    );

    Ok(records.into_iter())
}

/// Read a CSV file of items with IDs into a map keyed by ID.
///
/// # Arguments
///
/// * `file_path` - Path to the CSV file
pub fn read_csv_id_file<T, ID>(file_path: &Path) -> Result<IndexMap<ID, T>>
where
    T: HasID<ID> + DeserializeOwned,
    ID: IDLike,
{
    let mut map = IndexMap::new();
    for record in read_csv::<T>(file_path)? {
        let id = record.get_id().clone();
        ensure!(
            map.insert(id.clone(), record).is_none(),
            "Duplicate ID {} in {}",
            id,
            file_path.display()
        );
    }

    Ok(map)
}

/// Parse a TOML file at the specified path.
///
/// # Arguments
///
/// * `file_path` - Path to the TOML file
pub fn read_toml<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let contents = fs::read_to_string(file_path).with_context(|| input_err_msg(file_path))?;
    toml::from_str(&contents).with_context(|| input_err_msg(file_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;
    use serde::Deserialize;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        id: String,
        value: u32,
    }

    fn create_csv_file(dir_path: &Path, contents: &str) -> PathBuf {
        let file_path = dir_path.join("test.csv");
        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "{contents}").unwrap();
        file_path
    }

    #[test]
    fn test_read_csv() {
        let dir = tempdir().unwrap();
        let file_path = create_csv_file(dir.path(), "id,value\nhello,1\nworld,2");
        let records: Vec<Record> = read_csv(&file_path).unwrap().collect();
        assert_eq!(
            records,
            [
                Record {
                    id: "hello".to_string(),
                    value: 1
                },
                Record {
                    id: "world".to_string(),
                    value: 2
                }
            ]
        );
    }

    #[test]
    fn test_read_csv_empty_file() {
        let dir = tempdir().unwrap();
        let file_path = create_csv_file(dir.path(), "id,value");
        assert!(read_csv::<Record>(&file_path).is_err());
    }

    #[test]
    fn test_read_csv_missing_file() {
        let dir = tempdir().unwrap();
        assert!(read_csv::<Record>(&dir.path().join("nope.csv")).is_err());
    }

    #[test]
    fn test_read_csv_id_file_duplicate_id() {
        let dir = tempdir().unwrap();
        let file_path = create_csv_file(dir.path(), "id,description\nCH,Switzerland\nCH,Again");
        assert!(read_csv_id_file::<Region, _>(&file_path).is_err());
    }

    #[test]
    fn test_read_toml() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Table {
            value: u32,
        }

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.toml");
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "value = 42").unwrap();
        }
        assert_eq!(read_toml::<Table>(&file_path).unwrap(), Table { value: 42 });

        // Invalid TOML
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "value =").unwrap();
        }
        assert!(read_toml::<Table>(&file_path).is_err());
    }
}
