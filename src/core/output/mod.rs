//! # Output Module
//!
//! Writes the collected numbers as a newline-delimited text file.
//!
//! The file is written to a temporary sibling first and then moved over the
//! destination, so an interrupted run never leaves a half-written list.

use crate::core::extractor::PhoneNumberSet;
use crate::error::OutputError;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write one number per line, in the set's (sorted) order
pub fn write_numbers<W: Write>(mut writer: W, numbers: &PhoneNumberSet) -> io::Result<()> {
    for number in numbers.iter() {
        writeln!(writer, "{}", number)?;
    }
    writer.flush()
}

/// Replace `path` with the sorted list of numbers
pub fn write_numbers_to_file(path: &Path, numbers: &PhoneNumberSet) -> Result<(), OutputError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDirectory {
        path: dir.to_path_buf(),
        source,
    })?;

    let write_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
    write_numbers(BufWriter::new(temp.as_file_mut()), numbers).map_err(write_error)?;

    temp.persist(path).map_err(|e| OutputError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::debug!(path = %path.display(), count = numbers.len(), "wrote numbers");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> PhoneNumberSet {
        ["+56 9 8765 4321", "+51 958-123-456", "+54 9 376 411 0177"]
            .into_iter()
            .collect()
    }

    #[test]
    fn writes_one_number_per_line_sorted() {
        let mut buffer = Vec::new();
        write_numbers(&mut buffer, &sample()).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "+51 958-123-456\n+54 9 376 411 0177\n+56 9 8765 4321\n"
        );
    }

    #[test]
    fn empty_set_writes_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("numeros_extraidos.txt");

        write_numbers_to_file(&path, &PhoneNumberSet::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("numeros_extraidos.txt");
        fs::write(&path, "stale contents that are much longer than the new list\n").unwrap();

        let numbers: PhoneNumberSet = ["+51 958-123-456"].into_iter().collect();
        write_numbers_to_file(&path, &numbers).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "+51 958-123-456\n");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("exports").join("2026").join("numbers.txt");

        write_numbers_to_file(&path, &sample()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 3);
    }

    #[test]
    fn leaves_no_temporary_files_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("numbers.txt");

        write_numbers_to_file(&path, &sample()).unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
