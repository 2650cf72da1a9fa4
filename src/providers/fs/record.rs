use crate::{
    errors::{AppError, IOError},
    shapes::LineCodec,
};
use std::path::Path;
use tokio::fs::{read_to_string, write};

/// Reads a whole line-oriented record file. A malformed line aborts the
/// load with the file name and 1-based line number attached.
pub async fn read_records<T: LineCodec>(path: &Path, file_name: &str) -> Result<Vec<T>, AppError> {
    let content = read_to_string(path)
        .await
        .map_err(|e| AppError::IO(IOError::Msg(format!("could not open '{}': {}", path.display(), e))))?;
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| {
            T::from_line(line).map_err(|e| AppError::MalformedRecord {
                file: file_name.to_string(),
                line: i + 1,
                source: e,
            })
        })
        .collect()
}

/// Rewrites the whole backing file from the in-memory collection,
/// truncating prior contents. Every line is newline-terminated.
pub async fn write_records<T: LineCodec>(path: &Path, records: &[T]) -> Result<(), AppError> {
    let mut content = String::new();
    for record in records {
        content.push_str(&record.to_line());
        content.push('\n');
    }
    write(path, content)
        .await
        .map_err(|e| AppError::IO(IOError::from(e)))
}
