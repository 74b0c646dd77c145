use std::fs::File;
use std::io::Write;

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
#[error("failed to write {path}: {source}")]
pub struct Error {
    path: String,
    #[source]
    source: std::io::Error,
}

/// Writes the document to `path`, creating or truncating it. The file
/// handle is released on every exit path; nothing is guaranteed about
/// the file's content after a failed write.
pub fn write(path: &str, content: &str) -> Result<(), Error> {
    let wrap = |source| Error {
        path: path.to_string(),
        source,
    };

    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(content.as_bytes()).map_err(wrap)?;

    debug!(path = path, bytes = content.len(), "document written");

    Ok(())
}
