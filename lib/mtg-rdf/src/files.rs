use crate::MtgRdfError;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Creates the parent directory of `path` if it does not exist yet.
pub(crate) fn create_parent_dir(path: &Path) -> Result<(), MtgRdfError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| MtgRdfError::io("create directory", parent, e)),
        _ => Ok(()),
    }
}

/// Flushes the buffer and waits until the file has reached the disk.
pub(crate) fn close_file_writer(writer: BufWriter<File>) -> io::Result<()> {
    let mut file = writer
        .into_inner()
        .map_err(io::IntoInnerError::into_error)?;
    file.flush()?;
    file.sync_all()
}

/// Returns the sibling of `path` that receives the content before it replaces `path`.
pub(crate) fn partial_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".partial");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_path_appends_suffix() {
        assert_eq!(
            partial_path(Path::new("data/mtg-rdf.ttl")),
            Path::new("data/mtg-rdf.ttl.partial")
        );
    }
}
