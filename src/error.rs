use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("not an ELF file: bad magic bytes")]
    InvalidMagic,
    #[error("unsupported ELF class: {0}")]
    UnsupportedClass(String),
    #[error("ELF header is truncated")]
    TruncatedHeader,
    #[error("section header {0} is truncated")]
    TruncatedSectionHeader(usize),
    #[error("section link {index} is out of range ({count} sections)")]
    MalformedSectionLink { index: usize, count: usize },
    #[error("no dynamic symbol table found")]
    NoDynamicSymbolTable,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reads exactly `buf.len()` bytes, mapping a short read to the given
/// structural error instead of a bare io error.
pub(crate) fn read_or_truncated<R: io::Read>(input: &mut R, buf: &mut [u8], truncated: Error) -> Result<()> {
    match input.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Err(truncated),
        Err(err) => Err(Error::Io(err)),
    }
}
