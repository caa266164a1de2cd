use std::fs;
use std::io;
use std::path::Path;

/// Reads a whole file into memory.
///
/// Injected into [`crate::Document`] so tests can substitute reads without
/// touching the filesystem. Errors are returned as-is to the caller.
pub trait FileReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

impl<F> FileReader for F
where
    F: Fn(&Path) -> io::Result<Vec<u8>>,
{
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self(path)
    }
}

/// Reads from the local filesystem with [`std::fs::read`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}
