use std::fs;
use std::io;
use std::path::PathBuf;

/// Where lecture documents come from.
pub trait DocumentSource {
    /// Return the full text behind a catalog `file` entry.
    fn fetch(&self, file: &str) -> io::Result<String>;
}

/// Reads documents from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentSource for FsSource {
    fn fetch(&self, file: &str) -> io::Result<String> {
        fs::read_to_string(self.root.join(file))
    }
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn fetch(&self, file: &str) -> io::Result<String> {
        (**self).fetch(file)
    }
}
