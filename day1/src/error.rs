use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to open `{}`", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read input")]
    Read(#[source] io::Error),
    #[error("line {line}: expected 2 values, found {found}")]
    UnpairedLine { line: usize, found: usize },
}
