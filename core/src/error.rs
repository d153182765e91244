use std::{io, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("couldn't read grammar from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no `VERSION=<d>.<d>` token in grammar")]
    MissingVersion,
    #[error("no `N=<nodes> L=<arcs>` counts in grammar")]
    MissingCounts,
    #[error("could not exec `{program}` - is graphviz installed and on the PATH?")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("couldn't pipe to `{program}`")]
    Pipe {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{program}` exited with code {code}")]
    DotExit { program: String, code: i32 },
    #[error("`{program}` exited abnormally")]
    DotSignal { program: String },
    #[error("couldn't write image to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
