use core::fmt;
use std::{
    ffi::OsString,
    io::Write as _,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use graphviz_rust::printer::{DotPrinter as _, PrinterContext};
use tracing::{debug, info};

use crate::{graph::GrammarGraph, Error, Result};

/// The image types `dot` is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Svg,
    Png,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Svg => "svg",
            Format::Png => "png",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// `<base>multi.<ext>`.
///
/// There is deliberately no separator, so `grammar.slf` renders to
/// `grammar.slfmulti.svg`.
pub fn output_path(base: impl AsRef<Path>, format: Format) -> PathBuf {
    let mut path = OsString::from(base.as_ref());
    path.push("multi.");
    path.push(format.extension());
    PathBuf::from(path)
}

/// Shells out to graphviz.
#[derive(Debug, Clone)]
pub struct Renderer {
    program: OsString,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new("dot")
    }
}

impl Renderer {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Lay out `graph` and write it to [`output_path`].
    ///
    /// Nothing is written unless `dot` succeeds.
    pub fn render(
        &self,
        graph: &GrammarGraph<'_>,
        format: Format,
        base: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let path = output_path(base, format);
        let image = self.call_dot(
            &graph.dot().print(&mut PrinterContext::default()),
            format,
        )?;
        std::fs::write(&path, image).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "wrote image");
        Ok(path)
    }

    /// Pipe `source` through `dot -T<format>`, returning the image.
    pub fn call_dot(&self, source: &str, format: Format) -> Result<Vec<u8>> {
        let program = self.program.to_string_lossy().into_owned();
        debug!(%program, %format, "calling dot");
        let mut child = Command::new(&self.program)
            .arg(format!("-T{format}"))
            .stdin(Stdio::piped())
            .stderr(Stdio::inherit())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| Error::Spawn {
                program: program.clone(),
                source,
            })?;
        let pipe = |source| Error::Pipe {
            program: program.clone(),
            source,
        };
        // dropping stdin closes it, so `dot` sees EOF
        child
            .stdin
            .take()
            .expect("stdin was piped")
            .write_all(source.as_bytes())
            .map_err(pipe)?;
        let output = child.wait_with_output().map_err(pipe)?;
        match output.status.code() {
            Some(0) => Ok(output.stdout),
            Some(code) => Err(Error::DotExit { program, code }),
            None => Err(Error::DotSignal { program }),
        }
    }
}
