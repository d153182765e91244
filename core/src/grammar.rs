use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use regex::Regex;
use tracing::{debug, warn};

use crate::{Error, Result};

/// The label HTK gives to states with no word attached.
pub const NULL: &str = "!NULL";

/// The header of a grammar network.
///
/// The counts are what the file claims, and are never checked against what was
/// actually parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// The `<d>.<d>` digits only, not the whole `VERSION=<d>.<d>` token.
    pub version: String,
    /// `N=`, or [`None`] if it doesn't fit in a [`usize`].
    pub nodes: Option<usize>,
    /// `L=`, or [`None`] if it doesn't fit in a [`usize`].
    pub arcs: Option<usize>,
}

/// A directed transition, `S=` -> `E=`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arc {
    pub start: String,
    pub end: String,
}

impl Arc {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A parsed grammar network.
#[derive(Debug, Clone)]
pub struct Grammar {
    path: Option<PathBuf>,
    metadata: Metadata,
    /// `I=` -> `W=`.
    nodes: BTreeMap<String, String>,
    /// In document order, may reference ids that aren't in `nodes`.
    arcs: Vec<Arc>,
}

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("pattern is a valid regex"))
}

fn version_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    regex(&CELL, r"VERSION=(\d\.\d)")
}

fn meta_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    regex(&CELL, r"N=(\d+)\s+L=(\d+)")
}

fn state_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    regex(&CELL, r"I=(\d+)\s+W=([a-zA-Z!]+)")
}

fn arc_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    regex(&CELL, r"J=\d+\s+S=(\d+)\s+E=(\d+)")
}

fn count(text: &str) -> Option<usize> {
    match text.parse() {
        Ok(count) => Some(count),
        Err(error) => {
            warn!(%text, %error, "ignoring declared count");
            None
        }
    }
}

impl Grammar {
    /// Read the whole file at `path` and [parse](Self::parse) it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_owned(),
            source,
        })?;
        let mut grammar = Self::parse(&document)?;
        grammar.path = Some(path.to_owned());
        Ok(grammar)
    }

    /// Pull the header, states and arcs out of `document`.
    ///
    /// Only the header is required.
    /// Anything that doesn't look like a state or an arc is ignored.
    pub fn parse(document: &str) -> Result<Self> {
        let version = version_pattern()
            .captures(document)
            .ok_or(Error::MissingVersion)?[1]
            .to_owned();
        let meta = meta_pattern()
            .captures(document)
            .ok_or(Error::MissingCounts)?;
        let metadata = Metadata {
            version,
            nodes: count(&meta[1]),
            arcs: count(&meta[2]),
        };

        let nodes = state_pattern()
            .captures_iter(document)
            .map(|it| (it[1].to_owned(), it[2].to_owned()))
            .collect::<BTreeMap<_, _>>();
        let arcs = arc_pattern()
            .captures_iter(document)
            .map(|it| Arc::new(&it[1], &it[2]))
            .collect::<Vec<_>>();

        debug!(
            version = %metadata.version,
            nodes = nodes.len(),
            arcs = arcs.len(),
            "parsed grammar"
        );
        if metadata.nodes != Some(nodes.len()) || metadata.arcs != Some(arcs.len()) {
            warn!(
                declared.nodes = ?metadata.nodes,
                declared.arcs = ?metadata.arcs,
                parsed.nodes = nodes.len(),
                parsed.arcs = arcs.len(),
                "declared counts don't match the grammar body"
            );
        }

        Ok(Self {
            path: None,
            metadata,
            nodes,
            arcs,
        })
    }

    /// Where this grammar was [loaded](Self::load) from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
    /// State id -> word.
    pub fn nodes(&self) -> &BTreeMap<String, String> {
        &self.nodes
    }
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }
    /// Ids of the states labelled [`NULL`].
    pub fn null_nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .filter_map(|(id, label)| (label == NULL).then_some(id.as_str()))
    }
}
