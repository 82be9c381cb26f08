use std::fmt;
use std::path::PathBuf;

use crate::clique::{VertexId, Weight};

/** the graph or its weights violate the contract of the solver (no repair is attempted) */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGraphInput {
    /// vertex v is adjacent to itself
    SelfLoop(VertexId),
    /// u sees v as a neighbor but v does not see u
    AsymmetricAdjacency(VertexId, VertexId),
    /// vertex v has a weight <= 0
    NonPositiveWeight(VertexId, Weight),
    /// a neighbor id that does not exist in the graph
    VertexOutOfRange {
        /// offending id
        vertex: VertexId,
        /// number of vertices in the graph
        nb_vertices: usize,
    },
    /// there must be exactly one weight per vertex
    WeightCountMismatch {
        /// number of vertices
        expected: usize,
        /// number of weights given
        found: usize,
    },
    /// the sum of all weights does not fit in a Weight
    WeightOverflow,
}

impl fmt::Display for InvalidGraphInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop(v) => write!(f, "vertex {} is adjacent to itself", v),
            Self::AsymmetricAdjacency(u, v) => {
                write!(f, "asymmetric adjacency: {} lists {} as a neighbor but not the converse", u, v)
            }
            Self::NonPositiveWeight(v, w) => write!(f, "vertex {} has a non-positive weight ({})", v, w),
            Self::VertexOutOfRange { vertex, nb_vertices } => {
                write!(f, "vertex {} out of range (graph has {} vertices)", vertex, nb_vertices)
            }
            Self::WeightCountMismatch { expected, found } => {
                write!(f, "expected {} weights, found {}", expected, found)
            }
            Self::WeightOverflow => write!(f, "the total weight of the graph exceeds {}", Weight::MAX),
        }
    }
}

impl std::error::Error for InvalidGraphInput {}

/** invalid generation parameters (rejected before any computation) */
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// the number of vertices must be at least 1
    InvalidVertexCount(usize),
    /// the edge probability must be in [0,1]
    InvalidProbability(f64),
    /// weights are drawn in [min,max] with 1 <= min <= max
    InvalidWeightRange(Weight, Weight),
    /// nb_vertices * max_weight does not fit in a Weight
    WeightOverflow {
        /// number of vertices
        nb_vertices: usize,
        /// maximum vertex weight
        max_weight: Weight,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVertexCount(n) => {
                write!(f, "the number of vertices must be at least 1 (got {})", n)
            }
            Self::InvalidProbability(p) => {
                write!(f, "the edge probability must be between 0 and 1 (got {})", p)
            }
            Self::InvalidWeightRange(lo, hi) => {
                write!(f, "invalid weight range [{}, {}] (expected 1 <= min <= max)", lo, hi)
            }
            Self::WeightOverflow { nb_vertices, max_weight } => {
                write!(f, "{} vertices of weight up to {} may exceed the maximum total weight", nb_vertices, max_weight)
            }
        }
    }
}

impl std::error::Error for ParameterError {}

/** error raised while reading an instance or a solution report */
#[derive(Debug)]
pub enum InstanceReadError {
    /// the file could not be read
    Io(std::io::Error),
    /// a line could not be parsed (line numbers start at 1)
    Parse {
        /// line number
        line: usize,
        /// content of the line
        content: String,
    },
    /// the file ended before the header was read
    MissingHeader,
    /// the file ended before the given line was read
    MissingLine(&'static str),
    /// the header announces more elements than allowed
    TooLarge {
        /// what is counted ("vertices", "edges")
        what: &'static str,
        /// announced count
        value: usize,
        /// largest accepted count
        max: usize,
    },
    /// the header announces a number of elements that does not match the file
    CountMismatch {
        /// what is counted ("vertices", "edges", ...)
        what: &'static str,
        /// announced count
        expected: usize,
        /// count found in the file
        found: usize,
    },
    /// a 1-based vertex id outside [1,n]
    UnknownVertex {
        /// line number
        line: usize,
        /// 1-based id
        vertex: usize,
    },
    /// a vertex weight defined twice
    DuplicateVertex(VertexId),
    /// a vertex without an "n" line
    MissingVertex(VertexId),
    /// an edge listed twice
    DuplicateEdge(VertexId, VertexId),
    /// the graph read does not satisfy the graph contract
    Invalid(InvalidGraphInput),
}

impl fmt::Display for InstanceReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Parse { line, content } => write!(f, "line {}: unable to parse '{}'", line, content),
            Self::MissingHeader => write!(f, "missing header line"),
            Self::MissingLine(what) => write!(f, "missing '{}' line", what),
            Self::TooLarge { what, value, max } => {
                write!(f, "header announces {} {} (at most {} accepted)", value, what, max)
            }
            Self::CountMismatch { what, expected, found } => {
                write!(f, "header announces {} {}, found {}", expected, what, found)
            }
            Self::UnknownVertex { line, vertex } => write!(f, "line {}: unknown vertex {}", line, vertex),
            Self::DuplicateVertex(v) => write!(f, "vertex {} defined twice", v + 1),
            Self::MissingVertex(v) => write!(f, "vertex {} has no weight", v + 1),
            Self::DuplicateEdge(u, v) => write!(f, "edge ({}, {}) listed twice", u + 1, v + 1),
            Self::Invalid(e) => write!(f, "invalid graph: {}", e),
        }
    }
}

impl std::error::Error for InstanceReadError {}

impl From<std::io::Error> for InstanceReadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<InvalidGraphInput> for InstanceReadError {
    fn from(e: InvalidGraphInput) -> Self {
        Self::Invalid(e)
    }
}

/** error raised while writing a file. Nothing is left at the destination path. */
#[derive(Debug)]
pub struct ExportError {
    /// destination path
    pub path: PathBuf,
    /// underlying error
    pub source: std::io::Error,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unable to write {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
