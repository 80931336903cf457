//! Lexical sense graph: candidate senses per token, similarity per sense
//! pair.
//!
//! The [`SenseGraph`] trait is the boundary to a real lexical database
//! (WordNet-style). The built-in [`InMemorySenseGraph`] holds a sense
//! inventory and an undirected relation graph; it serves both as the
//! loading target for real sense data and as the test fake.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

/// Opaque identifier for one meaning of a token, e.g. `"cat.n.01"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sense(String);

impl Sense {
    /// Create a sense identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Sense {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sense inventory + sense-pair similarity boundary.
pub trait SenseGraph: Send + Sync {
    /// Candidate senses for a token. Empty when the token is unknown.
    fn senses(&self, token: &str) -> Vec<Sense>;

    /// Similarity of two senses in [0.0, 1.0], or `None` when the graph
    /// cannot relate them.
    ///
    /// `None` is a valid "no relation known" result, distinct from a
    /// near-zero similarity. Callers must not collapse it to 0.0 when
    /// deciding whether any valid similarity was found.
    ///
    /// Symmetry is a property of the implementation, not enforced here.
    /// [`InMemorySenseGraph`] is symmetric by construction.
    fn path_similarity(&self, a: &Sense, b: &Sense) -> Option<f64>;
}

/// In-memory sense graph with builder construction.
///
/// Similarity follows the path metric over an undirected relation graph:
/// `1 / (1 + d)` where `d` is the shortest-path edge count between the two
/// senses, `1.0` for identical senses, `None` when no path exists.
///
/// # Example
///
/// ```rust
/// use parley::lexicon::{InMemorySenseGraph, SenseGraph};
///
/// let graph = InMemorySenseGraph::builder()
///     .senses("cat", ["cat.n.01"])
///     .senses("feline", ["feline.n.01"])
///     .link("cat.n.01", "feline.n.01")
///     .build();
///
/// let cat = &graph.senses("cat")[0];
/// let feline = &graph.senses("feline")[0];
/// assert_eq!(graph.path_similarity(cat, feline), Some(0.5));
/// assert_eq!(graph.path_similarity(cat, cat), Some(1.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySenseGraph {
    inventory: HashMap<String, Vec<Sense>>,
    edges: HashMap<Sense, Vec<Sense>>,
}

impl InMemorySenseGraph {
    /// An empty graph: every token is unknown, every similarity undefined.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start building a graph.
    #[must_use]
    pub fn builder() -> InMemorySenseGraphBuilder {
        InMemorySenseGraphBuilder::default()
    }

    fn shortest_path(&self, from: &Sense, to: &Sense) -> Option<usize> {
        if from == to {
            return Some(0);
        }

        let mut visited: HashSet<&Sense> = HashSet::new();
        let mut queue: VecDeque<(&Sense, usize)> = VecDeque::new();
        visited.insert(from);
        queue.push_back((from, 0));

        while let Some((node, depth)) = queue.pop_front() {
            for neighbor in self.edges.get(node).into_iter().flatten() {
                if neighbor == to {
                    return Some(depth + 1);
                }
                if visited.insert(neighbor) {
                    queue.push_back((neighbor, depth + 1));
                }
            }
        }

        None
    }
}

impl SenseGraph for InMemorySenseGraph {
    fn senses(&self, token: &str) -> Vec<Sense> {
        self.inventory.get(token).cloned().unwrap_or_default()
    }

    fn path_similarity(&self, a: &Sense, b: &Sense) -> Option<f64> {
        self.shortest_path(a, b).map(|d| 1.0 / (1.0 + d as f64))
    }
}

/// Builder for [`InMemorySenseGraph`].
#[derive(Debug, Clone, Default)]
pub struct InMemorySenseGraphBuilder {
    inventory: HashMap<String, Vec<Sense>>,
    edges: HashMap<Sense, Vec<Sense>>,
}

impl InMemorySenseGraphBuilder {
    /// Register candidate senses for a token. Repeated calls append.
    #[must_use]
    pub fn senses<I, S>(mut self, token: &str, senses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Sense>,
    {
        self.inventory
            .entry(token.to_lowercase())
            .or_default()
            .extend(senses.into_iter().map(Into::into));
        self
    }

    /// Add an undirected relation edge between two senses.
    #[must_use]
    pub fn link(mut self, a: impl Into<Sense>, b: impl Into<Sense>) -> Self {
        let (a, b) = (a.into(), b.into());
        self.edges.entry(a.clone()).or_default().push(b.clone());
        self.edges.entry(b).or_default().push(a);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> InMemorySenseGraph {
        InMemorySenseGraph {
            inventory: self.inventory,
            edges: self.edges,
        }
    }
}
