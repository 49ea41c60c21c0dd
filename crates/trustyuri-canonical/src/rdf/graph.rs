use super::term::Quad;

/// A collection of quads.
///
/// Storage is a plain vector; call [`Graph::dedupe`] for set semantics and
/// [`Graph::sort`] for a deterministic order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    quads: Vec<Quad>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quad to the graph
    pub fn add(&mut self, quad: Quad) {
        self.quads.push(quad);
    }

    /// Get the number of quads
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Iterate over quads
    pub fn iter(&self) -> impl Iterator<Item = &Quad> {
        self.quads.iter()
    }

    /// Sort quads by graph, subject, predicate, object
    pub fn sort(&mut self) {
        self.quads.sort();
    }

    /// Sort and remove duplicate quads
    pub fn dedupe(&mut self) {
        self.quads.sort();
        self.quads.dedup();
    }

    /// Get a reference to the quads
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Get all quads (consuming the graph)
    pub fn into_quads(self) -> Vec<Quad> {
        self.quads
    }
}

impl FromIterator<Quad> for Graph {
    fn from_iter<I: IntoIterator<Item = Quad>>(iter: I) -> Self {
        Self {
            quads: iter.into_iter().collect(),
        }
    }
}

impl Extend<Quad> for Graph {
    fn extend<I: IntoIterator<Item = Quad>>(&mut self, iter: I) {
        self.quads.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Quad;
    type IntoIter = std::slice::Iter<'a, Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads.iter()
    }
}
