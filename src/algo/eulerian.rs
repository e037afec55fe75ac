/*!
# Eulerian Paths

A walk traversing every edge exactly once exists iff the graph is connected and has either no
(cycle) or exactly two (path) vertices of odd degree. [`Eulerian::find_eulerian_path`] builds
such a walk with Hierholzer's circuit splicing on top of [`RemainingEdges`].
*/

use fixedbitset::FixedBitSet;
use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

pub trait Eulerian: AdjacencyList + Sized {
    /// Validates the graph and classifies it by connectivity and degree parity
    fn analyze_eulerian(&self) -> Result<EulerianReport>
    where
        Self: StaticGraph,
    {
        self.validate_graph()?;

        let degrees = self.degrees().collect_vec();
        let odd_degree_vertices = self.vertices_with_odd_degree().collect_vec();

        let reason = if !self.is_connected() {
            EulerianReason::Disconnected
        } else {
            match odd_degree_vertices.len() {
                0 => EulerianReason::AllDegreesEven,
                2 => EulerianReason::TwoOddVertices,
                count => EulerianReason::TooManyOddVertices {
                    count: count as NumNodes,
                },
            }
        };

        debug!(
            n = self.number_of_nodes(),
            m = self.number_of_edges(),
            odd = odd_degree_vertices.len(),
            reason = reason.code(),
            "eulerian analyzed"
        );

        Ok(EulerianReport::new(reason, odd_degree_vertices, degrees))
    }

    /// Returns a walk using every edge exactly once, or `None` if none exists.
    ///
    /// If all degrees are even, the walk is closed and starts at the smallest vertex; otherwise it
    /// runs from the smaller to the larger odd-degree vertex. Whenever several unused edges are
    /// available, the one to the smallest neighbor is taken. The empty graph yields an empty walk.
    fn find_eulerian_path(&self) -> Result<Option<Vec<Node>>>
    where
        Self: StaticGraph,
    {
        let report = self.analyze_eulerian()?;
        if !report.has_path {
            return Ok(None);
        }

        let start = match report.reason {
            EulerianReason::TwoOddVertices => report.odd_degree_vertices.first().copied(),
            _ => self.vertices().next(),
        };

        let Some(start) = start else {
            return Ok(Some(Vec::new()));
        };

        Ok(Some(Hierholzer::new(self).compute(start)))
    }
}

impl<G: AdjacencyList> Eulerian for G {}

/// The edges of a graph not yet used by a walk.
///
/// Every vertex keeps its incident edges sorted by neighbor together with a cursor to the first
/// possibly unused entry. Entries before the cursor are used, so removing an edge and asking
/// whether a vertex has unused edges left both take amortized constant time.
#[derive(Debug, Clone)]
pub struct RemainingEdges {
    incidences: Vec<Vec<(Node, usize)>>,
    cursors: Vec<usize>,
    used: FixedBitSet,
    num_unused: usize,
}

impl RemainingEdges {
    /// Marks every edge of the graph as unused
    pub fn new<G: AdjacencyList>(graph: &G) -> Self {
        let mut incidences = vec![Vec::new(); graph.len()];
        let mut num_edges = 0;

        for (id, Edge(u, v)) in graph.edges(true).enumerate() {
            incidences[u as usize].push((v, id));
            incidences[v as usize].push((u, id));
            num_edges += 1;
        }

        for inc in &mut incidences {
            inc.sort_unstable();
        }

        Self {
            cursors: vec![0; incidences.len()],
            incidences,
            used: FixedBitSet::with_capacity(num_edges),
            num_unused: num_edges,
        }
    }

    /// Number of edges not used yet
    pub fn len(&self) -> usize {
        self.num_unused
    }

    pub fn is_empty(&self) -> bool {
        self.num_unused == 0
    }

    /// Returns *true* if `u` has at least one unused incident edge
    pub fn has_unused(&mut self, u: Node) -> bool {
        self.first_unused(u).is_some()
    }

    /// Marks the unused edge from `u` to its smallest neighbor as used and returns that neighbor
    pub fn take_lowest(&mut self, u: Node) -> Option<Node> {
        let (v, id) = self.first_unused(u)?;
        self.used.insert(id);
        self.num_unused -= 1;
        Some(v)
    }

    /// Follows the smallest unused edge from `start` until the current vertex has none left and
    /// returns the visited vertices including `start`
    pub fn walk_from(&mut self, start: Node) -> Vec<Node> {
        let mut walk = vec![start];
        let mut u = start;
        while let Some(v) = self.take_lowest(u) {
            walk.push(v);
            u = v;
        }
        walk
    }

    fn first_unused(&mut self, u: Node) -> Option<(Node, usize)> {
        let inc = &self.incidences[u as usize];
        let cursor = &mut self.cursors[u as usize];

        while let Some(&(v, id)) = inc.get(*cursor) {
            if !self.used.contains(id) {
                return Some((v, id));
            }
            *cursor += 1;
        }

        None
    }
}

/// Marks the end of a [`Hierholzer`] path
const END_OF_PATH: usize = usize::MAX;

/// Hierholzer's algorithm. Assumes the graph is connected and that the start vertex is
/// admissible, i.e. either all degrees are even or `start` has odd degree.
///
/// The path is kept as a singly linked list over slots (`nodes[i]` followed by `nodes[next[i]]`),
/// so splicing a sub-circuit in after a slot takes time linear in the sub-circuit only.
struct Hierholzer {
    remaining: RemainingEdges,
    nodes: Vec<Node>,
    next: Vec<usize>,
}

impl Hierholzer {
    fn new<G: AdjacencyList>(graph: &G) -> Self {
        let remaining = RemainingEdges::new(graph);
        // every edge is traversed once, so the walk has one more slot than there are edges
        let capacity = remaining.len() + 1;
        Self {
            remaining,
            nodes: Vec::with_capacity(capacity),
            next: Vec::with_capacity(capacity),
        }
    }

    /// Appends `walk` after slot `at` (or as the whole path if there is no slot yet)
    fn link_after(&mut self, at: Option<usize>, walk: &[Node]) {
        let after = at.map_or(END_OF_PATH, |slot| self.next[slot]);
        let mut prev = at;

        for &u in walk {
            let slot = self.nodes.len();
            self.nodes.push(u);
            self.next.push(END_OF_PATH);
            if let Some(prev) = prev {
                self.next[prev] = slot;
            }
            prev = Some(slot);
        }

        if let Some(prev) = prev {
            self.next[prev] = after;
        }
    }

    fn compute(mut self, start: Node) -> Vec<Node> {
        // With an odd start, the first walk gets stuck at the other odd vertex. Afterwards every
        // vertex has an even number of unused edges, so every sub-walk closes at its start.
        let walk = self.remaining.walk_from(start);
        self.link_after(None, &walk);

        // Slots before `pos` have no unused edges; this only ever becomes more true
        let mut pos = 0;
        while !self.remaining.is_empty() {
            while pos != END_OF_PATH && !self.remaining.has_unused(self.nodes[pos]) {
                pos = self.next[pos];
            }
            if pos == END_OF_PATH {
                break;
            }

            // replacing the slot by the closed circuit equals inserting all but its first vertex
            let circuit = self.remaining.walk_from(self.nodes[pos]);
            debug_assert_eq!(circuit.first(), circuit.last());
            trace!(at = self.nodes[pos], len = circuit.len() - 1, "splice sub-circuit");

            self.link_after(Some(pos), &circuit[1..]);
        }

        debug_assert!(self.remaining.is_empty(), "graph must be connected");

        let mut path = Vec::with_capacity(self.nodes.len());
        let mut slot = 0;
        while slot != END_OF_PATH {
            path.push(self.nodes[slot]);
            slot = self.next[slot];
        }
        path
    }
}
