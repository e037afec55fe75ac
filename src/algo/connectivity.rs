use std::iter::FusedIterator;

use itertools::Itertools;
use tracing::debug;

use super::*;

pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the connected components of the graph. Components are emitted in
    /// ascending order of their smallest vertex; each component is sorted. Isolated vertices form
    /// their own component.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns *true* if every vertex can be reached from every other vertex.
    /// The empty graph is considered connected.
    fn is_connected(&self) -> bool {
        self.connected_components().nth(1).is_none()
    }

    /// Validates the graph and reports its components, articulation points and bridges.
    ///
    /// The components of the empty graph are reported as a single empty component. Articulation
    /// points and bridges are only computed for connected graphs and left empty otherwise.
    fn analyze_connectivity(&self) -> Result<ConnectivityReport>
    where
        Self: StaticGraph,
    {
        self.validate_graph()?;

        let mut components = self.connected_components().collect_vec();
        if components.is_empty() {
            components.push(Vec::new());
        }

        let (articulation_points, bridges) = if components.len() == 1 {
            let cuts = CutSearch::new(self).compute();
            (cuts.articulation_points, cuts.bridges)
        } else {
            (Vec::new(), Vec::new())
        };

        debug!(
            n = self.number_of_nodes(),
            m = self.number_of_edges(),
            components = components.len(),
            articulation_points = articulation_points.len(),
            bridges = bridges.len(),
            "connectivity analyzed"
        );

        Ok(ConnectivityReport::new(
            components,
            articulation_points,
            bridges,
        ))
    }
}

impl<G: AdjacencyList> Connectivity for G {}

/// Iterator over the connected components of an undirected graph, driven by a BFS that is
/// restarted at the smallest unvisited vertex whenever it runs dry.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: BFS<'a, G>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: BFS::new_idle(graph),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut cc = self.bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                cc.sort_unstable();
                return Some(cc);
            }

            if !self.bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList {}
