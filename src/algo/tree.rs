use itertools::Itertools;
use tracing::debug;

use super::*;

pub trait TreeCheck: StaticGraph + Sized {
    /// Validates the graph and decides whether it is a tree, i.e. connected with `n - 1` edges.
    /// The empty graph is no tree; a single vertex is a tree without leaves.
    fn analyze_tree(&self) -> Result<TreeReport> {
        self.validate_graph()?;

        let n = self.number_of_nodes();
        let m = self.number_of_edges();
        let components = self.connected_components().count() as NumNodes;

        let diagnosis = if n == 0 {
            TreeDiagnosis::Empty
        } else if components > 1 {
            TreeDiagnosis::Disconnected { components }
        } else if m == n - 1 {
            TreeDiagnosis::Tree
        } else {
            TreeDiagnosis::Cyclic {
                excess_edges: m - (n - 1),
            }
        };

        let leaves = if diagnosis == TreeDiagnosis::Tree {
            self.vertices_with_degree_one().collect_vec()
        } else {
            Vec::new()
        };

        debug!(n, m, %diagnosis, leaves = leaves.len(), "tree analyzed");

        Ok(TreeReport::new(diagnosis, leaves, n, m))
    }

    /// Returns a cycle as a closed walk (the last vertex repeats the first), or `None` if the
    /// graph is a forest.
    ///
    /// A BFS forest is built first; the smallest edge not in the forest closes the cycle through
    /// the lowest common ancestor of its endpoints.
    fn find_cycle(&self) -> Result<Option<Vec<Node>>> {
        self.validate_graph()?;

        // roots are their own parent
        let mut parent: Vec<Node> = self.vertices().collect();
        let mut depth = vec![0 as NumNodes; self.len()];

        let mut bfs = BFSWithPredecessor::new_idle(self);
        while bfs.try_restart_at_unvisited() {
            for item in bfs.by_ref() {
                if let Some(p) = item.predecessor() {
                    parent[item.item() as usize] = p;
                    depth[item.item() as usize] = depth[p as usize] + 1;
                }
            }
        }

        let Some(Edge(u, v)) = self
            .ordered_edges(true)
            .into_iter()
            .find(|&Edge(u, v)| parent[u as usize] != v && parent[v as usize] != u)
        else {
            return Ok(None);
        };

        let mut left = vec![u];
        let mut right = vec![v];
        let (mut a, mut b) = (u, v);
        while a != b {
            if depth[a as usize] >= depth[b as usize] {
                a = parent[a as usize];
                left.push(a);
            } else {
                b = parent[b as usize];
                right.push(b);
            }
        }

        // both halves end in the common ancestor
        right.pop();
        left.extend(right.into_iter().rev());
        left.push(u);

        debug!(closing_edge = %Edge(u, v), len = left.len() - 1, "cycle found");

        Ok(Some(left))
    }
}

impl<G: StaticGraph> TreeCheck for G {}
