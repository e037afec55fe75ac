/*!
# Reports

Immutable result records returned by the analyzers in [`algo`](crate::algo). Every field is always
populated; variant-specific data lives in tagged enums ([`EulerianReason`], [`TreeDiagnosis`],
[`HamiltonianWitness`]) rather than in optional fields.

Each report carries a human readable `explanation` meant for a property panel or a log line.
*/

use std::fmt::{self, Display};

use itertools::Itertools;

use crate::*;

/// Why a graph does (not) admit an Eulerian path or cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EulerianReason {
    /// The graph has more than one connected component
    Disconnected,
    /// Connected and every vertex has even degree
    AllDegreesEven,
    /// Connected and exactly two vertices have odd degree
    TwoOddVertices,
    /// Connected, but the number of odd-degree vertices is neither 0 nor 2
    TooManyOddVertices { count: NumNodes },
}

impl EulerianReason {
    /// Stable machine readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::AllDegreesEven => "all_degrees_even",
            Self::TwoOddVertices => "two_odd_vertices",
            Self::TooManyOddVertices { .. } => "too_many_odd_vertices",
        }
    }
}

/// Result of [`Eulerian::analyze_eulerian`](crate::algo::Eulerian::analyze_eulerian)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulerianReport {
    pub has_cycle: bool,
    pub has_path: bool,
    /// All vertices of odd degree in ascending order
    pub odd_degree_vertices: Vec<Node>,
    /// `degrees[u]` is the degree of vertex `u`
    pub degrees: Vec<NumNodes>,
    pub reason: EulerianReason,
    pub explanation: String,
}

impl EulerianReport {
    pub(crate) fn new(
        reason: EulerianReason,
        odd_degree_vertices: Vec<Node>,
        degrees: Vec<NumNodes>,
    ) -> Self {
        let (has_cycle, has_path) = match reason {
            EulerianReason::AllDegreesEven => (true, true),
            EulerianReason::TwoOddVertices => (false, true),
            EulerianReason::Disconnected | EulerianReason::TooManyOddVertices { .. } => {
                (false, false)
            }
        };

        let explanation = match reason {
            EulerianReason::Disconnected => "The graph is not connected. An Eulerian path must \
                reach every edge from every other edge, so neither a path nor a cycle exists."
                .to_string(),
            EulerianReason::AllDegreesEven => "All vertices have even degree. Every vertex can be \
                entered and left equally often, so an Eulerian cycle exists and returns to its start."
                .to_string(),
            EulerianReason::TwoOddVertices => format!(
                "Exactly two vertices ({}) have odd degree. An Eulerian path exists; it must start \
                 at one of them and end at the other, so it cannot be closed into a cycle.",
                odd_degree_vertices.iter().join(", ")
            ),
            EulerianReason::TooManyOddVertices { count } => format!(
                "Found {count} vertices with odd degree, but only 0 (cycle) or 2 (path) are \
                 admissible: all vertices except the endpoints must be entered and left equally often."
            ),
        };

        Self {
            has_cycle,
            has_path,
            odd_degree_vertices,
            degrees,
            reason,
            explanation,
        }
    }
}

/// Result of [`Hamiltonian::analyze_hamiltonian`](crate::algo::Hamiltonian::analyze_hamiltonian).
///
/// Both conditions are sufficient but not necessary: a graph violating both may still be
/// Hamiltonian. They are only evaluated for graphs with at least 3 vertices and reported as not
/// satisfied otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HamiltonianReport {
    pub vertex_count: NumNodes,
    pub min_degree: NumNodes,
    pub dirac_satisfied: bool,
    pub ore_satisfied: bool,
    /// First pair of non-adjacent vertices (in lexicographic order) whose degree sum is below
    /// `vertex_count`, if Ore's condition was evaluated and failed
    pub ore_violation: Option<(Node, Node)>,
    pub explanation: String,
}

impl HamiltonianReport {
    pub(crate) fn new(
        vertex_count: NumNodes,
        min_degree: NumNodes,
        dirac_satisfied: bool,
        ore_satisfied: bool,
        ore_violation: Option<(Node, Node)>,
    ) -> Self {
        let n = vertex_count;
        let half = n as f64 / 2.0;

        let explanation = if n < 3 {
            format!(
                "Dirac's and Ore's theorems only apply to graphs with at least 3 vertices; this \
                 graph has {n}. Deciding Hamiltonicity is NP-complete in general."
            )
        } else {
            let dirac = if dirac_satisfied {
                format!(
                    "Every vertex has degree >= {half}, so a Hamiltonian cycle exists (Dirac's theorem)."
                )
            } else {
                format!("Minimum degree {min_degree} < {half}, so Dirac's theorem does not apply.")
            };

            let ore = match (ore_satisfied, ore_violation) {
                (true, _) => format!(
                    "Every pair of non-adjacent vertices has degree sum >= {n}, so a Hamiltonian \
                     cycle exists (Ore's theorem)."
                ),
                (false, Some((u, v))) => format!(
                    "Ore's theorem does not apply: non-adjacent vertices {u} and {v} have degree \
                     sum < {n}."
                ),
                (false, None) => "Ore's theorem does not apply.".to_string(),
            };

            format!("{dirac} {ore}")
        };

        Self {
            vertex_count,
            min_degree,
            dirac_satisfied,
            ore_satisfied,
            ore_violation,
            explanation,
        }
    }

    /// Returns *true* if one of the sufficient conditions proves a Hamiltonian cycle exists
    pub fn guarantees_cycle(&self) -> bool {
        self.dirac_satisfied || self.ore_satisfied
    }
}

/// Outcome of a bounded Hamiltonian search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HamiltonianWitness {
    /// A closed walk visiting every vertex exactly once; the last element repeats the first
    Cycle(Vec<Node>),
    /// A walk visiting every vertex exactly once
    Path(Vec<Node>),
    /// The search completed without finding a Hamiltonian path
    NotFound,
    /// The graph has more vertices than the search admits; no search was attempted
    SearchBoundExceeded {
        vertex_count: NumNodes,
        max_vertices: NumNodes,
    },
}

impl HamiltonianWitness {
    /// Returns the witnessing sequence, if any
    pub fn path(&self) -> Option<&[Node]> {
        match self {
            Self::Cycle(p) | Self::Path(p) => Some(p),
            Self::NotFound | Self::SearchBoundExceeded { .. } => None,
        }
    }

    /// Consumes the outcome and returns the witnessing sequence, if any
    pub fn into_path(self) -> Option<Vec<Node>> {
        match self {
            Self::Cycle(p) | Self::Path(p) => Some(p),
            Self::NotFound | Self::SearchBoundExceeded { .. } => None,
        }
    }

    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::Cycle(_))
    }

    pub fn explanation(&self) -> String {
        match self {
            Self::Cycle(p) => format!(
                "Found a Hamiltonian cycle visiting every vertex exactly once: {}",
                p.iter().join(" -> ")
            ),
            Self::Path(p) if p.is_empty() => {
                "The empty graph is trivially traversed by the empty path.".to_string()
            }
            Self::Path(p) => format!(
                "No Hamiltonian cycle exists, but this path visits every vertex exactly once: {}",
                p.iter().join(" -> ")
            ),
            Self::NotFound => {
                "Exhaustive search found neither a Hamiltonian cycle nor a Hamiltonian path."
                    .to_string()
            }
            Self::SearchBoundExceeded {
                vertex_count,
                max_vertices,
            } => format!(
                "The graph has {vertex_count} vertices, exceeding the search bound of \
                 {max_vertices}. Exhaustive search is factorial in the number of vertices \
                 (the problem is NP-complete), so it was not attempted."
            ),
        }
    }
}

/// Result of [`Connectivity::analyze_connectivity`](crate::algo::Connectivity::analyze_connectivity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityReport {
    pub is_connected: bool,
    /// Partition of the vertices; each component is sorted and components are ordered by their
    /// smallest vertex. The empty graph has a single empty component.
    pub components: Vec<Vec<Node>>,
    /// Cut vertices in ascending order; only computed for connected graphs
    pub articulation_points: Vec<Node>,
    /// Cut edges (normalized) in ascending order; only computed for connected graphs
    pub bridges: Vec<Edge>,
    pub explanation: String,
}

impl ConnectivityReport {
    pub(crate) fn new(
        components: Vec<Vec<Node>>,
        articulation_points: Vec<Node>,
        bridges: Vec<Edge>,
    ) -> Self {
        let is_connected = components.len() <= 1;

        let mut explanation = if is_connected {
            "The graph is connected: every vertex can be reached from every other vertex by \
             following edges."
                .to_string()
        } else {
            format!(
                "The graph has {} separate components, so not every vertex can be reached from \
                 every other vertex.",
                components.len()
            )
        };

        if is_connected && components.first().is_some_and(|c| !c.is_empty()) {
            if articulation_points.is_empty() {
                explanation.push_str(
                    " It has no articulation points: it stays connected when any single vertex \
                     is removed.",
                );
            } else {
                explanation.push_str(&format!(
                    " Vertices {} are articulation points: removing any of them disconnects the \
                     graph.",
                    articulation_points.iter().join(", ")
                ));
            }
        }

        Self {
            is_connected,
            components,
            articulation_points,
            bridges,
            explanation,
        }
    }

    pub fn number_of_components(&self) -> usize {
        self.components.len()
    }
}

/// Why a graph is (not) a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeDiagnosis {
    /// Connected with exactly `n - 1` edges
    Tree,
    /// The graph has no vertices; `|E| = |V| - 1` cannot hold
    Empty,
    /// More than one connected component
    Disconnected { components: NumNodes },
    /// Connected, but `excess_edges = |E| - (|V| - 1)` independent cycles are present
    Cyclic { excess_edges: NumEdges },
}

impl Display for TreeDiagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tree => write!(f, "tree"),
            Self::Empty => write!(f, "empty graph"),
            Self::Disconnected { components } => {
                write!(f, "disconnected ({components} components)")
            }
            Self::Cyclic { excess_edges } => write!(f, "cyclic ({excess_edges} excess edges)"),
        }
    }
}

/// Result of [`TreeCheck::analyze_tree`](crate::algo::TreeCheck::analyze_tree)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeReport {
    pub is_tree: bool,
    /// Vertices of degree 1 in ascending order; only computed for trees
    pub leaves: Vec<Node>,
    pub vertex_count: NumNodes,
    pub edge_count: NumEdges,
    pub diagnosis: TreeDiagnosis,
    pub explanation: String,
}

impl TreeReport {
    pub(crate) fn new(
        diagnosis: TreeDiagnosis,
        leaves: Vec<Node>,
        vertex_count: NumNodes,
        edge_count: NumEdges,
    ) -> Self {
        let explanation = match diagnosis {
            TreeDiagnosis::Tree => {
                let mut text = format!(
                    "This is a tree: it is connected and has no cycles. With n = {vertex_count} \
                     vertices it has m = {edge_count} = n - 1 edges."
                );
                if !leaves.is_empty() {
                    text.push_str(&format!(
                        " Vertices {} are leaves (degree 1); every tree with at least 2 vertices \
                         has at least 2 leaves.",
                        leaves.iter().join(", ")
                    ));
                }
                text
            }
            TreeDiagnosis::Empty => {
                "The graph has no vertices, so it is not a tree.".to_string()
            }
            TreeDiagnosis::Disconnected { components } => format!(
                "Trees must be connected, but this graph has {components} components."
            ),
            TreeDiagnosis::Cyclic { excess_edges } => format!(
                "Trees cannot have cycles. This connected graph has {edge_count} edges, \
                 {excess_edges} more than the {} of a tree on {vertex_count} vertices.",
                vertex_count - 1
            ),
        };

        Self {
            is_tree: diagnosis == TreeDiagnosis::Tree,
            leaves,
            vertex_count,
            edge_count,
            diagnosis,
            explanation,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn eulerian_flags_follow_reason() {
        let report = EulerianReport::new(
            EulerianReason::TwoOddVertices,
            vec![1, 3],
            vec![2, 1, 2, 1],
        );
        assert!(!report.has_cycle);
        assert!(report.has_path);
        assert!(report.explanation.contains("(1, 3)"));

        let report = EulerianReport::new(
            EulerianReason::TooManyOddVertices { count: 4 },
            vec![1, 2, 3, 4],
            vec![4, 1, 1, 1, 1],
        );
        assert!(!report.has_cycle && !report.has_path);
        assert!(report.explanation.contains("Found 4 vertices"));
        assert_eq!(report.reason.code(), "too_many_odd_vertices");
    }

    #[test]
    fn witness_accessors() {
        let cycle = HamiltonianWitness::Cycle(vec![0, 1, 2, 0]);
        assert!(cycle.is_cycle());
        assert_eq!(cycle.path(), Some(&[0, 1, 2, 0][..]));
        assert!(cycle.explanation().contains("0 -> 1 -> 2 -> 0"));

        let bound = HamiltonianWitness::SearchBoundExceeded {
            vertex_count: 9,
            max_vertices: 8,
        };
        assert_eq!(bound.path(), None);
        assert!(bound.explanation().contains("exceeding the search bound of 8"));
        assert_eq!(bound.into_path(), None);
    }

    #[test]
    fn tree_diagnosis_display() {
        assert_eq!(
            TreeDiagnosis::Cyclic { excess_edges: 2 }.to_string(),
            "cyclic (2 excess edges)"
        );
        let report = TreeReport::new(TreeDiagnosis::Cyclic { excess_edges: 1 }, vec![], 4, 4);
        assert!(!report.is_tree);
        assert!(report.explanation.contains("1 more than the 3"));
    }
}
