/*!
# Concepts

Short textual descriptions of the properties the analyzers decide, meant to be shown next to a
report. The table is built once on first access and is read-only afterwards.

```rust
use graphprops::concepts::*;

let info = Concept::Eulerian.info();
assert_eq!(info.name, "Eulerian Path/Cycle");
assert_eq!(concept_info("planarity").name, "Unknown Concept");
```
*/

use std::{fmt, str::FromStr, sync::LazyLock};

use fxhash::FxHashMap;
use thiserror::Error;

/// A property of graphs that one of the analyzers decides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Concept {
    Eulerian,
    Hamiltonian,
    Connectivity,
    Trees,
}

impl Concept {
    pub const ALL: [Concept; 4] = [
        Concept::Eulerian,
        Concept::Hamiltonian,
        Concept::Connectivity,
        Concept::Trees,
    ];

    /// Lookup key accepted by [`Concept::from_str`]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Eulerian => "eulerian",
            Self::Hamiltonian => "hamiltonian",
            Self::Connectivity => "connectivity",
            Self::Trees => "trees",
        }
    }

    pub fn info(&self) -> &'static ConceptInfo {
        &CONCEPTS[self]
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown concept `{0}`")]
pub struct UnknownConceptError(pub String);

impl FromStr for Concept {
    type Err = UnknownConceptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| UnknownConceptError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// `(label, condition)` pairs, e.g. `("cycle", "All vertices have even degree")`
    pub conditions: &'static [(&'static str, &'static str)],
    pub insight: &'static str,
}

static CONCEPTS: LazyLock<FxHashMap<Concept, ConceptInfo>> = LazyLock::new(|| {
    let mut table = FxHashMap::default();

    table.insert(
        Concept::Eulerian,
        ConceptInfo {
            name: "Eulerian Path/Cycle",
            description: "A path that traverses every edge exactly once",
            conditions: &[
                ("cycle", "All vertices have even degree"),
                ("path", "Exactly two vertices have odd degree"),
            ],
            insight: "Euler solved the Königsberg bridge problem by realizing that the key is \
                the number of edges meeting at each landmass.",
        },
    );

    table.insert(
        Concept::Hamiltonian,
        ConceptInfo {
            name: "Hamiltonian Path/Cycle",
            description: "A path that visits every vertex exactly once",
            conditions: &[
                ("cycle", "Visits all vertices and returns to start"),
                ("path", "Visits all vertices exactly once"),
            ],
            insight: "Unlike Eulerian paths, there is no simple condition to determine if a \
                Hamiltonian path exists. This is a much harder problem!",
        },
    );

    table.insert(
        Concept::Connectivity,
        ConceptInfo {
            name: "Connectivity",
            description: "How well-connected a graph is",
            conditions: &[
                ("connected", "Every vertex can reach every other vertex"),
                ("disconnected", "Some vertices cannot be reached from others"),
            ],
            insight: "Connectivity tells us whether a graph is 'in one piece' or has separate \
                components.",
        },
    );

    table.insert(
        Concept::Trees,
        ConceptInfo {
            name: "Trees",
            description: "Connected graphs with no cycles",
            conditions: &[
                ("tree", "Connected and acyclic"),
                ("forest", "Collection of trees"),
            ],
            insight: "Trees are the skeleton of connected graphs: removing edges from a \
                connected graph, as long as it stays connected, eventually leaves a spanning tree.",
        },
    );

    table
});

static UNKNOWN_CONCEPT: ConceptInfo = ConceptInfo {
    name: "Unknown Concept",
    description: "This concept is not yet implemented.",
    conditions: &[],
    insight: "Check back later for more content!",
};

/// Looks up a concept by its key and falls back to a generic placeholder entry for unknown keys
pub fn concept_info(key: &str) -> &'static ConceptInfo {
    key.parse::<Concept>()
        .map_or(&UNKNOWN_CONCEPT, |concept| concept.info())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_concept_has_an_entry() {
        for concept in Concept::ALL {
            let info = concept.info();
            assert!(!info.name.is_empty());
            assert_eq!(info.conditions.len(), 2);
            assert_eq!(concept.key().parse::<Concept>(), Ok(concept));
            assert_eq!(concept_info(concept.key()), info);
        }
    }

    #[test]
    fn unknown_concepts() {
        assert_eq!(
            "matching".parse::<Concept>(),
            Err(UnknownConceptError("matching".into()))
        );
        assert_eq!(
            UnknownConceptError("x".into()).to_string(),
            "unknown concept `x`"
        );

        let info = concept_info("Eulerian");
        assert_eq!(info.name, "Unknown Concept");
        assert!(info.conditions.is_empty());
    }

    #[test]
    fn conditions_by_label() {
        let trees = Concept::Trees.info();
        assert_eq!(
            trees.conditions.iter().find(|(label, _)| *label == "tree"),
            Some(&("tree", "Connected and acyclic"))
        );
        assert_eq!(Concept::Connectivity.to_string(), "connectivity");
    }
}
