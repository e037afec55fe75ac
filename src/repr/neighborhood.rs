use super::*;

/// Neighborhood stored as a sorted `Vec<Node>`
#[derive(Default, Clone, Debug)]
pub struct ArrNeighborhood(Vec<Node>);

impl ArrNeighborhood {
    /// Returns the neighbors as a sorted slice
    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.binary_search(&v).is_ok()
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        match self.0.binary_search(&u) {
            Ok(_) => true,
            Err(pos) => {
                self.0.insert(pos, u);
                false
            }
        }
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Ok(pos) = self.0.binary_search(&u) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Neighborhood stored as a bitset over all nodes (one row of an adjacency matrix)
#[derive(Default, Clone, Debug)]
pub struct BitNeighborhood(NodeBitSet);

impl Neighborhood for BitNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self(node_bitset(n))
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.count_ones(..) as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.ones().map(|v| v as Node)
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.contains(v as usize)
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        self.0.put(u as usize)
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        let was_set = self.0.contains(u as usize);
        self.0.set(u as usize, false);
        was_set
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn exercise<N: Neighborhood>() {
        let mut nbs = N::new(10);
        assert_eq!(nbs.num_of_neighbors(), 0);

        for u in [7, 2, 9, 2, 0] {
            nbs.try_add_neighbor(u);
        }
        assert_eq!(nbs.num_of_neighbors(), 4);
        assert_eq!(nbs.neighbors().collect::<Vec<_>>(), vec![0, 2, 7, 9]);
        assert!(nbs.has_neighbor(7));
        assert!(!nbs.has_neighbor(3));

        assert!(nbs.try_add_neighbor(9));
        assert!(nbs.try_remove_neighbor(2));
        assert!(!nbs.try_remove_neighbor(2));
        assert_eq!(nbs.neighbors().collect::<Vec<_>>(), vec![0, 7, 9]);

        nbs.clear();
        assert_eq!(nbs.num_of_neighbors(), 0);
        assert_eq!(nbs.neighbors().count(), 0);
    }

    #[test]
    fn arr_neighborhood() {
        exercise::<ArrNeighborhood>();
    }

    #[test]
    fn bit_neighborhood() {
        exercise::<BitNeighborhood>();
    }
}
