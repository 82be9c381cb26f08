use bit_set::BitSet;

use crate::error::InvalidGraphInput;

/** Vertex Id (0-based) */
pub type VertexId = usize;

/** Vertex weight. Signed so that invalid (non-positive) weights can be represented and rejected. */
pub type Weight = i64;

/** models a vertex-weighted undirected graph (Maximum Weight Clique instance) */
pub trait WeightedInstance: std::fmt::Debug {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// number of edges
    fn nb_edges(&self) -> usize;

    /// iterates over the vertices of the graph
    fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.nb_vertices() }

    /// vertices adjacent to u
    fn neighbors(&self, u:VertexId) -> &[VertexId];

    /// number of neighbors of u
    fn degree(&self, u:VertexId) -> usize { self.neighbors(u).len() }

    /// true iff u and v are adjacent
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool;

    /// weight of vertex u
    fn weight(&self, u:VertexId) -> Weight;

    /// weights of all vertices (weights()[u] = weight(u))
    fn weights(&self) -> &[Weight];

    /// edge list (u < v)
    fn edges(&self) -> &[(VertexId, VertexId)];

    /// total weight of a set of vertices
    fn total_weight(&self, vertices:&[VertexId]) -> Weight {
        vertices.iter().map(|v| self.weight(*v)).sum()
    }

    /// print statistics of the instance
    fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        if self.nb_vertices() > 0 {
            let n = self.nb_vertices() as f64;
            let density = if self.nb_vertices() > 1 {
                2. * self.nb_edges() as f64 / (n * (n - 1.))
            } else { 0. };
            let degrees = self.vertices().map(|v| self.degree(v));
            println!("\t{} \t min degree", degrees.clone().min().unwrap_or(0));
            println!("\t{} \t max degree", degrees.max().unwrap_or(0));
            println!("\t{:.3} \t density", density);
            println!("\t{} \t min weight", self.weights().iter().min().unwrap_or(&0));
            println!("\t{} \t max weight", self.weights().iter().max().unwrap_or(&0));
        }
    }
}


/// result of the clique checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// the clique is valid, contains its weight
    Ok(Weight),
    /// the vertex does not exist in the instance
    UnknownVertex(VertexId),
    /// the vertex appears twice in the clique
    VertexAddedTwice(VertexId),
    /// two vertices of the clique are not adjacent
    NonAdjacent(VertexId, VertexId),
}

/**
checks that a set of vertices is a clique of the instance.
returns its weight if it is the case, the first violation found otherwise.
*/
pub fn checker(inst:&dyn WeightedInstance, clique:&[VertexId]) -> CheckerResult {
    let n = inst.nb_vertices();
    let mut visited = BitSet::with_capacity(n);
    for v in clique {
        if *v >= n { return CheckerResult::UnknownVertex(*v); }
        if !visited.insert(*v) { return CheckerResult::VertexAddedTwice(*v); }
    }
    for (i, u) in clique.iter().enumerate() {
        for v in &clique[i+1..] {
            if !inst.are_adjacent(*u, *v) {
                return CheckerResult::NonAdjacent(*u, *v);
            }
        }
    }
    CheckerResult::Ok(inst.total_weight(clique))
}

/**
checks the contract of a weighted instance: one positive weight per vertex,
neighbor ids in range, no self-loops, symmetric adjacency.
The total weight must fit in a Weight: every sum of distinct vertex weights then fits too.
*/
pub fn validate_instance(inst:&dyn WeightedInstance) -> Result<(), InvalidGraphInput> {
    let n = inst.nb_vertices();
    if inst.weights().len() != n {
        return Err(InvalidGraphInput::WeightCountMismatch { expected: n, found: inst.weights().len() });
    }
    let mut total:Weight = 0;
    for u in inst.vertices() {
        let w = inst.weight(u);
        if w <= 0 { return Err(InvalidGraphInput::NonPositiveWeight(u, w)); }
        total = total.checked_add(w).ok_or(InvalidGraphInput::WeightOverflow)?;
        for v in inst.neighbors(u) {
            if *v >= n {
                return Err(InvalidGraphInput::VertexOutOfRange { vertex: *v, nb_vertices: n });
            }
            if *v == u { return Err(InvalidGraphInput::SelfLoop(u)); }
            if !inst.neighbors(*v).contains(&u) {
                return Err(InvalidGraphInput::AsymmetricAdjacency(u, *v));
            }
        }
    }
    Ok(())
}


#[cfg(test)]
pub mod tests {
    use super::*;

    /// raw adjacency lists, no validation (used to feed malformed graphs)
    #[derive(Debug)]
    pub struct RawInstance {
        /// adjacency lists (possibly malformed)
        pub adj: Vec<Vec<VertexId>>,
        /// vertex weights
        pub weights: Vec<Weight>,
    }

    impl WeightedInstance for RawInstance {
        fn nb_vertices(&self) -> usize { self.adj.len() }
        fn nb_edges(&self) -> usize { self.adj.iter().map(|l| l.len()).sum::<usize>() / 2 }
        fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj[u] }
        fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool { self.adj[u].contains(&v) }
        fn weight(&self, u:VertexId) -> Weight { self.weights[u] }
        fn weights(&self) -> &[Weight] { &self.weights }
        fn edges(&self) -> &[(VertexId, VertexId)] { &[] }
    }

    fn triangle_with_tail() -> RawInstance {
        RawInstance {
            adj: vec![vec![1,2], vec![0,2], vec![0,1,3], vec![2]],
            weights: vec![10, 20, 30, 5],
        }
    }

    #[test]
    fn test_checker_valid_clique() {
        let inst = triangle_with_tail();
        assert_eq!(checker(&inst, &[0,1,2]), CheckerResult::Ok(60));
        assert_eq!(checker(&inst, &[2,3]), CheckerResult::Ok(35));
        assert_eq!(checker(&inst, &[]), CheckerResult::Ok(0));
    }

    #[test]
    fn test_checker_errors() {
        let inst = triangle_with_tail();
        assert_eq!(checker(&inst, &[0,3]), CheckerResult::NonAdjacent(0,3));
        assert_eq!(checker(&inst, &[1,1]), CheckerResult::VertexAddedTwice(1));
        assert_eq!(checker(&inst, &[0,4]), CheckerResult::UnknownVertex(4));
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(validate_instance(&triangle_with_tail()), Ok(()));
    }

    #[test]
    fn test_validate_rejects_malformed() {
        let mut inst = triangle_with_tail();
        inst.adj[3].clear();
        assert_eq!(validate_instance(&inst), Err(InvalidGraphInput::AsymmetricAdjacency(2,3)));
        let mut inst = triangle_with_tail();
        inst.adj[1].push(1);
        assert_eq!(validate_instance(&inst), Err(InvalidGraphInput::SelfLoop(1)));
        let mut inst = triangle_with_tail();
        inst.weights[2] = 0;
        assert_eq!(validate_instance(&inst), Err(InvalidGraphInput::NonPositiveWeight(2,0)));
        let mut inst = triangle_with_tail();
        inst.weights.pop();
        assert_eq!(
            validate_instance(&inst),
            Err(InvalidGraphInput::WeightCountMismatch { expected: 4, found: 3 })
        );
        let mut inst = triangle_with_tail();
        inst.adj[0].push(7);
        assert_eq!(
            validate_instance(&inst),
            Err(InvalidGraphInput::VertexOutOfRange { vertex: 7, nb_vertices: 4 })
        );
    }

    #[test]
    fn test_validate_total_weight_overflow() {
        let inst = RawInstance { adj: vec![vec![1], vec![0]], weights: vec![Weight::MAX, Weight::MAX] };
        assert_eq!(validate_instance(&inst), Err(InvalidGraphInput::WeightOverflow));
        // a total weight of exactly Weight::MAX is accepted
        let inst = RawInstance { adj: vec![vec![1], vec![0]], weights: vec![Weight::MAX - 1, 1] };
        assert_eq!(validate_instance(&inst), Ok(()));
    }
}
