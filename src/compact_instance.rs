use bit_set::BitSet;

use crate::clique::{validate_instance, VertexId, Weight, WeightedInstance};
use crate::dimacs::read_from_file;
use crate::error::{InstanceReadError, InvalidGraphInput};

/** models a Maximum Weight Clique instance (use this for small-medium sized instances). */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactInstance {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// edges of the graph (u < v, sorted)
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: sorted list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// if exists: adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Option<Vec<BitSet>>,
    /// weights[i]: weight of vertex i
    weights: Vec<Weight>,
}

impl WeightedInstance for CompactInstance {
    fn nb_vertices(&self) -> usize { self.n }

    fn nb_edges(&self) -> usize { self.m }

    fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        match &self.adj_matrix { // if the matrix representation does not exist, search the list
            None => { self.adj_list[u].binary_search(&v).is_ok() },
            Some(matrix) => { matrix[u].contains(v) } // otherwise, use it
        }
    }

    fn weight(&self, u:VertexId) -> Weight { self.weights[u] }

    fn weights(&self) -> &[Weight] { &self.weights }

    fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }
}


impl CompactInstance {

    /// builds the edge list
    fn build_edges(adj_list:&[Vec<VertexId>]) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::new();
        for (i,l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i,*j));
                }
            }
        }
        res
    }

    /// assumes a valid adjacency (sorted, symmetric, no loops)
    fn build(adj_list:Vec<Vec<VertexId>>, weights:Vec<Weight>) -> Self {
        let n = adj_list.len();
        let edges = Self::build_edges(&adj_list);
        let m = edges.len();
        let mut res = Self { n, m, edges, adj_list, adj_matrix:None, weights };
        res.populate_adj_matrix();
        res
    }

    /**
    constructor using an adjacency list and one weight per vertex.
    fails if the adjacency is not symmetric, has self-loops, or if a weight is not positive.
    */
    pub fn new(mut adj_list:Vec<Vec<VertexId>>, weights:Vec<Weight>) -> Result<Self, InvalidGraphInput> {
        for l in adj_list.iter_mut() {
            l.sort_unstable();
            l.dedup();
        }
        let res = Self {
            n: adj_list.len(), m: 0, edges: Vec::new(), adj_list, adj_matrix: None, weights
        };
        validate_instance(&res)?;
        Ok(Self::build(res.adj_list, res.weights))
    }

    /** constructor using an edge list (0-based, each pair in any order) and one weight per vertex. */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)], weights:Vec<Weight>) -> Result<Self, InvalidGraphInput> {
        let mut adj_list = vec![Vec::new() ; n];
        for (u,v) in edges {
            for x in [*u, *v].iter() {
                if *x >= n {
                    return Err(InvalidGraphInput::VertexOutOfRange { vertex: *x, nb_vertices: n });
                }
            }
            if u == v { return Err(InvalidGraphInput::SelfLoop(*u)); }
            adj_list[*u].push(*v);
            adj_list[*v].push(*u);
        }
        Self::new(adj_list, weights)
    }

    /// creates an instance from a graph file (see the [`crate::dimacs`] module)
    pub fn from_file(filename:&str) -> Result<Self, InstanceReadError> {
        read_from_file(filename)
    }

    /// if called, populate the adj_matrix
    pub fn populate_adj_matrix(&mut self) {
        let mut res = vec![BitSet::with_capacity(self.n); self.n];
        for (a,resa) in res.iter_mut().enumerate() {
            for b in &self.adj_list[a] {
                resa.insert(*b);
            }
        }
        self.adj_matrix = Some(res);
    }

    /**
    returns the subgraph induced by the vertices in `keep` (sorted, no duplicates).
    vertex keep[i] becomes vertex i in the new instance.
    */
    pub fn induced_subgraph(&self, keep:&[VertexId]) -> Self {
        let mut new_id:Vec<Option<VertexId>> = vec![None ; self.n];
        for (i,v) in keep.iter().enumerate() { new_id[*v] = Some(i); }
        let adj_list = keep.iter().map(|u| {
            self.adj_list[*u].iter().filter_map(|v| new_id[*v]).collect()
        }).collect();
        let weights = keep.iter().map(|u| self.weights[*u]).collect();
        Self::build(adj_list, weights)
    }

    /// returns the instance without vertex v (vertices after v are shifted by one)
    pub fn without_vertex(&self, v:VertexId) -> Self {
        let keep:Vec<VertexId> = self.vertices().filter(|u| *u != v).collect();
        self.induced_subgraph(&keep)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_with_tail() -> CompactInstance {
        CompactInstance::from_edges(4, &[(0,1),(1,2),(0,2),(2,3)], vec![10,20,30,5]).unwrap()
    }

    #[test]
    fn test_build_from_edges() {
        let inst = triangle_with_tail();
        assert_eq!(inst.nb_vertices(), 4);
        assert_eq!(inst.nb_edges(), 4);
        assert_eq!(inst.neighbors(2), &[0,1,3]);
        assert_eq!(inst.edges(), &[(0,1),(0,2),(1,2),(2,3)]);
        assert!(inst.are_adjacent(3, 2));
        assert!(!inst.are_adjacent(0, 3));
        assert_eq!(inst.total_weight(&[0,1,2]), 60);
    }

    #[test]
    fn test_duplicate_edges_are_merged() {
        let inst = CompactInstance::from_edges(2, &[(0,1),(1,0)], vec![1,1]).unwrap();
        assert_eq!(inst.nb_edges(), 1);
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            CompactInstance::from_edges(2, &[(1,1)], vec![1,1]),
            Err(InvalidGraphInput::SelfLoop(1))
        );
        assert_eq!(
            CompactInstance::from_edges(2, &[(0,2)], vec![1,1]),
            Err(InvalidGraphInput::VertexOutOfRange { vertex: 2, nb_vertices: 2 })
        );
        assert_eq!(
            CompactInstance::from_edges(2, &[(0,1)], vec![1,-3]),
            Err(InvalidGraphInput::NonPositiveWeight(1,-3))
        );
        assert_eq!(
            CompactInstance::new(vec![vec![1], vec![]], vec![1,1]),
            Err(InvalidGraphInput::AsymmetricAdjacency(0,1))
        );
    }

    #[test]
    fn test_without_vertex() {
        let inst = triangle_with_tail().without_vertex(1);
        assert_eq!(inst.nb_vertices(), 3);
        assert_eq!(inst.weights(), &[10,30,5]);
        assert_eq!(inst.edges(), &[(0,1),(1,2)]);
    }

    #[test]
    fn test_read_instance() {
        let inst = CompactInstance::from_file("insts/triangle_tail.txt").unwrap();
        assert_eq!(inst, triangle_with_tail());
    }
}
