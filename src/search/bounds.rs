//! Upper bounds on the weight of a clique contained in a set of candidates.
//!
//! Both bounds work on vertices relabelled by rank: `adj[r]` is the neighborhood of
//! rank r and `weights[r]` its weight, ranks being sorted by non-increasing weight.

use bit_set::BitSet;

use crate::clique::Weight;

/// which bound the branch & bound uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// sum of the weights of the candidates
    WeightSum,
    /// greedy coloring: sum over color classes of the heaviest vertex of the class
    Coloring,
}

impl Default for Bound {
    fn default() -> Self { Bound::Coloring }
}

/// sum of the candidate weights
pub fn weight_sum_bound(candidates:&BitSet, weights:&[Weight]) -> Weight {
    candidates.iter().map(|r| weights[r]).sum()
}

/**
greedy weighted coloring bound.
each candidate (in rank order) is added to the first color class that contains none of its neighbors.
A clique uses at most one vertex per class, so the sum of the heaviest vertex of each class is
an upper bound. Since ranks are sorted by non-increasing weight, the heaviest vertex of a class
is the one that opened it.
*/
pub fn coloring_bound(candidates:&BitSet, adj:&[BitSet], weights:&[Weight]) -> Weight {
    let mut classes:Vec<BitSet> = Vec::new();
    let mut res:Weight = 0;
    for r in candidates.iter() {
        let class = classes.iter().position(|c| adj[r].is_disjoint(c));
        match class {
            Some(i) => { classes[i].insert(r); },
            None => {
                let mut c = BitSet::with_capacity(adj.len());
                c.insert(r);
                classes.push(c);
                res += weights[r];
            }
        }
    }
    res
}


#[cfg(test)]
mod tests {
    use super::*;

    /// rank space adjacency from an edge list
    fn adjacency(n:usize, edges:&[(usize,usize)]) -> Vec<BitSet> {
        let mut res = vec![BitSet::with_capacity(n) ; n];
        for (u,v) in edges {
            res[*u].insert(*v);
            res[*v].insert(*u);
        }
        res
    }

    #[test]
    fn test_weight_sum() {
        let cand:BitSet = [0,2].iter().cloned().collect();
        assert_eq!(weight_sum_bound(&cand, &[30,20,10,5]), 40);
        assert_eq!(weight_sum_bound(&BitSet::new(), &[30,20,10,5]), 0);
    }

    #[test]
    fn test_coloring_triangle_with_tail() {
        // ranks: 0 (w30) adjacent to 1,2,3; triangle 0,1,2
        let adj = adjacency(4, &[(0,1),(0,2),(1,2),(0,3)]);
        let weights = [30,20,10,5];
        let cand:BitSet = (0..4).collect();
        // classes: {0}, {1,3}, {2}
        assert_eq!(coloring_bound(&cand, &adj, &weights), 60);
        assert_eq!(weight_sum_bound(&cand, &weights), 65);
    }

    #[test]
    fn test_coloring_independent_set() {
        let adj = adjacency(5, &[]);
        let cand:BitSet = (0..5).collect();
        assert_eq!(coloring_bound(&cand, &adj, &[9,7,7,3,1]), 9);
    }

    #[test]
    fn test_coloring_complete_graph() {
        let mut edges = Vec::new();
        for u in 0..6 { for v in u+1..6 { edges.push((u,v)); } }
        let adj = adjacency(6, &edges);
        let cand:BitSet = (0..6).collect();
        let weights = [6,5,4,3,2,1];
        assert_eq!(coloring_bound(&cand, &adj, &weights), 21);
    }

    #[test]
    fn test_coloring_subset_of_candidates() {
        let adj = adjacency(4, &[(0,1),(0,2),(1,2),(0,3)]);
        let cand:BitSet = [1,2,3].iter().cloned().collect();
        // classes: {1,3}, {2}
        assert_eq!(coloring_bound(&cand, &adj, &[30,20,10,5]), 30);
    }
}
