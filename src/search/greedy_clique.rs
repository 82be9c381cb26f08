use bit_set::BitSet;

use crate::clique::{VertexId, WeightedInstance};

/** implements a greedy algorithm that finds a "heavy" clique.
The algorithm chooses the candidate with the largest weight (ties: largest degree, then smallest id).
It keeps as candidates its neighbors only, and repeats until no candidate remains.
Returns the vertices in insertion order.
*/
pub fn greedy_clique(inst:&dyn WeightedInstance) -> Vec<VertexId> {
    let mut candidates:BitSet = inst.vertices().collect();
    let mut res = Vec::new();
    loop {
        let best = candidates.iter().max_by(|a, b| {
            inst.weight(*a).cmp(&inst.weight(*b))
                .then_with(|| inst.degree(*a).cmp(&inst.degree(*b)))
                .then_with(|| b.cmp(a))
        });
        match best {
            None => break,
            Some(current_vertex) => {
                // insert the current vertex as part of the clique solution
                res.push(current_vertex);
                // only its neighbors remain candidates
                let mut neighbors:BitSet = BitSet::with_capacity(inst.nb_vertices());
                for v in inst.neighbors(current_vertex) {
                    neighbors.insert(*v);
                }
                candidates.intersect_with(&neighbors);
            }
        };
    }
    res
}
