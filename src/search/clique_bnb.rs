use std::cmp::max;
use std::rc::Rc;
use std::time::Instant;

use bit_set::BitSet;
use serde::Serialize;

use crate::clique::{validate_instance, VertexId, Weight, WeightedInstance};
use crate::error::InvalidGraphInput;
use crate::search::bounds::{coloring_bound, weight_sum_bound, Bound};
use crate::search::greedy_clique::greedy_clique;
use crate::search::stopping::{NeverStoppingCriterion, StoppingCriterion};


/// how the search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchStatus {
    /// the search tree was exhausted: the clique is optimal
    Optimal,
    /// the search was stopped early: the clique is the best found, not proven optimal
    Feasible,
}

/** result of the branch & bound */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CliqueSolution {
    /// clique vertices (sorted)
    pub vertices: Vec<VertexId>,
    /// total weight of the clique
    pub weight: Weight,
    /// optimal or only feasible
    pub status: SearchStatus,
}

impl CliqueSolution {
    /// true if the solution is proven optimal
    pub fn is_optimal(&self) -> bool { self.status == SearchStatus::Optimal }
}

/// statistics of a branch & bound run
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStatistics {
    /// number of nodes expanded
    pub nb_nodes: u64,
    /// number of nodes pruned by the bound
    pub nb_pruned: u64,
    /// number of times the incumbent was improved
    pub nb_improvements: u64,
    /// weight of the initial (greedy) incumbent
    pub initial_weight: Weight,
    /// largest partial clique size
    pub max_depth: usize,
    /// time spent (seconds)
    pub time_searched: f32,
}


/** represents a node (partial clique, candidates, weight). Vertices are identified by their rank. */
#[derive(Debug, Clone)]
struct Node {
    /// vertices in the clique
    clique: Vec<usize>,
    /// vertices adjacent to the whole clique that are not excluded
    candidates: BitSet,
    /// weight of the clique
    weight: Weight,
}


/**
Exact branch & bound for the Maximum Weight Clique problem.

Vertices are ranked once by non-increasing weight (ties: non-increasing degree, then increasing id).
Each node branches on its first candidate v (in rank order, thus the heaviest):
 - include v: add v to the clique, keep the candidates adjacent to v (explored first)
 - exclude v: remove v from the candidates
A node is pruned if its weight plus an upper bound on the weight of its candidates
does not exceed the incumbent. A node without candidates holds a clique heavier than the incumbent.

The incumbent is replaced only by strictly heavier cliques: the first maximum-weight clique
found in this exploration order is returned.
*/
#[derive(Debug)]
pub struct CliqueBnb {
    /// instance to solve
    inst: Rc<dyn WeightedInstance>,
    /// upper bound used for pruning
    bound: Bound,
    /// if true, the greedy clique is the initial incumbent
    greedy_seed: bool,
}

impl CliqueBnb {

    /** creates a branch & bound for the instance. fails if the instance is malformed. */
    pub fn new(inst:Rc<dyn WeightedInstance>) -> Result<Self, InvalidGraphInput> {
        validate_instance(inst.as_ref())?;
        Ok(Self { inst, bound: Bound::default(), greedy_seed: true })
    }

    /// sets the upper bound used for pruning
    pub fn with_bound(mut self, bound:Bound) -> Self {
        self.bound = bound;
        self
    }

    /// enables or disables the greedy initial incumbent
    pub fn with_greedy_seed(mut self, greedy_seed:bool) -> Self {
        self.greedy_seed = greedy_seed;
        self
    }

    /// order in which vertices are branched on (order[rank] = vertex)
    pub fn vertex_order(&self) -> Vec<VertexId> {
        let inst = &self.inst;
        let mut order:Vec<VertexId> = inst.vertices().collect();
        order.sort_by(|a, b| {
            inst.weight(*b).cmp(&inst.weight(*a))
                .then_with(|| inst.degree(*b).cmp(&inst.degree(*a)))
                .then_with(|| a.cmp(b))
        });
        order
    }

    /// adjacency matrix in rank space
    fn rank_adjacency(&self, order:&[VertexId]) -> Vec<BitSet> {
        let n = order.len();
        let mut rank = vec![0 ; n];
        for (r,v) in order.iter().enumerate() { rank[*v] = r; }
        order.iter().map(|v| {
            let mut res = BitSet::with_capacity(n);
            for u in self.inst.neighbors(*v) { res.insert(rank[*u]); }
            res
        }).collect()
    }

    /**
    runs the search until the tree is exhausted (optimal solution)
    or until the stopping criterion fires (best clique found so far, not proven optimal).
    */
    pub fn run<S:StoppingCriterion>(&self, mut stopping:S) -> (CliqueSolution, SearchStatistics) {
        let t_start = Instant::now();
        let order = self.vertex_order();
        let n = order.len();
        let adj = self.rank_adjacency(&order);
        let weights:Vec<Weight> = order.iter().map(|v| self.inst.weight(*v)).collect();
        let mut stats = SearchStatistics::default();
        // incumbent (original ids)
        let mut best_clique:Vec<VertexId> = Vec::new();
        let mut best_weight:Weight = 0;
        if self.greedy_seed {
            best_clique = greedy_clique(self.inst.as_ref());
            best_weight = self.inst.total_weight(&best_clique);
            stats.initial_weight = best_weight;
        }
        let mut status = SearchStatus::Optimal;
        let mut stack = vec![Node { clique: Vec::new(), candidates: (0..n).collect(), weight: 0 }];
        while let Some(mut node) = stack.pop() {
            if stopping.is_finished() {
                status = SearchStatus::Feasible;
                break;
            }
            stats.nb_nodes += 1;
            stats.max_depth = max(stats.max_depth, node.clique.len());
            let bound = match self.bound {
                Bound::WeightSum => weight_sum_bound(&node.candidates, &weights),
                Bound::Coloring => coloring_bound(&node.candidates, &adj, &weights),
            };
            if node.weight + bound <= best_weight {
                stats.nb_pruned += 1;
                continue;
            }
            let first_candidate = node.candidates.iter().next();
            match first_candidate {
                None => { // maximal clique, strictly heavier than the incumbent (bound = 0)
                    best_weight = node.weight;
                    best_clique = node.clique.iter().map(|r| order[*r]).collect();
                    stats.nb_improvements += 1;
                },
                Some(v) => {
                    let mut included = node.clone();
                    included.clique.push(v);
                    included.candidates.intersect_with(&adj[v]);
                    included.weight += weights[v];
                    node.candidates.remove(v);
                    // LIFO: the inclusion is explored first
                    stack.push(node);
                    stack.push(included);
                }
            }
        }
        best_clique.sort_unstable();
        stats.time_searched = t_start.elapsed().as_secs_f32();
        (CliqueSolution { vertices: best_clique, weight: best_weight, status }, stats)
    }
}

/** finds a maximum weight clique of the instance (no time limit). */
pub fn solve(inst:Rc<dyn WeightedInstance>) -> Result<CliqueSolution, InvalidGraphInput> {
    Ok(CliqueBnb::new(inst)?.run(NeverStoppingCriterion::default()).0)
}
