use std::convert::TryFrom;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::clique::{VertexId, Weight};
use crate::compact_instance::CompactInstance;
use crate::error::ParameterError;

/** parameters of the random G(n,p) instance generator */
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorParams {
    /// number of vertices (>= 1)
    pub nb_vertices: usize,
    /// probability that an edge exists between two vertices (in [0,1])
    pub edge_probability: f64,
    /// random seed
    pub seed: u64,
    /// minimum vertex weight (>= 1)
    pub min_weight: Weight,
    /// maximum vertex weight (>= min_weight)
    pub max_weight: Weight,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            nb_vertices: 100,
            edge_probability: 0.5,
            seed: 42,
            min_weight: 1,
            max_weight: 200,
        }
    }
}

impl GeneratorParams {
    /// checks the parameters, returns the first invalid one
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.nb_vertices < 1 {
            return Err(ParameterError::InvalidVertexCount(self.nb_vertices));
        }
        // also rejects NaN
        if !(0. ..=1.).contains(&self.edge_probability) {
            return Err(ParameterError::InvalidProbability(self.edge_probability));
        }
        if self.min_weight < 1 || self.min_weight > self.max_weight {
            return Err(ParameterError::InvalidWeightRange(self.min_weight, self.max_weight));
        }
        // every total weight the instance may have must fit in a Weight
        let max_total = Weight::try_from(self.nb_vertices).ok()
            .and_then(|n| n.checked_mul(self.max_weight));
        if max_total.is_none() {
            return Err(ParameterError::WeightOverflow {
                nb_vertices: self.nb_vertices, max_weight: self.max_weight
            });
        }
        Ok(())
    }
}

/**
generates a random vertex-weighted graph.
    1. every pair (u,v), u < v, in lexicographic order, becomes an edge with probability p
    2. every vertex receives a weight drawn uniformly in [min_weight, max_weight]
The random number generator is seeded by the parameters: same parameters, same instance.
*/
pub fn generate(params:&GeneratorParams) -> Result<CompactInstance, ParameterError> {
    params.validate()?;
    let mut rng = StdRng::seed_from_u64(params.seed);
    Ok(generate_with_rng(params, &mut rng))
}

/** same as [`generate`] but uses the given random number generator. Parameters must be valid. */
pub fn generate_with_rng<R:Rng>(params:&GeneratorParams, rng:&mut R) -> CompactInstance {
    let n = params.nb_vertices;
    let mut adj_list:Vec<Vec<VertexId>> = vec![Vec::new() ; n];
    for u in 0..n {
        for v in u+1..n {
            if rng.gen_bool(params.edge_probability) {
                adj_list[u].push(v);
                adj_list[v].push(u);
            }
        }
    }
    let weights:Vec<Weight> = (0..n)
        .map(|_| rng.gen_range(params.min_weight..=params.max_weight))
        .collect();
    // adjacency is symmetric without loops and weights are >= min_weight >= 1 by construction
    match CompactInstance::new(adj_list, weights) {
        Ok(inst) => inst,
        Err(e) => unreachable!("generated an invalid instance: {}", e),
    }
}
