use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/**
decides when a search should stop before exhausting its search tree.
checked once per node expansion.
*/
pub trait StoppingCriterion {
    /// true if the search should stop now
    fn is_finished(&mut self) -> bool;
}

/** never stops the search (the search ends when the tree is exhausted) */
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverStoppingCriterion;

impl StoppingCriterion for NeverStoppingCriterion {
    fn is_finished(&mut self) -> bool { false }
}

/** stops the search after a time limit (in seconds) */
#[derive(Debug, Clone, Copy)]
pub struct TimeStoppingCriterion {
    /// time at which the criterion was created
    t_start: Instant,
    /// time limit (seconds)
    time_limit: f32,
}

impl TimeStoppingCriterion {
    /// creates a criterion stopping `time_limit` seconds from now
    pub fn new(time_limit:f32) -> Self {
        Self { t_start: Instant::now(), time_limit }
    }
}

impl StoppingCriterion for TimeStoppingCriterion {
    fn is_finished(&mut self) -> bool {
        self.t_start.elapsed().as_secs_f32() >= self.time_limit
    }
}

/** stops the search after a given number of node expansions */
#[derive(Debug, Clone, Copy)]
pub struct NodeLimitStoppingCriterion {
    /// maximum number of nodes
    max_nodes: u64,
    /// number of nodes expanded so far
    nb_nodes: u64,
}

impl NodeLimitStoppingCriterion {
    /// creates a criterion allowing `max_nodes` node expansions
    pub fn new(max_nodes:u64) -> Self {
        Self { max_nodes, nb_nodes: 0 }
    }
}

impl StoppingCriterion for NodeLimitStoppingCriterion {
    fn is_finished(&mut self) -> bool {
        self.nb_nodes += 1;
        self.nb_nodes > self.max_nodes
    }
}

/** stops the search once a shared flag is raised (for instance by another thread) */
#[derive(Debug, Clone)]
pub struct InterruptStoppingCriterion {
    stop_flag: Arc<AtomicBool>,
}

impl InterruptStoppingCriterion {
    /// monitors the given flag
    pub fn new(stop_flag:Arc<AtomicBool>) -> Self {
        Self { stop_flag }
    }
}

impl StoppingCriterion for InterruptStoppingCriterion {
    fn is_finished(&mut self) -> bool {
        self.stop_flag.load(Ordering::Relaxed)
    }
}

/** stops as soon as any of the two criteria stops */
#[derive(Debug, Clone)]
pub struct EitherStoppingCriterion<A, B> {
    a: A,
    b: B,
}

impl<A:StoppingCriterion, B:StoppingCriterion> EitherStoppingCriterion<A, B> {
    /// combines two criteria
    pub fn new(a:A, b:B) -> Self { Self { a, b } }
}

impl<A:StoppingCriterion, B:StoppingCriterion> StoppingCriterion for EitherStoppingCriterion<A, B> {
    fn is_finished(&mut self) -> bool {
        self.a.is_finished() || self.b.is_finished()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never() {
        let mut s = NeverStoppingCriterion::default();
        assert!((0..1000).all(|_| !s.is_finished()));
    }

    #[test]
    fn test_time() {
        assert!(TimeStoppingCriterion::new(0.).is_finished());
        assert!(!TimeStoppingCriterion::new(3600.).is_finished());
    }

    #[test]
    fn test_node_limit() {
        let mut s = NodeLimitStoppingCriterion::new(2);
        assert!(!s.is_finished());
        assert!(!s.is_finished());
        assert!(s.is_finished());
    }

    #[test]
    fn test_interrupt() {
        let flag = Arc::new(AtomicBool::new(false));
        let mut s = InterruptStoppingCriterion::new(flag.clone());
        assert!(!s.is_finished());
        flag.store(true, Ordering::Relaxed);
        assert!(s.is_finished());
    }

    #[test]
    fn test_either() {
        let mut s = EitherStoppingCriterion::new(
            NeverStoppingCriterion::default(),
            NodeLimitStoppingCriterion::new(1),
        );
        assert!(!s.is_finished());
        assert!(s.is_finished());
    }
}
