//! Zhang-Shasha tree edit distance.
//!
//! For every pair of keyroots the forest distance table between their left-most descendant
//! ranges is filled in; whole-subtree distances found along the way are memoized in
//! `tree_dists` and reused by later keyroot pairs. Each table cell also carries a persistent
//! trace of the steps that realized it, so the final mapping falls out without a backtrack.

use crate::annotated::AnnotatedTree;
use crate::costs::{EditCosts, EditOptions};
use crate::operation::{EditScript, assemble};
use bramble_graph::{Result, ViewableTree};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Remove(usize),
    Insert(usize),
    Pair(usize, usize),
}

enum Trace {
    Empty,
    Step(Rc<Trace>, Step),
    Concat(Rc<Trace>, Rc<Trace>),
}

impl Trace {
    fn empty() -> Rc<Self> {
        Rc::new(Self::Empty)
    }

    fn then(prev: &Rc<Self>, step: Step) -> Rc<Self> {
        Rc::new(Self::Step(Rc::clone(prev), step))
    }

    fn concat(first: &Rc<Self>, second: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self::Concat(Rc::clone(first), Rc::clone(second)))
    }

    fn steps(trace: &Rc<Self>) -> Vec<Step> {
        let mut reversed = Vec::new();
        let mut stack = vec![Rc::clone(trace)];
        while let Some(trace) = stack.pop() {
            match &*trace {
                Self::Empty => {}
                Self::Step(prev, step) => {
                    reversed.push(*step);
                    stack.push(Rc::clone(prev));
                }
                Self::Concat(first, second) => {
                    stack.push(Rc::clone(first));
                    stack.push(Rc::clone(second));
                }
            }
        }
        reversed.reverse();
        reversed
    }
}

/// Index of the smallest cost; ties go to the earliest candidate.
fn cheapest(costs: [f64; 3]) -> (usize, f64) {
    let mut best = (0, costs[0]);
    for (choice, &cost) in costs.iter().enumerate().skip(1) {
        if cost < best.1 {
            best = (choice, cost);
        }
    }
    best
}

struct Solver<'s, 'a, A: ViewableTree, B: ViewableTree> {
    a: &'s AnnotatedTree<'a, A>,
    b: &'s AnnotatedTree<'a, B>,
    costs: &'s EditCosts<'s, A::NodeData>,
    tree_dists: Vec<Vec<f64>>,
    tree_traces: Vec<Vec<Rc<Trace>>>,
}

impl<A, B> Solver<'_, '_, A, B>
where
    A: ViewableTree,
    B: ViewableTree<NodeData = A::NodeData>,
{
    fn remove_cost(&self, x: usize) -> f64 {
        self.costs.remove(self.a.label(x))
    }

    fn insert_cost(&self, y: usize) -> f64 {
        self.costs.insert(self.b.label(y))
    }

    fn update_cost(&self, x: usize, y: usize) -> f64 {
        self.costs.update(self.a.label(x), self.b.label(y))
    }

    /// Fills the forest table for keyroots `i` and `j`. Row `x` stands for source node
    /// `lmd(i) + x - 1` and column `y` for target node `lmd(j) + y - 1`; row and column 0 are
    /// the empty forest.
    fn tree_dist(&mut self, i: usize, j: usize) {
        let (a, b) = (self.a, self.b);
        let (al, bl) = (a.lmds(), b.lmds());
        let (ia, jb) = (al[i], bl[j]);
        let rows = i - ia + 2;
        let cols = j - jb + 2;

        let mut fd = vec![vec![0.0f64; cols]; rows];
        let mut traces = vec![vec![Trace::empty(); cols]; rows];

        for x in 1..rows {
            let node = ia + x - 1;
            fd[x][0] = fd[x - 1][0] + self.remove_cost(node);
            traces[x][0] = Trace::then(&traces[x - 1][0], Step::Remove(node));
        }
        for y in 1..cols {
            let node = jb + y - 1;
            fd[0][y] = fd[0][y - 1] + self.insert_cost(node);
            traces[0][y] = Trace::then(&traces[0][y - 1], Step::Insert(node));
        }

        for x in 1..rows {
            let node_a = ia + x - 1;
            for y in 1..cols {
                let node_b = jb + y - 1;
                let remove = fd[x - 1][y] + self.remove_cost(node_a);
                let insert = fd[x][y - 1] + self.insert_cost(node_b);

                if al[node_a] == ia && bl[node_b] == jb {
                    // Both nodes root a prefix forest: compare them directly.
                    let update = fd[x - 1][y - 1] + self.update_cost(node_a, node_b);
                    let (choice, cost) = cheapest([remove, insert, update]);
                    fd[x][y] = cost;
                    traces[x][y] = match choice {
                        0 => Trace::then(&traces[x - 1][y], Step::Remove(node_a)),
                        1 => Trace::then(&traces[x][y - 1], Step::Insert(node_b)),
                        _ => Trace::then(&traces[x - 1][y - 1], Step::Pair(node_a, node_b)),
                    };
                    self.tree_dists[node_a][node_b] = cost;
                    self.tree_traces[node_a][node_b] = Rc::clone(&traces[x][y]);
                } else {
                    let p = al[node_a] - ia;
                    let q = bl[node_b] - jb;
                    let reuse = fd[p][q] + self.tree_dists[node_a][node_b];
                    let (choice, cost) = cheapest([remove, insert, reuse]);
                    fd[x][y] = cost;
                    traces[x][y] = match choice {
                        0 => Trace::then(&traces[x - 1][y], Step::Remove(node_a)),
                        1 => Trace::then(&traces[x][y - 1], Step::Insert(node_b)),
                        _ => Trace::concat(&traces[p][q], &self.tree_traces[node_a][node_b]),
                    };
                }
            }
        }
    }
}

/// Unit-cost edit distance from `a` to `b`; matches are left out of the script.
pub fn edit_distance<A, B>(a: &A, b: &B) -> Result<EditScript<A::NodeData>>
where
    A: ViewableTree,
    B: ViewableTree<NodeData = A::NodeData>,
    A::NodeData: PartialEq + Clone,
{
    edit_distance_with(a, b, &EditCosts::default(), EditOptions::default())
}

/// Minimum-cost edit script turning `a` into `b` under `costs`.
///
/// Ties between removing, inserting and updating are broken in that order, so the script is
/// deterministic for a given pair of trees.
pub fn edit_distance_with<A, B>(
    a: &A,
    b: &B,
    costs: &EditCosts<'_, A::NodeData>,
    options: EditOptions,
) -> Result<EditScript<A::NodeData>>
where
    A: ViewableTree,
    B: ViewableTree<NodeData = A::NodeData>,
    A::NodeData: Clone,
{
    let source = AnnotatedTree::new(a)?;
    let target = AnnotatedTree::new(b)?;

    let mut solver = Solver {
        a: &source,
        b: &target,
        costs,
        tree_dists: vec![vec![0.0; target.len()]; source.len()],
        tree_traces: vec![vec![Trace::empty(); target.len()]; source.len()],
    };
    for &i in source.keyroots() {
        for &j in target.keyroots() {
            solver.tree_dist(i, j);
        }
    }

    let (root_a, root_b) = (source.root(), target.root());
    let cost = solver.tree_dists[root_a][root_b];
    let steps = Trace::steps(&solver.tree_traces[root_a][root_b]);
    let operations = assemble(&source, &target, &steps, costs, options);

    tracing::debug!(
        cost,
        source_nodes = source.len(),
        target_nodes = target.len(),
        operations = operations.len(),
        "computed tree edit distance"
    );
    Ok(EditScript { cost, operations })
}
