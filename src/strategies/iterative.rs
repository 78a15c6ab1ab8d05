//! Exhaustive minimax with an explicit work stack.
//!
//! Computes exactly what `recursive_evaluation` computes, but the tree is
//! walked in post-order from a heap-allocated stack, so the depth of the game
//! only costs memory, never call-stack frames. No transposition table is
//! kept: a position reached by two move orders is materialized twice.

use super::super::choosers::preferred_move;
use super::super::interface::*;
use super::super::tree::GameTree;

use log::{debug, trace, warn};

enum Frame<S: State> {
    // Not visited yet. The node's children are None.
    Expand(GameTree<S>),
    // Children have been generated and pushed above this frame; once that
    // many scored nodes have been produced the parent can be scored.
    Collect(GameTree<S>, usize),
}

/// Score every node reachable from `root` and return the completed tree.
///
/// Each node is pushed at most twice: once to expand it, once to collect its
/// children's scores. Scored nodes are moved onto a second stack until their
/// parent is revisited and takes them back in generation order.
pub fn evaluate_tree<G: Game>(game: &G, root: GameTree<G::S>) -> GameTree<G::S> {
    let mut stack = vec![Frame::Expand(root)];
    let mut scored: Vec<GameTree<G::S>> = Vec::new();
    let mut expanded = 0usize;

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Expand(mut node) => {
                debug_assert!(!node.is_expanded());
                let moves = node.state.legal_moves();
                if is_terminal(game, &node.state, &moves) {
                    node.score = Some(terminal_evaluation(game, &node.state));
                    node.children = Some(Vec::new());
                    scored.push(node);
                    continue;
                }
                expanded += 1;
                trace!("expanding {:?} with {} moves", node.m, moves.len());
                let children = moves
                    .into_iter()
                    .map(|m| GameTree::child(node.state.apply(m), m))
                    .collect::<Vec<_>>();
                stack.push(Frame::Collect(node, children.len()));
                // Reversed, so the first child is popped first and lands
                // lowest on the scored stack.
                stack.extend(children.into_iter().rev().map(Frame::Expand));
            }
            Frame::Collect(mut node, count) => {
                let children = scored.split_off(scored.len() - count);
                debug_assert!(children.iter().all(|child| child.score.is_some()));
                node.score = children.iter().filter_map(|child| child.score).map(|s| -s).max();
                node.children = Some(children);
                scored.push(node);
            }
        }
    }

    debug!("iterative minimax expanded {} interior nodes", expanded);
    debug_assert_eq!(scored.len(), 1);
    // The root frame is the last to complete, so it sits on top.
    match scored.pop() {
        Some(root) => root,
        None => unreachable!("the root frame always produces a scored node"),
    }
}

/// The outcome the mover of `state` can guarantee under optimal play.
pub fn iterative_evaluation<G: Game>(game: &G, state: &G::S) -> Evaluation {
    let root = evaluate_tree(game, GameTree::new(state.clone()));
    root.score.unwrap_or_else(|| terminal_evaluation(game, state))
}

/// Chooses moves by building and scoring the whole game tree below the
/// current state with `evaluate_tree`.
#[derive(Debug, Default)]
pub struct IterativeMinimax {
    prev_value: Option<Evaluation>,
    prev_nodes: usize,
}

impl IterativeMinimax {
    pub fn new() -> Self {
        Self::default()
    }

    /// The score of the root from the last `choose_move`, from the
    /// perspective of the player who was to move there.
    pub fn root_value(&self) -> Option<Evaluation> {
        self.prev_value
    }

    /// How many nodes the last search materialized.
    pub fn nodes_searched(&self) -> usize {
        self.prev_nodes
    }
}

impl<G: Game> Strategy<G> for IterativeMinimax {
    fn choose_move(&mut self, game: &G) -> Option<MoveOf<G>> {
        let root = evaluate_tree(game, GameTree::new(game.current_state().clone()));
        self.prev_value = root.score;
        self.prev_nodes = root.node_count();
        if root.children().is_empty() {
            warn!("iterative minimax asked to move in a finished game");
            return None;
        }
        let best = preferred_move(root.children());
        debug!(
            "iterative minimax chose {:?} among {} moves ({} nodes)",
            best,
            root.children().len(),
            self.prev_nodes
        );
        best
    }
}
