//! Turning a scored set of root children into a single move.

use super::interface::*;
use super::tree::GameTree;

/// Outcomes in the order the mover prefers them.
const PREFERENCE: [Evaluation; 3] = [WIN, DRAW, LOSE];

/// Choose among the scored children of a root node.
///
/// Each child is scored for the player to move at that child, so its value
/// for the root's mover is the negated score. Prefers the first child that
/// wins, then the first that draws, then the first that loses, all in
/// generation order. Returns `None` when there are no children, i.e. the root
/// was terminal.
pub fn preferred_move<S: State>(children: &[GameTree<S>]) -> Option<S::M> {
    PREFERENCE.iter().find_map(|&wanted| {
        children
            .iter()
            .find(|child| child.score.map(|score| -score) == Some(wanted))
            .and_then(|child| child.m)
    })
}
