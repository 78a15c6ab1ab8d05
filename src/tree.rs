//! The search tree shared by the minimax strategies.

use super::interface::*;

/// One node of a game tree. The node owns its state and its children.
#[derive(Debug)]
pub struct GameTree<S: State> {
    pub state: S,
    // Best guaranteed outcome for the player to move in `state`.
    // None until the node has been scored.
    pub score: Option<Evaluation>,
    // The move to get from the parent to here.
    // Only None at the root.
    pub m: Option<S::M>,
    // None until the children have been generated. A terminal node that has
    // been visited holds Some(empty).
    pub children: Option<Vec<GameTree<S>>>,
}

impl<S: State> GameTree<S> {
    /// A root node for `state`.
    pub fn new(state: S) -> Self {
        GameTree { state, score: None, m: None, children: None }
    }

    /// A node reached from its parent by playing `m`.
    pub fn child(state: S, m: S::M) -> Self {
        GameTree { state, score: None, m: Some(m), children: None }
    }

    pub fn is_expanded(&self) -> bool {
        self.children.is_some()
    }

    /// The generated children, or an empty slice if there are none yet.
    pub fn children(&self) -> &[GameTree<S>] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Number of nodes in this subtree, counting itself.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children());
        }
        count
    }

    /// Visit every node of this subtree in pre-order.
    pub fn for_each<F: FnMut(&GameTree<S>)>(&self, mut f: F) {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            f(node);
            pending.extend(node.children().iter().rev());
        }
    }
}

// The default drop glue recurses once per level, which would overflow the
// stack on exactly the deep trees the iterative evaluator exists for.
impl<S: State> Drop for GameTree<S> {
    fn drop(&mut self) {
        let mut pending = self.children.take().unwrap_or_default();
        while let Some(mut node) = pending.pop() {
            if let Some(children) = node.children.take() {
                pending.extend(children);
            }
        }
    }
}
