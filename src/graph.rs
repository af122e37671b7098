//! Expansion tree module.
//!
//! Records how a decomposition unfolded: which ingredients were
//! expanded through a recipe, which were paid for with byproduct credit
//! and why each leaf stopped. The tree is what a display layer walks to
//! draw a bill of materials.

use crate::group::ItemGroup;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::fmt;

/// Why an ingredient was kept as a base ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafReason {
    /// The path from the root exceeded the length ceiling.
    DepthLimit,
    /// The same group already appears among its ancestors.
    Cycle,
    /// The group has several interchangeable alternatives.
    Ambiguous,
    /// The item matches a configured base pattern.
    BaseItem,
    /// No usable recipe produces the item.
    NoRecipe,
    /// The chosen recipe needs one of the ancestors. The node holds that
    /// ancestor, which is what the bill reports.
    ReusedAncestor,
}

impl fmt::Display for LeafReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LeafReason::DepthLimit => "depth limit",
            LeafReason::Cycle => "cycle",
            LeafReason::Ambiguous => "ambiguous",
            LeafReason::BaseItem => "base item",
            LeafReason::NoRecipe => "no recipe",
            LeafReason::ReusedAncestor => "reused ancestor",
        };
        f.write_str(text)
    }
}

/// What happened to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The crafted stack at the root.
    Root,
    /// Replaced by the inputs of its chosen recipe (the children).
    Expanded,
    /// Covered by byproduct credit banked earlier in the call.
    Credited,
    /// Kept as a base ingredient.
    Leaf(LeafReason),
}

/// A single node of the expansion tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// The ingredient group visited.
    pub group: ItemGroup,
    /// How the visit ended.
    pub outcome: Outcome,
}

/// Tree of one decomposition, rooted at the crafted stack.
///
/// Children are kept in the order they were visited, which is the order
/// of the recipe inputs.
///
/// # Examples
///
/// ```rust
/// use bomcalc::graph::{ExpansionTree, LeafReason, Outcome};
/// use bomcalc::{ItemGroup, ItemStack};
///
/// let mut tree = ExpansionTree::new(ItemGroup::single(ItemStack::new("minecraft:torch", 4)));
/// let root = tree.root();
/// tree.add(root, ItemGroup::single(ItemStack::new("minecraft:coal", 1)), Outcome::Leaf(LeafReason::NoRecipe));
/// tree.add(root, ItemGroup::single(ItemStack::new("minecraft:stick", 1)), Outcome::Leaf(LeafReason::BaseItem));
///
/// assert_eq!(tree.children(root).len(), 2);
/// assert_eq!(tree.depth(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ExpansionTree {
    graph: DiGraph<TreeNode, ()>,
    root: NodeIndex,
}

impl ExpansionTree {
    /// Create a tree holding only the crafted stack.
    pub fn new(crafted: ItemGroup) -> Self {
        let mut graph = DiGraph::new();
        let root = graph.add_node(TreeNode {
            group: crafted,
            outcome: Outcome::Root,
        });
        Self { graph, root }
    }

    /// Index of the root node.
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Attach a visited group under `parent`.
    pub fn add(&mut self, parent: NodeIndex, group: ItemGroup, outcome: Outcome) -> NodeIndex {
        let node = self.graph.add_node(TreeNode { group, outcome });
        self.graph.add_edge(parent, node, ());
        node
    }

    /// The node at `index`.
    pub fn node(&self, index: NodeIndex) -> &TreeNode {
        &self.graph[index]
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Always `false`: the root is always present.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Children of `index` in visiting order.
    pub fn children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut children: Vec<NodeIndex> = self
            .graph
            .edges_directed(index, Direction::Outgoing)
            .map(|edge| edge.target())
            .collect();
        // Nodes are created in visiting order.
        children.sort();
        children
    }

    /// Pre-order listing of every node with its depth (root = 0).
    pub fn walk(&self) -> Vec<(usize, &TreeNode)> {
        let mut listing = Vec::with_capacity(self.len());
        let mut stack = vec![(0usize, self.root)];

        while let Some((depth, index)) = stack.pop() {
            listing.push((depth, &self.graph[index]));
            for child in self.children(index).into_iter().rev() {
                stack.push((depth + 1, child));
            }
        }

        listing
    }

    /// Depth of the deepest node (root = 0).
    pub fn depth(&self) -> usize {
        self.walk().into_iter().map(|(d, _)| d).max().unwrap_or(0)
    }

    /// Number of leaves that stopped for `reason`.
    pub fn count_leaves(&self, reason: LeafReason) -> usize {
        self.nodes()
            .filter(|n| n.outcome == Outcome::Leaf(reason))
            .count()
    }

    /// Number of nodes covered by byproduct credit.
    pub fn count_credited(&self) -> usize {
        self.nodes()
            .filter(|n| n.outcome == Outcome::Credited)
            .count()
    }

    fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.graph.node_indices().map(move |i| &self.graph[i])
    }
}
