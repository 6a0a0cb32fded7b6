use crate::{
	bin::Bin,
	error::{PartitionError, Result},
};
use std::ops::Range;

/// A node of the tree being grown, covering the bins in `bin_range`.
#[derive(Clone, Debug)]
pub struct TreeNode {
	pub bin_range: Range<usize>,
	/// The sum of the bins in `bin_range`.
	pub bin: Bin,
	pub state: NodeState,
}

/**
The state of a node only moves forward:

```text
BeforeSplit -> Evaluated -> Branch
            -> RejectedLeaf
```

A node that is still `BeforeSplit` or `Evaluated` when growth stops becomes a leaf of the finished tree.
*/
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeState {
	/// The node's best split has not been searched for.
	BeforeSplit,
	/// The node's best split is known and the node is waiting in the queue to be split.
	Evaluated(SplitDecision),
	/// The split was committed to the tree.
	Branch(SplitDecision),
	/// No acceptable split exists, or growth of this branch stopped on overflow.
	RejectedLeaf,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitDecision {
	/// The arena index of the left child. The right child is at `children + 1`.
	pub children: usize,
	/// The first bin of the right child.
	pub split_index: usize,
	/// The net gain of the split. It is always finite and non-negative.
	pub gain: f64,
}

impl SplitDecision {
	pub fn left_child_index(&self) -> usize {
		self.children
	}

	pub fn right_child_index(&self) -> usize {
		self.children + 1
	}
}

impl TreeNode {
	fn new(n_scores: usize) -> TreeNode {
		TreeNode {
			bin_range: 0..0,
			bin: Bin::new(n_scores),
			state: NodeState::BeforeSplit,
		}
	}

	/// A node needs at least two bins to have somewhere to split.
	pub fn is_splittable(&self) -> bool {
		self.bin_range.len() >= 2
	}

	pub fn is_branch(&self) -> bool {
		matches!(self.state, NodeState::Branch(_))
	}

	/// Turn an evaluated node into a branch, returning its split.
	pub fn commit(&mut self) -> Option<SplitDecision> {
		match self.state {
			NodeState::Evaluated(split) => {
				self.state = NodeState::Branch(split);
				Some(split)
			}
			_ => None,
		}
	}

	/// Give up on splitting a node that was never evaluated successfully.
	pub fn reject(&mut self) {
		debug_assert_eq!(self.state, NodeState::BeforeSplit);
		self.state = NodeState::RejectedLeaf;
	}
}

/**
The `NodeArena` holds every node of a tree being grown. Its slots are allocated once, up front, for the largest tree `max_leaves` allows, and handed out in order by a bump cursor. Nodes are never freed individually. `reset` releases all of them at once so the arena can be reused for the next tree.

The two slots at the cursor are scratch space for the node whose split is being searched. They only become that node's children when the split is accepted and `claim_children` moves the cursor past them.
*/
#[derive(Clone, Debug)]
pub struct NodeArena {
	nodes: Vec<TreeNode>,
	next: usize,
}

impl NodeArena {
	/**
	The number of slots needed to grow a tree with at most `max_leaves` leaves, or `None` if that number does not fit in a `usize`. The root takes one slot and every successful evaluation claims two. The root is always evaluated, and each of the first `max_leaves - 2` commits evaluates up to two children. The children of the final commit are never evaluated.
	*/
	pub fn capacity_for(max_leaves: usize) -> Option<usize> {
		let max_evaluations = max_leaves
			.saturating_sub(2)
			.checked_mul(2)?
			.checked_add(1)?;
		max_evaluations.checked_mul(2)?.checked_add(1)
	}

	/// Allocate an arena for trees with at most `max_leaves` leaves. Fails with `OutOfMemory` if the slots cannot be allocated.
	pub fn new(max_leaves: usize, n_scores: usize) -> Result<NodeArena> {
		let capacity = Self::capacity_for(max_leaves).ok_or(PartitionError::OutOfMemory)?;
		let mut nodes = Vec::new();
		nodes.try_reserve_exact(capacity)?;
		nodes.resize(capacity, TreeNode::new(n_scores));
		Ok(NodeArena { nodes, next: 0 })
	}

	/// Can this arena be reused for a tree with these parameters?
	pub fn fits(&self, max_leaves: usize, n_scores: usize) -> bool {
		let capacity = match Self::capacity_for(max_leaves) {
			Some(capacity) => capacity,
			None => return false,
		};
		self.nodes.len() >= capacity
			&& self
				.nodes
				.first()
				.map(|node| node.bin.n_scores() == n_scores)
				.unwrap_or(false)
	}

	pub fn capacity(&self) -> usize {
		self.nodes.len()
	}

	/// The number of slots handed out since the last reset.
	pub fn len(&self) -> usize {
		self.next
	}

	pub fn is_empty(&self) -> bool {
		self.next == 0
	}

	/// Release every node and place the root over `bin_range` with aggregate `bin`. The root is at index 0.
	pub fn reset(&mut self, bin_range: Range<usize>, bin: &Bin) -> usize {
		let root = &mut self.nodes[0];
		root.bin_range = bin_range;
		root.bin.copy_from(bin);
		root.state = NodeState::BeforeSplit;
		self.next = 1;
		0
	}

	/// The index of the first of the two scratch slots for the next evaluation.
	pub fn scratch_index(&self) -> usize {
		assert!(
			self.next + 2 <= self.nodes.len(),
			"the node arena is too small for this tree"
		);
		self.next
	}

	/// Keep the two scratch slots as the children of the node just evaluated.
	pub fn claim_children(&mut self) -> usize {
		let children = self.scratch_index();
		self.nodes[children].state = NodeState::BeforeSplit;
		self.nodes[children + 1].state = NodeState::BeforeSplit;
		self.next += 2;
		children
	}

	pub fn get(&self, index: usize) -> &TreeNode {
		&self.nodes[index]
	}

	pub fn get_mut(&mut self, index: usize) -> &mut TreeNode {
		&mut self.nodes[index]
	}

	/// Borrow a node together with the two slots starting at `children`, which must come after it.
	pub fn node_and_children_mut(
		&mut self,
		index: usize,
		children: usize,
	) -> (&mut TreeNode, &mut TreeNode, &mut TreeNode) {
		assert!(index < children);
		let (head, tail) = self.nodes.split_at_mut(children);
		let (left, tail) = tail.split_at_mut(1);
		(&mut head[index], &mut left[0], &mut tail[0])
	}
}
