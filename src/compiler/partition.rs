/// Bit partitioner. Splits a multiset of bit-strings into an implicit
/// binary decision tree keyed by bit position.
///
/// Traversal order
/// ---------------
/// Pre-order, one-branch first: a node, then its entire one-branch subtree,
/// then its entire zero-branch subtree. Subsets that are empty, or that have
/// run out of bit positions, produce no node.
///
/// The walk uses an explicit work-list instead of native recursion, so depth
/// is bounded by heap rather than stack for any supported width. Pushing the
/// zero branch before the one branch makes the one branch pop first, which
/// reproduces the recursive order exactly.
use crate::core::BitString;

// ── DecisionNode ──────────────────────────────────────────────────────────

/// One split of a subset at bit position `idx`.
///
/// `zero_branch` and `one_branch` partition the subset: together they hold
/// every input string exactly as often as it appeared, in input order.
/// Every member reached this node through the same branch choices at
/// positions `0..idx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionNode {
    pub idx: usize,
    pub zero_branch: Vec<BitString>,
    pub one_branch: Vec<BitString>,
}

impl DecisionNode {
    /// Total number of strings held by the node.
    pub fn len(&self) -> usize {
        self.zero_branch.len() + self.one_branch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Any member of the subset; all members share the prefix `0..idx`.
    pub fn representative(&self) -> Option<&BitString> {
        self.zero_branch.first().or_else(|| self.one_branch.first())
    }
}

// ── Single split ──────────────────────────────────────────────────────────

/// Split `strings` on bit `idx`.
///
/// Returns `None` when `strings` is empty or `idx` has reached `width`.
pub fn split(strings: &[BitString], idx: usize, width: usize) -> Option<DecisionNode> {
    if strings.is_empty() || idx >= width {
        return None;
    }
    let (one_branch, zero_branch): (Vec<BitString>, Vec<BitString>) =
        strings.iter().copied().partition(|s| s.bit(idx) == 1);
    Some(DecisionNode { idx, zero_branch, one_branch })
}

// ── Traversal ─────────────────────────────────────────────────────────────

/// Lazy pre-order walk over the decision tree. See the module doc for order.
#[derive(Debug, Clone)]
pub struct Traversal {
    width: usize,
    pending: Vec<(Vec<BitString>, usize)>,
}

impl Iterator for Traversal {
    type Item = DecisionNode;

    fn next(&mut self) -> Option<DecisionNode> {
        while let Some((strings, idx)) = self.pending.pop() {
            let Some(node) = split(&strings, idx, self.width) else {
                continue;
            };
            if idx + 1 < self.width {
                if !node.zero_branch.is_empty() {
                    self.pending.push((node.zero_branch.clone(), idx + 1));
                }
                if !node.one_branch.is_empty() {
                    self.pending.push((node.one_branch.clone(), idx + 1));
                }
            }
            return Some(node);
        }
        None
    }
}

/// Walk the tree rooted at `strings`, starting the split at `idx`.
pub fn traverse_from(strings: Vec<BitString>, idx: usize, width: usize) -> Traversal {
    Traversal { width, pending: vec![(strings, idx)] }
}

/// Walk the full tree, starting at bit position 0.
pub fn traverse(strings: Vec<BitString>, width: usize) -> Traversal {
    traverse_from(strings, 0, width)
}

/// Every node visited from `idx`, in traversal order.
pub fn partition(strings: &[BitString], idx: usize, width: usize) -> Vec<DecisionNode> {
    traverse_from(strings.to_vec(), idx, width).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::index_to_bitstring;

    fn bits(indices: &[i64], width: usize) -> Vec<BitString> {
        indices.iter().map(|&i| index_to_bitstring(i, width).unwrap()).collect()
    }

    fn labels(strings: &[BitString]) -> Vec<String> {
        strings.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_preserves_order_and_multiplicity() {
        let input = bits(&[3, 0, 2, 3, 1], 2);
        let node = split(&input, 0, 2).unwrap();
        assert_eq!(node.idx, 0);
        assert_eq!(labels(&node.zero_branch), vec!["00", "01"]);
        assert_eq!(labels(&node.one_branch), vec!["11", "10", "11"]);
        assert_eq!(node.len(), input.len());
    }

    #[test]
    fn test_split_terminal_conditions() {
        assert!(split(&[], 0, 3).is_none());
        assert!(split(&bits(&[1], 3), 3, 3).is_none());
    }

    #[test]
    fn test_scenario_a_nodes() {
        // "000", "001"
        let nodes = partition(&bits(&[0, 1], 3), 0, 3);
        assert_eq!(nodes.iter().map(|n| n.idx).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(nodes[0].one_branch.is_empty());
        assert!(nodes[1].one_branch.is_empty());
        assert_eq!(labels(&nodes[2].zero_branch), vec!["000"]);
        assert_eq!(labels(&nodes[2].one_branch), vec!["001"]);
    }

    #[test]
    fn test_one_branch_subtree_visited_first() {
        // "00", "11": root splits; the "11" subtree must come before "00".
        let nodes = partition(&bits(&[0, 3], 2), 0, 2);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].idx, 0);
        assert_eq!(labels(&nodes[1].one_branch), vec!["11"]);
        assert_eq!(labels(&nodes[2].zero_branch), vec!["00"]);
    }

    #[test]
    fn test_entire_one_subtree_precedes_zero_subtree() {
        // W=3: "000", "010", "100", "111"
        let nodes = partition(&bits(&[0, 2, 4, 7], 3), 0, 3);
        let order: Vec<(usize, Option<String>)> = nodes
            .iter()
            .map(|n| (n.idx, n.representative().map(|s| s.to_string()[..n.idx].to_string())))
            .collect();
        assert_eq!(order, vec![
            (0, Some("".into())),
            (1, Some("1".into())),
            (2, Some("11".into())),
            (2, Some("10".into())),
            (1, Some("0".into())),
            (2, Some("01".into())),
            (2, Some("00".into())),
        ]);
    }

    #[test]
    fn test_duplicates_travel_together() {
        let nodes = partition(&bits(&[1, 1], 2), 0, 2);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].zero_branch.len(), 2);
        assert_eq!(nodes[1].one_branch.len(), 2);
    }

    #[test]
    fn test_traverse_is_lazy_and_complete() {
        let input = bits(&(0..16).collect::<Vec<_>>(), 4);
        let mut walk = traverse(input.clone(), 4);
        assert_eq!(walk.next().map(|n| n.idx), Some(0));
        // Full tree over all 16 states: 1 + 2 + 4 + 8 internal nodes.
        assert_eq!(traverse(input, 4).count(), 15);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(partition(&[], 0, 4).is_empty());
    }
}
