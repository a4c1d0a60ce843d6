/// Gate synthesizer. Maps one decision node to its gate instructions.
///
/// Rules, first match wins:
///   1. one-branch empty   → one `Identity` on `idx`, no controls
///   2. zero-branch empty  → one `ControlledFlip` per one-branch string
///   3. both non-empty     → one `ControlledSuperpose` per string,
///                           zero-branch strings first
///
/// Controlled gates use controls `0..idx` with each string's own prefix bits
/// as the expected states. Rules 2 and 3 emit per string, so the output may
/// hold equal instructions back to back; the fuser collapses those.
use super::ir::{GateInstruction, GateKind};
use super::partition::DecisionNode;
use crate::core::BitString;

/// Instructions for `node`, in emission order.
pub fn synthesize(node: &DecisionNode) -> Vec<GateInstruction> {
    if node.one_branch.is_empty() {
        return vec![GateInstruction::identity(node.idx)];
    }

    if node.zero_branch.is_empty() {
        return controlled_per_string(GateKind::ControlledFlip, node.idx, &node.one_branch)
            .collect();
    }

    controlled_per_string(GateKind::ControlledSuperpose, node.idx, &node.zero_branch)
        .chain(controlled_per_string(GateKind::ControlledSuperpose, node.idx, &node.one_branch))
        .collect()
}

fn controlled_per_string(
    kind: GateKind,
    target: usize,
    strings: &[BitString],
) -> impl Iterator<Item = GateInstruction> + '_ {
    strings.iter().map(move |s| {
        GateInstruction::controlled(kind, (0..target).collect(), s.prefix(target), target)
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────
