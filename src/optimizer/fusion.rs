/// Adjacent-duplicate fusion for gate sequences.
///
/// Algorithm
/// ---------
/// Stream instructions left-to-right into an output buffer. Compare each
/// incoming instruction with the last one kept only: if every field matches,
/// drop it; otherwise push it.
///
/// Only direct neighbours collapse. A repeat separated by any other
/// instruction survives, so `[g, h, g]` stays three instructions long.
/// One pass reaches the fixed point: the output never holds two equal
/// neighbours, so fusing it again changes nothing.
use crate::compiler::ir::GateInstruction;

// ── Public API ─────────────────────────────────────────────────────────────

/// Statistics reported after fusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FusionStats {
    /// Instruction count before fusion.
    pub gates_before: usize,
    /// Instruction count after fusion.
    pub gates_after: usize,
    /// Instructions dropped as adjacent duplicates.
    pub gates_removed: usize,
}

impl FusionStats {
    /// Fraction of instructions eliminated (0.0 – 1.0).
    pub fn reduction_ratio(&self) -> f64 {
        if self.gates_before == 0 { return 0.0; }
        self.gates_removed as f64 / self.gates_before as f64
    }

    /// Percentage of instructions eliminated (0.0 – 100.0).
    pub fn reduction_percent(&self) -> f64 {
        self.reduction_ratio() * 100.0
    }
}

/// Collapse adjacent duplicates in `instructions`.
pub fn fuse<I>(instructions: I) -> Vec<GateInstruction>
where
    I: IntoIterator<Item = GateInstruction>,
{
    fuse_with_stats(instructions).0
}

/// Collapse adjacent duplicates and report what was removed.
pub fn fuse_with_stats<I>(instructions: I) -> (Vec<GateInstruction>, FusionStats)
where
    I: IntoIterator<Item = GateInstruction>,
{
    let mut gates_before = 0usize;
    let out = instructions.into_iter().fold(Vec::new(), |mut out: Vec<GateInstruction>, g| {
        gates_before += 1;
        if out.last() != Some(&g) {
            out.push(g);
        }
        out
    });

    let stats = FusionStats {
        gates_before,
        gates_after: out.len(),
        gates_removed: gates_before - out.len(),
    };
    tracing::debug!(
        before = stats.gates_before,
        after = stats.gates_after,
        removed = stats.gates_removed,
        "fused gate stream"
    );
    (out, stats)
}

// ── Tests ──────────────────────────────────────────────────────────────────
