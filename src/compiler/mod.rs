/// State-preparation compiler pipeline.
///
/// Pipeline: indices → BitStrings → Partitioner → Synthesizer → Fuser → GateSequence
///
/// All validation happens once, at entry. Past that point the partitioner
/// and synthesizer assume fixed-width, well-formed data.
pub mod analysis;
pub mod input;
pub mod ir;
pub mod partition;
pub mod synth;

pub use analysis::{analyze, SequenceAnalysis};
pub use input::parse_indices;
pub use ir::{GateInstruction, GateKind, GateSequence};
pub use partition::{partition, split, traverse, DecisionNode};
pub use synth::synthesize;
pub use crate::error::CompileError;

use crate::config::{CompilerConfig, DuplicatePolicy};
use crate::core::{bitstring_to_index, check_width, index_to_bitstring, BitString};
use crate::optimizer::{fuse_with_stats, FusionStats};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Compile `indices` for a `width`-qubit register with default settings.
pub fn compile(indices: &[i64], width: usize) -> Result<GateSequence, CompileError> {
    compile_with_config(indices, &CompilerConfig::default().with_width(width))
}

/// Compile `indices` under an explicit configuration.
pub fn compile_with_config(
    indices: &[i64],
    config: &CompilerConfig,
) -> Result<GateSequence, CompileError> {
    compile_with_stats(indices, config).map(|(seq, _)| seq)
}

/// Compile and also report raw (pre-fusion) and fused instruction counts.
pub fn compile_with_stats(
    indices: &[i64],
    config: &CompilerConfig,
) -> Result<(GateSequence, FusionStats), CompileError> {
    let strings = to_bitstrings(indices, config.width)?;
    compile_bitstrings(&strings, config)
}

/// Compile pre-built bit-strings. Every string must have `config.width` bits.
pub fn compile_bitstrings(
    strings: &[BitString],
    config: &CompilerConfig,
) -> Result<(GateSequence, FusionStats), CompileError> {
    let raw = raw_from_bitstrings(strings, config)?;
    let (instructions, stats) = if config.fusion {
        fuse_with_stats(raw)
    } else {
        let n = raw.len();
        (raw, FusionStats { gates_before: n, gates_after: n, gates_removed: 0 })
    };
    debug!(
        raw = stats.gates_before,
        fused = stats.gates_after,
        fusion = config.fusion,
        "compiled gate sequence"
    );
    Ok((GateSequence::new(config.width, instructions), stats))
}

/// The synthesized stream before fusion, in traversal order.
pub fn raw_instructions(
    indices: &[i64],
    config: &CompilerConfig,
) -> Result<Vec<GateInstruction>, CompileError> {
    let strings = to_bitstrings(indices, config.width)?;
    raw_from_bitstrings(&strings, config)
}

fn raw_from_bitstrings(
    strings: &[BitString],
    config: &CompilerConfig,
) -> Result<Vec<GateInstruction>, CompileError> {
    validate(strings, config)?;
    debug!(strings = strings.len(), width = config.width, "partitioning");

    let mut raw = Vec::new();
    let mut nodes = 0usize;
    for node in traverse(strings.to_vec(), config.width) {
        trace!(
            idx = node.idx,
            zeros = node.zero_branch.len(),
            ones = node.one_branch.len(),
            "decision node"
        );
        nodes += 1;
        raw.extend(synthesize(&node));
    }
    debug!(nodes, raw = raw.len(), "synthesized");
    Ok(raw)
}

// ── Validation ────────────────────────────────────────────────────────────

fn to_bitstrings(indices: &[i64], width: usize) -> Result<Vec<BitString>, CompileError> {
    indices.iter().map(|&i| index_to_bitstring(i, width)).collect()
}

fn validate(strings: &[BitString], config: &CompilerConfig) -> Result<(), CompileError> {
    check_width(config.width)?;

    if let Some(s) = strings.iter().find(|s| s.width() != config.width) {
        return Err(CompileError::InconsistentWidth { expected: config.width, found: s.width() });
    }

    if config.duplicates == DuplicatePolicy::Reject {
        let mut seen = HashSet::with_capacity(strings.len());
        for s in strings {
            if !seen.insert(*s) {
                return Err(CompileError::DuplicateIndex { index: bitstring_to_index(s) });
            }
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
