/// Gate-sequence Intermediate Representation.
///
/// The compiler's output is a flat, ordered list of `GateInstruction`s wrapped
/// in a `GateSequence`. Every instruction is a single-target gate guarded by an
/// ordered list of control positions and the value each control must hold.
///
/// Design principles:
///   - Closed gate set: `GateKind` has exactly three variants
///   - Instructions are immutable values; equality compares every field,
///     including control order and length
///   - Display impl produces one readable line per instruction
use crate::error::CompileError;
use std::fmt;

// ── GateKind ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Explicit no-op marking a position no selected state sets.
    Identity,
    /// Multi-controlled X: the prefix fully determines the target bit as 1.
    ControlledFlip,
    /// Multi-controlled H: the target bit is undetermined by the prefix.
    ControlledSuperpose,
}

impl GateKind {
    /// Mnemonic used in listings and reports.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Identity            => "I",
            Self::ControlledFlip      => "MCX",
            Self::ControlledSuperpose => "MCH",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

// ── GateInstruction ───────────────────────────────────────────────────────

/// One multi-controlled single-qubit gate.
///
/// Invariants (upheld by the constructors):
///   - `controls` and `control_states` have the same length and are aligned
///   - `target` is not one of `controls`
///   - every control state is 0 or 1
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GateInstruction {
    controls: Vec<usize>,
    control_states: Vec<u8>,
    target: usize,
    kind: GateKind,
}

impl GateInstruction {
    /// Uncontrolled identity on `target`.
    pub fn identity(target: usize) -> Self {
        Self { controls: Vec::new(), control_states: Vec::new(), target, kind: GateKind::Identity }
    }

    /// Controlled gate of `kind` on `target`, conditioned on `controls`
    /// holding `control_states`.
    ///
    /// Fails with `InvalidInstruction` when the lengths differ, a control
    /// repeats the target, a state is not 0 or 1, or `kind` is `Identity`.
    pub fn try_controlled(
        kind: GateKind,
        controls: Vec<usize>,
        control_states: Vec<u8>,
        target: usize,
    ) -> Result<Self, CompileError> {
        let invalid = |msg: &str| CompileError::InvalidInstruction { target, msg: msg.to_string() };
        if kind == GateKind::Identity {
            return Err(invalid("identity takes no controls"));
        }
        if controls.len() != control_states.len() {
            return Err(invalid("controls and control states differ in length"));
        }
        if controls.contains(&target) {
            return Err(invalid("target is also a control"));
        }
        if control_states.iter().any(|&v| v > 1) {
            return Err(invalid("control state must be 0 or 1"));
        }
        Ok(Self { controls, control_states, target, kind })
    }

    /// Unchecked form of [`GateInstruction::try_controlled`]. The synthesizer
    /// only builds controls `0..target` from a string prefix, which always
    /// satisfies the invariants.
    pub(crate) fn controlled(
        kind: GateKind,
        controls: Vec<usize>,
        control_states: Vec<u8>,
        target: usize,
    ) -> Self {
        debug_assert_eq!(controls.len(), control_states.len());
        debug_assert!(!controls.contains(&target), "target {target} is also a control");
        debug_assert!(control_states.iter().all(|&v| v <= 1));
        Self { controls, control_states, target, kind }
    }

    pub fn controls(&self) -> &[usize] {
        &self.controls
    }

    pub fn control_states(&self) -> &[u8] {
        &self.control_states
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// Every qubit position this instruction touches, controls first.
    pub fn qubits(&self) -> Vec<usize> {
        let mut qs = self.controls.clone();
        qs.push(self.target);
        qs
    }
}

impl fmt::Display for GateInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for (q, v) in self.controls.iter().zip(&self.control_states) {
            write!(f, " c{q}={v}")?;
        }
        write!(f, " -> q{}", self.target)
    }
}

// ── GateSequence ──────────────────────────────────────────────────────────

/// The compiled, fused output for one list of selected indices.
#[derive(Debug, Clone, PartialEq)]
pub struct GateSequence {
    /// Register width the sequence was compiled for.
    pub width: usize,
    /// Ordered instruction stream.
    pub instructions: Vec<GateInstruction>,
    /// Number of `Identity` instructions.
    pub identity_count: usize,
    /// Number of `ControlledFlip` instructions.
    pub flip_count: usize,
    /// Number of `ControlledSuperpose` instructions.
    pub superpose_count: usize,
}

impl GateSequence {
    pub fn new(width: usize, instructions: Vec<GateInstruction>) -> Self {
        let count = |k: GateKind| instructions.iter().filter(|g| g.kind == k).count();
        let identity_count  = count(GateKind::Identity);
        let flip_count      = count(GateKind::ControlledFlip);
        let superpose_count = count(GateKind::ControlledSuperpose);
        Self { width, instructions, identity_count, flip_count, superpose_count }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GateInstruction> {
        self.instructions.iter()
    }
}

impl<'a> IntoIterator for &'a GateSequence {
    type Item = &'a GateInstruction;
    type IntoIter = std::slice::Iter<'a, GateInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl fmt::Display for GateSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WIDTH {}", self.width)?;
        for instr in &self.instructions {
            writeln!(f, "{instr}")?;
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
