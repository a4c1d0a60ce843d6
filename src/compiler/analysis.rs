/// Gate-sequence analysis: static profiling of compiled output.
///
/// Computes structural metrics for a `GateSequence`:
///
/// | Metric              | Description                                               |
/// |---------------------|-----------------------------------------------------------|
/// | `gate_count`        | Every instruction, identities included                    |
/// | `active_gate_count` | Instructions other than `Identity`                        |
/// | `circuit_depth`     | Critical-path length of active gates, unbounded parallelism |
/// | `max_controls`      | Largest control list in the sequence                      |
/// | `control_refs`      | Sum of control-list lengths                               |
/// | `gate_histogram`    | Per-mnemonic counts                                       |
/// | `qubit_utilization` | Active gates touching each qubit, as control or target    |
///
/// Identities are bookkeeping no-ops: they count toward `gate_count` and the
/// histogram but never advance depth or utilization.
use std::collections::HashMap;
use super::ir::{GateKind, GateSequence};

// ── Public types ──────────────────────────────────────────────────────────

/// Static analysis result for a compiled sequence.
#[derive(Debug, Clone)]
pub struct SequenceAnalysis {
    /// Register width the sequence targets.
    pub width: usize,
    /// Number of instructions, identities included.
    pub gate_count: usize,
    /// Number of non-identity instructions.
    pub active_gate_count: usize,
    /// Minimum number of sequential time steps for the active gates,
    /// assuming gates on disjoint qubits run in parallel.
    pub circuit_depth: usize,
    /// Largest number of controls on any one instruction.
    pub max_controls: usize,
    /// Total control references across all instructions.
    pub control_refs: usize,
    /// Count of each gate mnemonic.
    pub gate_histogram: HashMap<String, usize>,
    /// Number of active gates touching each qubit. Index = qubit.
    pub qubit_utilization: Vec<usize>,
}

impl SequenceAnalysis {
    /// Mean number of controls per active gate.
    pub fn avg_controls(&self) -> f64 {
        if self.active_gate_count == 0 { return 0.0; }
        self.control_refs as f64 / self.active_gate_count as f64
    }

    /// Human-readable profiling report.
    pub fn report(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("  Width          : {}\n", self.width));
        out.push_str(&format!("  Gate count     : {}  (active: {})\n",
            self.gate_count, self.active_gate_count));
        out.push_str(&format!("  Circuit depth  : {}\n", self.circuit_depth));
        out.push_str(&format!("  Max controls   : {}\n", self.max_controls));
        out.push_str(&format!("  Avg controls   : {:.2}\n", self.avg_controls()));

        out.push_str("\n  Gate breakdown:\n");
        let mut hist: Vec<(&String, &usize)> = self.gate_histogram.iter().collect();
        hist.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        for (mnemonic, count) in hist {
            out.push_str(&format!("    {:8}  {count}\n", mnemonic));
        }

        out.push_str("\n  Qubit utilization (active gate touches per qubit):\n");
        let max_uses = self.qubit_utilization.iter().copied().max().unwrap_or(1).max(1);
        for (q, &uses) in self.qubit_utilization.iter().enumerate() {
            let bar_len = (uses * 20 / max_uses).min(20);
            let bar = "█".repeat(bar_len);
            let pad = " ".repeat(20 - bar_len);
            out.push_str(&format!("    q{q:<2}  {bar}{pad}  {uses}\n"));
        }

        out
    }
}

// ── Public API ────────────────────────────────────────────────────────────

/// Analyze a compiled `GateSequence`.
///
/// Per-qubit tables cover `seq.width` positions, widened to reach any
/// instruction that names a qubit beyond it.
///
/// # Example
/// ```rust
/// use astraprep::compiler::{analyze, compile};
///
/// // "11": flip q0, then flip q1 controlled on q0 → depth 2
/// let seq = compile(&[3], 2).unwrap();
/// let a = analyze(&seq);
/// assert_eq!(a.circuit_depth, 2);
/// assert_eq!(a.max_controls, 1);
/// ```
pub fn analyze(seq: &GateSequence) -> SequenceAnalysis {
    let span = seq
        .iter()
        .flat_map(|g| g.qubits())
        .map(|q| q + 1)
        .fold(seq.width, usize::max);
    let mut qubit_time = vec![0usize; span];
    let mut qubit_utilization = vec![0usize; span];
    let mut gate_histogram: HashMap<String, usize> = HashMap::new();
    let mut active_gate_count = 0usize;
    let mut max_controls = 0usize;
    let mut control_refs = 0usize;

    for g in seq {
        *gate_histogram.entry(g.kind().mnemonic().to_string()).or_insert(0) += 1;
        if g.kind() == GateKind::Identity {
            continue;
        }

        active_gate_count += 1;
        max_controls = max_controls.max(g.controls().len());
        control_refs += g.controls().len();

        let qs = g.qubits();
        for &q in &qs {
            qubit_utilization[q] += 1;
        }
        let start = qs.iter().map(|&q| qubit_time[q]).max().unwrap_or(0);
        for &q in &qs {
            qubit_time[q] = start + 1;
        }
    }

    SequenceAnalysis {
        width: seq.width,
        gate_count: seq.len(),
        active_gate_count,
        circuit_depth: qubit_time.iter().copied().max().unwrap_or(0),
        max_controls,
        control_refs,
        gate_histogram,
        qubit_utilization,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
