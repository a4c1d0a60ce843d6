use astraprep::compiler::{self, analysis, GateSequence};
use astraprep::config::CompilerConfig;
use astraprep::core::check_width;
use astraprep::optimizer::FusionStats;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    print_banner();

    let rest = args.get(2..).unwrap_or(&[]);
    match args.get(1).map(String::as_str) {
        None | Some("demo")           => run_all_demos(),
        Some("compile")               => cli_compile(rest),
        Some("file")                  => cli_file(rest),
        Some("random")                => cli_random(rest),
        Some("analyze")               => cli_analyze(rest),
        Some("help") | Some("--help") => print_help(),
        Some(unknown) => {
            eprintln!("Unknown command '{}'. Run 'astraprep help' for usage.", unknown);
            std::process::exit(1);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ── Argument handling ─────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct CliArgs {
    positional: Vec<String>,
    width: Option<usize>,
    seed: Option<u64>,
    raw: bool,
}

impl CliArgs {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut out = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--width" | "-w" => {
                    let v = iter.next().ok_or("--width needs a value")?;
                    out.width = Some(v.parse().map_err(|_| format!("invalid width '{v}'"))?);
                }
                "--seed" => {
                    let v = iter.next().ok_or("--seed needs a value")?;
                    out.seed = Some(v.parse().map_err(|_| format!("invalid seed '{v}'"))?);
                }
                "--raw" => out.raw = true,
                _ => out.positional.push(arg.clone()),
            }
        }
        Ok(out)
    }

    fn config(&self) -> CompilerConfig {
        let mut config = CompilerConfig::from_env();
        if let Some(w) = self.width {
            config = config.with_width(w);
        }
        if self.raw {
            config = config.with_fusion(false);
        }
        config
    }
}

fn parse_args_or_exit(args: &[String]) -> CliArgs {
    match CliArgs::parse(args) {
        Ok(a) => a,
        Err(e) => { eprintln!("{e}"); std::process::exit(1); }
    }
}

fn indices_or_exit(source: &str) -> Vec<i64> {
    match compiler::parse_indices(source) {
        Ok(v) => v,
        Err(e) => { eprintln!("{e}"); std::process::exit(1); }
    }
}

fn compile_or_exit(indices: &[i64], config: &CompilerConfig) -> (GateSequence, FusionStats) {
    match compiler::compile_with_stats(indices, config) {
        Ok(r) => r,
        Err(e) => { eprintln!("{e}"); std::process::exit(1); }
    }
}

// ── CLI ───────────────────────────────────────────────────────────────────

fn cli_compile(args: &[String]) {
    let cli = parse_args_or_exit(args);
    if cli.positional.is_empty() {
        eprintln!("Usage: astraprep compile <index...> [--width N] [--raw]");
        std::process::exit(1);
    }
    let config = cli.config();
    let indices = indices_or_exit(&cli.positional.join(" "));

    println!("━━━ AstraPrep Compiler ━━━━━━━━━━━━━━━━━━━━━━━━━━");
    print_indices(&indices, config.width);
    let (seq, stats) = compile_or_exit(&indices, &config);
    print_sequence(&seq, &stats);
}

fn cli_file(args: &[String]) {
    let cli = parse_args_or_exit(args);
    let path = match cli.positional.first() {
        Some(p) => p.clone(),
        None => { eprintln!("Usage: astraprep file <indices.txt> [--width N] [--raw]"); std::process::exit(1); }
    };
    let source = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => { eprintln!("Cannot read '{}': {}", path, e); std::process::exit(1); }
    };
    let indices = indices_or_exit(&source);
    let config = cli.config();

    println!("━━━ AstraPrep Compiler ━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("File: {path}");
    print_indices(&indices, config.width);
    let (seq, stats) = compile_or_exit(&indices, &config);
    print_sequence(&seq, &stats);
}

fn cli_random(args: &[String]) {
    let cli = parse_args_or_exit(args);
    let count: usize = match cli.positional.first().map(|s| s.parse()) {
        Some(Ok(n)) => n,
        _ => {
            eprintln!("Usage: astraprep random <count> [--width N] [--seed S] [--raw]");
            std::process::exit(1);
        }
    };
    let config = cli.config();
    if let Err(e) = check_width(config.width) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    let space = 1usize << config.width;
    if count > space {
        eprintln!("Cannot select {count} distinct states from a {}-qubit register", config.width);
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut indices: Vec<i64> = rand::seq::index::sample(&mut rng, space, count)
        .into_iter()
        .map(|i| i as i64)
        .collect();
    indices.sort_unstable();

    println!("━━━ AstraPrep Random Selection ━━━━━━━━━━━━━━━━━━");
    print_indices(&indices, config.width);
    let (seq, stats) = compile_or_exit(&indices, &config);
    print_sequence(&seq, &stats);
}

fn cli_analyze(args: &[String]) {
    let cli = parse_args_or_exit(args);
    if cli.positional.is_empty() {
        eprintln!("Usage: astraprep analyze <index...> [--width N]");
        std::process::exit(1);
    }
    let config = cli.config();
    let indices = indices_or_exit(&cli.positional.join(" "));

    println!("━━━ AstraPrep Sequence Analyzer ━━━━━━━━━━━━━━━━━");
    let (seq, _) = compile_or_exit(&indices, &config);
    print!("{}", analysis::analyze(&seq).report());
}

fn print_indices(indices: &[i64], width: usize) {
    let shown: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
    println!("Width: {width}   Selected: {} state(s)", indices.len());
    println!("  [{}]\n", shown.join(", "));
}

fn print_sequence(seq: &GateSequence, stats: &FusionStats) {
    println!("Gate sequence:");
    for instr in seq {
        println!("  {instr}");
    }
    println!();
    println!("Gates raw    : {}", stats.gates_before);
    println!("Gates fused  : {}  (-{:.1}%)", stats.gates_after, stats.reduction_percent());
    println!(
        "By kind      : {} I | {} MCX | {} MCH",
        seq.identity_count, seq.flip_count, seq.superpose_count
    );
}

fn print_banner() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║          AstraPrep v0.1.0                    ║");
    println!("║  Basis-State Gate Sequence Compiler          ║");
    println!("╚══════════════════════════════════════════════╝");
    println!();
}

fn print_help() {
    println!("Usage: astraprep [COMMAND] [ARGS]\n");
    println!("Commands:");
    println!("  demo                       Run the built-in scenarios");
    println!("  compile <index...>         Compile the given basis-state indices");
    println!("  file <indices.txt>         Compile indices read from a file");
    println!("  random <count>             Compile a random selection of distinct states");
    println!("  analyze <index...>         Static analysis of the compiled sequence");
    println!("  help                       Show this message\n");
    println!("Options:");
    println!("  --width, -w <N>            Register width (default 9, or ASTRAPREP_WIDTH)");
    println!("  --seed <S>                 Seed for 'random'");
    println!("  --raw                      Skip adjacent-duplicate fusion\n");
    println!("Index lists: decimal or 0b-prefixed binary, separated by spaces or commas.");
    println!("Comments:    // or #");
    println!("Logging:     RUST_LOG=astraprep=debug");
}

// ── Demos ─────────────────────────────────────────────────────────────────

fn run_all_demos() {
    demo_scenario("Demo 1: Two neighbouring states", &[0, 1], 3);
    demo_scenario("Demo 2: Single ground state", &[0], 2);
    demo_scenario("Demo 3: Repeated index", &[1, 1], 2);
}

fn demo_scenario(title: &str, indices: &[i64], width: usize) {
    println!("━━━ {title} ━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let config = CompilerConfig::default().with_width(width);
    print_indices(indices, width);
    match compiler::compile_with_stats(indices, &config) {
        Ok((seq, stats)) => print_sequence(&seq, &stats),
        Err(e) => eprintln!("Error: {e}"),
    }
    println!();
}
