//! Binary for the LTL-to-AIG translator

#![warn(missing_docs)]

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Parser;
use fxhash::FxHashMap;

use ltl2aig::cli::Cli;
use ltl2aig::{
    lift, negate_ltl2ba, parse_nba, read_formulae, read_partition, run_checker, run_ltl2ba,
    write_aig, wring_to_ltl2ba, Circuit, Error, Realizability, Signal,
};

const EXIT_STATUS_REALIZABLE: i32 = 10;
const EXIT_STATUS_UNREALIZABLE: i32 = 20;
const EXIT_STATUS_UNKNOWN: i32 = 30;

#[doc(hidden)]
fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<i32, Error> {
    let partition = read_partition(&cli.part)?;
    log::info!(
        "{} inputs, {} outputs",
        partition.inputs.len(),
        partition.outputs.len()
    );

    let wring_formulae = read_formulae(&cli.formula, cli.compositional)?;
    log::info!("{} spec unit(s) read", wring_formulae.len());

    let mut circuit = Circuit::new();
    let mut var_offset: Option<u32> = None;
    let mut latch_net: FxHashMap<u32, Signal> = FxHashMap::default();
    let mut error_net = Signal::FALSE;

    for (name, wring_formula) in &wring_formulae {
        let ltl2ba_formula =
            wring_to_ltl2ba(wring_formula, &partition.inputs, &partition.outputs, &cli.formula)?;
        let formula = negate_ltl2ba(&ltl2ba_formula);
        log::debug!("spec unit {name}: negated formula = {formula}");

        let automaton_text = run_ltl2ba(&cli.ltl2ba, &formula)?;
        let nba = parse_nba("ltl2ba", &formula, &automaton_text)?;
        log::info!("spec unit {name}: automaton has {} states", nba.states.len());

        let lifted = lift(
            &mut circuit,
            &partition.inputs,
            &partition.outputs,
            cli.k,
            &nba,
            var_offset,
        );
        var_offset = Some(lifted.next_var_offset);
        latch_net.extend(lifted.latch_net);
        error_net = circuit.or(error_net, lifted.error_net);
    }

    let result = run_checker(&cli.checker, &cli.formula, &cli.part, cli.k, cli.compositional)?;
    let (suffix, exit_code) = match result {
        Realizability::Realizable => ("REAL", EXIT_STATUS_REALIZABLE),
        Realizability::Unrealizable => ("UNREAL", EXIT_STATUS_UNREALIZABLE),
        Realizability::Unknown => ("UNREAL", EXIT_STATUS_UNKNOWN),
    };
    log::info!("realizability checker result: {result:?}");

    let out_path = output_path(&cli.formula, cli.k, suffix);
    let file = std::fs::File::create(&out_path).map_err(|e| Error::Io(out_path.clone(), e))?;
    write_aig(
        BufWriter::new(file),
        &circuit,
        &partition.inputs,
        &partition.outputs,
        &latch_net,
        error_net,
    )
    .map_err(|e| Error::Io(out_path.clone(), e))?;
    log::info!("wrote {}", out_path.display());

    Ok(exit_code)
}

fn output_path(formula_path: &Path, k: u32, suffix: &str) -> PathBuf {
    let stem = formula_path.with_extension("");
    PathBuf::from(format!("{}_{k}_{suffix}.aag", stem.display()))
}
