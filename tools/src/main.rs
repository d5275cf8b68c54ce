//! calib-runner: headless calibration runner.
//!
//! Usage:
//!   calib-runner --seed 12345 --trials 100000
//!   calib-runner --cost 50 --prizes 1,10,100 --return-rate 0.9 --json

use anyhow::Result;
use payout_core::{run_scenario, CalibrationReport, DrawRng, FitterParams, Scenario};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let trials = parse_arg(&args, "--trials", 100_000u64);
    let cost = parse_arg(&args, "--cost", 100.0f64);
    let return_rate = parse_arg(&args, "--return-rate", 0.7f64);
    let json = args.iter().any(|a| a == "--json");

    let defaults = FitterParams::default();
    let params = FitterParams {
        learning_rate: parse_arg(&args, "--lr", defaults.learning_rate),
        epsilon: parse_arg(&args, "--epsilon", defaults.epsilon),
        max_iterations: parse_arg(&args, "--max-iters", defaults.max_iterations),
    };

    let prizes: Vec<u64> = args
        .windows(2)
        .find(|w| w[0] == "--prizes")
        .map(|w| parse_prize_list(&w[1]))
        .unwrap_or_else(|| vec![1, 5, 8, 15, 50, 100, 300, 999]);

    let scenario = Scenario::new(cost, prizes, return_rate)?;

    if !json {
        println!("calib-runner — prize payout calibration");
        println!("  seed:        {seed}");
        println!("  trials:      {trials}");
        println!("  cost:        {cost}");
        println!("  return rate: {return_rate}");
        println!("  prizes:      {:?}", scenario.prizes);
        println!();
    }

    let mut rng = DrawRng::new(seed).with_name("trials");
    let report = run_scenario(&scenario, params, trials, &mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &CalibrationReport) {
    println!("=== FITTED PROBABILITIES ===");
    for (prize, probability) in report
        .scenario
        .prizes
        .iter()
        .zip(&report.fit.probabilities)
    {
        println!("  prize {prize:>6}: {probability:.6}");
    }
    println!("  expected value: {:.6}", report.fit.expected_value);
    println!("  target ev:      {:.6}", report.fit.target_ev);
    println!(
        "  converged:      {} ({} iterations)",
        report.fit.converged, report.fit.iterations
    );

    println!();
    println!("=== SIMULATION ({} trials) ===", report.simulation.trials);
    for prize in &report.scenario.prizes {
        let count = report.simulation.tally.get(prize).copied().unwrap_or(0);
        println!("  prize {prize:>6}: {count} wins");
    }
    if report.simulation.missed_trials > 0 {
        println!("  no prize:     {} trials", report.simulation.missed_trials);
    }
    println!("  total spent:   {:.0}", report.simulation.total_spent);
    println!("  total payout:  {:.0}", report.simulation.total_payout);
    println!(
        "  realized rate: {:.6} (target {:.6})",
        report.simulation.realized_return_rate, report.scenario.return_rate
    );
}

fn parse_prize_list(raw: &str) -> Vec<u64> {
    let mut prizes = Vec::new();
    for token in raw.split(',') {
        match token.trim().parse() {
            Ok(value) => prizes.push(value),
            Err(_) => log::warn!("Ignoring unparsable prize value '{}'", token.trim()),
        }
    }
    prizes
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
