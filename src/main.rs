// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;

use gapfinder::cases::{DEMO_CASES, ERROR_CASES};
use gapfinder::{Solver, StrategyKind};

mod cli;
use cli::demo;
use cli::display::{self, ConsoleReporter};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Demo { strategies } => run_demo(&strategies),
        Commands::Solve {
            strategy,
            json,
            numbers,
        } => run_solve(strategy, json, &numbers),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// DEMO
// ═══════════════════════════════════════════════════════════════════════════

/// Replay both tables per strategy. Returns whether every case behaved.
fn run_demo(strategies: &[StrategyKind]) -> Result<bool> {
    let strategies = if strategies.is_empty() {
        &StrategyKind::ALL[..]
    } else {
        strategies
    };

    // One solver for the whole demo, re-pointed at each strategy in turn
    let mut solver = Solver::try_new(strategies.first().map(|kind| kind.build_default()))
        .context("no strategy selected")?
        .with_reporter(Box::new(ConsoleReporter));

    let mut all_ok = true;
    for &kind in strategies {
        solver
            .set_strategy(Some(kind.build_default()))
            .with_context(|| format!("installing {}", kind))?;

        display::banner(&format!("Missing Number Finder using {}", kind));
        println!();
        all_ok &= demo::run_strategy_table(&solver, DEMO_CASES).all_passed();
        println!();
        all_ok &= demo::run_error_table(&solver, ERROR_CASES).all_passed();
        println!();
    }

    Ok(all_ok)
}

// ═══════════════════════════════════════════════════════════════════════════
// SOLVE
// ═══════════════════════════════════════════════════════════════════════════

/// Solve one array. Returns false when the input was rejected.
fn run_solve(strategy: StrategyKind, json: bool, numbers: &[i64]) -> Result<bool> {
    if json {
        return solve_json(strategy, numbers);
    }

    let solver = Solver::new(strategy.build_default()).with_reporter(Box::new(ConsoleReporter));
    Ok(solver.run(Some(numbers)).is_ok())
}

#[cfg(feature = "serde_json")]
fn solve_json(strategy: StrategyKind, numbers: &[i64]) -> Result<bool> {
    let outcome = Solver::new(strategy.build_default()).run(Some(numbers));
    let report = cli::report::SolveReport::new(strategy, numbers, outcome);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(outcome.is_ok())
}

#[cfg(not(feature = "serde_json"))]
fn solve_json(_: StrategyKind, _: &[i64]) -> Result<bool> {
    anyhow::bail!("this build has no JSON support (enable the `serde_json` feature)")
}
