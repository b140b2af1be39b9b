//! Batch difficulty reporting over a puzzle corpus.
//!
//! Runs both grading engines (the rule-based human solver and the
//! forcing-chain solver) over every puzzle in a corpus, in parallel across
//! puzzles, and prints per-corpus aggregates: solve rates, the hardest
//! puzzle by rule score, by chain depth, and overall.
//!
//! # Usage
//!
//! Grade a corpus file (one 81-character puzzle per line, `#` comments and
//! blank lines skipped):
//!
//! ```sh
//! cargo run --release -p sudograde-report -- --input puzzles_17_clue.txt
//! ```
//!
//! Grade puzzles given directly on the command line:
//!
//! ```sh
//! cargo run -p sudograde-report -- 000000010400000000020000000000050407008000300001090000300400200050100000000806000
//! ```
//!
//! Emit machine-readable JSON instead of the text summary:
//!
//! ```sh
//! cargo run --release -p sudograde-report -- --input corpus.txt --json
//! ```
//!
//! With no input at all, a small embedded demo corpus is graded. Progress
//! and skipped-line diagnostics go through `log`; set `RUST_LOG=info` to see
//! them.

use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};

use clap::Parser;
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use sudograde_core::DigitGrid;
use sudograde_solver::{Rule, forcing_chain_solve, solve_with_rules};

/// A few published 17-clue puzzles (Royle collection), graded when no
/// corpus is supplied.
const DEMO_PUZZLES: &[&str] = &[
    "000000010400000000020000000000050407008000300001090000300400200050100000000806000",
    "000000010400000000020000000000050604008000300001090000300400200050100000000807000",
    "000000012000035000000600070700000300000400800100000000000120000080000040050000600",
    "000000012003600000000007000410020000000500300700000600280000040000300500000000000",
    "000000012008030000000000040120500000000004700060000000507000300000620000000100000",
];

/// Progress is logged every this many graded puzzles.
const PROGRESS_EVERY: usize = 5_000;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle list file: one 81-character puzzle per line.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Puzzles given directly on the command line.
    #[arg(value_name = "PUZZLE")]
    puzzles: Vec<String>,

    /// Grade at most this many puzzles.
    #[arg(long, value_name = "COUNT")]
    limit: Option<usize>,

    /// Emit JSON instead of the text summary.
    #[arg(long)]
    json: bool,
}

/// One rule's application count within a single solve.
#[derive(Debug, Clone, Serialize)]
struct RuleApplication {
    rule: &'static str,
    count: usize,
}

/// Combined grading record for one puzzle.
#[derive(Debug, Clone, Serialize)]
struct PuzzleRecord {
    /// 1-based position in the graded corpus.
    number: usize,
    puzzle: String,
    solved_by_rules: bool,
    hardest_rule: Option<&'static str>,
    total_score: u32,
    steps: usize,
    applications: Vec<RuleApplication>,
    chain_solved: bool,
    max_chain_depth: usize,
    ten_step_reasoning: bool,
}

/// Pointer to a notable puzzle within the corpus summary.
#[derive(Debug, Clone, Copy, Serialize)]
struct PuzzleRef {
    number: usize,
    /// Rule-solver score; `None` when the rules did not finish the puzzle.
    score: Option<u32>,
    depth: usize,
}

/// Whole-corpus report.
#[derive(Debug, Serialize)]
struct Report {
    total: usize,
    rules_solved: usize,
    chain_solved: usize,
    ten_step_count: usize,
    hardest_by_score: Option<PuzzleRef>,
    hardest_by_depth: Option<PuzzleRef>,
    hardest_overall: Option<PuzzleRef>,
    records: Vec<PuzzleRecord>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let puzzles = load_puzzles(&args);
    if puzzles.is_empty() {
        eprintln!("No valid puzzles to grade.");
        process::exit(1);
    }
    info!("grading {} puzzles", puzzles.len());

    let progress = AtomicUsize::new(0);
    let records: Vec<PuzzleRecord> = puzzles
        .par_iter()
        .enumerate()
        .map(|(i, grid)| {
            let record = grade(i + 1, grid);
            let done = progress.fetch_add(1, Ordering::Relaxed) + 1;
            if done.is_multiple_of(PROGRESS_EVERY) {
                info!("... {done} / {}", puzzles.len());
            }
            record
        })
        .collect();

    let report = summarize(records);
    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Failed to serialize report: {err}");
                process::exit(1);
            }
        }
    } else {
        print_report(&report);
    }
}

/// Collects puzzles from the command line, the input file, or the embedded
/// demo corpus, in that order of preference. Malformed lines are logged and
/// skipped, never fatal.
fn load_puzzles(args: &Args) -> Vec<DigitGrid> {
    let mut lines: Vec<String> = args.puzzles.clone();

    if let Some(path) = &args.input {
        match fs::read_to_string(path) {
            Ok(contents) => {
                lines.extend(
                    contents
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty() && !line.starts_with('#'))
                        .map(str::to_owned),
                );
            }
            Err(err) => {
                eprintln!("Failed to read {}: {err}", path.display());
                process::exit(1);
            }
        }
    }

    if lines.is_empty() {
        info!("no input given; grading the embedded demo corpus");
        lines.extend(DEMO_PUZZLES.iter().map(|&s| s.to_owned()));
    }

    if let Some(limit) = args.limit {
        lines.truncate(limit);
    }

    lines
        .into_iter()
        .enumerate()
        .filter_map(|(i, line)| match line.parse::<DigitGrid>() {
            Ok(grid) => Some(grid),
            Err(err) => {
                warn!("skipping puzzle {}: {err}", i + 1);
                None
            }
        })
        .collect()
}

/// Runs both engines over one puzzle.
fn grade(number: usize, grid: &DigitGrid) -> PuzzleRecord {
    let rules = solve_with_rules(grid);
    let chain = forcing_chain_solve(grid);

    let applications = Rule::ALL
        .iter()
        .map(|&rule| RuleApplication {
            rule: rule.name(),
            count: rules.count(rule),
        })
        .filter(|application| application.count > 0)
        .collect();

    PuzzleRecord {
        number,
        puzzle: grid.to_string(),
        solved_by_rules: rules.solved(),
        hardest_rule: rules.hardest_rule().map(Rule::name),
        total_score: rules.total_score(),
        steps: rules.steps(),
        applications,
        chain_solved: chain.solved(),
        max_chain_depth: chain.max_chain_depth(),
        ten_step_reasoning: chain.ten_step_reasoning(),
    }
}

impl PuzzleRecord {
    fn score_if_solved(&self) -> Option<u32> {
        self.solved_by_rules.then_some(self.total_score)
    }
}

/// Aggregates per-puzzle records into a corpus report.
///
/// "Hardest overall" prefers chain depth, then rule score, among puzzles
/// the rules actually solved.
fn summarize(records: Vec<PuzzleRecord>) -> Report {
    let total = records.len();
    let rules_solved = records.iter().filter(|r| r.solved_by_rules).count();
    let chain_solved = records.iter().filter(|r| r.chain_solved).count();
    let ten_step_count = records.iter().filter(|r| r.ten_step_reasoning).count();

    let hardest_by_score = records
        .iter()
        .filter(|r| r.solved_by_rules)
        .max_by_key(|r| r.total_score)
        .map(puzzle_ref);
    let hardest_by_depth = records
        .iter()
        .max_by_key(|r| r.max_chain_depth)
        .map(puzzle_ref);
    let hardest_overall = records
        .iter()
        .filter(|r| r.solved_by_rules)
        .max_by_key(|r| (r.max_chain_depth, r.total_score))
        .map(puzzle_ref);

    Report {
        total,
        rules_solved,
        chain_solved,
        ten_step_count,
        hardest_by_score,
        hardest_by_depth,
        hardest_overall,
        records,
    }
}

fn puzzle_ref(record: &PuzzleRecord) -> PuzzleRef {
    PuzzleRef {
        number: record.number,
        score: record.score_if_solved(),
        depth: record.max_chain_depth,
    }
}

fn describe(best: PuzzleRef) -> String {
    let score = best.score.map_or_else(|| "-".to_owned(), |s| s.to_string());
    format!("score {score}, depth {}", best.depth)
}

fn print_report(report: &Report) {
    println!("Graded {} puzzles", report.total);
    println!("  solved by rules:         {}", report.rules_solved);
    println!("  solved by forcing chain: {}", report.chain_solved);
    println!("  ten-step reasoning:      {}", report.ten_step_count);
    println!();

    if let Some(best) = report.hardest_by_score {
        println!("Hardest by rule score:");
        println!("  #{}  {}", best.number, describe(best));
    }
    if let Some(best) = report.hardest_by_depth {
        println!("Hardest by chain depth:");
        println!("  #{}  {}", best.number, describe(best));
    }
    if let Some(best) = report.hardest_overall {
        println!("Hardest overall (depth first, then score):");
        println!("  #{}  {}", best.number, describe(best));
    }
    println!();

    println!("Rule usage across corpus:");
    for rule in Rule::ALL {
        let count: usize = report
            .records
            .iter()
            .flat_map(|r| &r.applications)
            .filter(|a| a.rule == rule.name())
            .map(|a| a.count)
            .sum();
        println!("  {:<20} {count}", rule.name());
    }

    if report.records.len() <= 50 {
        println!();
        println!("Per-puzzle results:");
        for record in &report.records {
            println!(
                "  #{:<4} score {:<4} steps {:<4} depth {:<3} hardest {}",
                record.number,
                if record.solved_by_rules {
                    record.total_score.to_string()
                } else {
                    "-".to_owned()
                },
                record.steps,
                record.max_chain_depth,
                record.hardest_rule.unwrap_or("-"),
            );
        }
    }
}
