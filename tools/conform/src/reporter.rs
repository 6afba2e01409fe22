use std::io::{self, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};
use serde::Serialize;

use crate::report::RunReport;
use crate::rule::{Rule, RuleResult};
use crate::rule_set::RuleSet;

pub fn print_header() {
    println!(
        "{}",
        "\n=== Project Conformance ===".if_supports_color(Stdout, |s| s.bold())
    );
}

pub fn print_suite(set: &RuleSet, report: &RunReport) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "\n{} {}",
        set.title().if_supports_color(Stdout, |s| s.bold()),
        format!("({}/{})", report.len() - report.failed_count(), report.len())
            .if_supports_color(Stdout, |s| s.dimmed()),
    )
    .ok();
    for result in report.results() {
        write_result(&mut out, result).ok();
    }
}

/// Colors are chosen for stdout; only `print_suite` writes through this.
fn write_result(out: &mut impl Write, result: &RuleResult) -> io::Result<()> {
    if result.passed {
        writeln!(
            out,
            "  {} {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            result.name,
        )
    } else {
        writeln!(
            out,
            "  {} {}",
            "\u{2717}".if_supports_color(Stdout, |s| s.red()),
            result.name.if_supports_color(Stdout, |s| s.red()),
        )
    }
}

/// One block per failing rule on the diagnostic stream.
pub fn print_failures(report: &RunReport) {
    let stderr = io::stderr();
    let mut err = stderr.lock();
    write_failures(&mut err, report).ok();
}

pub fn write_failures(out: &mut impl Write, report: &RunReport) -> io::Result<()> {
    for result in report.failures() {
        writeln!(
            out,
            "\n{} [{}] {}",
            "FAIL".if_supports_color(Stderr, |s| s.red()),
            result.suite,
            result.name.if_supports_color(Stderr, |s| s.bold()),
        )?;
        for line in result.detail.lines() {
            writeln!(out, "    {line}")?;
        }
    }
    Ok(())
}

/// Print the totals. Returns true if every rule passed.
pub fn print_summary(report: &RunReport) -> bool {
    println!(
        "{}",
        "\n--- Summary ---".if_supports_color(Stdout, |s| s.bold())
    );

    let total = report.len();
    let failed = report.failed_count();
    if failed == 0 {
        println!(
            "{}",
            format!("\nAll {total}/{total} rules passed.\n").if_supports_color(Stdout, |s| s.green()),
        );
        true
    } else {
        println!(
            "{}",
            format!("\n{failed}/{total} rule(s) failed.\n").if_supports_color(Stdout, |s| s.red()),
        );
        false
    }
}

pub fn print_json(report: &RunReport) -> serde_json::Result<()> {
    let json = serde_json::to_string_pretty(&report.summary())?;
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
struct CatalogEntry<'a> {
    suite: &'a str,
    title: &'a str,
    rules: &'a [Rule],
}

pub fn print_catalog(sets: &[RuleSet]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_catalog(&mut out, sets).ok();
}

pub fn write_catalog(out: &mut impl Write, sets: &[RuleSet]) -> io::Result<()> {
    for set in sets {
        writeln!(out, "{} ({}, {} rules)", set.title(), set.name(), set.len())?;
        for rule in set.rules() {
            writeln!(out, "  - {}: {}", rule.name(), rule.expectation_summary())?;
        }
    }
    Ok(())
}

pub fn print_catalog_json(sets: &[RuleSet]) -> serde_json::Result<()> {
    let entries: Vec<CatalogEntry<'_>> = sets
        .iter()
        .map(|set| CatalogEntry {
            suite: set.name(),
            title: set.title(),
            rules: set.rules(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
