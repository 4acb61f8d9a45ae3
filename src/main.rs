use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;

mod cli;
mod dataset;
mod emit;
mod logger;
mod samples;
mod transcript;

use cli::{CheckArgs, Command, DataArgs, EmitArgs, ListArgs, RootArgs};
use samples::Sample;
use transcript::{CheckReport, CheckResult, CheckStatus};

/// Current schema version for `list --json` output.
const LIST_SCHEMA_VERSION: u32 = 1;

fn main() -> Result<()> {
    let args = RootArgs::parse();
    logger::init(args.verbose);

    match args.command {
        None => cmd_emit(EmitArgs {
            sample: None,
            out: None,
        }),
        Some(Command::Emit(args)) => cmd_emit(args),
        Some(Command::List(args)) => cmd_list(args),
        Some(Command::Data(args)) => cmd_data(args),
        Some(Command::Check(args)) => cmd_check(args),
    }
}

fn cmd_emit(args: EmitArgs) -> Result<()> {
    let id = args.sample.as_deref().unwrap_or(samples::DEFAULT_SAMPLE_ID);
    let sample = find_sample(id)?;
    tracing::debug!(sample = sample.id, "rendering sample");
    let text = emit::render_text(&sample.render());
    match &args.out {
        Some(out) => {
            emit::write_text_atomic(out, &text)?;
            println!("wrote {}", out.display());
        }
        None => emit::write_stdout(&text)?,
    }
    Ok(())
}

#[derive(Serialize)]
struct CatalogEntry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    lines: usize,
}

#[derive(Serialize)]
struct CatalogReport {
    schema_version: u32,
    samples: Vec<CatalogEntry>,
}

fn cmd_list(args: ListArgs) -> Result<()> {
    let entries: Vec<CatalogEntry> = samples::catalog()
        .iter()
        .map(|sample| CatalogEntry {
            id: sample.id,
            title: sample.title,
            description: sample.description,
            lines: sample.render().len(),
        })
        .collect();

    if args.json {
        let report = CatalogReport {
            schema_version: LIST_SCHEMA_VERSION,
            samples: entries,
        };
        emit::write_stdout(&to_pretty_json(&report)?)?;
    } else {
        for entry in &entries {
            println!("{:<20} {} ({} lines)", entry.id, entry.title, entry.lines);
        }
    }
    Ok(())
}

fn cmd_data(args: DataArgs) -> Result<()> {
    let data = dataset::sample_dataset();
    if let Some(errors) = dataset::validate_dataset(&data) {
        return Err(anyhow!(
            "canonical dataset is malformed: {}",
            errors.join("; ")
        ));
    }
    let json = to_pretty_json(&data)?;
    match &args.out {
        Some(out) => {
            emit::write_text_atomic(out, &json)?;
            println!("wrote {}", out.display());
        }
        None => emit::write_stdout(&json)?,
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> Result<()> {
    let targets: Vec<&'static Sample> = match args.sample.as_deref() {
        Some(id) => vec![find_sample(id)?],
        None => samples::catalog().iter().collect(),
    };

    let mut results = Vec::new();
    for sample in targets {
        let recorded = transcript::recorded(sample.id)
            .ok_or_else(|| anyhow!("no recorded transcript for {:?}", sample.id))?;
        let divergence = transcript::first_divergence(recorded, &sample.render());
        let status = match divergence {
            None => CheckStatus::Confirmed,
            Some(_) => CheckStatus::Refuted,
        };
        tracing::debug!(sample = sample.id, ?status, "checked sample");
        results.push(CheckResult {
            sample_id: sample.id.to_string(),
            status,
            divergence,
        });
    }

    let report = CheckReport::from_results(results);
    if args.json {
        emit::write_stdout(&to_pretty_json(&report)?)?;
    } else {
        render_check_report(&report);
    }

    if report.fail_count > 0 {
        return Err(anyhow!(
            "{} of {} samples refuted",
            report.fail_count,
            report.results.len()
        ));
    }
    Ok(())
}

fn render_check_report(report: &CheckReport) {
    for result in &report.results {
        match (result.status, &result.divergence) {
            (CheckStatus::Confirmed, _) => println!("confirmed {}", result.sample_id),
            (CheckStatus::Refuted, Some(divergence)) => println!(
                "refuted {} at line {}: expected {:?}, rendered {:?}",
                result.sample_id, divergence.line, divergence.expected, divergence.actual
            ),
            (CheckStatus::Refuted, None) => println!("refuted {}", result.sample_id),
        }
    }
    println!("{} confirmed, {} refuted", report.pass_count, report.fail_count);
}

fn find_sample(id: &str) -> Result<&'static Sample> {
    samples::find(id).ok_or_else(|| anyhow!("unknown sample {id:?} (see `fpack list`)"))
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("serialize JSON output")?;
    json.push('\n');
    Ok(json)
}
