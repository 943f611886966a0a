use json;
use std::io::{Read, Write};
use std::path::PathBuf;
use itertools::Itertools;
use anyhow::{Context, Result};
use tracing::*;

use gridroute::*;
use gridroute::data::{get_batch_by_index, load_batch_file, parse_batch};
use gridroute::data::delivery::Batch;
use gridroute::report::{report_batch, CaseReport};

mod common;
use common::*;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct ClArgs {
    /// Batch file to read. Standard input is read when neither this nor `--index` is given.
    #[structopt(long, short="i")]
    input: Option<PathBuf>,
    /// Index of a batch in the `$DATA_ROOT/deliveries` dataset.
    #[structopt(long, conflicts_with="input")]
    index: Option<usize>,
    /// Only solve this (1-based) test case.
    #[structopt(long, validator=clap_range_validator(Some(1usize), None))]
    case: Option<usize>,
    #[structopt(long="no-grid", parse(from_flag=std::ops::Not::not))]
    grid: bool,
    #[structopt(flatten)]
    output: OutputOptions,
}

struct BatchReport<'a> {
    batch: &'a Batch,
    cases: Vec<CaseReport<'a>>,
    show_grid: bool,
}

impl<'a> ReportOutput for BatchReport<'a> {
    fn write_text(&self, mut buf: impl Write) -> Result<()> {
        for case in &self.cases {
            case.write_text(&mut buf, self.show_grid)?;
        }
        buf.flush()?;
        return Ok(())
    }

    fn write_json(&self, mut buf: impl Write) -> Result<()> {
        let root: json::JsonValue = self.cases.iter()
            .map(|c| c.to_json())
            .collect_vec()
            .into();
        root.write_pretty(&mut buf, 2)?;
        writeln!(buf)?;
        return Ok(())
    }

    fn write_json_summary(&self, mut buf: impl Write) -> Result<()> {
        let cases = self.cases.iter().map(|c| c.to_json_summary()).collect_vec();
        let root = json::object! {
            batch: self.batch.id.as_str(),
            cases: cases,
        };
        root.write_pretty(&mut buf, 2)?;
        writeln!(buf)?;
        return Ok(())
    }
}

fn read_batch(args: &ClArgs) -> Result<Batch> {
    if let Some(path) = args.input.as_ref() {
        return load_batch_file(path);
    }
    if let Some(idx) = args.index {
        return get_batch_by_index(idx);
    }
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text).context("failed to read standard input")?;
    return parse_batch(&text, "stdin");
}

fn main() -> anyhow::Result<()> {
    let args : ClArgs = StructOpt::from_args();
    let _g = init_logging(args.output.log.clone())?;
    debug!(?args);

    let batch = read_batch(&args)?;
    info!(id=%batch.id, cases=batch.cases.len(), "loaded batch");
    if let Some(k) = args.case {
        if k > batch.cases.len() {
            anyhow::bail!("case {} requested but {} has only {} cases", k, batch.id, batch.cases.len());
        }
    }

    let cases = report_batch(&batch, args.case);
    let report = BatchReport { batch: &batch, cases, show_grid: args.grid };
    output_report(&args.output, report)?;
    Ok(())
}
