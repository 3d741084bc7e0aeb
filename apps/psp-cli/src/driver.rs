//! Per-program pipelines
//!
//! Every program follows the same loop: take the next input file, load
//! its samples, compute the statistics, write one report block. Files are
//! processed strictly one after another and nothing is shared between
//! iterations.

use std::io::Write;
use std::path::PathBuf;

use psp_io::{load_pairs, load_scalars, ExplicitFiles, InputFile, IoResult};
use psp_stats::{PairSeries, StatSeries};

use crate::config::PspConfig;
use crate::error::CliResult;
use crate::report::{MeanReport, RangeReport, RegressReport, ReportWriter};

/// The statistics programs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    /// Mean and sample standard deviation of scalars
    Mean,
    /// Log-normal size range of scalars
    Range,
    /// Linear regression over `(x, y)` pairs
    Regress,
}

pub fn mean_report(index: usize, file: String, series: &StatSeries) -> MeanReport {
    MeanReport {
        index,
        file,
        mean: series.mean(),
        sample_stdev: series.sample_stdev(),
    }
}

/// Build the range report.
///
/// The moments are reported after [`StatSeries::pert_range`] has
/// log-transformed the series, so they describe `ln(x)`.
pub fn range_report(index: usize, file: String, mut series: StatSeries) -> RangeReport {
    let range = series.pert_range();
    RangeReport {
        index,
        file,
        ln_mean: series.mean(),
        ln_variance: series.sample_variance(),
        range,
    }
}

pub fn regress_report(
    index: usize,
    file: String,
    x_to_estimate: f64,
    series: &PairSeries,
) -> RegressReport {
    let line = series.regression_line();
    RegressReport {
        index,
        file,
        x_to_estimate,
        mean_x: series.mean_x(),
        mean_y: series.mean_y(),
        intercept: line.intercept,
        gradient: line.gradient,
        correlation: series.correlation(),
        r_squared: series.r_squared(),
        estimate_y: line.estimate(x_to_estimate),
    }
}

fn loaded<T>(result: IoResult<T>, file: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(file, error = %err, "skipping unreadable input");
            None
        }
    }
}

/// Run `program` over every input, returning the number of reports written
pub fn run<I, W>(program: Program, inputs: I, writer: &mut ReportWriter<W>) -> CliResult<usize>
where
    I: IntoIterator<Item = InputFile>,
    W: Write,
{
    let mut written = 0;

    for InputFile {
        index,
        path,
        reader,
    } in inputs
    {
        let file = path.display().to_string();
        tracing::debug!(index, file = %file, ?program, "processing input");

        match program {
            Program::Mean => {
                let Some(series) = loaded(load_scalars(reader), &file) else {
                    continue;
                };
                writer.write(&mean_report(index, file, &series))?;
            }
            Program::Range => {
                let Some(series) = loaded(load_scalars(reader), &file) else {
                    continue;
                };
                writer.write(&range_report(index, file, series))?;
            }
            Program::Regress => {
                let Some((x, series)) = loaded(load_pairs(reader), &file) else {
                    continue;
                };
                writer.write(&regress_report(index, file, x, &series))?;
            }
        }
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}

/// Select inputs per `config` and run `program`, writing to `out`
///
/// With no explicit `files`, numbered inputs are probed from
/// `config.input`.
pub fn execute<W: Write>(
    program: Program,
    config: &PspConfig,
    files: Vec<PathBuf>,
    out: W,
) -> CliResult<usize> {
    let mut writer = ReportWriter::new(out, config.output.clone());
    if files.is_empty() {
        let pattern = config.input.pattern();
        run(program, pattern.probe(config.input.first_index), &mut writer)
    } else {
        run(program, ExplicitFiles::new(files), &mut writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_report_uses_log_moments() {
        let series = StatSeries::from_values(vec![1.0, 10.0, 100.0]);
        let report = range_report(1, "t".to_string(), series);
        assert!((report.ln_mean - 10.0f64.ln()).abs() < 1e-12);
        assert!((report.range.medium - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_regress_report() {
        let series: PairSeries = vec![(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)].into_iter().collect();
        let report = regress_report(1, "t".to_string(), 10.0, &series);
        assert!((report.gradient - 2.0).abs() < 1e-12);
        assert!(report.intercept.abs() < 1e-12);
        assert!((report.r_squared - 1.0).abs() < 1e-12);
        assert!((report.estimate_y - 20.0).abs() < 1e-12);
    }
}
