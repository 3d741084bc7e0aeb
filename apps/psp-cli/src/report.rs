//! Report rendering
//!
//! Each input file produces one report block. In text form every
//! statistic is one line:
//!
//! ```text
//! [0001] mean:                      5.000000
//! ```
//!
//! The `label:` column is left-aligned to a fixed width and values use
//! `%f`-style fixed-point formatting, including `nan`/`inf` spellings.

use std::io::Write;

use psp_stats::PertRange;
use serde::Serialize;

use crate::config::{OutputConfig, OutputFormat};
use crate::error::CliResult;

/// A per-file block of labelled statistics
pub trait Report: Serialize {
    /// 1-based position of the input file
    fn index(&self) -> usize;

    /// Labelled values in print order
    fn fields(&self) -> Vec<(&'static str, f64)>;

    /// Whether a blank line follows the block in text output
    fn trailing_blank(&self) -> bool {
        true
    }
}

/// Scalar program: mean and sample standard deviation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeanReport {
    pub index: usize,
    pub file: String,
    pub mean: f64,
    pub sample_stdev: f64,
}

impl Report for MeanReport {
    fn index(&self) -> usize {
        self.index
    }

    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("mean", self.mean),
            ("sample standard deviation", self.sample_stdev),
        ]
    }

    fn trailing_blank(&self) -> bool {
        false
    }
}

/// Log-normal program: moments of ln(x) and the size range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeReport {
    pub index: usize,
    pub file: String,
    pub ln_mean: f64,
    pub ln_variance: f64,
    pub range: PertRange,
}

impl Report for RangeReport {
    fn index(&self) -> usize {
        self.index
    }

    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("mean of ln(x)", self.ln_mean),
            ("sample variance of ln(x)", self.ln_variance),
            ("very small", self.range.very_small),
            ("small", self.range.small),
            ("medium", self.range.medium),
            ("large", self.range.large),
            ("very large", self.range.very_large),
        ]
    }
}

/// Pair program: regression line, correlation and the estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressReport {
    pub index: usize,
    pub file: String,
    pub x_to_estimate: f64,
    pub mean_x: f64,
    pub mean_y: f64,
    pub intercept: f64,
    pub gradient: f64,
    pub correlation: f64,
    pub r_squared: f64,
    pub estimate_y: f64,
}

impl Report for RegressReport {
    fn index(&self) -> usize {
        self.index
    }

    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("to estimate x", self.x_to_estimate),
            ("mean x", self.mean_x),
            ("mean y", self.mean_y),
            ("intercept β₀", self.intercept),
            ("gradient β₁", self.gradient),
            ("correlation r", self.correlation),
            ("correlation r²", self.r_squared),
            ("estimate y", self.estimate_y),
        ]
    }
}

/// Format a value the way C's `%.Nf` does
///
/// Non-finite values are spelled `nan`, `-nan`, `inf` and `-inf`.
pub fn format_fixed(value: f64, precision: usize) -> String {
    if value.is_nan() {
        if value.is_sign_negative() {
            "-nan".to_string()
        } else {
            "nan".to_string()
        }
    } else if value.is_infinite() {
        if value < 0.0 {
            "-inf".to_string()
        } else {
            "inf".to_string()
        }
    } else {
        format!("{:.*}", precision, value)
    }
}

/// Writes reports to an output stream
pub struct ReportWriter<W> {
    out: W,
    config: OutputConfig,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { out, config }
    }

    /// Write one report block
    pub fn write<R: Report>(&mut self, report: &R) -> CliResult<()> {
        match self.config.format {
            OutputFormat::Text => self.write_text(report),
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, report)?;
                writeln!(self.out)?;
                Ok(())
            }
        }
    }

    fn write_text<R: Report>(&mut self, report: &R) -> CliResult<()> {
        let width = self.config.label_width;
        for (label, value) in report.fields() {
            writeln!(
                self.out,
                "[{:04}] {:<width$} {}",
                report.index(),
                format!("{label}:"),
                format_fixed(value, self.config.precision),
                width = width,
            )?;
        }
        if report.trailing_blank() {
            writeln!(self.out)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> CliResult<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<R: Report>(report: &R, format: OutputFormat) -> String {
        let config = OutputConfig {
            format,
            ..Default::default()
        };
        let mut writer = ReportWriter::new(Vec::new(), config);
        writer.write(report).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    fn mean_report() -> MeanReport {
        MeanReport {
            index: 1,
            file: "test0001.txt".to_string(),
            mean: 5.0,
            sample_stdev: 2.0,
        }
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(5.0, 6), "5.000000");
        assert_eq!(format_fixed(-0.1234567, 6), "-0.123457");
        assert_eq!(format_fixed(f64::NAN, 6), "nan");
        assert_eq!(format_fixed(-f64::NAN, 6), "-nan");
        assert_eq!(format_fixed(f64::INFINITY, 6), "inf");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 6), "-inf");
    }

    #[test]
    fn test_text_layout() {
        let text = render(&mean_report(), OutputFormat::Text);
        assert_eq!(
            text,
            "[0001] mean:                      5.000000\n\
             [0001] sample standard deviation: 2.000000\n"
        );
    }

    #[test]
    fn test_multibyte_labels_align() {
        let report = RegressReport {
            index: 2,
            file: "test0002.txt".to_string(),
            x_to_estimate: 10.0,
            mean_x: 2.0,
            mean_y: 4.0,
            intercept: 0.0,
            gradient: 2.0,
            correlation: 1.0,
            r_squared: 1.0,
            estimate_y: 20.0,
        };
        let text = render(&report, OutputFormat::Text);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[3], "[0002] intercept β₀:              0.000000");
        assert_eq!(lines[6], "[0002] correlation r²:            1.000000");
        assert_eq!(lines[8], "");
    }

    #[test]
    fn test_json_line() {
        let text = render(&mean_report(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["index"], 1);
        assert_eq!(value["file"], "test0001.txt");
        assert_eq!(value["mean"], 5.0);
    }
}
