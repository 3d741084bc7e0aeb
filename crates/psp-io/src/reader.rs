//! Sample loaders
//!
//! Two input layouts are supported:
//!
//! - scalars: `x_0 x_1 ... x_n`
//! - pairs: a leading `x_k` to estimate, then `x_0 y_0 x_1 y_1 ...`
//!
//! Tokens may be separated by any mix of spaces, tabs and newlines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use psp_stats::{Pair, PairSeries, StatSeries};

use crate::error::{IoError, IoResult};
use crate::scan::Scanner;

/// Open a file for buffered reading
///
/// A missing file maps to [`IoError::NotFound`] so callers can tell the
/// end of a numbered sequence apart from a real failure.
pub fn open_input(path: &Path) -> IoResult<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(IoError::NotFound(path.to_path_buf()))
        }
        Err(source) => Err(IoError::OpenFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read scalar samples until the source ends or a token fails to parse
pub fn load_scalars<R: BufRead>(reader: R) -> IoResult<StatSeries> {
    let mut scanner = Scanner::new(reader);
    let mut series = StatSeries::new();
    while let Some(value) = scanner.next_number()? {
        series.push(value);
    }
    tracing::debug!(samples = series.len(), "loaded scalar series");
    Ok(series)
}

/// Read the value to estimate followed by `(x, y)` pairs
///
/// A trailing half pair is discarded. If the leading value is missing or
/// malformed, the estimate target is `NaN` and no pairs are read.
pub fn load_pairs<R: BufRead>(reader: R) -> IoResult<(f64, PairSeries)> {
    let mut scanner = Scanner::new(reader);
    let mut series = PairSeries::new();

    let Some(x_to_estimate) = scanner.next_number()? else {
        tracing::debug!("no value to estimate");
        return Ok((f64::NAN, series));
    };

    loop {
        let Some(x) = scanner.next_number()? else {
            break;
        };
        let Some(y) = scanner.next_number()? else {
            tracing::trace!(x, "discarding incomplete pair");
            break;
        };
        series.push(Pair::new(x, y));
    }

    tracing::debug!(samples = series.len(), x_to_estimate, "loaded pair series");
    Ok((x_to_estimate, series))
}
