//! Load file reader.
//!
//! One load per line: an integer id, the pickup and the dropoff as
//! parenthesized `x,y` pairs, separated by whitespace. A header line
//! starting with `loadNumber` and blank lines are skipped.
//!
//! ```text
//! loadNumber pickup dropoff
//! 1 (-50.1,80.0) (90.1,12.2)
//! 2 (-24.5,-19.2) (98.5,1.8)
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::models::{Load, Point};

/// Reads and parses the load file at `path`.
pub fn read_loads(path: impl AsRef<Path>) -> Result<Vec<Load>> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_loads(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Parses load records from text.
///
/// # Examples
///
/// ```
/// use u_dispatch::io::parse_loads;
///
/// let loads = parse_loads("loadNumber pickup dropoff\n1 (0,0) (10,0)\n").unwrap();
/// assert_eq!(loads.len(), 1);
/// assert_eq!(loads[0].id(), 1);
/// ```
pub fn parse_loads(text: &str) -> Result<Vec<Load>> {
    let mut loads = Vec::new();
    let mut seen = HashSet::new();

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("loadNumber") {
            continue;
        }
        let load = parse_line(line).with_context(|| format!("line {}", lineno + 1))?;
        if !seen.insert(load.id()) {
            bail!("line {}: duplicate load id {}", lineno + 1, load.id());
        }
        loads.push(load);
    }

    Ok(loads)
}

fn parse_line(line: &str) -> Result<Load> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [id, pickup, dropoff] = fields.as_slice() else {
        bail!("expected 3 fields, found {}", fields.len());
    };
    let id: u64 = id
        .parse()
        .with_context(|| format!("invalid load id {id:?}"))?;
    Ok(Load::new(id, parse_point(pickup)?, parse_point(dropoff)?))
}

fn parse_point(field: &str) -> Result<Point> {
    let inner = field
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .with_context(|| format!("coordinate {field:?} is not parenthesized"))?;
    let Some((x, y)) = inner.split_once(',') else {
        bail!("coordinate {field:?} is not an x,y pair");
    };
    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("invalid x in {field:?}"))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("invalid y in {field:?}"))?;
    if !x.is_finite() || !y.is_finite() {
        bail!("coordinate {field:?} is not finite");
    }
    Ok(Point::new(x, y))
}
