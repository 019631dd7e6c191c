//! Line coverage lookup across coverage summary shapes.

use serde_json::Value;

/// A place a coverage tool may put the line coverage percentage.
pub struct KeyPath {
    /// Human-readable form used in error messages.
    pub label: &'static str,
    /// JSON Pointer (RFC 6901) to the value.
    pub pointer: &'static str,
}

/// Tried in order; the first finite number wins.
pub const LINE_COVERAGE_PATHS: &[KeyPath] = &[
    // istanbul json-summary
    KeyPath {
        label: "total.lines.pct",
        pointer: "/total/lines/pct",
    },
    KeyPath {
        label: "totals.lines.percent",
        pointer: "/totals/lines/percent",
    },
    // llvm-cov export --summary-only
    KeyPath {
        label: "data[0].totals.lines.percent",
        pointer: "/data/0/totals/lines/percent",
    },
];

/// Line coverage found in a summary, with the path it was read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCoverage {
    pub percent: f64,
    pub path: &'static str,
}

pub fn line_coverage(summary: &Value) -> Option<LineCoverage> {
    LINE_COVERAGE_PATHS.iter().find_map(|path| {
        summary
            .pointer(path.pointer)
            .and_then(Value::as_f64)
            .filter(|percent| percent.is_finite())
            .map(|percent| LineCoverage {
                percent,
                path: path.label,
            })
    })
}

/// Comma-separated labels of every path `line_coverage` tries.
pub fn expected_paths() -> String {
    LINE_COVERAGE_PATHS
        .iter()
        .map(|path| path.label)
        .collect::<Vec<_>>()
        .join(", ")
}
