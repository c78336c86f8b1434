//! Annotated-source helpers for rule tests.
//!
//! An annotated source marks each expected finding with a line of `~`
//! directly under the flagged text. The marker lines are removed before
//! linting.

use splice_rules::Finding;

/// A one-based, end-exclusive location as a lint host would report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

/// Source text with its markers stripped.
#[derive(Debug)]
pub struct Annotated {
    pub source: String,
    pub markers: Vec<Marker>,
}

/// Splits `text` into the source to lint and its markers.
pub fn annotated(text: &str) -> Annotated {
    let mut kept: Vec<&str> = Vec::new();
    let mut markers = Vec::new();
    for line in text.split('\n') {
        let trimmed = line.trim();
        let is_marker = !trimmed.is_empty() && trimmed.chars().all(|c| c == '~');
        if !is_marker {
            kept.push(line);
            continue;
        }
        let flagged = u32::try_from(kept.len()).expect("line count fits u32");
        let start = line.find('~').expect("marker line has a tilde");
        let end = line.rfind('~').expect("marker line has a tilde") + 1;
        markers.push(Marker {
            line: flagged,
            column: column(start),
            end_line: flagged,
            end_column: column(end),
        });
    }
    Annotated {
        source: kept.join("\n"),
        markers,
    }
}

/// Returns where `finding` would be reported.
pub fn marker_of(finding: &Finding) -> Marker {
    let span = finding.span();
    let (line, column) = span.start.one_based();
    let (end_line, end_column) = span.end.one_based();
    Marker {
        line,
        column,
        end_line,
        end_column,
    }
}

fn column(index: usize) -> u32 {
    u32::try_from(index + 1).expect("column fits u32")
}
