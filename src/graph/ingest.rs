//! Converts uploaded JSON or CSV text into a [`Dataset`].

use std::collections::HashSet;

use thiserror::Error;

use super::dataset::{Dataset, GraphEdge, GraphNode};

/// Supported upload formats, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
	Json,
	Csv,
}

impl Format {
	pub fn from_filename(name: &str) -> Option<Format> {
		let lower = name.to_ascii_lowercase();
		if lower.ends_with(".json") {
			Some(Format::Json)
		} else if lower.ends_with(".csv") {
			Some(Format::Csv)
		} else {
			None
		}
	}
}

#[derive(Debug, Error)]
pub enum FormatError {
	#[error("invalid JSON: {0}")]
	Json(#[from] serde_json::Error),
	#[error("CSV line {line}: expected `source,target`, found {found} field(s)")]
	CsvRow { line: usize, found: usize },
}

/// Parse raw upload text into a dataset. On error the caller keeps the
/// previously displayed dataset; there is no partial replacement.
pub fn ingest(raw: &str, format: Format) -> Result<Dataset, FormatError> {
	match format {
		Format::Json => Ok(serde_json::from_str(raw)?),
		Format::Csv => ingest_csv(raw),
	}
}

/// First line is a header and is discarded. Each non-empty data line is
/// `source,target[,...]` with the two used fields trimmed and any extras
/// ignored. Every distinct id becomes a node, in first-seen order. Lines
/// with fewer than two fields are rejected rather than producing an edge
/// with a missing endpoint.
fn ingest_csv(raw: &str) -> Result<Dataset, FormatError> {
	let mut seen: HashSet<String> = HashSet::new();
	let mut nodes: Vec<GraphNode> = Vec::new();
	let mut links: Vec<GraphEdge> = Vec::new();

	for (lineno, line) in raw.lines().enumerate().skip(1) {
		if line.trim().is_empty() {
			continue;
		}
		let mut fields = line.split(',');
		let source = fields.next().map(str::trim).unwrap_or("");
		let Some(target) = fields.next().map(str::trim) else {
			return Err(FormatError::CsvRow {
				line: lineno + 1,
				found: 1,
			});
		};

		for id in [source, target] {
			if seen.insert(id.to_string()) {
				nodes.push(GraphNode { id: id.to_string() });
			}
		}
		links.push(GraphEdge::raw(source, target));
	}

	Ok(Dataset { nodes, links })
}
