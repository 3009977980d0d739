//! Normalized node/edge dataset model shared by ingestion, degree
//! annotation and the two rendered variants.

use serde::Deserialize;

/// A graph node. Identity is the id; layout positions are transient state
/// owned by the simulation, never stored here.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphNode {
	pub id: String,
}

/// One side of an edge. Ingestion produces `Raw` ids; a layout pass may hand
/// edges back with endpoints resolved to node objects. Consumers go through
/// [`Endpoint::id`] and never inspect the shape directly.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
	Raw(String),
	Resolved(GraphNode),
}

impl Endpoint {
	pub fn id(&self) -> &str {
		match self {
			Endpoint::Raw(id) => id,
			Endpoint::Resolved(node) => &node.id,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphEdge {
	pub source: Endpoint,
	pub target: Endpoint,
}

impl GraphEdge {
	pub fn raw(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: Endpoint::Raw(source.into()),
			target: Endpoint::Raw(target.into()),
		}
	}
}

/// A full dataset. Replaced wholesale on every successful ingestion; there is
/// no incremental update.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Dataset {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphEdge>,
}

/// What the preview table displays after an ingestion.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetSummary {
	pub node_count: usize,
	pub edge_count: usize,
	/// Up to the first 5 edges as (source id, target id) pairs.
	pub head: Vec<(String, String)>,
}

impl Dataset {
	pub fn summary(&self) -> DatasetSummary {
		DatasetSummary {
			node_count: self.nodes.len(),
			edge_count: self.links.len(),
			head: self
				.links
				.iter()
				.take(5)
				.map(|e| (e.source.id().to_string(), e.target.id().to_string()))
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoint_accessor_handles_both_shapes() {
		let raw = Endpoint::Raw("a".into());
		let resolved = Endpoint::Resolved(GraphNode { id: "a".into() });
		assert_eq!(raw.id(), "a");
		assert_eq!(resolved.id(), "a");
	}

	#[test]
	fn endpoint_deserializes_raw_and_resolved() {
		let raw: Endpoint = serde_json::from_str(r#""n1""#).unwrap();
		assert_eq!(raw, Endpoint::Raw("n1".into()));

		let resolved: Endpoint = serde_json::from_str(r#"{"id":"n1","x":3.0}"#).unwrap();
		assert_eq!(resolved.id(), "n1");
	}

	#[test]
	fn summary_caps_edge_listing_at_five() {
		let dataset = Dataset {
			nodes: (0..8).map(|i| GraphNode { id: i.to_string() }).collect(),
			links: (0..7)
				.map(|i| GraphEdge::raw(i.to_string(), ((i + 1) % 8).to_string()))
				.collect(),
		};
		let summary = dataset.summary();
		assert_eq!(summary.node_count, 8);
		assert_eq!(summary.edge_count, 7);
		assert_eq!(summary.head.len(), 5);
		assert_eq!(summary.head[0], ("0".to_string(), "1".to_string()));
		assert_eq!(summary.head[4], ("4".to_string(), "5".to_string()));
	}

	#[test]
	fn summary_of_empty_dataset() {
		let summary = Dataset::default().summary();
		assert_eq!(summary.node_count, 0);
		assert_eq!(summary.edge_count, 0);
		assert!(summary.head.is_empty());
	}
}
