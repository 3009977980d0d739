//! Per-node degree counts, recomputed from scratch on every render pass.

use std::collections::HashMap;

use super::dataset::Dataset;

/// Node id -> number of incident edge endpoints.
pub type DegreeTable = HashMap<String, u32>;

/// Every node starts at 0; each edge adds 1 to both endpoint ids, so a
/// self-loop contributes 2 to its node. Ids referenced only by edges are
/// tolerated and accumulate entries of their own.
pub fn compute_degrees(dataset: &Dataset) -> DegreeTable {
	let mut table: DegreeTable = dataset
		.nodes
		.iter()
		.map(|node| (node.id.clone(), 0))
		.collect();

	for edge in &dataset.links {
		*table.entry(edge.source.id().to_string()).or_insert(0) += 1;
		*table.entry(edge.target.id().to_string()).or_insert(0) += 1;
	}
	table
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::dataset::{Endpoint, GraphEdge, GraphNode};

	fn dataset(ids: &[&str], edges: &[(&str, &str)]) -> Dataset {
		Dataset {
			nodes: ids.iter().map(|id| GraphNode { id: id.to_string() }).collect(),
			links: edges.iter().map(|(s, t)| GraphEdge::raw(*s, *t)).collect(),
		}
	}

	#[test]
	fn degrees_sum_to_twice_edge_count() {
		let data = dataset(&["a", "b", "c", "d"], &[("a", "b"), ("b", "c"), ("c", "a")]);
		let table = compute_degrees(&data);
		let sum: u32 = table.values().sum();
		assert_eq!(sum, 2 * data.links.len() as u32);
		assert_eq!(table["d"], 0);
	}

	#[test]
	fn recomputation_is_idempotent() {
		let data = dataset(&["a", "b"], &[("a", "b"), ("b", "a")]);
		assert_eq!(compute_degrees(&data), compute_degrees(&data));
	}

	#[test]
	fn self_loop_counts_twice_on_one_node() {
		let data = dataset(&["a", "b"], &[("a", "a")]);
		let table = compute_degrees(&data);
		assert_eq!(table["a"], 2);
		assert_eq!(table["b"], 0);
	}

	#[test]
	fn unknown_edge_ids_gain_entries() {
		let data = dataset(&["a"], &[("a", "ghost")]);
		let table = compute_degrees(&data);
		assert_eq!(table["a"], 1);
		assert_eq!(table["ghost"], 1);
	}

	#[test]
	fn resolved_endpoints_count_like_raw_ones() {
		let mut data = dataset(&["a", "b"], &[("a", "b")]);
		data.links.push(GraphEdge {
			source: Endpoint::Resolved(GraphNode { id: "a".into() }),
			target: Endpoint::Resolved(GraphNode { id: "b".into() }),
		});
		let table = compute_degrees(&data);
		assert_eq!(table["a"], 2);
		assert_eq!(table["b"], 2);
	}
}
