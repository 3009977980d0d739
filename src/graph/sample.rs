//! Built-in small-world sample dataset, shown before any upload.

use super::dataset::{Dataset, GraphEdge, GraphNode};

pub const SAMPLE_SIZE: usize = 30;
pub const SAMPLE_LABEL: &str = "Sample Small-World Network";

/// Splitmix-style generator; deterministic so tests can pin a seed while the
/// page seeds from the clock.
struct Rng(u64);

impl Rng {
	fn next_f64(&mut self) -> f64 {
		self.0 = self.0.wrapping_add(0x9e3779b97f4a7c15);
		let mut z = self.0;
		z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
		z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
		((z ^ (z >> 31)) >> 11) as f64 / (1u64 << 53) as f64
	}
}

/// 30 nodes `"0"`..`"29"` on a ring, plus with probability 0.3 per node one
/// extra edge to a uniformly random non-self target.
pub fn sample_graph(seed: u64) -> Dataset {
	let mut rng = Rng(seed);
	let nodes: Vec<GraphNode> = (0..SAMPLE_SIZE)
		.map(|i| GraphNode { id: i.to_string() })
		.collect();

	let mut links = Vec::with_capacity(SAMPLE_SIZE + SAMPLE_SIZE / 3);
	for i in 0..SAMPLE_SIZE {
		links.push(GraphEdge::raw(
			i.to_string(),
			((i + 1) % SAMPLE_SIZE).to_string(),
		));

		if rng.next_f64() < 0.3 {
			let target = (rng.next_f64() * SAMPLE_SIZE as f64) as usize % SAMPLE_SIZE;
			if target != i {
				links.push(GraphEdge::raw(i.to_string(), target.to_string()));
			}
		}
	}

	Dataset { nodes, links }
}
