use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::graph::{Dataset, Endpoint, GraphNode};

/// World-space hit-test radius for picking a node under the pointer.
pub const HIT_RADIUS: f64 = 12.0;

/// Below this liveliness the simulation is considered settled and stops
/// stepping until a drag reheats it.
const ALPHA_MIN: f64 = 0.005;
/// Per-tick easing of liveliness toward its target.
const ALPHA_EASE: f64 = 0.05;
/// Liveliness target while a drag is active, so motion stays smooth.
const DRAG_ALPHA_TARGET: f64 = 0.3;

/// Per-node payload carried through the simulation: the model node plus its
/// ingestion index, which the color encoding keys on.
#[derive(Clone, Debug)]
pub struct NodeTag {
	pub node: GraphNode,
	pub index: usize,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node_idx: Option<DefaultNodeIdx>,
	start_x: f64,
	start_y: f64,
	node_start_x: f32,
	node_start_y: f32,
}

/// One variant's live layout. Each canvas builds its own from a clone of the
/// shared dataset, so the two variants' positions and pin state never touch.
pub struct SimState {
	pub graph: ForceGraph<NodeTag, ()>,
	pub drag: DragState,
	pub width: f64,
	pub height: f64,
	dataset: Dataset,
	alpha: f64,
	alpha_target: f64,
}

impl SimState {
	pub fn new(data: &Dataset, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut dataset = data.clone();

		// Seed nodes on a circle around the canvas center so the layout
		// settles around it.
		for (i, node) in dataset.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / dataset.nodes.len().max(1) as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeTag {
					node: node.clone(),
					index: i,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		// Resolve edge endpoints to node objects; edges naming unknown ids
		// are tolerated but take no part in the layout.
		for link in &mut dataset.links {
			let (src, tgt) = (
				id_to_idx.get(link.source.id()).copied(),
				id_to_idx.get(link.target.id()).copied(),
			);
			if let (Some(src), Some(tgt)) = (src, tgt) {
				graph.add_edge(src, tgt, EdgeData::default());
				link.source = Endpoint::Resolved(GraphNode {
					id: link.source.id().to_string(),
				});
				link.target = Endpoint::Resolved(GraphNode {
					id: link.target.id().to_string(),
				});
			}
		}

		Self {
			graph,
			drag: DragState::default(),
			width,
			height,
			dataset,
			alpha: 1.0,
			alpha_target: 0.0,
		}
	}

	/// The simulation's private copy of the dataset, endpoints resolved
	/// where the layout knows the node.
	pub fn dataset(&self) -> &Dataset {
		&self.dataset
	}

	pub fn is_running(&self) -> bool {
		self.alpha >= ALPHA_MIN || self.alpha_target > 0.0
	}

	/// Advance liveliness and, while live, the physics step.
	pub fn tick(&mut self, dt: f32) {
		self.alpha += (self.alpha_target - self.alpha) * ALPHA_EASE;
		if !self.is_running() {
			self.alpha = 0.0;
			return;
		}
		self.graph.update(dt);
	}

	pub fn node_at_position(&self, x: f64, y: f64) -> Option<DefaultNodeIdx> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - x, node.y() as f64 - y);
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	/// Pin the node under the pointer and reheat the simulation.
	pub fn drag_start(&mut self, idx: DefaultNodeIdx, x: f64, y: f64) {
		self.drag.node_idx = Some(idx);
		self.drag.start_x = x;
		self.drag.start_y = y;
		let mut node_start = (0.0f32, 0.0f32);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = true;
				node_start = (node.data.x, node.data.y);
			}
		});
		self.drag.node_start_x = node_start.0;
		self.drag.node_start_y = node_start.1;
		self.alpha_target = DRAG_ALPHA_TARGET;
		self.alpha = self.alpha.max(DRAG_ALPHA_TARGET);
	}

	/// Move the pinned coordinates to follow the pointer.
	pub fn drag_move(&mut self, x: f64, y: f64) {
		let Some(idx) = self.drag.node_idx else {
			return;
		};
		let (nx, ny) = (
			self.drag.node_start_x + (x - self.drag.start_x) as f32,
			self.drag.node_start_y + (y - self.drag.start_y) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
				node.data.is_anchor = true;
			}
		});
	}

	/// Release the pin and let liveliness decay.
	pub fn drag_end(&mut self) {
		if let Some(idx) = self.drag.node_idx.take() {
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.is_anchor = false;
				}
			});
		}
		self.alpha_target = 0.0;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{Format, GraphEdge, compute_degrees, ingest};

	fn small_dataset() -> Dataset {
		ingest("h1,h2\nA,B\nB,C\nA,C\n", Format::Csv).unwrap()
	}

	fn positions(state: &SimState) -> Vec<(f32, f32)> {
		let mut out = Vec::new();
		state
			.graph
			.visit_nodes(|node| out.push((node.x(), node.y())));
		out
	}

	fn idx_of(state: &SimState, id: &str) -> DefaultNodeIdx {
		let mut found = None;
		state.graph.visit_nodes(|node| {
			if node.data.user_data.node.id == id {
				found = Some(node.index());
			}
		});
		found.unwrap()
	}

	#[test]
	fn variants_never_share_layout_state() {
		let data = small_dataset();
		let mut plain = SimState::new(&data, 400.0, 300.0);
		let annotated = SimState::new(&data, 400.0, 300.0);
		let before = positions(&annotated);

		plain.graph.visit_nodes_mut(|node| {
			node.data.x = 999.0;
			node.data.y = -999.0;
		});
		plain.tick(0.016);

		assert_eq!(positions(&annotated), before);
	}

	#[test]
	fn construction_resolves_known_endpoints() {
		let data = small_dataset();
		let state = SimState::new(&data, 400.0, 300.0);
		for link in &state.dataset().links {
			assert!(matches!(link.source, Endpoint::Resolved(_)));
			assert!(matches!(link.target, Endpoint::Resolved(_)));
		}
		// The resolved copy still feeds the same degree table.
		assert_eq!(compute_degrees(state.dataset()), compute_degrees(&data));
	}

	#[test]
	fn unknown_edge_ids_degrade_to_unresolved_edges() {
		let mut data = small_dataset();
		data.links.push(GraphEdge::raw("A", "ghost"));
		let state = SimState::new(&data, 400.0, 300.0);

		let unresolved: Vec<_> = state
			.dataset()
			.links
			.iter()
			.filter(|l| matches!(l.target, Endpoint::Raw(_)))
			.collect();
		assert_eq!(unresolved.len(), 1);
		assert_eq!(unresolved[0].target.id(), "ghost");
		// The degree table still counts the dangling edge.
		assert_eq!(compute_degrees(state.dataset())["ghost"], 1);
	}

	#[test]
	fn drag_pins_then_releases() {
		let data = small_dataset();
		let mut state = SimState::new(&data, 400.0, 300.0);
		let idx = idx_of(&state, "A");

		state.drag_start(idx, 10.0, 10.0);
		state.drag_move(25.0, 10.0);
		let mut pinned = (false, 0.0f32);
		state.graph.visit_nodes(|node| {
			if node.index() == idx {
				pinned = (node.data.is_anchor, node.data.x);
			}
		});
		assert!(pinned.0);

		state.tick(0.016);
		let mut after_tick = 0.0f32;
		state.graph.visit_nodes(|node| {
			if node.index() == idx {
				after_tick = node.data.x;
			}
		});
		// Anchored nodes hold the dragged position through a tick.
		assert_eq!(after_tick, pinned.1);

		state.drag_end();
		state.graph.visit_nodes(|node| {
			if node.index() == idx {
				assert!(!node.data.is_anchor);
			}
		});
		assert!(state.drag.node_idx.is_none());
	}

	#[test]
	fn liveliness_decays_to_rest_and_reheats_on_drag() {
		let data = small_dataset();
		let mut state = SimState::new(&data, 400.0, 300.0);
		assert!(state.is_running());
		for _ in 0..2000 {
			state.tick(0.016);
		}
		assert!(!state.is_running());

		state.drag_start(idx_of(&state, "B"), 0.0, 0.0);
		assert!(state.is_running());
	}

	#[test]
	fn empty_dataset_builds_and_ticks() {
		let mut state = SimState::new(&Dataset::default(), 400.0, 300.0);
		state.tick(0.016);
		assert!(state.node_at_position(200.0, 150.0).is_none());
	}
}
