//! Maps the active guideline set to per-node visual attributes.

use super::dataset::GraphNode;
use super::degree::DegreeTable;

/// Fixed, closed guideline vocabulary. `Crossings` and `Clustering` are
/// accepted but currently produce no encoding change; that is the contract,
/// not an omission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Guideline {
	Size,
	Color,
	Crossings,
	Clustering,
}

impl Guideline {
	pub const ALL: [Guideline; 4] = [
		Guideline::Size,
		Guideline::Color,
		Guideline::Crossings,
		Guideline::Clustering,
	];

	pub fn label(self) -> &'static str {
		match self {
			Guideline::Size => "Node size by degree",
			Guideline::Color => "Color by index",
			Guideline::Crossings => "Minimize edge crossings",
			Guideline::Clustering => "Cluster related nodes",
		}
	}
}

/// Which guidelines are enabled. All four are on at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuidelineSet {
	size: bool,
	color: bool,
	crossings: bool,
	clustering: bool,
}

impl Default for GuidelineSet {
	fn default() -> Self {
		Self {
			size: true,
			color: true,
			crossings: true,
			clustering: true,
		}
	}
}

impl GuidelineSet {
	pub const EMPTY: GuidelineSet = GuidelineSet {
		size: false,
		color: false,
		crossings: false,
		clustering: false,
	};

	pub fn contains(&self, guideline: Guideline) -> bool {
		match guideline {
			Guideline::Size => self.size,
			Guideline::Color => self.color,
			Guideline::Crossings => self.crossings,
			Guideline::Clustering => self.clustering,
		}
	}

	pub fn set(&mut self, guideline: Guideline, enabled: bool) {
		match guideline {
			Guideline::Size => self.size = enabled,
			Guideline::Color => self.color = enabled,
			Guideline::Crossings => self.crossings = enabled,
			Guideline::Clustering => self.clustering = enabled,
		}
	}

	pub fn with(mut self, guideline: Guideline, enabled: bool) -> Self {
		self.set(guideline, enabled);
		self
	}
}

/// The two side-by-side renderings: `Plain` ignores all guidelines,
/// `Annotated` applies the active ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
	Plain,
	Annotated,
}

pub const PALETTE: [&str; 7] = [
	"#667eea", "#764ba2", "#f093fb", "#4facfe", "#43e97b", "#fa709a", "#fee140",
];
pub const NEUTRAL_FILL: &str = "#999";
pub const BASE_RADIUS: f64 = 5.0;

#[derive(Clone, Debug, PartialEq)]
pub struct NodeStyle {
	pub radius: f64,
	pub fill: &'static str,
}

/// The size and color decisions are independent; either, both or neither
/// guideline may be active.
pub fn encode(
	node: &GraphNode,
	index: usize,
	degrees: &DegreeTable,
	guidelines: GuidelineSet,
	variant: Variant,
) -> NodeStyle {
	let annotated = variant == Variant::Annotated;

	let radius = if annotated && guidelines.contains(Guideline::Size) {
		let degree = degrees.get(&node.id).copied().unwrap_or(0);
		BASE_RADIUS + f64::from(degree) * 0.5
	} else {
		BASE_RADIUS
	};

	let fill = if annotated && guidelines.contains(Guideline::Color) {
		PALETTE[index % PALETTE.len()]
	} else {
		NEUTRAL_FILL
	};

	NodeStyle { radius, fill }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str) -> GraphNode {
		GraphNode { id: id.to_string() }
	}

	fn degrees_of(entries: &[(&str, u32)]) -> DegreeTable {
		entries
			.iter()
			.map(|(id, d)| (id.to_string(), *d))
			.collect()
	}

	#[test]
	fn color_only_keeps_plain_radius() {
		let degrees = degrees_of(&[("n", 4)]);
		let set = GuidelineSet::EMPTY.with(Guideline::Color, true);
		let style = encode(&node("n"), 1, &degrees, set, Variant::Annotated);
		assert_eq!(style.radius, BASE_RADIUS);
		assert_eq!(style.fill, PALETTE[1]);
	}

	#[test]
	fn size_only_keeps_neutral_fill() {
		let degrees = degrees_of(&[("n", 4)]);
		let set = GuidelineSet::EMPTY.with(Guideline::Size, true);
		let style = encode(&node("n"), 1, &degrees, set, Variant::Annotated);
		assert_eq!(style.radius, 7.0);
		assert_eq!(style.fill, NEUTRAL_FILL);
	}

	#[test]
	fn plain_variant_ignores_active_guidelines() {
		let degrees = degrees_of(&[("n", 10)]);
		let style = encode(&node("n"), 3, &degrees, GuidelineSet::default(), Variant::Plain);
		assert_eq!(style.radius, BASE_RADIUS);
		assert_eq!(style.fill, NEUTRAL_FILL);
	}

	#[test]
	fn crossings_and_clustering_are_no_ops() {
		let degrees = degrees_of(&[("n", 4)]);
		let set = GuidelineSet::EMPTY
			.with(Guideline::Crossings, true)
			.with(Guideline::Clustering, true);
		let style = encode(&node("n"), 0, &degrees, set, Variant::Annotated);
		assert_eq!(style.radius, BASE_RADIUS);
		assert_eq!(style.fill, NEUTRAL_FILL);
	}

	#[test]
	fn palette_cycles_past_seven() {
		let degrees = degrees_of(&[("n", 0)]);
		let set = GuidelineSet::EMPTY.with(Guideline::Color, true);
		let style = encode(&node("n"), 7, &degrees, set, Variant::Annotated);
		assert_eq!(style.fill, PALETTE[0]);
		let style = encode(&node("n"), 9, &degrees, set, Variant::Annotated);
		assert_eq!(style.fill, PALETTE[2]);
	}

	#[test]
	fn missing_degree_entry_reads_as_zero() {
		let set = GuidelineSet::EMPTY.with(Guideline::Size, true);
		let style = encode(&node("n"), 0, &DegreeTable::new(), set, Variant::Annotated);
		assert_eq!(style.radius, BASE_RADIUS);
	}
}
