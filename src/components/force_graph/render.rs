use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::SimState;
use crate::graph::{GuidelineSet, Variant, compute_degrees, encode};

const BACKGROUND: &str = "#fafafa";
const EDGE_STROKE: &str = "#999";
const NODE_OUTLINE: &str = "#fff";

/// Redraw one variant: edges as line segments between the live endpoint
/// coordinates, nodes as circles styled by the encoding policy. The degree
/// table is cheap and recomputed on every pass.
pub fn render(
	state: &SimState,
	ctx: &CanvasRenderingContext2d,
	guidelines: GuidelineSet,
	variant: Variant,
) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	draw_edges(state, ctx);
	draw_nodes(state, ctx, guidelines, variant);
}

fn draw_edges(state: &SimState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(EDGE_STROKE);
	ctx.set_line_width(1.0);
	ctx.set_global_alpha(0.6);

	state.graph.visit_edges(|n1, n2, _| {
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(
	state: &SimState,
	ctx: &CanvasRenderingContext2d,
	guidelines: GuidelineSet,
	variant: Variant,
) {
	let degrees = compute_degrees(state.dataset());

	state.graph.visit_nodes(|node| {
		let tag = &node.data.user_data;
		let style = encode(&tag.node, tag.index, &degrees, guidelines, variant);
		let (x, y) = (node.x() as f64, node.y() as f64);

		ctx.begin_path();
		let _ = ctx.arc(x, y, style.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(style.fill);
		ctx.fill();
		ctx.set_stroke_style_str(NODE_OUTLINE);
		ctx.set_line_width(1.5);
		ctx.stroke();
	});
}
