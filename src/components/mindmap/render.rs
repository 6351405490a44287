use web_sys::CanvasRenderingContext2d;

use super::state::MindMapState;

const PAPER: &str = "#faf9f4";
const HATCH: &str = "#e7e6de";
const NODE_FILL: &str = "#f5f5e1";
const INK: &str = "#000000";

/// On-screen spacing of the background cross-hatch, in device pixels.
const HATCH_STEP: f64 = 16.0;

pub fn render(state: &MindMapState, ctx: &CanvasRenderingContext2d) {
	draw_background(state, ctx);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

/// Paper fill plus a cross-hatch grid. The hatch is laid out in device
/// space and rebuilt on every paint, so its apparent density never
/// changes with the accumulated zoom factor.
fn draw_background(state: &MindMapState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(PAPER);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	ctx.set_stroke_style_str(HATCH);
	ctx.set_line_width(1.0);
	ctx.begin_path();
	let mut x = 0.5;
	while x < state.width {
		ctx.move_to(x, 0.0);
		ctx.line_to(x, state.height);
		x += HATCH_STEP;
	}
	let mut y = 0.5;
	while y < state.height {
		ctx.move_to(0.0, y);
		ctx.line_to(state.width, y);
		y += HATCH_STEP;
	}
	ctx.stroke();
}

fn draw_links(state: &MindMapState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	ctx.set_stroke_style_str(INK);
	ctx.set_line_width(1.0 / k);
	ctx.begin_path();
	for link in state.canvas.links() {
		ctx.move_to(link.p1.x, link.p1.y);
		ctx.line_to(link.p2.x, link.p2.y);
	}
	ctx.stroke();
}

// Nodes paint after links so they sit above them.
fn draw_nodes(state: &MindMapState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	ctx.set_line_width(1.0 / k);
	ctx.set_font("9px sans-serif");
	ctx.set_text_baseline("top");

	for node in state.canvas.nodes() {
		let b = node.bounds();
		ctx.set_fill_style_str(NODE_FILL);
		ctx.fill_rect(b.x, b.y, b.width, b.height);
		ctx.set_stroke_style_str(INK);
		ctx.stroke_rect(b.x, b.y, b.width, b.height);

		ctx.set_fill_style_str(INK);
		let _ = ctx.fill_text(node.label(), b.x + 4.0, b.y + 3.0);
	}
}
