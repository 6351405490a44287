use super::canvas::Canvas;
use super::scale;
use super::types::{Point, VueDocument};

/// Accumulated view transform: translation in device pixels plus one
/// uniform scale factor.
#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_id: Option<i64>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start: Point,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Everything the canvas component mutates during interaction.
pub struct MindMapState {
	pub canvas: Canvas,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
}

impl MindMapState {
	pub fn new(doc: &VueDocument, width: f64, height: f64) -> Self {
		Self {
			canvas: Canvas::build(doc),
			transform: ViewTransform::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			width,
			height,
		}
	}

	pub fn screen_to_world(&self, sx: f64, sy: f64) -> Point {
		Point {
			x: (sx - self.transform.x) / self.transform.k,
			y: (sy - self.transform.y) / self.transform.k,
		}
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<i64> {
		self.canvas.node_at(self.screen_to_world(sx, sy))
	}

	/// One zoom step anchored at the pointer. The translation is re-derived
	/// from the pointer position and the scale ratio so the world point
	/// under the pointer stays fixed; a step that would leave the scale
	/// bounds changes nothing.
	pub fn zoom_at(&mut self, angle: f64, sx: f64, sy: f64) {
		let Some(next) = scale::zoom_step(self.transform.k, angle) else {
			return;
		};
		let ratio = next / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = next;
	}

	/// Ordinary wheel scrolling: translate the view, scale untouched.
	pub fn scroll_by(&mut self, dx: f64, dy: f64) {
		self.transform.x -= dx;
		self.transform.y -= dy;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
