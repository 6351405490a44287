//! Live graph model built once from parsed records. The `Canvas` is the
//! single source of truth for nodes and links; after the build there is no
//! way to add or remove entities, only to move nodes.

use std::collections::HashMap;

use log::{debug, info};

use super::types::{Point, Rect, VueDocument};

/// A labeled rectangular node. The size is fixed at construction, the
/// top-left position is mutable through [`Canvas::move_node`].
#[derive(Clone, Debug)]
pub struct Node {
	id: i64,
	pos: Point,
	width: f64,
	height: f64,
	label: String,
}

impl Node {
	pub fn id(&self) -> i64 {
		self.id
	}

	pub fn pos(&self) -> Point {
		self.pos
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn bounds(&self) -> Rect {
		Rect {
			x: self.pos.x,
			y: self.pos.y,
			width: self.width,
			height: self.height,
		}
	}

	/// Offset from the top-left position to the bounding-box center.
	pub fn center_offset(&self) -> Point {
		Point {
			x: self.width / 2.0,
			y: self.height / 2.0,
		}
	}

	pub fn center(&self) -> Point {
		self.bounds().center()
	}
}

/// A directed edge between two node ids. Endpoint geometry always derives
/// from the referenced nodes' current centers.
#[derive(Clone, Debug)]
pub struct Link {
	pub from: i64,
	pub to: i64,
	pub p1: Point,
	pub p2: Point,
}

/// Node registry (id → node, unique keys) plus the ordered link list.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
	nodes: HashMap<i64, Node>,
	links: Vec<Link>,
}

impl Canvas {
	/// Build the graph from parsed records, node records first.
	///
	/// Node records with an empty label are discarded. Duplicate ids are a
	/// document-author defect tolerated as last-write-wins. Link records
	/// survive only if both endpoints resolve to a registered node.
	pub fn build(doc: &VueDocument) -> Self {
		let mut nodes: HashMap<i64, Node> = HashMap::new();
		for record in &doc.nodes {
			if record.label.is_empty() {
				continue;
			}
			if nodes.contains_key(&record.id) {
				debug!("duplicate node id {}, keeping the later record", record.id);
			}
			nodes.insert(
				record.id,
				Node {
					id: record.id,
					pos: Point {
						x: record.rect.x,
						y: record.rect.y,
					},
					width: record.rect.width,
					height: record.rect.height,
					label: record.label.clone(),
				},
			);
		}

		let mut links = Vec::new();
		for record in &doc.links {
			if let (Some(from), Some(to)) = (nodes.get(&record.from), nodes.get(&record.to)) {
				links.push(Link {
					from: record.from,
					to: record.to,
					p1: from.center(),
					p2: to.center(),
				});
			} else {
				debug!(
					"dropping link {} -> {}: endpoint not in registry",
					record.from, record.to
				);
			}
		}

		info!("canvas built: {} nodes, {} links", nodes.len(), links.len());
		Canvas { nodes, links }
	}

	pub fn node(&self, id: i64) -> Option<&Node> {
		self.nodes.get(&id)
	}

	pub fn nodes(&self) -> impl Iterator<Item = &Node> {
		self.nodes.values()
	}

	pub fn links(&self) -> &[Link] {
		&self.links
	}

	/// Move a node and synchronously re-anchor every link endpoint tied to
	/// it. All position changes flow through here, so link geometry can
	/// never drift from node geometry.
	///
	/// Both endpoint checks run independently per link: a self-loop picks
	/// up both updates from a single move.
	pub fn move_node(&mut self, id: i64, pos: Point) {
		let Some(node) = self.nodes.get_mut(&id) else {
			return;
		};
		node.pos = pos;
		let offset = node.center_offset();
		let center = Point {
			x: pos.x + offset.x,
			y: pos.y + offset.y,
		};

		for link in &mut self.links {
			if link.from == id {
				link.p1 = center;
			}
			if link.to == id {
				link.p2 = center;
			}
		}
	}

	/// A node containing the given world-space point, if any. Overlapping
	/// nodes are permitted; which one wins is unspecified.
	pub fn node_at(&self, p: Point) -> Option<i64> {
		self.nodes
			.values()
			.find(|node| node.bounds().contains(p))
			.map(Node::id)
	}
}
