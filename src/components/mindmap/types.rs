/// A point in the shared document/world coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// An axis-aligned rectangle, top-left anchored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub fn center(&self) -> Point {
		Point {
			x: self.x + self.width / 2.0,
			y: self.y + self.height / 2.0,
		}
	}

	pub fn contains(&self, p: Point) -> bool {
		p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
	}
}

/// Parse-time node data. Ids are taken verbatim from the document and are
/// not guaranteed unique across records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeRecord {
	pub id: i64,
	pub rect: Rect,
	pub label: String,
}

/// Parse-time link data. Endpoint ids are unvalidated at this stage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinkRecord {
	pub from: i64,
	pub to: i64,
}

/// One parsed `child` element, tagged by kind.
#[derive(Clone, Debug, PartialEq)]
pub enum VueElement {
	Node(NodeRecord),
	Link(LinkRecord),
}

/// Parser output: node and link records partitioned by kind, each sequence
/// keeping the relative document order of the elements that produced it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VueDocument {
	pub nodes: Vec<NodeRecord>,
	pub links: Vec<LinkRecord>,
}

impl VueDocument {
	pub fn push(&mut self, element: VueElement) {
		match element {
			VueElement::Node(n) => self.nodes.push(n),
			VueElement::Link(l) => self.links.push(l),
		}
	}
}
