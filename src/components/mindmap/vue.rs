//! Reader for the mind-map export format: an opaque 5-line preamble
//! followed by a pseudo-XML body. The parse is deliberately best-effort;
//! every `child` element yields a record, malformed values fall back to
//! defaults, and nothing in here can fail.

use log::{debug, info};
use roxmltree::{Document, Node as XmlNode};

use super::types::{LinkRecord, NodeRecord, Rect, VueDocument, VueElement};

/// Number of non-structural preamble lines before the markup body.
/// A fixed offset defined by the format, not a heuristic.
const PREAMBLE_LINES: usize = 5;

const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Drop everything up to and including the 5th newline. A document with
/// fewer newlines has no structured body left.
fn strip_preamble(input: &str) -> &str {
	let mut idx = 0;
	for _ in 0..PREAMBLE_LINES {
		match input[idx..].find('\n') {
			Some(offset) => idx += offset + 1,
			None => return "",
		}
	}
	&input[idx..]
}

/// Parse a raw export into node and link records.
///
/// Only direct children of the root element named `child` are consulted.
/// A body that is not well-formed markup yields an empty document.
pub fn parse_document(input: &str) -> VueDocument {
	let body = strip_preamble(input);
	let mut doc = VueDocument::default();

	let xml = match Document::parse(body) {
		Ok(xml) => xml,
		Err(err) => {
			debug!("mind-map body is not well-formed markup: {err}");
			return doc;
		}
	};

	for child in xml
		.root_element()
		.children()
		.filter(|c| c.has_tag_name("child"))
	{
		doc.push(parse_child(&child));
	}

	info!(
		"parsed {} node records, {} link records",
		doc.nodes.len(),
		doc.links.len()
	);
	doc
}

/// Read one `child` element. The `xsi:type` attribute value `"link"`
/// selects link interpretation; anything else, including absence, is a
/// node. Attributes are read by name, order-independent, and default to
/// zero / empty when missing or unparseable.
fn parse_child(el: &XmlNode) -> VueElement {
	if el.attribute((XSI_NS, "type")) == Some("link") {
		VueElement::Link(parse_link(el))
	} else {
		let num = |name: &str| {
			el.attribute(name)
				.and_then(|v| v.parse::<f64>().ok())
				.unwrap_or_default()
		};
		VueElement::Node(NodeRecord {
			id: el
				.attribute("ID")
				.and_then(|v| v.parse::<i64>().ok())
				.unwrap_or_default(),
			rect: Rect {
				x: num("x"),
				y: num("y"),
				width: num("width"),
				height: num("height"),
			},
			label: el.attribute("label").unwrap_or_default().to_owned(),
		})
	}
}

/// Endpoint ids come from the first `ID1` and first `ID2` child elements,
/// in document order. Geometry attributes on link elements are ignored.
fn parse_link(el: &XmlNode) -> LinkRecord {
	let mut from = None;
	let mut to = None;
	for child in el.children().filter(XmlNode::is_element) {
		if from.is_none() && child.has_tag_name("ID1") {
			from = Some(element_text_as_id(&child));
		} else if to.is_none() && child.has_tag_name("ID2") {
			to = Some(element_text_as_id(&child));
		}
	}
	LinkRecord {
		from: from.unwrap_or_default(),
		to: to.unwrap_or_default(),
	}
}

fn element_text_as_id(el: &XmlNode) -> i64 {
	el.text()
		.unwrap_or_default()
		.trim()
		.parse::<i64>()
		.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::super::types::{LinkRecord, NodeRecord, Rect};
	use super::parse_document;

	/// Prefix a markup body with the format's 5 throwaway lines.
	fn with_preamble(body: &str) -> String {
		format!("VUE\nsaved 2017-01-01\n-\n-\n-\n{body}")
	}

	const ROOT_OPEN: &str = r#"<LW-MAP xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#;

	fn parse_body(children: &str) -> super::VueDocument {
		parse_document(&with_preamble(&format!("{ROOT_OPEN}{children}</LW-MAP>")))
	}

	#[test]
	fn single_node_element() {
		let doc = parse_body(r#"<child ID="1" label="A" x="0" y="0" width="10" height="10"/>"#);
		assert_eq!(
			doc.nodes,
			vec![NodeRecord {
				id: 1,
				rect: Rect {
					x: 0.0,
					y: 0.0,
					width: 10.0,
					height: 10.0
				},
				label: "A".into(),
			}]
		);
		assert!(doc.links.is_empty());
	}

	#[test]
	fn single_link_element() {
		let doc = parse_body(r#"<child xsi:type="link"><ID1>1</ID1><ID2>2</ID2></child>"#);
		assert!(doc.nodes.is_empty());
		assert_eq!(doc.links, vec![LinkRecord { from: 1, to: 2 }]);
	}

	#[test]
	fn attribute_order_does_not_matter() {
		let doc = parse_body(r#"<child height="4" label="B" width="3" y="2" x="1" ID="7"/>"#);
		assert_eq!(doc.nodes[0].id, 7);
		assert_eq!(
			doc.nodes[0].rect,
			Rect {
				x: 1.0,
				y: 2.0,
				width: 3.0,
				height: 4.0
			}
		);
	}

	#[test]
	fn missing_attributes_default_to_zero_and_empty() {
		let doc = parse_body("<child/>");
		assert_eq!(doc.nodes, vec![NodeRecord::default()]);
	}

	#[test]
	fn unparseable_attributes_default_to_zero() {
		let doc = parse_body(r#"<child ID="seven" x="wide" y="1.5" width="" height="2"/>"#);
		assert_eq!(doc.nodes[0].id, 0);
		assert_eq!(
			doc.nodes[0].rect,
			Rect {
				x: 0.0,
				y: 1.5,
				width: 0.0,
				height: 2.0
			}
		);
	}

	#[test]
	fn unknown_kind_marker_is_a_node() {
		let doc = parse_body(r#"<child xsi:type="LINK" ID="3"/><child xsi:type="frame" ID="4"/>"#);
		assert_eq!(doc.nodes.len(), 2);
		assert!(doc.links.is_empty());
	}

	#[test]
	fn link_ignores_geometry_attributes() {
		let doc = parse_body(
			r#"<child xsi:type="link" ID="9" x="5" y="5" width="5" height="5">
				<ID1>1</ID1><ID2>1</ID2>
			</child>"#,
		);
		assert!(doc.nodes.is_empty());
		assert_eq!(doc.links, vec![LinkRecord { from: 1, to: 1 }]);
	}

	#[test]
	fn link_endpoint_markers_first_occurrence_wins() {
		let doc = parse_body(
			r#"<child xsi:type="link"><ID1>1</ID1><ID2>2</ID2><ID1>3</ID1><ID2>4</ID2></child>"#,
		);
		assert_eq!(doc.links, vec![LinkRecord { from: 1, to: 2 }]);
	}

	#[test]
	fn link_with_missing_markers_defaults_to_zero() {
		let doc = parse_body(r#"<child xsi:type="link"><ID2>junk</ID2></child>"#);
		assert_eq!(doc.links, vec![LinkRecord { from: 0, to: 0 }]);
	}

	#[test]
	fn non_child_root_elements_are_ignored() {
		let doc = parse_body(r#"<resource ID="1"/><child ID="2" label="n"/><layer/>"#);
		assert_eq!(doc.nodes.len(), 1);
		assert_eq!(doc.nodes[0].id, 2);
	}

	#[test]
	fn document_order_is_kept_within_each_kind() {
		let doc = parse_body(
			r#"<child ID="1" label="a"/>
			<child xsi:type="link"><ID1>1</ID1><ID2>2</ID2></child>
			<child ID="2" label="b"/>
			<child xsi:type="link"><ID1>2</ID1><ID2>1</ID2></child>"#,
		);
		assert_eq!(
			doc.nodes.iter().map(|n| n.id).collect::<Vec<_>>(),
			vec![1, 2]
		);
		assert_eq!(
			doc.links,
			vec![
				LinkRecord { from: 1, to: 2 },
				LinkRecord { from: 2, to: 1 }
			]
		);
	}

	#[test]
	fn empty_input_yields_empty_document() {
		assert_eq!(parse_document(""), super::VueDocument::default());
	}

	#[test]
	fn short_preamble_yields_empty_document() {
		assert_eq!(
			parse_document("one\ntwo\n<child/>"),
			super::VueDocument::default()
		);
	}

	#[test]
	fn malformed_body_yields_empty_document() {
		let doc = parse_document(&with_preamble("<LW-MAP><child></LW-MAP>"));
		assert_eq!(doc, super::VueDocument::default());
	}

	#[test]
	fn preamble_lines_are_not_parsed_as_markup() {
		let input = format!("<bogus>\n&broken;\n<\n>\n-\n{ROOT_OPEN}<child ID=\"5\" label=\"x\"/></LW-MAP>");
		let doc = parse_document(&input);
		assert_eq!(doc.nodes.len(), 1);
		assert_eq!(doc.nodes[0].id, 5);
	}
}
