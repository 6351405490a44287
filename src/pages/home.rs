use leptos::prelude::*;

use crate::components::mindmap::{MindMapCanvas, parse_document};

/// The mind-map export shipped with the app. The document location is
/// fixed at build time; the parser itself accepts any in-memory input.
const MINDMAP_VUE: &str = include_str!("../../assets/mindmap.vue");

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	// Parse the embedded export once into record form
	let map_data = Signal::derive(move || parse_document(MINDMAP_VUE));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-map">
				<MindMapCanvas data=map_data fullscreen=true />
				<div class="map-overlay">
					<h1>"Mind Map"</h1>
					<p class="subtitle">"Drag nodes to reposition. Ctrl+scroll to zoom. Drag or scroll the background to pan."</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
