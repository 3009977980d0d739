use leptos::prelude::*;
use log::{info, warn};

use crate::components::chat::{ChatMessage, ChatPanel, Speaker, play_agent_script, push_message};
use crate::components::force_graph::ForceGraphCanvas;
use crate::components::guidelines::GuidelinePanel;
use crate::components::preview::DatasetPreview;
use crate::components::upload::UploadBox;
use crate::graph::{Format, GuidelineSet, SAMPLE_LABEL, Variant, ingest, sample_graph};

/// Default Home Page: chat sidebar, upload/guidelines/preview column and the
/// two side-by-side force-layout canvases.
#[component]
pub fn Home() -> impl IntoView {
	// Application state, replaced wholesale on each successful ingestion.
	let dataset = RwSignal::new(sample_graph(js_sys::Date::now() as u64));
	let dataset_label = RwSignal::new(SAMPLE_LABEL.to_string());
	let guidelines = RwSignal::new(GuidelineSet::default());
	let log = RwSignal::new(Vec::<ChatMessage>::new());

	let on_text = Callback::new(move |(name, text): (String, String)| {
		let Some(format) = Format::from_filename(&name) else {
			push_message(
				log,
				ChatMessage::full(
					Speaker::System,
					format!("Unsupported file type: {name} (expected .json or .csv)"),
				),
			);
			return;
		};
		match ingest(&text, format) {
			Ok(data) => {
				info!(
					"ingested {name}: {} nodes, {} edges",
					data.nodes.len(),
					data.links.len()
				);
				dataset.set(data);
				dataset_label.set(name.clone());
				push_message(log, ChatMessage::full(Speaker::User, format!("Uploaded {name}")));
				play_agent_script(log);
			}
			Err(err) => {
				// The previous dataset stays on screen untouched.
				warn!("ingestion failed for {name}: {err}");
				push_message(
					log,
					ChatMessage::full(Speaker::System, format!("Error parsing file: {err}")),
				);
			}
		}
	});

	let on_download_hint = move |_| {
		push_message(
			log,
			ChatMessage::full(
				Speaker::System,
				"\u{1f4e6} To run the application locally, serve the built bundle: \
				 index.html, styles.css and the wasm package. Keep them in one folder!",
			),
		);
	};

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

			<div class="app-layout">
				<aside class="chat-sidebar">
					<div class="sidebar-header">
						<h2>"Agents"</h2>
						<button class="download-btn" on:click=on_download_hint>
							"Download"
						</button>
					</div>
					<ChatPanel log=log />
				</aside>

				<main class="workspace">
					<UploadBox on_text=on_text />
					<GuidelinePanel guidelines=guidelines />
					<DatasetPreview label=dataset_label data=dataset />

					<div class="viz-grid">
						<section class="viz-panel">
							<h2>"Without Guidelines"</h2>
							<div class="viz-container">
								<ForceGraphCanvas
									data=dataset
									guidelines=guidelines
									variant=Variant::Plain
								/>
							</div>
						</section>
						<section class="viz-panel">
							<h2>"With Guidelines"</h2>
							<div class="viz-container">
								<ForceGraphCanvas
									data=dataset
									guidelines=guidelines
									variant=Variant::Annotated
								/>
							</div>
						</section>
					</div>
				</main>
			</div>
		</ErrorBoundary>
	}
}
