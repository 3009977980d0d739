//! File upload box: click-to-browse plus drag-and-drop. The file is read
//! fully into a string here; parsing happens in the caller.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};

/// Read the file as text, then hand (filename, contents) to the callback.
fn read_file(file: File, on_text: Callback<(String, String)>) {
	let name = file.name();
	let reader = FileReader::new().unwrap();
	let reader_inner = reader.clone();
	let onload = Closure::once_into_js(move |_: web_sys::ProgressEvent| {
		if let Some(text) = reader_inner.result().ok().and_then(|v| v.as_string()) {
			on_text.run((name, text));
		}
	});
	reader.set_onload(Some(onload.unchecked_ref()));
	let _ = reader.read_as_text(&file);
}

#[component]
pub fn UploadBox(on_text: Callback<(String, String)>) -> impl IntoView {
	let input_ref = NodeRef::<leptos::html::Input>::new();
	let dragover = RwSignal::new(false);

	let on_change = move |_| {
		let input: HtmlInputElement = input_ref.get().unwrap();
		if let Some(file) = input.files().and_then(|list| list.get(0)) {
			read_file(file, on_text);
		}
		input.set_value("");
	};

	let on_drop = move |ev: leptos::ev::DragEvent| {
		ev.prevent_default();
		dragover.set(false);
		let file = ev
			.data_transfer()
			.and_then(|dt| dt.files())
			.and_then(|list| list.get(0));
		if let Some(file) = file {
			read_file(file, on_text);
		}
	};

	view! {
		<div
			class="upload-box"
			class=("dragover", move || dragover.get())
			on:click=move |_| {
				if let Some(input) = input_ref.get() {
					input.click();
				}
			}
			on:dragover=move |ev| {
				ev.prevent_default();
				dragover.set(true);
			}
			on:dragleave=move |_| dragover.set(false)
			on:drop=on_drop
		>
			<p>"Drop a graph file here or click to browse"</p>
			<p class="upload-hint">".json (nodes/links) or .csv (edge list)"</p>
			<input
				node_ref=input_ref
				type="file"
				accept=".json,.csv"
				style="display: none;"
				on:change=on_change
			/>
		</div>
	}
}
