//! Dataset preview: counts plus the first few edges of the current dataset.

use leptos::prelude::*;

use crate::graph::Dataset;

#[component]
pub fn DatasetPreview(
	#[prop(into)] label: Signal<String>,
	#[prop(into)] data: Signal<Dataset>,
) -> impl IntoView {
	let summary = Memo::new(move |_| data.get().summary());

	view! {
		<div class="dataset-preview">
			<div class="preview-header">
				{move || {
					let s = summary.get();
					format!("Dataset Preview - {} nodes, {} edges", s.node_count, s.edge_count)
				}}
			</div>
			<div class="dataset-info">{move || format!("Dataset: {}", label.get())}</div>
			<table class="preview-table">
				<thead>
					<tr>
						<th>"FromNodeId"</th>
						<th>"ToNodeId"</th>
					</tr>
				</thead>
				<tbody>
					{move || {
						summary
							.get()
							.head
							.into_iter()
							.map(|(source, target)| {
								view! {
									<tr>
										<td>{source}</td>
										<td>{target}</td>
									</tr>
								}
							})
							.collect_view()
					}}
				</tbody>
			</table>
		</div>
	}
}
