//! Checkbox panel for the fixed guideline vocabulary.

use leptos::prelude::*;

use crate::graph::{Guideline, GuidelineSet};

#[component]
pub fn GuidelinePanel(guidelines: RwSignal<GuidelineSet>) -> impl IntoView {
	view! {
		<div class="guideline-panel">
			<h3>"Visualization Guidelines"</h3>
			{Guideline::ALL
				.into_iter()
				.map(|g| {
					view! {
						<label
							class="guideline-item"
							class=("active", move || guidelines.get().contains(g))
						>
							<input
								type="checkbox"
								class="guideline-checkbox"
								prop:checked=move || guidelines.get().contains(g)
								on:change=move |ev| {
									let enabled = event_target_checked(&ev);
									guidelines.update(|set| set.set(g, enabled));
								}
							/>
							{g.label()}
						</label>
					}
				})
				.collect_view()}
		</div>
	}
}
