//! Scripted two-agent narration. Pure presentation: a fixed list of
//! (delay, speaker, text) lines played by timers, no decision logic.

use std::time::Duration;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
	User,
	GuidelineAgent,
	VisualizationAgent,
	System,
}

impl Speaker {
	pub fn name(self) -> &'static str {
		match self {
			Speaker::User => "You",
			Speaker::GuidelineAgent => "Guideline Agent",
			Speaker::VisualizationAgent => "Visualization Agent",
			Speaker::System => "System",
		}
	}

	pub fn avatar(self) -> &'static str {
		match self {
			Speaker::User => "You",
			Speaker::GuidelineAgent => "GA",
			Speaker::VisualizationAgent => "VA",
			Speaker::System => "SYS",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
	pub speaker: Speaker,
	pub text: String,
	/// Status lines render small, under the speaker's last full message.
	pub status: bool,
}

impl ChatMessage {
	pub fn full(speaker: Speaker, text: impl Into<String>) -> Self {
		Self {
			speaker,
			text: text.into(),
			status: false,
		}
	}

	pub fn status(speaker: Speaker, text: impl Into<String>) -> Self {
		Self {
			speaker,
			text: text.into(),
			status: true,
		}
	}
}

struct ScriptLine {
	delay_ms: u64,
	speaker: Speaker,
	text: &'static str,
	status: bool,
}

const SCRIPT: &[ScriptLine] = &[
	ScriptLine {
		delay_ms: 0,
		speaker: Speaker::GuidelineAgent,
		text: "Analyzing your request and searching for relevant guidelines...",
		status: false,
	},
	ScriptLine {
		delay_ms: 500,
		speaker: Speaker::GuidelineAgent,
		text: "Checking your instruction",
		status: true,
	},
	ScriptLine {
		delay_ms: 1000,
		speaker: Speaker::GuidelineAgent,
		text: "Searching for relevant guidelines",
		status: true,
	},
	ScriptLine {
		delay_ms: 1500,
		speaker: Speaker::GuidelineAgent,
		text: "Passing the guidelines",
		status: true,
	},
	ScriptLine {
		delay_ms: 2000,
		speaker: Speaker::VisualizationAgent,
		text: "I have visualized your network. The visualization shows the structure \
		       with applied guidelines for better clarity.",
		status: false,
	},
	ScriptLine {
		delay_ms: 2500,
		speaker: Speaker::VisualizationAgent,
		text: "Checking the guidelines",
		status: true,
	},
	ScriptLine {
		delay_ms: 3000,
		speaker: Speaker::VisualizationAgent,
		text: "Generating the code",
		status: true,
	},
	ScriptLine {
		delay_ms: 3500,
		speaker: Speaker::VisualizationAgent,
		text: "Rendering",
		status: true,
	},
];

pub fn push_message(log: RwSignal<Vec<ChatMessage>>, message: ChatMessage) {
	log.update(|messages| messages.push(message));
}

/// Play the canned agent narration into the log.
pub fn play_agent_script(log: RwSignal<Vec<ChatMessage>>) {
	for line in SCRIPT {
		let message = if line.status {
			ChatMessage::status(line.speaker, line.text)
		} else {
			ChatMessage::full(line.speaker, line.text)
		};
		set_timeout(
			move || push_message(log, message),
			Duration::from_millis(line.delay_ms),
		);
	}
}

/// Message log plus send box. Sending appends the user's message and replays
/// the agent script a second later, like the original page.
#[component]
pub fn ChatPanel(log: RwSignal<Vec<ChatMessage>>) -> impl IntoView {
	let draft = RwSignal::new(String::new());

	let send = move || {
		let text = draft.get().trim().to_string();
		if text.is_empty() {
			return;
		}
		push_message(log, ChatMessage::full(Speaker::User, text));
		draft.set(String::new());
		set_timeout(move || play_agent_script(log), Duration::from_millis(1000));
	};

	view! {
		<div class="chat-panel">
			<div class="chat-messages">
				{move || {
					log.get()
						.into_iter()
						.map(|m| {
							let user = m.speaker == Speaker::User;
							view! {
								<div
									class="message"
									class=("user-message", user)
									class=("agent-message", !user)
									class=("agent-status", m.status)
								>
									{(!m.status)
										.then(|| {
											view! {
												<div class="message-header">
													<div
														class="message-avatar"
														class=("user-avatar", user)
														class=("agent-avatar", !user)
													>
														{m.speaker.avatar()}
													</div>
													<div class="message-name">{m.speaker.name()}</div>
												</div>
											}
										})}
									<div class="message-content">{m.text.clone()}</div>
								</div>
							}
						})
						.collect_view()
				}}
			</div>
			<div class="chat-input-row">
				<input
					type="text"
					class="chat-input"
					placeholder="Ask about your visualization..."
					prop:value=move || draft.get()
					on:input=move |ev| draft.set(event_target_value(&ev))
					on:keydown=move |ev| {
						if ev.key() == "Enter" {
							send();
						}
					}
				/>
				<button class="send-btn" on:click=move |_| send()>
					"Send"
				</button>
			</div>
		</div>
	}
}
