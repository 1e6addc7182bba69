// src/components/toast.rs
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A user-facing notification. Components emit notices through callbacks;
/// the app root owns the list and renders it, so there is no global
/// notification state anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    /// Notices with their app-assigned ids, oldest first.
    pub notices: Vec<(u64, Notice)>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    if props.notices.is_empty() {
        return html! {};
    }

    html! {
        <div
            class="toast-stack"
            style="position: fixed; bottom: 1.5rem; right: 1.5rem; display: flex; \
                   flex-direction: column; gap: 0.5rem; z-index: 100;"
        >
            { for props.notices.iter().map(|(id, notice)| {
                let on_dismiss = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = *id;
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };
                let accent = match notice.level {
                    NoticeLevel::Info => "#2563eb",
                    NoticeLevel::Success => "#16a34a",
                    NoticeLevel::Error => "#dc2626",
                };
                let style = format!(
                    "display: flex; align-items: center; gap: 0.75rem; padding: 0.6rem 0.9rem; \
                     border-radius: 0.5rem; background: rgba(255, 255, 255, 0.95); \
                     border-left: 4px solid {}; box-shadow: 0 8px 20px rgba(0, 0, 0, 0.12);",
                    accent
                );
                html! {
                    <div key={*id} class="toast" {style}>
                        <span style="font-size: 0.9rem;">{ &notice.message }</span>
                        <button class="close-btn" onclick={on_dismiss} aria-label="Закрыть">
                            {"×"}
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
