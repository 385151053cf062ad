use dioxus::prelude::*;

use crate::transcript::Message;

/// One visual block per transcript entry. File metadata, when present,
/// renders above the message content.
#[component]
pub fn MessageEl(msg: Message) -> Element {
    let class = msg.role.css_class();
    rsx! {
        div { class: "message {class}",
            if let Some(file) = &msg.file {
                div { class: "file-meta",
                    span { class: "file-icon", "📄" }
                    span { class: "file-name", "{file.name}" }
                    if let Some(summary) = &file.summary {
                        div { class: "file-summary", "{summary}" }
                    }
                }
            }
            div { class: "content", "{msg.content}" }
        }
    }
}
