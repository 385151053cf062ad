use dioxus::{logger::tracing::warn, prelude::*};

/// Input row at the bottom of the chat: file picker, text field, send button.
///
/// The text field and both controls are disabled while a request is in
/// flight; the send button is also disabled while the field is blank.
#[component]
pub fn ChatInput(
    disabled: bool,
    on_send: Callback<String, ()>,
    on_file: Callback<(String, Vec<u8>), ()>,
) -> Element {
    let mut text = use_signal(|| "".to_string());
    let set_text = move |e: Event<FormData>| {
        if disabled {
            return;
        }
        text.set(e.value());
    };
    let mut _send = move || {
        if disabled || text.read().trim().is_empty() {
            return;
        }
        on_send(text.cloned());
        text.set("".to_string());
    };
    let send = move |_e: Event<MouseData>| {
        _send();
    };
    let pick_file = move |e: Event<FormData>| async move {
        let Some(file) = e.files().into_iter().next() else {
            return;
        };
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => on_file((name, bytes.to_vec())),
            Err(err) => warn!("could not read picked file {name}: {err:?}"),
        }
    };
    let blank = text.read().trim().is_empty();
    let send_disabled = if disabled || blank { Some(true) } else { None };
    let disabled = if disabled { Some(true) } else { None };
    rsx! {
        div { class: "input-area",
            label { class: "icon-button",
                input {
                    r#type: "file",
                    accept: ".pdf,.txt,.docx",
                    hidden: true,
                    disabled,
                    onchange: pick_file,
                }
                "📎"
            }
            input {
                r#type: "text",
                placeholder: "Type a message…",
                disabled,
                value: text,
                oninput: set_text,
                onkeypress: move |e: Event<KeyboardData>| {
                    if e.data.code() == Code::Enter {
                        _send();
                    }
                },
            }
            button {
                class: "send-button",
                onclick: send,
                disabled: send_disabled,
                if disabled.is_some() { "Sending…" } else { "Send" }
            }
        }
    }
}
