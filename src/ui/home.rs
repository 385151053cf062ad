//! The chat view.
//!
//! Owns the session state and sequences the two backend calls around it:
//! text sends to `/api/chat` and file uploads to `/api/analyze`. Failures are
//! logged and swallowed; the transcript only ever grows.

use std::rc::Rc;

use dioxus::{logger::tracing::warn, prelude::*};

use crate::{
    api::ApiClient,
    session::ChatSession,
    ui::{chat_input::ChatInput, message::MessageEl},
};

#[component]
pub fn Home() -> Element {
    let client = use_context::<ApiClient>();
    let mut session = use_signal(ChatSession::new);

    // Anchor element below the newest content; every session change scrolls
    // it back into view.
    let mut anchor: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    use_effect(move || {
        let _ = session.read().transcript().len();
        if let Some(el) = anchor() {
            spawn(async move {
                if let Err(e) = el.scroll_to(ScrollBehavior::Smooth).await {
                    warn!("could not scroll to newest message: {e:?}");
                }
            });
        }
    });

    let send_client = client.clone();
    let send_msg = Callback::new(move |s: String| {
        let client = send_client.clone();
        async move {
            if !session.read().can_send(&s) {
                return;
            }
            session.with_mut(|sess| sess.begin_send(&s));
            match client.chat(&s).await {
                Ok(reply) => session.with_mut(|sess| sess.complete_send(reply.content)),
                Err(e) => {
                    warn!("chat request failed: {e:?}");
                    session.with_mut(|sess| sess.fail_request());
                }
            }
        }
    });

    let upload_file = Callback::new(move |(name, bytes): (String, Vec<u8>)| {
        let client = client.clone();
        async move {
            session.with_mut(|sess| sess.begin_upload());
            match client.analyze(&name, bytes).await {
                Ok(reply) => session.with_mut(|sess| sess.complete_upload(&name, reply.summary)),
                Err(e) => {
                    warn!("analysis request failed for {name}: {e:?}");
                    session.with_mut(|sess| sess.fail_request());
                }
            }
        }
    });

    let busy = session.read().is_busy();

    rsx! {
        div { class: "chat-container",
            div { class: "messages",
                for msg in session.read().transcript().messages().iter() {
                    MessageEl { key: "{msg.id}", msg: msg.clone() }
                }
                if busy {
                    div { class: "message ai-message loading",
                        div { class: "typing-indicator",
                            div { class: "dot" }
                            div { class: "dot" }
                            div { class: "dot" }
                        }
                    }
                }
                div {
                    class: "messages-end",
                    onmounted: move |e| anchor.set(Some(e.data())),
                }
            }
            ChatInput {
                disabled: busy,
                on_send: send_msg,
                on_file: upload_file,
            }
        }
    }
}
