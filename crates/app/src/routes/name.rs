use dioxus::prelude::*;

use crate::context::use_app;
use crate::routes::Route;

/// Asks for the display name attached to new to-dos.
#[component]
pub fn NameEntry() -> Element {
    let ctx = use_app();
    let nav = navigator();
    let state = ctx.state;
    let mut name = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    // Leave once the name has been saved.
    use_effect(move || {
        if submitted() && state.read().username.is_some() {
            nav.replace(Route::TodoList {});
        }
    });

    let submit = move || {
        let value = name();
        submitted.set(true);
        ctx.run(move |session, state| async move { session.set_username(state, &value).await });
    };
    let mut submit_on_enter = submit.clone();
    let mut submit_on_click = submit;

    let notice = state.read().notice.clone();

    rsx! {
        div { class: "name-page",
            h1 { "Welcome!" }
            p { "What should the household call you?" }
            input {
                class: "name-input",
                placeholder: "Your name",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        submit_on_enter();
                    }
                },
            }
            button { class: "name-submit", onclick: move |_| submit_on_click(), "Continue" }
            if let Some(notice) = notice {
                p { class: "notice notice-error", "{notice.message}" }
            }
        }
    }
}
