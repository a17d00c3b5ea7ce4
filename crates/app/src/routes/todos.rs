use chrono::{Duration, Local};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronLeft, LdChevronRight, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::rollover::reminder_time;
use shared_types::Todo;

use crate::context::{today, use_app};
use crate::format_helpers::{format_created_at, format_reminder, relative_day_label};
use crate::routes::Route;
use crate::state::NoticeKind;

/// How long before the deadline the reminder is shown for.
const REMINDER_LEAD_MINUTES: i64 = 15;

/// The day's shared to-do list.
#[component]
pub fn TodoList() -> Element {
    let ctx = use_app();
    let nav = navigator();
    let state = ctx.state;
    let loaded = ctx.loaded;

    // Nobody has picked a name yet.
    use_effect(move || {
        if loaded() && state.read().username.is_none() {
            nav.replace(Route::NameEntry {});
        }
    });

    let current = state.read().clone();
    let day_label = relative_day_label(current.selected_date, today());

    let prev_ctx = ctx.clone();
    let next_ctx = ctx.clone();
    let dismiss_ctx = ctx.clone();

    rsx! {
        div { class: "todo-page",
            header { class: "todo-header",
                h1 { "Welcome, {current.display_name()}!" }
                DeadlineEditor { deadline: current.deadline.clone() }
            }

            if let Some(notice) = current.notice.clone() {
                div {
                    class: if notice.kind == NoticeKind::Error { "notice notice-error" } else { "notice notice-info" },
                    span { "{notice.message}" }
                    button {
                        class: "notice-dismiss",
                        onclick: move |_| dismiss_ctx.dismiss_notice(),
                        "Dismiss"
                    }
                }
            }

            nav { class: "date-nav",
                button {
                    class: "date-nav-button",
                    title: "Previous day",
                    onclick: move |_| {
                        prev_ctx.run(|session, state| async move { session.change_date(state, -1).await });
                    },
                    Icon { icon: LdChevronLeft, width: 18, height: 18 }
                }
                span { class: "date-nav-label", "{day_label}" }
                button {
                    class: "date-nav-button",
                    title: "Next day",
                    onclick: move |_| {
                        next_ctx.run(|session, state| async move { session.change_date(state, 1).await });
                    },
                    Icon { icon: LdChevronRight, width: 18, height: 18 }
                }
            }

            AddTodo {}

            if current.is_fetching && current.todos.is_empty() {
                p { class: "todo-loading", "Loading…" }
            } else if current.todos.is_empty() {
                p { class: "todo-empty", "Nothing planned for this day." }
            } else {
                ul { class: "todo-items",
                    for todo in current.todos.iter().cloned() {
                        TodoRow { key: "{todo.id}", todo }
                    }
                }
            }
        }
    }
}

/// Shows the shared deadline and lets anyone change it.
#[component]
fn DeadlineEditor(deadline: String) -> Element {
    let ctx = use_app();
    let mut editing = use_signal(|| false);
    let mut draft = use_signal(|| deadline.clone());

    let now = Local::now().naive_local();
    let deadline_time = ctx.state.read().deadline_time();
    let reminder = reminder_time(now, deadline_time, Duration::minutes(REMINDER_LEAD_MINUTES));
    let reminder_label = format_reminder(reminder, now.date());

    let submit_ctx = ctx.clone();

    rsx! {
        div { class: "deadline",
            span { class: "deadline-label", "Today's Deadline: " }
            if editing() {
                input {
                    class: "deadline-input",
                    placeholder: "HH:mm",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    class: "deadline-set",
                    onclick: move |_| {
                        let value = draft();
                        editing.set(false);
                        submit_ctx.run(move |session, state| async move {
                            session.set_deadline(state, &value).await
                        });
                    },
                    "Set"
                }
            } else {
                button {
                    class: "deadline-value",
                    onclick: {
                        let deadline = deadline.clone();
                        move |_| {
                            draft.set(deadline.clone());
                            editing.set(true);
                        }
                    },
                    "{deadline}"
                }
                span { class: "deadline-reminder", "Reminder at {reminder_label}" }
            }
        }
    }
}

/// Input for a new to-do on the selected day.
#[component]
fn AddTodo() -> Element {
    let ctx = use_app();
    let mut text = use_signal(String::new);

    let add = move || {
        let value = text();
        if value.trim().is_empty() {
            return;
        }
        text.set(String::new());
        let now = Local::now().naive_local();
        ctx.run(move |session, state| async move { session.add_todo(state, &value, now).await });
    };
    let mut add_on_enter = add.clone();
    let mut add_on_click = add;

    rsx! {
        div { class: "todo-add",
            input {
                class: "todo-add-input",
                placeholder: "Add a new todo",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        add_on_enter();
                    }
                },
            }
            button { class: "todo-add-button", onclick: move |_| add_on_click(), "Add" }
        }
    }
}

/// One to-do with complete, edit and delete controls.
#[component]
fn TodoRow(todo: Todo) -> Element {
    let ctx = use_app();
    let mut editing = use_signal(|| false);
    let mut draft = use_signal(|| todo.text.clone());

    let id = todo.id;
    let created = format_created_at(todo.created_at);
    let toggle_ctx = ctx.clone();
    let save_ctx = ctx.clone();
    let delete_ctx = ctx;

    rsx! {
        li { class: if todo.completed { "todo-item todo-item-done" } else { "todo-item" },
            input {
                r#type: "checkbox",
                checked: todo.completed,
                onchange: move |_| {
                    toggle_ctx.run(move |session, state| async move {
                        session.toggle_complete(state, id).await
                    });
                },
            }
            if editing() {
                input {
                    class: "todo-edit-input",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            let value = draft();
                            editing.set(false);
                            save_ctx.run(move |session, state| async move {
                                session.update_text(state, id, &value).await
                            });
                        } else if evt.key() == Key::Escape {
                            editing.set(false);
                        }
                    },
                }
            } else {
                div { class: "todo-body", ondoubleclick: move |_| editing.set(true),
                    span { class: "todo-text", "{todo.text}" }
                    span { class: "todo-meta", "{todo.created_by} · {created}" }
                }
            }
            button {
                class: "todo-delete",
                title: "Delete",
                onclick: move |_| {
                    delete_ctx.run(move |session, state| async move {
                        session.delete_todo(state, id).await
                    });
                },
                Icon { icon: LdTrash2, width: 16, height: 16 }
            }
        }
    }
}
