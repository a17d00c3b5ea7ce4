use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use futures::future::LocalBoxFuture;
use futures::{Stream, StreamExt};
use shared_types::rollover::{parse_deadline, resolve_todo_date};
use shared_types::{CreateTodoRequest, SetDeadlineRequest, UpdateTodoRequest};
use uuid::Uuid;

use crate::api::TodoApi;
use crate::local_store::{KeyValueStore, USERNAME_KEY};
use crate::state::{ClientState, Notice};

pub const LOAD_FAILED: &str = "Failed to load saved data";
pub const FETCH_FAILED: &str = "Failed to fetch todos";
pub const SAVE_USERNAME_FAILED: &str = "Failed to save username";
pub const SAVE_DEADLINE_FAILED: &str = "Failed to save deadline";
pub const ADD_FAILED: &str = "Failed to add todo";
pub const UPDATE_FAILED: &str = "Failed to update todo";
pub const DELETE_FAILED: &str = "Failed to delete todo";
pub const NAME_REQUIRED: &str = "Please enter your name";
pub const ROLLED_OVER: &str = "Deadline passed! This todo will be added for tomorrow.";

/// One queued user action: takes the state it starts from and resolves to
/// the state it leaves behind.
pub type Action<A, K> =
    Box<dyn FnOnce(Rc<Session<A, K>>, ClientState) -> LocalBoxFuture<'static, ClientState>>;

/// Runs user actions against the API and the local store.
///
/// Every action takes the current state and returns the next one. Failures
/// are logged and turned into a notice; nothing here returns an error.
/// After each mutation the whole day is fetched again.
pub struct Session<A, K> {
    api: A,
    store: K,
    publish: Box<dyn Fn(&ClientState)>,
}

impl<A: TodoApi, K: KeyValueStore> Session<A, K> {
    pub fn new(api: A, store: K) -> Self {
        Self {
            api,
            store,
            publish: Box::new(|_| {}),
        }
    }

    /// Receive the in-between state an action shows while it waits on the
    /// network, such as the list being fetched.
    pub fn with_publisher(self, publish: impl Fn(&ClientState) + 'static) -> Self {
        Self {
            publish: Box::new(publish),
            ..self
        }
    }

    /// Restore the saved username and the shared deadline, then fetch the
    /// selected day.
    pub async fn load_initial(&self, state: ClientState) -> ClientState {
        let username = match self.store.get(USERNAME_KEY) {
            Ok(name) => name.filter(|n| !n.trim().is_empty()),
            Err(e) => {
                tracing::error!(error = %e, "Error loading username");
                return state.with_notice(Notice::error(LOAD_FAILED));
            }
        };
        let state = state.with_username(username);

        let state = match self.api.get_deadline().await {
            Ok(resp) => state.with_deadline(resp.deadline),
            Err(e) => {
                tracing::error!(error = %e, "Error loading deadline");
                state.with_notice(Notice::error(LOAD_FAILED))
            }
        };

        self.refresh(state).await
    }

    pub async fn set_username(&self, state: ClientState, name: &str) -> ClientState {
        let state = state.clear_notice();
        let name = name.trim();
        if name.is_empty() {
            return state.with_notice(Notice::error(NAME_REQUIRED));
        }

        match self.store.set(USERNAME_KEY, name) {
            Ok(()) => state.with_username(Some(name.to_string())),
            Err(e) => {
                tracing::error!(error = %e, "Error saving username");
                state.with_notice(Notice::error(SAVE_USERNAME_FAILED))
            }
        }
    }

    /// Move the selected day by `days` and fetch it.
    pub async fn change_date(&self, state: ClientState, days: i64) -> ClientState {
        self.refresh(state.clear_notice().shift_date(days)).await
    }

    pub async fn select_date(&self, state: ClientState, date: NaiveDate) -> ClientState {
        self.refresh(state.clear_notice().select_date(date)).await
    }

    /// Replace the cached list with the server's list for the selected day.
    pub async fn refresh(&self, state: ClientState) -> ClientState {
        let state = state.begin_fetch();
        (self.publish)(&state);
        match self.api.list_todos(state.selected_date).await {
            Ok(todos) => state.finish_fetch(todos),
            Err(e) => {
                tracing::error!(error = %e, date = %state.selected_date, "Error fetching todos");
                state.cancel_fetch().with_notice(Notice::error(FETCH_FAILED))
            }
        }
    }

    /// Add a to-do to the selected day, or to tomorrow once today's
    /// deadline has passed. Blank text is ignored.
    pub async fn add_todo(&self, state: ClientState, text: &str, now: NaiveDateTime) -> ClientState {
        let text = text.trim();
        if text.is_empty() {
            return state;
        }

        let mut state = state.clear_notice();
        let date = resolve_todo_date(now, state.selected_date, state.deadline_time());
        if date != state.selected_date {
            state = state.with_notice(Notice::info(ROLLED_OVER));
        }

        let req = CreateTodoRequest::new(text, state.display_name(), date);
        if let Err(e) = self.api.create_todo(&req).await {
            tracing::error!(error = %e, "Error adding todo");
            return state.with_notice(Notice::error(ADD_FAILED));
        }

        self.refresh(state).await
    }

    /// Flip `completed` on a cached to-do. Unknown ids are ignored.
    pub async fn toggle_complete(&self, state: ClientState, id: Uuid) -> ClientState {
        let Some(todo) = state.find_todo(id) else {
            return state;
        };
        let req = UpdateTodoRequest::completed(!todo.completed);
        self.send_update(state, id, req).await
    }

    /// Replace the text of a cached to-do. Unknown ids and blank text are ignored.
    pub async fn update_text(&self, state: ClientState, id: Uuid, text: &str) -> ClientState {
        let text = text.trim();
        if text.is_empty() || state.find_todo(id).is_none() {
            return state;
        }
        self.send_update(state, id, UpdateTodoRequest::text(text)).await
    }

    async fn send_update(&self, state: ClientState, id: Uuid, req: UpdateTodoRequest) -> ClientState {
        let state = state.clear_notice();
        if let Err(e) = self.api.update_todo(id, &req).await {
            tracing::error!(error = %e, todo_id = %id, "Error updating todo");
            return state.with_notice(Notice::error(UPDATE_FAILED));
        }
        self.refresh(state).await
    }

    pub async fn delete_todo(&self, state: ClientState, id: Uuid) -> ClientState {
        let state = state.clear_notice();
        if let Err(e) = self.api.delete_todo(id).await {
            tracing::error!(error = %e, todo_id = %id, "Error deleting todo");
            return state.with_notice(Notice::error(DELETE_FAILED));
        }
        self.refresh(state).await
    }

    /// Check the `HH:mm` format locally, then store the deadline for everyone.
    pub async fn set_deadline(&self, state: ClientState, value: &str) -> ClientState {
        let state = state.clear_notice();
        let value = value.trim();
        if let Err(e) = parse_deadline(value) {
            return state.with_notice(Notice::error(e.message));
        }

        match self.api.set_deadline(&SetDeadlineRequest::new(value)).await {
            Ok(resp) => state.with_deadline(resp.deadline),
            Err(e) => {
                tracing::error!(error = %e, "Error saving deadline");
                state.with_notice(Notice::error(SAVE_DEADLINE_FAILED))
            }
        }
    }
}

/// Apply queued actions one at a time. Each starts from the state the
/// previous one published, so quick repeated clicks all take effect.
pub async fn run_actions<A, K, R>(
    session: Rc<Session<A, K>>,
    mut actions: R,
    current: impl Fn() -> ClientState,
    publish: impl Fn(ClientState),
) where
    A: TodoApi,
    K: KeyValueStore,
    R: Stream<Item = Action<A, K>> + Unpin,
{
    while let Some(action) = actions.next().await {
        let next = action(session.clone(), current()).await;
        publish(next);
    }
}
