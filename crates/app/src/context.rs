use std::future::Future;
use std::rc::Rc;

use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use futures::FutureExt;

use crate::api::HttpTodoApi;
use crate::local_store::{platform_store, KeyValueStore};
use crate::session::{run_actions, Action, Session};
use crate::state::ClientState;

pub type AppSession = Session<HttpTodoApi, Box<dyn KeyValueStore>>;
pub type AppAction = Action<HttpTodoApi, Box<dyn KeyValueStore>>;

/// Today on the device's wall clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Client state plus the queue of actions that advance it.
#[derive(Clone)]
pub struct AppContext {
    pub state: Signal<ClientState>,
    /// Set once saved data has been read.
    pub loaded: Signal<bool>,
    actions: Coroutine<AppAction>,
}

impl AppContext {
    /// Create the shared state and its action queue and provide them to
    /// every route. Call once, from the root component.
    pub fn provide() -> Self {
        let state = use_signal(|| ClientState::new(today()));
        let loaded = use_signal(|| false);

        let session = use_hook(move || {
            let session = Session::new(HttpTodoApi::from_build_env(), platform_store())
                .with_publisher(move |shown: &ClientState| {
                    let mut state = state;
                    state.set(shown.clone());
                });
            Rc::new(session)
        });

        let actions = use_coroutine(move |rx: UnboundedReceiver<AppAction>| {
            run_actions(
                session.clone(),
                rx,
                move || state.peek().clone(),
                move |next| {
                    let mut state = state;
                    state.set(next);
                },
            )
        });

        use_context_provider(|| Self {
            state,
            loaded,
            actions,
        })
    }

    /// Queue a session action. It runs after every action queued before it,
    /// on the state they left behind.
    pub fn run<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<AppSession>, ClientState) -> Fut + 'static,
        Fut: Future<Output = ClientState> + 'static,
    {
        let action: AppAction = Box::new(move |session: Rc<AppSession>, state: ClientState| {
            action(session, state).boxed_local()
        });
        self.actions.send(action);
    }

    pub fn load(&self) {
        let mut loaded = self.loaded;
        self.run(move |session, state| async move {
            let next = session.load_initial(state).await;
            loaded.set(true);
            next
        });
    }

    pub fn dismiss_notice(&self) {
        let mut state = self.state;
        let next = state.peek().clone().clear_notice();
        state.set(next);
    }
}

/// Hook to access the shared client context.
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}
