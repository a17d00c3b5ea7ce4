use dioxus::prelude::*;

mod api;
mod context;
mod format_helpers;
mod local_store;
mod routes;
mod session;
mod state;

use context::AppContext;
use routes::Route;

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let store = match server::db::store_from_env().await {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize store");
                std::process::exit(1);
            }
        };

        let router = dioxus::server::router(App).merge(server::openapi::api_router(store));
        Ok(server::middleware::apply(router, flags))
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let ctx = AppContext::provide();

    // Read the saved name and the shared deadline once.
    use_hook(move || ctx.load());

    rsx! {
        document::Title { "Household Todo" }
        Router::<Route> {}
    }
}
