use dioxus::{logger::tracing::Level, prelude::*};

use attache::api::{ApiClient, DEFAULT_API_BASE};

fn main() {
    dioxus::logger::init(Level::WARN).unwrap();
    let client = ApiClient::new(DEFAULT_API_BASE);
    LaunchBuilder::new().with_context(client).launch(attache::App)
}
