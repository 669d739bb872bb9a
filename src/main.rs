mod bot;
mod landing;
mod primitives;
mod widget;

use dioxus::prelude::*;
use bot::FloatingBot;
use landing::Landing;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    // Set by the bot's close callback; the footer uses it to draw attention
    // to the restore button
    let mut just_closed = use_context_provider(|| Signal::new(false));
    use_context_provider(move || {
        let mut bot = bot::open_browser_bot();
        bot.set_on_close(move || just_closed.set(true));
        Signal::new(bot)
    });

    rsx! {
        div {
            id: "main",
            Router::<Route> {}
            FloatingBot {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    dioxus::launch(App);
}
