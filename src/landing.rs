use dioxus::prelude::*;

use crate::bot::BrowserBot;

const FEATURES: &[(&str, &str)] = &[
    (
        "Social posts",
        "Pick a platform, a tone and a language \u{2014} the generator drafts the copy.",
    ),
    (
        "Financial news",
        "Summaries of market moves with the figures that matter.",
    ),
    (
        "Scientific articles",
        "Long-form explainers built on recent papers.",
    ),
];

#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            style: "min-height: 250vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; padding: 80px 20px 40px; font-family: system-ui, -apple-system, sans-serif;",

            // Hero
            div {
                style: "text-align: center; max-width: 720px;",
                h1 {
                    style: "font-size: 48px; font-weight: 700; color: #e5e7eb; margin: 0 0 16px 0; letter-spacing: -1px;",
                    "MAGIC POST"
                }
                p {
                    style: "font-size: 20px; color: #9ca3af; margin: 0 0 40px 0; line-height: 1.6;",
                    "AI-generated content for social media, finance and science. Drag the assistant anywhere \u{2014} it remembers where you left it."
                }
            }

            // Feature grid
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 20px; max-width: 800px; width: 100%; margin-top: 32px;",
                for (title, body) in FEATURES.iter() {
                    div {
                        key: "{title}",
                        style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px;",
                        h3 {
                            style: "color: #e5e7eb; font-size: 16px; margin: 0 0 8px 0;",
                            "{title}"
                        }
                        p {
                            style: "color: #6b7280; font-size: 14px; margin: 0; line-height: 1.5;",
                            "{body}"
                        }
                    }
                }
            }

            div { style: "flex: 1;" }
            Footer {}
        }
    }
}

/// Offers to bring the bot back once it has been closed
#[component]
fn Footer() -> Element {
    let mut bot = use_context::<Signal<BrowserBot>>();
    let mut just_closed = use_context::<Signal<bool>>();
    let hidden = !bot.read().is_visible();
    let accent = if just_closed() { "#a855f7" } else { "#4f46e5" };

    rsx! {
        footer {
            style: "display: flex; gap: 16px; align-items: center; color: #4b5563; font-size: 13px; margin-top: 64px;",
            span { "\u{00a9} MAGIC POST" }
            if hidden {
                button {
                    style: "padding: 6px 14px; border: none; border-radius: 6px; font-size: 13px; font-weight: 600; cursor: pointer; color: white; background: {accent};",
                    onclick: move |_| {
                        bot.write().restore();
                        just_closed.set(false);
                    },
                    "\u{1f916} Mostrar bot"
                }
            }
        }
    }
}
