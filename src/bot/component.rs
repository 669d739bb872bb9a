use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::primitives::{Position, viewport_size};
use crate::widget::Timer;

use super::BrowserBot;
use super::browser::scroll_offset;

/// How often the window size and scroll offset are sampled
const WATCH_MS: u32 = 200;

/// Run `timer` on this component's scope; dropped with the component.
fn schedule(mut bot: Signal<BrowserBot>, timer: Timer) {
    spawn(async move {
        TimeoutFuture::new(timer.after_ms).await;
        bot.write().on_timer(timer.kind);
    });
}

/// End the drag; a tap hands back the timer that closes its tip.
fn release(mut bot: Signal<BrowserBot>) {
    let clear = bot.write().on_pointer_up();
    if let Some(clear) = clear {
        schedule(bot, clear);
    }
}

fn pointer(e: &Event<MouseData>) -> Position {
    let c = e.client_coordinates();
    Position::new(c.x as f32, c.y as f32)
}

/// The floating assistant. Reads the shared controller from context.
#[component]
pub fn FloatingBot() -> Element {
    let mut bot = use_context::<Signal<BrowserBot>>();

    // Viewport/scroll watcher
    use_hook(move || {
        spawn(async move {
            let mut last_vp = viewport_size();
            let mut last_scroll = scroll_offset();
            loop {
                TimeoutFuture::new(WATCH_MS).await;
                let vp = viewport_size();
                if vp != last_vp {
                    last_vp = vp;
                    bot.write().on_resize(vp);
                }
                let scroll = scroll_offset();
                if scroll != last_scroll {
                    last_scroll = scroll;
                    bot.write().on_scroll(scroll);
                }
            }
        });
    });

    // Message rotation
    use_hook(move || {
        let interval = bot.peek().config().rotation_interval_ms;
        spawn(async move {
            loop {
                TimeoutFuture::new(interval).await;
                let pulse = bot.write().on_tick();
                schedule(bot, pulse);
            }
        });
    });

    let state = bot.read();
    if !state.is_visible() {
        return rsx! {};
    }
    let place = state.position().to_css();
    let size = state.footprint().to_css();
    let dragging = state.is_dragging();
    let msg = state.message();
    drop(state);

    let cursor = if dragging { "grabbing" } else { "grab" };
    let scale = if msg.highlighted { "scale(1.08)" } else { "none" };
    let shadow = if dragging {
        "0 12px 32px rgba(79,70,229,0.45)"
    } else {
        "0 6px 18px rgba(0,0,0,0.25)"
    };
    let bubble_opacity = if msg.bubble_visible { "1" } else { "0" };
    let mut class = String::from("floating-bot");
    if dragging {
        class.push_str(" dragging");
    }
    if msg.highlighted {
        class.push_str(" new-message");
    }
    let text = msg.text;

    rsx! {
        div {
            class: "{class}",
            style: "position: fixed; {place} {size} z-index: 1000; cursor: {cursor}; user-select: none; border-radius: 50%; background: linear-gradient(135deg, #6366f1, #a855f7); box-shadow: {shadow}; transform: {scale}; transition: transform 0.3s, box-shadow 0.15s; display: flex; align-items: center; justify-content: center;",
            onmousedown: move |e: Event<MouseData>| {
                e.prevent_default();
                bot.write().on_pointer_down(pointer(&e));
            },
            onmouseenter: move |_| bot.write().on_hover_enter(),
            onmouseleave: move |_| {
                let hide = bot.write().on_hover_leave();
                if let Some(hide) = hide {
                    schedule(bot, hide);
                }
            },

            button {
                class: "close-btn",
                title: "Cerrar bot",
                style: "position: absolute; top: -4px; right: -4px; width: 22px; height: 22px; border: none; border-radius: 50%; background: #ef4444; color: white; font-size: 14px; line-height: 22px; cursor: pointer; padding: 0;",
                onmousedown: move |e: Event<MouseData>| e.stop_propagation(),
                onclick: move |_| bot.write().close(),
                "\u{00d7}"
            }

            span {
                style: "font-size: 48px; pointer-events: none;",
                "\u{1f916}"
            }

            div {
                class: "bot-tooltip",
                style: "position: absolute; bottom: 100%; left: 50%; transform: translateX(-50%); margin-bottom: 10px; white-space: nowrap; background: white; color: #1f2937; padding: 8px 12px; border-radius: 10px; font-size: 13px; font-family: system-ui, sans-serif; box-shadow: 0 4px 12px rgba(0,0,0,0.15); opacity: {bubble_opacity}; transition: opacity 0.2s; pointer-events: none;",
                "{text}"
            }
        }

        // Drag overlay: captures the pointer for the whole window while dragging
        if dragging {
            div {
                style: "position: fixed; inset: 0; z-index: 1001; cursor: grabbing;",
                onmousemove: move |e: Event<MouseData>| bot.write().on_pointer_move(pointer(&e)),
                onmouseup: move |_| release(bot),
                onmouseleave: move |_| release(bot),
            }
        }
    }
}
