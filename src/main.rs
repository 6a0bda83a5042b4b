#![allow(warnings)]
//! Ballot UI Entry Point
//!
//! Client-side behavior for the voting site's server-rendered pages.

mod api;
mod app;
mod behaviors;
mod bootstrap;
mod config;
mod context;
mod dom;
mod flow;
mod models;
mod validation;

use config::UiConfig;
use wasm_bindgen::prelude::*;

/// Recent log lines, for pasting into bug reports from the devtools console
#[wasm_bindgen(js_name = ballotUiRecentLog)]
pub fn recent_log() -> String {
    rolling_logger::recent_lines().join("\n")
}

fn main() {
    console_error_panic_hook::set_once();

    let (config, problems) = UiConfig::load_from_page();
    let logger = rolling_logger::init(config.level_filter(), rolling_logger::DEFAULT_CAPACITY);
    if let Err(e) = logger {
        web_sys::console::warn_1(&format!("logger not installed: {}", e).into());
    }
    for problem in problems {
        log::warn!("{}", problem);
    }

    app::start(config);
}
