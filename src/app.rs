//! Ballot UI App
//!
//! Attaches every page behavior once the document has been parsed.

use leptos::prelude::*;
use web_sys::Document;

use crate::behaviors::{alerts, election_form, radio_nav, submit_guard, vote_form};
use crate::config::UiConfig;
use crate::context::PageContext;
use crate::dom;

/// Wire the page now, or on DOMContentLoaded while the document is still loading
pub fn start(config: UiConfig) {
    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::error!("cannot start: {}", e);
            return;
        }
    };

    if document.ready_state() != "loading" {
        wire(config, &document);
        return;
    }

    let mut pending = Some(config);
    let target = document.clone();
    let result = dom::listen(&document, "DOMContentLoaded", move |_ev| {
        if let Some(config) = pending.take() {
            wire(config, &target);
        }
    });
    if let Err(e) = result {
        log::error!("cannot wait for DOMContentLoaded: {}", e);
    }
}

fn wire(config: UiConfig, document: &Document) {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = PageContext::new(config);
        let config = ctx.config();

        if let Err(e) = submit_guard::install(document) {
            log::error!("submit guard not installed: {}", e);
        }

        let alerts = alerts::schedule(&config, document);
        if alerts > 0 {
            log::debug!("{} alerts scheduled for dismissal", alerts);
        }

        match election_form::bind(&config, document) {
            Ok(true) => log::debug!("create-election validation ready"),
            Ok(false) => {}
            Err(e) => log::error!("create-election validation not wired: {}", e),
        }

        match vote_form::bind(ctx, document) {
            Ok(true) => match radio_nav::bind(ctx, document) {
                Ok(radios) => log::debug!("keyboard navigation over {} candidates", radios),
                Err(e) => log::error!("keyboard navigation not wired: {}", e),
            },
            Ok(false) => {}
            Err(e) => log::error!("vote form not wired: {}", e),
        }
    });
    // Listeners hold signals from this owner for the rest of the page
    std::mem::forget(owner);
}
