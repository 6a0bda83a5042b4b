//! Page Behaviors
//!
//! One module per independent enhancement of the server-rendered pages.

pub mod alerts;
pub mod election_form;
pub mod radio_nav;
pub mod submit_guard;
pub mod vote_form;
