//! Candidate Radio Navigation
//!
//! Arrow keys cycle focus and selection through the vote form's candidates.

use web_sys::{Document, HtmlFormElement};

use crate::context::PageContext;
use crate::dom;

/// Bind keyboard navigation; returns the number of radios wired
pub fn bind(ctx: PageContext, document: &Document) -> Result<usize, String> {
    let config = ctx.config();
    let Some(form) = dom::by_id::<HtmlFormElement>(document, &config.vote_form_id) else {
        return Ok(0);
    };
    let radios = dom::inputs(&form, &config.candidate_radio_selector());
    input_keynav::bind_input_group(radios, |index| {
        log::debug!("candidate {} selected from keyboard", index);
    })
}
