//! Keyboard Navigation Utilities
//!
//! Roving focus for a fixed group of inputs (radio lists, segmented choices).
//! Arrow keys move focus and selection to the neighbouring element, wrapping at both ends.

use wasm_bindgen::JsCast;

/// Direction requested by a navigation key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    /// ArrowDown / ArrowRight
    Next,
    /// ArrowUp / ArrowLeft
    Prev,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "ArrowRight" => Some(NavKey::Next),
            "ArrowUp" | "ArrowLeft" => Some(NavKey::Prev),
            _ => None,
        }
    }
}

/// Index reached from `index` in a group of `len` elements, wrapping at both ends.
/// Returns None for an empty group.
pub fn step(index: usize, len: usize, key: NavKey) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = index % len;
    Some(match key {
        NavKey::Next => (index + 1) % len,
        NavKey::Prev => (index + len - 1) % len,
    })
}

/// Target index for a keydown on the element at `index`.
/// None when the key is not a navigation key or the group is empty.
pub fn target_for_key(key: &str, index: usize, len: usize) -> Option<usize> {
    step(index, len, NavKey::from_key(key)?)
}

/// Create keydown handler for the element at `index`.
/// `move_to` performs the actual focus/selection on the target index.
pub fn make_on_keydown<F>(index: usize, len: usize, move_to: F) -> impl Fn(web_sys::KeyboardEvent) + Clone + 'static
where
    F: Fn(usize) + Clone + 'static,
{
    move |ev: web_sys::KeyboardEvent| {
        let Some(target) = target_for_key(&ev.key(), index, len) else { return };
        ev.prevent_default();
        move_to(target);
    }
}

/// Bind arrow-key navigation across a group of inputs.
/// Moving focuses the target input and checks it.
/// `on_select` is called with the new index after each move.
/// Returns the number of inputs wired.
pub fn bind_input_group<F>(inputs: Vec<web_sys::HtmlInputElement>, on_select: F) -> Result<usize, String>
where
    F: Fn(usize) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;
    use std::rc::Rc;

    let len = inputs.len();
    let inputs = Rc::new(inputs);
    for (index, input) in inputs.iter().enumerate() {
        let group = Rc::clone(&inputs);
        let on_select = on_select.clone();
        let move_to = move |target: usize| {
            if let Some(el) = group.get(target) {
                if let Err(e) = el.focus() {
                    log::debug!("focus on input {} failed: {:?}", target, e);
                }
                el.set_checked(true);
                on_select(target);
            }
        };
        let handler = make_on_keydown(index, len, move_to);
        let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
            handler(ev);
        });
        let result = input
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
            .map_err(|e| format!("add keydown listener to input {}: {:?}", index, e));
        on_keydown.forget();
        result?;
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("ArrowRight"), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("ArrowUp"), Some(NavKey::Prev));
        assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::Prev));
        assert_eq!(NavKey::from_key("Enter"), None);
        assert_eq!(NavKey::from_key("arrowdown"), None);
    }

    #[test]
    fn test_step_wraps_last_to_first() {
        assert_eq!(step(2, 3, NavKey::Next), Some(0));
        assert_eq!(step(0, 3, NavKey::Next), Some(1));
    }

    #[test]
    fn test_step_wraps_first_to_last() {
        assert_eq!(step(0, 3, NavKey::Prev), Some(2));
        assert_eq!(step(2, 3, NavKey::Prev), Some(1));
    }

    #[test]
    fn test_step_single_and_empty_group() {
        assert_eq!(step(0, 1, NavKey::Next), Some(0));
        assert_eq!(step(0, 1, NavKey::Prev), Some(0));
        assert_eq!(step(0, 0, NavKey::Next), None);
    }

    #[test]
    fn test_target_for_key() {
        assert_eq!(target_for_key("ArrowDown", 2, 3), Some(0));
        assert_eq!(target_for_key("ArrowLeft", 0, 3), Some(2));
        assert_eq!(target_for_key("ArrowRight", 1, 3), Some(2));
        assert_eq!(target_for_key("Tab", 1, 3), None);
        assert_eq!(target_for_key("ArrowUp", 0, 0), None);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let len = 4;
        let mut idx = 1;
        for _ in 0..len {
            idx = step(idx, len, NavKey::Next).unwrap();
        }
        assert_eq!(idx, 1);
        for _ in 0..len {
            idx = step(idx, len, NavKey::Prev).unwrap();
        }
        assert_eq!(idx, 1);
    }
}
