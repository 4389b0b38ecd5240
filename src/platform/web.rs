//! Browser collaborators (wasm32 only)

use wasm_bindgen::prelude::*;
use web_sys::{Element, KeyboardEvent, Window};

use super::{KeyboardInput, TextDisplay};
use crate::sim::KeyState;

/// Key events from the window's `keydown`/`keyup` listeners
pub struct WindowKeyboard {
    window: Window,
}

impl WindowKeyboard {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn listen(&self, event: &str, keys: KeyState, pressed: bool) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if pressed {
                keys.key_down(&event.key());
            } else {
                keys.key_up(&event.key());
            }
        });
        if let Err(e) = self
            .window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::error!("Could not listen for {}: {:?}", event, e);
        }
        // Listeners live as long as the page
        closure.forget();
    }
}

impl KeyboardInput for WindowKeyboard {
    fn subscribe(&mut self, keys: KeyState) {
        self.listen("keydown", keys.clone(), true);
        self.listen("keyup", keys, false);
    }
}

/// A DOM element whose text content shows the count
pub struct ElementText {
    element: Element,
}

impl ElementText {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl TextDisplay for ElementText {
    fn set_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}
