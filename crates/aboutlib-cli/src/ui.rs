//! A one-button screen.
//!
//! The button owns a click handler that produces text; pressing it hands that
//! text to a display target. [`Screen`] wires the handler to the description
//! formatter, the way the demo app's main activity does.

use aboutlib_core::formatted_library_description;
use aboutlib_types::Library;
use std::fmt;
use std::sync::Arc;

/// Anything that can show a line of text.
pub trait DisplayTarget {
    fn set_text(&mut self, text: String);
}

/// In-memory text label. Starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl DisplayTarget for Label {
    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

type ClickHandler = Box<dyn Fn() -> String>;

pub struct Button {
    caption: String,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            on_click: None,
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Register the click handler, replacing any previous one.
    pub fn set_on_click<F>(&mut self, handler: F)
    where
        F: Fn() -> String + 'static,
    {
        self.on_click = Some(Box::new(handler));
    }

    /// Run the click handler once and show its result on `target`.
    ///
    /// Returns `false` (leaving `target` untouched) when no handler is set.
    pub fn press(&self, target: &mut dyn DisplayTarget) -> bool {
        match &self.on_click {
            Some(handler) => {
                target.set_text(handler());
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("caption", &self.caption)
            .field("has_handler", &self.on_click.is_some())
            .finish()
    }
}

pub const SHOW_DESCRIPTION_CAPTION: &str = "Show description";

#[derive(Debug)]
pub struct Screen {
    button: Button,
    label: Label,
}

impl Screen {
    pub fn new(library: Arc<dyn Library>) -> Self {
        let mut button = Button::new(SHOW_DESCRIPTION_CAPTION);
        button.set_on_click(move || formatted_library_description(library.as_ref()));

        Self {
            button,
            label: Label::new(),
        }
    }

    pub fn press(&mut self) -> bool {
        self.button.press(&mut self.label)
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn label(&self) -> &Label {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_label_starts_empty() {
        assert_eq!(Label::new().text(), "");
    }

    #[test]
    fn test_press_without_handler_is_noop() {
        let button = Button::new("idle");
        let mut label = Label::new();
        label.set_text("unchanged".to_string());

        assert!(!button.press(&mut label));
        assert_eq!(label.text(), "unchanged");
    }

    #[test]
    fn test_press_runs_handler_once() {
        let presses = Rc::new(Cell::new(0));
        let counter = Rc::clone(&presses);

        let mut button = Button::new("count");
        button.set_on_click(move || {
            counter.set(counter.get() + 1);
            format!("pressed {}", counter.get())
        });

        let mut label = Label::new();
        assert!(button.press(&mut label));
        assert_eq!(label.text(), "pressed 1");
        assert!(button.press(&mut label));
        assert_eq!(label.text(), "pressed 2");
        assert_eq!(presses.get(), 2);
    }

    #[test]
    fn test_screen_shows_formatted_description() {
        let library: Arc<dyn Library> = Arc::new(|| "Test library. Version 0.0.0".to_string());
        let mut screen = Screen::new(library);

        assert_eq!(screen.button().caption(), "Show description");
        assert_eq!(screen.label().text(), "");

        assert!(screen.press());
        assert_eq!(
            screen.label().text(),
            "About library:\nTest library. Version 0.0.0"
        );
    }
}
