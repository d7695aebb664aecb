use uptime_core::{
    TargetMode,
    UptimeText,
};
use wasm_bindgen::JsCast;
use web_sys::{
    Document,
    Element,
};

use crate::{
    error::Error,
    utils::js_error_message,
};

/// Something that can show the uptime.
pub trait UptimeTarget {
    fn show(&self, text: &UptimeText);
}

impl UptimeTarget for Element {
    fn show(&self, text: &UptimeText) {
        self.set_text_content(Some(&text.short));
        if let Err(error) = self.set_attribute("title", &text.detailed) {
            tracing::warn!(error = %js_error_message(&error), "could not set title");
        }
    }
}

/// Writes `text` into every target.
pub fn render_all<'a, T: UptimeTarget + 'a>(
    targets: impl IntoIterator<Item = &'a T>,
    text: &UptimeText,
) {
    for target in targets {
        target.show(text);
    }
}

/// The elements the uptime is written to.
#[derive(Debug)]
pub enum Targets {
    Snapshot(Vec<Element>),
    Live { document: Document, selector: String },
}

impl Targets {
    pub fn resolve(document: &Document, selector: &str, mode: TargetMode) -> Result<Self, Error> {
        // resolve once in either mode, so that a bad selector fails on startup.
        let elements = query_all(document, selector)?;
        tracing::debug!(selector, num_elements = elements.len(), ?mode, "resolved targets");

        Ok(match mode {
            TargetMode::Snapshot => Targets::Snapshot(elements),
            TargetMode::Live => {
                Targets::Live {
                    document: document.clone(),
                    selector: selector.to_owned(),
                }
            }
        })
    }

    /// Whether there is nothing to update now and there never will be.
    pub fn is_inert(&self) -> bool {
        match self {
            Targets::Snapshot(elements) => elements.is_empty(),
            Targets::Live { .. } => false,
        }
    }

    pub fn render(&self, text: &UptimeText) -> Result<(), Error> {
        match self {
            Targets::Snapshot(elements) => render_all(elements, text),
            Targets::Live { document, selector } => {
                render_all(&query_all(document, selector)?, text)
            }
        }
        Ok(())
    }
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, Error> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|error| {
            Error::InvalidSelector {
                selector: selector.to_owned(),
                reason: js_error_message(&error),
            }
        })?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use uptime_core::{
        ElapsedBreakdown,
        Locale,
    };

    use super::*;

    #[derive(Debug, Default)]
    pub struct FakeElement {
        pub text_content: RefCell<Option<String>>,
        pub title: RefCell<Option<String>>,
    }

    impl UptimeTarget for FakeElement {
        fn show(&self, text: &UptimeText) {
            *self.text_content.borrow_mut() = Some(text.short.clone());
            *self.title.borrow_mut() = Some(text.detailed.clone());
        }
    }

    fn text(minutes: u64) -> UptimeText {
        UptimeText::new(
            Locale::Spanish,
            &ElapsedBreakdown {
                minutes,
                ..ElapsedBreakdown::ZERO
            },
        )
    }

    #[test]
    fn it_writes_text_and_title_to_every_target() {
        let elements = [FakeElement::default(), FakeElement::default()];
        render_all(&elements, &text(5));

        for element in &elements {
            assert_eq!(element.text_content.borrow().as_deref(), Some("0h 05m"));
            assert_eq!(element.title.borrow().as_deref(), Some("5 minutos"));
        }
    }

    #[test]
    fn it_renders_identically_twice() {
        let element = FakeElement::default();

        render_all([&element], &text(1));
        let first = (
            element.text_content.borrow().clone(),
            element.title.borrow().clone(),
        );

        render_all([&element], &text(1));
        let second = (
            element.text_content.borrow().clone(),
            element.title.borrow().clone(),
        );

        assert_eq!(first, second);
        assert_eq!(second.1.as_deref(), Some("1 minuto"));
    }

    #[test]
    fn it_does_nothing_without_targets() {
        let elements: Vec<FakeElement> = vec![];
        render_all(&elements, &text(5));

        let targets = Targets::Snapshot(vec![]);
        assert!(targets.is_inert());
        assert!(targets.render(&text(5)).is_ok());
    }
}
