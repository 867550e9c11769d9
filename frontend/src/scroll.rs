use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::config;

/// Where anchors are looked up and scrolled to. The browser document in
/// production, a recorder in tests.
pub trait ScrollHost {
    type Target;

    fn find_anchor(&self, id: &str) -> Option<Self::Target>;

    fn scroll_smoothly(&self, target: &Self::Target);
}

pub struct DocumentScroll;

impl ScrollHost for DocumentScroll {
    type Target = Element;

    fn find_anchor(&self, id: &str) -> Option<Element> {
        window()?.document()?.get_element_by_id(id)
    }

    fn scroll_smoothly(&self, target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Requests one smooth scroll to `id`. Returns false, doing nothing, when
/// the anchor is not in the document.
pub fn scroll_to_anchor<H: ScrollHost>(host: &H, id: &str) -> bool {
    match host.find_anchor(id) {
        Some(target) => {
            log::debug!("scrolling to #{}", id);
            host.scroll_smoothly(&target);
            true
        }
        None => {
            log::debug!("anchor #{} not found, not scrolling", id);
            false
        }
    }
}

pub fn scroll_to_offer() {
    scroll_to_anchor(&DocumentScroll, config::OFFER_ANCHOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingHost {
        anchors: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl RecordingHost {
        fn with(anchors: &[&'static str]) -> Self {
            Self {
                anchors: anchors.to_vec(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollHost for RecordingHost {
        type Target = String;

        fn find_anchor(&self, id: &str) -> Option<String> {
            self.anchors.iter().find(|a| **a == id).map(|a| a.to_string())
        }

        fn scroll_smoothly(&self, target: &String) {
            self.scrolled.borrow_mut().push(target.clone());
        }
    }

    #[test]
    fn one_request_when_anchor_exists() {
        let host = RecordingHost::with(&["hero", config::OFFER_ANCHOR]);
        assert!(scroll_to_anchor(&host, config::OFFER_ANCHOR));
        assert_eq!(*host.scrolled.borrow(), vec![config::OFFER_ANCHOR.to_string()]);
    }

    #[test]
    fn missing_anchor_is_a_no_op() {
        let host = RecordingHost::with(&["hero"]);
        assert!(!scroll_to_anchor(&host, config::OFFER_ANCHOR));
        assert!(host.scrolled.borrow().is_empty());
    }
}
