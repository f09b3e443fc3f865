//! `web-sys` adapters for the core element traits.

use stickyheader_core::{FlagTarget, PageLookup};
use web_sys::{Document, Element};

/// A DOM element whose flags are CSS classes.
#[derive(Clone, Debug)]
pub struct DomElement(Element);

impl DomElement {
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &Element {
        &self.0
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.0.class_list().contains(flag)
    }
}

impl FlagTarget for DomElement {
    fn set_flag(&self, flag: &str, on: bool) {
        let classes = self.0.class_list();
        let result = if on {
            classes.add_1(flag)
        } else {
            classes.remove_1(flag)
        };
        if let Err(e) = result {
            log::warn!("Failed to update class {flag:?}: {e:?}");
        }
    }
}

/// Looks elements up with `document.querySelector`.
pub struct DocumentLookup {
    document: Document,
}

impl DocumentLookup {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl PageLookup for DocumentLookup {
    type Element = DomElement;

    fn query(&self, selector: &str) -> Option<DomElement> {
        match self.document.query_selector(selector) {
            Ok(element) => element.map(DomElement::new),
            Err(e) => {
                log::warn!("Invalid selector {selector:?}: {e:?}");
                None
            }
        }
    }
}
