//! DOM implementation of the theme port
//!
//! Writes theme tokens into the document: CSS custom properties on the root
//! element, plus one `<style>` element per font role. Each role's element is
//! addressed by a stable id and overwritten in place, so re-applying a theme
//! (including redundantly, on every category change) never accumulates
//! stylesheet fragments.

use std::sync::{Arc, Mutex};

use leptos::prelude::document;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use trailhead_core::{FontRole, ThemePort, ThemeTokens};

/// Shared handle to whichever theme port the app was started with.
///
/// Components reach the port through this context handle instead of a
/// global, so tests can substitute a fake port that records applications
/// instead of touching a document.
#[derive(Clone)]
pub struct ThemeHandle(pub Arc<dyn ThemePort + Send + Sync>);

impl ThemeHandle {
    pub fn dom() -> Self {
        Self(Arc::new(DomThemePort::new()))
    }
}

/// Theme port backed by the real document. Process-wide singleton state:
/// exactly one active theme at a time, last-writer-wins.
#[derive(Clone)]
pub struct DomThemePort {
    // None until the first apply. The document starts with no theme at
    // all, so the first call must write even when the incoming tokens
    // equal the defaults.
    current: Arc<Mutex<Option<ThemeTokens>>>,
}

impl DomThemePort {
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
        }
    }

    fn root_element(&self) -> Option<HtmlElement> {
        document()
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn write_custom_properties(&self, tokens: &ThemeTokens) {
        let Some(root) = self.root_element() else {
            return;
        };
        let style = root.style();
        for (name, value) in tokens.custom_properties() {
            if let Err(e) = style.set_property(name, &value) {
                leptos::logging::warn!("failed to set {}: {:?}", name, e);
            }
        }
        // Roles the new theme does not assign lose their property, so a
        // category without a display font does not inherit the previous
        // category's.
        for role in FontRole::ALL {
            if !tokens.fonts.contains_key(&role) {
                let _ = style.remove_property(role.css_property());
            }
        }
    }

    fn write_font_rules(&self, tokens: &ThemeTokens) {
        let doc = document();
        let Some(head) = doc.head() else {
            return;
        };

        for (id, rule) in tokens.font_rules() {
            match doc.get_element_by_id(id) {
                Some(existing) => existing.set_text_content(Some(&rule)),
                None => {
                    let Ok(el) = doc.create_element("style") else {
                        continue;
                    };
                    el.set_id(id);
                    el.set_text_content(Some(&rule));
                    if let Err(e) = head.append_child(&el) {
                        leptos::logging::warn!("failed to mount style element {}: {:?}", id, e);
                    }
                }
            }
        }

        // Drop rule elements for roles the new theme does not assign.
        for role in FontRole::ALL {
            if !tokens.fonts.contains_key(&role) {
                if let Some(el) = doc.get_element_by_id(role.style_element_id()) {
                    el.remove();
                }
            }
        }
    }
}

impl Default for DomThemePort {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemePort for DomThemePort {
    fn apply(&self, tokens: &ThemeTokens) {
        // Idempotence check: redundant re-application on a same-key route
        // change touches nothing, so nothing can flicker.
        {
            let current = self.current.lock().unwrap_or_else(|e| e.into_inner());
            if !needs_write(current.as_ref(), tokens) {
                return;
            }
        }

        self.write_custom_properties(tokens);
        self.write_font_rules(tokens);
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = Some(tokens.clone());
    }

    fn current(&self) -> ThemeTokens {
        self.current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .unwrap_or_default()
    }

    fn reset(&self) {
        self.apply(&ThemeTokens::default());
    }
}

/// Whether `tokens` differ from what the document already carries. `None`
/// means the document was never themed, which always needs a write.
fn needs_write(current: Option<&ThemeTokens>, tokens: &ThemeTokens) -> bool {
    current != Some(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailhead_core::{CategoryKey, CategoryStyle};

    #[test]
    fn test_cold_port_writes_even_default_tokens() {
        // The fallback style derives tokens equal to the defaults; a port
        // that has never written must still write them.
        let fallback = ThemeTokens::from_style(&CategoryStyle::fallback(CategoryKey::Home));
        assert!(needs_write(None, &fallback));
        assert!(needs_write(None, &ThemeTokens::default()));
    }

    #[test]
    fn test_reapplying_same_tokens_is_a_no_op() {
        let tokens = ThemeTokens::default();
        assert!(!needs_write(Some(&tokens), &tokens));
    }

    #[test]
    fn test_changed_tokens_need_a_write() {
        let before = ThemeTokens::default();
        let after = before.with_primary("#F59E0B");
        assert!(needs_write(Some(&before), &after));
    }
}
