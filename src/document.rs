use anyhow::Context as _;
use kuchiki::traits::TendrilSink as _;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

pub const POSTS_CONTAINER: &str = "blog-posts-container";
pub const PAGINATION_NAV: &str = "pagination-nav";
pub const PAGE_SIZE_CONTROL: &str = "posts-per-page";

/// The parts of a live document the controller writes to. Elements are
/// addressed by id; a method returning `false` means no such element exists.
pub trait Document {
    /// Replaces the element's children with `markup`.
    fn set_inner_html(&mut self, id: &str, markup: &str) -> bool;

    /// Selects `value` on a `<select>`, or sets the `value` attribute of any
    /// other element.
    fn set_value(&mut self, id: &str, value: &str) -> bool;

    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Adds `class` to every element matching `selector` whose `attr` equals
    /// `value`, and removes it from the rest. Returns how many elements matched.
    fn toggle_class_by_attr(&mut self, selector: &str, class: &str, attr: &str, value: &str) -> usize;

    /// Smoothly scrolls the element's top edge into view.
    fn scroll_into_view(&mut self, id: &str) -> bool;
}

/// A parsed HTML page. Scrolling has no viewport to act on, so requests are
/// recorded instead.
pub struct HtmlDocument {
    root: NodeRef,
    scroll_requests: Vec<String>,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchiki::parse_html().one(html),
            scroll_requests: Vec::new(),
        }
    }

    pub fn to_html(&self) -> anyhow::Result<String> {
        let mut out = Vec::new();
        self.root.serialize(&mut out).context("serialize document")?;
        String::from_utf8(out).context("document html not utf-8")
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        let element = self.element_by_id(id)?;
        let mut out = Vec::new();
        for child in element.as_node().children() {
            child.serialize(&mut out).ok()?;
        }
        String::from_utf8(out).ok()
    }

    pub fn scroll_requests(&self) -> &[String] {
        &self.scroll_requests
    }

    fn element_by_id(&self, id: &str) -> Option<NodeDataRef<ElementData>> {
        self.root.select_first(&format!("#{id}")).ok()
    }
}

impl Document for HtmlDocument {
    fn set_inner_html(&mut self, id: &str, markup: &str) -> bool {
        let Some(element) = self.element_by_id(id) else {
            return false;
        };
        let node = element.as_node();
        for child in node.children().collect::<Vec<_>>() {
            child.detach();
        }

        // Parse as a full page and move the body's children across.
        let fragment = kuchiki::parse_html().one(markup);
        if let Ok(body) = fragment.select_first("body") {
            for child in body.as_node().children().collect::<Vec<_>>() {
                node.append(child);
            }
        }
        true
    }

    fn set_value(&mut self, id: &str, value: &str) -> bool {
        let Some(element) = self.element_by_id(id) else {
            return false;
        };

        if element.name.local.as_ref() != "select" {
            element
                .attributes
                .borrow_mut()
                .insert("value", value.to_string());
            return true;
        }

        if let Ok(options) = element.as_node().select("option") {
            for option in options {
                let matches = {
                    let attrs = option.attributes.borrow();
                    match attrs.get("value") {
                        Some(v) => v == value,
                        None => option.text_contents().trim() == value,
                    }
                };
                let mut attrs = option.attributes.borrow_mut();
                if matches {
                    attrs.insert("selected", String::new());
                } else {
                    attrs.remove("selected");
                }
            }
        }
        true
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        match self.root.select_first("html") {
            Ok(html) => {
                html.attributes
                    .borrow_mut()
                    .insert(name, value.to_string());
            }
            Err(()) => tracing::warn!(attribute = name, "document has no root element"),
        }
    }

    fn toggle_class_by_attr(&mut self, selector: &str, class: &str, attr: &str, value: &str) -> usize {
        let Ok(nodes) = self.root.select(selector) else {
            return 0;
        };
        let mut count = 0;
        for node in nodes {
            count += 1;
            let mut attrs = node.attributes.borrow_mut();
            let wanted = attrs.get(attr) == Some(value);
            let mut classes: Vec<String> = attrs
                .get("class")
                .unwrap_or("")
                .split_whitespace()
                .filter(|c| *c != class)
                .map(str::to_string)
                .collect();
            if wanted {
                classes.push(class.to_string());
            }
            attrs.insert("class", classes.join(" "));
        }
        count
    }

    fn scroll_into_view(&mut self, id: &str) -> bool {
        if self.element_by_id(id).is_none() {
            return false;
        }
        self.scroll_requests.push(id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL: &str = r#"<!DOCTYPE html>
<html><head><title>t</title></head><body>
<select id="posts-per-page"><option value="10">10</option><option value="all">Show all</option></select>
<div id="blog-posts-container"><p>old</p></div>
<button class="theme-btn active" data-theme="colorful">c</button>
<button class="theme-btn" data-theme="dark">d</button>
</body></html>"#;

    #[test]
    fn set_inner_html_replaces_content() {
        let mut doc = HtmlDocument::parse(SHELL);
        assert!(doc.set_inner_html(POSTS_CONTAINER, "<div class=\"blog-post\">a</div><div class=\"blog-post\">b</div>"));
        assert_eq!(
            doc.inner_html(POSTS_CONTAINER).as_deref(),
            Some("<div class=\"blog-post\">a</div><div class=\"blog-post\">b</div>")
        );

        assert!(doc.set_inner_html(POSTS_CONTAINER, ""));
        assert_eq!(doc.inner_html(POSTS_CONTAINER).as_deref(), Some(""));
    }

    #[test]
    fn missing_mount_point_is_reported() {
        let mut doc = HtmlDocument::parse(SHELL);
        assert!(!doc.set_inner_html(PAGINATION_NAV, "<p>x</p>"));
        assert!(!doc.scroll_into_view(PAGINATION_NAV));
        assert!(doc.scroll_requests().is_empty());
    }

    #[test]
    fn set_value_selects_option() {
        let mut doc = HtmlDocument::parse(SHELL);
        assert!(doc.set_value(PAGE_SIZE_CONTROL, "all"));
        let html = doc.to_html().unwrap();
        assert!(html.contains("<option selected=\"\" value=\"all\">"));
        assert!(html.contains("<option value=\"10\">"));

        assert!(doc.set_value(PAGE_SIZE_CONTROL, "10"));
        let html = doc.to_html().unwrap();
        assert!(html.contains("<option selected=\"\" value=\"10\">"));
        assert!(html.contains("<option value=\"all\">"));
    }

    #[test]
    fn toggles_active_theme_button() {
        let mut doc = HtmlDocument::parse(SHELL);
        doc.set_root_attribute("data-theme", "dark");
        assert_eq!(doc.toggle_class_by_attr(".theme-btn", "active", "data-theme", "dark"), 2);
        let html = doc.to_html().unwrap();
        assert!(html.contains("<html data-theme=\"dark\">"));
        assert!(html.contains("<button class=\"theme-btn\" data-theme=\"colorful\">"));
        assert!(html.contains("<button class=\"theme-btn active\" data-theme=\"dark\">"));
    }

    #[test]
    fn records_scroll_requests() {
        let mut doc = HtmlDocument::parse(SHELL);
        assert!(doc.scroll_into_view(POSTS_CONTAINER));
        assert_eq!(doc.scroll_requests(), &[POSTS_CONTAINER.to_string()]);
    }
}
