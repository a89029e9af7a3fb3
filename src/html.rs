use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::builtin;
use crate::document::{PAGE_SIZE_CONTROL, PAGINATION_NAV, POSTS_CONTAINER};
use crate::paginate::{NavItem, Navigation};
use crate::post::PostSummary;

pub const LOAD_ERROR_MESSAGE: &str = "Sorry, there was an error loading the blog posts.";

/// Choices offered by the built-in page-size control.
pub const PAGE_SIZE_OPTIONS: [&str; 5] = ["5", "10", "20", "50", "all"];

pub fn post_href(slug: &str) -> String {
    format!("posts/{slug}.html")
}

pub fn render_posts(slice: &[PostSummary]) -> Markup {
    html! {
        @for post in slice {
            (render_post(post))
        }
    }
}

fn render_post(post: &PostSummary) -> Markup {
    html! {
        div class="blog-post" {
            h3 { (post.title) }
            p class="blog-date" { (post.date) }
            p { (post.excerpt) }
            a href=(post_href(&post.slug)) class="read-more" { "Read more →" }
        }
    }
}

/// Previous/Next, one control per window entry, and the range line. Renders
/// nothing when navigation is suppressed.
pub fn render_navigation(nav: Option<&Navigation>) -> Markup {
    let Some(nav) = nav else {
        return html! {};
    };
    let current = nav.current_page;

    html! {
        div class="pagination" {
            @if current > 1 {
                button type="button" class="page-btn" data-page=(current - 1) { "← Previous" }
            } @else {
                button type="button" class="page-btn" disabled { "← Previous" }
            }
            @for item in &nav.window {
                @match item {
                    NavItem::Ellipsis => {
                        span class="page-ellipsis" { "..." }
                    }
                    NavItem::Page(n) => {
                        @if *n == current {
                            button type="button" class="page-btn active" { (n) }
                        } @else {
                            button type="button" class="page-btn" data-page=(n) { (n) }
                        }
                    }
                }
            }
            @if current < nav.total_pages {
                button type="button" class="page-btn" data-page=(current + 1) { "Next →" }
            } @else {
                button type="button" class="page-btn" disabled { "Next →" }
            }
        }
        p class="page-info" { (nav.range.to_string()) }
    }
}

pub fn render_load_error() -> Markup {
    html! {
        p { (LOAD_ERROR_MESSAGE) }
    }
}

/// Page shell carrying the three mount points, the theme switcher and the
/// bundled stylesheet. Mount points start empty.
pub fn build_shell(title: &str) -> String {
    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" data-theme=(crate::theme::DEFAULT_THEME) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(builtin::BUILTIN_CSS)) }
            }
            body {
                header class="site-header" {
                    div class="container site-header-inner" {
                        h1 class="site-title" { (title) }
                        div class="theme-switcher" {
                            @for theme in builtin::THEMES {
                                button type="button" class="theme-btn" data-theme=(theme) { (theme) }
                            }
                        }
                    }
                }
                main class="container" {
                    div class="blog-controls" {
                        label for=(PAGE_SIZE_CONTROL) { "Posts per page: " }
                        select id=(PAGE_SIZE_CONTROL) {
                            @for value in PAGE_SIZE_OPTIONS {
                                option value=(value) { (page_size_label(value)) }
                            }
                        }
                    }
                    div id=(POSTS_CONTAINER) {}
                    nav id=(PAGINATION_NAV) {}
                }
            }
        }
    };
    markup.into_string()
}

fn page_size_label(value: &str) -> &str {
    if value == "all" { "Show all" } else { value }
}
