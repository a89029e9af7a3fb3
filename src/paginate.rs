//! Pure page arithmetic over the post list. Nothing here clamps the page
//! index: an out-of-range page yields an empty slice.

use std::fmt;

use crate::post::PostSummary;
use crate::prefs::PageSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Page(usize),
    Ellipsis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {}-{} of {} posts",
            self.start, self.end, self.total
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub total_pages: usize,
    pub current_page: usize,
    pub window: Vec<NavItem>,
    pub range: PageRange,
}

#[derive(Debug)]
pub struct PageView<'a> {
    pub visible: &'a [PostSummary],
    pub total_pages: Option<usize>,
    /// `None` when navigation is suppressed: "show all", or a single page.
    pub nav: Option<Navigation>,
}

pub fn paginate(posts: &[PostSummary], page_size: PageSize, current_page: usize) -> PageView<'_> {
    let visible = visible_slice(posts, page_size, current_page);
    let PageSize::Count(per_page) = page_size else {
        return PageView {
            visible,
            total_pages: None,
            nav: None,
        };
    };

    let total = total_pages(posts.len(), per_page.get());
    let nav = (total > 1).then(|| Navigation {
        total_pages: total,
        current_page,
        window: navigation_window(total, current_page),
        range: page_range(posts.len(), per_page.get(), current_page),
    });

    PageView {
        visible,
        total_pages: Some(total),
        nav,
    }
}

pub fn visible_slice(posts: &[PostSummary], page_size: PageSize, current_page: usize) -> &[PostSummary] {
    let per_page = match page_size {
        PageSize::All => return posts,
        PageSize::Count(n) => n.get(),
    };
    let Some(skipped_pages) = current_page.checked_sub(1) else {
        return &[];
    };
    let start = skipped_pages.saturating_mul(per_page);
    if start >= posts.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(posts.len());
    &posts[start..end]
}

pub fn total_pages(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page.max(1))
}

/// Page 1, the last page, and the pages adjacent to `current_page`, with one
/// ellipsis standing in for each skipped run. Empty when there is at most one page.
pub fn navigation_window(total_pages: usize, current_page: usize) -> Vec<NavItem> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let mut window = Vec::new();
    for i in 1..=total_pages {
        let near_current = i + 1 >= current_page && i <= current_page.saturating_add(1);
        if i == 1 || i == total_pages || near_current {
            window.push(NavItem::Page(i));
        } else if i + 2 == current_page || i == current_page.saturating_add(2) {
            window.push(NavItem::Ellipsis);
        }
    }
    window
}

pub fn page_range(len: usize, per_page: usize, current_page: usize) -> PageRange {
    PageRange {
        start: current_page
            .saturating_sub(1)
            .saturating_mul(per_page)
            .saturating_add(1),
        end: current_page.saturating_mul(per_page).min(len),
        total: len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::NavItem::{Ellipsis, Page};

    fn posts(n: usize) -> Vec<PostSummary> {
        (0..n)
            .map(|i| PostSummary {
                title: format!("Post {i}"),
                date: "January 1, 2025".to_string(),
                excerpt: format!("Excerpt {i}"),
                slug: format!("post-{i}"),
            })
            .collect()
    }

    fn size(n: usize) -> PageSize {
        PageSize::per_page(n).unwrap()
    }

    #[test]
    fn pages_partition_the_list_in_order() {
        for len in [1, 2, 9, 10, 11, 25, 100] {
            let list = posts(len);
            for per_page in [1, 3, 7, 10, 200] {
                let total = total_pages(len, per_page);
                let mut joined = Vec::new();
                for page in 1..=total {
                    let slice = visible_slice(&list, size(per_page), page);
                    assert!(!slice.is_empty());
                    joined.extend_from_slice(slice);
                }
                assert_eq!(joined, list, "len={len} per_page={per_page}");
            }
        }
    }

    #[test]
    fn show_all_ignores_page() {
        let list = posts(13);
        for page in [0, 1, 5, 99] {
            assert_eq!(visible_slice(&list, PageSize::All, page), &list[..]);
        }
        let view = paginate(&list, PageSize::All, 4);
        assert!(view.nav.is_none());
        assert_eq!(view.total_pages, None);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let list = posts(25);
        assert!(visible_slice(&list, size(10), 4).is_empty());
        assert!(visible_slice(&list, size(10), 0).is_empty());
        assert!(visible_slice(&list, size(10), usize::MAX).is_empty());
    }

    #[test]
    fn first_of_three_pages() {
        let list = posts(25);
        let view = paginate(&list, size(10), 1);
        assert_eq!(view.visible, &list[0..10]);
        assert_eq!(view.total_pages, Some(3));
        let nav = view.nav.unwrap();
        assert_eq!(nav.range.to_string(), "Showing 1-10 of 25 posts");
        assert_eq!(nav.window, vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn last_of_three_pages() {
        let list = posts(25);
        let view = paginate(&list, size(10), 3);
        assert_eq!(view.visible, &list[20..25]);
        assert_eq!(view.nav.unwrap().range.to_string(), "Showing 21-25 of 25 posts");
    }

    #[test]
    fn single_page_has_no_navigation() {
        let list = posts(10);
        assert!(paginate(&list, size(10), 1).nav.is_none());
        assert!(paginate(&[], size(10), 1).nav.is_none());
        assert!(navigation_window(1, 1).is_empty());
        assert!(navigation_window(0, 1).is_empty());
    }

    #[test]
    fn window_with_ellipses() {
        assert_eq!(
            navigation_window(10, 5),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            navigation_window(10, 1),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            navigation_window(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
        // Gap of exactly one page: the ellipsis replaces it.
        assert_eq!(
            navigation_window(5, 4),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn no_ellipsis_without_gap() {
        assert_eq!(
            navigation_window(4, 2),
            vec![Page(1), Page(2), Page(3), Page(4)]
        );
        assert_eq!(navigation_window(2, 1), vec![Page(1), Page(2)]);
    }

    #[test]
    fn window_keeps_edges_and_centre() {
        for total in 1..=12 {
            for current in 1..=total {
                let window = navigation_window(total, current);
                if total <= 1 {
                    assert!(window.is_empty());
                    continue;
                }
                assert_eq!(window.first(), Some(&Page(1)));
                assert_eq!(window.last(), Some(&Page(total)));
                let lo = current.saturating_sub(1).max(1);
                let hi = (current + 1).min(total);
                for p in lo..=hi {
                    assert!(window.contains(&Page(p)), "total={total} current={current}");
                }
                let ellipses = window.iter().filter(|i| **i == Ellipsis).count();
                assert!(ellipses <= 2);
            }
        }
    }
}
