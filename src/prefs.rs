use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParsePageSizeError;
use crate::store::KeyValueStore;

pub const PAGE_SIZE_KEY: &str = "postsPerPage";
pub const CURRENT_PAGE_KEY: &str = "currentPage";

const DEFAULT_PER_PAGE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Count(NonZeroUsize),
    All,
}

impl PageSize {
    pub const DEFAULT: PageSize = PageSize::Count(DEFAULT_PER_PAGE);

    pub fn per_page(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(PageSize::Count)
    }

    /// Lenient form used for stored values: `"all"`, or anything starting with
    /// a positive integer (`"12abc"` reads as 12).
    pub fn coerce(raw: &str) -> Option<Self> {
        if raw == "all" {
            return Some(PageSize::All);
        }
        let n = parse_int_prefix(raw)?;
        usize::try_from(n).ok().and_then(Self::per_page)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Count(n) => write!(f, "{n}"),
            PageSize::All => f.write_str("all"),
        }
    }
}

impl FromStr for PageSize {
    type Err = ParsePageSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(PageSize::All);
        }
        s.parse::<usize>()
            .ok()
            .and_then(PageSize::per_page)
            .ok_or_else(|| ParsePageSizeError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_size: PageSize,
    /// 1-based. Not used for slicing while `page_size` is `All`, but still stored.
    pub current_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_size: PageSize::DEFAULT,
            current_page: 1,
        }
    }
}

/// Typed access to the two pagination preferences.
pub struct PreferenceStore<S> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> PaginationState {
        let defaults = PaginationState::default();

        let page_size = match self.raw_page_size() {
            None => defaults.page_size,
            Some(raw) => PageSize::coerce(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "malformed stored page size; using default");
                defaults.page_size
            }),
        };

        let current_page = match non_empty(self.store.get(CURRENT_PAGE_KEY)) {
            None => defaults.current_page,
            Some(raw) => match parse_int_prefix(&raw).and_then(|n| usize::try_from(n).ok()) {
                Some(n) if n >= 1 => n,
                _ => {
                    tracing::warn!(value = %raw, "malformed stored page index; using default");
                    defaults.current_page
                }
            },
        };

        PaginationState {
            page_size,
            current_page,
        }
    }

    pub fn save(&mut self, state: &PaginationState) {
        self.store.set(PAGE_SIZE_KEY, &state.page_size.to_string());
        self.store
            .set(CURRENT_PAGE_KEY, &state.current_page.to_string());
    }

    /// The stored page-size string exactly as written, if any.
    pub fn raw_page_size(&self) -> Option<String> {
        non_empty(self.store.get(PAGE_SIZE_KEY))
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Reads the leading integer of `raw`, ignoring whatever follows it.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    static LEADING_INT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("leading int regex"));
    let caps = LEADING_INT.captures(raw)?;
    caps.get(1)?.as_str().parse().ok()
}
