use crate::document::{Document, PAGE_SIZE_CONTROL, PAGINATION_NAV, POSTS_CONTAINER};
use crate::error::LoadError;
use crate::html;
use crate::paginate::{paginate, total_pages};
use crate::post::PostSummary;
use crate::prefs::{PageSize, PaginationState, PreferenceStore};
use crate::repository::PostRepository;
use crate::store::KeyValueStore;
use crate::theme;

#[derive(Debug)]
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready(Vec<PostSummary>),
    /// Holds the failure description; the user only ever sees the fixed message.
    Failed(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }
}

/// Owns the session state for one page: the loaded posts, the pagination
/// preferences and the document being rendered into.
///
/// Actions that arrive while the posts are still loading update and persist
/// the state; the first render picks up whatever they left behind. Once
/// loading has failed, pagination actions are ignored.
pub struct Controller<S, D> {
    prefs: PreferenceStore<S>,
    document: D,
    state: PaginationState,
    theme: String,
    load: LoadState,
}

impl<S: KeyValueStore, D: Document> Controller<S, D> {
    pub fn new(store: S, document: D) -> Self {
        Self {
            prefs: PreferenceStore::new(store),
            document,
            state: PaginationState::default(),
            theme: theme::DEFAULT_THEME.to_string(),
            load: LoadState::Uninitialized,
        }
    }

    /// Restores preferences and theme, then enters `Loading`.
    pub fn begin(&mut self) {
        if !matches!(self.load, LoadState::Uninitialized) {
            tracing::warn!(state = ?self.load, "controller already started");
            return;
        }

        self.state = self.prefs.load();
        // Only sync a stored choice; the control already shows the default otherwise.
        if self.prefs.raw_page_size().is_some() {
            let in_use = self.state.page_size.to_string();
            if !self.document.set_value(PAGE_SIZE_CONTROL, &in_use) {
                tracing::warn!(mount = PAGE_SIZE_CONTROL, "mount point missing; skipping");
            }
        }

        self.theme = theme::load_theme(self.prefs.inner());
        theme::apply_theme(&mut self.document, &self.theme);

        tracing::debug!(
            page_size = %self.state.page_size,
            current_page = self.state.current_page,
            theme = %self.theme,
            "restored preferences"
        );
        self.load = LoadState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<Vec<PostSummary>, LoadError>) {
        if !matches!(self.load, LoadState::Loading) {
            tracing::warn!(state = ?self.load, "load result arrived outside of loading; dropped");
            return;
        }

        match result {
            Ok(posts) => {
                tracing::info!(count = posts.len(), "blog posts loaded");
                self.load = LoadState::Ready(posts);
                self.render();
            }
            Err(e) => {
                let detail = format!("{:#}", anyhow::Error::from(e));
                tracing::error!(error = %detail, "error loading blog posts");
                self.load = LoadState::Failed(detail);
                self.render_failure();
            }
        }
    }

    pub async fn start(&mut self, repository: &PostRepository) {
        self.begin();
        let result = repository.fetch_all().await;
        self.finish_load(result);
    }

    /// Page-size control changed: resets to page 1.
    pub fn change_page_size(&mut self, page_size: PageSize) {
        if !self.accepts_actions() {
            return;
        }
        self.state.page_size = page_size;
        self.state.current_page = 1;
        if !self
            .document
            .set_value(PAGE_SIZE_CONTROL, &page_size.to_string())
        {
            tracing::warn!(mount = PAGE_SIZE_CONTROL, "mount point missing; skipping");
        }
        self.prefs.save(&self.state);
        self.render();
    }

    pub fn go_to_page(&mut self, page: usize) {
        if !self.accepts_actions() {
            return;
        }
        self.state.current_page = page;
        self.prefs.save(&self.state);
        self.render();
    }

    /// Theme switcher clicked. Independent of the load state.
    pub fn set_theme(&mut self, name: &str) {
        self.theme = name.to_string();
        theme::apply_theme(&mut self.document, &self.theme);
        theme::save_theme(self.prefs.inner_mut(), &self.theme);
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn store(&self) -> &S {
        self.prefs.inner()
    }

    pub fn into_parts(self) -> (S, D) {
        (self.prefs.into_inner(), self.document)
    }

    fn accepts_actions(&self) -> bool {
        match self.load {
            LoadState::Loading | LoadState::Ready(_) => true,
            LoadState::Uninitialized | LoadState::Failed(_) => {
                tracing::debug!(state = ?self.load, "ignoring pagination action");
                false
            }
        }
    }

    fn render(&mut self) {
        let LoadState::Ready(posts) = &self.load else {
            return;
        };

        if let PageSize::Count(per_page) = self.state.page_size {
            let last = total_pages(posts.len(), per_page.get()).max(1);
            let clamped = self.state.current_page.clamp(1, last);
            if clamped != self.state.current_page {
                tracing::debug!(
                    requested = self.state.current_page,
                    clamped,
                    "page index out of range"
                );
                self.state.current_page = clamped;
                self.prefs.save(&self.state);
            }
        }

        let view = paginate(posts, self.state.page_size, self.state.current_page);
        tracing::debug!(
            visible = view.visible.len(),
            total_pages = ?view.total_pages,
            current_page = self.state.current_page,
            "rendering page"
        );

        let posts_markup = html::render_posts(view.visible).into_string();
        if !self.document.set_inner_html(POSTS_CONTAINER, &posts_markup) {
            tracing::warn!(mount = POSTS_CONTAINER, "mount point missing; skipping");
        }

        let nav_markup = html::render_navigation(view.nav.as_ref()).into_string();
        if !self.document.set_inner_html(PAGINATION_NAV, &nav_markup) {
            tracing::warn!(mount = PAGINATION_NAV, "mount point missing; skipping");
        }

        if self.state.page_size != PageSize::All {
            self.document.scroll_into_view(POSTS_CONTAINER);
        }
    }

    fn render_failure(&mut self) {
        let markup = html::render_load_error().into_string();
        if !self.document.set_inner_html(POSTS_CONTAINER, &markup) {
            tracing::warn!(mount = POSTS_CONTAINER, "mount point missing; skipping");
        }
        if !self.document.set_inner_html(PAGINATION_NAV, "") {
            tracing::warn!(mount = PAGINATION_NAV, "mount point missing; skipping");
        }
    }
}
