use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::prefs::PageSize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressMode {
    /// Enable progress UI when stderr is a TTY.
    Auto,
    /// Always enable progress UI (even when piped).
    Always,
    /// Never show progress UI.
    Never,
}

/// Render one page of a paginated blog index, remembering the reader's page
/// and page size between runs.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Posts document (`{"posts": [...]}`): an `http(s)://` URL or a local path.
    #[arg(long, default_value = "blog-posts.json")]
    pub source: String,

    /// HTML page containing the `blog-posts-container`, `pagination-nav` and
    /// `posts-per-page` elements. Defaults to the built-in page.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Where to write the rendered page.
    #[arg(long, default_value = "index.html")]
    pub out: PathBuf,

    /// Directory holding saved preferences, one file per origin.
    #[arg(long, default_value = ".blog-paginate")]
    pub state_dir: PathBuf,

    /// Preference scope. Defaults to the origin of `--source`.
    #[arg(long)]
    pub origin: Option<String>,

    /// Select a page size (a positive number or `all`); returns to page 1.
    #[arg(long)]
    pub page_size: Option<PageSize>,

    /// Go to this page, after any `--page-size` change.
    #[arg(long)]
    pub page: Option<usize>,

    /// Switch the colour theme.
    #[arg(long)]
    pub theme: Option<String>,

    /// HTTP User-Agent used when `--source` is a URL.
    #[arg(long, default_value = "blog-paginate/0.1")]
    pub user_agent: String,

    /// Progress display: `auto`, `always`, or `never`.
    #[arg(long, value_enum, default_value = "auto")]
    pub progress: ProgressMode,
}
