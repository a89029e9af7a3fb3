mod builtin;
mod cli;
pub mod controller;
pub mod document;
pub mod error;
mod fetcher;
pub mod html;
pub mod paginate;
pub mod post;
pub mod prefs;
mod progress;
pub mod repository;
pub mod store;
pub mod theme;

use std::path::Path;

use anyhow::Context as _;
use cli::Args;
use controller::Controller;
use document::HtmlDocument;
use repository::{PostRepository, PostSource};
use store::FileStore;

pub use cli::ProgressMode;
pub use cli::Args as CliArgs;
pub use fetcher::Fetcher;

const DEFAULT_TITLE: &str = "Blog";

pub async fn run(args: Args) -> anyhow::Result<()> {
    use std::io::IsTerminal as _;

    let progress_enabled = match args.progress {
        ProgressMode::Always => true,
        ProgressMode::Never => false,
        ProgressMode::Auto => std::io::stderr().is_terminal(),
    };
    let progress = progress::Progress::new(progress_enabled);

    let source = PostSource::parse(&args.source);
    let origin = args.origin.clone().unwrap_or_else(|| source.origin());

    progress.set_stage("loading preferences");
    let store = FileStore::for_origin(&args.state_dir, &origin);
    tracing::debug!(%origin, path = %store.path().display(), "opened preference store");

    let shell = match &args.template {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?,
        None => html::build_shell(DEFAULT_TITLE),
    };

    let fetcher = Fetcher::new(&args.user_agent)?;
    let repository = PostRepository::new(source, fetcher);
    let mut controller = Controller::new(store, HtmlDocument::parse(&shell));

    progress.set_stage("fetching posts");
    controller.start(&repository).await;

    progress.set_stage("rendering");
    if let Some(page_size) = args.page_size {
        controller.change_page_size(page_size);
    }
    if let Some(page) = args.page {
        controller.go_to_page(page);
    }
    if let Some(theme) = &args.theme {
        controller.set_theme(theme);
    }

    progress.set_stage("writing output");
    let (_store, document) = controller.into_parts();
    write_output(&args.out, &document.to_html()?)?;

    progress.finish();
    Ok(())
}

fn write_output(path: &Path, html: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    std::fs::write(path, html).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
