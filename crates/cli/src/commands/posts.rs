//! Blog post commands.

use possystem_core::BlogPost;
use possystem_site::backend::{BackendClient, BackendError};

/// One tab-separated line per post: id, status, date, category, title.
fn post_line(post: &BlogPost) -> String {
    let status = if post.is_published() { "published" } else { "draft" };
    let date = post
        .created()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}\t{status}\t{date}\t{}\t{}",
        post.id,
        post.category_or_default(),
        post.title
    )
}

/// Print every post the backend returns, drafts included.
///
/// # Errors
///
/// Returns an error if the backend cannot be reached or answers with a failure.
#[allow(clippy::print_stdout)]
pub async fn list(client: &BackendClient) -> Result<(), BackendError> {
    let posts = client.list_posts().await?;
    tracing::info!(count = posts.len(), "Fetched blog posts");

    for post in &posts {
        println!("{}", post_line(post));
    }
    Ok(())
}
