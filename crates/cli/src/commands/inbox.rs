//! Messages, subscribers and stats commands.

use std::path::Path;

use possystem_core::{ContactMessage, DashboardStats};
use possystem_site::backend::{BackendClient, BackendError};
use possystem_site::export::subscribers_csv;
use secrecy::SecretString;

/// One tab-separated line per message: date, sender, subject.
fn message_line(message: &ContactMessage) -> String {
    let date = message
        .created()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{date}\t{} <{}>\t{}",
        message.name, message.email, message.subject
    )
}

/// Print contact messages.
///
/// # Errors
///
/// Returns an error if the token is rejected or the backend is unreachable.
#[allow(clippy::print_stdout)]
pub async fn list_messages(
    client: &BackendClient,
    token: &SecretString,
) -> Result<(), BackendError> {
    let messages = client.list_messages(token).await?;
    tracing::info!(count = messages.len(), "Fetched messages");

    for message in &messages {
        println!("{}", message_line(message));
    }
    Ok(())
}

/// Export subscribers as CSV to `output`, or stdout when `None`.
///
/// # Errors
///
/// Returns an error if the backend call fails or the file cannot be written.
#[allow(clippy::print_stdout)]
pub async fn export_subscribers(
    client: &BackendClient,
    token: &SecretString,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let subscribers = client.list_subscribers(token).await?;
    let csv = subscribers_csv(&subscribers);

    match output {
        Some(path) => {
            tokio::fs::write(path, &csv).await?;
            tracing::info!(
                count = subscribers.len(),
                path = %path.display(),
                "Subscribers exported"
            );
        }
        None => println!("{csv}"),
    }
    Ok(())
}

/// Print the dashboard counts.
///
/// The three lists are fetched concurrently; any failure fails the command.
///
/// # Errors
///
/// Returns an error if any of the three backend calls fails.
#[allow(clippy::print_stdout)]
pub async fn stats(client: &BackendClient, token: &SecretString) -> Result<(), BackendError> {
    let (messages, subscribers, posts) = tokio::try_join!(
        client.list_messages(token),
        client.list_subscribers(token),
        client.list_posts_as(token),
    )?;

    let stats = DashboardStats {
        messages: messages.len(),
        subscribers: subscribers.len(),
        blog_posts: posts.len(),
    };

    println!("Messages:    {}", stats.messages);
    println!("Subscribers: {}", stats.subscribers);
    println!("Blog posts:  {}", stats.blog_posts);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_line() {
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Demo".to_string(),
            created_at: Some("2024-01-05T14:03:00Z".to_string()),
            ..ContactMessage::default()
        };
        assert_eq!(
            message_line(&message),
            "2024-01-05 14:03\tAda <ada@example.com>\tDemo"
        );
    }
}
