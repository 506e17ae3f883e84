use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::domain::{common::ImageConfig, recipe::ports::ImageResolver};

pub const DEFAULT_IMAGE_SEARCH_URL: &str = "https://source.unsplash.com/800x600/?{query}";
pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=800";
pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 5;

/// Resolves an image by requesting a search URL and keeping the URL it redirects to.
#[derive(Debug, Clone)]
pub struct HttpImageResolver {
    search_url: String,
    placeholder_url: String,
    client: Client,
}

impl HttpImageResolver {
    pub fn new(config: &ImageConfig) -> Self {
        let timeout = Duration::from_secs(config.timeout_secs.max(1));
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to a default image HTTP client: {}", e);
                Client::new()
            });

        let placeholder_url = match config.placeholder_url.trim() {
            "" => {
                warn!("Image placeholder URL is blank, using the default placeholder");
                DEFAULT_PLACEHOLDER_IMAGE_URL.to_string()
            }
            url => url.to_string(),
        };

        Self {
            search_url: config.search_url.clone(),
            placeholder_url,
            client,
        }
    }

    pub fn placeholder_url(&self) -> &str {
        &self.placeholder_url
    }

    fn search_url_for(&self, query: &str) -> String {
        self.search_url
            .replace("{query}", &urlencoding::encode(query.trim()))
    }
}

impl ImageResolver for HttpImageResolver {
    async fn resolve(&self, query: String) -> String {
        let url = self.search_url_for(&query);

        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                let resolved = response.url().to_string();
                debug!(query, resolved = %resolved, "Resolved recipe image");
                resolved
            }
            Ok(response) => {
                warn!(query, status = %response.status(), "Image search returned an error status, using placeholder");
                self.placeholder_url.clone()
            }
            Err(e) => {
                warn!(query, "Image search failed, using placeholder: {}", e);
                self.placeholder_url.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    fn resolver(search_url: String, timeout_secs: u64) -> HttpImageResolver {
        HttpImageResolver::new(&ImageConfig {
            search_url,
            placeholder_url: DEFAULT_PLACEHOLDER_IMAGE_URL.to_string(),
            timeout_secs,
        })
    }

    /// Accepts one connection and answers with `status` after `delay`.
    async fn one_shot_server(status: &'static str, delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buffer = [0u8; 1024];
            let _ = socket.read(&mut buffer).await;
            tokio::time::sleep(delay).await;
            let response =
                format!("HTTP/1.1 {status}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            let _ = socket.write_all(response.as_bytes()).await;
        });

        format!("http://{address}/search?q={{query}}")
    }

    #[test]
    fn query_is_url_encoded_into_the_template() {
        let resolver = resolver("https://images.test/?q={query}".to_string(), 5);
        assert_eq!(
            resolver.search_url_for(" Veggie Rice Bowl "),
            "https://images.test/?q=Veggie%20Rice%20Bowl"
        );
    }

    #[tokio::test]
    async fn blank_placeholder_falls_back_to_the_default() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let resolver = HttpImageResolver::new(&ImageConfig {
            search_url: format!("http://{address}/?q={{query}}"),
            placeholder_url: "   ".to_string(),
            timeout_secs: 5,
        });

        assert_eq!(resolver.placeholder_url(), DEFAULT_PLACEHOLDER_IMAGE_URL);
        assert_eq!(
            resolver.resolve("soup".to_string()).await,
            DEFAULT_PLACEHOLDER_IMAGE_URL
        );
    }

    #[tokio::test]
    async fn success_returns_the_requested_url() {
        let template = one_shot_server("200 OK", Duration::ZERO).await;
        let resolver = resolver(template.clone(), 5);

        let url = resolver.resolve("rice bowl".to_string()).await;
        assert_eq!(url, template.replace("{query}", "rice%20bowl"));
    }

    #[tokio::test]
    async fn connection_refused_returns_placeholder() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let resolver = resolver(format!("http://{address}/?q={{query}}"), 5);
        assert_eq!(
            resolver.resolve("soup".to_string()).await,
            DEFAULT_PLACEHOLDER_IMAGE_URL
        );
    }

    #[tokio::test]
    async fn timeout_returns_placeholder() {
        let template = one_shot_server("200 OK", Duration::from_secs(3)).await;
        let resolver = resolver(template, 1);

        assert_eq!(
            resolver.resolve("soup".to_string()).await,
            DEFAULT_PLACEHOLDER_IMAGE_URL
        );
    }

    #[tokio::test]
    async fn error_status_returns_placeholder() {
        let template = one_shot_server("404 Not Found", Duration::ZERO).await;
        let resolver = resolver(template, 5);

        let url = resolver.resolve("soup".to_string()).await;
        assert!(!url.is_empty());
        assert_eq!(url, DEFAULT_PLACEHOLDER_IMAGE_URL);
    }
}
