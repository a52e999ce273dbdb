//! Locating and downloading the latest bulletin from the publisher's listing page.

use std::path::Path;
use std::sync::OnceLock;

use reqwest::blocking::{Client, Response};
use scraper::{Html, Selector};
use tracing::{debug, info};
use url::Url;

use crate::atomic::write_atomically;
use crate::config::PipelineConfig;
use crate::error::PraiasError;
use crate::parsing::normalize::collapse_whitespace;

static ANCHOR_SELECTOR: OnceLock<Selector> = OnceLock::new();

/// Blocking HTTP client bound to one listing page.
pub struct BulletinFetcher {
    client: Client,
    listing_url: Url,
    link_text: String,
}

impl BulletinFetcher {
    pub fn new(config: &PipelineConfig) -> Result<Self, PraiasError> {
        let listing_url = Url::parse(&config.listing_url)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(BulletinFetcher {
            client,
            listing_url,
            link_text: config.link_text.clone(),
        })
    }

    /// Fetch the listing page and resolve the first bulletin link on it.
    pub fn latest_bulletin_url(&self) -> Result<Url, PraiasError> {
        info!(url = %self.listing_url, "fetching bulletin listing");
        let html = self.get(&self.listing_url)?.text()?;
        find_bulletin_link(&html, &self.listing_url, &self.link_text)
    }

    /// Stream `url` to `dest`, replacing any previous copy. Returns the byte count.
    pub fn download(&self, url: &Url, dest: &Path) -> Result<u64, PraiasError> {
        info!(url = %url, dest = %dest.display(), "downloading bulletin");
        let mut response = self.get(url)?;
        let bytes = write_atomically(dest, |file| Ok(response.copy_to(file)?))?;
        debug!(bytes, "bulletin downloaded");
        Ok(bytes)
    }

    /// Resolve and download the latest bulletin in one step.
    pub fn fetch_latest(&self, dest: &Path) -> Result<Url, PraiasError> {
        let url = self.latest_bulletin_url()?;
        self.download(&url, dest)?;
        Ok(url)
    }

    fn get(&self, url: &Url) -> Result<Response, PraiasError> {
        let response = self.client.get(url.as_str()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(PraiasError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

/// Find the first `<a href>` whose visible text contains `link_text` and
/// resolve its target against `base_url`.
pub fn find_bulletin_link(
    html: &str,
    base_url: &Url,
    link_text: &str,
) -> Result<Url, PraiasError> {
    let document = Html::parse_document(html);
    let selector = ANCHOR_SELECTOR
        .get_or_init(|| Selector::parse("a[href]").expect("a[href] is a valid CSS selector"));
    let wanted = collapse_whitespace(link_text);

    let href = document
        .select(selector)
        .filter(|a| collapse_whitespace(&a.text().collect::<String>()).contains(&wanted))
        .find_map(|a| a.value().attr("href"))
        .ok_or_else(|| PraiasError::NoBulletinFound {
            url: base_url.to_string(),
        })?;

    let url = base_url.join(href.trim())?;
    debug!(%url, "bulletin link found");
    Ok(url)
}
