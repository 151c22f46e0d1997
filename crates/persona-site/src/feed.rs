//! RSS feed generation.

use chrono::{NaiveDate, NaiveTime};
use rss::{validation::Validate, Channel, ChannelBuilder, GuidBuilder, ItemBuilder};

use crate::index::SiteIndex;

/// Feed covers the newest posts only; the discovery index has the full set.
const FEED_LIMIT: usize = 10;

#[derive(Debug, thiserror::Error)]
#[error("feed generation failed: {0}")]
pub struct FeedError(String);

/// Build the feed XML from the sorted index.
///
/// `lastBuildDate` is the newest item's publication date rather than the
/// wall clock, so rebuilding unchanged input reproduces identical bytes.
pub fn build_feed(
    site_title: &str,
    site_description: &str,
    base_url: &str,
    index: &SiteIndex,
) -> Result<String, FeedError> {
    let items: Vec<_> = index
        .entries()
        .iter()
        .take(FEED_LIMIT)
        .map(|entry| {
            ItemBuilder::default()
                .title(entry.title.clone())
                .link(entry.url.clone())
                .guid(
                    GuidBuilder::default()
                        .permalink(true)
                        .value(entry.url.clone())
                        .build(),
                )
                .description(entry.description.clone())
                .pub_date(rfc2822(entry.date))
                .build()
        })
        .collect();

    let channel: Channel = ChannelBuilder::default()
        .title(site_title)
        .link(base_url)
        .description(site_description)
        .language("en-us".to_string())
        .generator("persona".to_string())
        .last_build_date(index.newest_date().map(rfc2822))
        .items(items)
        .build();

    channel.validate().map_err(|e| FeedError(e.to_string()))?;

    Ok(channel.to_string())
}

/// Midnight UTC of a publication date, RFC 2822 formatted.
fn rfc2822(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN).and_utc().to_rfc2822()
}
