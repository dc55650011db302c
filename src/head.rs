//! Document-head metadata for the landing page
//!
//! Supplies the fixed title, description, social-card, and icon values the
//! rendering layer places into the document head. HTML assembly itself is
//! owned by the web client; this module only provides the values and their
//! order.
//!
//! Invariant: every value here stays in English regardless of the user's
//! selected [`Language`](crate::config::Language). Head attributes are read
//! by crawlers before any localization runs, so a localization layer must
//! never rewrite them.

use serde::Serialize;

const TITLE: &str = "AgentRWKV";
const DESCRIPTION: &str = "Assemble, configure, and deploy autonomous AI Agents in your browser.";
const SOCIAL_HANDLE: &str = "@AgentRWKV";
const SITE_URL: &str = "https://agentrwkv.ai-creator.net/";
const CARD_IMAGE_URL: &str = "https://agentrwkv.ai-creator.net/banner.png";
const CARD_WIDTH: u32 = 1280;
const CARD_HEIGHT: u32 = 640;
const SITE_VERIFICATION_TOKEN: &str = "sG4QDkC8g2oxKSopgJdIe2hQ_SaJDaEaBjwCXZNkNWA";
const ICON_PATH: &str = "/favicon.ico";

const TWITTER_CARD_TYPE: &str = "summary_large_image";
const TWITTER_TITLE: &str = "AgentRWKV 🤖";
const OG_TITLE: &str = "AgentRWKV: Autonomous AI in your browser 🤖";
const OG_TYPE: &str = "website";

/// Static metadata describing the page to browsers, search engines, and
/// social-sharing crawlers
///
/// Every field is a compile-time literal; nothing varies by route, locale,
/// or user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub social_handle: &'static str,
    pub card_image_url: &'static str,
    pub card_width: u32,
    pub card_height: u32,
    pub site_verification_token: &'static str,
    pub icon_path: &'static str,
}

/// One element the document-head composition layer accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum HeadElement {
    Title { text: String },
    Meta { name: String, content: String },
    MetaProperty { property: String, content: String },
    Link { rel: String, href: String },
}

impl PageMetadata {
    /// Produce the page metadata; pure and deterministic
    pub const fn new() -> Self {
        Self {
            title: TITLE,
            description: DESCRIPTION,
            social_handle: SOCIAL_HANDLE,
            card_image_url: CARD_IMAGE_URL,
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            site_verification_token: SITE_VERIFICATION_TOKEN,
            icon_path: ICON_PATH,
        }
    }

    /// Render the metadata as the ordered element list for the document head
    pub fn head_elements(&self) -> Vec<HeadElement> {
        let meta = |name: &str, content: &str| HeadElement::Meta {
            name: name.to_string(),
            content: content.to_string(),
        };
        let property = |name: &str, content: &str| HeadElement::MetaProperty {
            property: name.to_string(),
            content: content.to_string(),
        };
        vec![
            HeadElement::Title {
                text: self.title.to_string(),
            },
            meta("description", self.description),
            meta("twitter:site", self.social_handle),
            meta("twitter:card", TWITTER_CARD_TYPE),
            meta("twitter:title", TWITTER_TITLE),
            meta("twitter:description", self.description),
            meta("twitter:image", self.card_image_url),
            meta("twitter:image:width", &self.card_width.to_string()),
            meta("twitter:image:height", &self.card_height.to_string()),
            property("og:title", OG_TITLE),
            property("og:description", self.description),
            property("og:url", SITE_URL),
            property("og:image", self.card_image_url),
            property("og:image:width", &self.card_width.to_string()),
            property("og:image:height", &self.card_height.to_string()),
            property("og:type", OG_TYPE),
            meta("google-site-verification", self.site_verification_token),
            HeadElement::Link {
                rel: "icon".to_string(),
                href: self.icon_path.to_string(),
            },
        ]
    }
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self::new()
    }
}
