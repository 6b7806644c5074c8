//! Social share links
//!
//! Each platform is a fixed URL template; the post title and URL are
//! percent-encoded the way JavaScript's `encodeURIComponent` does it.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Share link errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    /// The platform name is not one of the supported ones
    #[error("Unknown share platform: {0} (expected facebook, twitter or linkedin)")]
    UnknownPlatform(String),
}

/// Supported share targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Facebook,
    Twitter,
    LinkedIn,
}

impl Platform {
    pub const ALL: [Self; 3] = [Self::Facebook, Self::Twitter, Self::LinkedIn];

    /// Lowercase identifier, also the CSS class of the share button
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::LinkedIn => "linkedin",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::LinkedIn => "LinkedIn",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = ShareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "facebook" => Ok(Self::Facebook),
            "twitter" | "x" => Ok(Self::Twitter),
            "linkedin" => Ok(Self::LinkedIn),
            other => Err(ShareError::UnknownPlatform(other.to_string())),
        }
    }
}

/// Percent-encode like `encodeURIComponent`
///
/// Leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )` as is and encodes every other
/// byte of the UTF-8 representation as `%XX`.
#[must_use]
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(char::from(byte)),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Page URL of a post: the site URL with the post id as fragment
///
/// Any existing fragment on the site URL is replaced.
#[must_use]
pub fn post_url(site_url: &str, post_id: &str) -> String {
    let base = site_url.split('#').next().unwrap_or_default();
    format!("{base}#{post_id}")
}

/// Build the share URL for one platform
#[must_use]
pub fn share_url(platform: Platform, title: &str, url: &str) -> String {
    let url = encode_uri_component(url);
    match platform {
        Platform::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
        Platform::Twitter => format!(
            "https://twitter.com/intent/tweet?text={}&url={url}",
            encode_uri_component(title)
        ),
        Platform::LinkedIn => format!("https://www.linkedin.com/sharing/share-offsite/?url={url}"),
    }
}

/// Build a share URL from a platform name
///
/// # Errors
///
/// Returns `ShareError::UnknownPlatform` for unsupported platform names.
pub fn share_url_for(platform: &str, title: &str, url: &str) -> Result<String, ShareError> {
    Ok(share_url(platform.parse()?, title, url))
}
