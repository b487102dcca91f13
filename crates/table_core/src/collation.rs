//! Locale-aware text comparison backed by ICU4X collation data.

use std::{cmp::Ordering, fmt};

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollatorError {
    #[error("invalid locale tag '{tag}': {detail}")]
    InvalidLocale { tag: String, detail: String },
    #[error("no collation data for locale '{tag}': {detail}")]
    Unavailable { tag: String, detail: String },
}

/// Compares strings the way a human reader expects alphabetical order:
/// accents and case are secondary and tertiary differences, not byte values.
pub struct TextCollator {
    tag: String,
    collator: Collator,
}

impl TextCollator {
    /// Collation for a BCP-47 tag such as `en`, `sv` or `de-AT`.
    pub fn for_locale(tag: &str) -> Result<Self, CollatorError> {
        let tag = tag.trim();
        let locale: Locale = tag.parse().map_err(|err| CollatorError::InvalidLocale {
            tag: tag.to_string(),
            detail: format!("{err:?}"),
        })?;

        let collator = Collator::try_new(&(&locale).into(), CollatorOptions::new()).map_err(
            |err| CollatorError::Unavailable {
                tag: tag.to_string(),
                detail: format!("{err:?}"),
            },
        )?;

        tracing::debug!(locale = %locale, "collator ready");
        Ok(Self {
            tag: locale.to_string(),
            collator,
        })
    }

    /// CLDR root collation, usable when no locale preference is known.
    pub fn root() -> Result<Self, CollatorError> {
        let collator = Collator::try_new(&Default::default(), CollatorOptions::new()).map_err(
            |err| CollatorError::Unavailable {
                tag: "und".to_string(),
                detail: format!("{err:?}"),
            },
        )?;

        Ok(Self {
            tag: "und".to_string(),
            collator,
        })
    }

    pub fn locale_tag(&self) -> &str {
        &self.tag
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }
}

impl fmt::Debug for TextCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextCollator")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}
