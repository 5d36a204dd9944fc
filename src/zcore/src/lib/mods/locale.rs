// This file is part of the zwhoami package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Fluent-based message catalog for user-facing strings.
//!
//! Every utility embeds its `.ftl` resources at compile time and registers
//! them with [`setup_localization`]. Messages are then looked up through the
//! [`translate!`](crate::translate) macro. Unknown ids render as the id
//! itself so a missing string never hides a diagnostic.

use crate::error::UError;

pub use fluent::FluentArgs;
use fluent::{FluentBundle, FluentResource};

use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;
use unic_langid::LanguageIdentifier;

#[derive(Error, Debug)]
pub enum LocalizationError {
    #[error("Parse-locale error: {0}")]
    ParseLocale(String),
    #[error("Resource parse error at '{snippet}': {message}")]
    ParseResource { message: String, snippet: String },
    #[error("Bundle error: {0}")]
    Bundle(String),
    #[error("Missing localization strings: {0}")]
    MissingStrings(String),
}

impl UError for LocalizationError {
    fn code(&self) -> i32 {
        1
    }
}

pub const DEFAULT_LOCALE: &str = "en-US";

/// Strings shared by every utility (usage heading, common errors).
const CORE_EN_US: &str = include_str!("../../../locales/en-US.ftl");

/// An `.ftl` resource compiled into a utility.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedLocale {
    /// Language tag, e.g. `en-US`.
    pub locale: &'static str,
    /// Fluent source text.
    pub source: &'static str,
}

struct Localizer {
    primary_bundle: FluentBundle<FluentResource>,
    fallback_bundle: Option<FluentBundle<FluentResource>>,
}

impl Localizer {
    fn new(primary_bundle: FluentBundle<FluentResource>) -> Self {
        Self {
            primary_bundle,
            fallback_bundle: None,
        }
    }

    fn with_fallback(mut self, fallback_bundle: FluentBundle<FluentResource>) -> Self {
        self.fallback_bundle = Some(fallback_bundle);
        self
    }

    fn format(&self, id: &str, args: Option<&FluentArgs>) -> String {
        if let Some(message) = self.primary_bundle.get_message(id).and_then(|m| m.value()) {
            let mut errs = Vec::new();
            return self
                .primary_bundle
                .format_pattern(message, args, &mut errs)
                .to_string();
        }

        if let Some(ref fallback) = self.fallback_bundle {
            if let Some(message) = fallback.get_message(id).and_then(|m| m.value()) {
                let mut errs = Vec::new();
                return fallback.format_pattern(message, args, &mut errs).to_string();
            }
        }

        id.to_string()
    }
}

thread_local! {
    static LOCALIZER: OnceLock<Localizer> = const { OnceLock::new() };
}

fn default_locale() -> LanguageIdentifier {
    LanguageIdentifier::from_str(DEFAULT_LOCALE).expect("Default locale should always be valid")
}

fn parse_fluent_resource(content: &str) -> Result<FluentResource, LocalizationError> {
    FluentResource::try_new(content.to_string()).map_err(|(_partial_resource, errs)| {
        if let Some(first_err) = errs.into_iter().next() {
            let snippet = first_err
                .slice
                .clone()
                .and_then(|range| content.get(range))
                .unwrap_or("")
                .to_string();
            LocalizationError::ParseResource {
                message: format!("{:?}", first_err.kind),
                snippet,
            }
        } else {
            LocalizationError::ParseResource {
                message: "parse error without details".to_string(),
                snippet: String::new(),
            }
        }
    })
}

fn create_bundle(
    locale: &LanguageIdentifier,
    sources: &[&str],
    util_name: &str,
) -> Result<FluentBundle<FluentResource>, LocalizationError> {
    let mut bundle = FluentBundle::new(vec![locale.clone()]);

    bundle.set_use_isolating(false);

    for source in sources {
        bundle.add_resource_overriding(parse_fluent_resource(source)?);
    }

    if bundle.has_message("common-usage") || bundle.has_message(&format!("{util_name}-about")) {
        Ok(bundle)
    } else {
        Err(LocalizationError::MissingStrings(format!(
            "No localization strings found for {locale} and utility {util_name}"
        )))
    }
}

fn find_embedded<'a>(embedded: &'a [EmbeddedLocale], locale: &LanguageIdentifier) -> Option<&'a str> {
    embedded
        .iter()
        .find(|e| LanguageIdentifier::from_str(e.locale).is_ok_and(|l| &l == locale))
        .map(|e| e.source)
}

fn build_localizer(
    locale: &LanguageIdentifier,
    embedded: &[EmbeddedLocale],
    util_name: &str,
) -> Result<Localizer, LocalizationError> {
    let default_locale = default_locale();

    let mut english_sources = vec![CORE_EN_US];
    english_sources.extend(find_embedded(embedded, &default_locale));
    let english_bundle = create_bundle(&default_locale, &english_sources, util_name)?;

    if locale == &default_locale {
        return Ok(Localizer::new(english_bundle));
    }

    let primary = find_embedded(embedded, locale)
        .and_then(|source| create_bundle(locale, &[source], util_name).ok());
    Ok(match primary {
        Some(primary_bundle) => Localizer::new(primary_bundle).with_fallback(english_bundle),
        None => Localizer::new(english_bundle),
    })
}

/// Turns the value of a locale environment variable (`fr_FR.UTF-8`,
/// `C`, ...) into a language identifier.
fn locale_from_env_value(value: &str) -> Result<LanguageIdentifier, LocalizationError> {
    let locale_str = value.split('.').next().unwrap_or(DEFAULT_LOCALE);
    let locale_str = if locale_str.is_empty() || locale_str == "C" || locale_str == "POSIX" {
        DEFAULT_LOCALE
    } else {
        locale_str
    };

    LanguageIdentifier::from_str(locale_str).map_err(|_| {
        LocalizationError::ParseLocale(format!("Failed to parse locale: {locale_str}"))
    })
}

fn detect_system_locale() -> Result<LanguageIdentifier, LocalizationError> {
    let value = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| DEFAULT_LOCALE.to_string());
    locale_from_env_value(&value)
}

/// Loads the message catalog for `util_name` on the current thread.
///
/// The locale is taken from `LC_ALL`, `LC_MESSAGES` or `LANG`; English is
/// used when the requested locale is not embedded and as a fallback for
/// ids missing from the requested locale.
pub fn setup_localization(
    util_name: &str,
    embedded: &[EmbeddedLocale],
) -> Result<(), LocalizationError> {
    let locale = detect_system_locale().unwrap_or_else(|_| default_locale());
    let localizer = build_localizer(&locale, embedded, util_name)?;

    LOCALIZER.with(|lock| {
        lock.set(localizer)
            .map_err(|_| LocalizationError::Bundle("Localizer already initialized".into()))
    })
}

fn get_message_internal(id: &str, args: Option<FluentArgs>) -> String {
    LOCALIZER.with(|lock| {
        lock.get()
            .map(|loc| loc.format(id, args.as_ref()))
            .unwrap_or_else(|| id.to_string())
    })
}

pub fn get_message(id: &str) -> String {
    get_message_internal(id, None)
}

pub fn get_message_with_args(id: &str, ftl_args: FluentArgs) -> String {
    get_message_internal(id, Some(ftl_args))
}

#[macro_export]
macro_rules! translate {
    ($id:expr) => {
        $crate::locale::get_message($id)
    };

    ($id:expr, $($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut args = $crate::locale::FluentArgs::new();
            $(
                let value_str = $value.to_string();
                if let Ok(num_val) = value_str.parse::<i64>() {
                    args.set($key, num_val);
                } else {
                    args.set($key, value_str);
                }
            )+
            $crate::locale::get_message_with_args($id, args)
        }
    };
}
