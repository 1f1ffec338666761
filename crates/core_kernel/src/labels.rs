//! Arabic label catalog
//!
//! User-facing labels (roles, payment statuses, invoice headings) live in
//! `locales/ar.ftl` and are resolved through a Fluent bundle for `ar-AE`.

use fluent::{FluentArgs, FluentBundle, FluentResource};
use unic_langid::LanguageIdentifier;

use crate::error::CoreError;

const ARABIC_FTL: &str = include_str!("../locales/ar.ftl");

/// Locale tag of the bundled catalog
pub const ARABIC_LOCALE: &str = "ar-AE";

/// Resolved label catalog
pub struct Labels {
    bundle: FluentBundle<FluentResource>,
}

impl std::fmt::Debug for Labels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Labels")
            .field("locale", &ARABIC_LOCALE)
            .finish()
    }
}

impl Labels {
    /// Loads the bundled Arabic catalog
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if the catalog does not parse.
    pub fn arabic() -> Result<Self, CoreError> {
        Self::from_source(ARABIC_LOCALE, ARABIC_FTL)
    }

    /// Loads a catalog from Fluent source text
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` for an invalid locale tag, a
    /// syntax error, or a duplicated message id.
    pub fn from_source(locale: &str, source: &str) -> Result<Self, CoreError> {
        let langid: LanguageIdentifier = locale
            .parse()
            .map_err(|e| CoreError::configuration(format!("invalid locale {locale}: {e}")))?;

        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            CoreError::configuration(format!("label catalog has {} syntax errors", errors.len()))
        })?;

        let mut bundle = FluentBundle::new(vec![langid]);
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            CoreError::configuration(format!("label catalog has {} conflicts", errors.len()))
        })?;

        Ok(Self { bundle })
    }

    /// Returns true if the catalog defines `id`
    pub fn has(&self, id: &str) -> bool {
        self.bundle.has_message(id)
    }

    /// Resolves a label; unknown ids resolve to the id itself
    pub fn get(&self, id: &str) -> String {
        self.resolve(id, None)
    }

    /// Resolves a label with Fluent arguments
    pub fn get_with(&self, id: &str, args: &FluentArgs) -> String {
        self.resolve(id, Some(args))
    }

    /// `المبلغ المدفوع حتى الآن: {amount} درهم`
    pub fn paid_so_far(&self, amount: &str) -> String {
        let mut args = FluentArgs::new();
        args.set("amount", amount.to_string());
        self.get_with("paid-so-far", &args)
    }

    fn resolve(&self, id: &str, args: Option<&FluentArgs>) -> String {
        let Some(message) = self.bundle.get_message(id) else {
            tracing::warn!(label = id, "missing label");
            return id.to_string();
        };
        let Some(pattern) = message.value() else {
            tracing::warn!(label = id, "label has no value");
            return id.to_string();
        };

        let mut errors = Vec::new();
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(label = id, errors = errors.len(), "label formatted with errors");
        }
        value.into_owned()
    }
}
