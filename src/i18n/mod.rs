//! Internationalization module
//!
//! This module fetches a locale-specific JSON translation document, retrying
//! once with a fallback language, and exposes a memoizing key path lookup
//! over the fetched document.

pub mod context;
pub mod dispatch;
pub mod resolver;
pub mod translator;

// Re-export commonly used i18n components
pub use context::{Bundle, Context, StaticHost, Viewer, normalize_language};
pub use dispatch::{Callback, Dispatch, I18n, i18n};
pub use resolver::Resolver;
pub use translator::{Separator, Translator};
