//! Context-aware SQL completion for interactive database shells.
//!
//! Given the text typed so far and a cursor position, [`Completer`] works out
//! which clause the cursor sits in and proposes keywords, tables, columns and
//! friends from the current [`Metadata`] snapshot.
//!
//! ```rust
//! use sqlcomplete::{Completer, Metadata, SuggestionKind};
//!
//! let mut meta = Metadata::default();
//! meta.tables = vec!["users".into()];
//! meta.columns.insert("users".into(), vec!["id".into(), "email".into()]);
//!
//! let completer = Completer::new(meta, true);
//! let suggestions = completer.complete("SELECT users.", 13);
//! assert!(suggestions.iter().all(|s| s.kind == SuggestionKind::Column));
//! ```
reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(fuzzy);
reexport!(sql);
reexport!(context);
reexport!(metadata);
reexport!(autocomplete);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
