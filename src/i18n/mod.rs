//! Translation lookup, parameter interpolation and language state.
//!
//! Translation tables are nested JSON objects whose leaves are strings,
//! addressed by dotted paths such as `"admin.userForm.roleAdmin"`. Leaves may
//! contain `{{name}}` placeholders filled from [`Params`] at resolution time.
//!
//! Resolution never fails: a path that does not lead to a string resolves to
//! the path itself, so gaps show up on screen instead of crashing a render.
//!
//! [`check_consistency`] is the offline gate that every language carries the
//! same keys and placeholders.

mod catalog;
pub mod consistency;
mod error;
mod interpolate;
mod language;
mod localizer;
mod table;

pub use catalog::Catalog;
pub use consistency::{ConsistencyReport, Violation, check_consistency};
pub use error::I18nError;
pub use interpolate::{Params, Segment, Segments, interpolate, placeholders};
pub use language::{Direction, Language, LanguageInfo};
pub use localizer::{LanguageChange, Localizer, SubscriptionId};
pub use table::{Lookup, TranslationTable};
