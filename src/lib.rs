//! Classification and regular conjugation of Portuguese verbs.
//!
//! ```
//! use ptv::inflection::{conjugate, FormKey, Person, Tense};
//!
//! let falar = conjugate("falar");
//! let form = falar.get(FormKey::cell(Person::FirstSingular, Tense::PastSimple));
//! assert_eq!(form.map(|f| f.to_string()).as_deref(), Some("falei"));
//!
//! assert_eq!(
//!     ptv::match_regular("falei", "falar").as_deref(),
//!     Some("First Person Singular Past-Tense Simple")
//! );
//! ```

mod concat;
pub use self::concat::Concat;

pub mod inflection;
pub use self::inflection::{conjugate, Conjugations, FormKey, Person, Tense};

pub mod labels;
pub use self::labels::{format_label, Labels};

pub mod matcher;
pub use self::matcher::{match_regular, Matcher};

pub mod classify;
pub use self::classify::{classify, Irregulars, VerbClass};

pub mod config;
pub use self::config::Config;

mod error;
pub use self::error::Error;

pub mod tagger;

pub mod analyze;
pub use self::analyze::Analyzer;
