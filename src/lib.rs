//! Subjunctive conjugation tables for Spanish verbs.
//!
//! For a given infinitive this crate produces the full person/number table
//! across the four subjunctive tenses. Verbs whose subjunctive does not
//! follow the productive rules are resolved through a hand-curated
//! [irregular table][subjunctive::irregular]; everything else is derived
//! from the infinitive ending, the first person singular present indicative
//! and the past participle.

pub mod subjunctive;
pub use self::subjunctive::{
    derive, resolve, ConjugateError, ConjugationSet, Forms, Person, Tense, VerbClass,
};
