//! Types describing a subjunctive conjugation table.

pub use self::conjugate::{derive, resolve, ConjugateError, VerbClass};
mod conjugate;

pub mod irregular;

#[cfg(test)]
mod tests;

use std::fmt;

use fixed_map::{Key, Map};
use serde::Serialize;

/// The six grammatical persons of a conjugated form set, in the order the
/// forms appear in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Person {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    /// The pronoun commonly used to gloss the person.
    pub fn describe(&self) -> &'static str {
        match self {
            Person::FirstSingular => "yo",
            Person::SecondSingular => "tú",
            Person::ThirdSingular => "él / ella / usted",
            Person::FirstPlural => "nosotros",
            Person::SecondPlural => "vosotros",
            Person::ThirdPlural => "ellos / ellas / ustedes",
        }
    }
}

/// The four subjunctive tenses.
///
/// Serialized names match the labels the conjugation data is published
/// under, such as `"Present Subjunctive"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Key, Serialize)]
pub enum Tense {
    #[serde(rename = "Present Subjunctive")]
    Present,
    #[serde(rename = "Imperfect Subjunctive")]
    Imperfect,
    #[serde(rename = "Present Perfect Subjunctive")]
    PresentPerfect,
    #[serde(rename = "Past Perfect Subjunctive")]
    PastPerfect,
}

impl Tense {
    pub const ALL: [Tense; 4] = [
        Tense::Present,
        Tense::Imperfect,
        Tense::PresentPerfect,
        Tense::PastPerfect,
    ];

    /// Canonical title of the tense.
    pub fn title(&self) -> &'static str {
        match self {
            Tense::Present => "Present Subjunctive",
            Tense::Imperfect => "Imperfect Subjunctive",
            Tense::PresentPerfect => "Present Perfect Subjunctive",
            Tense::PastPerfect => "Past Perfect Subjunctive",
        }
    }
}

impl fmt::Display for Tense {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One conjugated form per grammatical person, in fixed person/number order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Forms([String; 6]);

impl Forms {
    /// Build the six periphrastic perfect forms by pairing each
    /// person-matched auxiliary with the past participle.
    pub fn perfect(auxiliary: [&str; 6], participle: &str) -> Self {
        Self(auxiliary.map(|aux| format!("{aux} {participle}")))
    }

    /// Get the form for the given person.
    pub fn get(&self, person: Person) -> &str {
        self.0[person as usize].as_str()
    }

    /// Iterate over all forms in person order.
    pub fn iter(&self) -> impl Iterator<Item = (Person, &str)> + '_ {
        Person::ALL
            .into_iter()
            .zip(self.0.iter().map(String::as_str))
    }
}

impl From<[String; 6]> for Forms {
    #[inline]
    fn from(forms: [String; 6]) -> Self {
        Self(forms)
    }
}

impl From<[&str; 6]> for Forms {
    #[inline]
    fn from(forms: [&str; 6]) -> Self {
        Self(forms.map(|form| form.to_owned()))
    }
}

/// A full conjugation table: one set of six forms per subjunctive tense.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ConjugationSet {
    tenses: Map<Tense, Forms>,
}

impl ConjugationSet {
    /// Set up a conjugation set covering all four tenses.
    pub fn new(
        present: Forms,
        imperfect: Forms,
        present_perfect: Forms,
        past_perfect: Forms,
    ) -> Self {
        let mut tenses = Map::new();
        tenses.insert(Tense::Present, present);
        tenses.insert(Tense::Imperfect, imperfect);
        tenses.insert(Tense::PresentPerfect, present_perfect);
        tenses.insert(Tense::PastPerfect, past_perfect);
        Self { tenses }
    }

    /// Get the forms of a tense.
    pub fn get(&self, tense: Tense) -> Option<&Forms> {
        self.tenses.get(tense)
    }

    /// Iterate over all tenses in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Tense, &Forms)> + '_ {
        self.tenses.iter()
    }
}
