//! Module which performs subjunctive conjugation, based on a verb's class.

use thiserror::Error;

use crate::subjunctive::{irregular, ConjugationSet, Forms};

/// Person-matched present subjunctive of the auxiliary "haber".
pub(crate) const HAYA: [&str; 6] = ["haya", "hayas", "haya", "hayamos", "hayáis", "hayan"];

/// Person-matched imperfect subjunctive of the auxiliary "haber".
pub(crate) const HUBIERA: [&str; 6] = [
    "hubiera",
    "hubieras",
    "hubiera",
    "hubiéramos",
    "hubierais",
    "hubieran",
];

const AR_PRESENT: [&str; 6] = ["e", "es", "e", "emos", "éis", "en"];
const AR_IMPERFECT: [&str; 6] = ["ara", "aras", "ara", "áramos", "arais", "aran"];
const ER_IR_PRESENT: [&str; 6] = ["a", "as", "a", "amos", "áis", "an"];
const ER_IR_IMPERFECT: [&str; 6] = ["iera", "ieras", "iera", "iéramos", "ierais", "ieran"];

/// Error raised when a verb cannot be conjugated through the regular rules.
///
/// Both variants are local to the verb being processed; a caller working
/// through a list of verbs should record the failure and continue with the
/// rest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConjugateError {
    /// The infinitive does not belong to one of the three productive classes.
    #[error("`{infinitive}` is not an -ar, -er or -ir infinitive")]
    UnsupportedVerbClass { infinitive: String },
    /// The first person singular present does not end in `o`, so no stem can
    /// be extracted from it.
    #[error("cannot extract a stem from `{form}`: expected it to end in `o`")]
    MalformedStem { form: String },
}

/// The three productive verb classes, by infinitive ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbClass {
    Ar,
    Er,
    Ir,
}

impl VerbClass {
    /// Classify an infinitive by its ending.
    pub fn from_infinitive(infinitive: &str) -> Option<VerbClass> {
        if infinitive.ends_with("ar") {
            Some(VerbClass::Ar)
        } else if infinitive.ends_with("er") {
            Some(VerbClass::Er)
        } else if infinitive.ends_with("ir") {
            Some(VerbClass::Ir)
        } else {
            None
        }
    }
}

/// Derive the regular subjunctive conjugations for the given infinitive.
///
/// `present` is the present indicative in person order; only the first
/// person singular is used, to extract the stem. `participle` is the past
/// participle the two perfect tenses are assembled from.
///
/// Verbs with an irregular subjunctive must not go through here, since the
/// stem taken from the present indicative would produce wrong forms. They
/// belong in the [irregular table][crate::subjunctive::irregular] instead.
pub fn derive(
    infinitive: &str,
    present: [&str; 6],
    participle: &str,
) -> Result<ConjugationSet, ConjugateError> {
    let Some(class) = VerbClass::from_infinitive(infinitive) else {
        return Err(ConjugateError::UnsupportedVerbClass {
            infinitive: infinitive.to_owned(),
        });
    };

    let Some(stem) = present[0].strip_suffix('o') else {
        return Err(ConjugateError::MalformedStem {
            form: present[0].to_owned(),
        });
    };

    let (present, imperfect) = match class {
        VerbClass::Ar => (AR_PRESENT, AR_IMPERFECT),
        VerbClass::Er | VerbClass::Ir => (ER_IR_PRESENT, ER_IR_IMPERFECT),
    };

    Ok(ConjugationSet::new(
        attach(stem, present),
        attach(stem, imperfect),
        Forms::perfect(HAYA, participle),
        Forms::perfect(HUBIERA, participle),
    ))
}

/// Resolve the conjugations for a verb.
///
/// The irregular table always wins; a verb absent from it falls through to
/// [`derive`] with the supplied present indicative and participle.
pub fn resolve(
    infinitive: &str,
    present: [&str; 6],
    participle: &str,
) -> Result<ConjugationSet, ConjugateError> {
    if let Some(set) = irregular::lookup(infinitive) {
        return Ok(set.clone());
    }

    derive(infinitive, present, participle)
}

fn attach(stem: &str, suffixes: [&str; 6]) -> Forms {
    Forms::from(suffixes.map(|suffix| format!("{stem}{suffix}")))
}
