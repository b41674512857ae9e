use super::*;

const BAILAR: [&str; 6] = ["bailo", "bailas", "baila", "bailamos", "bailáis", "bailan"];
const CORRER: [&str; 6] = ["corro", "corres", "corre", "corremos", "corréis", "corren"];
const VIVIR: [&str; 6] = ["vivo", "vives", "vive", "vivimos", "vivís", "viven"];

#[test]
fn verb_class_by_suffix() {
    assert_eq!(VerbClass::from_infinitive("hablar"), Some(VerbClass::Ar));
    assert_eq!(VerbClass::from_infinitive("comer"), Some(VerbClass::Er));
    assert_eq!(VerbClass::from_infinitive("vivir"), Some(VerbClass::Ir));
    assert_eq!(VerbClass::from_infinitive("xyz"), None);
}

#[test]
fn derive_ar_class() {
    let set = derive("bailar", BAILAR, "bailado").unwrap();

    let present = set.get(Tense::Present).unwrap();
    assert_eq!(
        present.iter().map(|(_, form)| form).collect::<Vec<_>>(),
        ["baile", "bailes", "baile", "bailemos", "bailéis", "bailen"]
    );

    let imperfect = set.get(Tense::Imperfect).unwrap();
    assert_eq!(imperfect.get(Person::FirstSingular), "bailara");
    assert_eq!(imperfect.get(Person::FirstPlural), "bailáramos");
}

#[test]
fn derive_er_class() {
    let set = derive("correr", CORRER, "corrido").unwrap();

    assert_eq!(set.get(Tense::Present).unwrap().get(Person::FirstSingular), "corra");
    assert_eq!(set.get(Tense::Present).unwrap().get(Person::ThirdPlural), "corran");
    assert_eq!(
        set.get(Tense::Imperfect).unwrap().get(Person::FirstPlural),
        "corriéramos"
    );
}

#[test]
fn perfect_tenses_are_person_matched() {
    let set = derive("correr", CORRER, "corrido").unwrap();

    let present_perfect = set.get(Tense::PresentPerfect).unwrap();
    assert_eq!(
        present_perfect.iter().map(|(_, form)| form).collect::<Vec<_>>(),
        [
            "haya corrido",
            "hayas corrido",
            "haya corrido",
            "hayamos corrido",
            "hayáis corrido",
            "hayan corrido"
        ]
    );

    let past_perfect = set.get(Tense::PastPerfect).unwrap();
    assert_eq!(past_perfect.get(Person::FirstPlural), "hubiéramos corrido");
    assert_eq!(past_perfect.get(Person::ThirdPlural), "hubieran corrido");
}

#[test]
fn derived_vivir_matches_curated_entry() {
    // vivir is regular despite being curated, so derivation must reproduce
    // the table's own forms.
    let derived = derive("vivir", VIVIR, "vivido").unwrap();
    let curated = irregular::lookup("vivir").unwrap();

    for tense in Tense::ALL {
        assert_eq!(derived.get(tense), curated.get(tense), "{tense}");
    }
}

#[test]
fn override_always_wins() {
    // ser would not even survive stem extraction; the curated entry must be
    // returned untouched no matter what present forms are supplied.
    let set = resolve("ser", ["soy", "eres", "es", "somos", "sois", "son"], "sido").unwrap();

    assert_eq!(set.get(Tense::Present).unwrap().get(Person::FirstSingular), "sea");
    assert_eq!(set.get(Tense::Imperfect).unwrap().get(Person::FirstPlural), "fuéramos");
    assert_eq!(
        set.get(Tense::PresentPerfect).unwrap().get(Person::ThirdSingular),
        "haya sido"
    );
}

#[test]
fn resolve_falls_through_to_derivation() {
    assert!(irregular::lookup("bailar").is_none());

    let set = resolve("bailar", BAILAR, "bailado").unwrap();
    assert_eq!(set.get(Tense::Present).unwrap().get(Person::ThirdPlural), "bailen");
}

#[test]
fn unsupported_verb_class() {
    let error = derive("xyz", ["xyzo", "xyzas", "xyza", "xyzamos", "xyzáis", "xyzan"], "xyzado")
        .unwrap_err();

    assert_eq!(
        error,
        ConjugateError::UnsupportedVerbClass {
            infinitive: "xyz".to_owned()
        }
    );
}

#[test]
fn malformed_stem() {
    // "estoy" does not end in `o`, which is exactly why estar is curated.
    let error = derive(
        "estar",
        ["estoy", "estás", "está", "estamos", "estáis", "están"],
        "estado",
    )
    .unwrap_err();

    assert_eq!(
        error,
        ConjugateError::MalformedStem {
            form: "estoy".to_owned()
        }
    );
}

#[test]
fn derive_is_idempotent() {
    let a = derive("bailar", BAILAR, "bailado").unwrap();
    let b = derive("bailar", BAILAR, "bailado").unwrap();

    for tense in Tense::ALL {
        assert_eq!(a.get(tense), b.get(tense), "{tense}");
    }
}

#[test]
fn structural_invariants() {
    for verb in irregular::verbs() {
        let set = irregular::lookup(verb).unwrap();
        assert_eq!(set.iter().count(), 4, "{verb}");

        for (tense, forms) in set.iter() {
            assert_eq!(forms.iter().count(), 6, "{verb} / {tense}");
        }
    }

    let set = derive("bailar", BAILAR, "bailado").unwrap();
    assert_eq!(set.iter().count(), 4);

    for (tense, forms) in set.iter() {
        assert_eq!(forms.iter().count(), 6, "{tense}");
    }
}

#[test]
fn irregular_table_contents() {
    assert_eq!(irregular::verbs().count(), 47);
    assert!(irregular::lookup("ser").is_some());
    assert!(irregular::lookup("encontrar").is_some());
    assert!(irregular::lookup("bailar").is_none());
}

#[test]
fn curated_stem_changing_forms() {
    let set = irregular::lookup("encontrar").unwrap();
    assert_eq!(set.get(Tense::Present).unwrap().get(Person::FirstSingular), "encuentre");
    assert_eq!(set.get(Tense::Present).unwrap().get(Person::FirstPlural), "encontremos");
    assert_eq!(
        set.get(Tense::Imperfect).unwrap().get(Person::FirstPlural),
        "encontráramos"
    );
}

#[test]
fn serializes_under_canonical_tense_names() {
    let set = derive("bailar", BAILAR, "bailado").unwrap();
    let value = serde_json::to_value(&set).unwrap();

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert_eq!(object["Present Subjunctive"][0], "baile");
    assert_eq!(object["Imperfect Subjunctive"][3], "bailáramos");
    assert_eq!(object["Past Perfect Subjunctive"][5], "hubieran bailado");
}
