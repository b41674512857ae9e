//! The hand-curated table of irregular verbs.
//!
//! Verbs whose subjunctive does not follow the productive -ar/-er/-ir rules
//! live here, including stem-changing verbs such as "encontrar" and verbs
//! with an irregular first person such as "estar". The table is built once
//! and never mutated, so lookups are safe from any number of threads.
//!
//! Entries are verified at curation time; nothing re-checks them at runtime.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::subjunctive::conjugate::{HAYA, HUBIERA};
use crate::subjunctive::{ConjugationSet, Forms};

/// Helper macro to build a single table entry. The perfect tenses are
/// assembled from the participle and the person-matched auxiliaries.
macro_rules! verb {
    ($tree:ident, $infinitive:literal, $participle:literal,
        present $present:expr,
        imperfect $imperfect:expr $(,)?) => {
        $tree.insert(
            $infinitive,
            ConjugationSet::new(
                Forms::from($present),
                Forms::from($imperfect),
                Forms::perfect(HAYA, $participle),
                Forms::perfect(HUBIERA, $participle),
            ),
        );
    };
}

/// Look up the conjugations of an irregular verb.
///
/// A miss is not an error; it signals that the verb should be derived
/// through the regular rules instead.
pub fn lookup(infinitive: &str) -> Option<&'static ConjugationSet> {
    table().get(infinitive)
}

/// Iterate over the infinitives of all verbs in the table.
pub fn verbs() -> impl Iterator<Item = &'static str> {
    table().keys().copied()
}

fn table() -> &'static BTreeMap<&'static str, ConjugationSet> {
    static TABLE: OnceLock<BTreeMap<&'static str, ConjugationSet>> = OnceLock::new();
    TABLE.get_or_init(build)
}

fn build() -> BTreeMap<&'static str, ConjugationSet> {
    let mut tree = BTreeMap::new();

    verb! {
        tree, "ser", "sido",
        present ["sea", "seas", "sea", "seamos", "seáis", "sean"],
        imperfect ["fuera", "fueras", "fuera", "fuéramos", "fuerais", "fueran"],
    };

    verb! {
        tree, "estar", "estado",
        present ["esté", "estés", "esté", "estemos", "estéis", "estén"],
        imperfect ["estuviera", "estuvieras", "estuviera", "estuviéramos", "estuvierais", "estuvieran"],
    };

    verb! {
        tree, "tener", "tenido",
        present ["tenga", "tengas", "tenga", "tengamos", "tengáis", "tengan"],
        imperfect ["tuviera", "tuvieras", "tuviera", "tuviéramos", "tuvierais", "tuvieran"],
    };

    verb! {
        tree, "haber", "habido",
        present ["haya", "hayas", "haya", "hayamos", "hayáis", "hayan"],
        imperfect ["hubiera", "hubieras", "hubiera", "hubiéramos", "hubierais", "hubieran"],
    };

    verb! {
        tree, "hacer", "hecho",
        present ["haga", "hagas", "haga", "hagamos", "hagáis", "hagan"],
        imperfect ["hiciera", "hicieras", "hiciera", "hiciéramos", "hicierais", "hicieran"],
    };

    verb! {
        tree, "poder", "podido",
        present ["pueda", "puedas", "pueda", "podamos", "podáis", "puedan"],
        imperfect ["pudiera", "pudieras", "pudiera", "pudiéramos", "pudierais", "pudieran"],
    };

    verb! {
        tree, "decir", "dicho",
        present ["diga", "digas", "diga", "digamos", "digáis", "digan"],
        imperfect ["dijera", "dijeras", "dijera", "dijéramos", "dijerais", "dijeran"],
    };

    verb! {
        tree, "ir", "ido",
        present ["vaya", "vayas", "vaya", "vayamos", "vayáis", "vayan"],
        imperfect ["fuera", "fueras", "fuera", "fuéramos", "fuerais", "fueran"],
    };

    verb! {
        tree, "ver", "visto",
        present ["vea", "veas", "vea", "veamos", "veáis", "vean"],
        imperfect ["viera", "vieras", "viera", "viéramos", "vierais", "vieran"],
    };

    verb! {
        tree, "dar", "dado",
        present ["dé", "des", "dé", "demos", "deis", "den"],
        imperfect ["diera", "dieras", "diera", "diéramos", "dierais", "dieran"],
    };

    verb! {
        tree, "saber", "sabido",
        present ["sepa", "sepas", "sepa", "sepamos", "sepáis", "sepan"],
        imperfect ["supiera", "supieras", "supiera", "supiéramos", "supierais", "supieran"],
    };

    verb! {
        tree, "conocer", "conocido",
        present ["conozca", "conozcas", "conozca", "conozcamos", "conozcáis", "conozcan"],
        imperfect ["conociera", "conocieras", "conociera", "conociéramos", "conocierais", "conocieran"],
    };

    verb! {
        tree, "querer", "querido",
        present ["quiera", "quieras", "quiera", "queramos", "queráis", "quieran"],
        imperfect ["quisiera", "quisieras", "quisiera", "quisiéramos", "quisierais", "quisieran"],
    };

    verb! {
        tree, "llegar", "llegado",
        present ["llegue", "llegues", "llegue", "lleguemos", "lleguéis", "lleguen"],
        imperfect ["llegara", "llegaras", "llegara", "llegáramos", "llegarais", "llegaran"],
    };

    verb! {
        tree, "pasar", "pasado",
        present ["pase", "pases", "pase", "pasemos", "paséis", "pasen"],
        imperfect ["pasara", "pasaras", "pasara", "pasáramos", "pasarais", "pasaran"],
    };

    verb! {
        tree, "poner", "puesto",
        present ["ponga", "pongas", "ponga", "pongamos", "pongáis", "pongan"],
        imperfect ["pusiera", "pusieras", "pusiera", "pusiéramos", "pusierais", "pusieran"],
    };

    verb! {
        tree, "parecer", "parecido",
        present ["parezca", "parezcas", "parezca", "parezcamos", "parezcáis", "parezcan"],
        imperfect ["pareciera", "parecieras", "pareciera", "pareciéramos", "parecierais", "parecieran"],
    };

    verb! {
        tree, "quedar", "quedado",
        present ["quede", "quedes", "quede", "quedemos", "quedéis", "queden"],
        imperfect ["quedara", "quedaras", "quedara", "quedáramos", "quedarais", "quedaran"],
    };

    verb! {
        tree, "creer", "creído",
        present ["crea", "creas", "crea", "creamos", "creáis", "crean"],
        imperfect ["creyera", "creyeras", "creyera", "creyéramos", "creyerais", "creyeran"],
    };

    verb! {
        tree, "hablar", "hablado",
        present ["hable", "hables", "hable", "hablemos", "habléis", "hablen"],
        imperfect ["hablara", "hablaras", "hablara", "habláramos", "hablarais", "hablaran"],
    };

    verb! {
        tree, "llevar", "llevado",
        present ["lleve", "lleves", "lleve", "llevemos", "llevéis", "lleven"],
        imperfect ["llevara", "llevaras", "llevara", "lleváramos", "llevarais", "llevaran"],
    };

    verb! {
        tree, "dejar", "dejado",
        present ["deje", "dejes", "deje", "dejemos", "dejéis", "dejen"],
        imperfect ["dejara", "dejaras", "dejara", "dejáramos", "dejarais", "dejaran"],
    };

    verb! {
        tree, "soltar", "soltado",
        present ["suelte", "sueltes", "suelte", "soltemos", "soltéis", "suelten"],
        imperfect ["soltara", "soltaras", "soltara", "soltáramos", "soltarais", "soltaran"],
    };

    verb! {
        tree, "seguir", "seguido",
        present ["siga", "sigas", "siga", "sigamos", "sigáis", "sigan"],
        imperfect ["siguiera", "siguieras", "siguiera", "siguiéramos", "siguierais", "siguieran"],
    };

    verb! {
        tree, "encontrar", "encontrado",
        present ["encuentre", "encuentres", "encuentre", "encontremos", "encontréis", "encuentren"],
        imperfect ["encontrara", "encontraras", "encontrara", "encontráramos", "encontrarais", "encontraran"],
    };

    verb! {
        tree, "llamar", "llamado",
        present ["llame", "llames", "llame", "llamemos", "llaméis", "llamen"],
        imperfect ["llamara", "llamaras", "llamara", "llamáramos", "llamarais", "llamaran"],
    };

    verb! {
        tree, "mirar", "mirado",
        present ["mire", "mires", "mire", "miremos", "miréis", "miren"],
        imperfect ["mirara", "miraras", "mirara", "miráramos", "mirarais", "miraran"],
    };

    verb! {
        tree, "vivir", "vivido",
        present ["viva", "vivas", "viva", "vivamos", "viváis", "vivan"],
        imperfect ["viviera", "vivieras", "viviera", "viviéramos", "vivierais", "vivieran"],
    };

    verb! {
        tree, "sentir", "sentido",
        present ["sienta", "sientas", "sienta", "sintamos", "sintáis", "sientan"],
        imperfect ["sintiera", "sintieras", "sintiera", "sintiéramos", "sintierais", "sintieran"],
    };

    verb! {
        tree, "salir", "salido",
        present ["salga", "salgas", "salga", "salgamos", "salgáis", "salgan"],
        imperfect ["saliera", "salieras", "saliera", "saliéramos", "salierais", "salieran"],
    };

    verb! {
        tree, "volver", "vuelto",
        present ["vuelva", "vuelvas", "vuelva", "volvamos", "volváis", "vuelvan"],
        imperfect ["volviera", "volvieras", "volviera", "volviéramos", "volvierais", "volvieran"],
    };

    verb! {
        tree, "tomar", "tomado",
        present ["tome", "tomes", "tome", "tomemos", "toméis", "tomen"],
        imperfect ["tomara", "tomaras", "tomara", "tomáramos", "tomarais", "tomaran"],
    };

    verb! {
        tree, "probar", "probado",
        present ["pruebe", "pruebes", "pruebe", "probemos", "probéis", "prueben"],
        imperfect ["probara", "probaras", "probara", "probáramos", "probarais", "probaran"],
    };

    verb! {
        tree, "pedir", "pedido",
        present ["pida", "pidas", "pida", "pidamos", "pidáis", "pidan"],
        imperfect ["pidiera", "pidieras", "pidiera", "pidiéramos", "pidierais", "pidieran"],
    };

    verb! {
        tree, "responder", "respondido",
        present ["responda", "respondas", "responda", "respondamos", "respondáis", "respondan"],
        imperfect ["respondiera", "respondieras", "respondiera", "respondiéramos", "respondierais", "respondieran"],
    };

    verb! {
        tree, "abrir", "abierto",
        present ["abra", "abras", "abra", "abramos", "abráis", "abran"],
        imperfect ["abriera", "abrieras", "abriera", "abriéramos", "abrierais", "abrieran"],
    };

    verb! {
        tree, "cerrar", "cerrado",
        present ["cierre", "cierres", "cierre", "cerremos", "cerréis", "cierren"],
        imperfect ["cerrara", "cerraras", "cerrara", "cerráramos", "cerrarais", "cerraran"],
    };

    verb! {
        tree, "perder", "perdido",
        present ["pierda", "pierdas", "pierda", "perdamos", "perdáis", "pierdan"],
        imperfect ["perdiera", "perdieras", "perdiera", "perdiéramos", "perdierais", "perdieran"],
    };

    verb! {
        tree, "ganar", "ganado",
        present ["gane", "ganes", "gane", "ganemos", "ganéis", "ganen"],
        imperfect ["ganara", "ganaras", "ganara", "ganáramos", "ganarais", "ganaran"],
    };

    verb! {
        tree, "pagar", "pagado",
        present ["pague", "pagues", "pague", "paguemos", "paguéis", "paguen"],
        imperfect ["pagara", "pagaras", "pagara", "pagáramos", "pagarais", "pagaran"],
    };

    verb! {
        tree, "traer", "traído",
        present ["traiga", "traigas", "traiga", "traigamos", "traigáis", "traigan"],
        imperfect ["trajera", "trajeras", "trajera", "trajéramos", "trajerais", "trajeran"],
    };

    verb! {
        tree, "comer", "comido",
        present ["coma", "comas", "coma", "comamos", "comáis", "coman"],
        imperfect ["comiera", "comieras", "comiera", "comiéramos", "comierais", "comieran"],
    };

    verb! {
        tree, "dormir", "dormido",
        present ["duerma", "duermas", "duerma", "durmamos", "durmáis", "duerman"],
        imperfect ["durmiera", "durmieras", "durmiera", "durmiéramos", "durmierais", "durmieran"],
    };

    verb! {
        tree, "estudiar", "estudiado",
        present ["estudie", "estudies", "estudie", "estudiemos", "estudiéis", "estudien"],
        imperfect ["estudiara", "estudiaras", "estudiara", "estudiáramos", "estudiarais", "estudiaran"],
    };

    verb! {
        tree, "conducir", "conducido",
        present ["conduzca", "conduzcas", "conduzca", "conduzcamos", "conduzcáis", "conduzcan"],
        imperfect ["condujera", "condujeras", "condujera", "condujéramos", "condujerais", "condujeran"],
    };

    verb! {
        tree, "comprar", "comprado",
        present ["compre", "compres", "compre", "compremos", "compréis", "compren"],
        imperfect ["comprara", "compraras", "comprara", "compráramos", "comprarais", "compraran"],
    };

    verb! {
        tree, "vender", "vendido",
        present ["venda", "vendas", "venda", "vendamos", "vendáis", "vendan"],
        imperfect ["vendiera", "vendieras", "vendiera", "vendiéramos", "vendierais", "vendieran"],
    };

    tree
}
