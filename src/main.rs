use std::array::from_fn;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use esv::subjunctive::irregular;
use esv::{resolve, ConjugationSet};
use serde::Deserialize;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// List the verbs in the irregular table and exit.
    #[arg(long)]
    list_irregular: bool,
    /// Print the conjugation table as JSON instead of plain text.
    #[arg(long)]
    json: bool,
    /// Conjugate every verb in the given JSON file and print the collected
    /// tables as JSON. The file must contain an array of entries with
    /// `infinitive`, `present` (six forms) and `participle` fields.
    #[arg(long, value_name = "PATH")]
    batch: Option<PathBuf>,
    /// The infinitive to conjugate.
    #[arg(value_name = "INFINITIVE")]
    infinitive: Option<String>,
    /// The six present indicative forms, yo through ellos.
    #[arg(long, num_args = 6, value_name = "FORM")]
    present: Vec<String>,
    /// The past participle of the verb.
    #[arg(long, value_name = "FORM")]
    participle: Option<String>,
}

#[derive(Deserialize)]
struct VerbInput {
    infinitive: String,
    present: [String; 6],
    participle: String,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    tracing::info!("{} irregular verbs mapped", irregular::verbs().count());

    if args.list_irregular {
        for verb in irregular::verbs() {
            println!("{verb}");
        }

        return Ok(());
    }

    if let Some(path) = &args.batch {
        return batch(path);
    }

    let Some(infinitive) = &args.infinitive else {
        bail!("missing infinitive to conjugate, see --help");
    };

    let present = args.present.iter().map(String::as_str).collect::<Vec<_>>();

    let Ok(present) = <[&str; 6]>::try_from(present) else {
        bail!("expected six present indicative forms through --present");
    };

    let Some(participle) = &args.participle else {
        bail!("missing --participle");
    };

    let set = resolve(infinitive, present, participle)?;

    if args.json {
        let stdout = std::io::stdout();
        let mut o = stdout.lock();
        serde_json::to_writer_pretty(&mut o, &set)?;
        writeln!(o)?;
        return Ok(());
    }

    println!("{infinitive}:");

    for (tense, forms) in set.iter() {
        println!("  {tense}:");

        for (person, form) in forms.iter() {
            println!("    {:<24} {form}", person.describe());
        }
    }

    Ok(())
}

/// Conjugate a whole verb list. A verb that fails to resolve is logged and
/// skipped; it never aborts the rest of the batch.
fn batch(path: &Path) -> Result<()> {
    let contents =
        std::fs::read_to_string(path).with_context(|| path.display().to_string())?;
    let verbs: Vec<VerbInput> =
        serde_json::from_str(&contents).with_context(|| path.display().to_string())?;

    let mut out = BTreeMap::<&str, ConjugationSet>::new();

    for verb in &verbs {
        let present: [&str; 6] = from_fn(|i| verb.present[i].as_str());

        match resolve(&verb.infinitive, present, &verb.participle) {
            Ok(set) => {
                out.insert(verb.infinitive.as_str(), set);
            }
            Err(error) => {
                tracing::warn!("{}: {error}", verb.infinitive);
            }
        }
    }

    tracing::info!("conjugated {} / {} verbs", out.len(), verbs.len());

    let stdout = std::io::stdout();
    let mut o = stdout.lock();
    serde_json::to_writer_pretty(&mut o, &out)?;
    writeln!(o)?;
    Ok(())
}
