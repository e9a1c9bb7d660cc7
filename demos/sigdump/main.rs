use std::{collections::BTreeSet, process::ExitCode, str::FromStr};

use clap::{Parser, ValueEnum};
use jvm_signatures::types::{
    Signature, SignatureError,
    signatures::{ClassSignature, MethodSignature, TypeSignature},
};
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Parser)]
#[command(name = "sigdump")]
#[command(about = "Parses JVM descriptors and generic signatures", long_about = None)]
struct Args {
    /// Signatures to parse
    #[arg(required = true)]
    signatures: Vec<String>,

    /// The kind of the signatures
    #[arg(short, long, value_enum, default_value_t = Kind::Type)]
    kind: Kind,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    /// A field descriptor or field signature
    Type,
    /// A method descriptor or method signature
    Method,
    /// A class signature
    Class,
}

struct Dump {
    descriptor: String,
    java: String,
    classes: BTreeSet<String>,
}

impl Dump {
    fn of<S: Signature>(sig: &S) -> Self {
        Self {
            descriptor: sig.to_string(),
            java: sig.java_syntax().to_string(),
            classes: sig.referenced_class_names(),
        }
    }
}

fn dump(kind: Kind, input: &str) -> Result<Dump, SignatureError> {
    Ok(match kind {
        Kind::Type => Dump::of(&TypeSignature::from_str(input)?),
        Kind::Method => Dump::of(&MethodSignature::from_str(input)?),
        Kind::Class => Dump::of(&ClassSignature::from_str(input)?),
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut status = ExitCode::SUCCESS;
    for input in &args.signatures {
        match dump(args.kind, input) {
            Ok(dump) => {
                println!("{}", dump.descriptor);
                println!("  java:    {}", dump.java);
                println!(
                    "  classes: {}",
                    dump.classes.into_iter().collect::<Vec<_>>().join(", ")
                );
            }
            Err(err) => {
                eprintln!("{input}: {err}");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
