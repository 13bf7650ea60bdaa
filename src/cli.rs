//! Command-line front end: one subcommand per tool.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use crate::brdoc::{self, DocumentResult};
use crate::codec;
use crate::input;
use crate::jsonfmt::{self, Indent};
use crate::textgen;
use crate::typegen::{self, GenerateOptions, JavaStyle, Target};
use crate::xmlfmt;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// developer toolbox: JSON-to-code generation plus document/text utilities
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// generate TypeScript interfaces from a JSON sample
    Ts(TypegenArgs),
    /// generate Java DTO classes or records from a JSON sample
    Java(JavaArgs),
    /// generate, validate or mask CPF numbers
    Cpf(DocumentArgs),
    /// generate, validate or mask CNPJ numbers
    Cnpj(DocumentArgs),
    /// generate random UUID v4 values
    Uuid(UuidArgs),
    /// generate Lorem Ipsum paragraphs
    Lorem(LoremArgs),
    /// generate a random Brazilian full name
    Name,
    /// pretty-print or minify JSON
    Json(JsonArgs),
    /// pretty-print XML
    Xml(XmlArgs),
    /// base64 encode or decode text and files
    Base64(Base64Args),
    /// decompress a base64-wrapped gzip payload
    Gunzip(GunzipArgs),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// input file, or '-' for stdin
    #[arg(long, short)]
    input: String,
}

#[derive(Args, Debug)]
struct TypegenArgs {
    #[command(flatten)]
    input_settings: InputSettings,

    /// base name for the root type (e.g. Product, User, Order)
    #[arg(long, default_value = "Root")]
    root_name: String,

    /// optional name suffix (e.g. Api, Service)
    #[arg(long, default_value = "")]
    suffix: String,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct JavaArgs {
    #[command(flatten)]
    typegen: TypegenArgs,

    /// rendering style for the generated types
    #[arg(long, value_enum, default_value_t = JavaStyleArg::Lombok)]
    style: JavaStyleArg,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum JavaStyleArg {
    /// mutable class with Lombok annotations
    Lombok,
    /// immutable record
    Record,
}

impl From<JavaStyleArg> for JavaStyle {
    fn from(style: JavaStyleArg) -> Self {
        match style {
            JavaStyleArg::Lombok => JavaStyle::Lombok,
            JavaStyleArg::Record => JavaStyle::Record,
        }
    }
}

#[derive(Args, Debug)]
struct DocumentArgs {
    #[command(subcommand)]
    action: DocumentAction,
}

#[derive(Subcommand, Debug)]
enum DocumentAction {
    /// generate a new valid number
    New,
    /// validate a number; mask punctuation is ignored
    Check { value: String },
    /// apply the display mask to a digit string
    Mask { value: String },
}

#[derive(Args, Debug)]
struct UuidArgs {
    /// how many values to print, one per line
    #[arg(long, short = 'n', default_value_t = 1)]
    count: u32,
}

#[derive(Args, Debug)]
struct LoremArgs {
    /// number of paragraphs (clamped to 1..=10)
    #[arg(long, short, default_value_t = 1)]
    paragraphs: usize,
}

#[derive(Args, Debug)]
struct JsonArgs {
    #[command(flatten)]
    input_settings: InputSettings,

    /// strip whitespace instead of pretty-printing
    #[arg(long)]
    minify: bool,

    #[arg(long, value_enum, default_value_t = IndentArg::Two)]
    indent: IndentArg,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct XmlArgs {
    #[command(flatten)]
    input_settings: InputSettings,

    #[arg(long, value_enum, default_value_t = IndentArg::Two)]
    indent: IndentArg,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum IndentArg {
    /// two spaces
    Two,
    /// four spaces
    Four,
    /// one tab
    Tab,
}

impl From<IndentArg> for Indent {
    fn from(indent: IndentArg) -> Self {
        match indent {
            IndentArg::Two => Indent::Two,
            IndentArg::Four => Indent::Four,
            IndentArg::Tab => Indent::Tab,
        }
    }
}

#[derive(Args, Debug)]
struct Base64Args {
    #[command(subcommand)]
    action: Base64Action,
}

#[derive(Subcommand, Debug)]
enum Base64Action {
    /// encode a file's bytes (or literal text passed with --text)
    Encode {
        /// file to encode
        #[arg(required_unless_present = "text", conflicts_with = "text")]
        file: Option<PathBuf>,

        /// literal text to encode instead of a file
        #[arg(long)]
        text: Option<String>,
    },
    /// decode base64 into text, or into raw bytes with --out
    Decode {
        value: String,

        /// write decoded bytes here instead of printing UTF-8 text
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct GunzipArgs {
    /// base64-encoded gzip payload, or '-' to read it from stdin
    value: String,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Ts(args) => run_typegen(args, Target::TypeScript, JavaStyle::default()),
            Command::Java(args) => {
                run_typegen(&args.typegen, Target::Java, args.style.into())
            }
            Command::Cpf(args) => {
                run_document(
                    &args.action,
                    brdoc::generate_cpf,
                    brdoc::validate_cpf,
                    brdoc::mask_cpf,
                );
                Ok(())
            }
            Command::Cnpj(args) => {
                run_document(
                    &args.action,
                    brdoc::generate_cnpj,
                    brdoc::validate_cnpj,
                    brdoc::mask_cnpj,
                );
                Ok(())
            }
            Command::Uuid(args) => {
                for _ in 0..args.count.max(1) {
                    println!("{}", uuid::Uuid::new_v4());
                }
                Ok(())
            }
            Command::Lorem(args) => {
                println!("{}", textgen::lorem_ipsum(args.paragraphs));
                Ok(())
            }
            Command::Name => {
                println!("{}", textgen::random_name());
                Ok(())
            }
            Command::Json(args) => {
                let source = input::read_source(&args.input_settings.input)?;
                let output = if args.minify {
                    jsonfmt::minify(&source)?
                } else {
                    jsonfmt::beautify(&source, args.indent.into())?
                };
                write_output(args.out.as_deref(), &output)
            }
            Command::Xml(args) => {
                let source = input::read_source(&args.input_settings.input)?;
                let output = xmlfmt::beautify(&source, args.indent.into())?;
                write_output(args.out.as_deref(), &output)
            }
            Command::Base64(args) => run_base64(&args.action),
            Command::Gunzip(args) => {
                let payload = if args.value == "-" {
                    input::read_source("-")?
                } else {
                    args.value.clone()
                };
                let text = codec::gunzip_base64(&payload)?;
                write_output(args.out.as_deref(), &text)
            }
        }
    }
}

fn run_typegen(args: &TypegenArgs, target: Target, java_style: JavaStyle) -> Result<()> {
    let source = input::read_source(&args.input_settings.input)?;
    let options = GenerateOptions {
        root_name: args.root_name.clone(),
        suffix: args.suffix.clone(),
        target,
        java_style,
    };
    match typegen::generate(&source, &options)? {
        None => eprintln!("nothing to generate: blank input or root name"),
        Some(code) => write_output(args.out.as_deref(), &code)?,
    }
    Ok(())
}

fn run_document(
    action: &DocumentAction,
    generate: fn() -> DocumentResult,
    validate: fn(&str) -> DocumentResult,
    mask: fn(&str) -> String,
) {
    match action {
        DocumentAction::New => {
            let result = generate();
            println!("{}  ({})", result.formatted.bold(), result.raw);
        }
        DocumentAction::Check { value } => report_validation(&validate(value)),
        DocumentAction::Mask { value } => println!("{}", mask(value)),
    }
}

fn report_validation(result: &DocumentResult) {
    let shown = if result.formatted.is_empty() {
        &result.raw
    } else {
        &result.formatted
    };
    if result.valid {
        println!("{shown} {}", "valid".green().bold());
    } else {
        println!("{shown} {}", "invalid".red().bold());
    }
}

fn run_base64(action: &Base64Action) -> Result<()> {
    match action {
        Base64Action::Encode { file, text } => {
            let bytes = match (text, file) {
                (Some(text), _) => text.clone().into_bytes(),
                (None, Some(path)) => std::fs::read(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                (None, None) => unreachable!("clap enforces file or --text"),
            };
            println!("{}", codec::encode_base64(&bytes));
            Ok(())
        }
        Base64Action::Decode { value, out } => {
            let bytes = codec::decode_base64(value)?;
            match out {
                Some(path) => {
                    std::fs::write(path, &bytes)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                }
                None => {
                    let text = String::from_utf8(bytes)
                        .context("decoded bytes are not UTF-8 text; use --out to keep them raw")?;
                    println!("{text}");
                }
            }
            Ok(())
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: Option<&Path>, content: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
            }
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => println!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_output_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/deep/out.ts");
        write_output(Some(&target), "export interface IX {\n}").unwrap();
        let written = std::fs::read_to_string(&target).unwrap();
        assert_eq!(written, "export interface IX {\n}");
    }

    #[test]
    fn cli_parses_typegen_subcommand() {
        let cli = CommandLineInterface::parse_from([
            "dto-kit", "java", "--input", "sample.json", "--root-name", "Product",
            "--suffix", "Api", "--style", "record",
        ]);
        match cli.cmd {
            Command::Java(args) => {
                assert_eq!(args.typegen.root_name, "Product");
                assert_eq!(args.typegen.suffix, "Api");
                assert!(matches!(args.style, JavaStyleArg::Record));
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_document_actions() {
        let cli = CommandLineInterface::parse_from(["dto-kit", "cpf", "check", "111.444.777-35"]);
        match cli.cmd {
            Command::Cpf(args) => {
                assert!(matches!(args.action, DocumentAction::Check { value } if value == "111.444.777-35"))
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn base64_encode_requires_file_or_text() {
        let result = CommandLineInterface::try_parse_from(["dto-kit", "base64", "encode"]);
        assert!(result.is_err());
    }
}
