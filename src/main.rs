use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use time::{Date, OffsetDateTime};

use page_eleven::layout;
use page_eleven::templates::{self, FieldKind, Template};
use page_eleven::{IdentBlock, RenderRequest, SkinId, dates};

#[derive(Parser)]
#[command(
    name = "page-eleven",
    version,
    about = "Generate NAVMC 118(11) Administrative Remarks (Page 11) entries as PDF"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List entry categories and templates, or the fields of one template
    List {
        /// Template id to describe in detail
        #[arg(long)]
        template: Option<String>,
    },
    /// Fill a template and export the entry as a PDF
    Render {
        /// Template id (see `list`)
        #[arg(long)]
        template: String,
        /// Entry date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Field value as id=value (repeatable)
        #[arg(long = "set", value_name = "ID=VALUE")]
        set: Vec<String>,
        /// JSON file with an object of field values
        #[arg(long, value_name = "FILE")]
        values: Option<PathBuf>,
        /// Marine's name (Last, First, Middle Initial)
        #[arg(long, default_value = "")]
        name: String,
        /// Grade, e.g. Sgt
        #[arg(long, default_value = "")]
        grade: String,
        /// Last four of the SSN
        #[arg(long, default_value = "")]
        ssn: String,
        /// Form revision: rev2024, rev2012 or split
        #[arg(long, default_value = "rev2024")]
        skin: String,
        /// Output path (defaults to a sanitized name in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::List { template } => list(template.as_deref()),
        Command::Render {
            template,
            date,
            set,
            values,
            name,
            grade,
            ssn,
            skin,
            output,
        } => {
            let template = templates::find(&template)
                .ok_or(page_eleven::Error::UnknownTemplate(template))?;
            let skin = SkinId::from_str(&skin)?;
            let entry_date = match date {
                Some(s) => dates::parse_input(&s)?,
                None => today(),
            };

            let mut field_values = BTreeMap::new();
            if let Some(path) = values {
                load_values_file(&path, &mut field_values)?;
            }
            for pair in &set {
                let (id, value) = pair
                    .split_once('=')
                    .ok_or_else(|| format!("--set expects ID=VALUE, got '{pair}'"))?;
                field_values.insert(id.to_string(), value.to_string());
            }
            expand_ucmj_shorthand(template, &mut field_values);
            template.validate(&field_values)?;

            let entry_text = templates::fill(template, &field_values, entry_date);
            let req = RenderRequest {
                entry_text,
                ident: IdentBlock {
                    name,
                    grade,
                    ssn_last4: ssn,
                },
                doc_label: template.name.to_string(),
                generated_on: today(),
                skin,
            };

            let output = output.unwrap_or_else(|| {
                PathBuf::from(layout::suggested_filename(&req.doc_label, req.generated_on))
            });
            page_eleven::generate_pdf_to_file(&req, &output)?;
            println!("wrote {}", output.display());
            Ok(())
        }
    }
}

fn list(template: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(id) = template {
        let t = templates::find(id).ok_or(page_eleven::Error::UnknownTemplate(id.to_string()))?;
        println!("{}: {}", t.id, t.name);
        for f in t.fields {
            let mut row = format!("  {:<24} {:?}", f.id, f.kind);
            if f.required {
                row.push_str(" (required)");
            }
            if !f.options.is_empty() {
                row.push_str(&format!(" [{}]", f.options.join(" | ")));
            }
            if let Some((dep, val)) = f.conditional {
                row.push_str(&format!(" (when {dep}={val})"));
            }
            if let Some(hint) = f.placeholder {
                row.push_str(&format!(" ({hint})"));
            }
            println!("{row}");
        }
        if t.fields.iter().any(|f| f.kind == FieldKind::UcmjSelect) {
            println!("\nUCMJ articles (pass the article number, e.g. --set ucmj_article=92):");
            for (article, title) in templates::UCMJ_ARTICLES {
                println!("  {article:<5} {title}");
            }
        }
        return Ok(());
    }

    for &category in templates::Category::all() {
        println!("{}", category.display_name());
        for t in templates::in_category(category) {
            println!("  {:<24} {}", t.id, t.name);
        }
    }
    Ok(())
}

fn load_values_file(
    path: &Path,
    into: &mut BTreeMap<String, String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let parsed: serde_json::Value = serde_json::from_str(&raw)?;
    let object = parsed
        .as_object()
        .ok_or("values file must contain a JSON object")?;
    for (key, value) in object {
        let as_text = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        into.insert(key.clone(), as_text);
    }
    Ok(())
}

/// Let 6105 users pass a bare article number; expand it to the full citation.
fn expand_ucmj_shorthand(template: &Template, values: &mut BTreeMap<String, String>) {
    if !template.fields.iter().any(|f| f.kind == FieldKind::UcmjSelect) {
        return;
    }
    let expanded = values
        .get("ucmj_article")
        .and_then(|article| templates::ucmj_reference(article));
    if let Some(reference) = expanded {
        values.insert("ucmj_article".to_string(), reference);
    }
}

fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
