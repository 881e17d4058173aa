use crate::config::LicensemanConfig;
use crate::error::{LicensemanError, Result};
use crate::registry;
use crate::resolver;
use crate::spdx::{License, Spdx};
use crate::store::fs::FileStore;
use clap::ArgMatches;
use colored::*;
use std::fs;
use std::io;
use std::io::Write;
use std::path::PathBuf;

static OUTPUT_FILE: &str = "LICENSE";
static TEXTS_DIR: &str = "texts";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MatchField {
  Name,
  SpdxId,
}

pub fn search<'a>(cfg: &LicensemanConfig, matches: &ArgMatches<'a>) -> Result<()> {
  let query = matches.value_of("query").unwrap();
  let field = if matches.is_present("spdx") {
    MatchField::SpdxId
  } else {
    MatchField::Name
  };

  let cache_dir = matches
    .value_of("cache-dir")
    .map(PathBuf::from)
    .unwrap_or_else(|| cfg.cache_dir());

  let source = Spdx::new(&cfg.registry_url);

  let mut registry_store = FileStore::new(cache_dir.clone());
  let licenses = registry::load_registry(&mut registry_store, &source)?;

  let results = filter_licenses(&licenses, query, field);
  print_table(&results, query, field);

  let selection = prompt_selection(results.len())?;
  let license = results[selection - 1];

  let mut text_store = FileStore::new(cache_dir.join(TEXTS_DIR));
  let force = matches.is_present("no-cache");
  let text = resolver::resolve_license_text(license, force, &mut text_store, &source)?;

  fs::write(OUTPUT_FILE, &text)?;
  println!(
    "{}",
    format!("Wrote {} to ./{}", license.name, OUTPUT_FILE).green()
  );

  Ok(())
}

fn filter_licenses<'a>(licenses: &'a [License], query: &str, field: MatchField) -> Vec<&'a License> {
  let query = query.to_lowercase();

  licenses
    .iter()
    .filter(|license| match field {
      MatchField::Name => license.name.to_lowercase().contains(&query),
      MatchField::SpdxId => license.license_id.to_lowercase().contains(&query),
    })
    .collect()
}

fn print_table(results: &[&License], query: &str, field: MatchField) {
  let header = ["Id", "Name", "SPDX-Identifier"];
  let highlighted_column = match field {
    MatchField::Name => 1,
    MatchField::SpdxId => 2,
  };

  let mut widths = [header[0].len(), header[1].len(), header[2].len()];
  let rows: Vec<[String; 3]> = results
    .iter()
    .enumerate()
    .map(|(index, license)| {
      [
        (index + 1).to_string(),
        license.name.clone(),
        license.license_id.clone(),
      ]
    })
    .collect();

  for row in &rows {
    for (column, cell) in row.iter().enumerate() {
      widths[column] = widths[column].max(cell.len());
    }
  }

  let mut line = String::new();
  for (column, title) in header.iter().enumerate() {
    line.push_str(&format!("{:<width$}  ", title, width = widths[column]));
  }
  println!("{}", line.trim_end().bold());
  println!("{}", "-".repeat(widths[0] + widths[1] + widths[2] + 4));

  for row in &rows {
    let mut line = String::new();
    for (column, cell) in row.iter().enumerate() {
      let padded = format!("{:<width$}", cell, width = widths[column]);
      if column == highlighted_column {
        line.push_str(&highlight(&padded, query));
      } else {
        line.push_str(&padded);
      }
      line.push_str("  ");
    }
    println!("{}", line.trim_end());
  }
}

/// Wrap every case-insensitive occurrence of `query` in red, keeping the
/// original casing. Occurrences are found on the ASCII-lowercased text, one
/// pass, left to right.
fn highlight(text: &str, query: &str) -> String {
  if query.is_empty() {
    return text.to_string();
  }

  let lower_text = text.to_ascii_lowercase();
  let lower_query = query.to_ascii_lowercase();

  let mut out = String::new();
  let mut cursor = 0;
  while let Some(offset) = lower_text[cursor..].find(&lower_query) {
    let start = cursor + offset;
    let end = start + lower_query.len();
    out.push_str(&text[cursor..start]);
    out.push_str(&text[start..end].red().to_string());
    cursor = end;
  }
  out.push_str(&text[cursor..]);

  out
}

fn prompt_selection(count: usize) -> Result<usize> {
  print!("Which license do you want to use? ");
  io::stdout().flush()?;

  let mut input = String::new();
  io::stdin().read_line(&mut input)?;

  parse_selection(&input, count)
}

fn parse_selection(input: &str, count: usize) -> Result<usize> {
  let selection: usize = input
    .trim()
    .parse()
    .map_err(|_| LicensemanError::Selection("Please enter a number".to_string()))?;

  if selection < 1 || selection > count {
    return Err(LicensemanError::Selection(
      "Please enter a valid number".to_string(),
    ));
  }

  Ok(selection)
}
