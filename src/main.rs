#[macro_use]
extern crate serde_derive;

mod actions;
mod config;
mod error;
mod registry;
mod resolver;
mod spdx;
mod store;

use crate::config::LicensemanConfig;
use crate::error::Result;
use clap::{App, Arg};
use colored::*;

static PROJECT_NAME: &str = "licenseman";

fn main() {
  if let Err(error) = run() {
    eprintln!("{}", error.to_string().red());
    std::process::exit(1);
  }
}

fn run() -> Result<()> {
  let matches = App::new(PROJECT_NAME)
    .about("Search the SPDX license list and write the selected license to ./LICENSE")
    .arg(
      Arg::with_name("query")
        .help("Search term matched against license names")
        .required(true),
    )
    .arg(
      Arg::with_name("spdx")
        .long("spdx")
        .help("Match the search term against SPDX license identifiers"),
    )
    .arg(
      Arg::with_name("no-cache")
        .long("no-cache")
        .help("Re-download the license text even when a cached copy exists"),
    )
    .arg(
      Arg::with_name("cache-dir")
        .long("cache-dir")
        .takes_value(true)
        .env("LICENSEMAN_CACHE_DIR")
        .help("Directory holding the registry and license text caches"),
    )
    .get_matches();

  let cfg = LicensemanConfig::open()?;

  actions::search(&cfg, &matches)
}
