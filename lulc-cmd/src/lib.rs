//! Command implementations for the land-use CLI.
//!
//! Provides subcommands for listing sites, querying per-site shares, deltas
//! and coverage, printing the dashboard timeline and narrative, and
//! validating raw payloads against the canonical schema.

use anyhow::{bail, Result};
use clap::Subcommand;
use lulc_core::normalize::Normalizer;
use lulc_core::{Category, Year};
use lulc_data::Dataset;
use lulc_utils::format;

pub mod loader;
pub mod report;

pub use loader::SourceArgs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every site with the vintages it appears in
    Sites,

    /// Show one site's record for a year
    Show {
        site: String,
        year: Year,
    },

    /// Print a category's share across the configured years
    Series {
        site: String,
        /// Category id or label, e.g. builtArea or "Built Area"
        category: Category,
    },

    /// Change of a category's share between two years
    Delta {
        site: String,
        category: Category,
        year_a: Year,
        year_b: Year,
    },

    /// Dominant category among the narrative candidates
    Dominant {
        site: String,
        year: Year,
    },

    /// Summed share of the selected categories
    Coverage {
        site: String,
        year: Year,
        /// Categories to leave out of the selection (repeatable)
        #[arg(short = 'x', long)]
        exclude: Vec<Category>,
    },

    /// Total area per year with the change against the previous year
    Timeline {
        site: String,
    },

    /// Narrative summary between the baseline and latest years
    Narrative {
        site: String,
    },

    /// Report fields that defaulted during normalization
    Validate,

    /// Write one vintage as canonical CSV to stdout
    Export {
        year: Year,
    },
}

pub fn run(source: &SourceArgs, command: Command) -> Result<()> {
    let settings = loader::load_settings(source)?;
    let dataset = loader::load_dataset(source)?;
    if dataset.is_empty() {
        log::warn!("No records loaded");
    }

    match command {
        Command::Sites => {
            println!("{}", dataset.overview());
            for name in dataset.site_names_in_order() {
                let present: Vec<String> = dataset
                    .loaded_years()
                    .into_iter()
                    .filter(|year| dataset.contains(&name, *year))
                    .map(|year| year.to_string())
                    .collect();
                println!("{}  [{}]", name, present.join(", "));
            }
        }
        Command::Show { site, year } => {
            let record = find_record(&dataset, &site, year)?;
            print!("{}", report::record_table(record));
        }
        Command::Series { site, category } => {
            let values = dataset.time_series(&site, category, &settings.years);
            for (year, value) in settings.years.iter().zip(values) {
                let marker = if dataset.contains(&site, *year) { "" } else { "  (no record)" };
                println!("{}  {}{}", year, format::percent(value), marker);
            }
        }
        Command::Delta {
            site,
            category,
            year_a,
            year_b,
        } => {
            let delta = dataset.year_over_year_delta(&site, category, year_a, year_b);
            println!(
                "{} {} {}-{}: {} points",
                site,
                category,
                year_a,
                year_b,
                format::signed_percent(delta).trim_end_matches('%')
            );
        }
        Command::Dominant { site, year } => {
            find_record(&dataset, &site, year)?;
            match dataset.dominant_category(&site, year, &settings.narrative_candidates) {
                Some(dominant) => println!(
                    "{} ({})",
                    dominant.category,
                    format::percent(dominant.percent)
                ),
                None => println!("No candidate category has a positive share"),
            }
        }
        Command::Coverage {
            site,
            year,
            exclude,
        } => {
            find_record(&dataset, &site, year)?;
            let mut selection = settings.selection();
            for category in exclude {
                if selection.is_selected(category) {
                    selection.toggle(category);
                }
            }
            let labels: Vec<&str> = selection.iter().map(Category::label).collect();
            println!(
                "{} of {} in {} ({})",
                format::percent(dataset.selected_coverage(&site, year, &selection)),
                site,
                year,
                labels.join(", ")
            );
        }
        Command::Timeline { site } => match dataset.timeline(&site, &settings.years) {
            Some(entries) => print!("{}", report::timeline_table(&entries)),
            None => bail!(
                "{} lacks records for {:?}",
                site,
                dataset
                    .missing_years(&site, &settings.years)
                    .iter()
                    .map(|y| y.as_u16())
                    .collect::<Vec<_>>()
            ),
        },
        Command::Narrative { site } => {
            match dataset.narrative(&site, &settings, &settings.selection()) {
                Some(narrative) => print!("{}", narrative),
                None => bail!(
                    "{} needs records for both {} and {}",
                    site,
                    settings.baseline_year,
                    settings.latest_year
                ),
            }
        }
        Command::Export { year } => {
            print!("{}", report::canonical_csv(dataset.records(year))?);
        }
        Command::Validate => {
            let normalizer = Normalizer::default();
            for (year, raws) in loader::raw_payloads(source)? {
                let results = normalizer.normalize_batch_with_reports(&raws, year);
                print!("{}", report::validation_report(year, &results));
            }
        }
    }
    Ok(())
}

fn find_record<'a>(
    dataset: &'a Dataset,
    site: &str,
    year: Year,
) -> Result<&'a lulc_core::SiteYearRecord> {
    match dataset.get(site, year) {
        Some(record) => Ok(record),
        None => bail!("No record for {:?} in {}", site, year),
    }
}
