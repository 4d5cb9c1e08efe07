//! `folio` command-line entry point.
//!
//! # Responsibility
//! - Own UI state (active filters, expanded card, current month) as flags.
//! - Render core views as plain text or JSON.

mod args;
mod render;

use anyhow::{Context, Result};
use args::{Cli, Commands, OutputFormat};
use clap::Parser;
use folio_core::{
    count_by_category, default_log_level, derive_timeline_markers, education_categories,
    education_store, education_tags, experience_categories, experience_store, filter_items,
    filter_projects, sort_view_by_recency, CategoryFilter, Clock, EducationCategory,
    ExperienceCategory, FixedClock, SystemClock, TagFilter, YearMonth,
};
use log::info;
use render::{CategoryCount, DetailPolicy};
use serde_json::json;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .map_or_else(default_log_level, |level| level.as_str());
        folio_core::init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    match cli.command {
        Commands::Education { category, tag } => education(cli.format, &category, &tag),
        Commands::Experience {
            category,
            now,
            expand,
        } => experience(cli.format, &category, now.as_deref(), expand.as_deref()),
        Commands::Projects { tag } => {
            let view = filter_projects(folio_core::projects(), &TagFilter::parse(tag.trim()));
            match cli.format {
                OutputFormat::Plain => Ok(render::projects(&view)),
                OutputFormat::Json => render::json(&view),
            }
        }
        Commands::Skills => match cli.format {
            OutputFormat::Plain => Ok(render::skills(folio_core::skills())),
            OutputFormat::Json => render::json(&folio_core::skills()),
        },
        Commands::Ping => Ok(format!(
            "folio_core ping={}\nfolio_core version={}",
            folio_core::ping(),
            folio_core::core_version()
        )),
    }
}

fn education(format: OutputFormat, category: &str, tag: &str) -> Result<String> {
    let category = CategoryFilter::<EducationCategory>::parse(category)
        .with_context(|| format!("invalid education category `{category}`"))?;
    let tag = TagFilter::parse(tag.trim());
    let store = education_store();

    let view = filter_items(store.items(), &category, &tag);
    let counts = CategoryCount::from_pairs(count_by_category(
        store.items(),
        education_categories(),
    ));
    info!(
        "event=cli_view module=cli status=ok view=education shown={}",
        view.len()
    );

    match format {
        OutputFormat::Plain => Ok(format!(
            "{}\n\n{}",
            render::category_header(&counts),
            render::items(&view, Some(education_tags()), DetailPolicy::Always)
        )),
        OutputFormat::Json => render::json(&json!({
            "category": category.as_str(),
            "tag": tag.as_str(),
            "counts": counts,
            "items": view,
        })),
    }
}

fn experience(
    format: OutputFormat,
    category: &str,
    now: Option<&str>,
    expand: Option<&str>,
) -> Result<String> {
    let category = CategoryFilter::<ExperienceCategory>::parse(category)
        .with_context(|| format!("invalid experience category `{category}`"))?;
    let clock: Box<dyn Clock> = match now {
        Some(value) => {
            let month: YearMonth = value
                .trim()
                .parse()
                .with_context(|| format!("invalid --now value `{value}`"))?;
            Box::new(FixedClock(month))
        }
        None => Box::new(SystemClock),
    };
    let now = clock.current_month();
    let store = experience_store();

    let filtered = filter_items(store.items(), &category, &TagFilter::Any);
    let view = sort_view_by_recency(&filtered);
    let markers = derive_timeline_markers(store.items(), now);
    let counts = CategoryCount::from_pairs(count_by_category(
        store.items(),
        experience_categories(),
    ));
    info!(
        "event=cli_view module=cli status=ok view=experience shown={} now={}",
        view.len(),
        now
    );

    match format {
        OutputFormat::Plain => Ok(format!(
            "{}\n{}\n\n{}",
            render::category_header(&counts),
            render::timeline(&markers),
            render::items(&view, None, DetailPolicy::Expanded(expand))
        )),
        OutputFormat::Json => render::json(&json!({
            "category": category.as_str(),
            "now": now,
            "timeline": markers,
            "counts": counts,
            "items": view,
        })),
    }
}
