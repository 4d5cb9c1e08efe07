//! Plain-text and JSON renderings of catalog views.

use folio_core::{
    resolve_item_tags, CatalogItem, Category, CategoryInfo, Project, Skill, TagRegistry,
};
use serde::Serialize;
use std::fmt::Write;

const EMPTY_VIEW: &str = "No entries match the active filters.";
const BAR_WIDTH: usize = 12;

#[derive(Serialize)]
pub struct CategoryCount<'a> {
    pub id: &'static str,
    pub name: &'a str,
    pub count: usize,
}

impl<'a> CategoryCount<'a> {
    pub fn from_pairs<C: Category>(pairs: Vec<(&'a CategoryInfo<C>, usize)>) -> Vec<Self> {
        pairs
            .into_iter()
            .map(|(info, count)| Self {
                id: info.id(),
                name: info.name.as_str(),
                count,
            })
            .collect()
    }
}

/// Which item details a listing prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPolicy<'a> {
    /// Every item shows its details.
    Always,
    /// Only the open card (if any) shows its details.
    Expanded(Option<&'a str>),
}

impl DetailPolicy<'_> {
    fn shows(&self, id: &str) -> bool {
        match self {
            Self::Always => true,
            Self::Expanded(open) => *open == Some(id),
        }
    }
}

pub fn json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn category_header(counts: &[CategoryCount<'_>]) -> String {
    counts
        .iter()
        .map(|entry| format!("{} ({})", entry.name, entry.count))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// One block per item; unknown tags are skipped when a registry is given.
pub fn items<C: Category>(
    view: &[&CatalogItem<C>],
    tags: Option<&TagRegistry>,
    details: DetailPolicy<'_>,
) -> String {
    if view.is_empty() {
        return EMPTY_VIEW.to_string();
    }

    let mut out = String::new();
    for item in view {
        let marker = if item.highlight { "*" } else { "-" };
        let _ = writeln!(
            out,
            "{marker} [{}] {} @ {} ({})",
            item.category.as_str(),
            item.title,
            item.organization,
            item.period
        );
        if !item.summary.is_empty() {
            let _ = writeln!(out, "    {}", item.summary);
        }
        let labels: Vec<&str> = match tags {
            Some(registry) => resolve_item_tags(registry, item)
                .into_iter()
                .map(|tag| tag.name.as_str())
                .collect(),
            None => item.tags.iter().map(String::as_str).collect(),
        };
        if !labels.is_empty() {
            let _ = writeln!(out, "    tags: {}", labels.join(", "));
        }
        if details.shows(&item.id) {
            for detail in &item.details {
                let _ = writeln!(out, "    > {detail}");
            }
        }
    }
    out.trim_end().to_string()
}

pub fn timeline(markers: &[String]) -> String {
    format!("timeline: {}", markers.join(" · "))
}

pub fn projects(view: &[&Project]) -> String {
    if view.is_empty() {
        return EMPTY_VIEW.to_string();
    }
    view.iter()
        .map(|project| {
            format!(
                "- {} <{}>\n    {}\n    {}",
                project.title,
                project.url,
                project.description,
                project.technologies.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn skills(skills: &[Skill]) -> String {
    skills
        .iter()
        .map(|skill| {
            let filled = (skill.level.fraction() * BAR_WIDTH as f32).round() as usize;
            format!(
                "{} {:<28} {}{} {}",
                skill.icon,
                skill.name,
                "#".repeat(filled),
                ".".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)),
                skill.level.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
