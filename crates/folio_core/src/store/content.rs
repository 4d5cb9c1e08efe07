//! Fixed portfolio content.
//!
//! Built lazily on first access and shared read-only for the process.

use super::{CatalogStore, StoreError, StoreResult};
use crate::model::category::{EducationCategory, ExperienceCategory};
use crate::model::item::{CatalogItem, EducationItem, ExperienceItem};
use crate::model::period::PeriodSpan;
use crate::model::showcase::{Project, Skill, SkillLevel};
use crate::registry::{CategoryInfo, CategoryRegistry, Tag, TagRegistry};
use once_cell::sync::Lazy;

static EDUCATION: Lazy<CatalogStore<EducationCategory>> =
    Lazy::new(|| build_education().expect("valid education content"));
static EXPERIENCE: Lazy<CatalogStore<ExperienceCategory>> =
    Lazy::new(|| build_experience().expect("valid experience content"));
static EDUCATION_TAGS: Lazy<TagRegistry> =
    Lazy::new(|| build_education_tags().expect("valid education tags"));
static EDUCATION_CATEGORIES: Lazy<CategoryRegistry<EducationCategory>> =
    Lazy::new(|| build_education_categories().expect("valid education categories"));
static EXPERIENCE_CATEGORIES: Lazy<CategoryRegistry<ExperienceCategory>> =
    Lazy::new(|| build_experience_categories().expect("valid experience categories"));
static SKILLS: Lazy<Vec<Skill>> = Lazy::new(|| {
    vec![
        Skill::new("Python", SkillLevel::Advanced, "🐍"),
        Skill::new("C/C++", SkillLevel::Intermediate, "⚙️"),
        Skill::new("SQL", SkillLevel::Entry, "🗄️"),
        Skill::new("Office/Excel", SkillLevel::Intermediate, "📊"),
        Skill::new("Power BI", SkillLevel::Intermediate, "📈"),
        Skill::new("CAD/Technical Drawing", SkillLevel::Entry, "✏️"),
        Skill::new("Blockchain/Smart Contracts", SkillLevel::Intermediate, "🔗"),
    ]
});
static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        project(
            "Carburanti FVG",
            "A web platform to check and compare fuel prices in the Friuli Venezia Giulia region of Italy.",
            "https://carburantifvg.it",
            "/project_icons/carburanti.png",
            &["Data Visualization", "API Integration", "SQL", "Python"],
        ),
        project(
            "Stays & Flights",
            "A travel platform that allows to discover multi-flight trip options.",
            "https://stays.flights",
            "/project_icons/staysflights.png",
            &[
                "Web Development",
                "API Development",
                "UX Design",
                "Microservices",
                "SQL",
                "Python",
            ],
        ),
        project(
            "AlgoPixels",
            "A creative project exploring NFTs and smart contracts.",
            "https://algopixels.site",
            "/project_icons/algopixels.png",
            &["Algorand", "Smart Contracts", "NFTs", "Python", "Blockchain"],
        ),
    ]
});

/// Education entries in display order.
pub fn education_store() -> &'static CatalogStore<EducationCategory> {
    &EDUCATION
}

/// Work experience entries in authoring order (not yet sorted).
pub fn experience_store() -> &'static CatalogStore<ExperienceCategory> {
    &EXPERIENCE
}

pub fn education_tags() -> &'static TagRegistry {
    &EDUCATION_TAGS
}

pub fn education_categories() -> &'static CategoryRegistry<EducationCategory> {
    &EDUCATION_CATEGORIES
}

pub fn experience_categories() -> &'static CategoryRegistry<ExperienceCategory> {
    &EXPERIENCE_CATEGORIES
}

pub fn skills() -> &'static [Skill] {
    &SKILLS
}

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

fn span(id: &str, start: &str, end: &str) -> StoreResult<Option<PeriodSpan>> {
    PeriodSpan::parse(start, end)
        .map(Some)
        .map_err(|source| StoreError::InvalidPeriod {
            id: id.to_string(),
            source,
        })
}

fn project(
    title: &str,
    description: &str,
    url: &str,
    image: &str,
    technologies: &[&str],
) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        image: image.to_string(),
        technologies: technologies.iter().map(|tech| tech.to_string()).collect(),
    }
}

fn build_education_categories() -> StoreResult<CategoryRegistry<EducationCategory>> {
    Ok(CategoryRegistry::from_entries([
        CategoryInfo::new(EducationCategory::Degree, "Degrees", "🎓"),
        CategoryInfo::new(EducationCategory::Program, "Programs", "🌍"),
        CategoryInfo::new(EducationCategory::Course, "Courses", "📚"),
    ])?)
}

fn build_experience_categories() -> StoreResult<CategoryRegistry<ExperienceCategory>> {
    Ok(CategoryRegistry::from_entries([
        CategoryInfo::new(ExperienceCategory::Pmo, "PMO", "🏢"),
        CategoryInfo::new(ExperienceCategory::Internship, "Internship", "🚀"),
        CategoryInfo::new(ExperienceCategory::Data, "Data", "📊"),
    ])?)
}

fn build_education_tags() -> StoreResult<TagRegistry> {
    Ok(TagRegistry::from_tags([
        Tag::new("engineering", "Engineering", "blue"),
        Tag::new("management", "Management", "purple"),
        Tag::new("analytics", "Analytics", "green"),
        Tag::new("business", "Business", "amber"),
        Tag::new("blockchain", "Blockchain", "indigo"),
        Tag::new("technology", "Technology", "cyan"),
        Tag::new("sixsigma", "Six Sigma", "yellow"),
        Tag::new("international", "International", "rose"),
        Tag::new("optimization", "Optimization", "orange"),
        Tag::new("finance", "Finance", "red"),
    ])?)
}

fn build_education() -> StoreResult<CatalogStore<EducationCategory>> {
    let items: Vec<EducationItem> = vec![
        CatalogItem::new(
            "master",
            EducationCategory::Degree,
            "Master's in Management Engineering",
        )
        .at("Università degli studi di Udine", "Udine, Italy")
        .during(
            "September 2022 - March 2025",
            span("master", "2022-09", "2025-03")?,
        )
        .with_summary("Specialization in Digital Business and Analytics")
        .with_tags([
            "management",
            "engineering",
            "analytics",
            "business",
            "technology",
            "optimization",
            "finance",
        ])
        .with_details([
            "Thesis on Development of local search algorithms for a project scheduling problem with complex resource constraints.",
            "Degree: 108",
        ]),
        CatalogItem::new(
            "bachelor",
            EducationCategory::Degree,
            "Bachelor's in Management Engineering",
        )
        .at("Università degli studi di Udine", "Udine, Italy")
        .during(
            "September 2018 - July 2022",
            span("bachelor", "2018-09", "2022-07")?,
        )
        .with_summary("Specialization in Information Technology")
        .with_tags(["management", "engineering", "technology", "blockchain"])
        .with_details([
            "Thesis: Hedging Risk in Blockchain: MetalSwap protocol analysis",
            "Degree: 96",
        ]),
        CatalogItem::new("erasmus", EducationCategory::Program, "Erasmus Exchange Program")
            .at("AGH University of Krakow", "Krakow, Poland")
            .during(
                "September 2023 - March 2024",
                span("erasmus", "2023-09", "2024-03")?,
            )
            .with_summary("6 months erasmus program, courses held in English")
            .with_tags(["international", "business", "analytics", "finance"])
            .with_details([
                "Econometrics, Financial Risk Management, Business Process Reengineering, Process Mining, International Marketing",
            ]),
        CatalogItem::new("sixSigma", EducationCategory::Course, "Lean Six Sigma Summer Course")
            .at("University of Rhode Island", "Rhode Island, USA")
            .during(
                "July 2023 - August 2023",
                span("sixSigma", "2023-07", "2023-08")?,
            )
            .with_summary("Intensive course about Lean Six Sigma methodologies")
            .with_tags(["sixsigma", "management", "international"]),
    ];
    CatalogStore::new(items)
}

fn build_experience() -> StoreResult<CatalogStore<ExperienceCategory>> {
    let items: Vec<ExperienceItem> = vec![
        CatalogItem::new("deloitte", ExperienceCategory::Data, "Analyst")
            .at("Deloitte Italy S.p.A S.B.", "Milan, Italy")
            .during("June 1, 2025 - ongoing", span("deloitte", "2025-06", "present")?)
            .with_details([
                "Data analysis (financial sector)",
                "Trading algorithm development",
                "AI/ML for banking process optimization",
            ])
            .with_tags(["Data Analysis", "Python", "AI", "Machine Learning", "Finance"])
            .highlighted(),
        CatalogItem::new("danieli", ExperienceCategory::Pmo, "PMO Junior")
            .at("Danieli & C. Officine Meccaniche SpA", "Buttrio, Italy")
            .during(
                "October 1, 2024 - December 10, 2024",
                span("danieli", "2024-10", "2024-12")?,
            )
            .with_details([
                "Organized trainings for non-conformity management through proprietary software",
                "Risk management process rethinking based on ISO 31000 (started)",
            ])
            .with_tags([
                "Risk Management",
                "Project Management",
                "ISO 31000",
                "Training",
                "Documentation",
            ]),
        CatalogItem::new("boato", ExperienceCategory::Internship, "Internship")
            .at("Boato International SpA", "Monfalcone, Italy")
            .during(
                "June 5, 2022 - December 5, 2022",
                span("boato", "2022-06", "2022-12")?,
            )
            .with_details([
                "Project analysis",
                "Materials analysis",
                "Purchase price analysis",
                "Management data entry",
                "Excel automation tools",
            ])
            .with_tags([
                "Project Management",
                "Excel",
                "Power Query",
                "IBM Cognos",
                "AS400",
                "Vision",
                "Data Analysis",
            ]),
    ];
    CatalogStore::new(items)
}

#[cfg(test)]
mod tests {
    use super::{
        build_education, build_education_categories, build_education_tags, build_experience,
        build_experience_categories,
    };

    #[test]
    fn every_builder_accepts_shipped_content() {
        assert_eq!(build_education().expect("education").len(), 4);
        assert_eq!(build_experience().expect("experience").len(), 3);
        assert_eq!(build_education_tags().expect("tags").len(), 10);
        assert_eq!(build_education_categories().expect("categories").entries().len(), 3);
        assert_eq!(build_experience_categories().expect("categories").entries().len(), 3);
    }
}
