use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

const PROJECTS_FILE: &str = "projects.json";
const SITE_FILE: &str = "site.json";

pub static SITE_CONTENT: LazyLock<SiteContent> =
    LazyLock::new(|| SiteContent::load().expect("Embedded site content should be valid"));

/// Site content, parsed once on first access.
pub fn content() -> &'static SiteContent {
    &SITE_CONTENT
}

#[derive(Embed)]
#[folder = "content"]
struct Assets;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Duplicate project id: {0}")]
    DuplicateId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Research,
    #[serde(rename = "Web Apps")]
    WebApps,
    #[serde(rename = "ML Models")]
    MlModels,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Research, Category::WebApps, Category::MlModels];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Research => "Research",
            Category::WebApps => "Web Apps",
            Category::MlModels => "ML Models",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub tagline: String,
    pub problem: String,
    pub stack: Vec<String>,
    pub achievements: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    pub screenshots: Vec<String>,
}

impl Project {
    /// Number of stack entries shown on a project card.
    pub const CARD_STACK_LEN: usize = 3;

    pub fn card_stack(&self) -> &[String] {
        &self.stack[..self.stack.len().min(Self::CARD_STACK_LEN)]
    }

    /// Stack entries hidden behind the "+N more" badge.
    pub fn hidden_stack_count(&self) -> usize {
        self.stack.len().saturating_sub(Self::CARD_STACK_LEN)
    }

    pub fn cover(&self) -> Option<&str> {
        self.screenshots.first().map(String::as_str)
    }
}

/// The fixed, ordered list of projects. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog(Vec<Project>);

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for p in projects.iter() {
            if !seen.insert(p.id.as_str()) {
                return Err(CatalogError::DuplicateId(p.id.clone()));
            }
        }
        Ok(Self(projects))
    }

    pub fn projects(&self) -> &[Project] {
        &self.0
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.0.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let projects = Vec::<Project>::deserialize(deserializer)?;
        Catalog::new(projects).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub icon: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub location: String,
    /// Destination for the contact form.
    pub email: String,
    pub role: String,
    pub interests: String,
    pub avatar: String,
    /// Path under `public/`. Absent until a CV is published.
    #[serde(default)]
    pub resume: Option<String>,
    pub last_updated: String,
    pub about: Vec<String>,
    pub stats: Vec<Stat>,
    pub socials: Vec<SocialLink>,
    pub phrases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub score: String,
    pub coursework: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub year: Option<String>,
    pub highlights: Vec<String>,
    pub bibtex: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub organisation: String,
    pub period: String,
    pub location: String,
    pub logo: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub topics: String,
    pub logo: String,
}

/// A vault entry. Entries without a link are placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub attribution: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub soft_skills: Vec<String>,
    pub publications: Vec<Publication>,
    pub awards: Vec<Award>,
    pub experience: Vec<Experience>,
    pub certifications: Vec<Certification>,
    pub documents: Vec<Document>,
    pub testimonials: Vec<Testimonial>,
    #[serde(skip)]
    pub projects: Catalog,
}

impl SiteContent {
    pub fn load() -> Result<Self, CatalogError> {
        let mut site: SiteContent = load_json(SITE_FILE)?;
        site.projects = load_json(PROJECTS_FILE)?;
        log::debug!("loaded {} projects", site.projects.len());
        Ok(site)
    }
}

fn load_json<T: DeserializeOwned>(name: &str) -> Result<T, CatalogError> {
    let file = Assets::get(name).ok_or_else(|| CatalogError::NotFound(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|source| CatalogError::ParseError {
        file: name.to_string(),
        source,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    pub(crate) fn project(id: &str, category: Category) -> Project {
        Project {
            id: id.to_string(),
            category,
            title: format!("{id} title"),
            tagline: String::new(),
            problem: String::new(),
            stack: vec!["Rust".to_string()],
            achievements: Vec::new(),
            github: None,
            demo: None,
            screenshots: vec![format!("https://example.com/{id}.png")],
        }
    }

    #[test]
    fn test_embedded_content_loads() {
        let site = SiteContent::load().expect("embedded content should parse");
        assert!(!site.projects.is_empty());
        assert!(site.projects.projects().iter().all(|p| p.cover().is_some()));
        assert!(!site.profile.phrases.is_empty());
        assert_eq!(site.profile.email, "akash.prajapati.cse@gmail.com");
    }

    #[test]
    fn test_resume_link_is_served() {
        let Some(resume) = content().profile.resume.as_deref() else {
            return;
        };
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(resume.trim_start_matches('/'));
        assert!(path.is_file(), "{} is not in public/", path.display());
    }

    #[test]
    fn test_embedded_catalog_order() {
        let ids = content()
            .projects
            .projects()
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec!["traffic-management", "proactive-wellness", "facial-recognition"]
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let res = Catalog::new(vec![
            project("a", Category::Research),
            project("b", Category::WebApps),
            project("a", Category::MlModels),
        ]);
        assert!(matches!(res, Err(CatalogError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_category_serde_names() {
        let json = r#"["Research", "Web Apps", "ML Models"]"#;
        let parsed: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, Category::ALL.to_vec());
        assert!(serde_json::from_str::<Category>(r#""Games""#).is_err());
    }

    #[test]
    fn test_catalog_deserialize_checks_ids() {
        let p = serde_json::to_value(project("dup", Category::Research)).unwrap();
        let json = serde_json::Value::Array(vec![p.clone(), p]);
        let err = serde_json::from_value::<Catalog>(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate project id: dup"));
    }

    #[test]
    fn test_card_stack() {
        let mut p = project("x", Category::Research);
        assert_eq!(p.card_stack().len(), 1);
        assert_eq!(p.hidden_stack_count(), 0);

        p.stack = ["A", "B", "C", "D", "E"].map(String::from).to_vec();
        assert_eq!(p.card_stack(), &["A", "B", "C"]);
        assert_eq!(p.hidden_stack_count(), 2);
    }

    #[test]
    fn test_get() {
        let catalog = &content().projects;
        let p = catalog.get("proactive-wellness").expect("project should exist");
        assert_eq!(p.category, Category::WebApps);
        assert!(catalog.get("missing").is_none());
    }
}
