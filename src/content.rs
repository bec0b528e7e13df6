use serde::Deserialize;
use std::collections::HashSet;

use crate::error::ContentError;
use crate::interaction::SectionId;

const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.json");

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub role: String,
    pub location: String,
    pub summary: String,
    pub resume_ref: String,
}

impl Profile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub period: String,
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Experience {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub summary: String,
    pub tooltip: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub link_ref: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    pub tooltip: String,
    /// Set for links that are also shown in the hero, with their own label.
    #[serde(default)]
    pub hero_tooltip: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub links: Vec<ContactLink>,
}

/// Read-only page content. Rendered as is, never mutated.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub profile: Profile,
    pub sections: Vec<Section>,
    pub about: Vec<String>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub contact: Contact,
}

impl Portfolio {
    /// Contact links featured in the hero, paired with their hero tooltip.
    pub fn hero_links(&self) -> impl Iterator<Item = (&ContactLink, &str)> {
        self.contact
            .links
            .iter()
            .filter_map(|link| link.hero_tooltip.as_deref().map(|tooltip| (link, tooltip)))
    }

    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Self = serde_json::from_str(raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for (index, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(ContentError::EmptySectionId(index));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(ContentError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(())
    }

    /// Section identifiers in document order.
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections
            .iter()
            .map(|section| SectionId::new(section.id.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_lists_sections_in_page_order() {
        let portfolio = Portfolio::embedded().expect("embedded content is valid");

        let ids: Vec<String> = portfolio
            .section_ids()
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(
            ids,
            ["home", "about", "education", "experience", "skills", "projects"]
        );
        assert_eq!(portfolio.projects.len(), 3);
        assert!(portfolio.projects.iter().all(|project| !project.tags.is_empty()));
        assert_eq!(portfolio.profile.first_name(), "Sanjay");
    }

    #[test]
    fn hero_links_use_their_own_tooltips() {
        let portfolio = Portfolio::embedded().expect("embedded content is valid");

        let hero: Vec<(&str, &str)> = portfolio
            .hero_links()
            .map(|(link, tooltip)| (link.label.as_str(), tooltip))
            .collect();
        assert_eq!(
            hero,
            [("GitHub", "View my GitHub"), ("LinkedIn", "Connect on LinkedIn")]
        );

        let footer: Vec<&str> = portfolio
            .contact
            .links
            .iter()
            .map(|link| link.tooltip.as_str())
            .collect();
        assert_eq!(
            footer,
            ["Send me an email", "Check out my GitHub", "Connect with me on LinkedIn"]
        );
    }

    #[test]
    fn duplicate_section_is_rejected() {
        let raw = r#"{"sections": [{"id": "home", "label": "Home"}, {"id": "home", "label": "Again"}]}"#;

        let error = Portfolio::from_json(raw).expect_err("duplicate ids must fail");
        assert!(matches!(error, ContentError::DuplicateSection(id) if id == "home"));
    }

    #[test]
    fn blank_section_id_is_rejected() {
        let raw = r#"{"sections": [{"id": "home", "label": "Home"}, {"id": "  ", "label": "Blank"}]}"#;

        let error = Portfolio::from_json(raw).expect_err("blank ids must fail");
        assert!(matches!(error, ContentError::EmptySectionId(1)));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let error = Portfolio::from_json("{\"sections\": [").expect_err("truncated JSON");
        assert!(matches!(error, ContentError::Parse(_)));
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let portfolio = Portfolio::from_json("{}").expect("empty object is valid");
        assert!(portfolio.section_ids().is_empty());
        assert_eq!(portfolio, Portfolio::default());
    }
}
