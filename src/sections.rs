#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Education,
    Skills,
    Projects,
    Research,
    Achievements,
    Experience,
    Certifications,
    Vault,
    Blog,
    Speaking,
    Testimonials,
    Contact,
}

impl Section {
    /// Every section, in page order.
    pub const ALL: [Section; 14] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Research,
        Section::Achievements,
        Section::Experience,
        Section::Certifications,
        Section::Vault,
        Section::Blog,
        Section::Speaking,
        Section::Testimonials,
        Section::Contact,
    ];

    pub const HEADER_NAV: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Research,
        Section::Experience,
        Section::Contact,
    ];

    pub const FOOTER_NAV: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section, used as the scroll target and `#` anchor.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Research => "research",
            Section::Achievements => "achievements",
            Section::Experience => "experience",
            Section::Certifications => "certifications",
            Section::Vault => "vault",
            Section::Blog => "blog",
            Section::Speaking => "speaking",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About Me",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Projects => "Projects & Case Studies",
            Section::Research => "Research & Publications",
            Section::Achievements => "Achievements & Awards",
            Section::Experience => "Experience & Internships",
            Section::Certifications => "Certifications & Courses",
            Section::Vault => "Document Vault",
            Section::Blog => "Blog / Writing",
            Section::Speaking => "Speaking / Workshops",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact Me",
        }
    }

    /// Short label for navigation links.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Research => "Research",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
            s => s.title(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique_and_ordered() {
        let ids = Section::ALL.iter().map(|s| s.id()).collect::<Vec<_>>();
        assert_eq!(ids.first(), Some(&"home"));
        assert_eq!(ids.last(), Some(&"contact"));
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }

    #[test]
    fn test_nav_labels() {
        let labels = Section::HEADER_NAV
            .iter()
            .map(|s| s.nav_label())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["Home", "About", "Projects", "Research", "Experience", "Contact"]
        );
        assert_eq!(Section::Vault.href(), "#vault");
    }
}
