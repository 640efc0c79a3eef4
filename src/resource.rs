use std::fmt;
use std::str::FromStr;

/// The collections exposed under `/api`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    ResearchProjects,
    Publications,
    Experiences,
    ContactMessages,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::ResearchProjects,
        Resource::Publications,
        Resource::Experiences,
        Resource::ContactMessages,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            Resource::ResearchProjects => "research-projects",
            Resource::Publications => "publications",
            Resource::Experiences => "experiences",
            Resource::ContactMessages => "contact-messages",
        }
    }

    /// Name used in "not found" messages.
    pub const fn singular(self) -> &'static str {
        match self {
            Resource::ResearchProjects => "Research project",
            Resource::Publications => "Publication",
            Resource::Experiences => "Experience",
            Resource::ContactMessages => "Contact message",
        }
    }

    /// Only contact messages can be created over HTTP.
    pub const fn accepts_create(self) -> bool {
        matches!(self, Resource::ContactMessages)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown resource {0:?}")]
pub struct UnknownResource(pub String);

impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim_matches('/');
        Resource::ALL
            .into_iter()
            .find(|r| r.slug() == slug)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}
