//! Static portfolio content
//!
//! Everything shown on the home sections and the works pages lives here as
//! compile-time data.

mod sections;
mod works;

pub use sections::*;
pub use works::*;

/// Name shown in the navigation bar, splash and footer
pub const OWNER_NAME: &str = "Sheikh Azwad Abrar";

/// Address listed as the direct email channel
pub const DIRECT_EMAIL: &str = "azwadabrar109@gmail.com";

/// Completion state of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    Ongoing,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Ongoing => "ongoing",
        }
    }
}

/// A single portfolio project
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub year: &'static str,
    /// One-line summary for cards
    pub summary: &'static str,
    /// Full description for the works pages
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub status: ProjectStatus,
    pub featured: bool,
    pub achievements: &'static [&'static str],
}

/// A titled group of skills
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub services: &'static [Service],
}

/// A personal trait shown in the drives section
#[derive(Debug, Clone, Copy)]
pub struct Drive {
    pub title: &'static str,
    pub description: &'static str,
}

/// A way to reach the owner directly
#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

impl ContactChannel {
    /// Web links open externally; mail/tel/anchors do not
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}
