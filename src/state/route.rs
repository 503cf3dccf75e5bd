//! Path routing

use crate::content::WorksCategory;
use std::fmt;

/// Home page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Hero,
    About,
    Skills,
    Projects,
    Services,
    Drives,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Services,
        Section::Drives,
        Section::Contact,
    ];

    /// Fragment used in `/#<anchor>` paths
    pub fn anchor(&self) -> &'static str {
        match self {
            Self::Hero => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Services => "services",
            Self::Drives => "drives",
            Self::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About Me",
            Self::Skills => "Skills",
            Self::Projects => "Featured Projects",
            Self::Services => "Services & Solutions",
            Self::Drives => "What Drives Me",
            Self::Contact => "Let's Connect",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// A resolved location in the portfolio
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The home page, optionally anchored at a section
    Home(Option<Section>),
    /// The works landing page
    Works,
    /// One of the works list pages
    WorksList(WorksCategory),
    /// Anything else. Holds the path that was requested.
    NotFound(String),
}

impl Default for Route {
    fn default() -> Self {
        Route::Home(None)
    }
}

impl Route {
    /// Resolve a path. Unknown paths become [`Route::NotFound`]; unknown
    /// anchors on the home page fall back to the top of the page.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let path = if raw.starts_with('/') {
            raw.to_string()
        } else {
            format!("/{raw}")
        };

        let (base, fragment) = match path.split_once('#') {
            Some((base, fragment)) => (base, Some(fragment)),
            None => (path.as_str(), None),
        };
        let base = match base.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match base {
            "/" => Route::Home(fragment.and_then(Section::from_anchor)),
            "/works" => Route::Works,
            "/works/freelance" => Route::WorksList(WorksCategory::Freelance),
            "/works/academic" => Route::WorksList(WorksCategory::Academic),
            _ => Route::NotFound(path),
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home(None) => "/".to_string(),
            Route::Home(Some(section)) => format!("/#{}", section.anchor()),
            Route::Works => "/works".to_string(),
            Route::WorksList(category) => category.path().to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Where a navigation bar item leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Section(Section),
    Route(&'static str),
}

/// An entry in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub target: NavTarget,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        name: "About",
        target: NavTarget::Section(Section::About),
    },
    NavItem {
        name: "Skills",
        target: NavTarget::Section(Section::Skills),
    },
    NavItem {
        name: "Services",
        target: NavTarget::Section(Section::Services),
    },
    NavItem {
        name: "Projects",
        target: NavTarget::Section(Section::Projects),
    },
    NavItem {
        name: "Works",
        target: NavTarget::Route("/works"),
    },
    NavItem {
        name: "Contact",
        target: NavTarget::Section(Section::Contact),
    },
];

impl NavItem {
    /// Whether this item should be highlighted for the given location
    pub fn is_active(&self, route: &Route, section: Section) -> bool {
        match self.target {
            NavTarget::Route(path) => route.path() == path,
            NavTarget::Section(target) => route.is_home() && section == target,
        }
    }
}
