//! Works categories and project arrays

use super::{Project, ProjectStatus};

/// The two project collections reachable from `/works`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorksCategory {
    Freelance,
    Academic,
}

impl WorksCategory {
    pub const ALL: [WorksCategory; 2] = [WorksCategory::Freelance, WorksCategory::Academic];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Freelance => "Freelance Projects",
            Self::Academic => "Academic Projects",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Freelance => {
                "Professional design work and creative projects delivered for clients"
            }
            Self::Academic => {
                "Engineering and technical projects developed during academic studies"
            }
        }
    }

    /// Heading used in the home page projects section
    pub fn section_heading(&self) -> &'static str {
        match self {
            Self::Freelance => "Personal/Freelance Projects",
            Self::Academic => "Academic Projects",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Freelance => "/works/freelance",
            Self::Academic => "/works/academic",
        }
    }

    pub fn projects(&self) -> &'static [Project] {
        match self {
            Self::Freelance => FREELANCE_PROJECTS,
            Self::Academic => ACADEMIC_PROJECTS,
        }
    }
}

pub static FREELANCE_PROJECTS: &[Project] = &[
    Project {
        title: "UXcel Mobile App Redesign",
        year: "2025",
        summary: "Complete UI/UX redesign of the UXcel mobile application with modern design principles and enhanced user experience.",
        description: "Led a comprehensive redesign of the UXcel mobile application, focusing on modern design principles, improved user flows, and enhanced visual hierarchy. Created interactive prototypes and design systems to ensure consistency across all screens.",
        technologies: &["Figma", "UI/UX Design", "Prototyping"],
        status: ProjectStatus::Completed,
        featured: true,
        achievements: &[
            "Modern design system",
            "Enhanced user experience",
            "Interactive prototypes",
        ],
    },
    Project {
        title: "Logo & Brand Identity for Varsity Clubs",
        year: "2025",
        summary: "Complete brand package development including logo design, color schemes, and brand guidelines for university clubs.",
        description: "Developed comprehensive brand identity packages for multiple university clubs, including logo design, color palettes, typography guidelines, and brand application examples. Ensured each brand reflected the unique personality and values of the respective clubs.",
        technologies: &["Illustrator", "Photoshop", "Brand Design"],
        status: ProjectStatus::Completed,
        featured: false,
        achievements: &[
            "Complete brand package",
            "Modern visual identity",
            "Brand guidelines",
        ],
    },
];

pub static ACADEMIC_PROJECTS: &[Project] = &[
    Project {
        title: "Arduino Nano Design with Altium Designer",
        year: "2024",
        summary: "Comprehensive circuit analysis and design using advanced PCB design tools, Altium Designer.",
        description: "Designed and developed a complete Arduino Nano PCB using Altium Designer, including schematic design, PCB layout, and component selection. Applied advanced circuit analysis techniques and optimization strategies to achieve optimal performance.",
        technologies: &["Altium Designer", "Multisim", "Circuit Analysis"],
        status: ProjectStatus::Completed,
        featured: true,
        achievements: &[
            "Optimized filter response by 40%",
            "Comprehensive frequency analysis",
            "Professional documentation",
        ],
    },
    Project {
        title: "Basic Microcontroller Programming",
        year: "2024",
        summary: "Arduino-based microcontroller programming project featuring real-time display control and multiplexing techniques.",
        description: "Developed Arduino-based embedded systems with real-time display control capabilities. Implemented efficient multiplexing techniques for managing multiple displays and sensors while maintaining optimal performance and clean code architecture.",
        technologies: &["Arduino", "C++", "Electronics"],
        status: ProjectStatus::Completed,
        featured: false,
        achievements: &[
            "Real-time data control",
            "Efficient multiplexing",
            "Clean code architecture",
        ],
    },
    Project {
        title: "Prototype UAV Navigation System",
        year: "2025 - Ongoing",
        summary: "Developing autonomous navigation features for drone systems with advanced sensor integration and flight control algorithms.",
        description: "Currently developing an autonomous UAV navigation system with advanced sensor integration including GPS, IMU, and obstacle detection sensors. Implementing sophisticated flight control algorithms for stable autonomous flight and waypoint navigation.",
        technologies: &["Arduino", "Sensors", "Navigation", "C++"],
        status: ProjectStatus::Ongoing,
        featured: false,
        achievements: &[
            "Autonomous navigation features",
            "Advanced sensor integration",
            "Real-time flight control",
        ],
    },
    Project {
        title: "Automation with AI Agents",
        year: "2025 - Ongoing",
        summary: "Working with AI Agents and advanced automation applications like n8n.",
        description: "Exploring the integration of AI agents with automation platforms to create intelligent workflows. Developing systems that can analyze data, make decisions, and execute complex automation sequences using n8n and other modern automation tools.",
        technologies: &["Automation", "AI Agent", "Data Analysis"],
        status: ProjectStatus::Ongoing,
        featured: true,
        achievements: &[
            "Data analysis with automation",
            "Automation with n8n",
            "Optimization strategies",
        ],
    },
];
