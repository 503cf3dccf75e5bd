//! Copy for the home page sections

use super::{ContactChannel, Drive, Service, ServiceCategory, SkillCategory, DIRECT_EMAIL};

pub const HERO_BADGE: &str = "Available for opportunities";
pub const HERO_ROLES: &[&str] = &["Aspiring Avionics Engineer &", "Jr. Product Designer"];
pub const HERO_TAGLINE: &str = "Merging engineering precision with creative innovation to build impactful solutions that bridge technology and human experience.";

pub const ABOUT_SUBTITLE: &str = "Where engineering precision meets creative innovation";
pub const ABOUT_STORY: &[&str] = &[
    "I'm currently pursuing my Bachelor's in Avionics Engineering at Aviation And Aerospace University Bangladesh, with an expected graduation in 2028.",
    "My passion lies in the intersection of engineering precision and creative innovation. I believe that the future belongs to professionals who can bridge technical expertise with human-centered design.",
    "Whether I'm designing circuits in Altium Designer, programming microcontrollers, or crafting user interfaces in Figma, I approach every project with the same goal: creating solutions that are both technically sound and delightfully intuitive.",
];
pub const EDUCATION: &[&str] = &[
    "Bachelor's in Avionics Engineering",
    "Aviation And Aerospace University Bangladesh",
    "Expected Graduation: 2028",
];

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        skills: &["React", "TypeScript", "Tailwind CSS", "HTML5", "CSS3", "Framer Motion"],
    },
    SkillCategory {
        title: "Backend Development",
        skills: &["Node.js", "Python", "REST APIs", "GraphQL", "Express"],
    },
    SkillCategory {
        title: "Database",
        skills: &["PostgreSQL", "MongoDB", "Supabase", "MySQL", "Redis"],
    },
    SkillCategory {
        title: "Tools & Others",
        skills: &["Git", "Docker", "AWS", "Figma", "VS Code", "Linux"],
    },
];

pub const PROJECTS_SUBTITLE: &str =
    "A showcase of engineering precision and creative innovation across various domains";

pub const SERVICES_SUBTITLE: &str =
    "Bridging engineering precision with creative innovation across multiple disciplines";

pub static SERVICE_CATEGORIES: &[ServiceCategory] = &[
    ServiceCategory {
        title: "Creative & Design Services",
        description: "Human-centered design with innovative digital solutions",
        services: &[
            Service {
                title: "UI/UX Design",
                description: "Complete user interface and experience design from research to prototype",
                featured: true,
            },
            Service {
                title: "Logo & Brand Identity Design",
                description: "Comprehensive brand identity systems and visual design",
                featured: false,
            },
            Service {
                title: "Web & Mobile App Interface Design",
                description: "Responsive design solutions for web and mobile platforms",
                featured: false,
            },
            Service {
                title: "Graphic Design",
                description: "Visual design solutions for digital and print media",
                featured: false,
            },
        ],
    },
    ServiceCategory {
        title: "Engineering & Technical Services",
        description: "Precision engineering solutions with cutting-edge technology",
        services: &[
            Service {
                title: "Circuit Design & Simulation",
                description: "Professional circuit design and analysis using industry-standard tools",
                featured: true,
            },
            Service {
                title: "Microcontroller Programming",
                description: "Embedded systems programming for various microcontroller platforms",
                featured: false,
            },
            Service {
                title: "Data Analysis & Reporting",
                description: "Comprehensive data analysis and technical documentation",
                featured: false,
            },
            Service {
                title: "Technical Project Support",
                description: "End-to-end technical consultation and project implementation",
                featured: false,
            },
        ],
    },
    ServiceCategory {
        title: "Future Services",
        description: "Expanding expertise in specialized avionics solutions",
        services: &[
            Service {
                title: "Avionics System Modeling & Testing",
                description: "Advanced avionics system design and validation",
                featured: false,
            },
            Service {
                title: "Freelance Consultation",
                description: "Expert consultation bridging engineering and design",
                featured: false,
            },
        ],
    },
];

pub const DRIVES_SUBTITLE: &str = "Core values that shape my approach to engineering and design";

pub static DRIVES: &[Drive] = &[
    Drive {
        title: "Curiosity-Driven",
        description: "Always exploring new technologies and pushing boundaries",
    },
    Drive {
        title: "Precision-Focused",
        description: "Engineering mindset with attention to detail and accuracy",
    },
    Drive {
        title: "Innovation-Minded",
        description: "Creative problem-solving meets technical expertise",
    },
    Drive {
        title: "Collaborative",
        description: "Team player with strong communication and adaptability",
    },
];

pub const CONTACT_SUBTITLE: &str = "Ready to bring your next project to life? Let's discuss how we can merge engineering precision with creative innovation.";

pub static CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: DIRECT_EMAIL,
        href: "mailto:azwadabrar109@gmail.com",
    },
    ContactChannel {
        label: "Phone",
        value: "+880 1823604026",
        href: "tel:+8801823604026",
    },
    ContactChannel {
        label: "LinkedIn",
        value: "Sheikh Azwad Abrar Nabil",
        href: "https://www.linkedin.com/in/sheikh-azwad-abrar-nabil/",
    },
    ContactChannel {
        label: "Location",
        value: "Chattogram, Bangladesh",
        href: "#",
    },
];

pub const AVAILABLE_FOR: &[&str] = &[
    "Engineering consultations",
    "UI/UX design projects",
    "Technical collaborations",
    "Freelance opportunities",
];

pub const FOOTER_TAGLINE: &str =
    "Merging engineering precision with creative innovation to build solutions that matter.";
