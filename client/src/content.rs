//! Static page content: biography, education, skills, projects, links.
//!
//! DESIGN
//! ======
//! Content is plain `'static` value records. The root view reads these
//! slices for its whole lifetime and nothing writes to them, so there is no
//! mutation path to guard.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Decorative glyphs used across the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Code2,
    Sparkles,
    Zap,
    Brain,
    Rocket,
    Database,
    Globe,
    Terminal,
}

impl Icon {
    /// Stable slug used to build the glyph's CSS class.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Code2 => "code-2",
            Self::Sparkles => "sparkles",
            Self::Zap => "zap",
            Self::Brain => "brain",
            Self::Rocket => "rocket",
            Self::Database => "database",
            Self::Globe => "globe",
            Self::Terminal => "terminal",
        }
    }
}

/// Accent color shared by a card's border, icon and highlight text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Indigo,
    Purple,
    Pink,
}

impl Accent {
    /// Class modifier suffix, e.g. `edu-card--purple`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Indigo => "indigo",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }
}

/// In-page navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Section id without the leading `#`.
    pub anchor: &'static str,
}

impl NavLink {
    /// Fragment href, e.g. `#stack`.
    pub fn href(self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Outbound link. The href is passed through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub icon: Icon,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub tech_stack: &'static str,
    pub description: &'static str,
    /// Gradient stops applied to the "Featured" badge, e.g. `purple-600 pink-600`.
    pub accent_gradient: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EducationEntry {
    pub icon: Icon,
    pub title: &'static str,
    pub period: &'static str,
    pub qualification: Option<&'static str>,
    pub field: &'static str,
    pub institution: Option<&'static str>,
    pub board: &'static str,
    pub accent: Accent,
}

/// One "What I Do" bullet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusArea {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const OWNER_NAME: &str = "Jay Thakare";
pub const BRAND: &str = "jay.dev";
pub const PAGE_TITLE: &str = "Jay Thakare | Full-Stack Engineer & AI Architect";

pub const PROFILE_IMAGE: &str = "image.png";
pub const WORKSPACE_IMAGE: &str = "man.jpg";

pub const HERO_HEADLINE: &str = "Full-Stack Engineer";
pub const HERO_SUBHEADLINE: &str = "& AI Architect";
pub const HERO_TAGLINE: &str = "Shipping production-grade applications with modern web frameworks, distributed systems, and cutting-edge AI. Obsessed with performance optimization, clean architecture, and developer experience.";

pub const ABOUT_HEADING: &str = "About Me";
pub const ABOUT_SUBHEADING: &str = "Student, Developer, and AI Enthusiast";

pub const STACK_HEADING: &str = "Technical Expertise";
pub const STACK_SUBHEADING: &str =
    "Enterprise-grade solutions built with industry-leading technologies and best practices";

pub const FOCUS_HEADLINE: &str = "Building the Future";
pub const FOCUS_SUBHEADLINE: &str = "One Line at a Time";

pub const PROJECTS_HEADING: &str = "Featured Projects";
pub const PROJECTS_SUBHEADING: &str = "Production applications serving thousands of users daily";

pub const CONTACT_HEADING: &str = "Let's Build Something Epic";
pub const CONTACT_BODY: &str = "Open to freelance projects, full-time opportunities, and collaboration on innovative ideas. If you're working on something that pushes boundaries, let's connect.";

pub const FOOTER_CREDIT: &str = "Crafted with Rust, Leptos & WebAssembly";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", anchor: "home" },
    NavLink { label: "Stack", anchor: "stack" },
    NavLink { label: "Projects", anchor: "projects" },
    NavLink { label: "Contact", anchor: "contact" },
];

pub const CONTACT_EMAIL: ExternalLink = ExternalLink { label: "Get In Touch", href: "mailto:jay@example.com" };
pub const RESUME: ExternalLink = ExternalLink { label: "Download Resume", href: "#" };

pub const SOCIAL_LINKS: &[ExternalLink] = &[
    ExternalLink { label: "GitHub", href: "#" },
    ExternalLink { label: "LinkedIn", href: "#" },
    ExternalLink { label: "Twitter", href: "#" },
];

pub const SKILLS: &[SkillEntry] = &[
    SkillEntry {
        icon: Icon::Code2,
        name: "React & Next.js",
        description: "Component-based architecture with SSR/SSG",
    },
    SkillEntry {
        icon: Icon::Database,
        name: "Backend Engineering",
        description: "Node.js, PostgreSQL, Redis, microservices",
    },
    SkillEntry {
        icon: Icon::Brain,
        name: "AI/ML Integration",
        description: "TensorFlow, PyTorch, LangChain, RAG systems",
    },
    SkillEntry {
        icon: Icon::Zap,
        name: "Cloud & DevOps",
        description: "AWS, Docker, K8s, CI/CD pipelines",
    },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "AI-Powered SaaS Platform",
        tech_stack: "Next.js, OpenAI API, Stripe, Supabase",
        description: "Built a multi-tenant SaaS with GPT-4 integration, implementing RAG architecture for context-aware responses. Features include real-time collaboration, usage-based billing, and vector embeddings for semantic search. Scaled to 10K+ users with 99.9% uptime.",
        accent_gradient: "purple-600 pink-600",
    },
    ProjectEntry {
        title: "Real-Time Analytics Dashboard",
        tech_stack: "React, WebSockets, D3.js, Apache Kafka",
        description: "Engineered a high-performance dashboard processing 100K+ events/sec using event-driven architecture. Implemented custom data visualization with D3, WebSocket connections for live updates, and Redis caching layer reducing query times by 80%.",
        accent_gradient: "blue-600 cyan-600",
    },
    ProjectEntry {
        title: "ML Model Deployment Pipeline",
        tech_stack: "Python, FastAPI, Docker, MLflow, AWS",
        description: "Designed end-to-end ML pipeline with automated model training, versioning, and A/B testing. Dockerized microservices architecture with Kubernetes orchestration. Reduced deployment time from hours to minutes with CI/CD automation.",
        accent_gradient: "green-600 emerald-600",
    },
];

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        icon: Icon::Terminal,
        title: "Current Education",
        period: "2023 - 2027",
        qualification: Some("Bachelor of Engineering"),
        field: "Computer Science & Engineering (AI & ML)",
        institution: Some("A. P. Shah Institute of Technology"),
        board: "Mumbai University",
        accent: Accent::Indigo,
    },
    EducationEntry {
        icon: Icon::Brain,
        title: "HSC (12th)",
        period: "2023",
        qualification: Some("Science Stream"),
        field: "Smt. CHM College, Ulhasnagar",
        institution: None,
        board: "Maharashtra Board",
        accent: Accent::Purple,
    },
    EducationEntry {
        icon: Icon::Code2,
        title: "SSC (10th)",
        period: "2021",
        qualification: None,
        field: "S.I.C.E.S English High School",
        institution: None,
        board: "Maharashtra Board",
        accent: Accent::Pink,
    },
];

pub const FOCUS_AREAS: &[FocusArea] = &[
    FocusArea {
        icon: Icon::Zap,
        title: "Scalable Architecture",
        description: "Microservices, event-driven systems, and serverless computing for applications that handle millions of requests with horizontal scalability and fault tolerance.",
        accent: Accent::Indigo,
    },
    FocusArea {
        icon: Icon::Brain,
        title: "AI-Native Development",
        description: "Integrating LLMs, implementing RAG pipelines, fine-tuning models, and building intelligent features with OpenAI, Anthropic, and custom ML models in production.",
        accent: Accent::Purple,
    },
    FocusArea {
        icon: Icon::Code2,
        title: "Performance Obsessed",
        description: "Optimizing Core Web Vitals, implementing edge caching, code splitting, lazy loading, and database query optimization for lightning-fast user experiences.",
        accent: Accent::Pink,
    },
];
