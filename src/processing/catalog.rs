//! Fixed keyword catalogs used by the analysis stages
//!
//! Catalog order is part of the skill matcher's contract: matched skills are
//! reported in catalog order, so entries are grouped by category rather than
//! sorted.

/// Recognized skill tokens in canonical lowercase spelling.
pub const SKILL_CATALOG: &[&str] = &[
    // Programming languages
    "javascript",
    "typescript",
    "python",
    "java",
    "c++",
    "c#",
    "golang",
    "rust",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    "sql",
    // Web technologies
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "svelte",
    "node.js",
    "next.js",
    "express",
    "django",
    "flask",
    "spring",
    "graphql",
    "rest",
    // Data stores
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "elasticsearch",
    "sqlite",
    // Cloud and infrastructure
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "git",
    "linux",
    "ci/cd",
    // Data platforms
    "machine learning",
    "data analysis",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "spark",
    "kafka",
    // Ways of working
    "agile",
    "scrum",
    "project management",
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "mentoring",
];

/// Substrings that mark a line as describing an education credential.
/// Containment is checked on the lowercased line, not on word boundaries.
pub const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "mba", "b.sc", "ms", "doctor",
];

/// Job-title words that qualify a line as an experience line.
pub const ROLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "designer",
    "analyst",
    "consultant",
    "intern",
    "lead",
    "director",
];

/// Headings whose whole-word presence marks the document as sectioned.
pub const SECTION_HEADINGS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "summary",
    "certifications",
];

/// Literal substrings that indicate contact information.
pub const CONTACT_MARKERS: &[&str] = &["@", "www.", "linkedin.com", "tel:"];
