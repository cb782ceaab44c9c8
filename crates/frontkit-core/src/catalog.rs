//! Static choice tables for each framework wizard
//!
//! The catalog is read-only: every lookup is a pure function over `'static`
//! tables, so it can be shared freely between sessions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical value for "Tailwind enabled, no component library on top"
pub const TAILWIND_ONLY: &str = "tailwind-only";

/// Canonical value for "no styling library at all"
pub const NONE: &str = "none";

/// Target framework, selects which catalog entry applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Astro,
    Vue,
}

impl Framework {
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Astro => "Astro",
            Framework::Vue => "Vue",
        }
    }

    /// Catalog entry for this framework
    pub fn catalog(&self) -> &'static CatalogEntry {
        match self {
            Framework::Astro => &ASTRO,
            Framework::Vue => &VUE,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astro" => Ok(Framework::Astro),
            "vue" | "vuejs" => Ok(Framework::Vue),
            other => Err(format!("Unknown framework: {}", other)),
        }
    }
}

/// Project language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[serde(alias = "javascript")]
    Js,
    #[serde(alias = "typescript")]
    Ts,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ts, Language::Js];

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Js => "JavaScript",
            Language::Ts => "TypeScript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "typescript" | "ts" => Ok(Language::Ts),
            "javascript" | "js" => Ok(Language::Js),
            other => Err(format!("Unknown language: {}", other)),
        }
    }
}

/// Styling approach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylingMode {
    Tailwind,
    Plain,
}

impl StylingMode {
    pub const ALL: [StylingMode; 2] = [StylingMode::Tailwind, StylingMode::Plain];

    pub fn display_name(&self) -> &'static str {
        match self {
            StylingMode::Tailwind => "Tailwind CSS",
            StylingMode::Plain => "Plain CSS",
        }
    }
}

impl fmt::Display for StylingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for StylingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tailwind" | "tailwindcss" | "tw" => Ok(StylingMode::Tailwind),
            "plain" | "css" | "none" => Ok(StylingMode::Plain),
            other => Err(format!("Unknown styling mode: {}", other)),
        }
    }
}

/// One selectable entry in a catalog list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub value: &'static str,
    pub hint: &'static str,
}

const fn choice(label: &'static str, value: &'static str, hint: &'static str) -> Choice {
    Choice { label, value, hint }
}

/// Static tables for one framework
#[derive(Debug)]
pub struct CatalogEntry {
    pub framework: Framework,
    pub default_project_name: &'static str,
    pub tailwind_libraries: &'static [Choice],
    pub plain_libraries: &'static [Choice],
    /// Raw value → canonical value
    pub aliases: &'static [(&'static str, &'static str)],
    /// Libraries that cannot function under plain styling
    pub tailwind_required: &'static [&'static str],
    pub databases: &'static [Choice],
    pub database_aliases: &'static [(&'static str, &'static str)],
}

const SHARED_LIBRARY_ALIASES: &[(&str, &str)] = &[
    ("twonly", TAILWIND_ONLY),
    ("tailwind", TAILWIND_ONLY),
    ("tw", TAILWIND_ONLY),
    ("daisy", "daisyui"),
    ("shadcn-ui", "shadcn"),
    ("shadcn/ui", "shadcn"),
    ("", NONE),
    ("no", NONE),
    ("null", NONE),
];

const SHARED_DATABASE_ALIASES: &[(&str, &str)] = &[
    ("", NONE),
    ("no", NONE),
    ("null", NONE),
    ("astro-db", "astrodb"),
    ("libsql", "astrodb"),
];

const TAILWIND_REQUIRED: &[&str] = &[TAILWIND_ONLY, "daisyui", "shadcn", "flowbite"];

static ASTRO: CatalogEntry = CatalogEntry {
    framework: Framework::Astro,
    default_project_name: "my-astro-site",
    tailwind_libraries: &[
        choice("Tailwind only", TAILWIND_ONLY, "utility classes, no components"),
        choice("daisyUI", "daisyui", "Tailwind component classes"),
        choice("shadcn/ui", "shadcn", "React islands + Tailwind"),
        choice("Flowbite", "flowbite", "Tailwind components"),
    ],
    plain_libraries: &[
        choice("None", NONE, "hand-written CSS"),
        choice("Bootstrap", "bootstrap", ""),
        choice("Pico CSS", "picocss", "classless"),
    ],
    aliases: &[("pico", "picocss"), ("pico-css", "picocss")],
    tailwind_required: TAILWIND_REQUIRED,
    databases: &[
        choice("None", NONE, ""),
        choice("Astro DB", "astrodb", "libSQL via @astrojs/db"),
        choice("Supabase", "supabase", "hosted Postgres client"),
    ],
    database_aliases: &[],
};

static VUE: CatalogEntry = CatalogEntry {
    framework: Framework::Vue,
    default_project_name: "my-vue-app",
    tailwind_libraries: &[
        choice("Tailwind only", TAILWIND_ONLY, "utility classes, no components"),
        choice("daisyUI", "daisyui", "Tailwind component classes"),
        choice("shadcn-vue", "shadcn", "copy-in components"),
        choice("Flowbite Vue", "flowbite", "Tailwind components"),
    ],
    plain_libraries: &[
        choice("None", NONE, "hand-written CSS"),
        choice("Vuetify", "vuetify", "Material Design"),
        choice("Element Plus", "element-plus", ""),
        choice("Naive UI", "naive-ui", ""),
        choice("PrimeVue", "primevue", "styled mode"),
    ],
    aliases: &[
        ("shadcn-vue", "shadcn"),
        ("flowbite-vue", "flowbite"),
        ("element", "element-plus"),
        ("elementplus", "element-plus"),
        ("naive", "naive-ui"),
        ("naiveui", "naive-ui"),
    ],
    tailwind_required: TAILWIND_REQUIRED,
    databases: &[
        choice("None", NONE, ""),
        choice("Supabase", "supabase", "hosted Postgres client"),
    ],
    database_aliases: &[],
};

fn lookup_alias(tables: &[&[(&'static str, &'static str)]], key: &str) -> Option<&'static str> {
    tables
        .iter()
        .flat_map(|table| table.iter())
        .find(|(raw, _)| *raw == key)
        .map(|(_, canonical)| *canonical)
}

impl CatalogEntry {
    /// Ordered library choices offered under a styling mode
    pub fn libraries_for(&self, styling: StylingMode) -> &'static [Choice] {
        match styling {
            StylingMode::Tailwind => self.tailwind_libraries,
            StylingMode::Plain => self.plain_libraries,
        }
    }

    /// Normalize a raw library value. Unknown values pass through (lowercased).
    pub fn canonicalize(&self, raw: &str) -> String {
        let key = raw.trim().to_ascii_lowercase();
        lookup_alias(&[self.aliases, SHARED_LIBRARY_ALIASES], &key)
            .map(str::to_string)
            .unwrap_or(key)
    }

    pub fn requires_tailwind(&self, canonical: &str) -> bool {
        self.tailwind_required.contains(&canonical)
    }

    pub fn is_known_library(&self, canonical: &str) -> bool {
        self.tailwind_libraries
            .iter()
            .chain(self.plain_libraries)
            .any(|c| c.value == canonical)
    }

    /// Concrete library usable without Tailwind (excludes `none`)
    pub fn is_plain_library(&self, canonical: &str) -> bool {
        canonical != NONE && self.plain_libraries.iter().any(|c| c.value == canonical)
    }

    /// Display label for a canonical library value, falling back to the value itself
    pub fn library_label<'a>(&self, canonical: &'a str) -> &'a str {
        self.tailwind_libraries
            .iter()
            .chain(self.plain_libraries)
            .find(|c| c.value == canonical)
            .map(|c| c.label)
            .unwrap_or(canonical)
    }

    pub fn canonicalize_database(&self, raw: &str) -> String {
        let key = raw.trim().to_ascii_lowercase();
        lookup_alias(&[self.database_aliases, SHARED_DATABASE_ALIASES], &key)
            .map(str::to_string)
            .unwrap_or(key)
    }

    pub fn is_known_database(&self, canonical: &str) -> bool {
        self.databases.iter().any(|c| c.value == canonical)
    }

    pub fn database_label<'a>(&self, canonical: &'a str) -> &'a str {
        self.databases
            .iter()
            .find(|c| c.value == canonical)
            .map(|c| c.label)
            .unwrap_or(canonical)
    }
}

/// Ordered library choices for a framework and styling mode
pub fn libraries_for(framework: Framework, styling: StylingMode) -> &'static [Choice] {
    framework.catalog().libraries_for(styling)
}

/// Normalize a raw library value through the framework's alias table
pub fn canonicalize(framework: Framework, raw: &str) -> String {
    framework.catalog().canonicalize(raw)
}
