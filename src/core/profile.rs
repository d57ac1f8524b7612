//! # Profile
//!
//! The content of the page: who the portfolio belongs to and what each
//! section lists. Loaded from a TOML file, or from the sample bundled into
//! the binary when none is configured.
//!
//! ```text
//! Profile
//! ├── name, taglines, intro, contact details, resume
//! ├── socials[]
//! ├── about { bio, values[] }
//! ├── education[]
//! ├── certifications[]
//! ├── skills[]
//! ├── experience[]
//! ├── projects[]
//! └── footer { headline, pitch }
//! ```
//!
//! Prose fields (`intro`, `about.bio`, `details`) are markdown.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;
use thiserror::Error;

const BUNDLED_PROFILE: &str = include_str!("../../assets/portfolio.toml");

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile I/O error ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("profile parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid profile: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub taglines: Vec<String>,
    #[serde(default)]
    pub intro: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    /// Resume file offered by "Download CV".
    pub resume: Option<PathBuf>,
    /// File name the resume is saved under.
    pub resume_name: Option<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub footer: Footer,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SocialLink {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct About {
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Value {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Education {
    pub level: String,
    pub degree: String,
    pub institute: String,
    pub year: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub details: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0–100.
    pub level: u8,
    #[serde(default)]
    pub description: String,
}

/// Colour band a skill bar is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTier {
    Expert,
    Proficient,
    Familiar,
}

impl Skill {
    pub fn tier(&self) -> SkillTier {
        match self.level {
            86..=u8::MAX => SkillTier::Expert,
            71..=85 => SkillTier::Proficient,
            _ => SkillTier::Familiar,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub dates: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: String,
    #[serde(default)]
    pub details: Vec<String>,
    pub live_link: Option<String>,
    pub source_link: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Footer {
    #[serde(default = "default_footer_headline")]
    pub headline: String,
    #[serde(default)]
    pub pitch: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            headline: default_footer_headline(),
            pitch: String::new(),
        }
    }
}

fn default_footer_headline() -> String {
    "Let's Turn Ideas into Reality".to_string()
}

impl Profile {
    /// Parse and validate a profile from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ProfileError> {
        let profile: Profile = toml::from_str(contents)?;
        profile.validate()?;
        Ok(profile)
    }

    /// The sample profile compiled into the binary.
    pub fn bundled() -> Result<Self, ProfileError> {
        Self::from_toml(BUNDLED_PROFILE)
    }

    /// Load a profile from `path`. A relative `resume` is resolved against
    /// the profile's directory.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let contents = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut profile = Self::from_toml(&contents)?;

        if let Some(resume) = profile.resume.take() {
            let resolved = match path.parent() {
                Some(dir) if resume.is_relative() => dir.join(resume),
                _ => resume,
            };
            profile.resume = Some(resolved);
        }

        info!("Loaded profile '{}' from {}", profile.name, path.display());
        Ok(profile)
    }

    fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::Invalid("name must not be empty".into()));
        }
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ProfileError::Invalid(format!(
                "skill '{}' has level {} (max 100)",
                skill.name, skill.level
            )));
        }
        Ok(())
    }

    /// File name offered when saving the resume. Only the last component of
    /// a configured `resume_name` is kept.
    pub fn resume_file_name(&self) -> String {
        self.resume_name
            .as_deref()
            .and_then(|name| Path::new(name).file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| {
                format!("{}_Resume.pdf", self.name.split_whitespace().collect::<Vec<_>>().join("_"))
            })
    }
}
