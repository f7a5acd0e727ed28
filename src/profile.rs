//! Profile fields and file selections collected from the user.

use std::path::PathBuf;

use crate::encode::DataUrl;
use crate::error::{Error, Result};

/// The text fields of a portfolio, read once per generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Display name, used in the page title, navbar brand, and greeting.
    pub name: String,
    /// Short biography shown in the About section.
    pub bio: String,
    /// Skill labels, one progress bar each.
    pub skills: Vec<String>,
    /// Project links, one list entry each.
    pub projects: Vec<String>,
    /// Contact details shown in the Contact section.
    pub contact: String,
}

impl Profile {
    /// Build a profile from raw form values.
    ///
    /// `skills` and `projects` are comma-separated lists; each entry is
    /// trimmed but empty entries are preserved, so `"a,,b"` keeps the empty
    /// middle entry. See [`split_list`].
    pub fn from_form(
        name: &str,
        bio: &str,
        skills: &str,
        projects: &str,
        contact: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            bio: bio.to_string(),
            skills: split_list(skills),
            projects: split_list(projects),
            contact: contact.to_string(),
        }
    }

    /// Presence check for every field, run before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingInput`] naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MissingInput("name"));
        }
        if self.bio.is_empty() {
            return Err(Error::MissingInput("bio"));
        }
        if self.skills.is_empty() {
            return Err(Error::MissingInput("skills"));
        }
        if self.projects.is_empty() {
            return Err(Error::MissingInput("projects"));
        }
        if self.contact.is_empty() {
            return Err(Error::MissingInput("contact"));
        }
        Ok(())
    }
}

/// Split a comma-separated list into trimmed entries.
///
/// Empty entries are kept as-is rather than filtered, so a trailing comma
/// yields a trailing empty entry:
///
/// ```rust
/// use folio_gen::split_list;
///
/// assert_eq!(split_list("a, b, c"), vec!["a", "b", "c"]);
/// assert_eq!(split_list("a,,b"), vec!["a", "", "b"]);
/// ```
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Paths to the three required uploads. Exactly one of each; none is
/// retained after encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    /// Profile photo shown in the Home section.
    pub photo: PathBuf,
    /// Resume linked from the About section.
    pub resume: PathBuf,
    /// Background image for the full-viewport sections.
    pub background: PathBuf,
}

/// The three uploads resolved to embeddable data URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAssets {
    pub photo: DataUrl,
    pub resume: DataUrl,
    pub background: DataUrl,
}
