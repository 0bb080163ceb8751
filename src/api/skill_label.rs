use serde::{Deserialize, Serialize};
use tracing::trace;

/// Naming attributes of one skill badge or logo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillAttributes {
    pub data_brand: Option<String>,
    pub title: Option<String>,
    pub aria_label: Option<String>,
}

impl SkillAttributes {
    #[must_use]
    pub fn brand(name: impl Into<String>) -> Self {
        Self {
            data_brand: Some(name.into()),
            ..Self::default()
        }
    }

    /// First non-empty of `data-brand`, `title` and `aria-label`.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        [&self.data_brand, &self.title, &self.aria_label]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|name| !name.is_empty())
    }
}

/// Caption under a skill card naming the hovered or focused skill.
///
/// Hover and keyboard focus share `show`; leaving and blur share `hide`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLabel {
    text: Option<String>,
    visible: bool,
}

impl SkillLabel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the skill's name. A skill without any name changes nothing.
    pub fn show(&mut self, skill: &SkillAttributes) -> bool {
        let Some(name) = skill.display_name() else {
            return false;
        };
        trace!(skill = name, "skill label shown");
        self.text = Some(name.to_owned());
        self.visible = true;
        true
    }

    /// Hides the caption; its text stays for the fade-out.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
