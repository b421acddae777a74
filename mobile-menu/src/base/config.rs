use serde::Deserialize;

use crate::common::{MenuError, MenuResult};

const DEFAULT_MENU_CONTAINER_ID: &str = "mobile-menu";
const DEFAULT_CLOSE_ICON_ID: &str = "close-img";
const DEFAULT_MENU_ICON_ID: &str = "menu-img";
const DEFAULT_TOGGLE_BUTTON_ID: &str = "menu-btn";

const DEFAULT_HIDDEN_CLASS: &str = "hidden";
const DEFAULT_BLOCK_CLASS: &str = "block";

/// Document identifiers of the four elements the menu works with.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub menu_container: String,
    pub close_icon: String,
    pub menu_icon: String,
    pub toggle_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            menu_container: DEFAULT_MENU_CONTAINER_ID.to_string(),
            close_icon: DEFAULT_CLOSE_ICON_ID.to_string(),
            menu_icon: DEFAULT_MENU_ICON_ID.to_string(),
            toggle_button: DEFAULT_TOGGLE_BUTTON_ID.to_string(),
        }
    }
}

/// CSS classes toggled by render. Their visual effect is up to the page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub hidden: String,
    pub block: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            hidden: DEFAULT_HIDDEN_CLASS.to_string(),
            block: DEFAULT_BLOCK_CLASS.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub ids: ElementIds,
    pub classes: ClassNames,
}

impl MenuConfig {
    pub fn from_json(json: &str) -> MenuResult<Self> {
        let config: MenuConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `json` when given, otherwise fall back to the defaults.
    pub fn from_optional_json(json: Option<&str>) -> MenuResult<Self> {
        match json {
            Some(json) if !json.trim().is_empty() => Self::from_json(json),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> MenuResult<()> {
        let ids = [
            ("ids.menuContainer", &self.ids.menu_container),
            ("ids.closeIcon", &self.ids.close_icon),
            ("ids.menuIcon", &self.ids.menu_icon),
            ("ids.toggleButton", &self.ids.toggle_button),
        ];
        for (key, value) in ids {
            if value.is_empty()
                || value.chars().any(|c| c.is_ascii_whitespace())
            {
                return Err(MenuError::InvalidConfig(format!(
                    "{} must be non-empty without whitespace, got {:?}",
                    key, value
                )));
            }
        }

        // DOMTokenList rejects empty tokens and tokens with whitespace
        for (key, value) in [
            ("classes.hidden", &self.classes.hidden),
            ("classes.block", &self.classes.block),
        ] {
            if value.is_empty()
                || value.chars().any(|c| c.is_ascii_whitespace())
            {
                return Err(MenuError::InvalidConfig(format!(
                    "{} must be a single non-empty class token, got {:?}",
                    key, value
                )));
            }
        }

        if self.classes.hidden == self.classes.block {
            return Err(MenuError::InvalidConfig(String::from(
                "classes.hidden and classes.block must differ",
            )));
        }
        Ok(())
    }
}
