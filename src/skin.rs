//! Player-selectable sprite sets. Purely presentational.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Skin {
    #[default]
    Classic,
    Alternate,
}

impl Skin {
    pub fn toggled(&self) -> Self {
        match self {
            Skin::Classic => Skin::Alternate,
            Skin::Alternate => Skin::Classic,
        }
    }

    /// 1-based number shown in the menu.
    pub fn number(&self) -> u8 {
        match self {
            Skin::Classic => 1,
            Skin::Alternate => 2,
        }
    }

    /// Image files to try for `stem`, preferred first. The other skin's file
    /// is the fallback.
    pub fn image_candidates(&self, stem: &str) -> [String; 2] {
        let plain = format!("{stem}.png");
        let alternate = format!("skin2_{stem}.png");
        match self {
            Skin::Classic => [plain, alternate],
            Skin::Alternate => [alternate, plain],
        }
    }
}
