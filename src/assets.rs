//! Images, sounds and fonts. Every asset is optional: whatever fails to load
//! is logged once and drawn or played through a fallback.

use std::collections::HashMap;

use ggez::audio::{self, SoundSource};
use ggez::graphics::{FontData, Image};
use ggez::Context;

use crate::controller::Cue;
use crate::orientation::SpriteKind;
use crate::skin::Skin;

pub const FONT_NAME: &str = "PoetsenOne";
const FONT_PATH: &str = "/Font/PoetsenOne-Regular.ttf";
const CRUNCH_PATH: &str = "/Sound/crunch.wav";
const MENU_SELECT_PATH: &str = "/Sound/menu_select.wav";

/// Snake sprites for one skin.
pub struct SpriteSet {
    skin: Skin,
    images: HashMap<SpriteKind, Image>,
}

impl SpriteSet {
    pub fn load(ctx: &mut Context, skin: Skin) -> Self {
        let images = SpriteKind::ALL
            .into_iter()
            .filter_map(|kind| {
                load_image(ctx, &skin.image_candidates(kind.asset_name())).map(|img| (kind, img))
            })
            .collect();
        SpriteSet { skin, images }
    }

    pub fn skin(&self) -> Skin {
        self.skin
    }

    pub fn get(&self, kind: SpriteKind) -> Option<&Image> {
        self.images.get(&kind)
    }
}

pub struct Sounds {
    crunch: Option<audio::Source>,
    menu_select: Option<audio::Source>,
}

impl Sounds {
    pub fn load(ctx: &mut Context) -> Self {
        Sounds {
            crunch: load_sound(ctx, CRUNCH_PATH),
            menu_select: load_sound(ctx, MENU_SELECT_PATH),
        }
    }

    /// Plays the sound behind `cue`, if it was loaded.
    pub fn play(&mut self, ctx: &mut Context, cue: Cue) {
        let source = match cue {
            Cue::FruitEaten => self.crunch.as_mut(),
            Cue::MenuSelect => self.menu_select.as_mut(),
        };
        if let Some(source) = source {
            if let Err(e) = source.play_detached(ctx) {
                log::warn!("Failed to play {cue:?}: {e}");
            }
        }
    }
}

pub struct Assets {
    pub sprites: SpriteSet,
    pub apple: Option<Image>,
    pub sounds: Sounds,
    /// Registered font name, `None` means the ggez default font.
    pub font: Option<&'static str>,
}

impl Assets {
    pub fn load(ctx: &mut Context, skin: Skin) -> Self {
        let sprites = SpriteSet::load(ctx, skin);
        let apple = load_image(ctx, &Skin::Classic.image_candidates("apple"));
        let sounds = Sounds::load(ctx);
        let font = load_font(ctx);
        log::info!(
            "Loaded {} of {} snake sprites",
            sprites.images.len(),
            SpriteKind::ALL.len()
        );
        Assets {
            sprites,
            apple,
            sounds,
            font,
        }
    }

    /// Reloads the snake sprites when the selected skin changed.
    pub fn sync_skin(&mut self, ctx: &mut Context, skin: Skin) {
        if self.sprites.skin() != skin {
            self.sprites = SpriteSet::load(ctx, skin);
        }
    }
}

fn load_image(ctx: &mut Context, candidates: &[String]) -> Option<Image> {
    for name in candidates {
        let path = format!("/Graphics/{name}");
        match Image::from_path(ctx, &path) {
            Ok(image) => return Some(image),
            Err(e) => log::debug!("Could not load {path}: {e}"),
        }
    }
    log::warn!("Missing image {}, drawing a placeholder", candidates.join(" / "));
    None
}

fn load_sound(ctx: &mut Context, path: &str) -> Option<audio::Source> {
    match audio::Source::new(ctx, path) {
        Ok(source) => Some(source),
        Err(e) => {
            log::warn!("Missing sound {path}, it will stay silent: {e}");
            None
        }
    }
}

fn load_font(ctx: &mut Context) -> Option<&'static str> {
    match FontData::from_path(ctx, FONT_PATH) {
        Ok(data) => {
            ctx.gfx.add_font(FONT_NAME, data);
            Some(FONT_NAME)
        }
        Err(e) => {
            log::warn!("Missing font {FONT_PATH}, using the default font: {e}");
            None
        }
    }
}
