//! Render sink interface
//!
//! The session hands over positions and sprite handles once per tick; how
//! they reach the screen is the sink's business.

use glam::Vec2;

use crate::assets::{AssetSet, SpriteHandle};
use crate::sim::SessionState;

/// Heads-up display values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub score: u64,
    pub lap: u32,
    pub elapsed_secs: u64,
}

/// Consumer of one frame of draw calls
pub trait RenderSink {
    fn draw_background(&mut self, background: &SpriteHandle);
    /// `pos` is the sprite center, `rotation` in degrees (0 = up-screen)
    fn draw_entity(&mut self, pos: Vec2, rotation: f32, sprite: &SpriteHandle);
    fn draw_hud(&mut self, hud: &Hud);
    /// Flip the finished frame to the screen
    fn present(&mut self);
}

/// Submit the current session state: background, player, traffic, HUD, present
pub fn render_frame(
    sink: &mut dyn RenderSink,
    state: &SessionState,
    assets: &AssetSet,
    hud: &Hud,
) {
    sink.draw_background(&assets.background);
    sink.draw_entity(state.player.pos, state.player.heading, &assets.player);
    for enemy in state.enemies.iter() {
        sink.draw_entity(enemy.pos, enemy.heading, &assets.enemy);
    }
    sink.draw_hud(hud);
    sink.present();
}

/// Headless sink: counts draw calls and logs the HUD periodically
#[derive(Debug)]
pub struct LogRenderer {
    /// Log the HUD every this many presented frames (0 = never)
    log_every: u64,
    frames: u64,
    entities: usize,
    last_hud: Hud,
}

impl LogRenderer {
    pub fn new(log_every: u64) -> Self {
        Self {
            log_every,
            frames: 0,
            entities: 0,
            last_hud: Hud::default(),
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_hud(&self) -> Hud {
        self.last_hud
    }
}

impl RenderSink for LogRenderer {
    fn draw_background(&mut self, _background: &SpriteHandle) {
        self.entities = 0;
    }

    fn draw_entity(&mut self, pos: Vec2, rotation: f32, sprite: &SpriteHandle) {
        log::trace!("draw {:?} at ({:.1}, {:.1}) rot {:.1}", sprite, pos.x, pos.y, rotation);
        self.entities += 1;
    }

    fn draw_hud(&mut self, hud: &Hud) {
        self.last_hud = *hud;
    }

    fn present(&mut self) {
        self.frames += 1;
        if self.log_every > 0 && self.frames % self.log_every == 0 {
            log::debug!(
                "Score: {}  Lap: {}  Time: {}s  ({} cars on screen)",
                self.last_hud.score,
                self.last_hud.lap,
                self.last_hud.elapsed_secs,
                self.entities
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl RenderSink for Recorder {
        fn draw_background(&mut self, _: &SpriteHandle) {
            self.0.push("background".into());
        }
        fn draw_entity(&mut self, pos: Vec2, rotation: f32, _: &SpriteHandle) {
            self.0.push(format!("entity {} {} {}", pos.x, pos.y, rotation));
        }
        fn draw_hud(&mut self, hud: &Hud) {
            self.0.push(format!("hud {} {} {}", hud.score, hud.lap, hud.elapsed_secs));
        }
        fn present(&mut self) {
            self.0.push("present".into());
        }
    }

    #[test]
    fn test_frame_order() {
        let config = Config::default();
        let mut state = SessionState::new(&config, 1);
        state
            .enemies
            .spawn_at(Vec2::new(150.0, 20.0), config.sprite_size());

        let mut sink = Recorder::default();
        let hud = Hud {
            score: 30,
            lap: 0,
            elapsed_secs: 4,
        };
        render_frame(&mut sink, &state, &AssetSet::placeholders(), &hud);

        assert_eq!(
            sink.0,
            vec![
                "background",
                "entity 400 500 0",
                "entity 150 20 180",
                "hud 30 0 4",
                "present",
            ]
        );
    }

    #[test]
    fn test_log_renderer_counts_frames() {
        let config = Config::default();
        let state = SessionState::new(&config, 1);
        let mut sink = LogRenderer::new(60);
        let hud = Hud {
            score: 10,
            ..Default::default()
        };
        for _ in 0..3 {
            render_frame(&mut sink, &state, &AssetSet::placeholders(), &hud);
        }
        assert_eq!(sink.frames(), 3);
        assert_eq!(sink.last_hud(), hud);
    }
}
