use std::path::PathBuf;

use macroquad::prelude::*;
use parabolic_target::core::config::GameConfig;
use parabolic_target::core::export::{default_snapshot_path, write_png};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::constants::{
    CANVAS_LEFT, CANVAS_TOP, CONFIG_ENV_VAR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    MSAA_SAMPLES, UI_FONT_PATH, WINDOW_BG,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::MacroquadSurface;
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Parabolic Target".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn load_config() -> GameConfig {
    let Some(path) = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) else {
        return GameConfig::default();
    };
    match GameConfig::load(&path) {
        Ok(config) => {
            info!(path = %path.display(), "config loaded");
            config
        }
        Err(err) => {
            warn!(error = %err, "falling back to default config");
            GameConfig::default()
        }
    }
}

fn export_snapshot(state: &AppRuntime) {
    let (w, h) = state.canvas_size();
    let path = default_snapshot_path();
    if let Err(err) = write_png(&state.session.snapshot(w, h), &path) {
        error!(error = %err, "snapshot export failed");
    }
}

pub(crate) async fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new(load_config());

    loop {
        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        state.sync_sliders();

        clear_background(WINDOW_BG);
        let mut surface =
            MacroquadSurface::new(CANVAS_LEFT, CANVAS_TOP, state.canvas_size(), ui_font.as_ref());

        if actions.reset {
            state.session.reset(&mut surface);
        } else {
            if actions.launch {
                state.session.launch();
            }
            state.session.frame(&mut surface);
        }
        surface.draw_border();

        if actions.export {
            export_snapshot(&state);
        }

        draw_hud(&state, ui_font.as_ref());
        next_frame().await;
    }
}
