use anyhow::Context;
use pinfit::{
    constants::DEFAULT_VIEWPORT_SIZE, MapEvent, MapOptions, SessionBuilder, SurfaceEvent,
};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Replay script: surface events fed through a headless map
#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default)]
    options: MapOptions,
    #[serde(default)]
    viewport: Option<ViewportSize>,
    events: Vec<SurfaceEvent>,
}

#[derive(Debug, Deserialize)]
struct ViewportSize {
    width: f64,
    height: f64,
}

/// One output line per applied camera
#[derive(Debug, Serialize)]
struct CameraReport<'a> {
    marker: &'a str,
    marker_count: usize,
    directive: pinfit::CameraDirective,
    camera: pinfit::CameraPosition,
}

/// Replays a tap script (file argument or stdin) and prints each camera fit as JSON
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let source = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read script {path}"))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read script from stdin")?;
            buffer
        }
    };

    let script: Script = serde_json::from_str(&source).context("invalid script")?;
    let (width, height) = script
        .viewport
        .map(|v| (v.width, v.height))
        .unwrap_or(DEFAULT_VIEWPORT_SIZE);

    let mut session = SessionBuilder::new()
        .with_options(script.options)
        .with_viewport_size(width, height)
        .build_headless()?;

    for event in script.events {
        let Some(directive) = session.dispatch(event)? else {
            continue;
        };

        let markers = session.store();
        let label = markers
            .iter()
            .last()
            .map(|m| m.label())
            .unwrap_or_default();
        let report = CameraReport {
            marker: label,
            marker_count: markers.count(),
            directive,
            camera: session.surface().camera(),
        };
        println!("{}", serde_json::to_string(&report)?);
    }

    let dropped = session
        .process_events()
        .iter()
        .filter(|e| matches!(e, MapEvent::TapDropped { .. }))
        .count();
    if dropped > 0 {
        log::warn!("{dropped} tap(s) arrived before the map was ready");
    }
    log::info!("placed {} marker(s)", session.count());

    Ok(())
}
