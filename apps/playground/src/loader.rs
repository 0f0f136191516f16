//! Load phase: runs once, before the frame loop starts.
//!
//! Fetches the rune JSON, downloads and decodes every icon, and hands back a
//! `SceneData` whose image table is already marked ready. Any failure here is
//! terminal for the sketch.

use anyhow::{Context, Result};
use macroquad::prelude::{Image, Texture2D};
use reqwest::blocking::Client;
use rune_canvas::model::{RuneTree, SceneData};
use url::Url;

use crate::settings::Settings;

pub fn load_scene(settings: &Settings) -> Result<SceneData<Texture2D>> {
    let client = Client::new();

    let runes = fetch_runes(&client, &settings.runes_url)?;
    tracing::info!(
        paths = runes.len(),
        url = %settings.runes_url,
        "Fetched rune data"
    );

    let mut scene = SceneData::new(runes);
    let icons = scene.runes.icon_urls(&settings.icon_base)?;
    for (key, url) in icons {
        let texture = fetch_texture(&client, &url)?;
        scene.images.insert(key, texture)?;
        tracing::debug!(%key, %url, "Loaded icon");
    }

    scene.images.mark_ready(&scene.runes)?;
    Ok(scene)
}

fn fetch_runes(client: &Client, url: &str) -> Result<RuneTree> {
    let body = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .with_context(|| format!("Failed to fetch rune data from {url}"))?;

    RuneTree::from_json(&body).with_context(|| format!("Invalid rune data from {url}"))
}

fn fetch_texture(client: &Client, url: &Url) -> Result<Texture2D> {
    let bytes = client
        .get(url.clone())
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.bytes())
        .with_context(|| format!("Failed to fetch icon {url}"))?;

    let image = Image::from_file_with_format(&bytes, None)
        .map_err(|e| anyhow::anyhow!("Failed to decode icon {url}: {e:?}"))?;
    Ok(Texture2D::from_image(&image))
}
