use ripple_core::asset::surfaces_from_glb;
use ripple_core::InteractiveSurface;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Asset URL for this page: `?model=` wins over the configured default.
pub fn asset_url(default_url: &str) -> String {
    crate::dom::query_param(crate::constants::MODEL_QUERY_KEY)
        .unwrap_or_else(|| default_url.to_string())
}

pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!(format!("fetch {} failed: {:?}", url, e)))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("unexpected fetch result: {:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {} returned HTTP {}", url, resp.status());
    }
    let promise = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let buf = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!(format!("reading {} failed: {:?}", url, e)))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and decompose the asset into interactive surfaces.
pub async fn load_surfaces(url: &str) -> anyhow::Result<Vec<InteractiveSurface>> {
    let bytes = fetch_bytes(url).await?;
    log::info!("[loader] fetched {} ({} bytes)", url, bytes.len());
    let surfaces = surfaces_from_glb(&bytes, 0)?;
    Ok(surfaces)
}
