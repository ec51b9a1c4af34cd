//! `RenderAdapter` implementation drawing through the D3.js bridge.

use crate::js_bridge;
use anyhow::anyhow;
use oly_data::{ChartFrame, LayerUpdate, Lens, RenderAdapter};

/// Draws the chart into the DOM element with id `container_id`.
pub struct D3Adapter {
    container_id: String,
}

impl D3Adapter {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }
}

impl RenderAdapter for D3Adapter {
    fn mount(&mut self, frame: &ChartFrame) -> anyhow::Result<()> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| anyhow!("no browser document available"))?;
        if document.get_element_by_id(&self.container_id).is_none() {
            anyhow::bail!("chart mount point #{} not found", self.container_id);
        }

        let frame_json = serde_json::to_string(frame)?;
        js_bridge::init_charts();
        js_bridge::mount_chart(&self.container_id, &frame_json);
        log::info!("[OLY] mounted chart into #{}", self.container_id);
        Ok(())
    }

    fn render_layer(&mut self, update: &LayerUpdate<'_>) {
        match serde_json::to_string(update) {
            Ok(json) => js_bridge::apply_layer(&self.container_id, &json),
            Err(e) => log::error!(
                "[OLY] failed to serialize {:?} layer: {}",
                update.style.lens,
                e
            ),
        }
    }

    fn clear_layer(&mut self, lens: Lens) {
        js_bridge::clear_layer(&self.container_id, lens.class_prefix());
    }
}
