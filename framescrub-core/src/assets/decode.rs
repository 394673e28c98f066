use std::sync::Arc;

use anyhow::Context;

use crate::{
    assets::frame_set::{FrameOrigin, PreparedFrame},
    foundation::error::{FramescrubError, FramescrubResult},
};

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_frame(bytes: &[u8]) -> FramescrubResult<PreparedFrame> {
    let dyn_img = image::load_from_memory(bytes).context("decode frame from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(FramescrubError::asset("decoded frame has zero size"));
    }

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedFrame {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
        origin: FrameOrigin::Decoded,
    })
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 255 {
            continue;
        }
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
