//! Per-frame driver tying input, scene and renderer together

use crate::error::Result;
use crate::input::{InputSource, Key};
use crate::scene::Scene;
use crate::traits::SceneRenderer;

/// What the caller should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Exit,
}

/// Run one frame.
///
/// Press transitions recorded since the previous frame are applied first,
/// then the scene ticks, held keys are polled, the view is refreshed and the
/// renderer draws. Holding Escape ends the loop without drawing.
pub fn run_frame<I, R>(
    scene: &mut Scene,
    input: &mut I,
    renderer: &mut R,
    viewport: (u32, u32),
) -> Result<FrameStatus>
where
    I: InputSource + ?Sized,
    R: SceneRenderer + ?Sized,
{
    let presses = input.consume_edge_events();
    scene.handle_key_presses(&presses);

    if input.is_held(Key::Escape) {
        log::info!("Escape pressed, exiting");
        return Ok(FrameStatus::Exit);
    }

    let frame = scene.advance(&*input, viewport);
    renderer.draw(&frame)?;

    Ok(FrameStatus::Continue)
}
