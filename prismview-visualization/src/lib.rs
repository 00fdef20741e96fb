//! Window frontend for prismview
//!
//! Opens a winit window, maps physical keys onto the scene's key set and
//! drives the interaction loop with the wgpu renderer.

pub mod keymap;
pub mod viewer;

pub use keymap::{map_key_code, map_physical_key};
pub use viewer::{PrismViewer, ViewerConfig};

use prismview_core::{MeshBuffer, Result, Scene};

/// Show `mesh` in an interactive window with a default scene
pub fn show_prism(mesh: MeshBuffer) -> Result<()> {
    PrismViewer::new(ViewerConfig::default(), Scene::default(), mesh).run()
}
