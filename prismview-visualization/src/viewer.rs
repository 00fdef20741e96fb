//! Interactive prism viewer
//!
//! Owns the window, the keyboard state and the scene, and drives one
//! [`run_frame`] per redraw.

use std::sync::Arc;
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use prismview_core::{
    run_frame, Error, FrameStatus, KeyboardState, MeshBuffer, Result, Scene, SceneRenderer,
};
use prismview_gpu::{PrismRenderer, RenderConfig};

use crate::keymap::map_physical_key;

/// Window settings
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub render: RenderConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Prismview".to_string(),
            width: 800,
            height: 800,
            render: RenderConfig::default(),
        }
    }
}

/// Interactive viewer for a single prism mesh
pub struct PrismViewer {
    config: ViewerConfig,
    scene: Scene,
    mesh: MeshBuffer,
}

impl PrismViewer {
    /// Create a new viewer for `mesh`, driven by `scene`
    pub fn new(config: ViewerConfig, scene: Scene, mesh: MeshBuffer) -> Self {
        Self {
            config,
            scene,
            mesh,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Open the window and run until it is closed or Escape is held
    pub fn run(self) -> Result<()> {
        let Self {
            config,
            mut scene,
            mesh,
        } = self;

        log::info!("Starting {} ({}x{})", config.title, config.width, config.height);

        let event_loop = EventLoop::new()
            .map_err(|e| Error::Visualization(format!("Failed to create event loop: {}", e)))?;
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(config.title.as_str())
                .with_inner_size(PhysicalSize::new(config.width, config.height))
                .build(&event_loop)
                .map_err(|e| Error::Visualization(format!("Failed to create window: {}", e)))?,
        );

        let mut renderer =
            pollster::block_on(PrismRenderer::new(window.clone(), config.render.clone()))?;
        renderer.upload(&mesh)?;

        let size = window.inner_size();
        let mut viewport = (size.width, size.height);
        let mut keyboard = KeyboardState::new();
        let mut failure: Option<Error> = None;

        event_loop
            .run(|event, target| {
                target.set_control_flow(ControlFlow::Poll);

                match event {
                    Event::WindowEvent { event, .. } => match event {
                        WindowEvent::CloseRequested => {
                            log::info!("Window closed");
                            target.exit();
                        }
                        WindowEvent::Resized(new_size) => {
                            renderer.resize(new_size);
                            viewport = (new_size.width, new_size.height);
                        }
                        WindowEvent::Focused(false) => {
                            // Releases are not delivered while unfocused
                            keyboard.clear();
                        }
                        WindowEvent::KeyboardInput { event, .. } => {
                            if let Some(key) = map_physical_key(event.physical_key) {
                                keyboard.handle(
                                    key,
                                    event.state == ElementState::Pressed,
                                    event.repeat,
                                );
                            }
                        }
                        WindowEvent::RedrawRequested => {
                            match run_frame(&mut scene, &mut keyboard, &mut renderer, viewport) {
                                Ok(FrameStatus::Continue) => {}
                                Ok(FrameStatus::Exit) => target.exit(),
                                Err(e) => {
                                    log::error!("Frame failed: {}", e);
                                    failure = Some(e);
                                    target.exit();
                                }
                            }
                        }
                        _ => {}
                    },
                    Event::AboutToWait => {
                        window.request_redraw();
                    }
                    _ => {}
                }
            })
            .map_err(|e| Error::Visualization(format!("Event loop error: {}", e)))?;

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prismview_core::{build_prism, SceneConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();
        assert_eq!(config.title, "Prismview");
        assert_eq!((config.width, config.height), (800, 800));
        assert_eq!(config.render.background_color, [0.2, 0.3, 0.3, 1.0]);
    }

    #[test]
    fn test_viewer_holds_scene() {
        let mut rng = StdRng::seed_from_u64(5);
        let mesh = build_prism(6, &mut rng).unwrap();
        let viewer = PrismViewer::new(
            ViewerConfig::default(),
            Scene::new(SceneConfig::default()),
            mesh,
        );
        assert_eq!(viewer.scene().flags(), Default::default());
        assert_eq!(viewer.config().width, 800);
    }
}
