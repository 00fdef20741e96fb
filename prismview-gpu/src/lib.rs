//! # Prismview GPU
//!
//! wgpu backend for prismview: uploads the prism's flat triangle list once
//! and draws it every frame with the scene's model, view and projection
//! matrices.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use prismview_gpu::{PrismRenderer, RenderConfig};
//! use prismview_core::SceneRenderer;
//!
//! fn example(
//!     window: Arc<winit::window::Window>,
//!     mesh: &prismview_core::MeshBuffer,
//! ) -> prismview_core::Result<()> {
//!     let mut renderer = pollster::block_on(PrismRenderer::new(window, RenderConfig::default()))?;
//!     renderer.upload(mesh)?;
//!     Ok(())
//! }
//! ```

pub mod device;
pub mod renderer;

pub use device::GpuContext;
pub use renderer::{
    opengl_to_wgpu, vertex_buffer_layout, PrismRenderer, RenderConfig, TransformUniform,
};
