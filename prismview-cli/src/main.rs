//! Prismview launcher
//!
//! Builds an N-sided prism with random face colours and opens it in the
//! interactive viewer.

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use prismview_core::{build_prism, AspectPolicy, Scene, SceneConfig};
use prismview_gpu::RenderConfig;
use prismview_visualization::{PrismViewer, ViewerConfig};

#[derive(Parser, Debug)]
#[command(name = "prismview")]
#[command(version)]
#[command(about = "Interactive viewer for a procedurally generated prism", long_about = None)]
struct Cli {
    /// Number of sides of the prism (at least 3)
    #[arg(value_name = "SIDES")]
    sides: usize,

    /// Seed for the face colours
    #[arg(long)]
    seed: Option<u64>,

    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Always use an aspect ratio of 1.0 regardless of the window shape
    #[arg(long)]
    square_aspect: bool,

    /// Window title
    #[arg(long, default_value = "Prismview")]
    title: String,
}

impl Cli {
    fn scene_config(&self) -> SceneConfig {
        let mut config = SceneConfig::default();
        if self.square_aspect {
            config.projection.aspect_policy = AspectPolicy::Square;
        }
        config
    }

    fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
            render: RenderConfig::default(),
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let mut rng = cli.rng();
    let mesh = build_prism(cli.sides, &mut rng)
        .with_context(|| format!("Failed to build a prism with {} sides", cli.sides))?;
    log::info!(
        "Built {}-sided prism: {} vertices, {} triangles",
        mesh.sides(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    let scene = Scene::new(cli.scene_config());
    PrismViewer::new(cli.viewer_config(), scene, mesh)
        .run()
        .context("Viewer exited with an error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_is_required() {
        assert!(Cli::try_parse_from(["prismview"]).is_err());
        assert!(Cli::try_parse_from(["prismview", "six"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["prismview", "6"]).unwrap();
        assert_eq!(cli.sides, 6);
        assert_eq!(cli.seed, None);
        assert!(!cli.square_aspect);

        let viewer = cli.viewer_config();
        assert_eq!((viewer.width, viewer.height), (800, 800));
        assert_eq!(viewer.title, "Prismview");
        assert_eq!(cli.scene_config(), SceneConfig::default());
    }

    #[test]
    fn test_flags_map_onto_configs() {
        let cli = Cli::try_parse_from([
            "prismview",
            "5",
            "--seed",
            "42",
            "--width",
            "1024",
            "--height",
            "768",
            "--square-aspect",
            "--title",
            "Pentagon",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(42));
        assert_eq!(
            cli.scene_config().projection.aspect_policy,
            AspectPolicy::Square
        );
        let viewer = cli.viewer_config();
        assert_eq!((viewer.width, viewer.height), (1024, 768));
        assert_eq!(viewer.title, "Pentagon");
    }

    #[test]
    fn test_seed_makes_colours_repeatable() {
        let cli = Cli::try_parse_from(["prismview", "7", "--seed", "9"]).unwrap();
        let a = build_prism(cli.sides, &mut cli.rng()).unwrap();
        let b = build_prism(cli.sides, &mut cli.rng()).unwrap();
        assert_eq!(a.vertices(), b.vertices());
    }

    #[test]
    fn test_too_few_sides_parses_but_fails_to_build() {
        let cli = Cli::try_parse_from(["prismview", "2"]).unwrap();
        assert!(build_prism(cli.sides, &mut cli.rng()).is_err());
    }
}
