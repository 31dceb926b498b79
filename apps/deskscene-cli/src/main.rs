use anyhow::Context;
use clap::{Parser, Subcommand};
use deskscene_assets::{
    FileDecoder, GraphicsContext, HeadlessContext, ImageDecoder, PlaceholderDecoder,
    TextureRegistry,
};
use deskscene_render::{RecordingGeometry, UniformBlock};
use deskscene_render_wgpu::{WgpuTextureBank, WgpuUniformBuffer, request_headless_device};
use deskscene_scene::{Scene, SceneConfig, SceneManager};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deskscene-cli", about = "Desk scene tool: textures and headless frames")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Load the desk textures and list their slots
    Textures {
        /// Directory the texture paths are relative to
        #[arg(long, default_value = ".")]
        texture_root: PathBuf,
        /// Look up a single tag instead of listing all
        #[arg(long)]
        find: Option<String>,
    },
    /// Prepare the desk scene and render frames without a GPU
    Render {
        /// Directory the texture paths are relative to
        #[arg(long, default_value = ".")]
        texture_root: PathBuf,
        /// Number of frames to draw
        #[arg(short, long, default_value = "1")]
        frames: u32,
        /// Print the last frame as JSON
        #[arg(long)]
        json: bool,
        /// Use a generated checker image instead of reading files
        #[arg(long)]
        placeholder_textures: bool,
        /// Upload textures and uniforms to a real GPU device
        #[arg(long)]
        gpu: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("deskscene-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", deskscene_common::crate_info());
            println!("assets: {}", deskscene_assets::crate_info());
            println!("render: {}", deskscene_render::crate_info());
            println!("scene: {}", deskscene_scene::crate_info());
            let desk = Scene::desk();
            println!(
                "desk: {} textures, {} materials, {} lights, {} objects",
                desk.textures.len(),
                desk.materials.len(),
                desk.lights.len(),
                desk.objects.len()
            );
        }
        Commands::Textures { texture_root, find } => {
            let mut ctx = HeadlessContext::new();
            let mut registry = TextureRegistry::new();
            let decoder = FileDecoder::new();
            for source in Scene::desk().textures {
                let path = texture_root.join(&source.path);
                if let Err(e) = registry.load_texture(&mut ctx, &decoder, &path, source.tag) {
                    println!("failed: {} ({e})", path.display());
                }
            }
            registry.bind_all(&mut ctx);

            match find {
                Some(tag) => {
                    let (slot, entry) = registry.require(&tag)?;
                    println!("{tag}: {slot} -> {}", entry.id);
                }
                None => {
                    for (i, entry) in registry.entries().iter().enumerate() {
                        println!("slot {i}: {} -> {}", entry.tag, entry.id);
                    }
                    println!("{}/{} slots used", registry.len(), registry.capacity());
                }
            }
            registry.teardown(&mut ctx);
        }
        Commands::Render {
            texture_root,
            frames,
            json,
            placeholder_textures,
            gpu,
        } => {
            let decoder: Box<dyn ImageDecoder> = if placeholder_textures {
                Box::new(PlaceholderDecoder::default())
            } else {
                Box::new(FileDecoder::new())
            };
            let config = SceneConfig::default().with_texture_root(texture_root);

            if gpu {
                let (device, queue) =
                    request_headless_device().context("opening a headless GPU device")?;
                let uniform_buffer = WgpuUniformBuffer::new(&device);
                let bank = WgpuTextureBank::new(device, queue.clone());
                let scene =
                    SceneManager::new(Scene::desk(), config, bank, RecordingGeometry::new());
                run_frames(scene, decoder.as_ref(), frames, json, |block| {
                    uniform_buffer.upload(&queue, block);
                    queue.submit(std::iter::empty());
                })?;
            } else {
                let scene = SceneManager::new(
                    Scene::desk(),
                    config,
                    HeadlessContext::new(),
                    RecordingGeometry::new(),
                );
                run_frames(scene, decoder.as_ref(), frames, json, |_| {})?;
            }
        }
    }

    Ok(())
}

/// Prepare `scene`, draw `frames` frames, and report the last one.
/// `after_frame` sees the uniform block as it stands after each frame.
fn run_frames<C: GraphicsContext>(
    mut scene: SceneManager<C, RecordingGeometry>,
    decoder: &dyn ImageDecoder,
    frames: u32,
    json: bool,
    mut after_frame: impl FnMut(&UniformBlock),
) -> anyhow::Result<()> {
    let mut uniforms = UniformBlock::new();

    let report = scene
        .prepare(&mut uniforms, decoder)
        .context("preparing desk scene")?;
    for failure in &report.failed_textures {
        println!("texture {} unavailable: {}", failure.tag, failure.reason);
    }

    let mut last = None;
    for frame in 0..frames {
        let report = scene.render(&mut uniforms)?;
        after_frame(&uniforms);
        tracing::debug!(
            "frame {frame}: {} draws, {} warnings",
            report.draws.len(),
            report.warnings.len()
        );
        last = Some(report);
    }

    match last {
        Some(report) if json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Some(report) => {
            println!(
                "{frames} frames: {} draws per frame, {} warnings in last frame",
                report.draws.len(),
                report.warnings.len()
            );
            for warning in &report.warnings {
                println!("  {}: {}", warning.object, warning.error);
            }
            println!("uniform block: {} bytes", uniforms.as_bytes().len());
        }
        None => println!("no frames rendered"),
    }

    scene.teardown();
    Ok(())
}
