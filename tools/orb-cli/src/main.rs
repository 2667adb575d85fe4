//! orb - sphere tessellation from the command line
//!
//! Builds UV spheres from a manifest or from flags and reports their buffer
//! sizes and layouts. Mesh data itself is never written to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use orb_mesh::packing::{format_name, parse_format};
use orb_mesh::{
    MeshBuffer, MeshDescriptor, Sphere, TextureMode, load_manifest, vertex_stride,
    vertex_stride_packed,
};

#[derive(Parser)]
#[command(name = "orb")]
#[command(about = "UV-sphere tessellation tool")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every sphere in a manifest and print a JSON summary
    Build {
        /// Path to spheres.toml manifest
        #[arg(default_value = "spheres.toml")]
        manifest: PathBuf,

        /// Vertex layout used for the size report
        #[arg(short, long, default_value = "pos_uv_normal")]
        #[arg(value_parser = parse_layout)]
        format: u8,

        /// Report packed (f16/unorm16/octahedral) sizes instead of f32
        #[arg(long)]
        packed: bool,
    },

    /// Validate a manifest without building
    Check {
        /// Path to spheres.toml manifest
        #[arg(default_value = "spheres.toml")]
        manifest: PathBuf,
    },

    /// Build a single sphere from flags
    Sphere {
        /// Number of latitude rings, poles included
        #[arg(short = 'z', long, default_value_t = 8)]
        z_samples: u32,

        /// Angular subdivisions per ring
        #[arg(short = 'r', long, default_value_t = 8)]
        radial_samples: u32,

        /// Sphere radius
        #[arg(long, default_value_t = 0.5)]
        radius: f32,

        /// Texture mode: linear, projected or polar
        #[arg(short, long, default_value = "polar")]
        texture_mode: TextureMode,

        /// Inward-facing normals and winding (sky domes)
        #[arg(long)]
        view_inside: bool,

        /// Vertex layout used for the size report
        #[arg(short, long, default_value = "pos_uv_normal")]
        #[arg(value_parser = parse_layout)]
        format: u8,

        /// Report packed (f16/unorm16/octahedral) sizes instead of f32
        #[arg(long)]
        packed: bool,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_layout(name: &str) -> Result<u8, String> {
    parse_format(name).ok_or_else(|| {
        format!("unknown vertex format {name:?} (use pos, pos_uv, pos_normal or pos_uv_normal)")
    })
}

/// Size and layout report for one built sphere
#[derive(Debug, Serialize)]
struct MeshSummary {
    name: String,
    descriptor: MeshDescriptor,
    vertex_count: usize,
    index_count: usize,
    triangle_count: usize,
    index_capacity: usize,
    bounds_min: [f32; 3],
    bounds_max: [f32; 3],
    layout: &'static str,
    packed: bool,
    vertex_stride: u32,
    vertex_bytes: usize,
    index_bytes: usize,
}

impl MeshSummary {
    fn new(
        name: &str,
        descriptor: &MeshDescriptor,
        mesh: &MeshBuffer,
        format: u8,
        packed: bool,
    ) -> Self {
        let (min, max) = mesh.bounds().unwrap_or_default();
        let (vertex_stride, vertex_bytes) = if packed {
            (vertex_stride_packed(format), mesh.pack(format).len())
        } else {
            (vertex_stride(format), mesh.interleave(format).len())
        };

        Self {
            name: name.to_string(),
            descriptor: *descriptor,
            vertex_count: mesh.vertex_count(),
            index_count: mesh.index_count(),
            triangle_count: mesh.triangle_count(),
            index_capacity: descriptor.index_capacity(),
            bounds_min: min.to_array(),
            bounds_max: max.to_array(),
            layout: format_name(format),
            packed,
            vertex_stride,
            vertex_bytes,
            index_bytes: mesh.index_bytes().len(),
        }
    }

    fn log(&self) {
        tracing::info!(
            "{}: {} vertices, {} triangles ({} indices, capacity {})",
            self.name,
            self.vertex_count,
            self.triangle_count,
            self.index_count,
            self.index_capacity
        );
        tracing::info!(
            "{}: {}{} layout, stride {} bytes, {} vertex bytes, {} index bytes",
            self.name,
            self.layout,
            if self.packed { " packed" } else { "" },
            self.vertex_stride,
            self.vertex_bytes,
            self.index_bytes
        );
    }
}

fn build_manifest(path: &Path, format: u8, packed: bool) -> Result<Vec<MeshSummary>> {
    let manifest = load_manifest(path)?;
    manifest.validate()?;

    manifest
        .spheres
        .iter()
        .map(|entry| {
            let sphere = Sphere::new(entry.descriptor)
                .with_context(|| format!("Failed to build sphere {:?}", entry.name))?;
            let summary = MeshSummary::new(
                &entry.name,
                &entry.descriptor,
                sphere.mesh(),
                format,
                packed,
            );
            summary.log();
            Ok(summary)
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Build {
            manifest,
            format,
            packed,
        } => {
            tracing::info!("Building spheres from {:?}", manifest);
            let summaries = build_manifest(&manifest, format, packed)?;
            println!("{}", serde_json::to_string_pretty(&summaries)?);
            tracing::info!("Built {} sphere(s)", summaries.len());
        }

        Commands::Check { manifest } => {
            tracing::info!("Checking manifest {:?}", manifest);
            let config = load_manifest(&manifest)?;
            config.validate()?;
            tracing::info!("Manifest is valid ({} sphere(s))", config.spheres.len());
        }

        Commands::Sphere {
            z_samples,
            radial_samples,
            radius,
            texture_mode,
            view_inside,
            format,
            packed,
            json,
        } => {
            let descriptor = MeshDescriptor::new(z_samples, radial_samples, radius, texture_mode)
                .with_view_inside(view_inside);
            let sphere = Sphere::new(descriptor)?;
            let summary = MeshSummary::new("sphere", &descriptor, sphere.mesh(), format, packed);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                summary.log();
            }
        }
    }

    Ok(())
}
