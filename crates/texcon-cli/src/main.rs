//! texcon CLI - inspect and extract sub-images from DDS/KTXv1 texture files.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use texcon::prelude::*;

/// texcon - DDS/KTXv1 texture container inspection tool
#[derive(Parser)]
#[command(name = "texcon")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a container and print its descriptor
    Info {
        /// Path to a single DDS/KTX file
        file: Option<PathBuf>,

        /// Glob pattern for batch mode, e.g. 'textures/**/*.dds'
        #[arg(long)]
        glob: Option<String>,

        /// Print the descriptor as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a container, then locate a single sub-image within it
    Locate {
        /// Path to a DDS/KTX file
        file: PathBuf,

        /// Array layer index
        #[arg(long, default_value = "0")]
        array: u32,

        /// Cube face (cubemaps) or depth slice (volume textures) index
        #[arg(long, default_value = "0")]
        slice: u32,

        /// Mip level index
        #[arg(long, default_value = "0")]
        mip: u32,

        /// Print the sub-image location as JSON
        #[arg(long)]
        json: bool,
    },

    /// Locate a sub-image and write its raw bytes to a file
    Extract {
        /// Path to a DDS/KTX file
        file: PathBuf,

        /// Array layer index
        #[arg(long, default_value = "0")]
        array: u32,

        /// Cube face (cubemaps) or depth slice (volume textures) index
        #[arg(long, default_value = "0")]
        slice: u32,

        /// Mip level index
        #[arg(long, default_value = "0")]
        mip: u32,

        /// Output file for the raw sub-image bytes
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { file, glob, json } => match (file, glob) {
            (Some(path), None) => cmd_info_one(&path, json)?,
            (None, Some(pattern)) => cmd_info_batch(&pattern, json)?,
            (Some(_), Some(_)) => bail!("pass either a file or --glob, not both"),
            (None, None) => bail!("pass a file or --glob"),
        },
        Commands::Locate { file, array, slice, mip, json } => cmd_locate(&file, array, slice, mip, json)?,
        Commands::Extract {
            file,
            array,
            slice,
            mip,
            output,
        } => cmd_extract(&file, array, slice, mip, &output)?,
    }

    Ok(())
}

fn read_and_parse(path: &std::path::Path) -> Result<(Vec<u8>, Descriptor)> {
    let blob = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let descriptor = parse(&blob).with_context(|| format!("parsing {}", path.display()))?;
    Ok((blob, descriptor))
}

fn cmd_info_one(path: &std::path::Path, json: bool) -> Result<()> {
    let (_, descriptor) = read_and_parse(path)?;
    print_descriptor(&descriptor, json);
    Ok(())
}

fn cmd_info_batch(pattern: &str, json: bool) -> Result<()> {
    let paths: Vec<PathBuf> = glob::glob(pattern)
        .with_context(|| format!("invalid glob pattern {pattern:?}"))?
        .filter_map(|entry| entry.ok())
        .collect();

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut failures = 0usize;
    for path in &paths {
        pb.set_message(path.display().to_string());
        match read_and_parse(path) {
            Ok((_, descriptor)) => {
                pb.println(format!("{}: {}", path.display(), descriptor_summary(&descriptor)));
                if json {
                    pb.println(descriptor_json(&descriptor));
                }
            }
            Err(err) => {
                failures += 1;
                pb.println(format!("{}: error: {err:#}", path.display()));
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message(format!("{} files, {} failed", paths.len(), failures));

    Ok(())
}

fn cmd_locate(path: &std::path::Path, array: u32, slice: u32, mip: u32, json: bool) -> Result<()> {
    let (blob, descriptor) = read_and_parse(path)?;
    let sub = get_sub(&descriptor, &blob, array, slice, mip);
    print_sub_image(&descriptor, &sub, json);
    Ok(())
}

fn cmd_extract(path: &std::path::Path, array: u32, slice: u32, mip: u32, output: &std::path::Path) -> Result<()> {
    let (blob, descriptor) = read_and_parse(path)?;
    let sub = get_sub(&descriptor, &blob, array, slice, mip);
    fs::write(output, sub.bytes).with_context(|| format!("writing {}", output.display()))?;
    print_sub_image(&descriptor, &sub, false);
    println!("wrote {} bytes to {}", sub.byte_size, output.display());
    Ok(())
}

fn descriptor_summary(descriptor: &Descriptor) -> String {
    format!(
        "{} {}x{}x{} {} layer(s) {} mip(s){}{}",
        format_name(descriptor.format),
        descriptor.width,
        descriptor.height,
        descriptor.depth,
        descriptor.num_layers,
        descriptor.num_mips,
        if descriptor.is_cubemap() { " cubemap" } else { "" },
        if descriptor.is_srgb() { " srgb" } else { "" },
    )
}

fn descriptor_json(descriptor: &Descriptor) -> String {
    serde_json::to_string_pretty(descriptor).expect("Descriptor serialization never fails")
}

fn print_descriptor(descriptor: &Descriptor, json: bool) {
    if json {
        println!("{}", descriptor_json(descriptor));
    } else {
        println!("{}", descriptor_summary(descriptor));
        println!(
            "  data_offset={} payload_size={} bpp={}",
            descriptor.data_offset, descriptor.payload_size, descriptor.bpp
        );
        if descriptor.is_ktx() {
            println!(
                "  metadata_offset={} metadata_size={}",
                descriptor.metadata_offset, descriptor.metadata_size
            );
        }
    }
}

fn print_sub_image(descriptor: &Descriptor, sub: &SubImage<'_>, json: bool) {
    if json {
        let doc = serde_json::json!({
            "format": format_name(descriptor.format),
            "width": sub.width,
            "height": sub.height,
            "byte_size": sub.byte_size,
            "row_pitch": sub.row_pitch,
        });
        println!("{}", serde_json::to_string_pretty(&doc).unwrap());
    } else {
        println!(
            "{}x{} {} bytes, row pitch {} bytes",
            sub.width, sub.height, sub.byte_size, sub.row_pitch
        );
    }
}
