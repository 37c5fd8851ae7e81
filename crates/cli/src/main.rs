use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use thumblr_core::extraction::extract_thumbnail_use_case::{
    ExtractOptions, ExtractThumbnailUseCase,
};
use thumblr_core::media::domain::frame_source::FrameSource;
use thumblr_core::media::domain::thumbnail_encoder::ThumbnailEncoder;
use thumblr_core::media::infrastructure::ffmpeg_frame_source::FfmpegFrameSource;
use thumblr_core::media::infrastructure::png_encoder::PngEncoder;
use thumblr_core::media::infrastructure::ppm_encoder::PpmEncoder;
use thumblr_core::media::infrastructure::raw_rgb_encoder::RawRgbEncoder;
use thumblr_core::shared::thumbnail::Thumbnail;

/// Extract thumbnail images from video files.
#[derive(Parser)]
#[command(name = "thumblr")]
struct Cli {
    /// Input video file.
    input: PathBuf,

    /// Output image file (defaults to the input name with the format's
    /// extension).
    output: Option<PathBuf>,

    /// Output format: ppm, png, or raw (headerless RGB bytes).
    #[arg(long, default_value = "ppm")]
    format: String,

    /// Number of leading frames to capture. With more than one, outputs
    /// are numbered frame files next to the output path.
    #[arg(long, default_value = "1")]
    frames: usize,

    /// Seek hint in seconds. Accepted but currently ignored; decoding
    /// always starts at the beginning of the stream.
    #[arg(long)]
    position: Option<f64>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let source: Box<dyn FrameSource> = Box::new(FfmpegFrameSource::new());
    let encoder = build_encoder(&cli.format)?;

    let options = ExtractOptions {
        frame_count: cli.frames,
        position: cli.position,
    };

    let mut use_case = ExtractThumbnailUseCase::new(source, encoder);
    let thumbnails = use_case.execute(&cli.input, &options)?;

    write_outputs(&cli, &thumbnails)?;
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.frames == 0 {
        return Err("--frames must be at least 1".into());
    }
    Ok(())
}

fn build_encoder(format: &str) -> Result<Box<dyn ThumbnailEncoder>, Box<dyn std::error::Error>> {
    match format {
        "ppm" => Ok(Box::new(PpmEncoder::new())),
        "png" => Ok(Box::new(PngEncoder::new())),
        "raw" => Ok(Box::new(RawRgbEncoder::new())),
        other => Err(format!("unsupported format '{other}' (expected ppm, png, or raw)").into()),
    }
}

fn write_outputs(cli: &Cli, thumbnails: &[Thumbnail]) -> Result<(), Box<dyn std::error::Error>> {
    let Some(first) = thumbnails.first() else {
        return Ok(());
    };
    let base = match &cli.output {
        Some(path) => path.clone(),
        None => cli.input.with_extension(first.encoding.extension()),
    };

    if thumbnails.len() == 1 {
        std::fs::write(&base, &thumbnails[0].data)?;
        log::info!(
            "{}x{} thumbnail written to {}",
            thumbnails[0].width,
            thumbnails[0].height,
            base.display()
        );
        return Ok(());
    }

    for (i, thumbnail) in thumbnails.iter().enumerate() {
        let path = numbered(&base, i + 1);
        std::fs::write(&path, &thumbnail.data)?;
        log::info!(
            "{}x{} thumbnail written to {}",
            thumbnail.width,
            thumbnail.height,
            path.display()
        );
    }
    Ok(())
}

/// `frame.ppm` captured twice becomes `frame1.ppm` and `frame2.ppm`,
/// matching the numbered files the original extractor emitted.
fn numbered(path: &Path, index: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("frame");
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => path.with_file_name(format!("{stem}{index}.{ext}")),
        None => path.with_file_name(format!("{stem}{index}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_inserts_the_index_before_the_extension() {
        assert_eq!(
            numbered(Path::new("/tmp/out.ppm"), 1),
            PathBuf::from("/tmp/out1.ppm")
        );
        assert_eq!(
            numbered(Path::new("/tmp/out.ppm"), 2),
            PathBuf::from("/tmp/out2.ppm")
        );
    }

    #[test]
    fn test_numbered_without_extension() {
        assert_eq!(
            numbered(Path::new("/tmp/out"), 3),
            PathBuf::from("/tmp/out3")
        );
    }
}
