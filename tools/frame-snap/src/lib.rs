// Frame snapshot library for the transform demo.
//
// Replays scripted sessions into RGBA frames, compares frames and reads or
// writes them as BMP or raw RGBA.

use std::fs::File;
use std::io::{BufWriter, Read as IoRead, Write as IoWrite};
use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use cg_algorithms::{DemoConfig, Event, MouseButton, PointI, TransformDemo, TransformParams};

// ============================================================================
// Pixel Buffer
// ============================================================================

/// An RGBA frame, row-major, top-to-bottom.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    /// Length = width * height * 4.
    pub data: Vec<u8>,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * 4],
        }
    }

    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let needed = width as usize * height as usize * 4;
        ensure!(
            data.len() == needed,
            "expected {} bytes for {}x{}, got {}",
            needed,
            width,
            height,
            data.len()
        );
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }
}

// ============================================================================
// Session replay
// ============================================================================

/// A scripted demo session: where the user clicked and where the controls
/// ended up.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub clicks: Vec<PointI>,
    pub params: TransformParams,
}

/// Parse `"x,y"` into a point.
pub fn parse_point(s: &str) -> Result<PointI> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("expected x,y but got {:?}", s))?;
    let x = x.trim().parse().with_context(|| format!("bad x in {:?}", s))?;
    let y = y.trim().parse().with_context(|| format!("bad y in {:?}", s))?;
    Ok(PointI::new(x, y))
}

/// Play `session` through a fresh demo and return the rendered frame.
///
/// Each click is a left press and release. Clicks that land on the control
/// panel are captured by it, exactly as in the interactive demo.
pub fn render_session(config: DemoConfig, session: &Session) -> Result<PixelBuffer> {
    let (width, height) = (config.width, config.height);
    let mut demo = TransformDemo::new(config).context("creating demo")?;
    demo.set_params(&session.params);

    let events = session.clicks.iter().flat_map(|p| {
        [
            Event::MouseDown {
                x: p.x,
                y: p.y,
                button: MouseButton::Left,
            },
            Event::MouseUp {
                x: p.x,
                y: p.y,
                button: MouseButton::Left,
            },
        ]
    });

    let mut buf = PixelBuffer::new(width, height);
    demo.frame_into(events, &mut buf.data)?;

    let captured = session.clicks.len() - demo.points().len();
    if captured > 0 {
        log::warn!("{} click(s) landed on the control panel and were ignored", captured);
    }
    log::info!(
        "rendered {}x{} frame with {} point(s), {} transformed",
        width,
        height,
        demo.points().len(),
        demo.transformed().len()
    );
    Ok(buf)
}

// ============================================================================
// Comparison
// ============================================================================

/// Information about a single pixel difference.
#[derive(Debug, Clone)]
pub struct DiffInfo {
    pub x: u32,
    pub y: u32,
    pub pixel_a: [u8; 4],
    pub pixel_b: [u8; 4],
}

#[derive(Debug, Clone)]
pub struct CompareResult {
    pub identical: bool,
    pub total_pixels: u64,
    /// Pixels that differ by at least 1 in any channel.
    pub different_pixels: u64,
    pub max_channel_diff: u8,
    /// First differing pixel in scan order.
    pub first_diff: Option<DiffInfo>,
}

impl std::fmt::Display for CompareResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.identical {
            return write!(f, "IDENTICAL: {} pixels match", self.total_pixels);
        }
        write!(
            f,
            "DIFFERENT: {}/{} pixels differ ({:.2}%), max_diff={}",
            self.different_pixels,
            self.total_pixels,
            self.different_pixels as f64 / self.total_pixels as f64 * 100.0,
            self.max_channel_diff,
        )?;
        if let Some(ref d) = self.first_diff {
            write!(
                f,
                "\n  first diff at ({}, {}): A={:?} B={:?}",
                d.x, d.y, d.pixel_a, d.pixel_b
            )?;
        }
        Ok(())
    }
}

/// Compare two frames pixel by pixel. Frames of different sizes are an error.
pub fn compare_buffers(a: &PixelBuffer, b: &PixelBuffer) -> Result<CompareResult> {
    if (a.width, a.height) != (b.width, b.height) {
        bail!(
            "size mismatch: {}x{} vs {}x{}",
            a.width,
            a.height,
            b.width,
            b.height
        );
    }

    let mut different_pixels = 0u64;
    let mut max_channel_diff = 0u8;
    let mut first_diff = None;

    let pixels = a.data.chunks_exact(4).zip(b.data.chunks_exact(4));
    for (i, (pa, pb)) in pixels.enumerate() {
        let diff = pa
            .iter()
            .zip(pb)
            .map(|(&ca, &cb)| ca.abs_diff(cb))
            .max()
            .unwrap_or(0);
        if diff == 0 {
            continue;
        }
        different_pixels += 1;
        max_channel_diff = max_channel_diff.max(diff);
        if first_diff.is_none() {
            let i = i as u32;
            first_diff = Some(DiffInfo {
                x: i % a.width,
                y: i / a.width,
                pixel_a: [pa[0], pa[1], pa[2], pa[3]],
                pixel_b: [pb[0], pb[1], pb[2], pb[3]],
            });
        }
    }

    Ok(CompareResult {
        identical: different_pixels == 0,
        total_pixels: a.width as u64 * a.height as u64,
        different_pixels,
        max_channel_diff,
        first_diff,
    })
}

/// Diff image: identical pixels dark gray, differing pixels red.
pub fn generate_diff_image(a: &PixelBuffer, b: &PixelBuffer) -> Result<PixelBuffer> {
    const SAME: [u8; 4] = [40, 40, 40, 255];
    const DIFFERENT: [u8; 4] = [255, 0, 0, 255];

    compare_buffers(a, b)?;
    let mut diff = PixelBuffer::new(a.width, a.height);
    let pixels = a.data.chunks_exact(4).zip(b.data.chunks_exact(4));
    for ((pa, pb), out) in pixels.zip(diff.data.chunks_exact_mut(4)) {
        out.copy_from_slice(if pa == pb { &SAME } else { &DIFFERENT });
    }
    Ok(diff)
}

// ============================================================================
// BMP I/O (32-bit BGRA, top-down)
// ============================================================================

pub fn save_bmp(path: &Path, buf: &PixelBuffer) -> Result<()> {
    let w = buf.width;
    let h = buf.height;
    let row_size = w * 4;
    let image_size = row_size * h;
    let file_size = 14 + 40 + image_size;

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut f = BufWriter::new(file);

    // file header
    f.write_all(b"BM")?;
    f.write_all(&file_size.to_le_bytes())?;
    f.write_all(&[0u8; 4])?;
    f.write_all(&(14u32 + 40).to_le_bytes())?;

    // BITMAPINFOHEADER
    f.write_all(&40u32.to_le_bytes())?;
    f.write_all(&w.to_le_bytes())?;
    f.write_all(&(-(h as i32)).to_le_bytes())?; // negative height = top-down
    f.write_all(&1u16.to_le_bytes())?;
    f.write_all(&32u16.to_le_bytes())?;
    f.write_all(&0u32.to_le_bytes())?; // BI_RGB
    f.write_all(&image_size.to_le_bytes())?;
    f.write_all(&[0u8; 16])?;

    for px in buf.data.chunks_exact(4) {
        f.write_all(&[px[2], px[1], px[0], px[3]])?;
    }
    f.flush()?;
    Ok(())
}

/// Load a 24- or 32-bit uncompressed BMP.
pub fn load_bmp(path: &Path) -> Result<PixelBuffer> {
    let mut data = Vec::new();
    File::open(path)
        .with_context(|| format!("opening {}", path.display()))?
        .read_to_end(&mut data)?;

    if data.len() < 54 || &data[0..2] != b"BM" {
        bail!("{} is not a BMP file", path.display());
    }

    let u32_at = |i: usize| u32::from_le_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]);
    let pixel_offset = u32_at(10) as usize;
    let w = u32_at(18) as i32;
    let h = u32_at(22) as i32;
    let bpp = u16::from_le_bytes([data[28], data[29]]) as usize;
    ensure!(bpp == 24 || bpp == 32, "unsupported BMP depth {}", bpp);

    let width = w.unsigned_abs();
    let height = h.unsigned_abs();
    let top_down = h < 0;
    let bytes_pp = bpp / 8;
    let row_stride = (width as usize * bytes_pp + 3) / 4 * 4;
    ensure!(
        data.len() >= pixel_offset + row_stride * height as usize,
        "{} is truncated",
        path.display()
    );

    let mut buf = PixelBuffer::new(width, height);
    for y in 0..height as usize {
        let src_y = if top_down { y } else { height as usize - 1 - y };
        let row = &data[pixel_offset + src_y * row_stride..];
        for x in 0..width as usize {
            let s = &row[x * bytes_pp..];
            let di = (y * width as usize + x) * 4;
            let a = if bytes_pp == 4 { s[3] } else { 255 };
            buf.data[di..di + 4].copy_from_slice(&[s[2], s[1], s[0], a]);
        }
    }
    Ok(buf)
}

// ============================================================================
// Raw RGBA I/O: [width:u32][height:u32][rgba data]
// ============================================================================

pub fn save_raw(path: &Path, buf: &PixelBuffer) -> Result<()> {
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    f.write_all(&buf.width.to_le_bytes())?;
    f.write_all(&buf.height.to_le_bytes())?;
    f.write_all(&buf.data)?;
    Ok(())
}

pub fn load_raw(path: &Path) -> Result<PixelBuffer> {
    let mut data = Vec::new();
    File::open(path)
        .with_context(|| format!("opening {}", path.display()))?
        .read_to_end(&mut data)?;
    ensure!(data.len() >= 8, "{} is too small for a raw frame", path.display());

    let width = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let height = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
    let expected = width as usize * height as usize * 4 + 8;
    ensure!(
        data.len() >= expected,
        "{}: expected {} bytes, got {}",
        path.display(),
        expected,
        data.len()
    );
    data.truncate(expected);
    data.drain(..8);
    PixelBuffer::from_rgba(width, height, data)
}

/// Load by extension: `.bmp`, `.raw` or `.rgba`.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("bmp") => load_bmp(path),
        Some("raw") | Some("rgba") => load_raw(path),
        _ => bail!("unsupported image format: {}", path.display()),
    }
}

/// Save by extension: `.bmp`, `.raw` or `.rgba`.
pub fn save_image(path: &Path, buf: &PixelBuffer) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("bmp") => save_bmp(path, buf),
        Some("raw") | Some("rgba") => save_raw(path, buf),
        _ => bail!("unsupported image format: {}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("frame-snap-{}-{}", std::process::id(), name))
    }

    fn small_config() -> DemoConfig {
        DemoConfig::new().size(320, 240).panel_origin(200.0, 200.0)
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("10,20").unwrap(), PointI::new(10, 20));
        assert_eq!(parse_point(" -3 , 4").unwrap(), PointI::new(-3, 4));
        assert!(parse_point("10").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_render_session_draws_line() {
        let session = Session {
            clicks: vec![PointI::new(10, 10), PointI::new(60, 10)],
            params: TransformParams::IDENTITY,
        };
        let buf = render_session(small_config(), &session).unwrap();
        assert_eq!(buf.pixel(30, 10), [0, 0, 0, 255]);
        assert_eq!(buf.pixel(30, 11), [255, 255, 255, 255]);
    }

    #[test]
    fn test_render_session_applies_translation() {
        let session = Session {
            clicks: vec![PointI::new(10, 10), PointI::new(60, 10)],
            params: TransformParams {
                ty: 20,
                ..TransformParams::IDENTITY
            },
        };
        let buf = render_session(small_config(), &session).unwrap();
        assert_eq!(buf.pixel(30, 10), [255, 255, 255, 255]);
        assert_eq!(buf.pixel(30, 30), [0, 0, 0, 255]);
    }

    #[test]
    fn test_compare_identical_and_different() {
        let a = PixelBuffer::new(4, 4);
        let mut b = a.clone();
        assert!(compare_buffers(&a, &b).unwrap().identical);

        b.data[(2 * 4 + 1) * 4] = 9;
        let r = compare_buffers(&a, &b).unwrap();
        assert!(!r.identical);
        assert_eq!(r.different_pixels, 1);
        assert_eq!(r.max_channel_diff, 9);
        let d = r.first_diff.unwrap();
        assert_eq!((d.x, d.y), (1, 2));

        let diff = generate_diff_image(&a, &b).unwrap();
        assert_eq!(diff.pixel(1, 2), [255, 0, 0, 255]);
        assert_eq!(diff.pixel(0, 0), [40, 40, 40, 255]);
    }

    #[test]
    fn test_compare_size_mismatch_is_error() {
        assert!(compare_buffers(&PixelBuffer::new(2, 2), &PixelBuffer::new(3, 2)).is_err());
    }

    #[test]
    fn test_bmp_and_raw_files() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.data[..4].copy_from_slice(&[1, 2, 3, 255]);
        buf.data[20..24].copy_from_slice(&[200, 100, 50, 255]);

        for name in ["frame.bmp", "frame.raw"] {
            let path = temp_path(name);
            save_image(&path, &buf).unwrap();
            let loaded = load_image(&path).unwrap();
            std::fs::remove_file(&path).ok();
            assert_eq!(loaded, buf, "{}", name);
        }
    }

    #[test]
    fn test_unknown_extension() {
        let path = temp_path("frame.png");
        assert!(save_image(&path, &PixelBuffer::new(1, 1)).is_err());
        assert!(load_image(&path).is_err());
    }

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 15]).is_err());
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 16]).is_ok());
    }
}
