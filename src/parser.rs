//! Observation parser: detection-file ingestion.
//!
//! The detection-file layout is fixed (see the configuration surface
//! docs): an 8-line ignored header, a `#Number of stars: S` line, `S`
//! star-position lines, a `#Number of meteors: M` line, then `M` meteor
//! blocks of frame samples. Grounded line-for-line on `load_meteors` in
//! the reference implementation's coordinate module, generalized to
//! parse all `M` meteors rather than only the first (a documented
//! limitation of the original).

use crate::error::{Result, TrajectoryError};
use crate::pixel::PixelPoint;
use regex::Regex;
use std::sync::OnceLock;

/// One parsed meteor: its pixel track plus the interpolated capture
/// time (seconds since the observation-interval start) for each point.
#[derive(Debug, Clone, PartialEq)]
pub struct MeteorDetection {
    pub points: Vec<PixelPoint>,
    /// Seconds since `start_s`, one per point in `points`.
    pub frame_times_s: Vec<f64>,
}

fn parse_error(offset: usize, message: impl Into<String>) -> TrajectoryError {
    TrajectoryError::Parse { offset, message: message.into() }
}

/// Parses a detection file into its constituent meteors.
///
/// A missing `#Number of meteors:` block, or `M = 0`, yields an empty
/// sequence rather than an error; a structurally malformed header or
/// frame line yields [`TrajectoryError::Parse`] with the offending
/// line's byte offset.
pub fn parse_detection_file(text: &str) -> Result<Vec<MeteorDetection>> {
    let lines: Vec<&str> = text.lines().collect();
    let byte_offset_of = |line_index: usize| -> usize {
        lines[..line_index.min(lines.len())].iter().map(|l| l.len() + 1).sum()
    };

    if lines.len() < 9 {
        return Err(parse_error(text.len(), "file shorter than the fixed 9-line header"));
    }

    let stars_line = lines[8];
    let star_count: usize = stars_line
        .strip_prefix("#Number of stars: ")
        .ok_or_else(|| parse_error(byte_offset_of(8), "expected '#Number of stars: S' on line 9"))?
        .trim()
        .parse()
        .map_err(|_| parse_error(byte_offset_of(8), "star count is not an integer"))?;

    let meteors_line_idx = 9 + star_count;
    let Some(meteors_line) = lines.get(meteors_line_idx) else {
        return Ok(Vec::new());
    };
    let Some(meteor_count_str) = meteors_line.strip_prefix("#Number of meteors: ") else {
        return Ok(Vec::new());
    };
    let meteor_count: usize = meteor_count_str
        .trim()
        .parse()
        .map_err(|_| parse_error(byte_offset_of(meteors_line_idx), "meteor count is not an integer"))?;

    let mut cursor = meteors_line_idx + 1;
    let mut meteors = Vec::with_capacity(meteor_count);

    for _ in 0..meteor_count {
        let Some(header) = lines.get(cursor) else { break };
        let (start_s, end_s) = parse_seconds(header)
            .ok_or_else(|| parse_error(byte_offset_of(cursor), "expected '... seconds: start_s end_s' meteor header"))?;
        cursor += 2; // header line plus the column-label line beneath it

        let mut frames = Vec::new();
        let mut xs_ys = Vec::new();
        while let Some(line) = lines.get(cursor) {
            if !line.starts_with(" frame") {
                break;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let frame_n: u32 = tokens
                .get(3)
                .ok_or_else(|| parse_error(byte_offset_of(cursor), "frame line missing frame-number token"))?
                .parse()
                .map_err(|_| parse_error(byte_offset_of(cursor), "frame number is not an integer"))?;
            let x: f64 = tokens
                .get(6)
                .ok_or_else(|| parse_error(byte_offset_of(cursor), "frame line missing x token"))?
                .parse()
                .map_err(|_| parse_error(byte_offset_of(cursor), "x is not a float"))?;
            let y: f64 = tokens
                .get(11)
                .ok_or_else(|| parse_error(byte_offset_of(cursor), "frame line missing y token"))?
                .parse()
                .map_err(|_| parse_error(byte_offset_of(cursor), "y is not a float"))?;

            frames.push(frame_n);
            xs_ys.push((x, y));
            cursor += 1;
        }

        let frame_times_s = interpolate_frame_times(&frames, start_s, end_s);
        let points = frames
            .iter()
            .zip(xs_ys.iter())
            .map(|(&frame, &(x, y))| PixelPoint { x, y, frame })
            .collect();

        meteors.push(MeteorDetection { points, frame_times_s });
    }

    Ok(meteors)
}

fn meteor_header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"seconds:\s*(-?[\d.]+)\s+(-?[\d.]+)").unwrap())
}

fn parse_seconds(header: &str) -> Option<(f64, f64)> {
    let caps = meteor_header_regex().captures(header)?;
    let start: f64 = caps.get(1)?.as_str().parse().ok()?;
    let end: f64 = caps.get(2)?.as_str().parse().ok()?;
    Some((start, end))
}

/// Linearly interpolates per-frame capture times between the
/// observation-interval endpoints using the frame indices:
/// `t_i = (frame_i - frame_0) * (end - start) / (frame_last - frame_0)`.
///
/// If there is a single frame (or `frame_last == frame_0`), every point
/// is assigned `start`.
fn interpolate_frame_times(frames: &[u32], start_s: f64, end_s: f64) -> Vec<f64> {
    let Some(&first) = frames.first() else { return Vec::new() };
    let Some(&last) = frames.last() else { return Vec::new() };
    if last == first {
        return vec![start_s; frames.len()];
    }
    let span = (last - first) as f64;
    frames
        .iter()
        .map(|&f| start_s + (f - first) as f64 * (end_s - start_s) / span)
        .collect()
}

fn summary_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"#Meteor \d+:.*start \((-?[\d.]+),\s*(-?[\d.]+)\) end \((-?[\d.]+),\s*(-?[\d.]+)\)").unwrap()
    })
}

/// Extracts each meteor's summary start/end pixel positions from its
/// `#Meteor k: ... start (x, y) end (x, y) ...` header line.
pub fn extract_summary_endpoints(text: &str) -> Vec<(PixelPoint, PixelPoint)> {
    summary_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let x1: f64 = caps.get(1)?.as_str().parse().ok()?;
            let y1: f64 = caps.get(2)?.as_str().parse().ok()?;
            let x2: f64 = caps.get(3)?.as_str().parse().ok()?;
            let y2: f64 = caps.get(4)?.as_str().parse().ok()?;
            Some((
                PixelPoint { x: x1, y: y1, frame: 0 },
                PixelPoint { x: x2, y: y2, frame: 0 },
            ))
        })
        .collect()
}

fn star_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#\d+ position \((-?[\d.]+),\s*(-?[\d.]+)\)").unwrap())
}

/// Extracts the "reference star" pixel positions from lines matching
/// `#i position (x, y)`.
pub fn extract_reference_stars(text: &str) -> Vec<PixelPoint> {
    star_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let x: f64 = caps.get(1)?.as_str().parse().ok()?;
            let y: f64 = caps.get(2)?.as_str().parse().ok()?;
            Some(PixelPoint { x, y, frame: 0 })
        })
        .collect()
}
