//! Plate-solution gateway: an abstract contract for submitting an
//! image to a plate-solving service and retrieving the resulting WCS,
//! plus the pre-submission masking helper.
//!
//! No concrete network client lives here — the wire protocol (e.g. the
//! public astrometry.net login/upload/submissions/jobs/wcs_file
//! endpoints) is the caller's concern; this module only defines the
//! contract and the bounded, cancellable polling loop built on top of
//! it.

use crate::error::{GatewayError, Result, TrajectoryError};
use crate::pixel::PixelPoint;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use std::thread;

/// Status of a submitted plate-solve job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Done(u64),
}

/// The plate-solving wire contract. The gateway performs no retries of
/// its own; polling policy belongs to the caller ([`poll_for_wcs`]).
pub trait PlateSolverGateway {
    fn authenticate(&self, credential: &str) -> Result<String>;
    fn upload_image(&self, image_path: &str, session_token: &str) -> Result<String>;
    fn job_done(&self, submission_id: &str) -> Result<JobStatus>;
    fn download_wcs(&self, job_id: u64) -> Result<Vec<u8>>;
}

/// A cooperative cancellation signal shared between a poller and its
/// caller. Cloning shares the same underlying flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Upper bound on how long a single cooperative wait tick blocks for;
/// keeps `cancel()` calls that land mid-wait observable within this
/// margin instead of only at the next poll boundary.
const CANCEL_CHECK_GRANULARITY: Duration = Duration::from_millis(50);

/// Sleeps for `duration`, checking `cancel` every
/// [`CANCEL_CHECK_GRANULARITY`] instead of blocking through it in one
/// call. Returns `true` if cancellation was observed before `duration`
/// elapsed.
fn cooperative_wait(duration: Duration, cancel: &CancelToken) -> bool {
    let mut remaining = duration;
    while remaining > Duration::ZERO {
        if cancel.is_cancelled() {
            return true;
        }
        let tick = remaining.min(CANCEL_CHECK_GRANULARITY);
        thread::sleep(tick);
        remaining -= tick;
    }
    cancel.is_cancelled()
}

/// Polls `job_done` every `poll_interval` up to `max_attempts` times,
/// then downloads the resulting WCS bytes.
///
/// Exceeding the attempt budget returns [`GatewayError::Timeout`]
/// (recoverable: callers fall back to a station's pre-bound fixed plate
/// solution). `cancel` is checked before each poll and, via
/// [`cooperative_wait`], in small slices throughout the wait between
/// polls — this crate runs no async runtime, so the wait is still a
/// blocking `thread::sleep` under the hood, but a `cancel()` call is
/// observed within one tick rather than only at the next poll.
pub fn poll_for_wcs(
    gateway: &dyn PlateSolverGateway,
    submission_id: &str,
    poll_interval: Duration,
    max_attempts: u32,
    cancel: &CancelToken,
) -> Result<Vec<u8>> {
    for attempt in 0..max_attempts {
        if cancel.is_cancelled() {
            return Err(TrajectoryError::Gateway(GatewayError::Cancelled));
        }

        match gateway.job_done(submission_id)? {
            JobStatus::Done(job_id) => return gateway.download_wcs(job_id),
            JobStatus::Pending => {}
        }

        if attempt + 1 < max_attempts && cooperative_wait(poll_interval, cancel) {
            return Err(TrajectoryError::Gateway(GatewayError::Cancelled));
        }
    }

    Err(TrajectoryError::Gateway(GatewayError::Timeout { attempts: max_attempts }))
}

/// A minimal single-channel (grayscale) raster: the only image
/// representation this crate needs for pre-submission masking.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl Raster {
    pub fn new(width: usize, height: usize) -> Self {
        Raster { width, height, pixels: vec![0; width * height] }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn set(&mut self, x: usize, y: usize, value: u8) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.pixels[idx] = value;
        }
    }

    fn get(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height {
            self.pixels[self.index(x, y)]
        } else {
            0
        }
    }
}

/// Produces a masked copy of `image` that keeps only the circular sky
/// region inscribed in the frame, with a small disk around each meteor
/// sample additionally blacked out (the meteor trail itself would
/// otherwise be mistaken for a star by the plate solver).
///
/// Grounded on the original preprocessing step: a white disk inscribed
/// in the frame, intersected with the source image, then a radius-3
/// black disk punched out at each point.
pub fn mask_for_platesolve(image: &Raster, points: &[PixelPoint]) -> Raster {
    let mut mask = Raster::new(image.width, image.height);
    let cx = (image.width / 2) as isize;
    let cy = (image.height / 2) as isize;
    let r = (image.height / 2) as isize;

    fill_disk(&mut mask, cx, cy, r, 255);
    for p in points {
        fill_disk(&mut mask, p.x.round() as isize, p.y.round() as isize, 3, 0);
    }

    let mut out = Raster::new(image.width, image.height);
    for y in 0..image.height {
        for x in 0..image.width {
            let masked = mask.get(x, y);
            let src = image.get(x, y);
            out.set(x, y, if masked == 255 { src } else { 0 });
        }
    }
    out
}

fn fill_disk(raster: &mut Raster, cx: isize, cy: isize, radius: isize, value: u8) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let x = cx + dx;
            let y = cy + dy;
            if x >= 0 && y >= 0 {
                raster.set(x as usize, y as usize, value);
            }
        }
    }
}
