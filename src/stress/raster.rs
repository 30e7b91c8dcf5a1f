//! Raster stress generator: time-boxed repeated-draw workload.
//!
//! Allocates one large software surface and hammers it with filled-circle
//! draws whose parameters vary deterministically with the draw index, so
//! every pass performs identical work. The sub-score is throughput: how
//! many full passes fit in the time box.
//!
//! This is a software drawing stress test, not a GPU compute benchmark; the
//! historical "GPU Score" name of the result column is kept for format
//! compatibility.

use std::time::Instant;

use hdrhistogram::Histogram;

use crate::config::BenchSettings;
use crate::error::RasterError;
use crate::scoring;

/// A square of 32-bit pixels with fallible backing allocation.
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Surface {
    /// Allocate a zeroed surface. At 10,000 x 10,000 this is ~400 MB, so
    /// the reservation goes through the fallible allocation API instead of
    /// aborting the process on a constrained device.
    pub fn try_new(width: u32, height: u32) -> Result<Self, RasterError> {
        let len = width as usize * height as usize;
        let mut pixels: Vec<u32> = Vec::new();
        if pixels.try_reserve_exact(len).is_err() {
            return Err(RasterError::SurfaceAllocation {
                width,
                height,
                requested: len.saturating_mul(std::mem::size_of::<u32>()),
            });
        }
        pixels.resize(len, 0);
        Ok(Surface {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Scanline-fill a circle, clipped to the surface bounds. Radius 0
    /// paints the center pixel.
    pub fn fill_circle(&mut self, cx: i64, cy: i64, radius: i64, color: u32) {
        if radius < 0 {
            return;
        }
        for dy in -radius..=radius {
            let y = cy + dy;
            if y < 0 || y >= self.height as i64 {
                continue;
            }
            let half = ((radius * radius - dy * dy) as f64).sqrt() as i64;
            let x0 = (cx - half).max(0);
            let x1 = (cx + half).min(self.width as i64 - 1);
            if x0 > x1 {
                continue;
            }
            let row = y as usize * self.width as usize;
            self.pixels[row + x0 as usize..=row + x1 as usize].fill(color);
        }
    }

    /// Read back one pixel; `None` outside the bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }
}

/// Metrics of one completed raster stress run.
#[derive(Clone, Debug)]
pub struct RasterStressReport {
    /// Normalized sub-score
    pub score: u64,
    /// Fully completed draw passes within the time box
    pub pass_count: u64,
    /// Measured wall-clock time in milliseconds
    pub elapsed_ms: u64,
    /// True when the workload stopped early and the score covers only the
    /// passes reached before the failure
    pub degraded: bool,
}

/// One full pass: `draws_per_pass` filled circles with deterministically
/// varied color, center, and radius.
fn draw_pass(surface: &mut Surface, draws_per_pass: u32) {
    let dim = surface.width() as u64;
    for i in 0..draws_per_pass as u64 {
        let color = 0xFF00_0000u32 + ((i * 1_234_567) % 0xFF_FFFF) as u32;
        let cx = (i * 10 % dim) as i64;
        let cy = (i * 15 % dim) as i64;
        let radius = (i % 50) as i64;
        surface.fill_circle(cx, cy, radius, color);
    }
}

/// Run draw passes until the time box elapses and derive the sub-score
/// from the pass count.
///
/// Failure policy: a surface that cannot allocate its backing storage is a
/// non-fatal degradation. The warning is surfaced to the operator and the
/// score covers the passes completed before the failure, so the overall
/// benchmark run continues with the other generators.
pub fn run(settings: &BenchSettings) -> RasterStressReport {
    let started = Instant::now();
    let dim = settings.raster_surface_dim;

    let mut surface = match Surface::try_new(dim, dim) {
        Ok(surface) => surface,
        Err(e) => {
            log::warn!("raster stress degraded: {}; scoring 0 completed passes", e);
            return RasterStressReport {
                score: scoring::raster_score(0),
                pass_count: 0,
                elapsed_ms: started.elapsed().as_millis() as u64,
                degraded: true,
            };
        }
    };

    // Pass-time distribution is observational only; never affects the score
    let mut pass_times = Histogram::<u64>::new(3).ok();
    let mut pass_count: u64 = 0;

    while (started.elapsed().as_millis() as u64) < settings.raster_time_box_ms {
        let pass_started = Instant::now();
        draw_pass(&mut surface, settings.raster_draws_per_pass);
        pass_count += 1;
        if let Some(hist) = pass_times.as_mut() {
            let _ = hist.record(pass_started.elapsed().as_micros() as u64);
        }
    }

    let elapsed_ms = started.elapsed().as_millis() as u64;
    let score = scoring::raster_score(pass_count);

    match pass_times {
        Some(ref hist) if pass_count > 0 => log::info!(
            "raster stress: {} passes in {} ms (p99 pass {} us), score {}",
            pass_count,
            elapsed_ms,
            hist.value_at_quantile(0.99),
            score
        ),
        _ => log::info!(
            "raster stress: {} passes in {} ms, score {}",
            pass_count,
            elapsed_ms,
            score
        ),
    }

    RasterStressReport {
        score,
        pass_count,
        elapsed_ms,
        degraded: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_paints_center_pixel() {
        let mut surface = Surface::try_new(16, 16).unwrap();
        surface.fill_circle(8, 8, 3, 0xFFAA_BBCC);
        assert_eq!(surface.pixel(8, 8), Some(0xFFAA_BBCC));
        assert_eq!(surface.pixel(8, 11), Some(0xFFAA_BBCC));
        assert_eq!(surface.pixel(0, 0), Some(0));
    }

    #[test]
    fn test_zero_radius_paints_single_pixel() {
        let mut surface = Surface::try_new(8, 8).unwrap();
        surface.fill_circle(3, 3, 0, 0xFF00_00FF);
        assert_eq!(surface.pixel(3, 3), Some(0xFF00_00FF));
        assert_eq!(surface.pixel(4, 3), Some(0));
        assert_eq!(surface.pixel(3, 4), Some(0));
    }

    #[test]
    fn test_clipping_never_panics() {
        let mut surface = Surface::try_new(8, 8).unwrap();
        surface.fill_circle(-5, -5, 3, 0xFF11_2233);
        surface.fill_circle(100, 100, 30, 0xFF11_2233);
        surface.fill_circle(0, 0, 50, 0xFF11_2233);
        assert_eq!(surface.pixel(0, 0), Some(0xFF11_2233));
    }

    #[test]
    fn test_pixel_out_of_bounds_is_none() {
        let surface = Surface::try_new(4, 4).unwrap();
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.pixel(0, 4), None);
    }

    #[test]
    fn test_draw_parameters_vary_deterministically() {
        // Two identical passes over fresh surfaces paint identical pixels
        let mut a = Surface::try_new(64, 64).unwrap();
        let mut b = Surface::try_new(64, 64).unwrap();
        draw_pass(&mut a, 200);
        draw_pass(&mut b, 200);
        assert_eq!(a.pixels, b.pixels);
        assert!(a.pixels.iter().any(|&p| p != 0));
    }

    #[test]
    fn test_time_boxed_run_completes_passes() {
        let settings = BenchSettings {
            raster_surface_dim: 64,
            raster_draws_per_pass: 100,
            raster_time_box_ms: 40,
            ..BenchSettings::default()
        };
        let report = run(&settings);
        assert!(!report.degraded);
        assert!(report.pass_count >= 1);
        assert_eq!(report.score, report.pass_count * 2);
        assert!(report.elapsed_ms >= settings.raster_time_box_ms);
    }
}
