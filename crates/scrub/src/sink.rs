use foundation::math::GeoPoint;
use trail::reveal::RevealSplit;

/// Narrow seam to the external map renderer.
///
/// The session pushes both outputs each admitted tick; implementations map
/// the reveal split onto a line-visibility control (e.g. a dash pattern) and
/// the point onto a marker reposition. The core has no compile-time
/// dependency on any rendering library.
pub trait RenderSink {
    fn render_reveal(&mut self, split: RevealSplit);
    fn render_marker(&mut self, point: GeoPoint);
}
