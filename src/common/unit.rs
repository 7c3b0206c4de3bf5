//! Unit conversion utilities.
//!
//! DrawingML measures lengths in English Metric Units (EMU). Text sizes are
//! written in hundredths of a point and line widths in EMU.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert inches to EMU, truncating toward zero.
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64) as i64
}

/// Convert points to EMU, truncating toward zero.
#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

/// Convert a point size to the `sz` attribute unit (1/100 pt).
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

/// Scale an EMU length by a fraction (used for page-relative positions).
#[inline]
pub fn scale_emu(emu: i64, fraction: f64) -> i64 {
    (emu as f64 * fraction) as i64
}
