//! Unit conversion utilities.
//!
//! Word-derived style records carry lengths in twips (twentieths of a point).
//! ODF attributes want centimetres, so every length goes through
//! [`twip_to_cm`] and is rendered with [`write_cm`].

pub const TWIPS_PER_INCH: f64 = 1440.0;
pub const TWIPS_PER_PT: f64 = 20.0;
pub const CM_PER_INCH: f64 = 2.54;

/// Suffix appended to every centimetre length written to ODF.
pub const CM_SUFFIX: &str = "cm";

/// Convert twips to centimetres. No rounding is applied.
///
/// # Examples
///
/// ```
/// use odt_styles::common::unit::twip_to_cm;
///
/// assert_eq!(twip_to_cm(1440.0), 2.54);
/// ```
#[inline]
pub fn twip_to_cm(twips: f64) -> f64 {
    twips / TWIPS_PER_INCH * CM_PER_INCH
}

#[inline]
pub fn cm_to_twip(cm: f64) -> f64 {
    cm / CM_PER_INCH * TWIPS_PER_INCH
}

#[inline]
pub fn twip_to_pt(twips: f64) -> f64 {
    twips / TWIPS_PER_PT
}

#[inline]
pub fn pt_to_twip(pt: f64) -> f64 {
    pt * TWIPS_PER_PT
}

/// Write a twip length as a centimetre value with the `cm` suffix.
///
/// Integral results are written without a fractional part, everything else
/// in shortest round-trip form.
///
/// # Examples
///
/// ```
/// use odt_styles::common::unit::write_cm;
///
/// let mut buf = String::new();
/// write_cm(&mut buf, 720.0);
/// assert_eq!(buf, "1.27cm");
/// ```
#[inline]
pub fn write_cm(buf: &mut String, twips: f64) {
    let cm = twip_to_cm(twips);
    if cm.fract() == 0.0 && cm.abs() < 1e15 {
        let mut buffer = itoa::Buffer::new();
        buf.push_str(buffer.format(cm as i64));
    } else {
        let mut buffer = ryu::Buffer::new();
        buf.push_str(buffer.format(cm));
    }
    buf.push_str(CM_SUFFIX);
}

/// Allocating variant of [`write_cm`].
///
/// # Examples
///
/// ```
/// use odt_styles::common::unit::format_cm;
///
/// assert_eq!(format_cm(1440.0), "2.54cm");
/// assert_eq!(format_cm(-720.0), "-1.27cm");
/// ```
#[inline]
pub fn format_cm(twips: f64) -> String {
    let mut s = String::with_capacity(24);
    write_cm(&mut s, twips);
    s
}
