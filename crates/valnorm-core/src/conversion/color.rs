//! RGB / HSL conversion and 24-bit packing.
//!
//! RGB channels are integers in `0..=255`; HSL components are floats in
//! `0.0..=1.0` with hue normalized from degrees to `[0, 1)`.

/// Converts an RGB triple to HSL.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> [f64; 3] {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, l];
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    [h / 6.0, s, l]
}

/// Converts an HSL triple back to RGB.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    if s == 0.0 {
        let v = channel(l);
        return [v, v, v];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        channel(hue_to_rgb(p, q, h)),
        channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    ]
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Scales a unit float to a channel, rounding halves up.
fn channel(unit: f64) -> u8 {
    (unit * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Packs three bytes as `0xAABBCC`.
pub fn pack(bytes: [u8; 3]) -> u32 {
    (u32::from(bytes[0]) << 16) + (u32::from(bytes[1]) << 8) + u32::from(bytes[2])
}

/// Splits the low 24 bits of `packed` into three bytes.
pub fn unpack(packed: u32) -> [u8; 3] {
    [
        ((packed >> 16) & 0xff) as u8,
        ((packed >> 8) & 0xff) as u8,
        (packed & 0xff) as u8,
    ]
}

/// Packs an HSL triple, scaling each component to a byte and rounding up.
pub fn pack_hsl(hsl: [f64; 3]) -> u32 {
    pack(hsl.map(|component| (component * 255.0).ceil().clamp(0.0, 255.0) as u8))
}

/// Reads a packed value back as an HSL triple.
pub fn unpack_hsl(packed: u32) -> [f64; 3] {
    unpack(packed).map(|byte| f64::from(byte) / 255.0)
}

/// Formats RGB as six lowercase hex digits.
pub fn rgb_hex(rgb: [u8; 3]) -> String {
    format!("{:06x}", pack(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_eq!(rgb_to_hsl(255, 0, 0), [0.0, 1.0, 0.5]);
        assert_eq!(rgb_to_hsl(0, 0, 0), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsl(255, 255, 255), [0.0, 0.0, 1.0]);

        let [h, s, l] = rgb_to_hsl(0, 0, 255);
        assert!((h - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(s, 1.0);
        assert_eq!(l, 0.5);
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.5), [128, 128, 128]);
        assert_eq!(hsl_to_rgb(7.0 / 12.0, 0.5, 0.4), [51, 102, 153]);
    }

    #[test]
    fn test_pack_roundtrip() {
        assert_eq!(pack([0x12, 0x34, 0x56]), 0x123456);
        assert_eq!(unpack(0x123456), [0x12, 0x34, 0x56]);
        assert_eq!(unpack(0xff_123456), [0x12, 0x34, 0x56]);
    }

    #[test]
    fn test_pack_hsl_rounds_up() {
        // l = 0.5 scales to 127.5 and rounds up to 128
        assert_eq!(pack_hsl([0.0, 1.0, 0.5]), 0x00ff80);
    }

    #[test]
    fn test_rgb_hex_is_zero_padded() {
        assert_eq!(rgb_hex([0, 1, 2]), "000102");
        assert_eq!(rgb_hex([255, 1, 1]), "ff0101");
    }
}
