// Waveform extraction from decoded image pixels.
//
// A drawing is read as a function of x: for each column, the first
// non-background pixel from the top provides that column's value, and the
// rest of the column is skipped — a waveform has exactly one y per x.
// Background is a fully opaque white pixel. The y axis is inverted so that
// higher ink on the page means a higher value.
//
// Decoding the image file is the caller's job; this module only consumes a
// flat RGBA buffer. The resulting values feed `wren_theory::nearest_pitch`
// to clamp a drawing to a scale.

/// Per-column trace values of an RGBA image, top row first in memory.
///
/// `rgba` is row-major, four bytes per pixel, `width * height * 4` long.
/// Columns containing only background yield no value. Panics in debug
/// builds if the buffer length does not match the dimensions.
pub fn waveform_from_rgba(width: u32, height: u32, rgba: &[u8]) -> Vec<i64> {
    debug_assert_eq!(rgba.len(), (width * height * 4) as usize);

    let mut values = Vec::with_capacity(width as usize);
    for x in 0..width {
        for y in 0..height {
            let offset = ((y * width + x) * 4) as usize;
            let pixel = &rgba[offset..offset + 4];
            if pixel != [255, 255, 255, 255] {
                values.push(linear_map(
                    f64::from(y),
                    0.0,
                    f64::from(height),
                    f64::from(height),
                    0.0,
                ) as i64);
                break;
            }
        }
    }
    values
}

/// Linearly map `value` from `[from_low, from_high]` to `[to_low, to_high]`.
pub fn linear_map(value: f64, from_low: f64, from_high: f64, to_low: f64, to_high: f64) -> f64 {
    (value - from_low) * (to_high - to_low) / (from_high - from_low) + to_low
}
