use crate::types::ColorSample;

/// Alpha-composite `top` over an opaque `backdrop`.
/// formula per channel: result = top * alpha + backdrop * (1 - alpha)
/// Channels are rounded to the nearest integer; the result is opaque.
pub fn composite_over(top: &ColorSample, backdrop: &ColorSample) -> ColorSample {
    let alpha = top.a.clamp(0.0, 1.0);

    let blend = |t: u8, b: u8| -> u8 {
        let result = f64::from(t) * alpha + f64::from(b) * (1.0 - alpha);
        result.round().clamp(0.0, 255.0) as u8
    };

    ColorSample::opaque(
        blend(top.r, backdrop.r),
        blend(top.g, backdrop.g),
        blend(top.b, backdrop.b),
    )
}

/// Resolve `sample` to what is actually visible over `backdrop`.
/// Opaque samples come back untouched.
pub fn flatten(sample: &ColorSample, backdrop: &ColorSample) -> ColorSample {
    if sample.is_opaque() {
        *sample
    } else {
        composite_over(sample, backdrop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: ColorSample = ColorSample::opaque(255, 0, 0);
    const BLUE: ColorSample = ColorSample::opaque(0, 0, 255);

    #[test]
    fn opaque_top_returns_top() {
        assert_eq!(composite_over(&RED, &BLUE), RED);
    }

    #[test]
    fn transparent_top_returns_backdrop() {
        let clear_red = ColorSample::new(255, 0, 0, 0.0);
        assert_eq!(composite_over(&clear_red, &BLUE), BLUE);
    }

    #[test]
    fn half_transparent_blends() {
        // R: 255*0.5 + 0*0.5 = 127.5 -> 128, B: 0*0.5 + 255*0.5 -> 128
        let half_red = ColorSample::new(255, 0, 0, 0.5);
        assert_eq!(composite_over(&half_red, &BLUE), ColorSample::opaque(128, 0, 128));
    }

    #[test]
    fn half_black_on_white_is_mid_gray() {
        let half_black = ColorSample::new(0, 0, 0, 0.5);
        assert_eq!(
            composite_over(&half_black, &ColorSample::WHITE),
            ColorSample::opaque(128, 128, 128)
        );
    }

    #[test]
    fn flatten_passes_opaque_through() {
        assert_eq!(flatten(&RED, &ColorSample::WHITE), RED);
    }

    #[test]
    fn flatten_transparent_keyword_yields_backdrop() {
        assert_eq!(flatten(&ColorSample::TRANSPARENT, &BLUE), BLUE);
    }
}
