use crate::types::ColorSample;

// Constants from apca-w3 0.1.9 SA98G object
const MAIN_TRC: f64 = 2.4;
const S_RCO: f64 = 0.2126729;
const S_GCO: f64 = 0.7151522;
const S_BCO: f64 = 0.0721750;

const NORM_BG: f64 = 0.56;
const NORM_TXT: f64 = 0.57;
const REV_BG: f64 = 0.65;
const REV_TXT: f64 = 0.62;

const BLK_THRS: f64 = 0.022;
const BLK_CLMP: f64 = 1.414;

const SCALE_BOW: f64 = 1.14;
const SCALE_WOB: f64 = 1.14;
const LO_BOW_OFFSET: f64 = 0.027;
const LO_WOB_OFFSET: f64 = 0.027;
const DELTA_Y_MIN: f64 = 0.0005;
const LO_CLIP: f64 = 0.1;

/// Screen luminance with the simple power curve (NOT the WCAG piecewise function),
/// soft-clamped near black.
fn screen_luminance(sample: &ColorSample) -> f64 {
    let linearize = |c: u8| -> f64 { (f64::from(c) / 255.0).powf(MAIN_TRC) };

    let y = S_RCO * linearize(sample.r) + S_GCO * linearize(sample.g) + S_BCO * linearize(sample.b);
    if y > BLK_THRS {
        y
    } else {
        y + (BLK_THRS - y).powf(BLK_CLMP)
    }
}

/// Calculate APCA Lightness Contrast (Lc) for opaque text over an opaque background.
/// Positive Lc = dark text on light bg.
/// Negative Lc = light text on dark bg.
/// |Lc| >= 60 is roughly equivalent to WCAG AA for body text.
pub fn calc_apca_lc(text: &ColorSample, bg: &ColorSample) -> f64 {
    let txt_y = screen_luminance(text);
    let bg_y = screen_luminance(bg);

    if (bg_y - txt_y).abs() < DELTA_Y_MIN {
        return 0.0;
    }

    let output_contrast = if bg_y > txt_y {
        let sapc = (bg_y.powf(NORM_BG) - txt_y.powf(NORM_TXT)) * SCALE_BOW;
        if sapc < LO_CLIP { 0.0 } else { sapc - LO_BOW_OFFSET }
    } else {
        let sapc = (bg_y.powf(REV_BG) - txt_y.powf(REV_TXT)) * SCALE_WOB;
        if sapc > -LO_CLIP { 0.0 } else { sapc + LO_WOB_OFFSET }
    };

    output_contrast * 100.0
}
