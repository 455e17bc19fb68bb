use plotters::style::RGBColor;


/// Colors of the classes `1, 2, ..., 5`.
/// Larger labels cycle through the same colors.
pub const CLASS_COLORS: [RGBColor; 5] = [
    RGBColor(255, 0, 102),
    RGBColor(0, 102, 255),
    RGBColor(0, 255, 127),
    RGBColor(255, 178, 127),
    RGBColor(178, 153, 127),
];


/// Returns the color of class `label` (`1`-indexed).
pub fn class_color(label: usize) -> RGBColor {
    let k = label.saturating_sub(1) % CLASS_COLORS.len();
    CLASS_COLORS[k]
}
