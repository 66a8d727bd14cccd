use cairo::{Context, Error, TextExtents};

/// Text that has been measured and placed, but not yet shown.
pub struct PlacedText<'a> {
    pub text: &'a str,

    /// The left end of the baseline, in canvas units.
    pub origin: (f64, f64),

    pub extents: TextExtents,
}

impl PlacedText<'_> {
    /// Returns the horizontal `(left, right)` span covered by the text.
    pub fn x_span(&self) -> (f64, f64) {
        (self.origin.0, self.origin.0 + self.extents.width())
    }

    /// Returns the vertical `(top, bottom)` span covered by the text.
    pub fn y_span(&self) -> (f64, f64) {
        (self.origin.1 - self.extents.height(), self.origin.1)
    }
}

/// Aligned text placement for [`Context`], used to lay out tick labels.
pub trait ShowTextAlign {
    /// Measures the text and places it at the given `(x, y)` position with the given alignment.
    ///
    /// The alignment is a pair of `(x, y)` values between `0.0` and `1.0`: `(0.0, 0.0)` puts the
    /// bottom left corner of the text on the point, `(0.5, 0.5)` centers it, and `(1.0, 1.0)`
    /// puts the top right corner there.
    fn place_text<'a>(
        &self,
        text: &'a str,
        point: (f64, f64),
        align: (f64, f64),
    ) -> Result<PlacedText<'a>, Error>;

    /// Shows text placed by [`ShowTextAlign::place_text`].
    fn show_placed(&self, placed: &PlacedText) -> Result<(), Error>;
}

impl ShowTextAlign for Context {
    fn place_text<'a>(
        &self,
        text: &'a str,
        (x, y): (f64, f64),
        align: (f64, f64),
    ) -> Result<PlacedText<'a>, Error> {
        let extents = self.text_extents(text)?;
        Ok(PlacedText {
            text,
            origin: (x - extents.width() * align.0, y + extents.height() * align.1),
            extents,
        })
    }

    fn show_placed(&self, placed: &PlacedText) -> Result<(), Error> {
        self.move_to(placed.origin.0, placed.origin.1);
        self.show_text(placed.text)
    }
}

/// Formats a graph value for display, with at most 3 decimal places and no trailing zeros.
pub fn format_value(value: f64) -> String {
    let raw = format!("{:.3}", value);
    let trimmed = if raw.contains('.') {
        raw.trim_end_matches('0').trim_end_matches('.')
    } else {
        &raw
    };
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_values() {
        assert_eq!(format_value(3.0), "3");
        assert_eq!(format_value(-2.5), "-2.5");
        assert_eq!(format_value(0.125), "0.125");
        assert_eq!(format_value(1.0 / 3.0), "0.333");
        assert_eq!(format_value(10.0), "10");
        assert_eq!(format_value(-0.0001), "0");
    }
}
