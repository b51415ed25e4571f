//! Fixed visual style for exported resumes.
//!
//! Word measures sizes in half-points and distances in twips (1/20 pt, 1440 per inch).
//! The whole stylesheet is a single constant value; nothing mutates it at runtime.

/// Fonts, colours, sizes and page geometry used by the DOCX renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stylesheet {
    pub font: &'static str,
    /// Hex RGB without `#`.
    pub body_color: &'static str,
    pub accent_color: &'static str,
    pub rule_color: &'static str,
    pub body_size: usize,
    pub name_size: usize,
    pub contact_size: usize,
    /// Heading sizes for levels 1, 2 and 3.
    pub heading_sizes: [usize; 3],
    pub page_width: u32,
    pub page_height: u32,
    pub margin: i32,
    /// 240 is single spacing.
    pub line_spacing: i32,
    pub paragraph_after: u32,
    pub bullet_after: u32,
    pub heading_before: u32,
    pub heading_after: u32,
    pub bullet_indent: i32,
    pub rule_size: usize,
}

impl Stylesheet {
    /// Calibri 10.5pt on US letter with 0.5" margins and 1.15 line spacing.
    pub const DEFAULT: Stylesheet = Stylesheet {
        font: "Calibri",
        body_color: "222222",
        accent_color: "1F3A5F",
        rule_color: "A6A6A6",
        body_size: 21,
        name_size: 36,
        contact_size: 19,
        heading_sizes: [28, 24, 22],
        page_width: 12_240,
        page_height: 15_840,
        margin: 720,
        line_spacing: 276,
        paragraph_after: 80,
        bullet_after: 40,
        heading_before: 160,
        heading_after: 60,
        bullet_indent: 360,
        rule_size: 6,
    };

    /// Width between the left and right margins, in twips.
    pub fn text_width(&self) -> usize {
        (self.page_width as i64 - 2 * i64::from(self.margin)).max(0) as usize
    }

    /// Heading size for `level`, clamped to 1..=3.
    pub fn heading_size(&self, level: u8) -> usize {
        let index = usize::from(level.clamp(1, 3)) - 1;
        self.heading_sizes[index]
    }

    /// Levels 1 and 2 take the accent colour; level 3 stays in body colour.
    pub fn heading_color(&self, level: u8) -> &'static str {
        if level <= 2 {
            self.accent_color
        } else {
            self.body_color
        }
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_is_letter_minus_half_inch_margins() {
        assert_eq!(Stylesheet::DEFAULT.text_width(), 10_800);
    }

    #[test]
    fn test_heading_sizes_decrease() {
        let sheet = Stylesheet::DEFAULT;
        assert!(sheet.heading_size(1) > sheet.heading_size(2));
        assert!(sheet.heading_size(2) > sheet.heading_size(3));
        assert_eq!(sheet.heading_size(9), sheet.heading_size(3));
    }

    #[test]
    fn test_heading_colors() {
        let sheet = Stylesheet::DEFAULT;
        assert_eq!(sheet.heading_color(1), sheet.accent_color);
        assert_eq!(sheet.heading_color(2), sheet.accent_color);
        assert_eq!(sheet.heading_color(3), sheet.body_color);
    }
}
