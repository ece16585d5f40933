//! Standard (non-embedded) PDF fonts
//!
//! Reports only use the base-14 Helvetica faces, so no font program is
//! embedded. Widths come from the Adobe AFM metrics (units per 1000 em) and
//! text is written in WinAnsiEncoding.

/// Advance widths for Helvetica, characters 0x20..=0x7E
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0x30
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 0x50
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 0x60
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 0x70
];

/// Advance widths for Helvetica-Bold, characters 0x20..=0x7E
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0x30
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 0x50
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 0x60
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 0x70
];

/// Width used for characters outside the ASCII tables
const FALLBACK_WIDTH: u16 = 556;

/// Marker appended to truncated text
pub(crate) const ELLIPSIS: char = '\u{2026}';

/// Base-14 font faces available without embedding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StandardFont {
    #[default]
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// PostScript name used as the `BaseFont` entry
    pub fn base_font(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Resource name used in page content streams
    pub fn resource_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
        }
    }

    /// All faces, in resource order
    pub fn all() -> [StandardFont; 2] {
        [StandardFont::Helvetica, StandardFont::HelveticaBold]
    }

    /// Glyph advance in 1/1000 em
    fn char_width(self, c: char) -> u16 {
        let bold = self == StandardFont::HelveticaBold;
        match c {
            ' '..='~' => {
                let idx = c as usize - 0x20;
                if bold {
                    HELVETICA_BOLD_WIDTHS[idx]
                } else {
                    HELVETICA_WIDTHS[idx]
                }
            }
            '\u{2026}' | '\u{2014}' | '\u{2030}' => 1000,
            '\u{2022}' => 350,
            '\u{2018}' | '\u{2019}' if bold => 278,
            '\u{2018}' | '\u{2019}' => 222,
            '\u{201C}' | '\u{201D}' if bold => 500,
            '\u{201C}' | '\u{201D}' => 333,
            _ => FALLBACK_WIDTH,
        }
    }

    /// Width of `text` in points at `font_size`
    pub fn text_width_points(self, text: &str, font_size: f32) -> f64 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f64 * font_size as f64 / 1000.0
    }

    /// Cut `text` so that it fits into `max_width` points
    ///
    /// Text that already fits is returned unchanged. Otherwise the longest
    /// prefix that fits together with a trailing ellipsis is returned; if not
    /// even the ellipsis fits the result is empty.
    pub fn truncate_to_width(self, text: &str, font_size: f32, max_width: f64) -> String {
        if self.text_width_points(text, font_size) <= max_width {
            return text.to_string();
        }

        let scale = font_size as f64 / 1000.0;
        let budget = max_width - self.char_width(ELLIPSIS) as f64 * scale;
        if budget < 0.0 {
            return String::new();
        }

        let mut used = 0.0;
        let mut out = String::new();
        for c in text.chars() {
            let w = self.char_width(c) as f64 * scale;
            if used + w > budget {
                break;
            }
            used += w;
            out.push(c);
        }

        let mut out = out.trim_end().to_string();
        out.push(ELLIPSIS);
        out
    }
}

/// Encode text as WinAnsiEncoding bytes
///
/// Characters with no WinAnsi code point are replaced by `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => c as u8,
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2030}' => 0x89,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ => b'?',
        })
        .collect()
}

/// Encode text as a PDF hex string (e.g. `<48656C6C6F>`)
pub fn encode_text_hex(text: &str) -> String {
    let mut hex = String::from("<");
    for byte in encode_win_ansi(text) {
        hex.push_str(&format!("{byte:02X}"));
    }
    hex.push('>');
    hex
}
