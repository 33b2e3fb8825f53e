use std::fmt::Write as _;

/// SGR style codes used by the summary renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Faint,
    Red,
    Green,
    Cyan,
}

impl Style {
    fn code(self) -> u8 {
        match self {
            Style::Bold => 1,
            Style::Faint => 2,
            Style::Red => 31,
            Style::Green => 32,
            Style::Cyan => 36,
        }
    }
}

/// Color capability threaded through every rendering call, so no component
/// reads ambient terminal state. `Plain` passes text through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Ansi,
    Plain,
}

impl Palette {
    pub fn for_colors(enable_colors: bool) -> Self {
        if enable_colors { Palette::Ansi } else { Palette::Plain }
    }

    pub fn paint(self, text: &str, styles: &[Style]) -> String {
        match self {
            Palette::Plain => text.to_string(),
            Palette::Ansi => {
                if styles.is_empty() {
                    return text.to_string();
                }
                let mut out = String::from("\u{1b}[");
                for (i, style) in styles.iter().enumerate() {
                    if i > 0 {
                        out.push(';');
                    }
                    let _ = write!(out, "{}", style.code());
                }
                let _ = write!(out, "m{text}\u{1b}[0m");
                out
            }
        }
    }
}
