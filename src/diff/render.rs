use super::align::AlignedLine;

const UNIFIED_MARKER: &str = "== ";
const UNIFIED_INDENT: usize = 10;
const COLUMN_SEPARATOR: char = '|';

/// Column geometry of the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLayout {
    /// Characters reserved for the left column of paired rows.
    pub left_width: usize,
    /// Length of banner and separator rules.
    pub separator_width: usize,
}

impl Default for RenderLayout {
    fn default() -> Self {
        Self {
            left_width: 60,
            separator_width: 120,
        }
    }
}

/// Pad or truncate `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - len));
    out
}

pub fn render_line(line: &AlignedLine, layout: &RenderLayout) -> String {
    match line {
        AlignedLine::Unified(text) => {
            format!("{}{UNIFIED_MARKER}{text}", " ".repeat(UNIFIED_INDENT))
        }
        AlignedLine::Paired(left, right) => format!(
            "{} {COLUMN_SEPARATOR} {right}",
            fit(left, layout.left_width)
        ),
    }
}

pub fn render(lines: &[AlignedLine], layout: &RenderLayout) -> Vec<String> {
    lines.iter().map(|l| render_line(l, layout)).collect()
}
