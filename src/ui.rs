//! Full-screen report viewer.
//!
//! This module holds the pager state and renders it with `ratatui`; the
//! terminal setup lives in the runtime.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
};

const CONTROLS: &[(&str, &str)] = &[
    ("j/k", "down/up"),
    ("h/l", "left/right"),
    ("ctrl-d/u", "half page"),
    ("gg/G", "top/bottom"),
    ("q", "quit"),
];

/// Horizontal scroll step for `h` / `l`.
const COLUMN_STEP: usize = 8;

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Scroll state over a fixed set of report lines.
pub struct Pager {
    title: String,
    lines: Vec<String>,
    pub top: usize,
    pub left: usize,
    pending_g: bool,
}

impl Pager {
    pub fn new(title: impl Into<String>, report: &str) -> Self {
        Self {
            title: title.into(),
            lines: report.lines().map(str::to_string).collect(),
            top: 0,
            left: 0,
            pending_g: false,
        }
    }

    fn max_top(&self, height: usize) -> usize {
        self.lines.len().saturating_sub(height.max(1))
    }

    fn max_left(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .saturating_sub(1)
    }

    fn scroll_down(&mut self, n: usize, height: usize) {
        self.top = (self.top + n).min(self.max_top(height));
    }

    fn scroll_up(&mut self, n: usize) {
        self.top = self.top.saturating_sub(n);
    }

    /// Apply one key press for a viewport `height` rows tall.
    /// Returns `true` when the pager should close.
    pub fn handle_key(&mut self, key: KeyEvent, height: usize) -> bool {
        let pending_g = std::mem::take(&mut self.pending_g);
        let half = (height / 2).max(1);

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_down(half, height)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_up(half)
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1, height),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_down(height.max(1), height),
            KeyCode::PageUp => self.scroll_up(height.max(1)),
            KeyCode::Char('l') | KeyCode::Right => {
                self.left = (self.left + COLUMN_STEP).min(self.max_left())
            }
            KeyCode::Char('h') | KeyCode::Left => self.left = self.left.saturating_sub(COLUMN_STEP),
            KeyCode::Char('G') | KeyCode::End => self.top = self.max_top(height),
            KeyCode::Home => self.top = 0,
            KeyCode::Char('g') => {
                if pending_g {
                    self.top = 0;
                } else {
                    self.pending_g = true;
                }
            }
            _ => {}
        }
        false
    }
}

/// Rows available for report text in a frame `total_height` rows tall.
pub fn body_height(total_height: u16) -> usize {
    // header box (3) + footer box (3) + body borders (2)
    usize::from(total_height.saturating_sub(8))
}

/// Render the pager into `frame`.
pub fn draw(frame: &mut Frame, pager: &Pager) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(pager.title.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" brainzdiff ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let body: Vec<Line> = pager.lines.iter().map(|l| Line::raw(l.as_str())).collect();
    let position = format!(
        " {}-{} of {} ",
        (pager.top + 1).min(pager.lines.len()),
        (pager.top + usize::from(chunks[1].height.saturating_sub(2))).min(pager.lines.len()),
        pager.lines.len()
    );
    let report = Paragraph::new(Text::from(body))
        .scroll((
            u16::try_from(pager.top).unwrap_or(u16::MAX),
            u16::try_from(pager.left).unwrap_or(u16::MAX),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(position)
                .title_alignment(Alignment::Right),
        );
    frame.render_widget(report, chunks[1]);

    let footer = Paragraph::new(controls_text())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn pager(lines: usize) -> Pager {
        let report: Vec<String> = (0..lines).map(|i| format!("line {i}")).collect();
        Pager::new("t", &report.join("\n"))
    }

    #[test]
    fn scrolling_is_clamped_to_the_report() {
        let mut p = pager(10);
        assert!(!p.handle_key(key(KeyCode::Char('k')), 4));
        assert_eq!(p.top, 0);
        for _ in 0..20 {
            p.handle_key(key(KeyCode::Char('j')), 4);
        }
        assert_eq!(p.top, 6);
    }

    #[test]
    fn gg_and_g_jump_to_ends() {
        let mut p = pager(30);
        p.handle_key(key(KeyCode::Char('G')), 10);
        assert_eq!(p.top, 20);
        p.handle_key(key(KeyCode::Char('g')), 10);
        assert_eq!(p.top, 20);
        p.handle_key(key(KeyCode::Char('g')), 10);
        assert_eq!(p.top, 0);
    }

    #[test]
    fn a_key_between_gs_cancels_the_jump() {
        let mut p = pager(30);
        p.handle_key(key(KeyCode::Char('G')), 10);
        p.handle_key(key(KeyCode::Char('g')), 10);
        p.handle_key(key(KeyCode::Char('k')), 10);
        p.handle_key(key(KeyCode::Char('g')), 10);
        assert_eq!(p.top, 19);
    }

    #[test]
    fn half_page_moves_and_quit_keys_close() {
        let mut p = pager(30);
        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        p.handle_key(ctrl_d, 10);
        assert_eq!(p.top, 5);

        assert!(p.handle_key(key(KeyCode::Char('q')), 10));
        assert!(p.handle_key(key(KeyCode::Esc), 10));
        let ctrl_c = KeyEvent::new_with_kind(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        );
        assert!(p.handle_key(ctrl_c, 10));
    }

    #[test]
    fn horizontal_scroll_stops_at_longest_line() {
        let mut p = Pager::new("t", "short\nsixteen chars!!!");
        for _ in 0..5 {
            p.handle_key(key(KeyCode::Char('l')), 10);
        }
        assert_eq!(p.left, 15);
        p.handle_key(key(KeyCode::Char('h')), 10);
        assert_eq!(p.left, 7);
    }

    #[test]
    fn body_height_leaves_room_for_chrome() {
        assert_eq!(body_height(30), 22);
        assert_eq!(body_height(5), 0);
    }
}
