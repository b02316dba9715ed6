use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::matching::TerminalPrompt;

use super::offer::SideAction;

/// Opens a URL outside the process.
pub trait Launcher {
    fn open(&mut self, url: &str) -> io::Result<()>;
}

/// Opens URLs in the user's default browser.
pub struct BrowserLauncher;

impl Launcher for BrowserLauncher {
    fn open(&mut self, url: &str) -> io::Result<()> {
        webbrowser::open(url)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Ask about each action in turn and open the confirmed ones.
///
/// Anything but `y`/`yes` declines. End of input declines the remaining
/// actions. A launcher failure is reported and does not stop the loop.
/// Returns how many pages were opened.
pub fn confirm_and_launch<R: BufRead, W: Write>(
    actions: &[SideAction],
    site: &str,
    prompt: &mut TerminalPrompt<R, W>,
    launcher: &mut dyn Launcher,
) -> io::Result<usize> {
    let mut opened = 0;
    for action in actions {
        let url = action.url(site);
        let question = format!("{}?\n  {url}\nOpen in browser [y/N]", action.describe());
        let Some(answer) = prompt.read_answer(&question)? else {
            break;
        };
        if !is_yes(&answer) {
            continue;
        }
        match launcher.open(&url) {
            Ok(()) => {
                info!("opened {url}");
                opened += 1;
            }
            Err(e) => {
                warn!("failed to open '{url}': {e}");
                prompt.say(&format!("Could not open a browser; visit {url} manually."))?;
            }
        }
    }
    Ok(opened)
}
