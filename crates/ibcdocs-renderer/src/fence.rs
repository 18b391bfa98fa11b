//! Fenced code block tracking for line-based preprocessing.

/// Tracks whether the current line is inside a fenced code block.
///
/// A fence opens with three or more backticks or tildes and closes with a
/// line of at least as many of the same character and nothing else.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed the next line. Fence delimiter lines count as inside the fence.
    pub(crate) fn update(&mut self, line: &str) {
        let trimmed = line.trim_start();
        match self.open {
            Some((ch, len)) => {
                let run = run_of(trimmed, ch);
                if run >= len && trimmed[run..].trim().is_empty() {
                    self.open = None;
                }
            }
            None => {
                self.open = ['`', '~']
                    .into_iter()
                    .map(|ch| (ch, run_of(trimmed, ch)))
                    .find(|&(ch, run)| {
                        run >= 3 && !(ch == '`' && trimmed[run..].contains('`'))
                    });
            }
        }
    }
}

/// Byte length of the leading run of `ch` (ASCII only).
fn run_of(s: &str, ch: char) -> usize {
    s.chars().take_while(|&c| c == ch).count()
}
