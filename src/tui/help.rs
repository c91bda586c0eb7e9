//! Help screen: modal overlay showing the key reference.

/// A line in the help screen.
#[derive(Debug, Clone)]
pub struct HelpLine {
    pub text: String,
    pub is_header: bool,
}

/// Help screen state.
#[derive(Debug, Clone)]
pub struct HelpScreen {
    pub visible: bool,
    content: Vec<HelpLine>,
}

impl HelpScreen {
    pub fn new() -> Self {
        Self {
            visible: false,
            content: Self::build_content(),
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn lines(&self) -> &[HelpLine] {
        &self.content
    }

    fn build_content() -> Vec<HelpLine> {
        let h = |text: &str| HelpLine {
            text: text.to_string(),
            is_header: true,
        };
        let l = |text: &str| HelpLine {
            text: text.to_string(),
            is_header: false,
        };

        vec![
            h("FIELDS"),
            l("  Tab / Down       Next field"),
            l("  Shift-Tab / Up   Previous field"),
            l("  Left / Right     Step value"),
            l("  Shift-Arrows     Step x10 (also PgUp/PgDn)"),
            l("  Home / End       Minimum / maximum"),
            l("  0-9 .            Type a value"),
            l(""),
            h("TYPING A VALUE"),
            l("  Enter / Tab      Commit"),
            l("  Esc              Cancel"),
            l("  Backspace        Delete last character"),
            l(""),
            h("CLOCK"),
            l("  Space            Start / stop"),
            l("  Enter            Start / stop (on the clock button)"),
            l("  Editing time stops a running clock"),
            l(""),
            h("GLOBAL"),
            l("  ?                Toggle this help"),
            l("  Ctrl-T           Cycle theme"),
            l("  q / Ctrl-Q       Quit"),
        ]
    }
}

impl Default for HelpScreen {
    fn default() -> Self {
        Self::new()
    }
}
