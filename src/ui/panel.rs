//! Bordered text panel used for menus and summaries.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy)]
struct Borders {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

const UNICODE_BORDERS: Borders = Borders {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    horizontal: "─",
    vertical: "│",
};

const ASCII_BORDERS: Borders = Borders {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    horizontal: "-",
    vertical: "|",
};

#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    content: Vec<String>,
}

impl Panel {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let b = if supports_unicode {
            UNICODE_BORDERS
        } else {
            ASCII_BORDERS
        };

        let mut lines: Vec<&str> = Vec::with_capacity(self.content.len() + 1);
        if let Some(title) = &self.title {
            lines.push(title);
        }
        lines.extend(self.content.iter().map(String::as_str));

        let text_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        let rule = b.horizontal.repeat(text_width + 2);

        let mut out = String::new();
        out.push_str(&format!("{}{}{}\n", b.top_left, rule, b.top_right));
        for line in lines {
            let pad = " ".repeat(text_width - line.width());
            out.push_str(&format!("{} {}{} {}\n", b.vertical, line, pad, b.vertical));
        }
        out.push_str(&format!("{}{}{}", b.bottom_left, rule, b.bottom_right));
        out
    }
}
