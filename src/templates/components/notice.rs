use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Warning,
    Error,
    Success,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Warning => "notice",
            Tone::Error => "notice error",
            Tone::Success => "notice success",
        }
    }
}

pub fn notice(tone: Tone, title: &str, message: &str) -> Markup {
    html! {
        div class=(tone.class()) role="status" {
            strong { (title) }
            p { (message) }
        }
    }
}
