/// Round button flavours used on the call screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Answer,
    Decline,
    /// Small translucent button (remind me, message)
    Secondary,
    /// Labelled in-call control
    Control,
}

impl ButtonStyle {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonStyle::Answer => "round-button round-large bg-green call-button-shadow",
            ButtonStyle::Decline => "round-button round-large bg-red call-button-shadow",
            ButtonStyle::Secondary => "round-button round-small bg-translucent",
            ButtonStyle::Control => "round-button round-control bg-translucent",
        }
    }
}

/// In-call affordances shown on the active screen. None of them do anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InCallControl {
    Mute,
    Keypad,
    Speaker,
    AddCall,
    FaceTime,
    Contacts,
}

impl InCallControl {
    /// Layout of the 3x2 control grid, top row first
    pub const GRID: [[InCallControl; 3]; 2] = [
        [InCallControl::Mute, InCallControl::Keypad, InCallControl::Speaker],
        [InCallControl::AddCall, InCallControl::FaceTime, InCallControl::Contacts],
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InCallControl::Mute => "mute",
            InCallControl::Keypad => "keypad",
            InCallControl::Speaker => "speaker",
            InCallControl::AddCall => "add call",
            InCallControl::FaceTime => "FaceTime",
            InCallControl::Contacts => "contacts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_lists_every_control_once() {
        let labels: Vec<&str> = InCallControl::GRID
            .iter()
            .flatten()
            .map(InCallControl::label)
            .collect();
        assert_eq!(
            labels,
            ["mute", "keypad", "speaker", "add call", "FaceTime", "contacts"]
        );
    }
}
