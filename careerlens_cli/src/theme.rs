/// Colors, badge palettes and icon glyphs shared by every widget
use careerlens_core::types::ResourceKind;
use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(45, 212, 191); // Teal #2DD4BF
pub const PRIMARY: Color = Color::Rgb(20, 108, 148); // #146C94
pub const PRIMARY_LIGHT: Color = Color::Rgb(25, 167, 206); // #19A7CE
pub const GROWTH: Color = Color::Rgb(22, 163, 74); // #16A34A
pub const TRACK: Color = Color::DarkGray;

pub fn accent(high_contrast: bool) -> Color {
    if high_contrast {
        Color::White
    } else {
        ACCENT
    }
}

pub fn border_style(high_contrast: bool) -> Style {
    if high_contrast {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn title_style(high_contrast: bool) -> Style {
    Style::default()
        .fg(accent(high_contrast))
        .add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

/// Foreground, background and border colors of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

impl Palette {
    pub const RED: Palette = Palette {
        fg: Color::Rgb(198, 40, 40),   // #C62828
        bg: Color::Rgb(255, 235, 238), // #FFEBEE
        border: Color::Rgb(244, 67, 54), // #F44336
    };
    pub const ORANGE: Palette = Palette {
        fg: Color::Rgb(239, 108, 0),   // #EF6C00
        bg: Color::Rgb(255, 243, 224), // #FFF3E0
        border: Color::Rgb(255, 152, 0), // #FF9800
    };
    pub const GREEN: Palette = Palette {
        fg: Color::Rgb(46, 125, 50),   // #2E7D32
        bg: Color::Rgb(232, 245, 232), // #E8F5E8
        border: Color::Rgb(76, 175, 80), // #4CAF50
    };
    pub const BLUE: Palette = Palette {
        fg: Color::Rgb(21, 101, 192),  // #1565C0
        bg: Color::Rgb(227, 242, 253), // #E3F2FD
        border: Color::Rgb(33, 150, 243), // #2196F3
    };
    pub const PURPLE: Palette = Palette {
        fg: Color::Rgb(123, 31, 162),  // #7B1FA2
        bg: Color::Rgb(243, 229, 245), // #F3E5F5
        border: Color::Rgb(156, 39, 176), // #9C27B0
    };
    pub const GREY: Palette = Palette {
        fg: Color::Rgb(97, 97, 97),    // #616161
        bg: Color::Rgb(250, 250, 250), // #FAFAFA
        border: Color::Rgb(189, 189, 189), // #BDBDBD
    };
    pub const HIGH_CONTRAST: Palette = Palette {
        fg: Color::Black,
        bg: Color::White,
        border: Color::White,
    };

    pub fn contrast(self, high_contrast: bool) -> Self {
        if high_contrast {
            Palette::HIGH_CONTRAST
        } else {
            self
        }
    }

    pub fn badge_style(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }
}

// The string switches below compare case-insensitively and never fail:
// anything unrecognized falls through to the default branch.

pub fn priority_palette(priority: &str) -> Palette {
    match priority.to_lowercase().as_str() {
        "high" => Palette::RED,
        "medium" => Palette::ORANGE,
        _ => Palette::GREEN,
    }
}

pub fn match_palette(match_level: &str) -> Palette {
    match match_level.to_lowercase().as_str() {
        "excellent" => Palette::GREEN,
        "good" => Palette::BLUE,
        "fair" => Palette::ORANGE,
        _ => Palette::RED,
    }
}

pub fn skill_level_palette(level: &str) -> Palette {
    match level.to_lowercase().as_str() {
        "expert" => Palette::GREEN,
        "advanced" => Palette::BLUE,
        "intermediate" => Palette::ORANGE,
        _ => Palette::GREY,
    }
}

pub fn resource_palette(kind: ResourceKind) -> Palette {
    match kind {
        ResourceKind::Course => Palette::BLUE,
        ResourceKind::Book => Palette::GREEN,
        ResourceKind::Project => Palette::ORANGE,
        ResourceKind::Certification => Palette::PURPLE,
        ResourceKind::Other => Palette::GREY,
    }
}

/// Progress-bar tier for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Strong,
    Moderate,
    NeedsWork,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreTier::Strong
        } else if score >= 60 {
            ScoreTier::Moderate
        } else {
            ScoreTier::NeedsWork
        }
    }

    pub fn color(&self, high_contrast: bool) -> Color {
        if high_contrast {
            return Color::White;
        }
        match self {
            ScoreTier::Strong => Palette::GREEN.fg,
            ScoreTier::Moderate => Palette::BLUE.fg,
            ScoreTier::NeedsWork => Palette::ORANGE.fg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Checklist,
    Schedule,
    Work,
    TrendingUp,
    Academic,
    Reading,
    Inventory,
    ExpandOpen,
    ExpandClosed,
    EastArrow,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Checklist => "☑",
            Icon::Schedule => "◷",
            Icon::Work => "⚒",
            Icon::TrendingUp => "↗",
            Icon::Academic => "◈",
            Icon::Reading => "❏",
            Icon::Inventory => "▦",
            Icon::ExpandOpen => "▾",
            Icon::ExpandClosed => "▸",
            Icon::EastArrow => "→",
        }
    }
}

pub fn resource_icon(kind: ResourceKind) -> Icon {
    match kind {
        ResourceKind::Book => Icon::Reading,
        ResourceKind::Project => Icon::Inventory,
        ResourceKind::Course | ResourceKind::Certification | ResourceKind::Other => {
            Icon::Academic
        }
    }
}
