/// Closed set of icon identifiers used across the portal
/// 
/// The seed data names icons by string. Rather than trusting those strings
/// at render time, the choice is a closed enumeration: unknown names are
/// rejected while the seed is parsed.

use iced::widget::{text, Text};
use serde::Deserialize;
use thiserror::Error;

/// A name that matches no known icon
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown icon identifier: {0}")]
pub struct UnknownIcon(String);

/// Every icon the portal renders anywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Icon {
    Microscope,
    Home,
    Database,
    FlaskConical,
    BookOpen,
    Search,
    SearchCode,
    Info,
    Dna,
    Users,
    ChevronRight,
    Layers,
    MapPin,
    Close,
    ListChecks,
    FileText,
    TrendingUp,
    CheckCircle,
    Calendar,
    Mail,
    Image,
}

impl Icon {
    /// Parse an icon identifier as it appears in the seed data.
    ///
    /// Seed names follow the lucide icon set, so a couple of variants carry
    /// different spellings here ("X" is `Close`, "CheckCircle2" is
    /// `CheckCircle`).
    pub fn from_name(name: &str) -> Result<Self, UnknownIcon> {
        let icon = match name {
            "Microscope" => Icon::Microscope,
            "Home" => Icon::Home,
            "Database" => Icon::Database,
            "FlaskConical" => Icon::FlaskConical,
            "BookOpen" => Icon::BookOpen,
            "Search" => Icon::Search,
            "SearchCode" => Icon::SearchCode,
            "Info" => Icon::Info,
            "Dna" => Icon::Dna,
            "Users" => Icon::Users,
            "ChevronRight" => Icon::ChevronRight,
            "Layers" => Icon::Layers,
            "MapPin" => Icon::MapPin,
            "X" => Icon::Close,
            "ListChecks" => Icon::ListChecks,
            "FileText" => Icon::FileText,
            "TrendingUp" => Icon::TrendingUp,
            "CheckCircle2" => Icon::CheckCircle,
            "Calendar" => Icon::Calendar,
            "Mail" => Icon::Mail,
            "Image" => Icon::Image,
            other => return Err(UnknownIcon(other.to_string())),
        };
        Ok(icon)
    }

    /// Glyph standing in for the lucide vector icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Microscope => "🔬",
            Icon::Home => "🏠",
            Icon::Database => "🗃",
            Icon::FlaskConical => "⚗",
            Icon::BookOpen => "📖",
            Icon::Search => "🔍",
            Icon::SearchCode => "🔎",
            Icon::Info => "ℹ",
            Icon::Dna => "🧬",
            Icon::Users => "👥",
            Icon::ChevronRight => "›",
            Icon::Layers => "🗂",
            Icon::MapPin => "📍",
            Icon::Close => "✕",
            Icon::ListChecks => "☑",
            Icon::FileText => "📄",
            Icon::TrendingUp => "📈",
            Icon::CheckCircle => "✔",
            Icon::Calendar => "📅",
            Icon::Mail => "✉",
            Icon::Image => "🖼",
        }
    }

    /// Text widget for this icon at the given size.
    pub fn view<'a>(self, size: u16) -> Text<'a> {
        text(self.glyph()).size(size)
    }
}

impl TryFrom<String> for Icon {
    type Error = UnknownIcon;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Icon::from_name(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_parse() {
        assert_eq!(Icon::from_name("Dna"), Ok(Icon::Dna));
        assert_eq!(Icon::from_name("X"), Ok(Icon::Close));
        assert_eq!(Icon::from_name("CheckCircle2"), Ok(Icon::CheckCircle));
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = Icon::from_name("Sparkles").unwrap_err();
        assert_eq!(err.to_string(), "unknown icon identifier: Sparkles");
    }

    #[test]
    fn test_seed_path_goes_through_the_same_check() {
        let icon: Result<Icon, _> = serde_json::from_str("\"Microscope\"");
        assert_eq!(icon.unwrap(), Icon::Microscope);

        let bad: Result<Icon, _> = serde_json::from_str("\"Nope\"");
        assert!(bad.is_err());
    }
}
