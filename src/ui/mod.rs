/// UI building blocks for the portal page
/// 
/// Presentation only: these modules turn catalog data and filter state into
/// iced widget trees and emit `Message`s back to the update loop.

pub mod detail;
pub mod grid;
pub mod hero;
pub mod icon;

use iced::widget::{container, row, text};
use iced::{border, Alignment, Color, Element};

use self::icon::Icon;

/// Muted foreground used for secondary copy, close to the web palette.
pub const MUTED: Color = Color::from_rgb(0.62, 0.64, 0.68);

/// Accent color for headings, icons and primary buttons.
pub const ACCENT: Color = Color::from_rgb(0.35, 0.78, 0.55);

/// Green/yellow/red tints shared by status badges and project labels.
pub const GREEN: Color = Color::from_rgb(0.30, 0.80, 0.45);
pub const YELLOW: Color = Color::from_rgb(0.90, 0.75, 0.25);
pub const RED: Color = Color::from_rgb(0.90, 0.35, 0.35);

/// Badge tint for a conservation status label.
///
/// Unknown labels fall through to red: anything that is neither stable nor
/// merely vulnerable reads as a threat.
pub fn status_color(status: &str) -> Color {
    match status {
        "Стабильный" => GREEN,
        "Уязвимый" => YELLOW,
        _ => RED,
    }
}

/// Small rounded label in the given tint, optionally with a leading icon.
pub fn badge<'a, Message: 'a>(
    icon: Option<Icon>,
    label: &'a str,
    tint: Color,
) -> Element<'a, Message> {
    let mut content = row![].spacing(4).align_y(Alignment::Center);
    if let Some(icon) = icon {
        content = content.push(icon.view(12));
    }
    content = content.push(text(label).size(12).color(tint));

    container(content)
        .padding([3.0, 8.0])
        .style(move |_theme| container::Style {
            background: Some(Color { a: 0.15, ..tint }.into()),
            border: border::rounded(8.0),
            ..container::Style::default()
        })
        .into()
}

/// Card-shaped container used across all sections of the page.
pub fn card<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> iced::widget::Container<'a, Message> {
    container(content)
        .padding(20)
        .style(container::rounded_box)
}
