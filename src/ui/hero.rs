/// Static page furniture: header, hero, stats, research projects, footer
/// 
/// Everything in this module is fixed content straight from the page copy.
/// The only live element is the hero call-to-action, which focuses the
/// search input down in the database section.

use iced::widget::{button, column, horizontal_rule, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::state::data::ResearchStat;
use crate::ui::icon::Icon;
use crate::ui::{badge, card, ACCENT, GREEN, MUTED};
use crate::Message;

/// Portal header: title block plus the section links.
pub fn header<'a>() -> Element<'a, Message> {
    let title = row![
        Icon::Microscope.view(30),
        column![
            text("ZooResearch").size(24),
            text("Научный центр изучения животных").size(13).color(MUTED),
        ]
        .spacing(2),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let nav = row![
        nav_entry(Icon::Home, "Главная"),
        nav_entry(Icon::Database, "База данных"),
        nav_entry(Icon::FlaskConical, "Исследования"),
        nav_entry(Icon::BookOpen, "Публикации"),
    ]
    .spacing(24);

    column![
        row![title, Space::with_width(Length::Fill), nav]
            .width(Length::Fill)
            .align_y(Alignment::Center),
        horizontal_rule(1),
    ]
    .spacing(16)
    .into()
}

/// One section link. The links lead nowhere in this demo, so they are
/// rendered as plain labels rather than buttons pretending to navigate.
fn nav_entry<'a>(icon: Icon, label: &'a str) -> Element<'a, Message> {
    row![icon.view(15), text(label).size(15)]
        .spacing(6)
        .align_y(Alignment::Center)
        .into()
}

/// Hero section with the tagline and the call to action.
pub fn hero<'a>() -> Element<'a, Message> {
    column![
        badge(None, "Научно-исследовательский портал", ACCENT),
        text("Комплексное изучение биоразнообразия планеты").size(42),
        text(
            "Современная платформа для исследования, классификации и \
             мониторинга животного мира. Доступ к актуальным научным данным \
             о тысячах видов.",
        )
        .size(18)
        .color(MUTED),
        row![
            button(
                row![Icon::Search.view(16), text("Начать исследование").size(16)]
                    .spacing(8)
                    .align_y(Alignment::Center),
            )
            .padding([12.0, 20.0])
            .on_press(Message::FocusSearch),
            // Dead link in the demo, kept inert.
            button(
                row![Icon::Info.view(16), text("О проекте").size(16)]
                    .spacing(8)
                    .align_y(Alignment::Center),
            )
            .padding([12.0, 20.0])
            .style(button::secondary),
        ]
        .spacing(12),
    ]
    .spacing(18)
    .into()
}

/// The four-card research statistics row.
pub fn stats_row<'a>(stats: &'a [ResearchStat]) -> Element<'a, Message> {
    let mut cards = row![].spacing(16).width(Length::Fill);
    for stat in stats {
        cards = cards.push(
            card(
                column![
                    row![
                        stat.icon.view(22),
                        Space::with_width(Length::Fill),
                        badge(None, &stat.value, ACCENT),
                    ]
                    .align_y(Alignment::Center),
                    text(&stat.label).size(13).color(MUTED),
                ]
                .spacing(12),
            )
            .width(Length::FillPortion(1)),
        );
    }
    cards.into()
}

/// "Актуальные исследования": two fixed project cards.
pub fn research_section<'a>() -> Element<'a, Message> {
    let ongoing = card(
        column![
            badge(None, "В процессе", ACCENT),
            text("Миграционные паттерны морских млекопитающих").size(18),
            text(
                "Исследование сезонных маршрутов китообразных в Тихом океане \
                 с использованием спутникового мониторинга",
            )
            .size(14)
            .color(MUTED),
            project_meta("12 исследователей", "2023-2025"),
        ]
        .spacing(10),
    )
    .width(Length::FillPortion(1));

    let finished = card(
        column![
            badge(None, "Завершено", GREEN),
            text("Биоразнообразие тропических лесов Амазонии").size(18),
            text(
                "Полный каталог видового состава позвоночных в экосистеме \
                 тропического леса",
            )
            .size(14)
            .color(MUTED),
            project_meta("24 исследователя", "2020-2023"),
        ]
        .spacing(10),
    )
    .width(Length::FillPortion(1));

    column![
        text("Актуальные исследования").size(28),
        text("Ознакомьтесь с текущими научными проектами нашего центра")
            .size(15)
            .color(MUTED),
        row![ongoing, finished].spacing(16).width(Length::Fill),
    ]
    .spacing(10)
    .into()
}

/// Researcher count and time span shown under a project card.
fn project_meta<'a>(team: &'a str, span: &'a str) -> Element<'a, Message> {
    row![
        row![Icon::Users.view(13), text(team).size(13).color(MUTED)]
            .spacing(4)
            .align_y(Alignment::Center),
        row![Icon::Calendar.view(13), text(span).size(13).color(MUTED)]
            .spacing(4)
            .align_y(Alignment::Center),
    ]
    .spacing(16)
    .into()
}

/// Static page footer.
pub fn footer<'a>() -> Element<'a, Message> {
    let about = column![
        row![Icon::Microscope.view(17), text("ZooResearch").size(16)]
            .spacing(6)
            .align_y(Alignment::Center),
        text("Научный центр изучения биоразнообразия планеты")
            .size(13)
            .color(MUTED),
    ]
    .spacing(8)
    .width(Length::FillPortion(1));

    let sections = footer_list("Разделы", &["База данных", "Исследования", "Публикации"]);
    let resources = footer_list("Ресурсы", &["Документация", "API", "Партнеры"]);

    let contacts = column![
        text("Контакты").size(15),
        row![Icon::Mail.view(13), text("research@zoo.org").size(13).color(MUTED)]
            .spacing(4)
            .align_y(Alignment::Center),
        row![Icon::MapPin.view(13), text("Научный центр").size(13).color(MUTED)]
            .spacing(4)
            .align_y(Alignment::Center),
    ]
    .spacing(8)
    .width(Length::FillPortion(1));

    column![
        horizontal_rule(1),
        row![about, sections, resources, contacts]
            .spacing(24)
            .width(Length::Fill),
        horizontal_rule(1),
        text("© 2024 ZooResearch. Научный портал изучения животных")
            .size(13)
            .color(MUTED),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}

fn footer_list<'a>(heading: &'a str, entries: &'a [&'a str]) -> Element<'a, Message> {
    let mut list = column![text(heading).size(15)].spacing(8);
    for entry in entries {
        list = list.push(text(*entry).size(13).color(MUTED));
    }
    list.width(Length::FillPortion(1)).into()
}
