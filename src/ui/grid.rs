/// Search panel and animal card grid for the database section

use iced::widget::{button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::catalog::{CLASS_OPTIONS, REGION_OPTIONS};
use crate::state::data::AnimalRecord;
use crate::state::filter::{ClassFilter, FilterState, RegionFilter};
use crate::ui::icon::Icon;
use crate::ui::{badge, card, status_color, ACCENT, MUTED};
use crate::Message;

/// Stable widget id for the search input, so the hero button can focus it.
pub fn search_input_id() -> text_input::Id {
    text_input::Id::new("animal-search")
}

/// The "Расширенный поиск" card with the three filter controls.
pub fn search_panel<'a>(filter: &'a FilterState) -> Element<'a, Message> {
    let class_options: Vec<ClassFilter> = std::iter::once(ClassFilter::All)
        .chain(
            CLASS_OPTIONS
                .iter()
                .map(|class| ClassFilter::Only((*class).to_string())),
        )
        .collect();

    let region_options: Vec<RegionFilter> = std::iter::once(RegionFilter::All)
        .chain(
            REGION_OPTIONS
                .iter()
                .map(|region| RegionFilter::Only((*region).to_string())),
        )
        .collect();

    let search = column![
        text("Поиск по названию").size(13),
        text_input("Название или латинское имя...", &filter.search_query)
            .id(search_input_id())
            .on_input(Message::SearchChanged)
            .padding(10),
    ]
    .spacing(6)
    .width(Length::FillPortion(2));

    let class_select = column![
        text("Класс животных").size(13),
        pick_list(
            class_options,
            Some(filter.selected_class.clone()),
            Message::ClassSelected,
        )
        .padding(10)
        .width(Length::Fill),
    ]
    .spacing(6)
    .width(Length::FillPortion(1));

    let region_select = column![
        text("Регион").size(13),
        pick_list(
            region_options,
            Some(filter.selected_region.clone()),
            Message::RegionSelected,
        )
        .padding(10)
        .width(Length::Fill),
    ]
    .spacing(6)
    .width(Length::FillPortion(1));

    card(
        column![
            row![Icon::SearchCode.view(20), text("Расширенный поиск").size(20)]
                .spacing(8)
                .align_y(Alignment::Center),
            text("Используйте фильтры для точного поиска видов")
                .size(14)
                .color(MUTED),
            row![search, class_select, region_select]
                .spacing(16)
                .width(Length::Fill)
                .align_y(Alignment::End),
        ]
        .spacing(12),
    )
    .width(Length::Fill)
    .into()
}

/// The card grid over the visible subset.
///
/// An empty subset is a valid outcome of the filters; it renders a
/// "nothing found" placeholder rather than a bare gap in the page.
pub fn animal_grid<'a>(visible: &[&'a AnimalRecord]) -> Element<'a, Message> {
    if visible.is_empty() {
        return container(
            column![
                Icon::Search.view(28),
                text("По заданным фильтрам ничего не найдено")
                    .size(15)
                    .color(MUTED),
            ]
            .spacing(8)
            .align_x(Alignment::Center),
        )
        .padding(40)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into();
    }

    let cards: Vec<Element<'a, Message>> = visible
        .iter()
        .map(|animal| animal_card(animal))
        .collect();

    Wrap::with_elements(cards)
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
}

/// One clickable card in the grid. Pressing it opens the detail panel.
fn animal_card<'a>(animal: &'a AnimalRecord) -> Element<'a, Message> {
    // The photo lives on an external CDN and is never fetched; a fixed
    // placeholder stands in for it.
    let photo = container(Icon::Image.view(40))
        .center_x(Length::Fill)
        .center_y(110)
        .style(container::bordered_box);

    let title = row![
        column![
            text(&animal.name).size(17),
            text(&animal.scientific_name).size(13).color(MUTED),
        ]
        .spacing(2)
        .width(Length::Fill),
        Icon::ChevronRight.view(17),
    ]
    .align_y(Alignment::Center);

    let tags = row![
        badge(Some(Icon::Layers), &animal.class_name, MUTED),
        badge(Some(Icon::MapPin), &animal.region, ACCENT),
    ]
    .spacing(8);

    let status = badge(
        None,
        &animal.conservation_status,
        status_color(&animal.conservation_status),
    );

    let content = card(column![photo, title, tags, status].spacing(10)).width(300);

    button(content)
        .on_press(Message::AnimalSelected(animal.id))
        .style(button::text)
        .padding(0)
        .into()
}
