use iced::widget::{column, container, scrollable, text, text_input};
use iced::{Element, Length, Task, Theme};

mod state;
mod ui;

use state::catalog::Catalog;
use state::filter::{ClassFilter, FilterState, RegionFilter};
use ui::detail::DetailTab;
use ui::MUTED;

/// Main application state
struct ZooResearch {
    /// The fixed animal catalog and research statistics
    catalog: Catalog,
    /// Search, dropdown and detail-panel selections for this session
    filter: FilterState,
    /// Active tab of the detail panel
    detail_tab: DetailTab,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Search input changed
    SearchChanged(String),
    /// Class dropdown changed
    ClassSelected(ClassFilter),
    /// Region dropdown changed
    RegionSelected(RegionFilter),
    /// A card in the grid was clicked
    AnimalSelected(u32),
    /// The detail panel close button was clicked
    DetailClosed,
    /// A detail panel tab was clicked
    TabSelected(DetailTab),
    /// Hero call to action: jump to the search input
    FocusSearch,
}

impl ZooResearch {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // The app cannot function without its catalog, so a malformed seed
        // is a startup failure rather than a recoverable error.
        let catalog = Catalog::load()
            .expect("Failed to load the embedded animal catalog");

        println!(
            "🔬 ZooResearch initialized with {} species",
            catalog.species_count()
        );

        (
            ZooResearch {
                catalog,
                filter: FilterState::new(),
                detail_tab: DetailTab::default(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(query) => {
                self.filter.search_query = query;
            }
            Message::ClassSelected(class) => {
                self.filter.selected_class = class;
            }
            Message::RegionSelected(region) => {
                self.filter.selected_region = region;
            }
            Message::AnimalSelected(id) => {
                self.filter.select(id);
            }
            Message::DetailClosed => {
                self.filter.close();
            }
            Message::TabSelected(tab) => {
                self.detail_tab = tab;
            }
            Message::FocusSearch => {
                return text_input::focus(ui::grid::search_input_id());
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        // The visible subset is a pure derivation from the filter state,
        // recomputed on every view.
        let visible = self.filter.visible(self.catalog.animals());

        let mut database = column![
            text("База данных животных").size(28),
            text("Продвинутый поиск по видам, регионам и характеристикам")
                .size(15)
                .color(MUTED),
            ui::grid::search_panel(&self.filter),
            ui::grid::animal_grid(&visible),
        ]
        .spacing(16);

        // The panel stays open even when its record is filtered out of the
        // grid; only the close button or a new selection changes it.
        if let Some(animal) = self
            .filter
            .selected_animal
            .and_then(|id| self.catalog.get(id))
        {
            database = database.push(ui::detail::detail_panel(animal, self.detail_tab));
        }

        let page = column![
            ui::hero::header(),
            ui::hero::hero(),
            ui::hero::stats_row(self.catalog.stats()),
            database,
            ui::hero::research_section(),
            ui::hero::footer(),
        ]
        .spacing(40)
        .padding(32)
        .width(Length::Fill)
        .max_width(1100);

        scrollable(
            container(page)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "ZooResearch",
        ZooResearch::update,
        ZooResearch::view,
    )
    .theme(ZooResearch::theme)
    .centered()
    .run_with(ZooResearch::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_tab_survives_switching_animals() {
        let (mut app, _task) = ZooResearch::new();

        let _ = app.update(Message::AnimalSelected(1));
        let _ = app.update(Message::TabSelected(DetailTab::Characteristics));
        let _ = app.update(Message::AnimalSelected(2));

        // The panel now shows the new record, still on the same tab.
        assert_eq!(app.filter.selected_animal, Some(2));
        assert_eq!(app.detail_tab, DetailTab::Characteristics);
    }

    #[test]
    fn test_closing_the_panel_keeps_the_tab_for_next_time() {
        let (mut app, _task) = ZooResearch::new();

        let _ = app.update(Message::AnimalSelected(3));
        let _ = app.update(Message::TabSelected(DetailTab::Research));
        let _ = app.update(Message::DetailClosed);

        assert_eq!(app.filter.selected_animal, None);
        assert_eq!(app.detail_tab, DetailTab::Research);
    }
}
