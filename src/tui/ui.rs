use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ChapterDetail, ChapterList, Footer, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Draws one frame: title bar, the view for the current route, footer.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, footer_area] = layout.areas(frame.area());

    draw_view(frame, main_area, app, tui, spinner_frame);

    let mut title_bar = TitleBar::new(app.route.to_string(), app.status_message.clone());
    title_bar.render(frame, title_area);

    Footer::new(&app.route).render(frame, footer_area);
}

fn draw_view(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let status = app.view_status();
    match app.route {
        Route::Home => {
            ChapterList::new(&mut tui.chapter_list, status, spinner_frame, tui.reorder_rtl)
                .render(frame, area);
        }
        Route::Chapter(_) => {
            ChapterDetail::new(
                &mut tui.chapter_detail,
                status,
                spinner_frame,
                tui.reorder_rtl,
            )
            .render(frame, area);
        }
    }
}
