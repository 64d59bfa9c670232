use crate::App;
use cloudtui::model::{Route, ViewMode};
use ratatui::Frame;

use super::{
    breadcrumb, dialogs,
    layout,
    legend::{self, LegendContext},
    login, search, status_bar, system_bar, toast,
};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let model = &app.controller.model;

    if app.controller.route() == Route::Login {
        login::render_login(f, &model.ui.login, &app.base_url, model.ui.error.as_deref());
        return;
    }

    let in_folder = model.navigation.view_mode == ViewMode::Folder;
    let search_visible = in_folder && (model.ui.search_mode || model.search.is_active());

    let legend_ctx = LegendContext {
        vim_mode: model.ui.vim_mode,
        view_mode: model.navigation.view_mode,
        search_mode: model.ui.search_mode,
        has_search_query: model.search.is_active(),
        at_root: model.navigation.path.is_root(),
    };
    let legend_height = legend::calculate_legend_height(size.width, legend_ctx);
    let layout_info = layout::calculate_layout(size, legend_height, search_visible);

    let view_label = if in_folder {
        model.current_entry().name.clone()
    } else {
        "Recent".to_string()
    };
    system_bar::render_system_bar(
        f,
        layout_info.system_area,
        &app.base_url,
        &view_label,
        app.controller.is_authenticated(),
    );

    breadcrumb::render_path_bar(
        f,
        layout_info.path_area,
        &model.navigation.path,
        model.navigation.view_mode,
    );

    let title = if in_folder {
        format!(" {} ", model.navigation.path.display())
    } else {
        " Recent files ".to_string()
    };
    breadcrumb::render_listing_panel(
        f,
        layout_info.listing_area,
        &model.listing.items,
        model.listing.selected,
        &title,
        model.ui.display_mode,
        model.listing.loading,
    );

    if let Some(search_area) = layout_info.search_area {
        search::render_search_input(
            f,
            search_area,
            &model.search.raw,
            model.ui.search_mode,
            model.search.pending,
            model.listing.items.len(),
        );
    }

    legend::render_legend(f, layout_info.legend_area, legend_ctx);

    // Dialogs show their own error, keep the status bar clean meanwhile
    let status_error = if model.has_modal() {
        None
    } else {
        model.ui.error.as_deref()
    };
    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        model.listing.items.len(),
        model.listing.selected_item().map(|item| item.name.as_str()),
        model.ui.sort_mode.as_str(),
        model.ui.sort_reverse,
        model.listing.loading,
        status_error,
    );

    if model.ui.folder_dialog.open {
        dialogs::render_text_prompt(
            f,
            "New Folder",
            &format!("Create a folder in {}", model.current_entry().name),
            &model.ui.folder_dialog.input,
            model.ui.error.as_deref(),
        );
    }

    if model.ui.upload_dialog.open {
        dialogs::render_text_prompt(
            f,
            "Upload File",
            &format!("Local file to upload into {}", model.current_entry().name),
            &model.ui.upload_dialog.input,
            model.ui.error.as_deref(),
        );
    }

    // Render toast notification if active
    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
