//! Keyboard Input Handler
//!
//! Dispatches by route first, then by whichever input currently owns the
//! keyboard: an open dialog, the search box, or the listing.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use cloudtui::model::{LoginField, Route, ViewMode};

use crate::App;

/// Handle keyboard input
///
/// Controller operations report failures through `model.ui.error`, so their
/// results are dropped here.
pub async fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.controller.model.ui.should_quit = true;
        return Ok(());
    }

    match app.controller.route() {
        Route::Login => handle_login_key(app, key).await,
        Route::Dashboard => handle_dashboard_key(app, key).await,
    }
}

async fn handle_login_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let form = &mut app.controller.model.ui.login;
    match key.code {
        KeyCode::Esc => app.controller.model.ui.should_quit = true,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_focus(),
        KeyCode::Enter => {
            if form.focus == LoginField::Email && form.password.is_empty() {
                form.toggle_focus();
            } else {
                let _ = app.controller.submit_login().await;
            }
        }
        KeyCode::Backspace => {
            form.focused_mut().pop();
        }
        KeyCode::Char(c) => form.focused_mut().push(c),
        _ => {}
    }
    Ok(())
}

async fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // New folder dialog owns the keyboard while open
    if app.controller.model.ui.folder_dialog.open {
        match key.code {
            KeyCode::Esc => app.controller.cancel_folder_dialog(),
            KeyCode::Enter => {
                let _ = app.controller.submit_folder_dialog().await;
            }
            KeyCode::Backspace => {
                app.controller.model.ui.folder_dialog.input.pop();
            }
            KeyCode::Char(c) => app.controller.model.ui.folder_dialog.input.push(c),
            _ => {}
        }
        return Ok(());
    }

    if app.controller.model.ui.upload_dialog.open {
        match key.code {
            KeyCode::Esc => app.controller.cancel_upload_dialog(),
            KeyCode::Enter => {
                let _ = app.controller.submit_upload_dialog().await;
            }
            KeyCode::Backspace => {
                app.controller.model.ui.upload_dialog.input.pop();
            }
            KeyCode::Char(c) => app.controller.model.ui.upload_dialog.input.push(c),
            _ => {}
        }
        return Ok(());
    }

    // Typing into the search box
    if app.controller.model.ui.search_mode {
        match key.code {
            KeyCode::Esc => {
                app.controller.model.ui.search_mode = false;
                app.controller.clear_search();
            }
            KeyCode::Enter => {
                // Keep the query, hand the keyboard back to the listing
                app.controller.model.ui.search_mode = false;
            }
            KeyCode::Backspace => app.controller.pop_search_char(),
            KeyCode::Char(c) if !ctrl => app.controller.push_search_char(c),
            KeyCode::Up => app.controller.select_prev(),
            KeyCode::Down => app.controller.select_next(),
            _ => {}
        }
        return Ok(());
    }

    let vim_mode = app.controller.model.ui.vim_mode;

    match key.code {
        KeyCode::Char('q') => app.controller.model.ui.should_quit = true,
        KeyCode::Char('f') if ctrl => enter_search_mode(app),
        KeyCode::Char('/') => enter_search_mode(app),
        KeyCode::Esc => {
            if app.controller.model.search.is_active() {
                app.controller.clear_search();
            } else {
                app.controller.clear_error();
            }
        }
        KeyCode::Down => app.controller.select_next(),
        KeyCode::Up => app.controller.select_prev(),
        KeyCode::Char('j') if vim_mode => app.controller.select_next(),
        KeyCode::Char('k') if vim_mode => app.controller.select_prev(),
        KeyCode::Enter | KeyCode::Right => {
            app.controller.open_selected();
        }
        KeyCode::Char('l') if vim_mode => {
            app.controller.open_selected();
        }
        KeyCode::Backspace | KeyCode::Left => {
            if app.controller.model.navigation.in_recent_view() {
                app.controller.show_folder_view();
            } else {
                app.controller.go_up();
            }
        }
        KeyCode::Char('h') if vim_mode => {
            app.controller.go_up();
        }
        KeyCode::Char('H') => app.controller.show_dashboard_root(),
        KeyCode::Char('r') => app.controller.show_recent(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Err(e) = app.controller.jump_to_breadcrumb(index) {
                debug!("{}", e);
            }
        }
        KeyCode::Char('n') => app.controller.open_folder_dialog(),
        KeyCode::Char('u') => app.controller.open_upload_dialog(),
        KeyCode::Char('s') => app.controller.cycle_sort_mode(),
        KeyCode::Char('S') => app.controller.toggle_sort_reverse(),
        KeyCode::Char('t') => {
            // Cycle through display modes: Off -> TimestampOnly -> TimestampAndSize -> Off
            app.controller.cycle_display_mode();
        }
        KeyCode::Char('L') => app.controller.logout().await,
        _ => {}
    }

    Ok(())
}

fn enter_search_mode(app: &mut App) {
    // Search filters folder listings only
    if app.controller.model.navigation.view_mode == ViewMode::Folder {
        app.controller.model.ui.search_mode = true;
    }
}
