use crate::cli::AppConfig;
use crate::statics;
use crate::{ControlMode, ControlPanel, PanelBody, PendingFetch, Profile, ProfileEditor, User};
use eframe::egui;
use egui_extras::{Column, TableBuilder};

pub fn run_gui(config: AppConfig) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 640.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(ControlPanelApp::new(&cc.egui_ctx, config)))),
    )
}

/// The application shell: the panel state plus the two fixture loads started at launch.
struct ControlPanelApp {
    panel: ControlPanel,
    users_fetch: PendingFetch<Vec<User>>,
    profile_fetch: PendingFetch<Profile>,
    theme_dark: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileAction {
    Edit,
    Save,
    Cancel,
}

impl ControlPanelApp {
    fn new(ctx: &egui::Context, config: AppConfig) -> Self {
        ctx.set_visuals(egui::Visuals::dark());

        let repaint_ctx = ctx.clone();
        let (users_fetch, profile_fetch) = config
            .fixtures
            .spawn_all(move || repaint_ctx.request_repaint());

        let mut panel = ControlPanel::new();
        if let Some(mode) = config.start_open {
            panel.select(mode);
        }

        Self {
            panel,
            users_fetch,
            profile_fetch,
            theme_dark: true,
        }
    }

    fn poll_fetches(&mut self) {
        if let Some(result) = self.users_fetch.poll() {
            self.panel.apply_users(result);
        }
        if let Some(result) = self.profile_fetch.poll() {
            self.panel.apply_profile(result);
        }
    }

    fn show(&mut self, ctx: &egui::Context) {
        self.poll_fetches();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui
                    .button(statics::EN_GLYPH_USERS)
                    .on_hover_text(statics::EN_BTN_USERS)
                    .clicked()
                {
                    self.panel.select(ControlMode::UserList);
                }
                if ui
                    .button(statics::EN_GLYPH_PROFILE)
                    .on_hover_text(statics::EN_BTN_PROFILE)
                    .clicked()
                {
                    self.panel.select(ControlMode::Profile);
                }

                ui.separator();
                if ui.button(statics::EN_BTN_TOGGLE_THEME).clicked() {
                    self.theme_dark = !self.theme_dark;
                    if self.theme_dark {
                        ctx.set_visuals(egui::Visuals::dark());
                    } else {
                        ctx.set_visuals(egui::Visuals::light());
                    }
                }
            });
        });

        if self.panel.is_open() {
            let mut close = false;
            egui::SidePanel::right("control_panel")
                .resizable(true)
                .default_width(320.0)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.heading(self.panel.title());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .small_button(statics::EN_GLYPH_CLOSE)
                                .on_hover_text(statics::EN_BTN_CLOSE)
                                .clicked()
                            {
                                close = true;
                            }
                        });
                    });
                    ui.separator();

                    if let PanelBody::UserList(users) = self.panel.body() {
                        render_user_list(ui, users);
                    } else {
                        render_profile_card(ui, self.panel.profile_mut());
                    }
                });
            if close {
                self.panel.close();
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(statics::EN_HOME_INSTRUCTIONS);
            });
        });
    }
}

/// One striped row per user, in fixture order. Returns how many rows were laid out.
fn render_user_list(ui: &mut egui::Ui, users: &[User]) -> usize {
    let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
    let mut rows = 0;
    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder())
        .header(row_h, |mut header| {
            header.col(|ui| {
                ui.strong(statics::EN_COL_NAME);
            });
        })
        .body(|mut body| {
            for user in users {
                body.row(row_h, |mut row| {
                    rows += 1;
                    row.col(|ui| {
                        ui.push_id(&user.id, |ui| {
                            ui.label(&user.name);
                        });
                    });
                });
            }
        });
    rows
}

fn render_profile_card(ui: &mut egui::Ui, editor: &mut ProfileEditor) {
    let mut action = None;

    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(statics::EN_GLYPH_PROFILE);
            ui.strong(statics::EN_HEADING_PROFILE);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Right-to-left: the first button added ends up rightmost.
                if editor.is_editing() {
                    if ui
                        .small_button(statics::EN_GLYPH_CANCEL)
                        .on_hover_text(statics::EN_BTN_CANCEL_EDITING)
                        .clicked()
                    {
                        action = Some(ProfileAction::Cancel);
                    }
                    if ui
                        .small_button(statics::EN_GLYPH_SAVE)
                        .on_hover_text(statics::EN_BTN_SAVE_CHANGES)
                        .clicked()
                    {
                        action = Some(ProfileAction::Save);
                    }
                } else if ui
                    .add_enabled(
                        editor.is_loaded(),
                        egui::Button::new(statics::EN_GLYPH_EDIT).small(),
                    )
                    .on_hover_text(statics::EN_BTN_EDIT_PROFILE)
                    .clicked()
                {
                    action = Some(ProfileAction::Edit);
                }
            });
        });
        ui.add_space(4.0);

        match editor {
            ProfileEditor::Empty => {}
            ProfileEditor::Viewing { profile } => render_profile_fields(ui, profile),
            ProfileEditor::Editing { buffer, .. } => render_profile_form(ui, buffer),
        }
    });

    if let Some(action) = action {
        apply(editor, action);
    }
}

/// Run a profile card button against the editor.
fn apply(editor: &mut ProfileEditor, action: ProfileAction) {
    let result = match action {
        ProfileAction::Edit => editor.begin_edit(),
        ProfileAction::Save => editor.save(),
        ProfileAction::Cancel => editor.cancel(),
    };
    if let Err(e) = result {
        log::warn!("{action:?} ignored: {e}");
    }
}

fn render_profile_fields(ui: &mut egui::Ui, profile: &Profile) {
    egui::Grid::new("profile_fields")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.strong(statics::EN_LABEL_NAME);
            ui.label(&profile.name);
            ui.end_row();

            ui.strong(statics::EN_LABEL_ABOUT);
            ui.label(&profile.about);
            ui.end_row();

            ui.strong(statics::EN_LABEL_COUNTRY);
            ui.label(statics::locale_display(&profile.locale));
            ui.end_row();
        });
}

fn render_profile_form(ui: &mut egui::Ui, buffer: &mut Profile) {
    egui::Grid::new("profile_form")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.strong(statics::EN_LABEL_NAME);
            ui.add(egui::TextEdit::singleline(&mut buffer.name).desired_width(f32::INFINITY));
            ui.end_row();

            ui.strong(statics::EN_LABEL_ABOUT);
            ui.add(egui::TextEdit::singleline(&mut buffer.about).desired_width(f32::INFINITY));
            ui.end_row();

            ui.strong(statics::EN_LABEL_COUNTRY);
            render_locale_select(ui, &mut buffer.locale);
            ui.end_row();
        });
}

fn render_locale_select(ui: &mut egui::Ui, locale: &mut String) {
    let selected = statics::locale_label(locale).unwrap_or(statics::EN_HINT_SELECT_LOCALE);
    egui::ComboBox::from_id_salt("profile_locale")
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for option in statics::LOCALES {
                ui.selectable_value(locale, option.code.to_string(), option.label);
            }
        });
}

impl eframe::App for ControlPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
