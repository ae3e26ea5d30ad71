#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::{egui, App, NativeOptions};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tadabbur::config::{self, Config};
use tadabbur::notes::exchange;
use tadabbur::notes::markdown::{apply_command, MarkdownCommand};
use tadabbur::notes::store::LocalStore;
use tadabbur::reading::sync::{PaneSide, SyncController};
use tadabbur::remote::client::ApiClient;
use tadabbur::remote::loader::{ChapterLoader, LoadEvent, LoadedChapter};
use tadabbur::types::api_data::{translation_name, ChapterSummary, TRANSLATION_CATALOG};

#[derive(Parser, Debug)]
#[command(name = "tadabbur", about = "Dual-pane Quran reading and note-taking")]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, default_value = "config.toml")]
    config: String,
    /// Override the directory holding the persistent store.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Directory for bulk notes import/export.
    #[arg(long)]
    notes_dir: Option<PathBuf>,
    /// Chapter to open at startup (defaults to the last opened one).
    #[arg(long)]
    chapter: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotesTab {
    Editor,
    Preview,
}

const NOTES_DIR_MISSING_MSG: &str =
    "Notes directory not configured. Set notes_dir in config.toml or pass --notes-dir.";

fn notes_editor_id() -> egui::Id {
    egui::Id::new("notes_editor")
}

struct TadabburApp {
    config: Config,
    config_error: Option<String>,
    cli_notes_dir: Option<PathBuf>,
    store: LocalStore,
    store_error: Option<String>,
    loader: ChapterLoader,
    chapters: Vec<ChapterSummary>,
    chapters_error: Option<String>,
    selected_chapter: Option<u32>,
    translation_selection: Vec<String>,
    load_state: LoadState,
    current: Option<LoadedChapter>,
    sync: SyncController,
    /// Verse to re-highlight/re-scroll after a re-render settles.
    pending_restore: Option<u32>,
    /// Chapter the editor content belongs to; edits are keyed by this, not
    /// by whatever the selector points at mid-load.
    notes_chapter: Option<u32>,
    notes_text: String,
    notes_tab: NotesTab,
    /// Last known editor selection, char indices.
    editor_selection: (usize, usize),
    md_cache: CommonMarkCache,
    batch_status: Option<String>,
}

impl TadabburApp {
    fn new(cc: &eframe::CreationContext<'_>, cli: Cli) -> Self {
        let (config, config_error) = if Path::new(&cli.config).exists() {
            match config::load_config_from_file(&cli.config) {
                Ok(loaded) => (loaded, None),
                Err(err_msg) => {
                    log::warn!("{}", err_msg);
                    (Config::default(), Some(err_msg))
                }
            }
        } else {
            log::info!("no config file at {}; using defaults", cli.config);
            (Config::default(), None)
        };

        let store_path = cli
            .data_dir
            .clone()
            .or_else(|| config.data_dir.clone())
            .map(|dir| dir.join("store.json"))
            .or_else(LocalStore::default_path)
            .unwrap_or_else(|| PathBuf::from("tadabbur-store.json"));
        let (store, store_error) = match LocalStore::open(store_path.clone()) {
            Ok(store) => (store, None),
            Err(err_msg) => {
                log::warn!("{}; starting with an empty store", err_msg);
                (LocalStore::fresh(store_path), Some(err_msg))
            }
        };

        let client = Arc::new(ApiClient::new(&config.api_base_url));
        let loader = ChapterLoader::new(client);
        loader.fetch_chapter_directory(cc.egui_ctx.clone());

        let translation_selection = store.translation_selection().to_vec();
        let startup_chapter = cli.chapter.or(store.last_chapter());

        let mut app = TadabburApp {
            config,
            config_error,
            cli_notes_dir: cli.notes_dir,
            store,
            store_error,
            loader,
            chapters: Vec::new(),
            chapters_error: None,
            selected_chapter: None,
            translation_selection,
            load_state: LoadState::Idle,
            current: None,
            sync: SyncController::new(),
            pending_restore: None,
            notes_chapter: None,
            notes_text: String::new(),
            notes_tab: NotesTab::Editor,
            editor_selection: (0, 0),
            md_cache: CommonMarkCache::default(),
            batch_status: None,
        };
        if let Some(chapter_id) = startup_chapter {
            app.begin_chapter_load(chapter_id, cc.egui_ctx.clone());
        }
        app
    }

    fn notes_dir(&self) -> Option<PathBuf> {
        self.cli_notes_dir
            .clone()
            .or_else(|| self.config.notes_dir.clone())
    }

    fn begin_chapter_load(&mut self, chapter_id: u32, ctx: egui::Context) {
        self.selected_chapter = Some(chapter_id);
        // Indicator goes up immediately; cleared exactly once when this
        // load's event lands (or when a newer load replaces it).
        self.load_state = LoadState::Loading;
        self.current = None;
        let (_token, effective) =
            self.loader
                .start_load(chapter_id, &self.translation_selection, ctx);
        if effective != self.translation_selection {
            // The default got substituted; reflect it into the preference so
            // later loads reuse it without asking.
            self.translation_selection = effective;
            if let Err(err_msg) = self
                .store
                .set_translation_selection(self.translation_selection.clone())
            {
                log::warn!("failed to persist translation selection: {}", err_msg);
            }
        }
    }

    fn retry_load(&mut self, ctx: egui::Context) {
        if let Some(chapter_id) = self.selected_chapter {
            self.begin_chapter_load(chapter_id, ctx);
        }
    }

    fn toggle_translation(&mut self, id: &str, ctx: egui::Context) {
        match self.translation_selection.iter().position(|s| s == id) {
            Some(existing) => {
                self.translation_selection.remove(existing);
            }
            None => self.translation_selection.push(id.to_string()),
        }
        if let Err(err_msg) = self
            .store
            .set_translation_selection(self.translation_selection.clone())
        {
            log::warn!("failed to persist translation selection: {}", err_msg);
        }
        if let Some(chapter_id) = self.selected_chapter {
            // Keep the reader's place across the re-render.
            self.pending_restore = self.sync.anchor_verse();
            self.begin_chapter_load(chapter_id, ctx);
        }
    }

    fn apply_load_event(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::ChapterDirectory(Ok(chapters)) => {
                self.chapters = chapters;
                self.chapters_error = None;
            }
            LoadEvent::ChapterDirectory(Err(e)) => {
                e.log("surah list");
                self.chapters_error =
                    Some("Failed to load surah list. Please try again later.".to_string());
            }
            LoadEvent::Chapter { result, .. } => match *result {
                Ok(loaded) => self.apply_loaded_chapter(loaded),
                Err(e) => {
                    e.log("chapter load");
                    self.current = None;
                    self.load_state = LoadState::Failed {
                        message: e.to_string(),
                    };
                }
            },
        }
    }

    fn apply_loaded_chapter(&mut self, loaded: LoadedChapter) {
        let original_order: Vec<u32> = loaded
            .original_verses
            .iter()
            .map(|verse| verse.verse_number)
            .collect();
        let translation_order: Vec<u32> = loaded
            .aggregated_verses
            .iter()
            .map(|verse| verse.verse_number)
            .collect();
        self.sync.rebuild(original_order, translation_order);

        self.notes_chapter = Some(loaded.chapter_id);
        self.notes_text = self.store.note(loaded.chapter_id);
        if let Err(err_msg) = self.store.set_last_chapter(loaded.chapter_id) {
            log::warn!("failed to persist last chapter: {}", err_msg);
        }

        self.current = Some(loaded);
        self.load_state = LoadState::Ready;

        if let Some(anchor) = self.pending_restore.take() {
            // Re-runs the highlight/scroll step; the scroll itself fires on
            // the first frame where the verse element has a layout.
            self.sync.select_verse(anchor);
        }
    }

    fn save_notes(&mut self) {
        if let Some(chapter_id) = self.notes_chapter {
            if let Err(err_msg) = self.store.set_note(chapter_id, &self.notes_text) {
                log::warn!(
                    "failed to save notes for chapter {}: {}",
                    chapter_id,
                    err_msg
                );
            }
        }
    }

    fn apply_markdown_command(&mut self, ctx: &egui::Context, command: MarkdownCommand) {
        let edit = apply_command(&self.notes_text, self.editor_selection, command);
        self.notes_text = edit.text;
        self.save_notes();

        let id = notes_editor_id();
        if let Some(mut state) = egui::TextEdit::load_state(ctx, id) {
            let cursor = egui::text::CCursor::new(edit.cursor);
            state
                .cursor
                .set_char_range(Some(egui::text::CCursorRange::one(cursor)));
            egui::TextEdit::store_state(ctx, id, state);
        }
        ctx.memory_mut(|memory| memory.request_focus(id));
        self.editor_selection = (edit.cursor, edit.cursor);
    }

    fn remember_notes_dir(&mut self, dir: &Path) {
        let display = dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());
        if let Err(err_msg) = self.store.set_notes_dir_name(&display) {
            log::warn!("failed to persist notes dir name: {}", err_msg);
        }
    }

    fn export_notes(&mut self) {
        let Some(dir) = self.notes_dir() else {
            self.batch_status = Some(NOTES_DIR_MISSING_MSG.to_string());
            return;
        };
        let names: Vec<(u32, String)> = self
            .chapters
            .iter()
            .map(|chapter| (chapter.id, chapter.name_simple.clone()))
            .collect();
        match exchange::export_notes(&self.store, &names, &dir) {
            Ok(report) => {
                self.batch_status = Some(report.summary("Exported"));
                self.remember_notes_dir(&dir);
            }
            Err(err_msg) => {
                log::error!("{}", err_msg);
                self.batch_status = Some(err_msg);
            }
        }
    }

    fn import_notes(&mut self) {
        let Some(dir) = self.notes_dir() else {
            self.batch_status = Some(NOTES_DIR_MISSING_MSG.to_string());
            return;
        };
        match exchange::import_notes(&mut self.store, &dir) {
            Ok(report) => {
                self.batch_status = Some(report.summary("Imported"));
                self.remember_notes_dir(&dir);
                // The open chapter's note may just have changed under us.
                if let Some(chapter_id) = self.notes_chapter {
                    self.notes_text = self.store.note(chapter_id);
                }
            }
            Err(err_msg) => {
                log::error!("{}", err_msg);
                self.batch_status = Some(err_msg);
            }
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Export notes to directory").clicked() {
                    self.export_notes();
                    ui.close_menu();
                }
                if ui.button("Import notes from directory").clicked() {
                    self.import_notes();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Tadabbur");
        ui.separator();

        ui.collapsing("Configuration", |ui| {
            if let Some(err) = &self.config_error {
                ui.colored_label(egui::Color32::RED, err);
            } else {
                ui.label(format!("API: {}", self.config.api_base_url));
            }
            if let Some(err) = &self.store_error {
                ui.colored_label(egui::Color32::RED, err);
            }
            match self.notes_dir() {
                Some(dir) => ui.label(format!("Notes dir: {}", dir.display())),
                None => ui.label("Notes dir: not configured"),
            };
            if let Some(name) = self.store.notes_dir_name() {
                ui.label(format!("Last used notes dir: {}", name));
            }
        });
        ui.separator();

        ui.label("Surah:");
        let selected_label = self
            .selected_chapter
            .and_then(|id| self.chapters.iter().find(|chapter| chapter.id == id))
            .map(|chapter| chapter.selector_label())
            .unwrap_or_else(|| "Select Surah...".to_string());
        let mut chosen: Option<u32> = None;
        egui::ComboBox::from_id_source("surah_selector")
            .width(240.0)
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                for chapter in &self.chapters {
                    let is_selected = self.selected_chapter == Some(chapter.id);
                    if ui
                        .selectable_label(is_selected, chapter.selector_label())
                        .clicked()
                        && !is_selected
                    {
                        chosen = Some(chapter.id);
                    }
                }
            });
        if self.chapters.is_empty() && self.chapters_error.is_none() {
            ui.label("Loading surah list...");
        }
        if let Some(err) = self.chapters_error.clone() {
            ui.colored_label(egui::Color32::RED, err);
            if ui.button("Retry").clicked() {
                self.chapters_error = None;
                self.loader.fetch_chapter_directory(ui.ctx().clone());
            }
        }
        if let Some(chapter_id) = chosen {
            self.begin_chapter_load(chapter_id, ui.ctx().clone());
        }

        ui.add_space(8.0);
        ui.label("Translations (shown in the order you pick them):");
        let mut toggled: Option<&str> = None;
        for (id, name) in TRANSLATION_CATALOG.iter().copied() {
            let position = self.translation_selection.iter().position(|s| s == id);
            let mut checked = position.is_some();
            let label = match position {
                Some(index) => format!("{}. {}", index + 1, name),
                None => name.to_string(),
            };
            if ui.checkbox(&mut checked, label).changed() {
                toggled = Some(id);
            }
        }
        if let Some(id) = toggled {
            self.toggle_translation(id, ui.ctx().clone());
        }

        ui.add_space(8.0);
        ui.label("Jump to verse:");
        let jump_label = self
            .sync
            .highlighted()
            .map(|verse| format!("Verse {}", verse))
            .unwrap_or_else(|| "Select a verse".to_string());
        let mut jump: Option<u32> = None;
        egui::ComboBox::from_id_source("verse_selector")
            .selected_text(jump_label)
            .show_ui(ui, |ui| {
                for &verse in self.sync.pane(PaneSide::Original).verse_numbers() {
                    let is_current = self.sync.highlighted() == Some(verse);
                    if ui
                        .selectable_label(is_current, format!("Verse {}", verse))
                        .clicked()
                    {
                        jump = Some(verse);
                    }
                }
            });
        if let Some(verse) = jump {
            self.sync.select_verse(verse);
        }

        if let Some(status) = &self.batch_status {
            ui.separator();
            ui.label(status.clone());
        }
    }

    fn show_original_pane(&mut self, ui: &mut egui::Ui) -> Option<u32> {
        match self.load_state.clone() {
            LoadState::Idle => {
                ui.centered_and_justified(|ui| {
                    ui.label("Select a Surah to begin reading.");
                });
                None
            }
            LoadState::Loading => {
                show_loading(ui);
                None
            }
            LoadState::Failed { message } => {
                if show_error_view(ui, &message, true) {
                    self.retry_load(ui.ctx().clone());
                }
                None
            }
            LoadState::Ready => {
                let Self { current, sync, .. } = self;
                let Some(loaded) = current.as_ref() else {
                    return None;
                };

                ui.vertical_centered(|ui| {
                    ui.heading(
                        egui::RichText::new(format!("سورة {}", loaded.meta.name_arabic))
                            .size(26.0),
                    );
                    ui.label(format!("آيات {}", loaded.original_verses.len()));
                });
                ui.separator();

                let mut clicked = None;
                egui::ScrollArea::vertical()
                    .id_source("original_pane_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        sync.begin_pane_frame(PaneSide::Original, ui.clip_rect());
                        for verse in &loaded.original_verses {
                            let response =
                                verse_row(ui, sync, PaneSide::Original, verse.verse_number, |ui| {
                                    ui.label(
                                        egui::RichText::new(format!(
                                            "{} ({})",
                                            verse.text, verse.verse_number
                                        ))
                                        .size(22.0),
                                    );
                                });
                            if response.clicked() {
                                clicked = Some(verse.verse_number);
                            }
                        }
                    });
                clicked
            }
        }
    }

    fn show_translation_pane(&mut self, ui: &mut egui::Ui) -> Option<u32> {
        match self.load_state.clone() {
            LoadState::Idle => None,
            LoadState::Loading => {
                show_loading(ui);
                None
            }
            LoadState::Failed { message } => {
                show_error_view(ui, &message, false);
                None
            }
            LoadState::Ready => {
                let Self { current, sync, .. } = self;
                let Some(loaded) = current.as_ref() else {
                    return None;
                };

                ui.vertical_centered(|ui| {
                    ui.heading(format!(
                        "Surah {}, Chapter {}",
                        loaded.meta.name_simple, loaded.chapter_id
                    ));
                    ui.label(format!("{} verses", loaded.aggregated_verses.len()));
                });
                ui.separator();

                let mut clicked = None;
                egui::ScrollArea::vertical()
                    .id_source("translation_pane_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        sync.begin_pane_frame(PaneSide::Translation, ui.clip_rect());
                        for verse in &loaded.aggregated_verses {
                            let response = verse_row(
                                ui,
                                sync,
                                PaneSide::Translation,
                                verse.verse_number,
                                |ui| {
                                    ui.label(
                                        egui::RichText::new(format!(
                                            "Verse {}",
                                            verse.verse_number
                                        ))
                                        .small()
                                        .strong(),
                                    );
                                    for (slot, id) in verse.slots.iter().zip(&loaded.selection) {
                                        if let Some(fragment) = slot {
                                            if loaded.selection.len() > 1 {
                                                ui.label(
                                                    egui::RichText::new(translation_name(id))
                                                        .small()
                                                        .weak(),
                                                );
                                            }
                                            ui.label(fragment.text.clone());
                                        }
                                    }
                                },
                            );
                            if response.clicked() {
                                clicked = Some(verse.verse_number);
                            }
                        }
                    });
                clicked
            }
        }
    }

    fn show_notes_pane(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.notes_tab == NotesTab::Editor, "Editor")
                .clicked()
            {
                self.notes_tab = NotesTab::Editor;
            }
            if ui
                .selectable_label(self.notes_tab == NotesTab::Preview, "Preview")
                .clicked()
            {
                self.notes_tab = NotesTab::Preview;
            }
        });
        ui.separator();

        if let Some(chapter_id) = self.notes_chapter {
            let name = self
                .chapters
                .iter()
                .find(|chapter| chapter.id == chapter_id)
                .map(|chapter| chapter.name_simple.clone())
                .unwrap_or_else(|| format!("{}", chapter_id));
            ui.label(format!("Notes — Surah {}", name));
        } else {
            ui.label("Notes are saved per Surah; load one to start writing.");
        }
        ui.add_space(4.0);

        match self.notes_tab {
            NotesTab::Editor => {
                ui.horizontal_wrapped(|ui| {
                    for command in MarkdownCommand::ALL {
                        if ui
                            .button(command.button_label())
                            .on_hover_text(command.description())
                            .clicked()
                        {
                            self.apply_markdown_command(ui.ctx(), command);
                        }
                    }
                });
                ui.add_space(4.0);
                egui::ScrollArea::vertical()
                    .id_source("notes_editor_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let output = egui::TextEdit::multiline(&mut self.notes_text)
                            .id(notes_editor_id())
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY)
                            .desired_rows(24)
                            .hint_text("Write your reflections here...")
                            .show(ui);
                        if output.response.changed() {
                            self.save_notes();
                        }
                        if let Some(range) = output.state.cursor.char_range() {
                            let (a, b) = (range.primary.index, range.secondary.index);
                            self.editor_selection = (a.min(b), a.max(b));
                        }
                    });
            }
            NotesTab::Preview => {
                let Self {
                    md_cache,
                    notes_text,
                    ..
                } = self;
                egui::ScrollArea::vertical()
                    .id_source("notes_preview_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        CommonMarkViewer::new("notes_preview").show(ui, md_cache, notes_text);
                    });
            }
        }
    }

    fn show_status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            match &self.current {
                Some(loaded) => ui.label(format!("Surah {}", loaded.meta.name_simple)),
                None => ui.label("No surah loaded"),
            };
            ui.separator();
            ui.label(format!("Store: {}", self.store.path().display()));
        });
    }
}

impl App for TadabburApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Some(event) = self.loader.poll() {
            self.apply_load_event(event);
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.show_menu(ui);
        });
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.show_status_bar(ui);
        });
        egui::SidePanel::left("controls_panel")
            .min_width(240.0)
            .default_width(280.0)
            .show(ctx, |ui| {
                self.show_controls(ui);
            });

        let clicked = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let clicked_original = egui::SidePanel::left("pane_original")
                    .resizable(true)
                    .default_width(420.0)
                    .min_width(240.0)
                    .show_inside(ui, |ui| self.show_original_pane(ui))
                    .inner;
                egui::SidePanel::right("pane_notes")
                    .resizable(true)
                    .default_width(360.0)
                    .min_width(240.0)
                    .show_inside(ui, |ui| {
                        self.show_notes_pane(ui);
                    });
                let clicked_translation = egui::CentralPanel::default()
                    .show_inside(ui, |ui| self.show_translation_pane(ui))
                    .inner;
                clicked_original.or(clicked_translation)
            })
            .inner;

        if let Some(verse) = clicked {
            // A click highlights and cross-scrolls both panes, and moves the
            // independent "selected" mark, which never scrolls.
            self.sync.select_verse(verse);
            self.sync.mark_selected(verse);
        }
    }
}

/// One clickable verse element. Records its layout with the controller and
/// consumes a pending scroll on the frame the element actually exists.
fn verse_row(
    ui: &mut egui::Ui,
    sync: &mut SyncController,
    side: PaneSide,
    verse_number: u32,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> egui::Response {
    let highlight_fill = ui.visuals().selection.bg_fill.gamma_multiply(0.35);
    let selected_stroke_color = ui.visuals().selection.stroke.color;

    let fill = if sync.is_highlighted(verse_number) {
        highlight_fill
    } else {
        egui::Color32::TRANSPARENT
    };
    let stroke = if sync.is_selected(verse_number) {
        egui::Stroke::new(1.0, selected_stroke_color)
    } else {
        egui::Stroke::NONE
    };

    let response = egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(8.0, 6.0))
        .outer_margin(egui::Margin::symmetric(2.0, 2.0))
        .show(ui, add_contents)
        .response
        .interact(egui::Sense::click());

    sync.note_rendered(side, verse_number, response.rect);
    if sync.take_scroll(side, verse_number) {
        response.scroll_to_me(Some(egui::Align::Center));
    }
    response
}

fn show_loading(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.add(egui::Spinner::new().size(28.0));
        ui.label("Loading...");
    });
}

fn show_error_view(ui: &mut egui::Ui, message: &str, with_retry: bool) -> bool {
    let mut retry = false;
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.colored_label(egui::Color32::RED, message);
        if with_retry && ui.button("Retry").clicked() {
            retry = true;
        }
    });
    retry
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let cli = Cli::parse();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1500.0, 900.0])
            .with_min_inner_size([1000.0, 650.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Tadabbur — Quran Study",
        options,
        Box::new(move |cc| Box::new(TadabburApp::new(cc, cli))),
    )
}
