use crate::canvas::Canvas;
use crate::config::GraphConfig;
use crate::controller::{Control, InteractionController};
use crate::point::PointId;
use anyhow::Context as _;
use clipboard::ClipboardContext;
use clipboard::ClipboardProvider;
use egui::{Color32, Context, Response, Ui};
use std::path::Path;

pub struct LineGrapherApp {
    canvas: Canvas,
    controller: InteractionController,
    texture: Option<egui::TextureHandle>,
    clipboard: Option<ClipboardContext>,
}

impl LineGrapherApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: GraphConfig) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.visuals = egui::Visuals::light();
        cc.egui_ctx.set_style(style);

        let clipboard = match ClipboardProvider::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err}");
                None
            }
        };

        let (width, height) = config.surface_size();
        Self {
            canvas: Canvas::new(width, height),
            controller: InteractionController::new(&config),
            texture: None,
            clipboard,
        }
    }

    pub fn copy_to_clipboard(&mut self, text: String) -> bool {
        if let Some(clipboard) = &mut self.clipboard {
            clipboard.set_contents(text).is_ok()
        } else {
            false
        }
    }

    fn export_png(&self, path: &Path) -> anyhow::Result<()> {
        self.controller
            .renderer()
            .surface()
            .image()
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    fn upload_texture(&mut self, ctx: &Context) {
        let dirty = self.controller.renderer_mut().take_dirty();
        if !dirty && self.texture.is_some() {
            return;
        }
        let image = self.controller.renderer().surface().to_color_image();
        if let Some(texture) = &mut self.texture {
            texture.set(image, egui::TextureOptions::LINEAR);
        } else {
            self.texture = Some(ctx.load_texture("graph", image, egui::TextureOptions::LINEAR));
        }
    }

    // Pointer input is handled before painting so the frame shows the new state.
    fn handle_canvas_interactions(&mut self, ui: &Ui, response: &Response) {
        let (pressed, released, interact_pos, hover_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
                i.pointer.hover_pos(),
            )
        });

        if pressed && response.hovered() {
            if let Some(pos) = interact_pos {
                let canvas_pos = self.canvas.screen_to_canvas_pos(pos);
                self.controller.pointer_down(canvas_pos);
            }
        }

        if let Some(id) = self.controller.state().dragging() {
            if let Some(pos) = hover_pos {
                let canvas_pos = self.canvas.screen_to_canvas_pos(pos);
                if canvas_pos != self.controller.state().point(id).position {
                    self.controller.pointer_move(canvas_pos);
                }
            }
        }

        if released {
            self.controller.pointer_up();
        }
    }

    fn draw_canvas(&mut self, ui: &mut Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

        // Window resizes and scrolling both move the panel rect.
        if self.canvas.set_view_rect(response.rect) {
            let (width, height) = self.canvas.get_size();
            self.controller.relayout(width, height);
        }

        self.handle_canvas_interactions(ui, &response);
        self.upload_texture(ui.ctx());

        painter.rect_filled(response.rect, 0.0, Color32::from_rgb(240, 240, 240));
        if let Some(texture) = &self.texture {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture.id(), self.canvas.get_screen_rect(), uv, Color32::WHITE);
        }

        let zoom = self.canvas.get_zoom();
        for id in PointId::ALL {
            let point = self.controller.state().point(id);
            let screen_pos = self.canvas.canvas_to_screen_pos(point.position);
            painter.text(
                screen_pos + egui::vec2((point.radius + 6.0) * zoom, 0.0),
                egui::Align2::LEFT_CENTER,
                self.controller.labels().coordinates(id),
                egui::FontId::default(),
                Color32::BLACK,
            );
        }
    }

    fn step_row(
        &mut self,
        ui: &mut Ui,
        label: &str,
        value: String,
        (down, up): (Control, Control),
        enabled: bool,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.monospace(value);
            if ui.add_enabled(enabled, egui::Button::new("-")).clicked() {
                self.controller.apply(down);
            }
            if ui.add_enabled(enabled, egui::Button::new("+")).clicked() {
                self.controller.apply(up);
            }
        });
    }
}

fn point_color(color: image::Rgba<u8>) -> Color32 {
    let [r, g, b, _] = color.0;
    Color32::from_rgb(r, g, b)
}

impl eframe::App for LineGrapherApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Line Grapher");
                ui.separator();
                if ui.button("Reset Points").clicked() {
                    self.controller.apply(Control::Reset);
                }
                if ui.button("Export PNG").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .set_file_name("graph.png")
                        .add_filter("PNG", &["png"])
                        .save_file()
                    {
                        match self.export_png(&path) {
                            Ok(()) => tracing::info!(path = %path.display(), "exported graph"),
                            Err(err) => tracing::error!("{err:#}"),
                        }
                    }
                }
            });
        });

        egui::SidePanel::right("settings_panel")
            .resizable(true)
            .default_width(250.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.heading("Line");
                    ui.separator();

                    let vertical = self.controller.state().line().is_vertical();
                    let slope = self.controller.labels().slope.clone();
                    let intercept = self.controller.labels().intercept.clone();
                    self.step_row(
                        ui,
                        "Slope (m):",
                        slope,
                        (Control::DecreaseSlope, Control::IncreaseSlope),
                        !vertical,
                    );
                    self.step_row(
                        ui,
                        "Y-intercept (b):",
                        intercept,
                        (Control::DecreaseIntercept, Control::IncreaseIntercept),
                        true,
                    );

                    ui.horizontal(|ui| {
                        let equation = self.controller.labels().equation.clone();
                        ui.monospace(equation.as_str());
                        if ui.button("Copy").clicked() {
                            self.copy_to_clipboard(equation);
                        }
                    });

                    ui.separator();
                    ui.heading("Points");

                    for (id, name) in [(PointId::First, "Point 1"), (PointId::Second, "Point 2")] {
                        let color = point_color(self.controller.state().point(id).color);
                        let coords = self.controller.labels().coordinates(id).to_string();
                        ui.horizontal(|ui| {
                            ui.colored_label(color, name);
                            ui.label(coords.as_str());
                            if ui.button("Copy").clicked() {
                                self.copy_to_clipboard(coords.clone());
                            }
                        });
                    }

                    ui.separator();

                    ui.collapsing("Help", |ui| {
                        ui.label("• Drag either point to move the line");
                        ui.label("• +/- next to the slope turn point 2 around the origin");
                        ui.label("• +/- next to the intercept shift both points up or down");
                        ui.label("• Slope controls are disabled while the line is vertical");
                        ui.label("• 'Reset Points' puts both points back to their start");
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });
    }
}
