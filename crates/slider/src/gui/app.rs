use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::stage::{self, STAGE_HEIGHT, Stage, model::load_image};
use crate::gui::theme::{self, ThemeColors};
use carousel::{Carousel, Deck, Navigation, TransitionTicket};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::iter::zip;
use std::rc::Rc;
use std::time::Instant;

pub struct AppModel {
    pub stage: Rc<RefCell<Stage>>,
    pub title: String,
    pub drawing_area: gtk::DrawingArea,
    pub dots: Vec<gtk::Button>,
}

#[derive(Debug)]
pub enum AppMsg {
    DotClicked(usize),
    Goto(usize),
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Goto(index) => AppMsg::Goto(index),
        }
    }
}

#[relm4::component(pub)]
impl Component for AppModel {
    type Init = (Config, Deck, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();
    type CommandOutput = TransitionTicket;

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some(&model.title),
            set_default_size: (1200, 520),
            add_css_class: "slider-window",

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 24,
                set_margin_top: 48,
                set_margin_bottom: 48,
                set_margin_start: 24,
                set_margin_end: 24,

                gtk::Label {
                    set_label: &model.title,
                    add_css_class: "slider-title",
                },

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_content_height: STAGE_HEIGHT,
                    add_css_class: "slider-stage",
                },

                #[name = "dots_box"]
                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_halign: gtk::Align::Center,
                    set_spacing: 16,
                    add_css_class: "dots-container",
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, deck, rx) = init;

        theme::load_css();

        let config_dir = config::get_config_dir().ok();
        let images = deck
            .iter()
            .map(|card| {
                load_image(&config::resolve_image_path(
                    card.image.as_str(),
                    config_dir.as_deref(),
                ))
            })
            .collect();
        let stage = Rc::new(RefCell::new(Stage::new(Carousel::new(deck), images)));

        let model = AppModel {
            stage,
            title: config.title,
            drawing_area: gtk::DrawingArea::default(),
            dots: Vec::new(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let stage_draw = model.stage.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = stage::draw(
                    cr,
                    &stage_draw.borrow(),
                    &colors,
                    width as f64,
                    height as f64,
                    Instant::now(),
                ) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let dot_descriptors: Vec<_> = model.stage.borrow().carousel.dots().collect();
        model.dots = dot_descriptors
            .into_iter()
            .map(|dot| {
                let button = gtk::Button::new();
                button.add_css_class("dot");
                button.set_tooltip_text(Some(&dot.label));
                button.update_property(&[gtk::accessible::Property::Label(&dot.label)]);

                let sender = sender.clone();
                let index = dot.index;
                button.connect_clicked(move |_| sender.input(AppMsg::DotClicked(index)));

                widgets.dots_box.append(&button);
                button
            })
            .collect();
        model.sync_dots();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>, _root: &Self::Root) {
        match msg {
            AppMsg::DotClicked(index) => self.navigate(index, &sender),
            AppMsg::Goto(index) => {
                let (valid, len) = {
                    let stage = self.stage.borrow();
                    (stage.carousel.contains_index(index), stage.carousel.len())
                };
                if valid {
                    self.navigate(index, &sender);
                } else {
                    log::warn!("Ignoring goto {}: only {} cards", index, len);
                }
            }
        }
    }

    fn update_cmd(
        &mut self,
        ticket: Self::CommandOutput,
        _sender: ComponentSender<Self>,
        _root: &Self::Root,
    ) {
        if self.stage.borrow_mut().finish_transition(ticket) {
            log::debug!("Transition finished");
        }
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        if self.stage.borrow().carousel.is_transitioning() {
            log::debug!("Shutting down mid-transition, pending unlock dropped");
        }
    }
}

impl AppModel {
    fn navigate(&mut self, index: usize, sender: &ComponentSender<Self>) {
        let nav = self.stage.borrow_mut().navigate(index, Instant::now());
        if let Navigation::Accepted { ticket, .. } = nav {
            // commands are dropped when the component shuts down
            sender.oneshot_command(stage::unlock_after(ticket));
            self.sync_dots();
            self.animate();
        }
    }

    fn sync_dots(&self) {
        let stage = self.stage.borrow();
        for (button, dot) in zip(&self.dots, stage.carousel.dots()) {
            if dot.active {
                button.add_css_class("active");
            } else {
                button.remove_css_class("active");
            }
        }
    }

    fn animate(&self) {
        let stage = self.stage.clone();
        self.drawing_area.add_tick_callback(move |area, _clock| {
            area.queue_draw();
            if stage.borrow().is_animating(Instant::now()) {
                glib::ControlFlow::Continue
            } else {
                glib::ControlFlow::Break
            }
        });
    }
}
